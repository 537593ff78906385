//! Constructor registry — maps resolver identifiers to constructor closures.
//!
//! There is no runtime reflection: every constructible resolver is
//! registered under a namespaced identifier (`archscope:search-path`) with
//! up to two constructor shapes — no arguments, or a single ordered list of
//! string arguments. The factory consults a chain of
//! [`ConstructorProvider`]s, of which a registry is the usual tail.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::resolver::{NoOpResolver, TypeResolver};
use super::search_path::SearchPathResolver;

/// Identifier of the built-in no-op resolver.
pub const NO_OP_RESOLVER_ID: &str = "archscope:no-op";

/// Identifier of the built-in search-path resolver.
pub const SEARCH_PATH_RESOLVER_ID: &str = "archscope:search-path";

/// Error type a resolver constructor may fail with.
pub type ConstructorError = Box<dyn std::error::Error + Send + Sync>;

type NoArgsCtor = dyn Fn() -> Result<Box<dyn TypeResolver>, ConstructorError> + Send + Sync;
type WithArgsCtor =
    dyn Fn(Vec<String>) -> Result<Box<dyn TypeResolver>, ConstructorError> + Send + Sync;

/// The constructor shapes registered for one identifier.
///
/// Exactly two shapes exist; there is no partial matching between them and
/// no variadic adaptation. Which shape a `create` call requires is decided
/// solely by whether any arguments are configured.
#[derive(Clone, Default)]
pub struct ResolverEntry {
    no_args: Option<Arc<NoArgsCtor>>,
    with_args: Option<Arc<WithArgsCtor>>,
}

impl ResolverEntry {
    /// The no-argument constructor, if registered.
    pub fn no_args(&self) -> Option<&NoArgsCtor> {
        self.no_args.as_deref()
    }

    /// The argument-list constructor, if registered.
    pub fn with_args(&self) -> Option<&WithArgsCtor> {
        self.with_args.as_deref()
    }
}

impl fmt::Debug for ResolverEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverEntry")
            .field("no_args", &self.no_args.is_some())
            .field("with_args", &self.with_args.is_some())
            .finish()
    }
}

/// Raised when no provider knows an identifier.
#[derive(Debug, Error)]
#[error("no resolver constructor registered for identifier '{identifier}'")]
pub struct LookupError {
    /// The identifier that failed to resolve.
    pub identifier: String,
}

/// Source of constructor entries, consulted in order by the factory.
pub trait ConstructorProvider: Send + Sync {
    /// The entry registered for `identifier`, if this provider knows it.
    fn lookup(&self, identifier: &str) -> Option<ResolverEntry>;
}

/// Registry of resolver constructors indexed by namespaced identifier.
#[derive(Debug, Default)]
pub struct ResolverRegistry {
    entries: HashMap<String, ResolverEntry>,
}

impl ResolverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in resolvers registered.
    ///
    /// `archscope:no-op` takes no arguments; `archscope:search-path` offers
    /// both shapes — without arguments it reads the ambient type path, with
    /// arguments each argument is one search root.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_no_args(NO_OP_RESOLVER_ID, || Ok(Box::new(NoOpResolver::new())));
        registry.register_no_args(SEARCH_PATH_RESOLVER_ID, || {
            Ok(Box::new(SearchPathResolver::from_type_path()))
        });
        registry.register_with_args(SEARCH_PATH_RESOLVER_ID, |args| {
            Ok(Box::new(SearchPathResolver::from_args(&args)))
        });
        registry
    }

    /// Register the no-argument constructor shape for `identifier`.
    pub fn register_no_args<F>(&mut self, identifier: impl Into<String>, ctor: F)
    where
        F: Fn() -> Result<Box<dyn TypeResolver>, ConstructorError> + Send + Sync + 'static,
    {
        self.entries.entry(identifier.into()).or_default().no_args = Some(Arc::new(ctor));
    }

    /// Register the argument-list constructor shape for `identifier`.
    pub fn register_with_args<F>(&mut self, identifier: impl Into<String>, ctor: F)
    where
        F: Fn(Vec<String>) -> Result<Box<dyn TypeResolver>, ConstructorError>
            + Send
            + Sync
            + 'static,
    {
        self.entries.entry(identifier.into()).or_default().with_args = Some(Arc::new(ctor));
    }

    /// The entry registered for `identifier`.
    pub fn lookup(&self, identifier: &str) -> Option<ResolverEntry> {
        self.entries.get(identifier).cloned()
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConstructorProvider for ResolverRegistry {
    fn lookup(&self, identifier: &str) -> Option<ResolverEntry> {
        ResolverRegistry::lookup(self, identifier)
    }
}
