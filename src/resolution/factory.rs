//! The configurable resolver factory.
//!
//! Turns a [`ResolutionConfig`] entry into a live resolver:
//!
//! ```text
//! ResolutionConfig
//!   ↓  disabled, or nothing configured?  → no-op / search-path shortcut
//!   ↓  provider chain lookup             (context scopes, then registry)
//!   ↓  constructor shape selection       (no-arg vs. argument list)
//! Box<dyn TypeResolver>
//! ```
//!
//! Every failure surfaces as a
//! [`ResolverConfigurationError`] with a preserved cause chain; see
//! [`error`](super::error) for the taxonomy.

use crate::config::{self, ResolutionConfig};

use super::context::ContextProvider;
use super::error::{ConstructorInvocationError, ResolverConfigurationError};
use super::registry::{ConstructorProvider, LookupError, ResolverEntry, ResolverRegistry};
use super::resolver::{NoOpResolver, TypeResolver};
use super::search_path::SearchPathResolver;

/// Constructs resolvers from configuration entries.
///
/// Stateless beyond its provider chain: every [`create`](Self::create) call
/// reads the given configuration fresh and performs exactly one
/// instantiation attempt. No caching or pooling across calls.
pub struct ResolverFactory {
    providers: Vec<Box<dyn ConstructorProvider>>,
}

impl ResolverFactory {
    /// Factory with the default provider chain: context scopes first, then
    /// the built-in registry.
    pub fn new() -> Self {
        Self::with_registry(ResolverRegistry::with_defaults())
    }

    /// Default chain with `registry` as the built-in tail.
    pub fn with_registry(registry: ResolverRegistry) -> Self {
        Self::with_providers(vec![
            Box::new(ContextProvider) as Box<dyn ConstructorProvider>,
            Box::new(registry),
        ])
    }

    /// Fully custom provider chain, consulted in order.
    pub fn with_providers(providers: Vec<Box<dyn ConstructorProvider>>) -> Self {
        Self { providers }
    }

    /// Construct the resolver `config` describes.
    pub fn create(
        &self,
        config: &ResolutionConfig,
    ) -> Result<Box<dyn TypeResolver>, ResolverConfigurationError> {
        if !config.enabled {
            log::debug!("Resolution disabled, using the no-op resolver");
            return Ok(Box::new(NoOpResolver::new()));
        }
        let Some(identifier) = config.resolver.as_deref() else {
            return Ok(if config.resolve_missing_from_search_path {
                Box::new(SearchPathResolver::from_type_path())
            } else {
                Box::new(NoOpResolver::new())
            });
        };
        log::debug!(
            "Creating resolver {} with {} configured argument(s)",
            identifier,
            config.resolver_args.len()
        );
        let entry = self.lookup(identifier)?;
        construct(identifier, &entry, &config.resolver_args)
    }

    /// Construct the resolver described by the process-global configuration.
    pub fn create_from_global(
        &self,
    ) -> Result<Box<dyn TypeResolver>, ResolverConfigurationError> {
        let entry = config::global().resolution.clone();
        self.create(&entry)
    }

    fn lookup(&self, identifier: &str) -> Result<ResolverEntry, ResolverConfigurationError> {
        self.providers
            .iter()
            .find_map(|provider| provider.lookup(identifier))
            .ok_or_else(|| ResolverConfigurationError::LookupFailure {
                name: identifier.to_string(),
                source: LookupError {
                    identifier: identifier.to_string(),
                },
            })
    }
}

impl Default for ResolverFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Select the constructor shape the configured arguments require and invoke
/// it. Zero arguments require the no-arg shape, anything else the
/// argument-list shape; a missing required shape is a mismatch, with no
/// fallback between the shapes.
fn construct(
    identifier: &str,
    entry: &ResolverEntry,
    args: &[String],
) -> Result<Box<dyn TypeResolver>, ResolverConfigurationError> {
    let mismatch = || ResolverConfigurationError::ConstructorMismatch {
        name: identifier.to_string(),
        args: args.to_vec(),
    };

    let attempt = if args.is_empty() {
        let ctor = entry.no_args().ok_or_else(mismatch)?;
        ctor()
    } else {
        let ctor = entry.with_args().ok_or_else(mismatch)?;
        ctor(args.to_vec())
    };

    attempt.map_err(|source| ResolverConfigurationError::ConstructionFailure {
        name: identifier.to_string(),
        simple_name: simple_name(identifier).to_string(),
        args: args.to_vec(),
        source: ConstructorInvocationError {
            identifier: identifier.to_string(),
            source,
        },
    })
}

/// Segment after the last `:` of a namespaced identifier.
fn simple_name(identifier: &str) -> &str {
    identifier.rsplit(':').next().unwrap_or(identifier)
}
