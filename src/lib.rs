//! # archscope
//!
//! Configurable type-resolution layer for static architecture analysis.
//!
//! When an import encounters a type name that is not part of the unit
//! under analysis, a pluggable **resolver** may supply a
//! [`TypeDescriptor`] for it. This crate provides the resolver surface,
//! the built-in resolvers, and the configuration-driven factory that
//! selects and constructs one:
//!
//! ```rust
//! use archscope::config::ResolutionConfig;
//! use archscope::resolution::{ResolverFactory, TypeResolver};
//!
//! let factory = ResolverFactory::new();
//!
//! // Nothing configured: the no-op resolver, which always declines.
//! let mut resolver = factory.create(&ResolutionConfig::default()).unwrap();
//! assert!(resolver.try_resolve("shop.billing.Invoice").is_none());
//!
//! // The built-in search-path resolver over explicit descriptor roots.
//! let entry = ResolutionConfig::for_resolver(
//!     archscope::resolution::SEARCH_PATH_RESOLVER_ID,
//!     vec!["descriptors".to_string()],
//! );
//! let resolver = factory.create(&entry).unwrap();
//! # drop(resolver);
//! ```
//!
//! Third-party resolvers are registered under a namespaced identifier in a
//! [`ResolverRegistry`](resolution::ResolverRegistry), either process-wide
//! or as a thread-scoped context registry consulted first.

pub mod config;
pub mod descriptor;
pub mod resolution;

// Re-exports
pub use config::{Configuration, ResolutionConfig};
pub use descriptor::{TypeDescriptor, TypeKind, TypeUri};
pub use resolution::{
    NoOpResolver, ResolverConfigurationError, ResolverFactory, ResolverRegistry,
    SearchPathResolver, TypeResolver, TypeUriImporter,
};

/// Library version.
pub const VERSION: &str = "0.1.0";
