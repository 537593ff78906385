//! Type resolution — pluggable resolvers and their configurable factory.
//!
//! During an import, type names turn up that are not part of the unit
//! under analysis. A **resolver** may supply a descriptor for such a name;
//! which resolver runs is decided by configuration:
//!
//! ```text
//! ResolutionConfig (resolver id + args)
//!   ↓  ResolverFactory::create()
//!   ↓  provider chain: context scopes → built-in registry
//! Box<dyn TypeResolver>
//!   ↓  set_uri_importer()          (engine attaches its callback)
//!   ↓  try_resolve("a.b.C")        (per missing name)
//! Option<TypeDescriptor>
//! ```
//!
//! Built-ins: the no-op resolver (always declines) and the search-path
//! resolver (descriptor files under configured roots). Embedders register
//! their own constructors in a [`ResolverRegistry`] or push one as a
//! thread-scoped context registry.

pub mod context;
pub mod error;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod search_path;

// Re-exports
pub use context::{push_context_registry, ContextProvider, ContextRegistryGuard};
pub use error::{ConstructorInvocationError, ResolverConfigurationError};
pub use factory::ResolverFactory;
pub use registry::{
    ConstructorError, ConstructorProvider, LookupError, ResolverEntry, ResolverRegistry,
    NO_OP_RESOLVER_ID, SEARCH_PATH_RESOLVER_ID,
};
pub use resolver::{NoOpResolver, TypeResolver, TypeUriImporter};
pub use search_path::{SearchPathResolver, TYPE_PATH_ENV};
