//! Context-scoped constructor registries.
//!
//! A thread can push a registry for the duration of a scope; the factory's
//! default provider chain consults pushed scopes (innermost first) before
//! the built-in registry. This is how an embedder makes runtime-provided
//! resolvers discoverable without registering them process-wide: push a
//! scope around the import, let the guard pop it afterwards.

use std::cell::RefCell;
use std::sync::Arc;

use super::registry::{ConstructorProvider, ResolverEntry, ResolverRegistry};

thread_local! {
    /// Stack of scoped registries, innermost last.
    static CONTEXT_REGISTRIES: RefCell<Vec<Arc<ResolverRegistry>>> = const { RefCell::new(Vec::new()) };
}

/// Push `registry` onto the current thread's context stack.
///
/// The registry stays active until the returned guard drops. Guards must
/// drop in reverse push order; letting them escape their scope pops the
/// wrong entry.
#[must_use = "the registry is popped when the guard is dropped"]
pub fn push_context_registry(registry: ResolverRegistry) -> ContextRegistryGuard {
    CONTEXT_REGISTRIES.with(|stack| stack.borrow_mut().push(Arc::new(registry)));
    ContextRegistryGuard { _private: () }
}

/// Pops its registry from the context stack on drop.
#[derive(Debug)]
pub struct ContextRegistryGuard {
    _private: (),
}

impl Drop for ContextRegistryGuard {
    fn drop(&mut self) {
        CONTEXT_REGISTRIES.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Provider serving lookups from the thread's context stack, innermost
/// scope first.
#[derive(Debug, Default)]
pub struct ContextProvider;

impl ConstructorProvider for ContextProvider {
    fn lookup(&self, identifier: &str) -> Option<ResolverEntry> {
        CONTEXT_REGISTRIES.with(|stack| {
            stack
                .borrow()
                .iter()
                .rev()
                .find_map(|registry| registry.lookup(identifier))
        })
    }
}
