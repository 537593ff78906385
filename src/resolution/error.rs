//! Resolver configuration errors.
//!
//! Every failure mode of resolver construction surfaces as one
//! [`ResolverConfigurationError`] carrying a human-readable message and a
//! preserved cause chain. These errors are deterministic and fatal to the
//! calling setup step; nothing here is retried.

use thiserror::Error;

use super::registry::{ConstructorError, LookupError};

/// Wraps the error a resolver constructor itself failed with.
///
/// Kept as a distinct level so callers can walk the full chain:
/// configuration error → invocation wrapper → the constructor's own error.
#[derive(Debug, Error)]
#[error("invoking the registered constructor for '{identifier}' failed")]
pub struct ConstructorInvocationError {
    /// Identifier whose constructor failed.
    pub identifier: String,

    /// The error the constructor returned.
    #[source]
    pub source: ConstructorError,
}

/// Raised by [`ResolverFactory::create`](super::factory::ResolverFactory::create)
/// when a configuration entry cannot be turned into a resolver.
#[derive(Debug, Error)]
pub enum ResolverConfigurationError {
    /// No provider knows the configured identifier.
    #[error("Error loading resolver class {name}")]
    LookupFailure {
        /// The configured identifier.
        name: String,
        #[source]
        source: LookupError,
    },

    /// The registration lacks the constructor shape the configured
    /// arguments require.
    #[error(
        "resolver class {name} has no constructor taking a single list of string arguments, \
         to accept configured parameters [{}]",
        quote_args(.args)
    )]
    ConstructorMismatch {
        /// The configured identifier.
        name: String,
        /// The configured constructor arguments.
        args: Vec<String>,
    },

    /// The selected constructor returned an error.
    #[error(
        "resolver class {name} threw an error in constructor {simple_name}({})",
        quote_args(.args)
    )]
    ConstructionFailure {
        /// The configured identifier.
        name: String,
        /// Segment after the last `:` of the identifier.
        simple_name: String,
        /// The configured constructor arguments.
        args: Vec<String>,
        #[source]
        source: ConstructorInvocationError,
    },
}

/// `["too", "many"]` → `'too', 'many'`.
fn quote_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| format!("'{}'", arg))
        .collect::<Vec<_>>()
        .join(", ")
}
