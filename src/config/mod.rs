//! Configuration — resolver selection and type-path settings.
//!
//! Configuration reaches the factory as a plain [`ResolutionConfig`] value;
//! loading is the embedder's concern. This module provides the common
//! loaders: a YAML file in the working directory, environment-variable
//! overrides on top, and a process-global handle for embedders that want
//! one shared configuration.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{global, overwrite_global, Configuration, ResolutionConfig, CONFIG_FILE_NAME};
