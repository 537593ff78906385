//! Configuration model: YAML loading, environment overrides, global handle.

use std::env;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// File read from the working directory by [`Configuration::load`].
pub const CONFIG_FILE_NAME: &str = "archscope.yaml";

const ENV_RESOLVER: &str = "ARCHSCOPE_RESOLVER";
const ENV_RESOLVER_ARGS: &str = "ARCHSCOPE_RESOLVER_ARGS";
const ENV_RESOLVE_MISSING: &str = "ARCHSCOPE_RESOLVE_MISSING";
const ENV_TYPE_PATH: &str = "ARCHSCOPE_TYPE_PATH";

/// Top-level crate configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Resolver selection for the import engine.
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Roots searched for descriptor files by the search-path resolver.
    #[serde(default)]
    pub type_paths: Vec<PathBuf>,
}

/// One resolver configuration entry, read fresh by every factory call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Entry toggle. A disabled entry always yields the no-op resolver,
    /// without any constructor lookup.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Namespaced identifier of the resolver to construct,
    /// e.g. `archscope:search-path` or `myplugin:jar-index`.
    #[serde(default)]
    pub resolver: Option<String>,

    /// Ordered constructor arguments for the configured resolver.
    #[serde(default)]
    pub resolver_args: Vec<String>,

    /// With no resolver configured, fall back to the search-path resolver
    /// instead of the no-op resolver.
    #[serde(default)]
    pub resolve_missing_from_search_path: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            resolver: None,
            resolver_args: Vec::new(),
            resolve_missing_from_search_path: false,
        }
    }
}

impl ResolutionConfig {
    /// Entry selecting `resolver` with the given constructor arguments.
    pub fn for_resolver(resolver: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            resolver: Some(resolver.into()),
            resolver_args: args,
            ..Self::default()
        }
    }
}

impl Configuration {
    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Working-directory configuration file (if present) plus environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            Self::from_yaml_file(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Overlay the `ARCHSCOPE_*` environment variables onto this
    /// configuration. Unset variables leave the current values untouched.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(resolver) = env::var(ENV_RESOLVER) {
            if !resolver.is_empty() {
                self.resolution.resolver = Some(resolver);
            }
        }
        if let Ok(args) = env::var(ENV_RESOLVER_ARGS) {
            self.resolution.resolver_args = args
                .split(',')
                .map(|arg| arg.trim().to_string())
                .filter(|arg| !arg.is_empty())
                .collect();
        }
        if let Ok(flag) = env::var(ENV_RESOLVE_MISSING) {
            match flag.parse::<bool>() {
                Ok(value) => self.resolution.resolve_missing_from_search_path = value,
                Err(_) => log::warn!("Ignoring non-boolean {}={}", ENV_RESOLVE_MISSING, flag),
            }
        }
        if let Ok(paths) = env::var(ENV_TYPE_PATH) {
            self.type_paths = env::split_paths(&paths).collect();
        }
    }
}

static GLOBAL: Lazy<RwLock<Configuration>> = Lazy::new(|| {
    let config = Configuration::load().unwrap_or_else(|e| {
        log::warn!("Falling back to default configuration: {}", e);
        Configuration::default()
    });
    RwLock::new(config)
});

/// Read access to the process-global configuration.
///
/// Loaded lazily from [`Configuration::load`] on first access.
pub fn global() -> RwLockReadGuard<'static, Configuration> {
    GLOBAL.read()
}

/// Replace the process-global configuration.
pub fn overwrite_global(config: Configuration) {
    *GLOBAL.write() = config;
}
