//! Type descriptors — the metadata a resolver supplies for a type name.
//!
//! A descriptor is the unit of exchange between a resolver and the import
//! engine: the fully qualified name of a type, its kind, the names it
//! depends on, and where it came from. Descriptors live in YAML files laid
//! out by their dotted name (`shop.billing.Invoice` →
//! `shop/billing/Invoice.yaml` under a search root).
//!
//! Example YAML:
//! ```yaml
//! name: "shop.billing.Invoice"
//! kind: class
//! dependencies:
//!   - "shop.billing.LineItem"
//!   - "shop.customer.Customer"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A resolved type: name, kind, outgoing dependencies, origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully qualified dotted name, e.g. `shop.billing.Invoice`.
    pub name: String,

    /// What kind of type this is.
    #[serde(default)]
    pub kind: TypeKind,

    /// Fully qualified names this type depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Where the descriptor came from. Absent for synthesized stubs.
    #[serde(default)]
    pub uri: Option<TypeUri>,
}

impl TypeDescriptor {
    /// A bare descriptor with no dependencies and no origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::default(),
            dependencies: Vec::new(),
            uri: None,
        }
    }

    /// Segment after the last `.` of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Parse a descriptor from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load a descriptor from a YAML file, recording the file as its origin.
    pub fn from_yaml_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let mut descriptor = Self::from_yaml(&content)?;
        if descriptor.uri.is_none() {
            descriptor.uri = Some(TypeUri::from_path(path));
        }
        Ok(descriptor)
    }
}

/// Kind of a described type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// A concrete type.
    #[default]
    Class,
    /// An abstract contract.
    Interface,
    /// A closed set of variants.
    Enum,
    /// A plain data carrier.
    Record,
}

/// Location a descriptor can be imported from.
///
/// Stored as a `file:` style string so it stays serializable and comparable;
/// [`TypeUri::to_path`] recovers the filesystem path for local locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeUri(String);

impl TypeUri {
    /// Wrap an already formatted location string.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Location of a local descriptor file.
    pub fn from_path(path: &Path) -> Self {
        Self(format!("file://{}", path.display()))
    }

    /// The raw location string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The filesystem path, for `file:` locations.
    pub fn to_path(&self) -> Option<PathBuf> {
        self.0.strip_prefix("file://").map(PathBuf::from)
    }
}

impl fmt::Display for TypeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
