//! Configuration types for annotation-order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::catalog::{CatalogError, OrderingCatalog, OrderingCatalogBuilder};
use crate::model::OrderingKind;
use crate::rule::DiagnosticKind;
use crate::types::Severity;

/// Top-level configuration, usually read from `annotation-order.toml`.
///
/// ```toml
/// fail_on = "warning"
///
/// [orders]
/// interface = ["Repository", "FeignClient", "Slf4j"]
///
/// [exempt_prefixes]
/// class = ["Enable"]
///
/// [severity]
/// AO002 = "warning"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing run (default: error).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Start from the builtin conventions (default: true).
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Per-kind canonical orders, keyed by `class`, `interface`, `method`,
    /// `field` or `parameter`. Replaces the builtin order for that kind.
    #[serde(default)]
    pub orders: BTreeMap<String, Vec<String>>,

    /// Per-kind exempt prefixes. Replaces the builtin prefixes for that kind.
    #[serde(default)]
    pub exempt_prefixes: BTreeMap<String, Vec<String>>,

    /// Severity overrides keyed by diagnostic code or name.
    #[serde(default)]
    pub severity: BTreeMap<String, Severity>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_on: None,
            builtin: true,
            orders: BTreeMap::new(),
            exempt_prefixes: BTreeMap::new(),
            severity: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or names an unknown kind or
    /// diagnostic.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate_keys()?;
        Ok(config)
    }

    fn validate_keys(&self) -> Result<(), ConfigError> {
        let sections = [("orders", &self.orders), ("exempt_prefixes", &self.exempt_prefixes)];
        for (section, table) in sections {
            for key in table.keys() {
                if OrderingKind::from_key(key).is_none() {
                    return Err(ConfigError::UnknownKind {
                        section,
                        key: key.clone(),
                    });
                }
            }
        }
        for key in self.severity.keys() {
            let known = DiagnosticKind::ALL
                .iter()
                .any(|kind| kind.code() == key || kind.name() == key);
            if !known {
                return Err(ConfigError::UnknownDiagnostic { key: key.clone() });
            }
        }
        Ok(())
    }

    /// Severity threshold for a failing run.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }

    /// Gets the severity override for a diagnostic, looked up by code then
    /// by name.
    #[must_use]
    pub fn severity_for(&self, code: &str, name: &str) -> Option<Severity> {
        self.severity
            .get(code)
            .or_else(|| self.severity.get(name))
            .copied()
    }

    /// Builds the ordering catalog this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown kind key or a malformed ordering.
    pub fn catalog(&self) -> Result<OrderingCatalog, ConfigError> {
        self.validate_keys()?;

        let mut builder = if self.builtin {
            OrderingCatalogBuilder::with_builtin()
        } else {
            OrderingCatalog::builder()
        };

        for kind in OrderingKind::ALL {
            if let Some(names) = self.orders.get(kind.key()) {
                tracing::debug!("config overrides {} order ({} names)", kind, names.len());
                builder = builder.order(kind, names.iter().cloned());
            }
            if let Some(prefixes) = self.exempt_prefixes.get(kind.key()) {
                builder = builder.exempt_prefixes(kind, prefixes.iter().cloned());
            }
        }

        Ok(builder.build()?)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A table key is not an ordering kind.
    #[error("[{section}] {key}: unknown kind, expected: class, interface, method, field, parameter")]
    UnknownKind {
        /// Section holding the key.
        section: &'static str,
        /// The unknown key.
        key: String,
    },

    /// A `[severity]` key is neither a diagnostic code nor a name.
    #[error("[severity] {key}: unknown diagnostic, expected a code (AO001) or name (annotation-out-of-order)")]
    UnknownDiagnostic {
        /// The unknown key.
        key: String,
    },

    /// The configured catalog is malformed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
