// Catalog configuration: which demos the `catalog` binary runs and how.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{PatternError, Result};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Builder,
    Singleton,
    FactoryMethod,
    Adapter,
    Decorator,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::Builder,
        Demo::Singleton,
        Demo::FactoryMethod,
        Demo::Adapter,
        Demo::Decorator,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Builder => "Builder Pattern",
            Demo::Singleton => "Singleton Pattern",
            Demo::FactoryMethod => "Factory Method Pattern",
            Demo::Adapter => "Adapter Pattern",
            Demo::Decorator => "Decorator Pattern",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub color: bool,
    pub demos: Vec<Demo>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            color: true,
            demos: Demo::ALL.to_vec(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            PatternError::config(format!("Failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `PATTERNS_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading catalog config");
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }
}
