// Domguard Config Parser - TOML with Serde
// Parses binding tables from TOML files

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Duplicate binding name: {0}")]
    DuplicateBinding(String),
}

/// Root TOML table of a binding file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct BindingsToml {
    #[serde(default)]
    binding: Vec<BindingTomlEntry>,
}

/// One `[[binding]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct BindingTomlEntry {
    name: String,
    event: String,
    #[serde(default)]
    modifiers: Vec<String>,
    #[serde(default)]
    keys: Vec<String>,
}

/// A declarative event binding: which event type it listens to and the
/// modifier and key names that constrain it.
///
/// Names are kept as written; unknown ones are only discovered (and
/// ignored) when the binding's handler is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub event: String,
    pub modifiers: Vec<String>,
    pub keys: Vec<String>,
}

impl Binding {
    pub fn new(name: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event: event.into(),
            modifiers: Vec::new(),
            keys: Vec::new(),
        }
    }

    pub fn with_modifiers<S: AsRef<str>>(mut self, modifiers: &[S]) -> Self {
        self.modifiers = modifiers.iter().map(|m| m.as_ref().to_string()).collect();
        self
    }

    pub fn with_keys<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.keys = keys.iter().map(|k| k.as_ref().to_string()).collect();
        self
    }
}

/// Ordered table of bindings, keyed by binding name
#[derive(Debug, Clone, Default)]
pub struct BindingConfig {
    bindings: IndexMap<String, Binding>,
}

impl BindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load bindings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading bindings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load bindings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: BindingsToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        let mut config = Self::new();
        for entry in parsed.binding {
            let binding = Binding {
                name: entry.name,
                event: entry.event,
                modifiers: entry.modifiers,
                keys: entry.keys,
            };
            config.insert(binding)?;
        }

        log::debug!("loaded {} bindings", config.len());
        Ok(config)
    }

    /// Get the default bindings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("domguard").join("bindings.toml"))
    }

    /// Add a binding, rejecting a name that is already taken
    pub fn insert(&mut self, binding: Binding) -> Result<(), ConfigError> {
        if self.bindings.contains_key(&binding.name) {
            return Err(ConfigError::DuplicateBinding(binding.name));
        }
        self.bindings.insert(binding.name.clone(), binding);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
