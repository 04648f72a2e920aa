// Domguard Event Scripts
// Ordered event records loaded from TOML, replayed against bindings

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::parser::ConfigError;
use crate::event::{NativeEvent, NodeId};
use crate::modifier::SystemModifier;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptToml {
    #[serde(default)]
    event: Vec<EventRecord>,
}

/// One `[[event]]` entry of a script
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub button: Option<i16>,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub target: Option<u64>,
    #[serde(default)]
    pub current_target: Option<u64>,
}

impl EventRecord {
    /// Build the event this record describes
    pub fn to_event(&self) -> NativeEvent {
        let mut event = NativeEvent::new(self.event_type.as_str())
            .with_modifier(SystemModifier::Ctrl, self.ctrl)
            .with_modifier(SystemModifier::Shift, self.shift)
            .with_modifier(SystemModifier::Alt, self.alt)
            .with_modifier(SystemModifier::Meta, self.meta);

        if let Some(key) = &self.key {
            event = event.with_key(key.as_str());
        }
        if let Some(button) = self.button {
            event = event.with_button(button);
        }
        if let Some(target) = self.target {
            event = event.with_target(NodeId(target));
        }
        if let Some(current_target) = self.current_target {
            event = event.with_current_target(NodeId(current_target));
        }
        event
    }
}

/// An ordered sequence of events to replay
#[derive(Debug, Clone, Default)]
pub struct EventScript {
    records: Vec<EventRecord>,
}

impl EventScript {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading event script from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: ScriptToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        Ok(Self {
            records: parsed.event,
        })
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Fresh events for one replay, in script order
    pub fn events(&self) -> Vec<NativeEvent> {
        self.records.iter().map(EventRecord::to_event).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
