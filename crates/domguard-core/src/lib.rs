// Domguard Core Library
// Event handler decorators for declarative event modifiers

pub mod binding;
pub mod config;
pub mod event;
pub mod guard;
pub mod handler;
pub mod key;
pub mod modifier;

pub use binding::BindingSet;
pub use config::{Binding, BindingConfig, ConfigError, EventRecord, EventScript};
pub use event::{DomEvent, ModifierState, NativeEvent, NodeId};
pub use guard::{KeyFilter, ModifierGuards};
pub use handler::{with_keys, with_modifiers};
pub use key::{key_alias, key_name_matches, KeyAlias};
pub use modifier::{GuardOutcome, Modifier, SystemModifier, SystemModifierSet};
