// Domguard Config API
// Binding tables and event scripts loaded from TOML

pub mod parser;
pub mod script;

pub use parser::{Binding, BindingConfig, ConfigError};
pub use script::{EventRecord, EventScript};
