// Domguard Key Alias Table
// Legacy key names mapped to the lowercase key values keyboard events report

/// Canonical key value(s) a legacy key name stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlias {
    One(&'static str),
    /// Reserved for names covering several key values; no entry uses it yet
    Many(&'static [&'static str]),
}

impl KeyAlias {
    /// Check whether a lowercased event key is one this alias stands for
    pub fn matches(self, lowered_key: &str) -> bool {
        match self {
            KeyAlias::One(value) => value == lowered_key,
            KeyAlias::Many(values) => values.iter().any(|value| *value == lowered_key),
        }
    }
}

// Kept for compatibility with the older keyCode-era names.
// IE-only spellings (`spacebar`, `del`) are intentionally absent.
const KEY_ALIASES: &[(&str, KeyAlias)] = &[
    ("esc", KeyAlias::One("escape")),
    ("space", KeyAlias::One(" ")),
    ("up", KeyAlias::One("arrowup")),
    ("left", KeyAlias::One("arrowleft")),
    ("right", KeyAlias::One("arrowright")),
    ("down", KeyAlias::One("arrowdown")),
    ("delete", KeyAlias::One("backspace")),
];

/// Look up the canonical key value for a legacy key name.
///
/// Names without an entry are compared against the event key as written.
pub fn key_alias(name: &str) -> Option<KeyAlias> {
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|&(_, value)| value)
}

/// Check whether a key name selects the given lowercased event key
pub fn key_name_matches(name: &str, lowered_key: &str) -> bool {
    name == lowered_key || key_alias(name).is_some_and(|alias| alias.matches(lowered_key))
}
