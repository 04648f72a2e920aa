// Domguard Modifier System
// Guard table for declarative event modifiers (stop, prevent, self, ctrl, ...)

use std::fmt;

use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::event::DomEvent;

/// Result of evaluating a single guard against an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardOutcome {
    /// Let evaluation continue with the next modifier
    Pass,
    /// Drop this event occurrence; the wrapped callback must not run
    Suppress,
}

impl GuardOutcome {
    /// Returns true if this outcome stops dispatch
    pub fn is_suppress(self) -> bool {
        matches!(self, GuardOutcome::Suppress)
    }

    fn suppress_if(condition: bool) -> Self {
        if condition {
            GuardOutcome::Suppress
        } else {
            GuardOutcome::Pass
        }
    }
}

/// A physical keyboard modifier key tracked by the platform's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum SystemModifier {
    Ctrl = 0,
    Shift = 1,
    Alt = 2,
    Meta = 3,
}

impl SystemModifier {
    /// All system modifiers, in the order `exact` inspects them
    pub const ALL: [SystemModifier; 4] = [
        SystemModifier::Ctrl,
        SystemModifier::Shift,
        SystemModifier::Alt,
        SystemModifier::Meta,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for SystemModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Set of system modifiers named in a modifier list.
///
/// Only the `exact` guard reads it: a held system key outside this set
/// suppresses dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemModifierSet(u8);

impl SystemModifierSet {
    /// Create an empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a system modifier to the set
    pub fn insert(&mut self, modifier: SystemModifier) {
        self.0 |= modifier.bit();
    }

    /// Check membership
    pub fn contains(self, modifier: SystemModifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Collect the system modifiers among a list of modifier names
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        names
            .iter()
            .filter_map(|name| name.as_ref().parse::<SystemModifier>().ok())
            .collect()
    }
}

impl FromIterator<SystemModifier> for SystemModifierSet {
    fn from_iter<I: IntoIterator<Item = SystemModifier>>(iter: I) -> Self {
        let mut set = Self::empty();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

/// A declarative event modifier with an associated guard.
///
/// Each variant is one row of the guard table. Names that do not parse
/// into a variant have no guard and never suppress.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Modifier {
    /// Stop event propagation (side effect only)
    Stop,
    /// Prevent the default action (side effect only)
    Prevent,
    /// Only fire when the event originated on the bound element
    #[strum(serialize = "self")]
    SelfTarget,
    Ctrl,
    Shift,
    Alt,
    Meta,
    /// Primary mouse button (code 0)
    Left,
    /// Auxiliary mouse button (code 1)
    Middle,
    /// Secondary mouse button (code 2)
    Right,
    /// Reject events carrying system keys not named in the list
    Exact,
}

impl Modifier {
    /// Look up a modifier by its binding name.
    ///
    /// Returns `None` for names without a guard (key names, custom
    /// modifiers consumed elsewhere).
    pub fn from_name(name: &str) -> Option<Modifier> {
        name.parse().ok()
    }

    /// The name this modifier is written with in a binding
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The system key this modifier requires, if it is one of ctrl/shift/alt/meta
    pub fn as_system(self) -> Option<SystemModifier> {
        match self {
            Modifier::Ctrl => Some(SystemModifier::Ctrl),
            Modifier::Shift => Some(SystemModifier::Shift),
            Modifier::Alt => Some(SystemModifier::Alt),
            Modifier::Meta => Some(SystemModifier::Meta),
            _ => None,
        }
    }

    /// The mouse button code this modifier requires, if it is left/middle/right
    pub fn button_code(self) -> Option<i16> {
        match self {
            Modifier::Left => Some(0),
            Modifier::Middle => Some(1),
            Modifier::Right => Some(2),
            _ => None,
        }
    }

    /// Evaluate this guard against an event.
    ///
    /// `stop` and `prevent` perform their side effect on the event and
    /// always pass. `listed` is the set of system modifiers named in the
    /// full modifier list; only `exact` consults it.
    pub fn check<E: DomEvent + ?Sized>(
        self,
        event: &E,
        listed: SystemModifierSet,
    ) -> GuardOutcome {
        match self {
            Modifier::Stop => {
                event.stop_propagation();
                GuardOutcome::Pass
            }
            Modifier::Prevent => {
                event.prevent_default();
                GuardOutcome::Pass
            }
            Modifier::SelfTarget => {
                GuardOutcome::suppress_if(event.target() != event.current_target())
            }
            Modifier::Ctrl | Modifier::Shift | Modifier::Alt | Modifier::Meta => {
                let held = self.as_system().is_some_and(|m| event.system_key(m));
                GuardOutcome::suppress_if(!held)
            }
            Modifier::Left | Modifier::Middle | Modifier::Right => {
                // Events without a button field never match a button guard
                let expected = self.button_code();
                GuardOutcome::suppress_if(matches!(
                    (event.button(), expected),
                    (Some(actual), Some(code)) if actual != code
                ))
            }
            Modifier::Exact => GuardOutcome::suppress_if(
                SystemModifier::ALL
                    .iter()
                    .any(|&m| event.system_key(m) && !listed.contains(m)),
            ),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
