// Domguard Guard Lists
// Modifier and key lists resolved once at wrap time, evaluated per event

use smallvec::SmallVec;

use crate::event::DomEvent;
use crate::key::key_name_matches;
use crate::modifier::{Modifier, SystemModifierSet};

/// An ordered list of modifier guards.
///
/// Built from the modifier names of one binding. Names without a guard
/// are dropped here, so evaluation only walks real guards, in the order
/// the binding wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierGuards {
    /// Uses SmallVec to avoid heap allocation for the common case of 0-4 modifiers.
    guards: SmallVec<[Modifier; 4]>,
    listed: SystemModifierSet,
}

impl ModifierGuards {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut guards = SmallVec::new();
        for name in names {
            let name = name.as_ref();
            match Modifier::from_name(name) {
                Some(modifier) => guards.push(modifier),
                None => log::debug!("no guard for modifier '{}', ignoring", name),
            }
        }

        Self {
            guards,
            listed: SystemModifierSet::from_names(names),
        }
    }

    /// The guards that will run, in evaluation order
    pub fn guards(&self) -> &[Modifier] {
        &self.guards
    }

    /// System modifiers named in the list
    pub fn listed(&self) -> SystemModifierSet {
        self.listed
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Run the guards against an event.
    ///
    /// Stops at the first guard that suppresses; side effects of guards
    /// before it have already happened, guards after it never run.
    pub fn suppresses<E: DomEvent + ?Sized>(&self, event: &E) -> bool {
        for &guard in &self.guards {
            if guard.check(event, self.listed).is_suppress() {
                log::trace!("modifier '{}' suppressed dispatch", guard);
                return true;
            }
        }
        false
    }
}

/// A set of key names a keyboard handler responds to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyFilter {
    names: Vec<String>,
}

impl KeyFilter {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|name| name.as_ref().to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check whether an event's key is selected by any of the names.
    ///
    /// Events without a key (mouse, focus, ...) are never accepted.
    pub fn accepts<E: DomEvent + ?Sized>(&self, event: &E) -> bool {
        let Some(key) = event.key() else {
            log::trace!("event has no key, skipping key filter {:?}", self.names);
            return false;
        };

        let lowered = key.to_lowercase();
        let accepted = self
            .names
            .iter()
            .any(|name| key_name_matches(name, &lowered));
        if !accepted {
            log::trace!("key '{}' not in {:?}", key, self.names);
        }
        accepted
    }
}
