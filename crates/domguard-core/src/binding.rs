// Domguard Binding Set
// Listener registry built from a binding table

use std::fmt;

use crate::config::{Binding, BindingConfig};
use crate::event::NativeEvent;
use crate::handler::{with_keys, with_modifiers};

type BoxedHandler = Box<dyn FnMut(&NativeEvent) -> Option<String>>;

struct Listener {
    event: String,
    handler: BoxedHandler,
}

/// Handlers for a set of bindings, grouped by the event type they listen to.
///
/// Each binding's callback reports the binding name. When a binding names
/// keys, the key filter wraps the modifier guards, so a key mismatch
/// rejects the event before any modifier side effect runs.
pub struct BindingSet {
    listeners: Vec<Listener>,
}

impl BindingSet {
    pub fn from_config(config: &BindingConfig) -> Self {
        Self {
            listeners: config.iter().map(Self::listener).collect(),
        }
    }

    fn listener(binding: &Binding) -> Listener {
        let name = binding.name.clone();
        let modifiers: Vec<&str> = binding.modifiers.iter().map(String::as_str).collect();
        let guarded = with_modifiers(move |_: &NativeEvent| name.clone(), &modifiers);

        let handler: BoxedHandler = if binding.keys.is_empty() {
            Box::new(guarded)
        } else {
            let keys: Vec<&str> = binding.keys.iter().map(String::as_str).collect();
            let mut keyed = with_keys(guarded, &keys);
            Box::new(move |event: &NativeEvent| keyed(event).flatten())
        };

        Listener {
            event: binding.event.clone(),
            handler,
        }
    }

    /// Deliver an event to every listener for its type, in declaration
    /// order, and return the names of the bindings whose callbacks ran.
    pub fn dispatch(&mut self, event: &NativeEvent) -> Vec<String> {
        let mut fired = Vec::new();
        for listener in self
            .listeners
            .iter_mut()
            .filter(|listener| listener.event == event.event_type())
        {
            if let Some(name) = (listener.handler)(event) {
                log::debug!("binding '{}' fired for {}", name, event.event_type());
                fired.push(name);
            }
        }
        fired
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for BindingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|listener| &listener.event))
            .finish()
    }
}
