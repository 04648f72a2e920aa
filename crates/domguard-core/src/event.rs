// Domguard Event Model
// The event capabilities guards consume, plus an in-process event record

use std::cell::Cell;
use std::fmt;

use crate::modifier::SystemModifier;

/// Identity of a DOM node, used to compare an event's origin with the
/// element its handler is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An event as delivered by the host platform.
///
/// Keyboard, mouse and touch events share this one interface. Fields that
/// only exist on some event kinds are optional: `button` is `None` unless
/// the event is mouse-originated and `key` is `None` unless it is
/// keyboard-originated.
///
/// `stop_propagation` and `prevent_default` take `&self`; propagation state
/// belongs to the platform's event object, not to the handler.
pub trait DomEvent {
    fn stop_propagation(&self);

    fn prevent_default(&self);

    /// The node the event was dispatched to
    fn target(&self) -> Option<NodeId>;

    /// The node whose listener is currently running
    fn current_target(&self) -> Option<NodeId>;

    fn ctrl_key(&self) -> bool;

    fn shift_key(&self) -> bool;

    fn alt_key(&self) -> bool;

    fn meta_key(&self) -> bool;

    /// Mouse button code (0 primary, 1 auxiliary, 2 secondary)
    fn button(&self) -> Option<i16> {
        None
    }

    /// Reported key value, as the platform spells it (e.g. "ArrowUp")
    fn key(&self) -> Option<&str> {
        None
    }

    /// Whether the given system modifier key is held
    fn system_key(&self, modifier: SystemModifier) -> bool {
        match modifier {
            SystemModifier::Ctrl => self.ctrl_key(),
            SystemModifier::Shift => self.shift_key(),
            SystemModifier::Alt => self.alt_key(),
            SystemModifier::Meta => self.meta_key(),
        }
    }
}

impl<E: DomEvent + ?Sized> DomEvent for &E {
    fn stop_propagation(&self) {
        (**self).stop_propagation()
    }

    fn prevent_default(&self) {
        (**self).prevent_default()
    }

    fn target(&self) -> Option<NodeId> {
        (**self).target()
    }

    fn current_target(&self) -> Option<NodeId> {
        (**self).current_target()
    }

    fn ctrl_key(&self) -> bool {
        (**self).ctrl_key()
    }

    fn shift_key(&self) -> bool {
        (**self).shift_key()
    }

    fn alt_key(&self) -> bool {
        (**self).alt_key()
    }

    fn meta_key(&self) -> bool {
        (**self).meta_key()
    }

    fn button(&self) -> Option<i16> {
        (**self).button()
    }

    fn key(&self) -> Option<&str> {
        (**self).key()
    }
}

/// Held state of the four system modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ModifierState {
    pub fn set(&mut self, modifier: SystemModifier, held: bool) {
        match modifier {
            SystemModifier::Ctrl => self.ctrl = held,
            SystemModifier::Shift => self.shift = held,
            SystemModifier::Alt => self.alt = held,
            SystemModifier::Meta => self.meta = held,
        }
    }
}

/// A concrete event record.
///
/// Used wherever events are produced in-process: replayed scripts and
/// tests. Side effects requested by guards are counted rather than acted
/// on, so callers can observe how often each was requested.
#[derive(Debug, Clone, Default)]
pub struct NativeEvent {
    event_type: String,
    target: Option<NodeId>,
    current_target: Option<NodeId>,
    modifiers: ModifierState,
    button: Option<i16>,
    key: Option<String>,
    propagation_stops: Cell<u32>,
    default_prevents: Cell<u32>,
}

impl NativeEvent {
    /// Create an event with neither a key nor a button field
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            ..Self::default()
        }
    }

    /// Create a keyboard event reporting `key`
    pub fn keyboard(event_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(event_type).with_key(key)
    }

    /// Create a mouse event for the given button code
    pub fn mouse(event_type: impl Into<String>, button: i16) -> Self {
        Self::new(event_type).with_button(button)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = Some(button);
        self
    }

    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_current_target(mut self, current_target: NodeId) -> Self {
        self.current_target = Some(current_target);
        self
    }

    /// Dispatch on `node` itself: target and current target coincide
    pub fn on(self, node: NodeId) -> Self {
        self.with_target(node).with_current_target(node)
    }

    pub fn with_modifier(mut self, modifier: SystemModifier, held: bool) -> Self {
        self.modifiers.set(modifier, held);
        self
    }

    pub fn with_ctrl(self) -> Self {
        self.with_modifier(SystemModifier::Ctrl, true)
    }

    pub fn with_shift(self) -> Self {
        self.with_modifier(SystemModifier::Shift, true)
    }

    pub fn with_alt(self) -> Self {
        self.with_modifier(SystemModifier::Alt, true)
    }

    pub fn with_meta(self) -> Self {
        self.with_modifier(SystemModifier::Meta, true)
    }

    /// The event type this event is dispatched as (e.g. "click")
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Number of times propagation was stopped on this event
    pub fn propagation_stop_count(&self) -> u32 {
        self.propagation_stops.get()
    }

    /// Number of times the default action was prevented on this event
    pub fn default_prevent_count(&self) -> u32 {
        self.default_prevents.get()
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stop_count() > 0
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevent_count() > 0
    }
}

impl DomEvent for NativeEvent {
    fn stop_propagation(&self) {
        self.propagation_stops.set(self.propagation_stops.get() + 1);
    }

    fn prevent_default(&self) {
        self.default_prevents.set(self.default_prevents.get() + 1);
    }

    fn target(&self) -> Option<NodeId> {
        self.target
    }

    fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    fn ctrl_key(&self) -> bool {
        self.modifiers.ctrl
    }

    fn shift_key(&self) -> bool {
        self.modifiers.shift
    }

    fn alt_key(&self) -> bool {
        self.modifiers.alt
    }

    fn meta_key(&self) -> bool {
        self.modifiers.meta
    }

    fn button(&self) -> Option<i16> {
        self.button
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
