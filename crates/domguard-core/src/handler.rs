// Domguard Handler Decorators
// Wrap event callbacks so they only run when their modifiers match

use crate::event::DomEvent;
use crate::guard::{KeyFilter, ModifierGuards};

/// Wrap `callback` so it only runs when every modifier guard passes.
///
/// Guards run in the order given by `modifiers`. Side-effecting guards
/// (`stop`, `prevent`) act as soon as they are reached, even when a later
/// guard suppresses the call. Names without a guard are ignored.
///
/// The returned handler yields `Some` with the callback's result, or
/// `None` when the event was suppressed. Names are copied when the handler
/// is built, so it does not borrow `modifiers`.
///
/// # Examples
/// ```
/// use domguard_core::{with_modifiers, NativeEvent};
///
/// let mut on_click = with_modifiers(|_: &NativeEvent| "saved", &["ctrl"]);
/// assert_eq!(on_click(&NativeEvent::mouse("click", 0)), None);
/// assert_eq!(on_click(&NativeEvent::mouse("click", 0).with_ctrl()), Some("saved"));
/// ```
pub fn with_modifiers<E, F, R>(mut callback: F, modifiers: &[&str]) -> impl FnMut(&E) -> Option<R>
where
    E: DomEvent + ?Sized,
    F: FnMut(&E) -> R,
{
    let guards = ModifierGuards::new(modifiers);
    move |event: &E| {
        if guards.suppresses(event) {
            return None;
        }
        Some(callback(event))
    }
}

/// Wrap a keyboard `callback` so it only runs for the listed keys.
///
/// A key name selects the event when it equals the event's lowercased
/// key, or when its legacy alias (`esc`, `space`, `up`, ...) does. Events
/// without a key never reach the callback. Like [`with_modifiers`], the
/// handler keeps its own copy of the names.
///
/// # Examples
/// ```
/// use domguard_core::{with_keys, NativeEvent};
///
/// let mut on_key = with_keys(|_: &NativeEvent| 1, &["esc"]);
/// assert_eq!(on_key(&NativeEvent::keyboard("keyup", "Escape")), Some(1));
/// assert_eq!(on_key(&NativeEvent::keyboard("keyup", "Enter")), None);
/// ```
pub fn with_keys<E, F, R>(mut callback: F, keys: &[&str]) -> impl FnMut(&E) -> Option<R>
where
    E: DomEvent + ?Sized,
    F: FnMut(&E) -> R,
{
    let filter = KeyFilter::new(keys);
    move |event: &E| {
        if !filter.accepts(event) {
            return None;
        }
        Some(callback(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NativeEvent, NodeId};
    use std::cell::Cell;

    #[test]
    fn test_ctrl_required() {
        let calls = Cell::new(0);
        let mut handler = with_modifiers(
            |_: &NativeEvent| {
                calls.set(calls.get() + 1);
                42
            },
            &["ctrl"],
        );

        assert_eq!(handler(&NativeEvent::new("click")), None);
        assert_eq!(calls.get(), 0);

        assert_eq!(handler(&NativeEvent::new("click").with_ctrl()), Some(42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_left_button() {
        let mut handler = with_modifiers(|_: &NativeEvent| (), &["left"]);
        assert_eq!(handler(&NativeEvent::mouse("click", 1)), None);
        assert_eq!(handler(&NativeEvent::mouse("click", 0)), Some(()));
    }

    #[test]
    fn test_exact_ctrl() {
        let mut handler = with_modifiers(|_: &NativeEvent| (), &["exact", "ctrl"]);
        assert_eq!(handler(&NativeEvent::new("click").with_ctrl().with_shift()), None);
        assert_eq!(handler(&NativeEvent::new("click").with_ctrl()), Some(()));
    }

    #[test]
    fn test_stop_runs_even_when_suppressed() {
        let mut handler = with_modifiers(|_: &NativeEvent| (), &["stop", "self"]);

        let bubbled = NativeEvent::new("click")
            .with_target(NodeId(1))
            .with_current_target(NodeId(0));
        assert_eq!(handler(&bubbled), None);
        assert_eq!(bubbled.propagation_stop_count(), 1);

        let direct = NativeEvent::new("click").on(NodeId(0));
        assert_eq!(handler(&direct), Some(()));
        assert_eq!(direct.propagation_stop_count(), 1);
    }

    #[test]
    fn test_order_changes_side_effects() {
        let mut handler = with_modifiers(|_: &NativeEvent| (), &["self", "stop"]);
        let bubbled = NativeEvent::new("click")
            .with_target(NodeId(1))
            .with_current_target(NodeId(0));
        assert_eq!(handler(&bubbled), None);
        assert_eq!(bubbled.propagation_stop_count(), 0);
    }

    #[test]
    fn test_unknown_modifiers_pass_through() {
        let mut handler = with_modifiers(|_: &NativeEvent| "ok", &["once", "passive", "enter"]);
        assert_eq!(handler(&NativeEvent::new("scroll")), Some("ok"));
    }

    #[test]
    fn test_with_keys_aliases() {
        let mut esc = with_keys(|_: &NativeEvent| (), &["esc"]);
        assert_eq!(esc(&NativeEvent::keyboard("keyup", "Escape")), Some(()));
        assert_eq!(esc(&NativeEvent::keyboard("keyup", "escape")), Some(()));
        assert_eq!(esc(&NativeEvent::keyboard("keyup", "Enter")), None);

        let mut up = with_keys(|_: &NativeEvent| (), &["up"]);
        assert_eq!(up(&NativeEvent::keyboard("keydown", "ArrowUp")), Some(()));
        assert_eq!(up(&NativeEvent::mouse("click", 0)), None);
        assert_eq!(up(&NativeEvent::new("focus")), None);
    }

    #[test]
    fn test_with_keys_any_entry_matches() {
        let mut handler = with_keys(|_: &NativeEvent| (), &["enter", "space", "delete"]);
        assert_eq!(handler(&NativeEvent::keyboard("keydown", " ")), Some(()));
        assert_eq!(handler(&NativeEvent::keyboard("keydown", "Backspace")), Some(()));
        assert_eq!(handler(&NativeEvent::keyboard("keydown", "Enter")), Some(()));
        assert_eq!(handler(&NativeEvent::keyboard("keydown", "Delete")), None);
    }

    #[test]
    fn test_keys_around_modifiers() {
        let mut handler = with_keys(
            with_modifiers(|_: &NativeEvent| "submit", &["ctrl", "prevent"]),
            &["enter"],
        );

        let ctrl_enter = NativeEvent::keyboard("keyup", "Enter").with_ctrl();
        assert_eq!(handler(&ctrl_enter), Some(Some("submit")));
        assert_eq!(ctrl_enter.default_prevent_count(), 1);

        let plain_enter = NativeEvent::keyboard("keyup", "Enter");
        assert_eq!(handler(&plain_enter), Some(None));

        // The key filter rejects first, so no modifier guard runs
        let ctrl_tab = NativeEvent::keyboard("keyup", "Tab").with_ctrl();
        assert_eq!(handler(&ctrl_tab), None);
        assert_eq!(ctrl_tab.default_prevent_count(), 0);
    }

    #[test]
    fn test_repeated_wraps_are_independent() {
        let first_calls = Cell::new(0);
        let second_calls = Cell::new(0);
        let mut first = with_modifiers(
            |_: &NativeEvent| first_calls.set(first_calls.get() + 1),
            &["stop"],
        );
        let mut second = with_modifiers(
            |_: &NativeEvent| second_calls.set(second_calls.get() + 1),
            &["stop"],
        );

        let a = NativeEvent::new("click");
        let b = NativeEvent::new("click");
        first(&a);
        second(&b);
        first(&NativeEvent::new("click"));

        assert_eq!(a.propagation_stop_count(), 1);
        assert_eq!(b.propagation_stop_count(), 1);
        assert_eq!(first_calls.get(), 2);
        assert_eq!(second_calls.get(), 1);
    }

    #[test]
    fn test_handlers_outlive_their_name_lists() {
        let (mut guarded, mut keyed) = {
            let names: Vec<String> = vec!["ctrl".to_string(), "enter".to_string()];
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            (
                with_modifiers(|_: &NativeEvent| "guarded", &names[..1]),
                with_keys(|_: &NativeEvent| "keyed", &names[1..]),
            )
        };

        let ctrl_enter = NativeEvent::keyboard("keydown", "Enter").with_ctrl();
        assert_eq!(guarded(&ctrl_enter), Some("guarded"));
        assert_eq!(keyed(&ctrl_enter), Some("keyed"));
    }
}
