// Domguard Replay Scenarios
//
// End-to-end runs of a TOML binding table against a TOML event script,
// the same pipeline the domguard binary drives.
//
// Run with: cargo test --test replay_scenarios

use domguard_core::{BindingConfig, BindingSet, EventScript};

// =========================================================================
// Test Helpers
// =========================================================================

const DIALOG_BINDINGS: &str = r#"
[[binding]]
name = "dialog-close"
event = "keyup"
keys = ["esc"]

[[binding]]
name = "dialog-submit"
event = "keyup"
modifiers = ["exact", "ctrl", "prevent"]
keys = ["enter"]

[[binding]]
name = "backdrop-dismiss"
event = "click"
modifiers = ["self", "left"]

[[binding]]
name = "context-menu"
event = "contextmenu"
modifiers = ["prevent", "right"]

[[binding]]
name = "list-nav"
event = "keydown"
modifiers = ["stop"]
keys = ["up", "down"]
"#;

/// Replay every scripted event and collect the bindings fired per event
fn replay(bindings: &str, script: &str) -> Vec<Vec<String>> {
    let config = BindingConfig::from_toml(bindings).unwrap();
    let script = EventScript::from_toml(script).unwrap();
    let mut set = BindingSet::from_config(&config);
    script.events().iter().map(|event| set.dispatch(event)).collect()
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_escape_closes_dialog() {
    let fired = replay(
        DIALOG_BINDINGS,
        r#"
        [[event]]
        type = "keyup"
        key = "Escape"

        [[event]]
        type = "keyup"
        key = "Tab"
        "#,
    );
    assert_eq!(fired, vec![vec!["dialog-close".to_string()], vec![]]);
}

#[test]
fn test_submit_requires_exactly_ctrl() {
    let fired = replay(
        DIALOG_BINDINGS,
        r#"
        [[event]]
        type = "keyup"
        key = "Enter"
        ctrl = true

        [[event]]
        type = "keyup"
        key = "Enter"
        ctrl = true
        shift = true

        [[event]]
        type = "keyup"
        key = "Enter"
        "#,
    );
    assert_eq!(fired[0], vec!["dialog-submit"]);
    assert!(fired[1].is_empty());
    assert!(fired[2].is_empty());
}

#[test]
fn test_backdrop_only_on_direct_left_click() {
    let fired = replay(
        DIALOG_BINDINGS,
        r#"
        [[event]]
        type = "click"
        button = 0
        target = 1
        current_target = 1

        [[event]]
        type = "click"
        button = 0
        target = 7
        current_target = 1

        [[event]]
        type = "click"
        button = 1
        target = 1
        current_target = 1
        "#,
    );
    assert_eq!(fired[0], vec!["backdrop-dismiss"]);
    assert!(fired[1].is_empty());
    assert!(fired[2].is_empty());
}

#[test]
fn test_side_effects_recorded_on_events() {
    let config = BindingConfig::from_toml(DIALOG_BINDINGS).unwrap();
    let script = EventScript::from_toml(
        r#"
        [[event]]
        type = "contextmenu"
        button = 0

        [[event]]
        type = "contextmenu"
        button = 2

        [[event]]
        type = "keydown"
        key = "ArrowDown"

        [[event]]
        type = "keydown"
        key = "ArrowLeft"
        "#,
    )
    .unwrap();
    let mut set = BindingSet::from_config(&config);
    let events = script.events();

    // prevent runs before the right-button guard rejects the left click
    assert!(set.dispatch(&events[0]).is_empty());
    assert_eq!(events[0].default_prevent_count(), 1);

    assert_eq!(set.dispatch(&events[1]), vec!["context-menu"]);
    assert_eq!(events[1].default_prevent_count(), 1);

    assert_eq!(set.dispatch(&events[2]), vec!["list-nav"]);
    assert_eq!(events[2].propagation_stop_count(), 1);

    // Key filter rejects before stop is reached
    assert!(set.dispatch(&events[3]).is_empty());
    assert_eq!(events[3].propagation_stop_count(), 0);
}

#[test]
fn test_unknown_names_never_block() {
    let fired = replay(
        r#"
        [[binding]]
        name = "scroll"
        event = "wheel"
        modifiers = ["passive", "capture"]
        "#,
        r#"
        [[event]]
        type = "wheel"
        "#,
    );
    assert_eq!(fired, vec![vec!["scroll".to_string()]]);
}
