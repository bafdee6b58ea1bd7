use super::*;
use crate::cursor::CursorRole;
use crate::recorder::HostCall;

const EDGE_SCRIPT: &str = r#"{
  "nodes": [{ "id": 1 }, { "id": 2, "fill": [1, 2, 3] }],
  "steps": [
    { "step": "set_mode", "mode": "edges" },
    { "step": "set_start_node", "node": 1, "coords": { "x": 0, "y": 0 } },
    { "step": "event", "event": { "type": "move", "pointer": { "pos": { "x": 40, "y": 20 }, "left_down": true } } },
    { "step": "lock_edge", "signal": "l_node", "node": 2, "coords": { "x": 90, "y": 40 } },
    { "step": "lock_edge", "signal": "l_node", "node": 2, "coords": { "x": 90, "y": 40 } },
    { "step": "set_end_node", "node": 2 }
  ]
}"#;

#[test]
fn edge_script_creates_one_edge() {
    let host = Script::from_json_str(EDGE_SCRIPT).unwrap().run().unwrap();
    assert_eq!(host.edges, vec![(1, 2)]);
    assert!(host.graphics.is_empty());
    assert_eq!(host.node_fill(2), Some(ModeConfig::default().palette.node_normal));
}

#[test]
fn declared_fill_is_used() {
    let script = Script::from_json_str(r#"{ "nodes": [{ "id": 2, "fill": [1, 2, 3] }], "steps": [] }"#).unwrap();
    let host = script.run().unwrap();
    assert_eq!(host.node_fill(2), Some(Rgb(1, 2, 3)));
}

#[test]
fn pan_script_with_timer() {
    let raw = r#"{
      "viewport": { "width": 200, "height": 100 },
      "steps": [
        { "step": "set_mode", "mode": "pan" },
        { "step": "event", "event": { "type": "button", "button": "primary", "transition": "down",
                                      "pointer": { "pos": { "x": 100, "y": 100 }, "left_down": true } } },
        { "step": "event", "event": { "type": "move", "pointer": { "pos": { "x": 130, "y": 80 }, "left_down": true } } },
        { "step": "timer" },
        { "step": "timer" }
      ]
    }"#;
    let host = Script::from_json_str(raw).unwrap().run().unwrap();
    assert_eq!(host.size, Size::new(200.0, 100.0));
    assert_eq!(host.calls.last(), Some(&HostCall::Draw { force: false }));
    assert_eq!(host.count(|c| matches!(c, HostCall::Draw { force: false })), 1);
    assert_eq!(host.cursor, Some(CursorRole::GrabHand));
}

#[test]
fn claim_step_stops_forwarding() {
    let raw = r#"{
      "steps": [
        { "step": "claim", "kind": { "button": { "button": "primary", "transition": "down" } } },
        { "step": "event", "event": { "type": "button", "button": "primary", "transition": "down",
                                      "pointer": { "pos": { "x": 1, "y": 1 } } } }
      ]
    }"#;
    let host = Script::from_json_str(raw).unwrap().run().unwrap();
    assert_eq!(host.count(|c| matches!(c, HostCall::RaiseEvent { .. })), 0);
}

#[test]
fn unknown_node_is_reported_with_step() {
    let raw = r#"{
      "steps": [
        { "step": "set_mode", "mode": "edges" },
        { "step": "set_start_node", "node": 9, "coords": { "x": 0, "y": 0 } }
      ]
    }"#;
    let err = Script::from_json_str(raw).unwrap().run().unwrap_err();
    assert!(matches!(err, ReplayError::UnknownNode { step: 1, node: 9 }));
}

#[test]
fn invalid_config_is_rejected() {
    let raw = r#"{ "config": { "click_zoom": 0 }, "steps": [] }"#;
    let err = Script::from_json_str(raw).unwrap().run().unwrap_err();
    assert!(matches!(err, ReplayError::Config(ConfigError::NotPositive { field: "click_zoom", .. })));
}

#[test]
fn unknown_step_fails_to_parse() {
    let err = Script::from_json_str(r#"{ "steps": [{ "step": "dance" }] }"#).unwrap_err();
    assert!(matches!(err, ReplayError::Parse(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = Script::load(Path::new("/nonexistent/navcanvas/script.json")).unwrap_err();
    assert!(matches!(err, ReplayError::Io(_)));
}

#[test]
fn hover_and_repaint_steps_run() {
    let raw = r#"{
      "steps": [
        { "step": "switch_cursor", "signal": "enter" },
        { "step": "update_screen" }
      ]
    }"#;
    let host = Script::from_json_str(raw).unwrap().run().unwrap();
    assert_eq!(host.cursor, Some(CursorRole::PointerHand));
}
