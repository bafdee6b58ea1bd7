use super::*;

// =============================================================
// PointerEvent
// =============================================================

#[test]
fn pointer_at_has_no_buttons() {
    let ev = PointerEvent::at(3.0, 4.0);
    assert_eq!(ev.pos, Point::new(3.0, 4.0));
    assert!(!ev.dragging());
    assert!(!ev.left_dragging());
}

#[test]
fn pointer_with_left_is_left_drag() {
    let ev = PointerEvent::at(0.0, 0.0).with_left();
    assert!(ev.dragging());
    assert!(ev.left_dragging());
}

#[test]
fn middle_drag_is_not_left_drag() {
    let ev = PointerEvent { middle_down: true, ..PointerEvent::at(0.0, 0.0) };
    assert!(ev.dragging());
    assert!(!ev.left_dragging());
}

// =============================================================
// LockSignal
// =============================================================

#[test]
fn lock_signal_parses_host_tags() {
    assert_eq!("l_node".parse::<LockSignal>(), Ok(LockSignal::Latch));
    assert_eq!("e_node".parse::<LockSignal>(), Ok(LockSignal::Enter));
    assert_eq!("leave".parse::<LockSignal>(), Ok(LockSignal::Other));
    assert_eq!("".parse::<LockSignal>(), Ok(LockSignal::Other));
}

// =============================================================
// Serde shapes
// =============================================================

#[test]
fn input_event_deserializes_tagged_button() {
    let raw = r#"{"type":"button","button":"primary","transition":"down","pointer":{"pos":{"x":1.0,"y":2.0}}}"#;
    let ev: InputEvent = serde_json::from_str(raw).unwrap();
    assert_eq!(
        ev,
        InputEvent::Button { button: Button::Primary, transition: Transition::Down, pointer: PointerEvent::at(1.0, 2.0) }
    );
}

#[test]
fn input_event_deserializes_wheel() {
    let raw = r#"{"type":"wheel","pointer":{"pos":{"x":0.0,"y":0.0}},"rotation":-120}"#;
    let ev: InputEvent = serde_json::from_str(raw).unwrap();
    assert!(matches!(ev, InputEvent::Wheel { rotation: -120, .. }));
}

#[test]
fn event_kind_button_helper() {
    assert_eq!(
        EventKind::button(Button::Secondary, Transition::Double),
        EventKind::Button { button: Button::Secondary, transition: Transition::Double }
    );
}
