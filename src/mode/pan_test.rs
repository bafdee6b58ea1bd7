#![allow(clippy::float_cmp)]

use super::*;
use crate::recorder::{HostCall, RecordingHost};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn pan() -> PanMode {
    PanMode::new(&ModeConfig::default())
}

fn moves(host: &RecordingHost) -> Vec<(Point, bool)> {
    host.calls
        .iter()
        .filter_map(|c| match c {
            HostCall::MoveImage { delta, redraw } => Some((*delta, *redraw)),
            _ => None,
        })
        .collect()
}

// =============================================================
// exposed_strips
// =============================================================

#[test]
fn strips_right_and_up() {
    let strips = exposed_strips(pt(0.0, 0.0), pt(30.0, -20.0), Size::new(200.0, 100.0));
    assert_eq!(strips, [PixelRect::new(0.0, 0.0, 30.0, 100.0), PixelRect::new(0.0, 80.0, 200.0, 20.0)]);
}

#[test]
fn strips_right_and_down() {
    let strips = exposed_strips(pt(0.0, 0.0), pt(10.0, 5.0), Size::new(200.0, 100.0));
    assert_eq!(strips, [PixelRect::new(0.0, 0.0, 200.0, 5.0), PixelRect::new(0.0, 0.0, 10.0, 100.0)]);
}

#[test]
fn strips_left_and_down() {
    let strips = exposed_strips(pt(0.0, 0.0), pt(-10.0, 5.0), Size::new(200.0, 100.0));
    assert_eq!(strips, [PixelRect::new(0.0, 0.0, 200.0, 5.0), PixelRect::new(190.0, 0.0, 10.0, 95.0)]);
}

#[test]
fn strips_left_and_up() {
    let strips = exposed_strips(pt(0.0, 0.0), pt(-10.0, -5.0), Size::new(200.0, 100.0));
    assert_eq!(strips, [PixelRect::new(190.0, 0.0, 10.0, 100.0), PixelRect::new(0.0, 95.0, 200.0, 5.0)]);
}

// =============================================================
// Drag
// =============================================================

#[test]
fn drag_moves_image_by_mid_minus_end() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_left_down(&mut host, &PointerEvent::at(100.0, 100.0).with_left());
    mode.on_move(&mut host, &PointerEvent::at(130.0, 80.0).with_left());

    assert_eq!(moves(&host), vec![(pt(-30.0, 20.0), false)]);
    assert_eq!(mode.mid(), pt(130.0, 80.0));
    assert_eq!(mode.anchor(), Some(pt(100.0, 100.0)));
    assert_eq!(host.count(|c| matches!(c, HostCall::BlitBuffer { offset } if *offset == pt(30.0, -20.0))), 1);
    assert_eq!(host.count(|c| matches!(c, HostCall::FillBackground { .. })), 2);
    assert_eq!(host.timer, Some(Duration::from_millis(30)));
}

#[test]
fn press_grabs_and_release_restores_cursor() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_left_down(&mut host, &PointerEvent::at(0.0, 0.0).with_left());
    assert_eq!(host.cursor, Some(CursorRole::GrabHand));
    assert!(host.captured);
    mode.on_left_up(&mut host, &PointerEvent::at(0.0, 0.0));
    assert_eq!(host.cursor, Some(CursorRole::Hand));
    assert_eq!(mode.anchor(), None);
}

#[test]
fn release_applies_final_delta_with_redraw() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_left_down(&mut host, &PointerEvent::at(100.0, 100.0).with_left());
    mode.on_move(&mut host, &PointerEvent::at(130.0, 80.0).with_left());
    mode.on_left_up(&mut host, &PointerEvent::at(140.0, 80.0));

    assert_eq!(moves(&host), vec![(pt(-30.0, 20.0), false), (pt(-10.0, 0.0), true)]);
    assert_eq!(host.camera.pan_x, 40.0);
    assert_eq!(host.camera.pan_y, -20.0);
}

#[test]
fn release_without_press_moves_nothing() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_left_up(&mut host, &PointerEvent::at(50.0, 50.0));
    assert!(moves(&host).is_empty());
}

#[test]
fn hover_does_not_pan() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_move(&mut host, &PointerEvent::at(130.0, 80.0));
    assert!(moves(&host).is_empty());
    assert_eq!(host.timer, None);
}

#[test]
fn repaint_resyncs_anchor_to_mid() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_left_down(&mut host, &PointerEvent::at(100.0, 100.0).with_left());
    mode.on_move(&mut host, &PointerEvent::at(130.0, 80.0).with_left());
    mode.update_screen(&mut host);
    assert_eq!(mode.anchor(), Some(pt(130.0, 80.0)));

    // The next move blits relative to the resynced anchor.
    mode.on_move(&mut host, &PointerEvent::at(135.0, 80.0).with_left());
    assert_eq!(host.count(|c| matches!(c, HostCall::BlitBuffer { offset } if *offset == pt(5.0, 0.0))), 1);
}

#[test]
fn repaint_while_idle_keeps_no_anchor() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.update_screen(&mut host);
    assert_eq!(mode.anchor(), None);
}

#[test]
fn timer_requests_lazy_redraw() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    mode.on_timer(&mut host);
    assert_eq!(host.calls, vec![HostCall::Draw { force: false }]);
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_sign_picks_factor() {
    let mut host = RecordingHost::default();
    let mut mode = pan();
    let event = PointerEvent::at(10.0, 10.0);
    mode.on_wheel(&mut host, &event, -120);
    mode.on_wheel(&mut host, &event, 120);
    let factors: Vec<f64> = host
        .calls
        .iter()
        .filter_map(|c| match c {
            HostCall::Zoom { factor, center: crate::host::ZoomCenter::View } => Some(*factor),
            _ => None,
        })
        .collect();
    assert_eq!(factors, vec![0.9, 1.1]);
}
