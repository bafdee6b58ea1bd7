#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// band_rect
// =============================================================

#[test]
fn band_rect_without_aspect_spans_drag() {
    let r = band_rect(pt(10.0, 10.0), pt(50.0, 30.0), None);
    assert_eq!(r, PixelRect::new(10.0, 10.0, 40.0, 20.0));
}

#[test]
fn band_rect_is_order_independent() {
    assert_eq!(band_rect(pt(50.0, 30.0), pt(10.0, 10.0), None), band_rect(pt(10.0, 10.0), pt(50.0, 30.0), None));
}

#[test]
fn band_rect_widens_to_aspect() {
    // 2:1 panel, tall drag: width grows to twice the height.
    let r = band_rect(pt(0.0, 0.0), pt(20.0, 40.0), Some(2.0));
    assert_eq!(r.width, 80.0);
    assert_eq!(r.height, 40.0);
    assert_eq!(r.x, 10.0 - 40.0);
}

#[test]
fn band_rect_sets_height_from_width() {
    let r = band_rect(pt(0.0, 0.0), pt(100.0, 10.0), Some(2.0));
    assert_eq!(r.width, 100.0);
    assert_eq!(r.height, 50.0);
}

// =============================================================
// Threshold
// =============================================================

#[test]
fn box_threshold_needs_both_axes() {
    assert!(exceeds_box_threshold(pt(0.0, 0.0), pt(11.0, 11.0), 10.0));
    assert!(!exceeds_box_threshold(pt(0.0, 0.0), pt(11.0, 10.0), 10.0));
    assert!(!exceeds_box_threshold(pt(0.0, 0.0), pt(200.0, 3.0), 10.0));
    assert!(!exceeds_box_threshold(pt(0.0, 0.0), pt(10.0, 10.0), 10.0));
}

#[test]
fn box_threshold_uses_absolute_displacement() {
    assert!(exceeds_box_threshold(pt(100.0, 100.0), pt(80.0, 70.0), 10.0));
}

// =============================================================
// State
// =============================================================

#[test]
fn finish_returns_anchor_once() {
    let mut band = RubberBand::default();
    band.begin(pt(1.0, 2.0));
    assert_eq!(band.finish(), Some(pt(1.0, 2.0)));
    assert_eq!(band.finish(), None);
    assert!(band.drawn().is_none());
}
