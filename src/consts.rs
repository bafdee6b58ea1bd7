//! Shared default constants for the mode crate.
//!
//! These seed [`crate::config::ModeConfig`]; modes read the config, not these.

use crate::style::{OverlayPen, Rgb};

// ── Drag thresholds ─────────────────────────────────────────────

/// Select / zoom-in boxes need more than this many pixels on BOTH axes.
pub const BOX_THRESHOLD_PX: f64 = 10.0;

/// Pose / goal arrows need more than this many pixels on EITHER axis.
pub const GOAL_THRESHOLD_PX: f64 = 5.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Wheel rotation below zero zooms by this factor.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Wheel rotation at or above zero zooms by this factor.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Click zoom factor; clicks that zoom out use its reciprocal.
pub const CLICK_ZOOM: f64 = 1.5;

// ── Pan ─────────────────────────────────────────────────────────

/// Idle time after the last pan move before a full re-render.
pub const PAN_REDRAW_DELAY_MS: u64 = 30;

// ── Lines ───────────────────────────────────────────────────────

pub const GOAL_LINE_WIDTH: f64 = 3.0;
pub const GOAL_ARROW_HEAD: f64 = 10.0;
pub const EDGE_WIDTH: f64 = 4.0;

// ── Colors ──────────────────────────────────────────────────────

pub const POSE_PREVIEW_COLOR: Rgb = Rgb(225, 113, 45);
pub const NAV_PREVIEW_COLOR: Rgb = Rgb(169, 81, 133);
pub const GOAL_DONE_COLOR: Rgb = Rgb(20, 200, 0);
pub const EDGE_NORMAL_COLOR: Rgb = Rgb(110, 110, 105);
pub const EDGE_LOCKED_COLOR: Rgb = Rgb(255, 106, 54);
pub const NODE_NORMAL_COLOR: Rgb = Rgb(240, 240, 240);
pub const NODE_LOCKED_COLOR: Rgb = Rgb(255, 106, 54);

// ── Overlay pens ────────────────────────────────────────────────

/// Pen for the select-mode rubber band. Every invert of one band uses the same
/// pen, so the second invert restores the pixels.
pub const SELECT_BAND_PEN: OverlayPen = OverlayPen { color: Rgb(128, 128, 128), width: 2, dashed: true };

/// Pen for the zoom-in rubber band.
pub const ZOOM_BAND_PEN: OverlayPen = OverlayPen { color: Rgb(255, 255, 255), width: 2, dashed: true };
