//! The narrow capability interface modes call back into.
//!
//! A canvas implements [`Host`] once; the dispatcher lends it to the active mode
//! on every callback. Modes never reach for the canvas any other way.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails loudly. Removing a graphic or recoloring a node that is
//! already gone reports `false` and changes nothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{BBox, Point, PixelRect, Size};
use crate::cursor::CursorRole;
use crate::input::{EventKind, PointerEvent};
use crate::style::{LineSpec, OverlayPen, Rgb};

/// Handle of a host-owned graphic primitive.
pub type GraphicId = Uuid;

/// Id of a graph node drawn by the host.
pub type NodeId = u32;

/// Where a zoom is centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomCenter {
    /// The center of the current view.
    View,
    Pixel(Point),
    World(Point),
}

/// Interaction flags a host can swap temporarily (see [`Host::push_mode_flags`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeFlags {
    pub auto_erase: bool,
    pub manual_edges: bool,
    pub redraw: bool,
}

/// Selection rectangle published by the select mode, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub start: Point,
    pub end: Point,
}

impl SelectionBox {
    /// The zero-size box that clears a selection.
    #[must_use]
    pub fn empty() -> Self {
        Self { start: Point::default(), end: Point::default() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Which goal a directed-line drag publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    PoseEstimate,
    NavGoal,
}

/// A completed qualifying goal drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalDrag {
    pub start: Point,
    pub end: Point,
    /// The "done" arrow left on the canvas for this goal.
    pub graphic: GraphicId,
}

/// Everything a mode may ask of its canvas.
pub trait Host {
    // --- Coordinates ---

    fn pixel_to_world(&self, pixel: Point) -> Point;
    fn world_to_pixel(&self, world: Point) -> Point;
    fn panel_size(&self) -> Size;

    fn aspect_ratio(&self) -> f64 {
        self.panel_size().aspect_ratio()
    }

    // --- Graphic objects ---

    fn add_line(&mut self, line: LineSpec) -> GraphicId;

    /// Remove a graphic. Returns whether it was present.
    fn remove_if_present(&mut self, id: GraphicId) -> bool;

    // --- Pointer and cursor ---

    fn capture_pointer(&mut self);
    fn release_pointer(&mut self);
    fn set_cursor(&mut self, cursor: CursorRole);

    // --- Redraw ---

    /// Full redraw. `force` rebuilds the buffers even if nothing changed.
    fn draw(&mut self, force: bool);

    /// Shift the viewport by a pixel delta; `redraw` requests a full render afterwards.
    fn move_image(&mut self, delta: Point, redraw: bool);

    /// Paint a strip of plain background.
    fn fill_background(&mut self, rect: PixelRect);

    /// Blit the already-rendered buffer at a pixel offset.
    fn blit_buffer(&mut self, offset: Point);

    /// Draw an XOR-mode rectangle outline; drawing it twice erases it.
    fn xor_rectangle(&mut self, rect: PixelRect, pen: OverlayPen);

    /// (Re)arm the one-shot redraw timer. The host calls
    /// [`crate::dispatch::Dispatcher::on_timer`] when it fires.
    fn start_redraw_timer(&mut self, delay: Duration);

    // --- Events ---

    /// Whether a host-owned object consumed the event.
    ///
    /// The dispatcher holds `&mut self` for the whole call, so a node hit
    /// cannot call back into [`crate::dispatch::Dispatcher::set_start_node`],
    /// `lock_edge` or `set_end_node` from here. Queue the node call and make it
    /// once [`crate::dispatch::Dispatcher::handle`] has returned.
    fn hit_test(&mut self, event: &PointerEvent, kind: EventKind) -> bool;
    fn mouse_over_test(&mut self, event: &PointerEvent);

    /// Re-raise an event to application subscribers.
    fn raise_event(&mut self, event: &PointerEvent, kind: EventKind);

    // --- Viewport ---

    fn zoom(&mut self, factor: f64, center: ZoomCenter);
    fn zoom_to_bbox(&mut self, bbox: BBox);
    fn set_selection_box(&mut self, selection: SelectionBox);

    // --- Graph editing ---

    /// Recolor a node. Returns whether the node exists.
    fn set_node_fill(&mut self, node: NodeId, fill: Rgb) -> bool;

    /// Swap in `flags` under `tag` until [`Host::restore_mode_flags`] with the same tag.
    fn push_mode_flags(&mut self, tag: &'static str, flags: ModeFlags);
    fn restore_mode_flags(&mut self, tag: &'static str);

    /// Select a node; `exclusive` clears the previous selection first.
    fn select_node(&mut self, node: NodeId, exclusive: bool) -> bool;
    fn deselect_all(&mut self);

    /// Materialize edges between the currently selected nodes.
    fn create_edges(&mut self);

    // --- Upward publication ---

    fn publish_goal(&mut self, kind: GoalKind, goal: GoalDrag);
}
