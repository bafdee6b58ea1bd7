//! Headless [`Host`] that keeps just enough canvas state to be checked, and a
//! log of every call made into it.
//!
//! Graphics, node fills, the selection and the camera behave like a real
//! canvas would: removing a missing graphic reports `false`, zooms move the
//! camera, committed edges connect the selected nodes. Hit-testing is scripted
//! through [`RecordingHost::claim`].

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::camera::{BBox, Camera, Point, PixelRect, Size};
use crate::cursor::CursorRole;
use crate::host::{GoalDrag, GoalKind, GraphicId, Host, ModeFlags, NodeId, SelectionBox, ZoomCenter};
use crate::input::{EventKind, PointerEvent};
use crate::style::{LineSpec, OverlayPen, Rgb};

/// One call into the host, as recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    AddLine { id: GraphicId, line: LineSpec },
    Remove { id: GraphicId, present: bool },
    CapturePointer,
    ReleasePointer,
    SetCursor { cursor: CursorRole },
    Draw { force: bool },
    MoveImage { delta: Point, redraw: bool },
    FillBackground { rect: PixelRect },
    BlitBuffer { offset: Point },
    XorRectangle { rect: PixelRect, pen: OverlayPen },
    StartRedrawTimer { delay_ms: u64 },
    HitTest { kind: EventKind, hit: bool },
    MouseOverTest { pos: Point },
    RaiseEvent { kind: EventKind, pos: Point },
    Zoom { factor: f64, center: ZoomCenter },
    ZoomToBbox { bbox: BBox },
    SetSelectionBox { selection: SelectionBox },
    SetNodeFill { node: NodeId, fill: Rgb, present: bool },
    PushModeFlags { tag: String, flags: ModeFlags },
    RestoreModeFlags { tag: String },
    SelectNode { node: NodeId, exclusive: bool, present: bool },
    DeselectAll,
    CreateEdges { created: Vec<(NodeId, NodeId)> },
    PublishGoal { kind: GoalKind, goal: GoalDrag },
}

#[derive(Debug)]
pub struct RecordingHost {
    pub camera: Camera,
    pub size: Size,
    pub calls: Vec<HostCall>,
    pub graphics: HashMap<GraphicId, LineSpec>,
    pub nodes: BTreeMap<NodeId, Rgb>,
    pub selected: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
    pub flags: ModeFlags,
    pub captured: bool,
    pub cursor: Option<CursorRole>,
    pub selection: Option<SelectionBox>,
    pub published: Vec<(GoalKind, GoalDrag)>,
    pub timer: Option<Duration>,
    claimed: HashSet<EventKind>,
    saved_flags: Vec<(&'static str, ModeFlags)>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl RecordingHost {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            camera: Camera::default(),
            size,
            calls: Vec::new(),
            graphics: HashMap::new(),
            nodes: BTreeMap::new(),
            selected: Vec::new(),
            edges: Vec::new(),
            flags: ModeFlags { auto_erase: true, manual_edges: false, redraw: true },
            captured: false,
            cursor: None,
            selection: None,
            published: Vec::new(),
            timer: None,
            claimed: HashSet::new(),
            saved_flags: Vec::new(),
        }
    }

    /// Register a node graphic with the given fill.
    pub fn add_node(&mut self, id: NodeId, fill: Rgb) {
        self.nodes.insert(id, fill);
    }

    /// Make host objects consume (or stop consuming) events of `kind`.
    pub fn claim(&mut self, kind: EventKind, hit: bool) {
        if hit {
            self.claimed.insert(kind);
        } else {
            self.claimed.remove(&kind);
        }
    }

    #[must_use]
    pub fn node_fill(&self, id: NodeId) -> Option<Rgb> {
        self.nodes.get(&id).copied()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Forget the call log, keeping canvas state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Take the pending redraw timer, as if it had fired.
    pub fn fire_timer(&mut self) -> bool {
        self.timer.take().is_some()
    }
}

impl Host for RecordingHost {
    fn pixel_to_world(&self, pixel: Point) -> Point {
        self.camera.screen_to_world(pixel)
    }

    fn world_to_pixel(&self, world: Point) -> Point {
        self.camera.world_to_screen(world)
    }

    fn panel_size(&self) -> Size {
        self.size
    }

    fn add_line(&mut self, line: LineSpec) -> GraphicId {
        let id = Uuid::new_v4();
        self.graphics.insert(id, line);
        self.calls.push(HostCall::AddLine { id, line });
        id
    }

    fn remove_if_present(&mut self, id: GraphicId) -> bool {
        let present = self.graphics.remove(&id).is_some();
        self.calls.push(HostCall::Remove { id, present });
        present
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
        self.calls.push(HostCall::CapturePointer);
    }

    fn release_pointer(&mut self) {
        if self.captured {
            self.captured = false;
            self.calls.push(HostCall::ReleasePointer);
        }
    }

    fn set_cursor(&mut self, cursor: CursorRole) {
        self.cursor = Some(cursor);
        self.calls.push(HostCall::SetCursor { cursor });
    }

    fn draw(&mut self, force: bool) {
        self.calls.push(HostCall::Draw { force });
    }

    fn move_image(&mut self, delta: Point, redraw: bool) {
        self.camera.shift(delta);
        self.calls.push(HostCall::MoveImage { delta, redraw });
    }

    fn fill_background(&mut self, rect: PixelRect) {
        self.calls.push(HostCall::FillBackground { rect });
    }

    fn blit_buffer(&mut self, offset: Point) {
        self.calls.push(HostCall::BlitBuffer { offset });
    }

    fn xor_rectangle(&mut self, rect: PixelRect, pen: OverlayPen) {
        self.calls.push(HostCall::XorRectangle { rect, pen });
    }

    fn start_redraw_timer(&mut self, delay: Duration) {
        self.timer = Some(delay);
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.calls.push(HostCall::StartRedrawTimer { delay_ms });
    }

    fn hit_test(&mut self, _event: &PointerEvent, kind: EventKind) -> bool {
        let hit = self.claimed.contains(&kind);
        self.calls.push(HostCall::HitTest { kind, hit });
        hit
    }

    fn mouse_over_test(&mut self, event: &PointerEvent) {
        self.calls.push(HostCall::MouseOverTest { pos: event.pos });
    }

    fn raise_event(&mut self, event: &PointerEvent, kind: EventKind) {
        self.calls.push(HostCall::RaiseEvent { kind, pos: event.pos });
    }

    fn zoom(&mut self, factor: f64, center: ZoomCenter) {
        let pixel_center = match center {
            ZoomCenter::View => Point::new(self.size.width / 2.0, self.size.height / 2.0),
            ZoomCenter::Pixel(p) => p,
            ZoomCenter::World(p) => self.camera.world_to_screen(p),
        };
        self.camera.zoom_about(factor, pixel_center);
        self.calls.push(HostCall::Zoom { factor, center });
    }

    fn zoom_to_bbox(&mut self, bbox: BBox) {
        self.camera.fit(bbox, self.size);
        self.calls.push(HostCall::ZoomToBbox { bbox });
    }

    fn set_selection_box(&mut self, selection: SelectionBox) {
        self.selection = Some(selection);
        self.calls.push(HostCall::SetSelectionBox { selection });
    }

    fn set_node_fill(&mut self, node: NodeId, fill: Rgb) -> bool {
        let present = match self.nodes.get_mut(&node) {
            Some(slot) => {
                *slot = fill;
                true
            }
            None => false,
        };
        self.calls.push(HostCall::SetNodeFill { node, fill, present });
        present
    }

    fn push_mode_flags(&mut self, tag: &'static str, flags: ModeFlags) {
        self.saved_flags.push((tag, self.flags));
        self.flags = flags;
        self.calls.push(HostCall::PushModeFlags { tag: tag.to_owned(), flags });
    }

    fn restore_mode_flags(&mut self, tag: &'static str) {
        if let Some(pos) = self.saved_flags.iter().rposition(|(t, _)| *t == tag) {
            let (_, saved) = self.saved_flags.remove(pos);
            self.flags = saved;
        }
        self.calls.push(HostCall::RestoreModeFlags { tag: tag.to_owned() });
    }

    fn select_node(&mut self, node: NodeId, exclusive: bool) -> bool {
        let present = self.nodes.contains_key(&node);
        if present {
            if exclusive {
                self.selected.clear();
            }
            if !self.selected.contains(&node) {
                self.selected.push(node);
            }
        }
        self.calls.push(HostCall::SelectNode { node, exclusive, present });
        present
    }

    fn deselect_all(&mut self) {
        self.selected.clear();
        self.calls.push(HostCall::DeselectAll);
    }

    fn create_edges(&mut self) {
        let created: Vec<(NodeId, NodeId)> = self.selected.windows(2).map(|w| (w[0], w[1])).collect();
        self.edges.extend(created.iter().copied());
        self.calls.push(HostCall::CreateEdges { created });
    }

    fn publish_goal(&mut self, kind: GoalKind, goal: GoalDrag) {
        self.published.push((kind, goal));
        self.calls.push(HostCall::PublishGoal { kind, goal });
    }
}
