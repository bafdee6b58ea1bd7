//! Node-to-node edge creation.
//!
//! DESIGN
//! ======
//! ```text
//! Idle ──set_start_node──▶ Pending ──lock_edge(confirm)──▶ Locked
//!  ▲                        │  ▲                            │
//!  │                        │  └──lock_edge(other)──────────┘
//!  └──set_end_node / empty-canvas click / unset─────────────┘
//! ```
//! While pending, a single preview line follows the pointer. Locking needs two
//! signals: an `l_node` arms the lock, then a second `l_node` (or any `e_node`)
//! completes it. That debounces the duplicate enter events a node's hit region
//! produces. A locked candidate recolors the preview; any other signal drops the
//! lock and restores the candidate's fill.
//!
//! Node fills are host state. Whenever a node stops being the start or the
//! locked candidate it is painted back to the normal color.

#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;

use tracing::debug;

use crate::camera::Point;
use crate::config::ModeConfig;
use crate::cursor::CursorRole;
use crate::host::{GraphicId, Host, ModeFlags, NodeId};
use crate::input::{Button, EventKind, HoverSignal, LockSignal, PointerEvent, Transition};
use crate::style::{LineSpec, Rgb};

use super::{Flow, Mode, ModeKind, hit_test_or_forward};

/// Tag under which the commit swaps the host's mode flags.
pub const COMMIT_FLAGS_TAG: &str = "set_end_node";

/// Flags the host runs with while an edge is being materialized.
pub const COMMIT_FLAGS: ModeFlags = ModeFlags { auto_erase: false, manual_edges: true, redraw: false };

/// A node together with its world-space anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAnchor {
    pub id: NodeId,
    pub coords: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Lock {
    Open { armed: bool },
    /// `target` is `None` when the lock landed on the start node itself, or
    /// arrived while no start node was chosen.
    Locked { target: Option<NodeAnchor> },
}

/// Where the edge interaction stands, as observed from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgePhase {
    Idle,
    Pending { start: NodeAnchor },
    Locked { start: NodeAnchor, target: NodeAnchor },
}

#[derive(Debug)]
pub struct EdgesMode {
    start: Option<NodeAnchor>,
    lock: Lock,
    preview: Option<GraphicId>,
    cursor: CursorRole,
    width: f64,
    edge_normal: Rgb,
    edge_locked: Rgb,
    node_normal: Rgb,
    node_locked: Rgb,
}

impl EdgesMode {
    #[must_use]
    pub fn new(config: &ModeConfig) -> Self {
        Self {
            start: None,
            lock: Lock::Open { armed: false },
            preview: None,
            cursor: CursorRole::Arrow,
            width: config.edge_width,
            edge_normal: config.palette.edge_normal,
            edge_locked: config.palette.edge_locked,
            node_normal: config.palette.node_normal,
            node_locked: config.palette.node_locked,
        }
    }

    #[must_use]
    pub fn phase(&self) -> EdgePhase {
        match (self.start, self.lock) {
            (None, _) => EdgePhase::Idle,
            (Some(start), Lock::Locked { target: Some(target) }) => EdgePhase::Locked { start, target },
            (Some(start), _) => EdgePhase::Pending { start },
        }
    }

    #[must_use]
    pub fn start_node(&self) -> Option<NodeId> {
        self.start.map(|s| s.id)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self.lock, Lock::Locked { .. })
    }

    /// Whether the first `l_node` of the lock handshake has arrived.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.lock, Lock::Open { armed: true })
    }

    #[must_use]
    pub fn preview(&self) -> Option<GraphicId> {
        self.preview
    }

    /// A node graphic was picked as the edge origin.
    pub fn set_start_node(&mut self, host: &mut dyn Host, id: NodeId, coords: Point) {
        if let Some(prev) = self.start {
            if prev.id != id {
                host.set_node_fill(prev.id, self.node_normal);
            }
        }
        self.unlock(host);
        self.start = Some(NodeAnchor { id, coords });
        host.set_node_fill(id, self.node_locked);
        host.capture_pointer();
        debug!(node = id, "edge start selected");
    }

    /// Feed one signal of the lock handshake. `id` is `None` when the host
    /// reports no node under the pointer.
    pub fn lock_edge(&mut self, host: &mut dyn Host, signal: LockSignal, id: Option<NodeId>, coords: Point) {
        match (self.lock, signal) {
            (Lock::Open { armed: true }, LockSignal::Latch) | (Lock::Open { .. }, LockSignal::Enter) => {
                self.lock = Lock::Locked { target: None };
                let (Some(start), Some(id)) = (self.start, id) else {
                    debug!(?signal, "edge lock without start or node");
                    return;
                };
                host.set_node_fill(id, self.node_locked);
                if id != start.id {
                    let target = NodeAnchor { id, coords };
                    self.replace_preview(host, start.coords, coords, self.edge_locked);
                    self.lock = Lock::Locked { target: Some(target) };
                    host.draw(true);
                    debug!(start = start.id, target = id, "edge locked");
                }
            }
            (Lock::Open { armed: false }, LockSignal::Latch) => {
                self.lock = Lock::Open { armed: true };
                debug!("edge lock armed");
            }
            (lock, _) => {
                self.unlock(host);
                if let Lock::Locked { .. } = lock {
                    debug!(?signal, "edge unlocked");
                }
            }
        }
    }

    /// Commit the edge from the start node to `end`.
    ///
    /// The host runs its edge routine with auto-erase and redraw suspended, so
    /// only the single draw at the end reaches the screen.
    pub fn set_end_node(&mut self, host: &mut dyn Host, end: NodeId) {
        let Some(start) = self.start else {
            debug!(node = end, "edge end without start; ignored");
            return;
        };

        host.push_mode_flags(COMMIT_FLAGS_TAG, COMMIT_FLAGS);
        host.select_node(start.id, true);
        host.select_node(end, false);
        host.create_edges();
        host.restore_mode_flags(COMMIT_FLAGS_TAG);

        self.reset(host);
        host.deselect_all();
        host.draw(true);
        debug!(start = start.id, end, "edge committed");
    }

    /// Back to idle: restore fills, drop the preview and the lock.
    fn reset(&mut self, host: &mut dyn Host) {
        self.unlock(host);
        if let Some(start) = self.start.take() {
            host.set_node_fill(start.id, self.node_normal);
        }
        self.erase_preview(host);
        self.lock = Lock::Open { armed: false };
    }

    /// Drop a lock, restoring the candidate's fill. An armed open lock stays armed.
    fn unlock(&mut self, host: &mut dyn Host) {
        if let Lock::Locked { target } = self.lock {
            if let Some(target) = target {
                host.set_node_fill(target.id, self.node_normal);
            }
            self.lock = Lock::Open { armed: false };
        }
    }

    fn erase_preview(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.preview.take() {
            host.remove_if_present(id);
        }
    }

    fn replace_preview(&mut self, host: &mut dyn Host, from: Point, to: Point, color: Rgb) {
        self.erase_preview(host);
        self.preview = Some(host.add_line(LineSpec::line(from, to, self.width, color)));
    }
}

impl Mode for EdgesMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Edges
    }

    fn cursor(&self) -> CursorRole {
        self.cursor
    }

    fn forwards_buttons(&self) -> bool {
        true
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        let kind = EventKind::button(Button::Primary, Transition::Down);
        if !host.hit_test(event, kind) {
            // Empty canvas: abandon any pending edge.
            if self.start.is_some() {
                debug!("edge cancelled");
            }
            self.reset(host);
            host.draw(true);
            host.raise_event(event, kind);
        }
        Flow::Handled
    }

    fn on_left_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        hit_test_or_forward(host, event, EventKind::button(Button::Primary, Transition::Up));
        Flow::Handled
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {
        host.mouse_over_test(event);
        host.raise_event(event, EventKind::Motion);
        let Some(start) = self.start else {
            return;
        };
        if self.is_locked() {
            return;
        }
        let to = host.pixel_to_world(event.pos);
        self.replace_preview(host, start.coords, to, self.edge_normal);
        host.draw(true);
    }

    fn unset(&mut self, host: &mut dyn Host) {
        self.reset(host);
    }

    fn switch_cursor(&mut self, host: &mut dyn Host, signal: HoverSignal) {
        super::hover_cursor(host, &mut self.cursor, signal);
    }

    fn as_edges(&mut self) -> Option<&mut EdgesMode> {
        Some(self)
    }
}
