//! Interaction modes: the contract every mode implements, and the variants.
//!
//! A mode interprets raw pointer/keyboard events for one canvas. Every callback
//! on [`Mode`] defaults to doing nothing, so a variant overrides only what it
//! needs. Button callbacks return a [`Flow`]; when a mode leaves a button event
//! [`Flow::Unhandled`] and [`Mode::forwards_buttons`] is set, the dispatcher
//! runs [`hit_test_or_forward`] for it. That replaces the per-mode passthrough
//! boilerplate with one table-driven fallback.
//!
//! | Variant | Module | Idle cursor |
//! |---------|--------|-------------|
//! | Mouse | [`mouse`] | arrow |
//! | Select | [`select`] | cross |
//! | PoseEstimate / NavGoal | [`goal`] | arrow |
//! | Edges | [`edges`] | arrow |
//! | Pan | [`pan`] | hand |
//! | ZoomIn / ZoomOut | [`zoom`] | zoom-in / zoom-out |

pub mod edges;
pub mod goal;
pub mod mouse;
pub mod pan;
pub(crate) mod rubber_band;
pub mod select;
pub mod zoom;

use serde::{Deserialize, Serialize};

use crate::config::ModeConfig;
use crate::cursor::CursorRole;
use crate::host::{GoalKind, Host, ZoomCenter};
use crate::input::{EventKind, HoverSignal, Key, PointerEvent};

pub use edges::EdgesMode;
pub use goal::GoalMode;
pub use mouse::MouseMode;
pub use pan::PanMode;
pub use select::SelectMode;
pub use zoom::{ZoomInMode, ZoomOutMode};

/// Whether a mode consumed a button or wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Handled,
    Unhandled,
}

/// The mode variants a canvas can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Mouse,
    Select,
    PoseEstimate,
    NavGoal,
    Edges,
    Pan,
    ZoomIn,
    ZoomOut,
}

impl ModeKind {
    /// Construct a fresh mode of this kind.
    #[must_use]
    pub fn build(self, config: &ModeConfig) -> Box<dyn Mode> {
        match self {
            Self::Mouse => Box::new(MouseMode::new()),
            Self::Select => Box::new(SelectMode::new(config)),
            Self::PoseEstimate => Box::new(GoalMode::new(GoalKind::PoseEstimate, config)),
            Self::NavGoal => Box::new(GoalMode::new(GoalKind::NavGoal, config)),
            Self::Edges => Box::new(EdgesMode::new(config)),
            Self::Pan => Box::new(PanMode::new(config)),
            Self::ZoomIn => Box::new(ZoomInMode::new(config)),
            Self::ZoomOut => Box::new(ZoomOutMode::new(config)),
        }
    }
}

/// The callbacks a mode may implement. All default to no-ops.
#[allow(unused_variables)]
pub trait Mode {
    fn kind(&self) -> ModeKind;

    /// The cursor the dispatcher shows while this mode is idle.
    fn cursor(&self) -> CursorRole;

    /// Whether unhandled button events fall back to [`hit_test_or_forward`] and
    /// unhandled wheel events are re-raised.
    fn forwards_buttons(&self) -> bool {
        false
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_left_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_left_double(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_middle_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_middle_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_middle_double(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_right_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_right_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }
    fn on_right_double(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        Flow::Unhandled
    }

    /// Wheel rotation; only the sign of `rotation` is meaningful.
    fn on_wheel(&mut self, host: &mut dyn Host, event: &PointerEvent, rotation: i32) -> Flow {
        Flow::Unhandled
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {}
    fn on_key_down(&mut self, host: &mut dyn Host, key: &Key) {}
    fn on_key_up(&mut self, host: &mut dyn Host, key: &Key) {}

    /// Called right before the dispatcher detaches this mode.
    fn unset(&mut self, host: &mut dyn Host) {}

    /// Called after the host repaints, so transient overlays can be redrawn.
    fn update_screen(&mut self, host: &mut dyn Host) {}

    /// The one-shot timer armed via [`Host::start_redraw_timer`] fired.
    fn on_timer(&mut self, host: &mut dyn Host) {}

    /// Hover enter/leave over an interactive graphic.
    fn switch_cursor(&mut self, host: &mut dyn Host, signal: HoverSignal) {}

    /// Downcast for the external edge-creation calls.
    fn as_edges(&mut self) -> Option<&mut EdgesMode> {
        None
    }
}

/// Let the host's objects claim the event; otherwise re-raise it upward.
pub fn hit_test_or_forward(host: &mut dyn Host, event: &PointerEvent, kind: EventKind) {
    if !host.hit_test(event, kind) {
        host.raise_event(event, kind);
    }
}

/// Wheel zoom shared by pan and zoom modes: negative rotation zooms out.
pub(crate) fn wheel_zoom(host: &mut dyn Host, rotation: i32, config: &ModeConfig) {
    let factor = if rotation < 0 { config.wheel_zoom_out } else { config.wheel_zoom_in };
    host.zoom(factor, ZoomCenter::View);
}

/// Pointer-hand over interactive graphics, arrow elsewhere. Skips the host
/// call when the cursor would not change.
pub(crate) fn hover_cursor(host: &mut dyn Host, current: &mut CursorRole, signal: HoverSignal) {
    let next = match signal {
        HoverSignal::Enter => CursorRole::PointerHand,
        HoverSignal::Leave => CursorRole::Arrow,
    };
    if *current != next {
        host.set_cursor(next);
        *current = next;
    }
}
