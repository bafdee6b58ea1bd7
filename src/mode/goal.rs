//! Drag-to-publish directed line, used for both pose estimates and navigation goals.
//!
//! Press anchors the arrow, dragging replaces a single preview arrow, and a
//! release past the threshold on either axis swaps the preview for a "done"
//! arrow and publishes the goal. Each canvas mode instance owns its own
//! preview; pose and nav instances never share one.

#[cfg(test)]
#[path = "goal_test.rs"]
mod goal_test;

use crate::camera::Point;
use crate::config::ModeConfig;
use crate::cursor::CursorRole;
use crate::host::{GoalDrag, GoalKind, GraphicId, Host};
use crate::input::{EventKind, PointerEvent};
use crate::style::{LineSpec, Rgb};

use super::{Flow, Mode, ModeKind};

#[derive(Debug)]
pub struct GoalMode {
    goal: GoalKind,
    start: Option<Point>,
    arrow: Option<GraphicId>,
    threshold: f64,
    width: f64,
    head: f64,
    preview_color: Rgb,
    done_color: Rgb,
}

impl GoalMode {
    #[must_use]
    pub fn new(goal: GoalKind, config: &ModeConfig) -> Self {
        let preview_color = match goal {
            GoalKind::PoseEstimate => config.palette.pose_preview,
            GoalKind::NavGoal => config.palette.nav_preview,
        };
        Self {
            goal,
            start: None,
            arrow: None,
            threshold: config.goal_threshold_px,
            width: config.goal_line_width,
            head: config.goal_arrow_head,
            preview_color,
            done_color: config.palette.goal_done,
        }
    }

    /// The arrow currently on the canvas for this mode, preview or done.
    #[must_use]
    pub fn arrow(&self) -> Option<GraphicId> {
        self.arrow
    }

    fn clear_arrow(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.arrow.take() {
            host.remove_if_present(id);
        }
    }

    fn replace_arrow(&mut self, host: &mut dyn Host, from: Point, to: Point, color: Rgb) -> GraphicId {
        self.clear_arrow(host);
        let id = host.add_line(LineSpec::arrow(from, to, self.width, color, self.head));
        self.arrow = Some(id);
        id
    }
}

/// A goal drag counts if it moved past `threshold` on EITHER axis.
pub(crate) fn exceeds_goal_threshold(start: Point, end: Point, threshold: f64) -> bool {
    (start.x - end.x).abs() > threshold || (start.y - end.y).abs() > threshold
}

impl Mode for GoalMode {
    fn kind(&self) -> ModeKind {
        match self.goal {
            GoalKind::PoseEstimate => ModeKind::PoseEstimate,
            GoalKind::NavGoal => ModeKind::NavGoal,
        }
    }

    fn cursor(&self) -> CursorRole {
        CursorRole::Arrow
    }

    fn forwards_buttons(&self) -> bool {
        true
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        self.start = Some(event.pos);
        self.clear_arrow(host);
        host.capture_pointer();
        Flow::Handled
    }

    fn on_left_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        let Some(start) = self.start.take() else {
            return Flow::Handled;
        };
        let end = event.pos;

        if exceeds_goal_threshold(start, end, self.threshold) {
            let start = host.pixel_to_world(start);
            let end = host.pixel_to_world(end);
            let graphic = self.replace_arrow(host, start, end, self.done_color);
            host.publish_goal(self.goal, GoalDrag { start, end, graphic });
        } else {
            self.clear_arrow(host);
        }
        host.draw(true);
        Flow::Handled
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {
        host.raise_event(event, EventKind::Motion);
        let Some(start) = self.start else {
            return;
        };
        if !event.left_dragging() {
            return;
        }
        let from = host.pixel_to_world(start);
        let to = host.pixel_to_world(event.pos);
        self.replace_arrow(host, from, to, self.preview_color);
        host.draw(true);
    }

    fn unset(&mut self, host: &mut dyn Host) {
        // A drag cut short by a mode switch leaves no preview behind.
        if self.start.take().is_some() {
            self.clear_arrow(host);
        }
    }
}
