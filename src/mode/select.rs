//! Box selection with an XOR rubber band.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use crate::config::ModeConfig;
use crate::consts::SELECT_BAND_PEN;
use crate::cursor::CursorRole;
use crate::host::{Host, SelectionBox};
use crate::input::{Button, EventKind, PointerEvent, Transition};

use super::rubber_band::{RubberBand, exceeds_box_threshold};
use super::{Flow, Mode, ModeKind, hit_test_or_forward};

#[derive(Debug)]
pub struct SelectMode {
    band: RubberBand,
    threshold: f64,
}

impl SelectMode {
    #[must_use]
    pub fn new(config: &ModeConfig) -> Self {
        Self { band: RubberBand::default(), threshold: config.box_threshold_px }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.band.anchor().is_some()
    }
}

impl Mode for SelectMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Select
    }

    fn cursor(&self) -> CursorRole {
        CursorRole::Cross
    }

    fn forwards_buttons(&self) -> bool {
        true
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        self.band.begin(event.pos);
        host.capture_pointer();
        hit_test_or_forward(host, event, EventKind::button(Button::Primary, Transition::Down));
        Flow::Handled
    }

    fn on_left_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        let Some(start) = self.band.finish() else {
            return Flow::Handled;
        };
        let end = event.pos;

        // Tiny drags clear the selection instead of leaving stale corners.
        let selection = if exceeds_box_threshold(start, end, self.threshold) {
            SelectionBox { start: host.pixel_to_world(start), end: host.pixel_to_world(end) }
        } else {
            SelectionBox::empty()
        };
        host.set_selection_box(selection);
        host.draw(true);

        hit_test_or_forward(host, event, EventKind::button(Button::Primary, Transition::Up));
        Flow::Handled
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {
        host.raise_event(event, EventKind::Motion);
        if event.left_dragging() {
            self.band.track(host, event.pos, SELECT_BAND_PEN, None);
        }
    }

    fn update_screen(&mut self, host: &mut dyn Host) {
        self.band.repaint(host, SELECT_BAND_PEN);
    }

    fn unset(&mut self, host: &mut dyn Host) {
        self.band.cancel(host, SELECT_BAND_PEN);
    }
}
