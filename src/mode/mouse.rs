//! Default/idle mode: host objects get first claim on every button event.

#[cfg(test)]
#[path = "mouse_test.rs"]
mod mouse_test;

use crate::cursor::CursorRole;
use crate::host::Host;
use crate::input::{EventKind, HoverSignal, PointerEvent};

use super::{Mode, ModeKind};

#[derive(Debug)]
pub struct MouseMode {
    cursor: CursorRole,
}

impl Default for MouseMode {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseMode {
    #[must_use]
    pub fn new() -> Self {
        Self { cursor: CursorRole::Arrow }
    }
}

impl Mode for MouseMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Mouse
    }

    fn cursor(&self) -> CursorRole {
        self.cursor
    }

    fn forwards_buttons(&self) -> bool {
        true
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {
        // Motion is always raised; a hit never swallows it.
        host.mouse_over_test(event);
        host.raise_event(event, EventKind::Motion);
    }

    fn switch_cursor(&mut self, host: &mut dyn Host, signal: HoverSignal) {
        super::hover_cursor(host, &mut self.cursor, signal);
    }
}
