//! Viewport panning with cheap incremental scrolling.
//!
//! Each drag move blits the already-rendered buffer at the new offset after
//! painting the two background strips the shift uncovers, then shifts the
//! host viewport without a re-render. A one-shot timer, rearmed on every move,
//! triggers the full render once the pointer rests. Deltas use the
//! `mid - end` convention: dragging right by 30 px yields `x = -30`.

#[cfg(test)]
#[path = "pan_test.rs"]
mod pan_test;

use std::time::Duration;

use crate::camera::{Point, PixelRect, Size};
use crate::config::ModeConfig;
use crate::cursor::CursorRole;
use crate::host::Host;
use crate::input::{EventKind, PointerEvent};

use super::{Flow, Mode, ModeKind, wheel_zoom};

#[derive(Debug)]
pub struct PanMode {
    /// Drag anchor; reset to `mid` after every external repaint.
    start: Option<Point>,
    /// Position at the previous move event.
    mid: Point,
    /// Buffer offset painted by the previous move.
    prev_offset: Point,
    config: ModeConfig,
}

impl PanMode {
    #[must_use]
    pub fn new(config: &ModeConfig) -> Self {
        Self { start: None, mid: Point::default(), prev_offset: Point::default(), config: *config }
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.start
    }

    #[must_use]
    pub fn mid(&self) -> Point {
        self.mid
    }

    fn redraw_delay(&self) -> Duration {
        Duration::from_millis(self.config.pan_redraw_delay_ms)
    }

    /// Paint the uncovered strips, then blit the buffer at `offset`.
    fn shift_buffer(&mut self, host: &mut dyn Host, offset: Point) {
        let [a, b] = exposed_strips(self.prev_offset, offset, host.panel_size());
        host.fill_background(a);
        host.fill_background(b);
        self.prev_offset = offset;
        host.blit_buffer(offset);
    }
}

/// The two background strips uncovered when the buffer moves from offset
/// `prev` to offset `next` inside a panel of `size`.
///
/// Which pair (top/bottom or left/right) depends on the sign of the move on
/// each axis.
#[must_use]
pub fn exposed_strips(prev: Point, next: Point, size: Size) -> [PixelRect; 2] {
    let (x1, y1) = (prev.x, prev.y);
    let (x2, y2) = (next.x, next.y);
    let (w, h) = (size.width, size.height);

    if x2 > x1 && y2 > y1 {
        [PixelRect::new(x1, y1, w, y2 - y1), PixelRect::new(x1, y1, x2 - x1, h)]
    } else if x2 > x1 {
        [PixelRect::new(x1, y1, x2 - x1, h), PixelRect::new(x1, y2 + h, w, y1 - y2)]
    } else if y2 > y1 {
        [PixelRect::new(x1, y1, w, y2 - y1), PixelRect::new(x2 + w, y1, x1 - x2, h - y2 + y1)]
    } else {
        [PixelRect::new(x2 + w, y1, x1 - x2, h), PixelRect::new(x1, y2 + h, w, y1 - y2)]
    }
}

impl Mode for PanMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Pan
    }

    fn cursor(&self) -> CursorRole {
        CursorRole::Hand
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        host.set_cursor(CursorRole::GrabHand);
        host.capture_pointer();
        self.start = Some(event.pos);
        self.mid = event.pos;
        self.prev_offset = Point::default();
        Flow::Handled
    }

    fn on_left_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        host.set_cursor(CursorRole::Hand);
        if self.start.take().is_some() {
            host.move_image(self.mid.sub(event.pos), true);
        }
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
        let end = event.pos;
        self.shift_buffer(host, end.sub(start));
        host.move_image(self.mid.sub(end), false);
        self.mid = end;
        host.start_redraw_timer(self.redraw_delay());
    }

    fn on_wheel(&mut self, host: &mut dyn Host, _event: &PointerEvent, rotation: i32) -> Flow {
        wheel_zoom(host, rotation, &self.config);
        Flow::Handled
    }

    fn on_timer(&mut self, host: &mut dyn Host) {
        host.draw(false);
    }

    fn update_screen(&mut self, _host: &mut dyn Host) {
        // The repaint already reflects everything up to `mid`.
        if self.start.is_some() {
            self.start = Some(self.mid);
        }
    }

    fn unset(&mut self, _host: &mut dyn Host) {
        self.start = None;
    }
}
