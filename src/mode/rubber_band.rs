//! XOR rubber-band box shared by the select and zoom-in modes.
//!
//! The band is never a host object: each update inverts the previous outline
//! (erasing it) and inverts the new one.

#[cfg(test)]
#[path = "rubber_band_test.rs"]
mod rubber_band_test;

use crate::camera::{Point, PixelRect, Size};
use crate::host::Host;
use crate::style::OverlayPen;

#[derive(Debug, Default)]
pub(crate) struct RubberBand {
    anchor: Option<Point>,
    drawn: Option<PixelRect>,
}

impl RubberBand {
    pub(crate) fn begin(&mut self, at: Point) {
        self.anchor = Some(at);
        self.drawn = None;
    }

    pub(crate) fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    #[cfg(test)]
    pub(crate) fn drawn(&self) -> Option<PixelRect> {
        self.drawn
    }

    /// Replace the outline with the box from the anchor to `current`.
    pub(crate) fn track(&mut self, host: &mut dyn Host, current: Point, pen: OverlayPen, aspect: Option<f64>) {
        let Some(anchor) = self.anchor else {
            return;
        };
        if let Some(prev) = self.drawn {
            host.xor_rectangle(prev, pen);
        }
        let rect = band_rect(anchor, current, aspect);
        host.xor_rectangle(rect, pen);
        self.drawn = Some(rect);
    }

    /// Re-invert the last outline after a host repaint wiped it.
    pub(crate) fn repaint(&self, host: &mut dyn Host, pen: OverlayPen) {
        if let Some(rect) = self.drawn {
            host.xor_rectangle(rect, pen);
        }
    }

    /// End the drag and hand back the anchor. The outline is left to the
    /// redraw that follows.
    pub(crate) fn finish(&mut self) -> Option<Point> {
        self.drawn = None;
        self.anchor.take()
    }

    /// Erase any outline and forget the drag.
    pub(crate) fn cancel(&mut self, host: &mut dyn Host, pen: OverlayPen) {
        if let Some(rect) = self.drawn.take() {
            host.xor_rectangle(rect, pen);
        }
        self.anchor = None;
    }
}

/// Outline for a drag from `anchor` to `current`, centered between them.
///
/// With `aspect` set, the box is widened or heightened to that width/height
/// ratio, truncating to whole pixels.
pub(crate) fn band_rect(anchor: Point, current: Point, aspect: Option<f64>) -> PixelRect {
    let mut width = (current.x - anchor.x).abs();
    let mut height = (current.y - anchor.y).abs();
    if let Some(ratio) = aspect.filter(|r| *r > 0.0) {
        width = width.max((height * ratio).trunc());
        height = (width / ratio).trunc();
    }
    PixelRect::centered(anchor.midpoint(current), Size::new(width, height))
}

/// A box drag counts only if it moved past `threshold` on BOTH axes.
pub(crate) fn exceeds_box_threshold(start: Point, end: Point, threshold: f64) -> bool {
    (start.x - end.x).abs() > threshold && (start.y - end.y).abs() > threshold
}
