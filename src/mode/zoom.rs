//! Click and box zoom modes.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::camera::BBox;
use crate::config::ModeConfig;
use crate::consts::ZOOM_BAND_PEN;
use crate::cursor::CursorRole;
use crate::host::{Host, ZoomCenter};
use crate::input::{EventKind, PointerEvent};

use super::rubber_band::{RubberBand, band_rect, exceeds_box_threshold};
use super::{Flow, Mode, ModeKind, wheel_zoom};

/// Left-drag zooms to the dragged box; a click zooms in about the click.
#[derive(Debug)]
pub struct ZoomInMode {
    band: RubberBand,
    config: ModeConfig,
}

impl ZoomInMode {
    #[must_use]
    pub fn new(config: &ModeConfig) -> Self {
        Self { band: RubberBand::default(), config: *config }
    }
}

impl Mode for ZoomInMode {
    fn kind(&self) -> ModeKind {
        ModeKind::ZoomIn
    }

    fn cursor(&self) -> CursorRole {
        CursorRole::ZoomIn
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        self.band.begin(event.pos);
        host.capture_pointer();
        Flow::Handled
    }

    fn on_left_up(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        let Some(start) = self.band.finish() else {
            return Flow::Handled;
        };
        let end = event.pos;
        if exceeds_box_threshold(start, end, self.config.box_threshold_px) {
            // Zoom to the aspect-corrected box the user saw, not the raw drag.
            let rect = band_rect(start, end, Some(host.aspect_ratio()));
            let a = host.pixel_to_world(rect.top_left());
            let b = host.pixel_to_world(rect.bottom_right());
            host.zoom_to_bbox(BBox::from_points(a, b));
        } else {
            let center = host.pixel_to_world(start);
            host.zoom(self.config.click_zoom, ZoomCenter::World(center));
        }
        Flow::Handled
    }

    fn on_right_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        host.zoom(1.0 / self.config.click_zoom, ZoomCenter::Pixel(event.pos));
        Flow::Handled
    }

    fn on_wheel(&mut self, host: &mut dyn Host, _event: &PointerEvent, rotation: i32) -> Flow {
        wheel_zoom(host, rotation, &self.config);
        Flow::Handled
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {
        host.raise_event(event, EventKind::Motion);
        if event.left_dragging() {
            let aspect = host.aspect_ratio();
            self.band.track(host, event.pos, ZOOM_BAND_PEN, Some(aspect));
        }
    }

    fn update_screen(&mut self, host: &mut dyn Host) {
        self.band.repaint(host, ZOOM_BAND_PEN);
    }

    fn unset(&mut self, host: &mut dyn Host) {
        self.band.cancel(host, ZOOM_BAND_PEN);
    }
}

/// Left-click zooms out, right-click zooms in. No drag behavior.
#[derive(Debug)]
pub struct ZoomOutMode {
    config: ModeConfig,
}

impl ZoomOutMode {
    #[must_use]
    pub fn new(config: &ModeConfig) -> Self {
        Self { config: *config }
    }
}

impl Mode for ZoomOutMode {
    fn kind(&self) -> ModeKind {
        ModeKind::ZoomOut
    }

    fn cursor(&self) -> CursorRole {
        CursorRole::ZoomOut
    }

    fn on_left_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        host.zoom(1.0 / self.config.click_zoom, ZoomCenter::Pixel(event.pos));
        Flow::Handled
    }

    fn on_right_down(&mut self, host: &mut dyn Host, event: &PointerEvent) -> Flow {
        host.zoom(self.config.click_zoom, ZoomCenter::Pixel(event.pos));
        Flow::Handled
    }

    fn on_wheel(&mut self, host: &mut dyn Host, _event: &PointerEvent, rotation: i32) -> Flow {
        wheel_zoom(host, rotation, &self.config);
        Flow::Handled
    }

    fn on_move(&mut self, host: &mut dyn Host, event: &PointerEvent) {
        host.raise_event(event, EventKind::Motion);
    }
}
