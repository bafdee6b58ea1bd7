//! Geometry primitives and the pan/zoom camera used by headless hosts.
//!
//! Modes never own a camera: they ask the host to convert coordinates. The
//! `Camera` here backs [`crate::recorder::RecordingHost`] so that conversions,
//! zooms and image shifts have concrete, checkable results.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either pixel or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Width and height of the host panel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height. A degenerate panel reports 1.0.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        if self.height > 0.0 { self.width / self.height } else { 1.0 }
    }
}

/// Axis-aligned rectangle in pixel space: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of size `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// World-space bounding box spanned by two or more points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Smallest box containing both points, regardless of their order.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }
}

/// Camera state for pan/zoom of the canvas.
///
/// `pan_x` / `pan_y` are in pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a pixel-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to pixel coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Scale by `factor` keeping the world point under `pixel_center` fixed on screen.
    pub fn zoom_about(&mut self, factor: f64, pixel_center: Point) {
        let anchor = self.screen_to_world(pixel_center);
        self.zoom *= factor;
        self.pan_x = pixel_center.x - anchor.x * self.zoom;
        self.pan_y = pixel_center.y - anchor.y * self.zoom;
    }

    /// Fit `bbox` into a panel of `size`, centered, preserving aspect ratio.
    ///
    /// A degenerate box keeps the current zoom and only recenters.
    pub fn fit(&mut self, bbox: BBox, size: Size) {
        if bbox.width() > 0.0 && bbox.height() > 0.0 {
            self.zoom = (size.width / bbox.width()).min(size.height / bbox.height());
        }
        let center = bbox.center();
        self.pan_x = size.width / 2.0 - center.x * self.zoom;
        self.pan_y = size.height / 2.0 - center.y * self.zoom;
    }

    /// Shift the viewport by a pixel delta.
    ///
    /// A positive delta moves the view right/down, so content moves left/up.
    pub fn shift(&mut self, delta: Point) {
        self.pan_x -= delta.x;
        self.pan_y -= delta.y;
    }
}
