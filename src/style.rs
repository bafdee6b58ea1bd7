//! Visual descriptors modes hand to the host: colors, overlay pens and line specs.

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Which draw list a graphic lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Background,
    Foreground,
}

/// Pen used for raw XOR overlays (rubber-band boxes). Never a persistent object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPen {
    pub color: Rgb,
    pub width: u32,
    pub dashed: bool,
}

/// A two-point line or arrow, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Rgb,
    /// Arrowhead size in pixels; `None` draws a plain line.
    pub arrow_head: Option<f64>,
    pub layer: Layer,
}

impl LineSpec {
    /// A plain background line.
    #[must_use]
    pub fn line(from: Point, to: Point, width: f64, color: Rgb) -> Self {
        Self { from, to, width, color, arrow_head: None, layer: Layer::Background }
    }

    /// A directed arrow drawn in the foreground.
    #[must_use]
    pub fn arrow(from: Point, to: Point, width: f64, color: Rgb, head: f64) -> Self {
        Self { from, to, width, color, arrow_head: Some(head), layer: Layer::Foreground }
    }
}
