//! Tunable mode parameters.
//!
//! Defaults come from [`crate::consts`]. Numeric knobs can be overridden from
//! `NAVCANVAS_*` environment variables (invalid values fall back to the
//! default), and a whole config can be read from JSON, where missing fields
//! keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::style::Rgb;

/// Error returned by [`ModeConfig::from_json_str`] and [`ModeConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse mode config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Line colors for the edge and goal previews and node highlights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub pose_preview: Rgb,
    pub nav_preview: Rgb,
    pub goal_done: Rgb,
    pub edge_normal: Rgb,
    pub edge_locked: Rgb,
    pub node_normal: Rgb,
    pub node_locked: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            pose_preview: POSE_PREVIEW_COLOR,
            nav_preview: NAV_PREVIEW_COLOR,
            goal_done: GOAL_DONE_COLOR,
            edge_normal: EDGE_NORMAL_COLOR,
            edge_locked: EDGE_LOCKED_COLOR,
            node_normal: NODE_NORMAL_COLOR,
            node_locked: NODE_LOCKED_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    pub box_threshold_px: f64,
    pub goal_threshold_px: f64,
    pub wheel_zoom_out: f64,
    pub wheel_zoom_in: f64,
    pub click_zoom: f64,
    pub pan_redraw_delay_ms: u64,
    pub goal_line_width: f64,
    pub goal_arrow_head: f64,
    pub edge_width: f64,
    pub palette: Palette,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            box_threshold_px: BOX_THRESHOLD_PX,
            goal_threshold_px: GOAL_THRESHOLD_PX,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            click_zoom: CLICK_ZOOM,
            pan_redraw_delay_ms: PAN_REDRAW_DELAY_MS,
            goal_line_width: GOAL_LINE_WIDTH,
            goal_arrow_head: GOAL_ARROW_HEAD,
            edge_width: EDGE_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl ModeConfig {
    /// Build a config from environment variables.
    ///
    /// Optional:
    /// - `NAVCANVAS_BOX_THRESHOLD_PX`: default 10
    /// - `NAVCANVAS_GOAL_THRESHOLD_PX`: default 5
    /// - `NAVCANVAS_WHEEL_ZOOM_OUT`: default 0.9
    /// - `NAVCANVAS_WHEEL_ZOOM_IN`: default 1.1
    /// - `NAVCANVAS_CLICK_ZOOM`: default 1.5
    /// - `NAVCANVAS_PAN_REDRAW_DELAY_MS`: default 30
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            box_threshold_px: env_parse("NAVCANVAS_BOX_THRESHOLD_PX", defaults.box_threshold_px),
            goal_threshold_px: env_parse("NAVCANVAS_GOAL_THRESHOLD_PX", defaults.goal_threshold_px),
            wheel_zoom_out: env_parse("NAVCANVAS_WHEEL_ZOOM_OUT", defaults.wheel_zoom_out),
            wheel_zoom_in: env_parse("NAVCANVAS_WHEEL_ZOOM_IN", defaults.wheel_zoom_in),
            click_zoom: env_parse("NAVCANVAS_CLICK_ZOOM", defaults.click_zoom),
            pan_redraw_delay_ms: env_parse("NAVCANVAS_PAN_REDRAW_DELAY_MS", defaults.pan_redraw_delay_ms),
            ..defaults
        }
    }

    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::NotPositive`] for non-positive thresholds or factors.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds and zoom factors that would make modes misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotPositive`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("box_threshold_px", self.box_threshold_px),
            ("goal_threshold_px", self.goal_threshold_px),
            ("wheel_zoom_out", self.wheel_zoom_out),
            ("wheel_zoom_in", self.wheel_zoom_in),
            ("click_zoom", self.click_zoom),
        ];
        for (field, value) in checks {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
