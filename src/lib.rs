//! Interaction modes for a 2D navigation canvas.
//!
//! A canvas showing a robot's map and its waypoint graph hands raw pointer and
//! keyboard events to a [`dispatch::Dispatcher`]. The dispatcher's active mode
//! turns them into domain actions: box selection, rubber-band and click zoom,
//! panning with incremental scrolling, pose-estimate and navigation-goal
//! arrows, and node-to-node edge creation with a two-step lock. Modes never own
//! canvas state; they call back through the [`host::Host`] trait.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dispatch`] | Owns the active mode and routes events to it |
//! | [`mode`] | The [`mode::Mode`] contract and its eight variants |
//! | [`host`] | Capability trait the canvas implements for modes |
//! | [`input`] | Buttons, pointer events, hover and lock signals |
//! | [`camera`] | Points, rectangles and pixel/world conversion |
//! | [`style`] | Colors, overlay pens and line descriptors |
//! | [`cursor`] | Cursor roles and a per-toolkit cursor registry |
//! | [`config`] | Tunable thresholds, zoom factors and palette |
//! | [`consts`] | Default values behind [`config::ModeConfig`] |
//! | [`queue`] | Background work-queue drainer |
//! | [`recorder`] | Headless host that records every call |
//! | [`replay`] | JSON interaction scripts run against the recorder |

pub mod camera;
pub mod config;
pub mod consts;
pub mod cursor;
pub mod dispatch;
pub mod host;
pub mod input;
pub mod mode;
pub mod queue;
pub mod recorder;
pub mod replay;
pub mod style;
