//! Input model: buttons, modifier keys, pointer events and the domain event tags.
//!
//! The host translates raw toolkit events into [`InputEvent`]s and feeds them to
//! the [`crate::dispatch::Dispatcher`]. Modes see [`PointerEvent`]s, which carry
//! the pixel position plus which buttons are held, so a mode can tell a drag
//! from a hover. [`EventKind`] names the events a mode re-raises upward.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// What happened to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Down,
    Up,
    Double,
}

/// A keyboard key, by name (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

/// A pointer event as modes see it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pixel-space position.
    pub pos: Point,
    #[serde(default)]
    pub left_down: bool,
    #[serde(default)]
    pub middle_down: bool,
    #[serde(default)]
    pub right_down: bool,
}

impl PointerEvent {
    /// An event at `pos` with no buttons held.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { pos: Point::new(x, y), ..Self::default() }
    }

    /// The same event with the left button held.
    #[must_use]
    pub fn with_left(mut self) -> Self {
        self.left_down = true;
        self
    }

    /// Whether any button is held while the pointer moves.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.left_down || self.middle_down || self.right_down
    }

    /// Whether this is a motion with the left button held.
    #[must_use]
    pub fn left_dragging(&self) -> bool {
        self.dragging() && self.left_down
    }
}

/// Domain event tags used for hit-testing and upward re-dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Button { button: Button, transition: Transition },
    Wheel,
    Motion,
}

impl EventKind {
    #[must_use]
    pub fn button(button: Button, transition: Transition) -> Self {
        Self::Button { button, transition }
    }
}

/// A raw event delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Button { button: Button, transition: Transition, pointer: PointerEvent },
    /// `rotation` is the signed wheel rotation; only its sign matters.
    Wheel { pointer: PointerEvent, rotation: i32 },
    Move { pointer: PointerEvent },
    KeyDown { key: Key },
    KeyUp { key: Key },
}

/// Hover signal produced by host hit-testing of node graphics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverSignal {
    Enter,
    Leave,
}

/// Signals that drive the edge-lock protocol.
///
/// The host tags these `l_node` and `e_node`; anything else is [`LockSignal::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockSignal {
    /// `l_node`: arms the lock on first arrival, completes it on the second.
    Latch,
    /// `e_node`: completes the lock immediately.
    Enter,
    /// Any other signal: unlocks.
    Other,
}

impl FromStr for LockSignal {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "l_node" => Self::Latch,
            "e_node" => Self::Enter,
            _ => Self::Other,
        })
    }
}
