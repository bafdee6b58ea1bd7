//! Mode dispatcher: owns the active mode for one canvas and routes events to it.
//!
//! The host forwards every raw event to [`Dispatcher::handle`] together with a
//! mutable borrow of itself. Button events are routed through a fixed
//! `(button, transition)` table to the matching [`Mode`] callback; if the mode
//! leaves the event unhandled and opts into forwarding, the dispatcher applies
//! [`hit_test_or_forward`]. Pointer capture is released after every button-up,
//! so no mode has to remember to do it.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use tracing::{debug, info, trace};

use crate::camera::Point;
use crate::config::ModeConfig;
use crate::host::{Host, NodeId};
use crate::input::{Button, EventKind, HoverSignal, InputEvent, LockSignal, PointerEvent, Transition};
use crate::mode::{EdgesMode, Flow, Mode, ModeKind, MouseMode, hit_test_or_forward};

pub struct Dispatcher {
    mode: Box<dyn Mode>,
    config: ModeConfig,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(ModeConfig::default())
    }
}

impl Dispatcher {
    /// A dispatcher starting in the mouse mode.
    ///
    /// The initial cursor is applied by the first [`Dispatcher::set_mode`], or
    /// by the host from [`Dispatcher::mode`].
    #[must_use]
    pub fn new(config: ModeConfig) -> Self {
        Self { mode: Box::new(MouseMode::new()), config }
    }

    #[must_use]
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    #[must_use]
    pub fn mode(&self) -> &dyn Mode {
        self.mode.as_ref()
    }

    /// The edges mode, if it is the active one.
    pub fn edges(&mut self) -> Option<&mut EdgesMode> {
        self.mode.as_edges()
    }

    // --- Mode switching ---

    /// Replace the active mode. The old mode's `unset` runs first, then the
    /// new mode becomes the event target and its cursor is shown.
    pub fn set_mode(&mut self, host: &mut dyn Host, kind: ModeKind) {
        let previous = self.mode.kind();
        self.mode.unset(host);
        host.release_pointer();
        self.mode = kind.build(&self.config);
        host.set_cursor(self.mode.cursor());
        info!(from = ?previous, to = ?kind, "mode switched");
    }

    // --- Raw events ---

    pub fn handle(&mut self, host: &mut dyn Host, event: &InputEvent) {
        trace!(?event, mode = ?self.mode.kind(), "dispatch");
        match event {
            InputEvent::Button { button, transition, pointer } => {
                self.on_button(host, *button, *transition, pointer);
            }
            InputEvent::Wheel { pointer, rotation } => {
                let flow = self.mode.on_wheel(host, pointer, *rotation);
                if flow == Flow::Unhandled && self.mode.forwards_buttons() {
                    host.raise_event(pointer, EventKind::Wheel);
                }
            }
            InputEvent::Move { pointer } => self.mode.on_move(host, pointer),
            InputEvent::KeyDown { key } => self.mode.on_key_down(host, key),
            InputEvent::KeyUp { key } => self.mode.on_key_up(host, key),
        }
    }

    fn on_button(&mut self, host: &mut dyn Host, button: Button, transition: Transition, pointer: &PointerEvent) {
        let mode = self.mode.as_mut();
        let flow = match (button, transition) {
            (Button::Primary, Transition::Down) => mode.on_left_down(host, pointer),
            (Button::Primary, Transition::Up) => mode.on_left_up(host, pointer),
            (Button::Primary, Transition::Double) => mode.on_left_double(host, pointer),
            (Button::Middle, Transition::Down) => mode.on_middle_down(host, pointer),
            (Button::Middle, Transition::Up) => mode.on_middle_up(host, pointer),
            (Button::Middle, Transition::Double) => mode.on_middle_double(host, pointer),
            (Button::Secondary, Transition::Down) => mode.on_right_down(host, pointer),
            (Button::Secondary, Transition::Up) => mode.on_right_up(host, pointer),
            (Button::Secondary, Transition::Double) => mode.on_right_double(host, pointer),
        };
        if flow == Flow::Unhandled && mode.forwards_buttons() {
            hit_test_or_forward(host, pointer, EventKind::button(button, transition));
        }
        if transition == Transition::Up {
            host.release_pointer();
        }
    }

    // --- Host notifications ---

    /// The host finished a repaint.
    pub fn update_screen(&mut self, host: &mut dyn Host) {
        self.mode.update_screen(host);
    }

    /// The redraw timer armed by the active mode fired.
    pub fn on_timer(&mut self, host: &mut dyn Host) {
        self.mode.on_timer(host);
    }

    /// Hover enter/leave over an interactive graphic.
    pub fn switch_cursor(&mut self, host: &mut dyn Host, signal: HoverSignal) {
        self.mode.switch_cursor(host, signal);
    }

    // --- Edge creation (only meaningful in the edges mode) ---

    pub fn set_start_node(&mut self, host: &mut dyn Host, id: NodeId, coords: Point) {
        match self.mode.as_edges() {
            Some(edges) => edges.set_start_node(host, id, coords),
            None => debug!(node = id, mode = ?self.mode.kind(), "set_start_node outside edges mode; ignored"),
        }
    }

    pub fn lock_edge(&mut self, host: &mut dyn Host, signal: LockSignal, id: Option<NodeId>, coords: Point) {
        match self.mode.as_edges() {
            Some(edges) => edges.lock_edge(host, signal, id, coords),
            None => debug!(?signal, mode = ?self.mode.kind(), "lock_edge outside edges mode; ignored"),
        }
    }

    pub fn set_end_node(&mut self, host: &mut dyn Host, id: NodeId) {
        match self.mode.as_edges() {
            Some(edges) => edges.set_end_node(host, id),
            None => debug!(node = id, mode = ?self.mode.kind(), "set_end_node outside edges mode; ignored"),
        }
    }
}
