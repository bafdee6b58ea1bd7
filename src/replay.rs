//! Interaction scripts replayed against a [`RecordingHost`].
//!
//! A script is a JSON document: an optional mode config, the viewport size, the
//! node graphics present on the canvas, and a list of steps. Each step is a mode
//! switch, a raw input event, or one of the host notifications a canvas would
//! send (edge calls, hover, repaint, timer). Running a script yields the host
//! with its full call log.
//!
//! ```json
//! {
//!   "viewport": { "width": 800, "height": 600 },
//!   "nodes": [{ "id": 1 }, { "id": 2 }],
//!   "steps": [
//!     { "step": "set_mode", "mode": "edges" },
//!     { "step": "set_start_node", "node": 1, "coords": { "x": 0, "y": 0 } },
//!     { "step": "lock_edge", "signal": "e_node", "node": 2, "coords": { "x": 90, "y": 40 } },
//!     { "step": "set_end_node", "node": 2 }
//!   ]
//! }
//! ```

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::camera::{Point, Size};
use crate::config::{ConfigError, ModeConfig};
use crate::dispatch::Dispatcher;
use crate::host::NodeId;
use crate::input::{EventKind, HoverSignal, InputEvent, LockSignal};
use crate::mode::ModeKind;
use crate::recorder::RecordingHost;
use crate::style::Rgb;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("step {step} refers to unknown node {node}")]
    UnknownNode { step: usize, node: NodeId },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: Option<ModeConfig>,
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    #[serde(default)]
    pub nodes: Vec<ScriptNode>,
    pub steps: Vec<Step>,
}

fn default_viewport() -> Size {
    Size::new(800.0, 600.0)
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptNode {
    pub id: NodeId,
    /// Initial fill; the config's normal node color when absent.
    #[serde(default)]
    pub fill: Option<Rgb>,
}

fn default_hit() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    SetMode { mode: ModeKind },
    Event { event: InputEvent },
    SetStartNode { node: NodeId, coords: Point },
    /// `signal` is the host's tag: `l_node`, `e_node`, or anything else.
    LockEdge {
        signal: String,
        #[serde(default)]
        node: Option<NodeId>,
        coords: Point,
    },
    SetEndNode { node: NodeId },
    SwitchCursor { signal: HoverSignal },
    UpdateScreen,
    /// Fire the pending redraw timer, if any.
    Timer,
    /// Make host objects claim (or release) events of `kind` from now on.
    Claim {
        kind: EventKind,
        #[serde(default = "default_hit")]
        hit: bool,
    },
}

impl Script {
    /// # Errors
    ///
    /// Returns [`ReplayError::Parse`] for malformed scripts.
    pub fn from_json_str(raw: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns [`ReplayError::Io`] or [`ReplayError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Replay every step and hand back the host with its call log.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Config`] for an invalid config and
    /// [`ReplayError::UnknownNode`] for edge steps naming a node the script
    /// never declared.
    pub fn run(&self) -> Result<RecordingHost, ReplayError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let mut host = RecordingHost::new(self.viewport);
        for node in &self.nodes {
            host.add_node(node.id, node.fill.unwrap_or(config.palette.node_normal));
        }

        let mut dispatcher = Dispatcher::new(config);
        for (index, step) in self.steps.iter().enumerate() {
            apply(&mut dispatcher, &mut host, index, step)?;
        }
        info!(steps = self.steps.len(), calls = host.calls.len(), "replay finished");
        Ok(host)
    }
}

fn known(host: &RecordingHost, step: usize, node: NodeId) -> Result<NodeId, ReplayError> {
    if host.nodes.contains_key(&node) { Ok(node) } else { Err(ReplayError::UnknownNode { step, node }) }
}

fn apply(dispatcher: &mut Dispatcher, host: &mut RecordingHost, index: usize, step: &Step) -> Result<(), ReplayError> {
    match step {
        Step::SetMode { mode } => dispatcher.set_mode(host, *mode),
        Step::Event { event } => dispatcher.handle(host, event),
        Step::SetStartNode { node, coords } => {
            let node = known(host, index, *node)?;
            dispatcher.set_start_node(host, node, *coords);
        }
        Step::LockEdge { signal, node, coords } => {
            let node = node.map(|n| known(host, index, n)).transpose()?;
            let Ok(signal) = signal.parse::<LockSignal>();
            dispatcher.lock_edge(host, signal, node, *coords);
        }
        Step::SetEndNode { node } => {
            let node = known(host, index, *node)?;
            dispatcher.set_end_node(host, node);
        }
        Step::SwitchCursor { signal } => dispatcher.switch_cursor(host, *signal),
        Step::UpdateScreen => dispatcher.update_screen(host),
        Step::Timer => {
            if host.fire_timer() {
                dispatcher.on_timer(host);
            } else {
                debug!(step = index, "timer step with no pending timer");
            }
        }
        Step::Claim { kind, hit } => host.claim(*kind, *hit),
    }
    Ok(())
}
