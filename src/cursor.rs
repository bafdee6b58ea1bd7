//! Logical cursor roles and a registry mapping them to host cursor resources.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The cursors a mode can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorRole {
    Arrow,
    Cross,
    /// Open hand shown by the pan mode while idle.
    Hand,
    /// Closed hand shown while a pan drag is in progress.
    GrabHand,
    ZoomIn,
    ZoomOut,
    /// Pointing hand shown while hovering an interactive graphic.
    PointerHand,
}

impl CursorRole {
    pub const ALL: [CursorRole; 7] = [
        Self::Arrow,
        Self::Cross,
        Self::Hand,
        Self::GrabHand,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::PointerHand,
    ];
}

/// Host-rendered cursor handles keyed by role.
///
/// Built once per canvas; `C` is whatever the host's toolkit uses for a cursor.
#[derive(Debug, Clone)]
pub struct CursorRegistry<C> {
    cursors: HashMap<CursorRole, C>,
}

impl<C> CursorRegistry<C> {
    /// Load every role through `load`.
    pub fn load(mut load: impl FnMut(CursorRole) -> C) -> Self {
        let cursors = CursorRole::ALL.iter().map(|&role| (role, load(role))).collect();
        Self { cursors }
    }

    /// The cursor for `role`, if the host provided one.
    #[must_use]
    pub fn get(&self, role: CursorRole) -> Option<&C> {
        self.cursors.get(&role)
    }
}
