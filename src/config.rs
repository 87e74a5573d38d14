use serde::{Deserialize, Serialize};

/// Options controlling which routes the composer considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Accept routes that reach an exit without taking any detour
    pub allow_direct: bool,
    /// Evaluate detours offered at nodes that are themselves exits.
    /// Off by default: arriving at an exit ends the journey.
    pub detour_from_exits: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            allow_direct: true,
            detour_from_exits: false,
        }
    }
}

impl RouteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only routes through exactly one detour
    pub fn detours_only() -> Self {
        Self::default().with_allow_direct(false)
    }

    pub fn with_allow_direct(mut self, allow: bool) -> Self {
        self.allow_direct = allow;
        self
    }

    pub fn with_detour_from_exits(mut self, enabled: bool) -> Self {
        self.detour_from_exits = enabled;
        self
    }
}
