use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structural parameters of the generated window unit, in meters.
///
/// The layout generator derives every part's position and extents from
/// these six values alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct AssemblyOptions {
    /// Overall opening width along X.
    pub width: f32,
    /// Overall opening height along Y.
    pub height: f32,
    /// Protrusion depth out of the wall plane along Z.
    pub depth: f32,
    /// Structural member thickness (rails, posts, cladding).
    pub member: f32,
    /// Explosion distance for near tiers (members, panels).
    pub explode_near: f32,
    /// Explosion distance for far tiers (cladding, frame, pane).
    pub explode_far: f32,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            width: 1.2,
            height: 1.4,
            depth: 0.35,
            member: 0.06,
            explode_near: 0.25,
            explode_far: 0.9,
        }
    }
}
