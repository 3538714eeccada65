use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Timeline playback parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Seconds for a full explode-to-assemble traversal at speed 1.
    pub traversal_secs: f32,
    /// Initial speed multiplier. Must be strictly positive.
    pub speed: f32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            traversal_secs: 3.0,
            speed: 1.0,
        }
    }
}
