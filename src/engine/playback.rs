//! Playback control methods for ExplodedViewEngine

use super::ExplodedViewEngine;
use crate::error::FenestraError;

impl ExplodedViewEngine {
    /// Toggle between playing and paused.
    ///
    /// Resuming a completed run rewinds to fully exploded first, so the
    /// play control always produces visible motion.
    pub fn play_pause(&mut self) {
        self.timeline.play_pause();
        self.refresh_positions();
        let state = if self.timeline.is_playing() {
            "playing"
        } else {
            "paused"
        };
        log::debug!(
            "timeline {state} at {:.1}%",
            self.timeline.progress_percent()
        );
    }

    /// Return to the fully exploded state, paused.
    pub fn reset(&mut self) {
        self.timeline.reset();
        self.refresh_positions();
        log::debug!("timeline reset");
    }

    /// Jump to a percentage position (0 to 100), pausing playback.
    /// Out-of-range values clamp.
    pub fn seek_percent(&mut self, percent: f32) {
        self.timeline.seek_percent(percent);
        self.refresh_positions();
        log::debug!(
            "seek to {:.1}%",
            self.timeline.progress_percent()
        );
    }

    /// Set the speed multiplier for future ticks.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidSpeed`] for non-positive or
    /// non-finite values; the current speed stays in effect.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), FenestraError> {
        self.timeline.set_speed(speed)?;
        log::debug!("speed set to {speed}x");
        Ok(())
    }
}
