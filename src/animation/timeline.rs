//! Global playback timeline: one progress scalar and its controls.
//!
//! The controller is the only mutable piece of the animation core. It
//! integrates elapsed wall-clock seconds into a progress value in [0, 1]
//! while playing, and holds position otherwise. Per-part choreography is
//! entirely downstream: every part derives its pose from the one
//! progress snapshot this type owns.

use std::time::Duration;

use crate::error::FenestraError;

/// Default seconds for a full explode-to-assemble traversal at speed 1.
pub const DEFAULT_TRAVERSAL: Duration = Duration::from_secs(3);

/// Owns the global progress scalar, play/pause flag, and speed.
///
/// Progress runs from 0 (fully exploded) to 1 (fully assembled). It
/// never leaves [0, 1] and never decreases while playing; only
/// [`seek`](Self::seek) and [`reset`](Self::reset) move it backwards.
#[derive(Debug, Clone)]
pub struct TimelineController {
    /// Global progress in [0, 1].
    progress: f32,
    /// Whether ticks currently advance progress.
    playing: bool,
    /// Speed multiplier, strictly positive.
    speed: f32,
    /// Seconds for a full 0 to 1 traversal at speed 1.
    traversal: Duration,
}

impl TimelineController {
    /// Create a paused timeline at progress 0 with speed 1.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidTraversal`] for a zero traversal,
    /// which would make every tick a division by zero and the timeline
    /// permanently stuck.
    pub fn new(traversal: Duration) -> Result<Self, FenestraError> {
        if traversal.is_zero() {
            return Err(FenestraError::InvalidTraversal(0.0));
        }
        Ok(Self {
            progress: 0.0,
            playing: false,
            speed: 1.0,
            traversal,
        })
    }

    /// Advance by `elapsed_secs` of wall-clock time.
    ///
    /// Does nothing unless playing. Negative elapsed values clamp to
    /// zero, so noisy first frames never rewind the animation. Reaching
    /// progress 1 stops playback.
    ///
    /// Returns whether the timeline still wants further ticks, so a host
    /// can drop its per-frame callback once motion has settled.
    pub fn tick(&mut self, elapsed_secs: f32) -> bool {
        if !self.playing {
            return false;
        }
        let elapsed = elapsed_secs.max(0.0);
        let step = elapsed * self.speed / self.traversal.as_secs_f32();
        self.progress = (self.progress + step).min(1.0);
        if self.progress >= 1.0 {
            self.playing = false;
            return false;
        }
        true
    }

    /// Jump straight to a progress value, pausing playback.
    ///
    /// The value is clamped to [0, 1]; there is no easing toward the
    /// target. Seeking is idempotent.
    pub fn seek(&mut self, value: f32) {
        self.playing = false;
        self.progress = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
    }

    /// Jump to a percentage position (0 to 100). Out-of-range clamps.
    pub fn seek_percent(&mut self, percent: f32) {
        self.seek(percent / 100.0);
    }

    /// Return to the fully exploded state, paused.
    pub fn reset(&mut self) {
        self.playing = false;
        self.progress = 0.0;
    }

    /// Toggle between playing and paused.
    ///
    /// Resuming from a completed timeline rewinds to 0 first, so the
    /// play control always produces visible motion.
    pub fn play_pause(&mut self) {
        if self.playing {
            self.playing = false;
        } else {
            if self.progress >= 1.0 {
                self.progress = 0.0;
            }
            self.playing = true;
        }
    }

    /// Set the speed multiplier, applying to future ticks only.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidSpeed`] for zero, negative, or
    /// non-finite values; the current speed is left untouched. A clamped
    /// zero would mean a silently stuck timeline, so bad values are
    /// rejected instead.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), FenestraError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(FenestraError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Current global progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current progress as a percentage (0 to 100).
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.progress * 100.0
    }

    /// Whether ticks currently advance progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether progress has reached the fully assembled state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Current speed multiplier.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Seconds for a full traversal at speed 1.
    #[must_use]
    pub fn traversal(&self) -> Duration {
        self.traversal
    }
}

impl Default for TimelineController {
    fn default() -> Self {
        Self {
            progress: 0.0,
            playing: false,
            speed: 1.0,
            traversal: DEFAULT_TRAVERSAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused_at_zero() {
        let timeline = TimelineController::default();
        assert_eq!(timeline.progress(), 0.0);
        assert!(!timeline.is_playing());
        assert!(!timeline.is_complete());
        assert_eq!(timeline.speed(), 1.0);
    }

    #[test]
    fn rejects_zero_traversal() {
        let result = TimelineController::new(Duration::ZERO);
        assert!(matches!(
            result,
            Err(FenestraError::InvalidTraversal(_))
        ));
    }

    #[test]
    fn tick_while_paused_is_a_no_op() {
        let mut timeline = TimelineController::default();
        assert!(!timeline.tick(1.0));
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn half_traversal_reaches_half_progress() {
        // 3 s traversal at speed 1: 1.5 s of play is exactly halfway.
        let mut timeline = TimelineController::default();
        timeline.play_pause();
        assert!(timeline.tick(1.5));
        assert_eq!(timeline.progress(), 0.5);
    }

    #[test]
    fn completion_stops_playback_exactly_at_one() {
        let mut timeline = TimelineController::default();
        timeline.play_pause();
        assert!(!timeline.tick(10.0));
        assert_eq!(timeline.progress(), 1.0);
        assert!(timeline.is_complete());
        assert!(!timeline.is_playing());

        // Further ticks change nothing.
        assert!(!timeline.tick(1.0));
        assert_eq!(timeline.progress(), 1.0);
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        let mut timeline = TimelineController::default();
        timeline.play_pause();
        assert!(timeline.tick(0.9));
        let before = timeline.progress();
        assert!(timeline.tick(-5.0));
        assert_eq!(timeline.progress(), before);
        assert!(timeline.is_playing());
    }

    #[test]
    fn speed_scales_the_advance_rate() {
        let mut timeline = TimelineController::default();
        timeline.set_speed(2.0).unwrap();
        timeline.play_pause();
        assert!(timeline.tick(0.75));
        assert_eq!(timeline.progress(), 0.5);
    }

    #[test]
    fn invalid_speeds_are_rejected_without_effect() {
        let mut timeline = TimelineController::default();
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                timeline.set_speed(bad),
                Err(FenestraError::InvalidSpeed(_))
            ));
        }
        assert_eq!(timeline.speed(), 1.0);
    }

    #[test]
    fn seek_clamps_and_pauses() {
        let mut timeline = TimelineController::default();
        timeline.play_pause();
        timeline.seek(1.5);
        assert_eq!(timeline.progress(), 1.0);
        assert!(!timeline.is_playing());
        assert!(timeline.is_complete());

        timeline.seek(-2.0);
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn seek_percent_normalizes_and_clamps() {
        let mut timeline = TimelineController::default();
        timeline.seek_percent(50.0);
        assert_eq!(timeline.progress(), 0.5);
        timeline.seek_percent(150.0);
        assert_eq!(timeline.progress(), 1.0);
        assert_eq!(timeline.progress_percent(), 100.0);
    }

    #[test]
    fn seek_is_idempotent() {
        let mut timeline = TimelineController::default();
        timeline.seek(0.37);
        let first = timeline.progress();
        timeline.seek(0.37);
        assert_eq!(timeline.progress(), first);
    }

    #[test]
    fn replay_from_completed_rewinds_first() {
        let mut timeline = TimelineController::default();
        timeline.seek(1.0);
        timeline.play_pause();
        assert!(timeline.is_playing());
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn progress_is_monotonic_while_playing() {
        let mut timeline = TimelineController::default();
        timeline.play_pause();
        let mut prev = timeline.progress();
        for elapsed in [0.1, 0.0, 0.3, 0.05, 2.0, 0.4, 1.0] {
            let _ = timeline.tick(elapsed);
            let now = timeline.progress();
            assert!(now >= prev);
            assert!(now <= 1.0);
            prev = now;
        }
    }

    #[test]
    fn custom_traversal_changes_the_rate() {
        let mut timeline =
            TimelineController::new(Duration::from_secs(6)).unwrap();
        timeline.play_pause();
        assert!(timeline.tick(1.5));
        assert_eq!(timeline.progress(), 0.25);
    }

    #[test]
    fn pause_resumes_from_held_position() {
        let mut timeline = TimelineController::default();
        timeline.play_pause();
        assert!(timeline.tick(0.6));
        timeline.play_pause();
        assert!(!timeline.tick(100.0));
        let held = timeline.progress();
        timeline.play_pause();
        assert!(timeline.is_playing());
        assert_eq!(timeline.progress(), held);
    }
}
