//! Engine facade composing the assembly, timeline, and position buffer.
//!
//! One `ExplodedViewEngine` per view. The impl is split across this
//! module (construction, tick, option changes), `playback` (user
//! controls), and `queries` (read-only accessors).

mod playback;
mod queries;

use std::time::Duration;

use glam::Vec3;

use crate::animation::interpolation;
use crate::animation::TimelineController;
use crate::assembly::{window_unit, Assembly};
use crate::error::FenestraError;
use crate::options::{Options, PlaybackOptions};

/// The exploded-view engine for a window-unit assembly.
///
/// Composes the three core pieces behind one type: the immutable
/// [`Assembly`] from the layout generator, the [`TimelineController`]
/// owning the global progress scalar, and a pre-allocated position
/// buffer refilled from one progress snapshot per update.
///
/// # Construction
///
/// Use [`ExplodedViewEngine::new`] with [`Options`]; construction fails
/// fast on any configuration error, so a live engine always holds a
/// valid assembly.
///
/// # Frame loop
///
/// Each frame notification, call [`tick`](Self::tick) with the elapsed
/// seconds and read back [`part_positions`](Self::part_positions). When
/// `tick` returns `false` the motion has settled and the host may stop
/// requesting frames until the next user action.
///
/// # User actions
///
/// [`play_pause`](Self::play_pause), [`reset`](Self::reset),
/// [`seek_percent`](Self::seek_percent), and
/// [`set_speed`](Self::set_speed) mirror the on-screen controls.
/// [`set_options`](Self::set_options) rebuilds the assembly in place.
pub struct ExplodedViewEngine {
    /// Generated part layout, immutable between option changes.
    assembly: Assembly,
    /// The single mutable piece of animation state.
    timeline: TimelineController,
    /// Runtime structural and playback options.
    options: Options,
    /// Per-part positions for the current progress snapshot.
    positions: Vec<Vec3>,
}

impl ExplodedViewEngine {
    /// Build an engine from options.
    ///
    /// The assembly is generated, the timeline configured, and the
    /// position buffer filled for progress 0 (fully exploded).
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidParameter`] for rejected
    /// structural dimensions, [`FenestraError::InvalidTraversal`] for a
    /// non-positive traversal, or [`FenestraError::InvalidSpeed`] for a
    /// non-positive initial speed. No partially-configured engine is
    /// ever produced.
    pub fn new(options: Options) -> Result<Self, FenestraError> {
        let assembly = window_unit(&options.assembly)?;
        let timeline = Self::timeline_from(&options.playback)?;
        let mut positions = Vec::with_capacity(assembly.len());
        interpolation::assembly_positions(
            &assembly,
            timeline.progress(),
            &mut positions,
        );
        log::info!(
            "engine ready: {} parts, {:.1}s traversal",
            assembly.len(),
            timeline.traversal().as_secs_f32()
        );
        Ok(Self {
            assembly,
            timeline,
            options,
            positions,
        })
    }

    /// Build a controller from playback options.
    fn timeline_from(
        playback: &PlaybackOptions,
    ) -> Result<TimelineController, FenestraError> {
        let secs = playback.traversal_secs;
        if secs <= 0.0 {
            return Err(FenestraError::InvalidTraversal(secs));
        }
        let traversal = Duration::try_from_secs_f32(secs)
            .map_err(|_| FenestraError::InvalidTraversal(secs))?;
        let mut timeline = TimelineController::new(traversal)?;
        timeline.set_speed(playback.speed)?;
        Ok(timeline)
    }

    /// Advance the timeline by `elapsed_secs` and refresh positions.
    ///
    /// Returns whether the animation is still running, so the host can
    /// stop scheduling frames once motion has settled.
    pub fn tick(&mut self, elapsed_secs: f32) -> bool {
        let still_playing = self.timeline.tick(elapsed_secs);
        self.refresh_positions();
        still_playing
    }

    /// Replace options: regenerate the assembly and retime the timeline.
    ///
    /// The current progress carries over, so a settled view stays
    /// settled and a half-assembled view stays half-assembled with the
    /// new geometry. Playback keeps running if it was running.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`new`](Self::new). On error the engine is
    /// left exactly as it was.
    pub fn set_options(&mut self, new: Options) -> Result<(), FenestraError> {
        let assembly = window_unit(&new.assembly)?;
        let mut timeline = Self::timeline_from(&new.playback)?;
        let was_playing = self.timeline.is_playing();
        timeline.seek(self.timeline.progress());
        if was_playing && !timeline.is_complete() {
            timeline.play_pause();
        }
        self.assembly = assembly;
        self.timeline = timeline;
        self.options = new;
        self.refresh_positions();
        log::info!(
            "options applied: {} parts, {:.1}s traversal",
            self.assembly.len(),
            self.timeline.traversal().as_secs_f32()
        );
        Ok(())
    }

    /// Refill the position buffer from the current progress snapshot.
    pub(crate) fn refresh_positions(&mut self) {
        interpolation::assembly_positions(
            &self.assembly,
            self.timeline.progress(),
            &mut self.positions,
        );
    }
}
