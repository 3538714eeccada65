//! Wall-clock frame timing for playback loops.

use web_time::Instant;

/// Wall-clock frame timer with smoothed FPS readout.
///
/// Drives real-time playback loops: each call to [`tick`](Self::tick)
/// returns the seconds elapsed since the previous call, which feeds
/// straight into the timeline advance.
pub struct FrameClock {
    /// Timestamp of the previous tick, `None` until the first call.
    last_tick: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock with no recorded tick yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Record a tick and return the seconds elapsed since the previous one.
    ///
    /// The first call establishes the reference timestamp and returns `0.0`,
    /// so a loop's opening frame never sees a startup-sized delta.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = match self.last_tick {
            Some(last) => now.duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
