//! Shared utilities for the animation engine.
//!
//! Helpers for easing curves and wall-clock frame timing.

pub mod easing;
pub mod frame_clock;
