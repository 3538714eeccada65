//! Query methods for ExplodedViewEngine

use glam::Vec3;

use super::ExplodedViewEngine;
use crate::animation::interpolation;
use crate::assembly::{Assembly, PartDescriptor};
use crate::options::Options;

impl ExplodedViewEngine {
    /// The immutable part list, in generation order.
    ///
    /// Dimensions, tiers, rotations, and rendering hints are fixed at
    /// construction; the presentation layer reads them once to build its
    /// scene and then only polls positions.
    #[must_use]
    pub fn parts(&self) -> &[PartDescriptor] {
        self.assembly.parts()
    }

    /// The underlying assembly, for id lookups and bounds queries.
    #[must_use]
    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    /// Every part's position at the current progress, indexed like
    /// [`parts`](Self::parts). All entries come from the same progress
    /// snapshot.
    #[must_use]
    pub fn part_positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current position of one part by id.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<Vec3> {
        self.assembly.get(id).map(|part| {
            interpolation::part_position(part, self.timeline.progress())
        })
    }

    /// Current progress as a percentage (0 to 100).
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.timeline.progress_percent()
    }

    /// Whether the timeline is currently advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timeline.is_playing()
    }

    /// Whether progress has reached the fully assembled state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    /// Current speed multiplier.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.timeline.speed()
    }

    /// The options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
