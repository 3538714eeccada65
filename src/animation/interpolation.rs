//! Windowed eased interpolation from global progress to part positions.

use glam::Vec3;

use crate::assembly::part::PartDescriptor;
use crate::assembly::Assembly;

/// Per-part progress snapshot computed once from the global progress,
/// then shared by position interpolation and boundary introspection so
/// both observe the same instant.
#[derive(Debug, Clone, Copy)]
pub struct PartProgress {
    /// Global progress (0.0 to 1.0), unmodified from the timeline.
    pub global: f32,
    /// The part's local progress within its animation window, clamped.
    pub local_t: f32,
    /// Eased local progress. This is the value position interpolation
    /// uses.
    pub eased_t: f32,
}

impl PartProgress {
    /// Compute the snapshot for one part at the given global progress.
    #[must_use]
    pub fn of(part: &PartDescriptor, global: f32) -> Self {
        let local_t = part.window.local_t(global);
        Self {
            global,
            local_t,
            eased_t: part.easing.evaluate(local_t),
        }
    }

    /// Whether the part has fully reached its assembled position.
    #[must_use]
    pub fn settled(&self) -> bool {
        self.local_t >= 1.0
    }

    /// Whether the part is still pinned at its exploded position.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.local_t <= 0.0
    }
}

/// Position of one part at the given global progress.
///
/// Pure: identical inputs always produce identical output. Outside the
/// part's window this returns the exploded or assembled endpoint exactly.
#[inline]
#[must_use]
pub fn part_position(part: &PartDescriptor, global: f32) -> Vec3 {
    let eased = PartProgress::of(part, global).eased_t;
    // Endpoints return the stored positions bit-for-bit; the lerp below
    // can land one ulp off after rounding.
    if eased <= 0.0 {
        return part.exploded;
    }
    if eased >= 1.0 {
        return part.assembled;
    }
    part.exploded + (part.assembled - part.exploded) * eased
}

/// Fill `out` with the position of every part at one progress snapshot.
///
/// The buffer is cleared and refilled in assembly order, so indices match
/// [`Assembly::parts`]. Reuses the buffer's capacity across calls.
pub fn assembly_positions(
    assembly: &Assembly,
    global: f32,
    out: &mut Vec<Vec3>,
) {
    out.clear();
    out.extend(
        assembly.iter().map(|part| part_position(part, global)),
    );
}
