//! Part descriptors: rigid components with per-part animation windows.

use glam::{Quat, Vec3};

use crate::error::FenestraError;
use crate::util::easing::EasingFunction;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Construction tier of a part, in settle order.
///
/// A tier groups parts that share one animation window and one explosion
/// rule. Foundational tiers settle first, cosmetic tiers last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Wall-side perimeter rails. Anchored, never move.
    AnchorRail,
    /// Corner posts protruding from the anchor plane.
    CornerMember,
    /// Side panels spanning between the corner members.
    InfillPanel,
    /// Front cap ring covering the members' and panels' front edges.
    Cladding,
    /// Secondary frame bars inset in the front opening.
    InsetFrame,
    /// The transparent pane filling the frame opening.
    GlazingPane,
}

impl Tier {
    /// All tiers in settle order.
    pub const ALL: [Self; 6] = [
        Self::AnchorRail,
        Self::CornerMember,
        Self::InfillPanel,
        Self::Cladding,
        Self::InsetFrame,
        Self::GlazingPane,
    ];

    /// Short lowercase label for logging and display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AnchorRail => "anchor rail",
            Self::CornerMember => "corner member",
            Self::InfillPanel => "infill panel",
            Self::Cladding => "cladding",
            Self::InsetFrame => "inset frame",
            Self::GlazingPane => "glazing pane",
        }
    }
}

// ---------------------------------------------------------------------------
// AnimationWindow
// ---------------------------------------------------------------------------

/// Sub-interval of global progress during which a part moves.
///
/// Outside the window the part is pinned at the nearer boundary position:
/// fully exploded before `start_offset`, fully assembled after
/// `start_offset + span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationWindow {
    /// Global progress at which the part starts moving. Must lie in [0, 1).
    pub start_offset: f32,
    /// Window length in global-progress units. Must be positive.
    pub span: f32,
}

impl AnimationWindow {
    /// Create a validated window.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidWindow`] if `span` is not strictly
    /// positive or `start_offset` lies outside [0, 1).
    pub fn new(start_offset: f32, span: f32) -> Result<Self, FenestraError> {
        let window = Self { start_offset, span };
        window.validate()?;
        Ok(window)
    }

    /// Check the window invariants without constructing.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidWindow`] if `span` is not strictly
    /// positive or `start_offset` lies outside [0, 1).
    pub fn validate(&self) -> Result<(), FenestraError> {
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err(FenestraError::InvalidWindow(format!(
                "span must be positive, got {}",
                self.span
            )));
        }
        if !(0.0..1.0).contains(&self.start_offset) {
            return Err(FenestraError::InvalidWindow(format!(
                "start offset must be in [0, 1), got {}",
                self.start_offset
            )));
        }
        Ok(())
    }

    /// Global progress at which the part reaches its assembled position.
    ///
    /// May exceed 1 for hand-built windows; such a part never fully
    /// assembles within the timeline.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start_offset + self.span
    }

    /// Map global progress to this part's local progress, clamped to [0, 1].
    ///
    /// Returns 0 before the window opens and 1 after it closes, so parts
    /// hold their boundary positions outside their window.
    #[must_use]
    pub fn local_t(&self, global: f32) -> f32 {
        ((global - self.start_offset) / self.span).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// VisualHints
// ---------------------------------------------------------------------------

/// Cosmetic rendering hints for a part.
///
/// Consumed by the presentation boundary when building materials. Never
/// affects layout or timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualHints {
    /// Base color as linear RGB.
    pub base_color: [f32; 3],
    /// Opacity in [0, 1]; below 1 the boundary should alpha-blend.
    pub opacity: f32,
    /// Metalness for PBR shading.
    pub metalness: f32,
    /// Roughness for PBR shading.
    pub roughness: f32,
}

impl Default for VisualHints {
    fn default() -> Self {
        Self {
            base_color: [0.75, 0.75, 0.78],
            opacity: 1.0,
            metalness: 0.0,
            roughness: 0.6,
        }
    }
}

// ---------------------------------------------------------------------------
// PartDescriptor
// ---------------------------------------------------------------------------

/// One rigid rectangular component of an assembly.
///
/// A descriptor is immutable after construction: both endpoint positions,
/// the animation window, and the easing curve are fixed, and the part's
/// instantaneous position is a pure function of global progress (see
/// [`position_at`](Self::position_at)).
#[derive(Debug, Clone)]
pub struct PartDescriptor {
    /// Identifier, unique within the owning assembly.
    pub id: String,
    /// Human-readable name for UI display.
    pub display_name: String,
    /// Extents along X, Y, Z. All strictly positive.
    pub dimensions: Vec3,
    /// Center position at progress 1 (fully assembled).
    pub assembled: Vec3,
    /// Center position at progress 0 (fully exploded).
    pub exploded: Vec3,
    /// Fixed orientation, constant across the whole animation.
    pub rotation: Option<Quat>,
    /// Sub-interval of global progress during which the part moves.
    pub window: AnimationWindow,
    /// Easing curve applied to the part's local progress.
    pub easing: EasingFunction,
    /// Construction tier this part belongs to.
    pub tier: Tier,
    /// Cosmetic rendering hints.
    pub hints: VisualHints,
}

impl PartDescriptor {
    /// Create a validated descriptor with default easing and hints.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::InvalidParameter`] if any dimension is
    /// non-positive or non-finite, or [`FenestraError::InvalidWindow`] if
    /// the window invariants do not hold.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        dimensions: Vec3,
        assembled: Vec3,
        exploded: Vec3,
        window: AnimationWindow,
        tier: Tier,
    ) -> Result<Self, FenestraError> {
        let id = id.into();
        if !dimensions.is_finite() || dimensions.min_element() <= 0.0 {
            return Err(FenestraError::InvalidParameter(format!(
                "part '{id}' dimensions must be positive, got {dimensions}"
            )));
        }
        window.validate()?;
        Ok(Self {
            id,
            display_name: display_name.into(),
            dimensions,
            assembled,
            exploded,
            rotation: None,
            window,
            easing: EasingFunction::DEFAULT,
            tier,
            hints: VisualHints::default(),
        })
    }

    /// Set a custom easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set a fixed orientation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set rendering hints.
    #[must_use]
    pub fn with_hints(mut self, hints: VisualHints) -> Self {
        self.hints = hints;
        self
    }

    /// Minimum corner of the assembled axis-aligned bounding box.
    #[must_use]
    pub fn min_corner(&self) -> Vec3 {
        self.assembled - self.dimensions * 0.5
    }

    /// Maximum corner of the assembled axis-aligned bounding box.
    #[must_use]
    pub fn max_corner(&self) -> Vec3 {
        self.assembled + self.dimensions * 0.5
    }

    /// Center position at the given global progress.
    ///
    /// Pure windowed eased interpolation between the exploded and
    /// assembled endpoints.
    #[must_use]
    pub fn position_at(&self, progress: f32) -> Vec3 {
        crate::animation::interpolation::part_position(self, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(window: AnimationWindow) -> PartDescriptor {
        PartDescriptor::new(
            "test-part",
            "Test Part",
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            window,
            Tier::CornerMember,
        )
        .unwrap()
    }

    #[test]
    fn window_rejects_zero_span() {
        let result = AnimationWindow::new(0.0, 0.0);
        assert!(matches!(result, Err(FenestraError::InvalidWindow(_))));
    }

    #[test]
    fn window_rejects_negative_span() {
        let result = AnimationWindow::new(0.2, -0.1);
        assert!(matches!(result, Err(FenestraError::InvalidWindow(_))));
    }

    #[test]
    fn window_rejects_offset_of_one_or_more() {
        assert!(AnimationWindow::new(1.0, 0.5).is_err());
        assert!(AnimationWindow::new(1.5, 0.5).is_err());
        assert!(AnimationWindow::new(-0.1, 0.5).is_err());
    }

    #[test]
    fn window_accepts_end_past_one() {
        // Hand-built windows may overrun; the part just never finishes.
        let window = AnimationWindow::new(0.8, 0.5).unwrap();
        assert!((window.end() - 1.3).abs() < 1e-6);
    }

    #[test]
    fn local_t_before_window_is_zero() {
        let window = AnimationWindow::new(0.3, 0.5).unwrap();
        assert_eq!(window.local_t(0.0), 0.0);
        assert_eq!(window.local_t(0.29), 0.0);
    }

    #[test]
    fn local_t_after_window_is_one() {
        let window = AnimationWindow::new(0.3, 0.5).unwrap();
        assert_eq!(window.local_t(0.8), 1.0);
        assert_eq!(window.local_t(1.0), 1.0);
    }

    #[test]
    fn local_t_interpolates_inside_window() {
        let window = AnimationWindow::new(0.3, 0.5).unwrap();
        let t = window.local_t(0.5);
        assert!((t - 0.4).abs() < 1e-6);
    }

    #[test]
    fn descriptor_rejects_non_positive_dimensions() {
        let window = AnimationWindow::new(0.0, 1.0).unwrap();
        let result = PartDescriptor::new(
            "bad",
            "Bad",
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::ZERO,
            Vec3::ZERO,
            window,
            Tier::Cladding,
        );
        assert!(matches!(result, Err(FenestraError::InvalidParameter(_))));
    }

    #[test]
    fn descriptor_defaults() {
        let part = descriptor(AnimationWindow::new(0.0, 1.0).unwrap());
        assert_eq!(part.easing, EasingFunction::DEFAULT);
        assert!(part.rotation.is_none());
        assert_eq!(part.hints.opacity, 1.0);
    }

    #[test]
    fn builders_override_defaults() {
        let part = descriptor(AnimationWindow::new(0.0, 1.0).unwrap())
            .with_easing(EasingFunction::Linear)
            .with_hints(VisualHints {
                opacity: 0.3,
                ..VisualHints::default()
            });
        assert_eq!(part.easing, EasingFunction::Linear);
        assert_eq!(part.hints.opacity, 0.3);
    }

    #[test]
    fn corners_bracket_the_assembled_center() {
        let part = descriptor(AnimationWindow::new(0.0, 1.0).unwrap());
        assert_eq!(part.min_corner(), Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(part.max_corner(), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn tier_order_matches_settle_sequence() {
        let mut sorted = Tier::ALL;
        sorted.sort();
        assert_eq!(sorted, Tier::ALL);
        assert!(Tier::AnchorRail < Tier::GlazingPane);
    }
}
