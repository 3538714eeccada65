//! Parametric layout generator for the protruding box-window unit.
//!
//! A single pass over six structural parameters produces every part's
//! assembled position, exploded position, and animation window. Adjacent
//! parts are flush by construction: shared faces are derived from the
//! same landmark coordinates, so the assembled unit closes without gaps.
//!
//! Coordinate frame: X spans the opening width, Y the height, Z the
//! protrusion out of the wall plane. The wall plane sits at Z = 0 and the
//! outer cladding face at Z = depth. X and Y are centered on the opening.

use glam::Vec3;

use super::part::{AnimationWindow, PartDescriptor, Tier, VisualHints};
use super::Assembly;
use crate::error::FenestraError;
use crate::options::AssemblyOptions;

/// Animation window for each construction tier.
///
/// Foundations open first and the glazing settles last, with overlapping
/// spans so motion hands off smoothly between tiers. Every window ends at
/// or before 1.0; the glazing window ends at exactly 1.0, so the whole
/// unit is flush when the timeline completes.
#[must_use]
pub fn tier_window(tier: Tier) -> AnimationWindow {
    let (start_offset, span) = match tier {
        Tier::AnchorRail => (0.0, 0.2),
        Tier::CornerMember => (0.0, 0.35),
        Tier::InfillPanel => (0.15, 0.4),
        Tier::Cladding => (0.45, 0.35),
        Tier::InsetFrame => (0.6, 0.3),
        Tier::GlazingPane => (0.7, 0.3),
    };
    AnimationWindow { start_offset, span }
}

/// Rendering hints for each construction tier.
fn tier_hints(tier: Tier) -> VisualHints {
    match tier {
        Tier::AnchorRail => VisualHints {
            base_color: [0.35, 0.36, 0.38],
            roughness: 0.7,
            ..VisualHints::default()
        },
        Tier::CornerMember => VisualHints {
            base_color: [0.46, 0.47, 0.49],
            roughness: 0.65,
            ..VisualHints::default()
        },
        Tier::InfillPanel => VisualHints {
            base_color: [0.62, 0.57, 0.5],
            roughness: 0.8,
            ..VisualHints::default()
        },
        Tier::Cladding => VisualHints {
            base_color: [0.82, 0.82, 0.84],
            metalness: 0.3,
            roughness: 0.4,
            ..VisualHints::default()
        },
        Tier::InsetFrame => VisualHints {
            base_color: [0.9, 0.9, 0.92],
            roughness: 0.5,
            ..VisualHints::default()
        },
        Tier::GlazingPane => VisualHints {
            base_color: [0.55, 0.72, 0.78],
            opacity: 0.25,
            roughness: 0.1,
            ..VisualHints::default()
        },
    }
}

/// Landmark coordinates shared by every tier builder.
///
/// Deriving each part from these values (rather than re-deriving per
/// part) is what keeps adjacent faces flush.
struct Layout {
    half_w: f32,
    half_h: f32,
    depth: f32,
    /// Structural member thickness.
    t: f32,
    /// Inset frame bar thickness (half a member).
    f: f32,
    /// Glazing pane thickness (a quarter member).
    g: f32,
    explode_near: f32,
    explode_far: f32,
}

impl Layout {
    fn new(o: &AssemblyOptions) -> Self {
        Self {
            half_w: o.width * 0.5,
            half_h: o.height * 0.5,
            depth: o.depth,
            t: o.member,
            f: o.member * 0.5,
            g: o.member * 0.25,
            explode_near: o.explode_near,
            explode_far: o.explode_far,
        }
    }

    /// Inner X face of the opening (posts and cladding ring).
    fn x_inner(&self) -> f32 {
        self.half_w - self.t
    }

    /// Inner Y face of the opening.
    fn y_inner(&self) -> f32 {
        self.half_h - self.t
    }

    /// Center Z of the protruding body band.
    fn z_body(&self) -> f32 {
        self.depth * 0.5
    }

    /// Center Z of the front (cladding/frame/pane) band.
    fn z_front(&self) -> f32 {
        self.depth - self.t * 0.5
    }
}

/// Generate the complete window-unit assembly.
///
/// Produces 21 parts across six tiers, ordered foundational to cosmetic:
/// anchor rails, corner members, infill panels, cladding, inset frame,
/// glazing pane. Pure and deterministic: equal options yield an equal
/// assembly.
///
/// # Errors
///
/// Returns [`FenestraError::InvalidParameter`] when any input is
/// non-positive or the layout degenerates: `width <= 3 * member`,
/// `height <= 3 * member`, or `depth <= 2 * member` would collapse the
/// opening or the protrusion. No partial assembly is ever produced.
pub fn window_unit(
    options: &AssemblyOptions,
) -> Result<Assembly, FenestraError> {
    validate(options)?;
    let l = Layout::new(options);

    let mut parts = Vec::with_capacity(21);
    parts.extend(perimeter_ring(
        &l,
        l.t * 0.5,
        Tier::AnchorRail,
        "anchor-rail",
        "Anchor Rail",
    )?);
    parts.extend(corner_members(&l)?);
    parts.extend(infill_panels(&l)?);
    parts.extend(perimeter_ring(
        &l,
        l.z_front(),
        Tier::Cladding,
        "cladding",
        "Cladding",
    )?);
    parts.extend(inset_frame(&l)?);
    parts.push(glazing_pane(&l)?);

    Assembly::from_parts(parts)
}

fn validate(o: &AssemblyOptions) -> Result<(), FenestraError> {
    let fields = [
        ("width", o.width),
        ("height", o.height),
        ("depth", o.depth),
        ("member", o.member),
        ("explode_near", o.explode_near),
        ("explode_far", o.explode_far),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(FenestraError::InvalidParameter(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }
    if o.width <= 3.0 * o.member {
        return Err(FenestraError::InvalidParameter(format!(
            "width {} leaves no opening at member thickness {}",
            o.width, o.member
        )));
    }
    if o.height <= 3.0 * o.member {
        return Err(FenestraError::InvalidParameter(format!(
            "height {} leaves no opening at member thickness {}",
            o.height, o.member
        )));
    }
    if o.depth <= 2.0 * o.member {
        return Err(FenestraError::InvalidParameter(format!(
            "depth {} leaves no protrusion at member thickness {}",
            o.depth, o.member
        )));
    }
    Ok(())
}

/// Four-part rectangular ring of member-thick bars at the given Z center.
///
/// Top and bottom bars own the corners and span the full width; the side
/// bars fit flush between them. Used for both the anchor rails at the
/// wall and the cladding ring at the front; only the cladding moves.
fn perimeter_ring(
    l: &Layout,
    z_center: f32,
    tier: Tier,
    id_prefix: &str,
    display_prefix: &str,
) -> Result<Vec<PartDescriptor>, FenestraError> {
    let window = tier_window(tier);
    let hints = tier_hints(tier);
    let explode = match tier {
        Tier::Cladding => Vec3::Z * l.explode_far,
        _ => Vec3::ZERO,
    };

    let horizontal = Vec3::new(l.half_w * 2.0, l.t, l.t);
    let vertical = Vec3::new(l.t, l.y_inner() * 2.0, l.t);
    let sides = [
        ("top", Vec3::new(0.0, l.half_h - l.t * 0.5, z_center), horizontal),
        (
            "bottom",
            Vec3::new(0.0, -(l.half_h - l.t * 0.5), z_center),
            horizontal,
        ),
        (
            "left",
            Vec3::new(-(l.half_w - l.t * 0.5), 0.0, z_center),
            vertical,
        ),
        ("right", Vec3::new(l.half_w - l.t * 0.5, 0.0, z_center), vertical),
    ];

    let mut parts = Vec::with_capacity(sides.len());
    for (side, center, dims) in sides {
        let part = PartDescriptor::new(
            format!("{id_prefix}-{side}"),
            format!("{display_prefix} ({side})"),
            dims,
            center,
            center + explode,
            window,
            tier,
        )?
        .with_hints(hints);
        parts.push(part);
    }
    Ok(parts)
}

/// Four corner posts spanning the body band between the anchor and
/// cladding rings.
fn corner_members(l: &Layout) -> Result<Vec<PartDescriptor>, FenestraError> {
    let window = tier_window(Tier::CornerMember);
    let hints = tier_hints(Tier::CornerMember);
    let dims = Vec3::new(l.t, l.t, l.depth - 2.0 * l.t);
    let x = l.half_w - l.t * 0.5;
    let y = l.half_h - l.t * 0.5;

    let corners = [
        ("top-left", Vec3::new(-x, y, l.z_body())),
        ("top-right", Vec3::new(x, y, l.z_body())),
        ("bottom-left", Vec3::new(-x, -y, l.z_body())),
        ("bottom-right", Vec3::new(x, -y, l.z_body())),
    ];

    let mut parts = Vec::with_capacity(corners.len());
    for (corner, center) in corners {
        let part = PartDescriptor::new(
            format!("corner-member-{corner}"),
            format!("Corner Member ({corner})"),
            dims,
            center,
            center + Vec3::Z * l.explode_near,
            window,
            Tier::CornerMember,
        )?
        .with_hints(hints);
        parts.push(part);
    }
    Ok(parts)
}

/// Four body panels closing the box sides between the corner posts.
///
/// Each panel explodes sideways along its outward face normal; the sign
/// comes from the assembled center's lateral coordinate.
fn infill_panels(l: &Layout) -> Result<Vec<PartDescriptor>, FenestraError> {
    let window = tier_window(Tier::InfillPanel);
    let hints = tier_hints(Tier::InfillPanel);
    let body_depth = l.depth - 2.0 * l.t;
    let horizontal = Vec3::new(l.x_inner() * 2.0, l.t, body_depth);
    let vertical = Vec3::new(l.t, l.y_inner() * 2.0, body_depth);

    let sides = [
        ("top", Vec3::new(0.0, l.half_h - l.t * 0.5, l.z_body()), horizontal),
        (
            "bottom",
            Vec3::new(0.0, -(l.half_h - l.t * 0.5), l.z_body()),
            horizontal,
        ),
        (
            "left",
            Vec3::new(-(l.half_w - l.t * 0.5), 0.0, l.z_body()),
            vertical,
        ),
        (
            "right",
            Vec3::new(l.half_w - l.t * 0.5, 0.0, l.z_body()),
            vertical,
        ),
    ];

    let mut parts = Vec::with_capacity(sides.len());
    for (side, center, dims) in sides {
        let outward = if matches!(side, "top" | "bottom") {
            Vec3::Y * center.y.signum()
        } else {
            Vec3::X * center.x.signum()
        };
        let part = PartDescriptor::new(
            format!("infill-panel-{side}"),
            format!("Infill Panel ({side})"),
            dims,
            center,
            center + outward * l.explode_near,
            window,
            Tier::InfillPanel,
        )?
        .with_hints(hints);
        parts.push(part);
    }
    Ok(parts)
}

/// Four frame bars inset flush against the cladding's inner faces.
fn inset_frame(l: &Layout) -> Result<Vec<PartDescriptor>, FenestraError> {
    let window = tier_window(Tier::InsetFrame);
    let hints = tier_hints(Tier::InsetFrame);
    let opening_w = l.x_inner() * 2.0;
    let opening_h = l.y_inner() * 2.0;
    let horizontal = Vec3::new(opening_w, l.f, l.t);
    let vertical = Vec3::new(l.f, opening_h - 2.0 * l.f, l.t);

    let sides = [
        (
            "top",
            Vec3::new(0.0, l.y_inner() - l.f * 0.5, l.z_front()),
            horizontal,
        ),
        (
            "bottom",
            Vec3::new(0.0, -(l.y_inner() - l.f * 0.5), l.z_front()),
            horizontal,
        ),
        (
            "left",
            Vec3::new(-(l.x_inner() - l.f * 0.5), 0.0, l.z_front()),
            vertical,
        ),
        (
            "right",
            Vec3::new(l.x_inner() - l.f * 0.5, 0.0, l.z_front()),
            vertical,
        ),
    ];

    let mut parts = Vec::with_capacity(sides.len());
    for (side, center, dims) in sides {
        let part = PartDescriptor::new(
            format!("inset-frame-{side}"),
            format!("Inset Frame ({side})"),
            dims,
            center,
            center + Vec3::Z * (0.7 * l.explode_far),
            window,
            Tier::InsetFrame,
        )?
        .with_hints(hints);
        parts.push(part);
    }
    Ok(parts)
}

/// The glazing pane, filling the frame opening exactly.
fn glazing_pane(l: &Layout) -> Result<PartDescriptor, FenestraError> {
    let dims = Vec3::new(
        (l.x_inner() - l.f) * 2.0,
        (l.y_inner() - l.f) * 2.0,
        l.g,
    );
    let center = Vec3::new(0.0, 0.0, l.z_front());
    Ok(PartDescriptor::new(
        "glazing-pane",
        "Glazing Pane",
        dims,
        center,
        center + Vec3::Z * (0.4 * l.explode_far),
        tier_window(Tier::GlazingPane),
        Tier::GlazingPane,
    )?
    .with_hints(tier_hints(Tier::GlazingPane)))
}
