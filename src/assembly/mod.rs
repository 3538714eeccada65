//! Assembly model: immutable ordered part collections with id lookup.
//!
//! An [`Assembly`] is built once, either by the parametric
//! [`window_unit()`] generator or from caller-supplied descriptors, and
//! never mutated
//! afterwards. All animation state lives in the timeline; the assembly
//! only answers geometry questions.

pub mod part;
pub mod window_unit;

use glam::Vec3;
pub use part::{AnimationWindow, PartDescriptor, Tier, VisualHints};
use rustc_hash::FxHashMap;
pub use window_unit::window_unit;

use crate::error::FenestraError;

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Immutable ordered collection of parts with constant-time id lookup.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Parts in generation order.
    parts: Vec<PartDescriptor>,
    /// Index from part id into `parts`.
    index: FxHashMap<String, usize>,
}

impl Assembly {
    /// Build an assembly from descriptors, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::DuplicatePartId`] if two descriptors share
    /// an id. Ids are never reused within one assembly.
    pub fn from_parts(
        parts: Vec<PartDescriptor>,
    ) -> Result<Self, FenestraError> {
        let mut index = FxHashMap::default();
        for (i, part) in parts.iter().enumerate() {
            if index.insert(part.id.clone(), i).is_some() {
                return Err(FenestraError::DuplicatePartId(part.id.clone()));
            }
        }
        Ok(Self { parts, index })
    }

    /// All parts in generation order.
    #[must_use]
    pub fn parts(&self) -> &[PartDescriptor] {
        &self.parts
    }

    /// Look up a part by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PartDescriptor> {
        self.index.get(id).map(|&i| &self.parts[i])
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the assembly holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate parts in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, PartDescriptor> {
        self.parts.iter()
    }

    /// Axis-aligned bounding box of the fully assembled state, as
    /// `(min, max)` corners. `None` for an empty assembly.
    ///
    /// Useful for camera framing at the presentation boundary.
    #[must_use]
    pub fn assembled_bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.parts.first()?;
        let mut min = first.min_corner();
        let mut max = first.max_corner();
        for part in &self.parts[1..] {
            min = min.min(part.min_corner());
            max = max.max(part.max_corner());
        }
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Assembly {
    type Item = &'a PartDescriptor;
    type IntoIter = std::slice::Iter<'a, PartDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, center: Vec3) -> PartDescriptor {
        PartDescriptor::new(
            id,
            id.to_uppercase(),
            Vec3::new(1.0, 2.0, 0.5),
            center,
            center + Vec3::new(0.0, 0.0, 1.0),
            AnimationWindow::new(0.0, 1.0).unwrap(),
            Tier::Cladding,
        )
        .unwrap()
    }

    #[test]
    fn preserves_part_order() {
        let assembly = Assembly::from_parts(vec![
            part("a", Vec3::ZERO),
            part("b", Vec3::X),
            part("c", Vec3::Y),
        ])
        .unwrap();
        let ids: Vec<&str> =
            assembly.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Assembly::from_parts(vec![
            part("rail", Vec3::ZERO),
            part("rail", Vec3::X),
        ]);
        match result {
            Err(FenestraError::DuplicatePartId(id)) => {
                assert_eq!(id, "rail");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn id_lookup_finds_the_right_part() {
        let assembly = Assembly::from_parts(vec![
            part("a", Vec3::ZERO),
            part("b", Vec3::X),
        ])
        .unwrap();
        assert_eq!(assembly.get("b").unwrap().assembled, Vec3::X);
        assert!(assembly.get("missing").is_none());
    }

    #[test]
    fn empty_assembly_has_no_bounds() {
        let assembly = Assembly::from_parts(Vec::new()).unwrap();
        assert!(assembly.is_empty());
        assert_eq!(assembly.len(), 0);
        assert!(assembly.assembled_bounds().is_none());
    }

    #[test]
    fn bounds_cover_all_parts() {
        let assembly = Assembly::from_parts(vec![
            part("a", Vec3::ZERO),
            part("b", Vec3::new(3.0, 0.0, 0.0)),
        ])
        .unwrap();
        let (min, max) = assembly.assembled_bounds().unwrap();
        assert_eq!(min, Vec3::new(-0.5, -1.0, -0.25));
        assert_eq!(max, Vec3::new(3.5, 1.0, 0.25));
    }
}
