use super::{Ring, RingOrientation};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// A single polygon: one exterior ring plus zero or more hole rings.
///
/// By convention the exterior winds counter clockwise and holes wind
/// clockwise, so [`RingGroup::area`] (the sum of signed ring areas) is the
/// enclosed area. The constructors do not enforce orientation; the overlay
/// operations assert what they require at their entry points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RingGroup<T = f64>
where
    T: Real,
{
    exterior: Ring<T>,
    holes: Vec<Ring<T>>,
}

impl<T> RingGroup<T>
where
    T: Real,
{
    /// Create a group from an exterior ring with no holes.
    #[inline]
    pub fn new(exterior: Ring<T>) -> Self {
        RingGroup {
            exterior,
            holes: Vec::new(),
        }
    }

    /// Create a group from an exterior ring and hole rings.
    #[inline]
    pub fn with_holes(exterior: Ring<T>, holes: Vec<Ring<T>>) -> Self {
        RingGroup { exterior, holes }
    }

    #[inline]
    pub fn exterior(&self) -> &Ring<T> {
        &self.exterior
    }

    #[inline]
    pub fn holes(&self) -> &[Ring<T>] {
        &self.holes
    }

    #[inline]
    pub fn add_hole(&mut self, hole: Ring<T>) {
        self.holes.push(hole);
    }

    /// Total ring count (exterior + holes).
    #[inline]
    pub fn ring_count(&self) -> usize {
        1 + self.holes.len()
    }

    /// Enclosed area: sum of signed ring areas (holes wound clockwise
    /// subtract).
    pub fn area(&self) -> T {
        let mut area = self.exterior.signed_area();
        for hole in &self.holes {
            area = area + hole.signed_area();
        }
        area
    }

    /// XY extents of the exterior ring, `None` if empty.
    #[inline]
    pub fn extents(&self) -> Option<AABB<T>> {
        self.exterior.extents()
    }

    /// Returns `true` if the exterior winds counter clockwise and every hole
    /// winds clockwise.
    pub fn is_properly_oriented(&self) -> bool {
        self.exterior.orientation() == RingOrientation::CounterClockwise
            && self
                .holes
                .iter()
                .all(|h| h.orientation() == RingOrientation::Clockwise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn area_subtracts_holes() {
        let exterior = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let hole = ring![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)].reversed();
        let group = RingGroup::with_holes(exterior, vec![hole]);

        assert!(group.is_properly_oriented());
        assert_fuzzy_eq!(group.area(), 15.0);
        assert_eq!(group.ring_count(), 2);
    }

    #[test]
    fn improper_orientation_detected() {
        let exterior = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        // hole wound counter clockwise (wrong way)
        let hole = ring![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)];
        let group = RingGroup::with_holes(exterior, vec![hole]);
        assert!(!group.is_properly_oriented());
    }
}
