use super::{Ring, RingGroup};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Capability trait over anything the overlay engine can walk segments of: a
/// single ring, a ring group (exterior + holes) or a slice of rings.
///
/// The engine addresses geometry by `(part, segment)` pairs; a part is one
/// ring. Implementing this trait is all that is required to participate in
/// the overlay operations as a source or target.
pub trait SegmentSource<T>
where
    T: Real,
{
    /// Number of ring parts.
    fn part_count(&self) -> usize;

    /// Ring part at `index`.
    fn part(&self, index: usize) -> &Ring<T>;

    /// Returns `true` if every part is closed within `epsilon`.
    fn all_parts_closed(&self, epsilon: T) -> bool {
        (0..self.part_count()).all(|i| self.part(i).is_closed(epsilon))
    }

    /// Union of the XY extents of all parts, `None` if there are no parts or
    /// all parts are empty.
    fn extents(&self) -> Option<AABB<T>> {
        let mut result: Option<AABB<T>> = None;
        for i in 0..self.part_count() {
            let Some(aabb) = self.part(i).extents() else {
                continue;
            };
            result = Some(match result {
                None => aabb,
                Some(acc) => AABB::new(
                    num_traits::Float::min(acc.min_x, aabb.min_x),
                    num_traits::Float::min(acc.min_y, aabb.min_y),
                    num_traits::Float::max(acc.max_x, aabb.max_x),
                    num_traits::Float::max(acc.max_y, aabb.max_y),
                ),
            });
        }
        result
    }
}

impl<T> SegmentSource<T> for Ring<T>
where
    T: Real,
{
    #[inline]
    fn part_count(&self) -> usize {
        1
    }

    #[inline]
    fn part(&self, index: usize) -> &Ring<T> {
        assert!(index == 0, "ring has a single part");
        self
    }
}

impl<T> SegmentSource<T> for RingGroup<T>
where
    T: Real,
{
    #[inline]
    fn part_count(&self) -> usize {
        self.ring_count()
    }

    /// Part 0 is the exterior, parts 1.. are the holes.
    #[inline]
    fn part(&self, index: usize) -> &Ring<T> {
        if index == 0 {
            self.exterior()
        } else {
            &self.holes()[index - 1]
        }
    }
}

impl<T> SegmentSource<T> for [Ring<T>]
where
    T: Real,
{
    #[inline]
    fn part_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn part(&self, index: usize) -> &Ring<T> {
        &self[index]
    }
}

impl<T> SegmentSource<T> for Vec<Ring<T>>
where
    T: Real,
{
    #[inline]
    fn part_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn part(&self, index: usize) -> &Ring<T> {
        &self[index]
    }
}

impl<S, T> SegmentSource<T> for &S
where
    S: SegmentSource<T> + ?Sized,
    T: Real,
{
    #[inline]
    fn part_count(&self) -> usize {
        (**self).part_count()
    }

    #[inline]
    fn part(&self, index: usize) -> &Ring<T> {
        (**self).part(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn ring_group_parts() {
        let exterior = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let hole = ring![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)].reversed();
        let group = RingGroup::with_holes(exterior, vec![hole]);

        assert_eq!(group.part_count(), 2);
        assert!(group.part(0).signed_area() > 0.0);
        assert!(group.part(1).signed_area() < 0.0);
        assert!(group.all_parts_closed(1e-8));
    }

    #[test]
    fn slice_extents_union() {
        let rings = vec![
            ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            ring![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)],
        ];
        let aabb = rings.extents().unwrap();
        assert_fuzzy_eq!(aabb.min_x, 0.0);
        assert_fuzzy_eq!(aabb.max_x, 6.0);
        assert_fuzzy_eq!(aabb.max_y, 6.0);
    }
}
