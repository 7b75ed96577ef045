//! Cutting a closed area by a curve.
//!
//! The cutter may be an open curve or a closed ring. Every piece of the
//! source boundary is kept; cutter pieces running through the source interior
//! are kept in both travel directions (as twins) so each of the two faces
//! along the cut can claim one. Faces are then told apart by how they used
//! the cutter: a counter clockwise face traversing the cutter forward has its
//! interior on the cutter's left.
//!
//! Cutter pieces with a free end (an open cutter stopping inside the area)
//! cannot bound two faces and are discarded; an incomplete cut does not
//! split.

use super::intersection_points::collect_intersections;
use super::navigator::{CurveRole, Subcurve, SubcurveSide, TurnPreference, build_subcurves, stitch_subcurves};
use super::predicates::{PointContainment, definite_containment, rings_congruent_xy};
use super::ring_algebra::assemble_groups;
use super::OverlayOptions;
use crate::core::traits::Real;
use crate::geom::{Ring, RingGroup, RingOrientation, SegmentSource};

/// Which side of the cutter a face lies on, relative to the cutter's travel
/// direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CutSide {
    Left,
    Right,
    /// The face does not border the cut (or borders it from both sides).
    Undetermined,
}

/// Result of [`cut_xy`]: the source area split into faces grouped by cut
/// side.
#[derive(Debug, Clone, Default)]
pub struct CutResult<T = f64>
where
    T: Real,
{
    pub left: Vec<RingGroup<T>>,
    pub right: Vec<RingGroup<T>>,
    pub undetermined: Vec<RingGroup<T>>,
}

impl<T> CutResult<T>
where
    T: Real,
{
    fn new() -> Self {
        CutResult {
            left: Vec::new(),
            right: Vec::new(),
            undetermined: Vec::new(),
        }
    }

    fn push(&mut self, group: RingGroup<T>, side: CutSide) {
        match side {
            CutSide::Left => self.left.push(group),
            CutSide::Right => self.right.push(group),
            CutSide::Undetermined => self.undetermined.push(group),
        }
    }

    /// Total area over all faces; always equal to the source area.
    pub fn area(&self) -> T {
        let mut sum = T::zero();
        for g in self.left.iter().chain(&self.right).chain(&self.undetermined) {
            sum = sum + g.area();
        }
        sum
    }
}

/// Cut the source area by the cutter curve.
///
/// # Panics
///
/// Panics if `opts.tolerance` is negative, if any source part is not closed,
/// or if self-intersecting input prevents a face from closing.
pub fn cut_xy<S, T>(source: &S, cutter: &Ring<T>, opts: &OverlayOptions<T>) -> CutResult<T>
where
    S: SegmentSource<T>,
    T: Real,
{
    let tol = opts.tolerance;
    assert!(tol >= T::zero(), "tolerance must be non-negative");
    assert!(
        source.all_parts_closed(tol),
        "cut requires closed source rings"
    );

    let set = collect_intersections(source, cutter, opts);
    if set.points.is_empty() {
        return cut_without_crossings(source, cutter, &set, tol);
    }

    // every source boundary piece survives the cut
    let mut kept: Vec<Subcurve<T>> = build_subcurves(&set, CurveRole::Source, source, cutter, tol);

    // interior cutter pieces bound a face on each side
    for s in build_subcurves(&set, CurveRole::Target, cutter, source, tol) {
        if s.side != SubcurveSide::Inside {
            continue;
        }
        let fwd_idx = kept.len();
        let mut rev = s.reversed_copy();
        let mut fwd = s;
        fwd.twin = Some(fwd_idx + 1);
        rev.twin = Some(fwd_idx);
        kept.push(fwd);
        kept.push(rev);
    }

    let mut faces: Vec<(Ring<T>, CutSide)> = Vec::new();
    let mut holes: Vec<Ring<T>> = Vec::new();
    for f in stitch_subcurves(&kept, TurnPreference::Left, tol) {
        if f.all_on_boundary {
            continue;
        }
        let area = f.ring.signed_area();
        if area.fuzzy_eq_zero_eps(tol) {
            continue;
        }
        if area < T::zero() {
            holes.push(f.ring);
            continue;
        }
        let mut forward = false;
        let mut reverse = false;
        for &i in &f.used {
            let s = &kept[i];
            if s.role == CurveRole::Target {
                if s.reversed {
                    reverse = true;
                } else {
                    forward = true;
                }
            }
        }
        let side = match (forward, reverse) {
            (true, false) => CutSide::Left,
            (false, true) => CutSide::Right,
            _ => CutSide::Undetermined,
        };
        faces.push((f.ring, side));
    }

    // source parts untouched by the cutter
    for pi in 0..source.part_count() {
        if set.source_part_has_points(pi) {
            continue;
        }
        let ring = source.part(pi);
        if ring.signed_area() > T::zero() {
            faces.push((ring.clone(), CutSide::Undetermined));
        } else {
            holes.push(ring.clone());
        }
    }

    let mut groups: Vec<(RingGroup<T>, CutSide)> = faces
        .into_iter()
        .map(|(r, side)| (RingGroup::new(r), side))
        .collect();
    for h in holes {
        let mut best: Option<(usize, T)> = None;
        for (gi, (g, _)) in groups.iter().enumerate() {
            if definite_containment(g.exterior(), &h, tol) != PointContainment::Inside {
                continue;
            }
            let area = g.exterior().signed_area();
            if best.map(|(_, ba)| area < ba).unwrap_or(true) {
                best = Some((gi, area));
            }
        }
        let Some((gi, _)) = best else {
            panic!("hole ring not contained by any face; input geometry is not simple");
        };
        groups[gi].0.add_hole(h);
    }

    let mut result = CutResult::new();
    for (g, side) in groups {
        result.push(g, side);
    }
    result
}

/// Cut when the cutter never crosses the source boundary: either a no-op or a
/// cookie cut of a closed cutter lying strictly inside a face.
fn cut_without_crossings<S, T>(
    source: &S,
    cutter: &Ring<T>,
    set: &super::intersection_points::IntersectionSet<T>,
    tol: T,
) -> CutResult<T>
where
    S: SegmentSource<T>,
    T: Real,
{
    let rings: Vec<Ring<T>> = (0..source.part_count())
        .map(|i| source.part(i).clone())
        .collect();
    let groups = assemble_groups(rings, tol);

    let closed = cutter.is_closed(tol);
    let interior_side = match cutter.orientation_eps(tol, tol) {
        RingOrientation::CounterClockwise => CutSide::Left,
        RingOrientation::Clockwise => CutSide::Right,
        RingOrientation::Undefined => CutSide::Undetermined,
    };
    let exterior_side = match interior_side {
        CutSide::Left => CutSide::Right,
        CutSide::Right => CutSide::Left,
        CutSide::Undetermined => CutSide::Undetermined,
    };

    let mut result = CutResult::new();
    for g in groups {
        if !closed || interior_side == CutSide::Undetermined {
            result.push(g, CutSide::Undetermined);
            continue;
        }

        // cutting along an existing boundary does not split
        if !set.loops.is_empty() {
            if rings_congruent_xy(g.exterior(), cutter, tol) {
                result.push(g, interior_side);
                continue;
            }
            if g.holes().iter().any(|h| rings_congruent_xy(h, cutter, tol)) {
                result.push(g, exterior_side);
                continue;
            }
        }

        if definite_containment(&g, cutter, tol) == PointContainment::Inside {
            // cookie cut: the cutter ring becomes a hole of the outer face
            // and the exterior of an island face
            let island_ext = if cutter.signed_area() > T::zero() {
                cutter.clone()
            } else {
                cutter.reversed()
            };
            let mut outer_holes = vec![island_ext.reversed()];
            let mut island_holes = Vec::new();
            for h in g.holes() {
                if definite_containment(&island_ext, h, tol) == PointContainment::Inside {
                    island_holes.push(h.clone());
                } else {
                    outer_holes.push(h.clone());
                }
            }
            result.push(
                RingGroup::with_holes(g.exterior().clone(), outer_holes),
                exterior_side,
            );
            result.push(RingGroup::with_holes(island_ext, island_holes), interior_side);
            continue;
        }

        // whole face enclosed by the cutter
        if definite_containment(cutter, g.exterior(), tol) == PointContainment::Inside {
            result.push(g, interior_side);
            continue;
        }

        result.push(g, CutSide::Undetermined);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn square(x: f64, y: f64, size: f64) -> Ring<f64> {
        ring![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
    }

    fn opts() -> OverlayOptions<f64> {
        OverlayOptions::default()
    }

    #[test]
    fn line_cut_splits_square() {
        let a = square(0.0, 0.0, 1.0);
        // vertical cut heading up: smaller x is the left side
        let cutter = open_ring![(0.5, -0.5), (0.5, 1.5)];
        let r = cut_xy(&a, &cutter, &opts());

        assert_eq!(r.left.len(), 1);
        assert_eq!(r.right.len(), 1);
        assert!(r.undetermined.is_empty());
        assert_fuzzy_eq!(r.left[0].area(), 0.5);
        assert_fuzzy_eq!(r.right[0].area(), 0.5);
        assert_fuzzy_eq!(r.area(), 1.0);

        let left_ext = r.left[0].exterior().extents().unwrap();
        assert_fuzzy_eq!(left_ext.max_x, 0.5);
        let right_ext = r.right[0].exterior().extents().unwrap();
        assert_fuzzy_eq!(right_ext.min_x, 0.5);
    }

    #[test]
    fn line_cut_through_donut() {
        let donut = RingGroup::with_holes(
            square(0.0, 0.0, 4.0),
            vec![square(1.0, 1.0, 2.0).reversed()],
        );
        let cutter = open_ring![(2.0, -1.0), (2.0, 5.0)];
        let r = cut_xy(&donut, &cutter, &opts());

        assert_eq!(r.left.len(), 1);
        assert_eq!(r.right.len(), 1);
        // the hole is consumed into the face boundaries
        assert!(r.left[0].holes().is_empty());
        assert!(r.right[0].holes().is_empty());
        assert_fuzzy_eq!(r.left[0].area(), 6.0);
        assert_fuzzy_eq!(r.right[0].area(), 6.0);
    }

    #[test]
    fn cookie_cut() {
        let a = square(0.0, 0.0, 4.0);
        let cutter = square(1.0, 1.0, 1.0);
        let r = cut_xy(&a, &cutter, &opts());

        // counter clockwise cutter: island on the left, rest on the right
        assert_eq!(r.left.len(), 1);
        assert_eq!(r.right.len(), 1);
        assert_fuzzy_eq!(r.left[0].area(), 1.0);
        assert!(r.left[0].holes().is_empty());
        assert_eq!(r.right[0].holes().len(), 1);
        assert_fuzzy_eq!(r.right[0].area(), 15.0);
    }

    #[test]
    fn cookie_cut_clockwise_swaps_sides() {
        let a = square(0.0, 0.0, 4.0);
        let cutter = square(1.0, 1.0, 1.0).reversed();
        let r = cut_xy(&a, &cutter, &opts());

        assert_eq!(r.right.len(), 1);
        assert_fuzzy_eq!(r.right[0].area(), 1.0);
        assert_eq!(r.left.len(), 1);
        assert_fuzzy_eq!(r.left[0].area(), 15.0);
    }

    #[test]
    fn cookie_cut_partitions_holes() {
        // one hole inside the cutter, one outside
        let a = RingGroup::with_holes(
            square(0.0, 0.0, 8.0),
            vec![
                square(2.0, 2.0, 1.0).reversed(),
                square(6.0, 6.0, 1.0).reversed(),
            ],
        );
        let cutter = square(1.0, 1.0, 4.0);
        let r = cut_xy(&a, &cutter, &opts());

        assert_eq!(r.left.len(), 1);
        assert_eq!(r.left[0].holes().len(), 1);
        assert_fuzzy_eq!(r.left[0].area(), 15.0);
        assert_eq!(r.right.len(), 1);
        // the cutter hole plus the hole outside the cutter
        assert_eq!(r.right[0].holes().len(), 2);
        assert_fuzzy_eq!(r.right[0].area(), 64.0 - 16.0 - 1.0);
    }

    #[test]
    fn one_point_touch_splices() {
        // closed cutter inside the square, touching its bottom edge at (2,0)
        let a = square(0.0, 0.0, 4.0);
        let cutter = ring![(2.0, 0.0), (3.0, 1.0), (2.0, 2.0), (1.0, 1.0)];
        let r = cut_xy(&a, &cutter, &opts());

        assert_eq!(r.left.len(), 1);
        assert_fuzzy_eq!(r.left[0].area(), 2.0);
        assert_eq!(r.right.len(), 1);
        assert_fuzzy_eq!(r.right[0].area(), 14.0);
        assert_fuzzy_eq!(r.area(), 16.0);
    }

    #[test]
    fn dead_end_cut_does_not_split() {
        // open cutter entering the area but stopping inside
        let a = square(0.0, 0.0, 2.0);
        let cutter = open_ring![(1.0, -1.0), (1.0, 1.0)];
        let r = cut_xy(&a, &cutter, &opts());

        assert!(r.left.is_empty());
        assert!(r.right.is_empty());
        assert_eq!(r.undetermined.len(), 1);
        assert_fuzzy_eq!(r.undetermined[0].area(), 4.0);
    }

    #[test]
    fn cutter_outside_is_a_no_op() {
        let a = square(0.0, 0.0, 1.0);
        let r = cut_xy(&a, &square(5.0, 5.0, 1.0), &opts());
        assert_eq!(r.undetermined.len(), 1);
        assert_fuzzy_eq!(r.undetermined[0].area(), 1.0);

        let r = cut_xy(&a, &open_ring![(5.0, 5.0), (6.0, 6.0)], &opts());
        assert_eq!(r.undetermined.len(), 1);
    }

    #[test]
    fn cutter_in_hole_is_a_no_op() {
        let donut = RingGroup::with_holes(
            square(0.0, 0.0, 6.0),
            vec![square(1.0, 1.0, 4.0).reversed()],
        );
        let cutter = square(2.0, 2.0, 1.0);
        let r = cut_xy(&donut, &cutter, &opts());

        assert!(r.left.is_empty() && r.right.is_empty());
        assert_eq!(r.undetermined.len(), 1);
    }

    #[test]
    fn congruent_cutter_assigns_interior_side() {
        let a = square(0.0, 0.0, 1.0);
        let r = cut_xy(&a, &square(0.0, 0.0, 1.0), &opts());

        assert_eq!(r.left.len(), 1);
        assert!(r.right.is_empty() && r.undetermined.is_empty());
        assert_fuzzy_eq!(r.left[0].area(), 1.0);
    }

    #[test]
    fn enclosing_cutter_assigns_interior_side() {
        let a = square(1.0, 1.0, 1.0);
        let r = cut_xy(&a, &square(0.0, 0.0, 3.0), &opts());

        assert_eq!(r.left.len(), 1);
        assert_fuzzy_eq!(r.left[0].area(), 1.0);
    }

    #[test]
    fn open_cutter_crossing_twice() {
        // horizontal cut heading right: the upper half is on the left
        let a = square(0.0, 0.0, 2.0);
        let cutter = open_ring![(-1.0, 1.0), (3.0, 1.0)];
        let r = cut_xy(&a, &cutter, &opts());

        assert_eq!(r.left.len(), 1);
        assert_eq!(r.right.len(), 1);
        let up = r.left[0].exterior().extents().unwrap();
        assert_fuzzy_eq!(up.min_y, 1.0);
        let down = r.right[0].exterior().extents().unwrap();
        assert_fuzzy_eq!(down.max_y, 1.0);
    }
}
