//! Fuzzy predicates: point containment, curve containment, touch and
//! congruence relations.
//!
//! Point-in-area testing is a horizontal-ray crossing parity count over all
//! parts (so holes fall out of the parity naturally), guarded by a boundary
//! proximity pass: any point within tolerance of a boundary segment is
//! [`PointContainment::OnBoundary`] and never reaches the parity count. This
//! is what makes the predicates stable under fuzzy arithmetic: the parity ray
//! only ever runs through points provably off the boundary.

use super::intersection_points::collect_intersections;
use super::navigator::{CurveRole, SubcurveSide, build_subcurves};
use super::OverlayOptions;
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::geom::{Ring, SegmentSource, seg::seg_fuzzy_contains_point};
use static_aabb2d_index::AABB;

/// Three valued logic result for predicates that can be undecidable under
/// fuzzy arithmetic (e.g. containment of a curve lying on the boundary).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trilean {
    True,
    False,
    Undetermined,
}

/// Where a point lies relative to an area.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointContainment {
    Inside,
    /// Within tolerance of a boundary segment.
    OnBoundary,
    Outside,
}

/// Result of [`touches_xy`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TouchesResult {
    /// Boundaries meet but interiors do not overlap.
    pub touches: bool,
    /// No boundary contact and no interior overlap at all.
    pub disjoint: bool,
}

/// Returns `true` if the two bounding boxes inflated by `tol` do not overlap.
#[inline]
pub fn bounds_disjoint<T>(a: AABB<T>, b: AABB<T>, tol: T) -> bool
where
    T: Real,
{
    a.min_x > b.max_x + tol
        || a.max_x < b.min_x - tol
        || a.min_y > b.max_y + tol
        || a.max_y < b.min_y - tol
}

/// Horizontal-ray parity toggle for one segment: does the open-bottom ray
/// from x = -inf to `p` cross the segment `a -> b`?
///
/// The half open `y` comparison makes vertices count exactly once and
/// excludes horizontal segments consistently.
#[inline]
fn parity_toggle<T>(a: Vector2<T>, b: Vector2<T>, p: Vector2<T>) -> bool
where
    T: Real,
{
    if (a.y > p.y) == (b.y > p.y) {
        return false;
    }
    let x_int = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
    x_int < p.x
}

/// Point containment against a single ring, ignoring orientation (a clockwise
/// ring contains the same points as its reverse).
pub fn ring_contains_point_xy<T>(ring: &Ring<T>, point: Vector2<T>, tol: T) -> PointContainment
where
    T: Real,
{
    let mut on_boundary = false;
    let mut stack = Vec::new();
    ring.visit_segments_near(point, tol, &mut stack, &mut |i| {
        let (v1, v2) = ring.seg_points(i);
        if seg_fuzzy_contains_point(v1, v2, point, tol) {
            on_boundary = true;
        }
    });
    if on_boundary {
        return PointContainment::OnBoundary;
    }

    let mut inside = false;
    for i in 0..ring.segment_count() {
        let (a, b) = ring.seg(i);
        if parity_toggle(a, b, point) {
            inside = !inside;
        }
    }
    if inside {
        PointContainment::Inside
    } else {
        PointContainment::Outside
    }
}

/// Point containment against a multi-part area by crossing parity over all
/// parts. With exteriors counter clockwise and holes clockwise the parity
/// naturally excludes hole interiors.
pub fn source_contains_point_xy<S, T>(geom: &S, point: Vector2<T>, tol: T) -> PointContainment
where
    S: SegmentSource<T>,
    T: Real,
{
    let mut stack = Vec::new();
    for pi in 0..geom.part_count() {
        let ring = geom.part(pi);
        let mut on_boundary = false;
        ring.visit_segments_near(point, tol, &mut stack, &mut |i| {
            let (v1, v2) = ring.seg_points(i);
            if seg_fuzzy_contains_point(v1, v2, point, tol) {
                on_boundary = true;
            }
        });
        if on_boundary {
            return PointContainment::OnBoundary;
        }
    }

    let mut inside = false;
    for pi in 0..geom.part_count() {
        let ring = geom.part(pi);
        for i in 0..ring.segment_count() {
            let (a, b) = ring.seg(i);
            if parity_toggle(a, b, point) {
                inside = !inside;
            }
        }
    }
    if inside {
        PointContainment::Inside
    } else {
        PointContainment::Outside
    }
}

/// Containment of a probe ring decided by the first of its vertices or
/// segment midpoints that is provably off the container's boundary.
///
/// Returns [`PointContainment::OnBoundary`] only when every probe sample lies
/// on the boundary (the rings are congruent within tolerance).
pub fn definite_containment<S, T>(container: &S, probe: &Ring<T>, tol: T) -> PointContainment
where
    S: SegmentSource<T>,
    T: Real,
{
    for i in 0..probe.segment_count().max(1).min(probe.vertex_count()) {
        let side = source_contains_point_xy(container, probe.at(i).pos(), tol);
        if side != PointContainment::OnBoundary {
            return side;
        }
    }
    for i in 0..probe.segment_count() {
        let (v1, v2) = probe.seg(i);
        let mid = crate::core::math::midpoint(v1, v2);
        let side = source_contains_point_xy(container, mid, tol);
        if side != PointContainment::OnBoundary {
            return side;
        }
    }
    PointContainment::OnBoundary
}

/// Returns `true` when the two curve sets are congruent within tolerance:
/// every part of each side is covered by a full-ring linear overlap of the
/// other, with no other intersections.
pub fn rings_congruent_xy<S, G, T>(a: &S, b: &G, tol: T) -> bool
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    let set = collect_intersections(a, b, &OverlayOptions::with_tolerance(tol));
    set.points.is_empty()
        && !set.loops.is_empty()
        && (0..a.part_count()).all(|p| set.source_part_in_loop(p))
        && (0..b.part_count()).all(|p| set.target_part_in_loop(p))
}

/// How two area boundaries relate to each other.
enum BoundaryRelation {
    Disjoint,
    Touch,
    Overlap,
}

fn relate<S, G, T>(a: &S, b: &G, tol: T) -> BoundaryRelation
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    let opts = OverlayOptions::with_tolerance(tol);
    let set = collect_intersections(a, b, &opts);

    if set.is_empty() {
        let nested = definite_containment(b, a.part(0), tol) == PointContainment::Inside
            || definite_containment(a, b.part(0), tol) == PointContainment::Inside;
        return if nested {
            BoundaryRelation::Overlap
        } else {
            BoundaryRelation::Disjoint
        };
    }

    // congruent loops wound the same way bound the same interior
    if set.loops.iter().any(|l| !l.opposing) {
        return BoundaryRelation::Overlap;
    }

    let interior_side = |subs: &[super::navigator::Subcurve<T>]| {
        subs.iter().any(|s| {
            matches!(s.side, SubcurveSide::Inside)
                || matches!(s.side, SubcurveSide::OnBoundary { opposing: false })
        })
    };

    let b_subs = build_subcurves(&set, CurveRole::Target, b, a, tol);
    if interior_side(&b_subs) {
        return BoundaryRelation::Overlap;
    }
    let a_subs = build_subcurves(&set, CurveRole::Source, a, b, tol);
    if interior_side(&a_subs) {
        return BoundaryRelation::Overlap;
    }

    BoundaryRelation::Touch
}

/// Do the two closed areas touch: boundaries meet (possibly along shared
/// edges) while the interiors stay disjoint?
///
/// Interiors overlap when any boundary crossing exists, when any piece of one
/// boundary runs strictly inside the other area, or when a shared edge is
/// traversed in the same direction by both (interiors on the same side).
/// Opposite-direction shared edges are pure touches.
pub fn touches_xy<S, G, T>(a: &S, b: &G, tol: T) -> TouchesResult
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    match relate(a, b, tol) {
        BoundaryRelation::Disjoint => TouchesResult {
            touches: false,
            disjoint: true,
        },
        BoundaryRelation::Touch => TouchesResult {
            touches: true,
            disjoint: false,
        },
        BoundaryRelation::Overlap => TouchesResult {
            touches: false,
            disjoint: false,
        },
    }
}

/// Do the interiors of the two closed areas share at least one point?
pub fn interior_intersects_xy<S, G, T>(a: &S, b: &G, tol: T) -> bool
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    matches!(relate(a, b, tol), BoundaryRelation::Overlap)
}

/// Is the target curve entirely within the closed source area (boundary
/// included)?
///
/// Classified from the intersection set: any target piece deviating outside
/// the source means not contained; pieces strictly inside mean contained;
/// a target lying entirely on the boundary is undecidable under fuzzy
/// arithmetic and reports [`Trilean::Undetermined`].
pub fn area_contains_curve_xy<S, G, T>(source: &S, target: &G, tol: T) -> Trilean
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    let opts = OverlayOptions::with_tolerance(tol);
    let set = collect_intersections(source, target, &opts);

    if set.is_empty() {
        let mut any_inside = false;
        for pi in 0..target.part_count() {
            match definite_containment(source, target.part(pi), tol) {
                PointContainment::Outside => return Trilean::False,
                PointContainment::Inside => any_inside = true,
                PointContainment::OnBoundary => {}
            }
        }
        return if any_inside {
            Trilean::True
        } else {
            Trilean::Undetermined
        };
    }

    let subs = build_subcurves(&set, CurveRole::Target, target, source, tol);
    let mut any_inside = false;
    for s in &subs {
        match s.side {
            SubcurveSide::Outside => return Trilean::False,
            SubcurveSide::Inside => any_inside = true,
            SubcurveSide::OnBoundary { .. } => {}
        }
    }

    // tail pieces of open parts are not covered by subcurves
    for pi in 0..target.part_count() {
        let ring = target.part(pi);
        if ring.is_closed(tol) || !set.target_part_has_points(pi) {
            continue;
        }
        let mut vvs: Vec<T> = set
            .points
            .iter()
            .filter(|p| p.target.part == pi)
            .map(|p| p.target.vv)
            .collect();
        vvs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = T::from(ring.segment_count()).unwrap();
        let mut samples = Vec::new();
        if vvs[0] > T::zero() {
            samples.push(vvs[0] / T::two());
        }
        if vvs[vvs.len() - 1] < n {
            samples.push((vvs[vvs.len() - 1] + n) / T::two());
        }
        for vv in samples {
            match source_contains_point_xy(source, ring.pos_at(vv), tol) {
                PointContainment::Outside => return Trilean::False,
                PointContainment::Inside => any_inside = true,
                PointContainment::OnBoundary => {}
            }
        }
    }

    if any_inside {
        return Trilean::True;
    }

    // everything on the boundary; try a proven non-boundary probe per part
    let mut any_inside = false;
    for pi in 0..target.part_count() {
        match definite_containment(source, target.part(pi), tol) {
            PointContainment::Outside => return Trilean::False,
            PointContainment::Inside => any_inside = true,
            PointContainment::OnBoundary => {}
        }
    }
    if any_inside {
        Trilean::True
    } else {
        Trilean::Undetermined
    }
}
