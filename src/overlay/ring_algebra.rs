//! Boolean operations over closed areas: intersection, union and difference.
//!
//! The operands are multi-part areas (exterior rings counter clockwise, hole
//! rings clockwise). The operation collects the intersection point set,
//! splits both boundaries into subcurves, keeps the subcurves prescribed by
//! the operation, stitches the kept pieces into result rings and assembles
//! exteriors and holes into polygons.
//!
//! Shared boundary stretches resolve by travel direction: a stretch both
//! operands traverse the same way has the interiors on the same side (kept
//! once, as the source's copy, for intersection and union; dropped for
//! difference), while an opposed stretch has the interiors on opposite sides
//! (kept only for difference). Whole congruent parts follow the same rule.

use super::intersection_points::collect_intersections;
use super::navigator::{
    CurveRole, Subcurve, SubcurveSide, TurnPreference, build_subcurves, stitch_subcurves,
};
use super::predicates::{PointContainment, bounds_disjoint, definite_containment};
use super::OverlayOptions;
use crate::core::traits::Real;
use crate::geom::{Ring, RingGroup, SegmentSource};

/// The boolean operation to perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BooleanOp {
    Intersect,
    Union,
    Difference,
}

/// Result of a boolean operation.
#[derive(Debug, Clone)]
pub struct OverlayResult<T = f64>
where
    T: Real,
{
    /// Result polygons, each an exterior with its holes.
    pub polygons: Vec<RingGroup<T>>,
    /// `true` when the operands were congruent within tolerance.
    pub congruent: bool,
}

impl<T> OverlayResult<T>
where
    T: Real,
{
    fn empty() -> Self {
        OverlayResult {
            polygons: Vec::new(),
            congruent: false,
        }
    }

    /// Total signed area over all result polygons.
    pub fn area(&self) -> T {
        let mut sum = T::zero();
        for g in &self.polygons {
            sum = sum + g.area();
        }
        sum
    }
}

/// Intersection of the two areas.
pub fn intersect_xy<S, G, T>(source: &S, target: &G, opts: &OverlayOptions<T>) -> OverlayResult<T>
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    boolean_xy(BooleanOp::Intersect, source, target, opts)
}

/// Union of the two areas.
pub fn union_xy<S, G, T>(source: &S, target: &G, opts: &OverlayOptions<T>) -> OverlayResult<T>
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    boolean_xy(BooleanOp::Union, source, target, opts)
}

/// Source area minus target area.
pub fn difference_xy<S, G, T>(source: &S, target: &G, opts: &OverlayOptions<T>) -> OverlayResult<T>
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    boolean_xy(BooleanOp::Difference, source, target, opts)
}

fn keep_source_side(op: BooleanOp, side: SubcurveSide) -> bool {
    match side {
        SubcurveSide::Inside => op == BooleanOp::Intersect,
        SubcurveSide::Outside => op != BooleanOp::Intersect,
        SubcurveSide::OnBoundary { opposing } => match op {
            BooleanOp::Intersect | BooleanOp::Union => !opposing,
            BooleanOp::Difference => opposing,
        },
    }
}

/// Target subcurve keep decision: `Some(reversed)` when kept.
fn keep_target_side(op: BooleanOp, side: SubcurveSide) -> Option<bool> {
    match side {
        SubcurveSide::Inside => match op {
            BooleanOp::Intersect => Some(false),
            // becomes part of a hole boundary
            BooleanOp::Difference => Some(true),
            BooleanOp::Union => None,
        },
        SubcurveSide::Outside => (op == BooleanOp::Union).then_some(false),
        SubcurveSide::OnBoundary { .. } => None,
    }
}

/// Clone every part of the geometry and assemble into polygons.
fn assemble_all<S, T>(geom: &S, tol: T) -> Vec<RingGroup<T>>
where
    S: SegmentSource<T>,
    T: Real,
{
    let rings: Vec<Ring<T>> = (0..geom.part_count()).map(|i| geom.part(i).clone()).collect();
    assemble_groups(rings, tol)
}

/// Compute the boolean operation of the two areas.
///
/// # Panics
///
/// Panics if `opts.tolerance` is negative, if any operand part is not closed,
/// or if a self-intersecting operand prevents the result from closing (the
/// inputs must be simple).
pub fn boolean_xy<S, G, T>(
    op: BooleanOp,
    source: &S,
    target: &G,
    opts: &OverlayOptions<T>,
) -> OverlayResult<T>
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    let tol = opts.tolerance;
    assert!(tol >= T::zero(), "tolerance must be non-negative");
    assert!(
        source.all_parts_closed(tol) && target.all_parts_closed(tol),
        "boolean operations require closed rings"
    );

    // empty operands
    if source.part_count() == 0 || target.part_count() == 0 {
        return match op {
            BooleanOp::Intersect => OverlayResult::empty(),
            BooleanOp::Union => {
                let mut groups = assemble_all(source, tol);
                groups.extend(assemble_all(target, tol));
                OverlayResult {
                    polygons: groups,
                    congruent: false,
                }
            }
            BooleanOp::Difference => OverlayResult {
                polygons: assemble_all(source, tol),
                congruent: false,
            },
        };
    }

    // bounds reject
    if let (Some(se), Some(te)) = (source.extents(), target.extents()) {
        if bounds_disjoint(se, te, tol) {
            return match op {
                BooleanOp::Intersect => OverlayResult::empty(),
                BooleanOp::Union => {
                    let mut groups = assemble_all(source, tol);
                    groups.extend(assemble_all(target, tol));
                    OverlayResult {
                        polygons: groups,
                        congruent: false,
                    }
                }
                BooleanOp::Difference => OverlayResult {
                    polygons: assemble_all(source, tol),
                    congruent: false,
                },
            };
        }
    }

    let set = collect_intersections(source, target, opts);

    // fully congruent operands
    let congruent = set.points.is_empty()
        && !set.loops.is_empty()
        && (0..source.part_count()).all(|p| set.source_part_in_loop(p))
        && (0..target.part_count()).all(|p| set.target_part_in_loop(p));
    if congruent {
        let polygons = match op {
            BooleanOp::Intersect | BooleanOp::Union => assemble_all(source, tol),
            BooleanOp::Difference => Vec::new(),
        };
        return OverlayResult {
            polygons,
            congruent: true,
        };
    }

    let mut kept: Vec<Subcurve<T>> = Vec::new();
    for s in build_subcurves(&set, CurveRole::Source, source, target, tol) {
        if keep_source_side(op, s.side) {
            kept.push(s);
        }
    }
    for s in build_subcurves(&set, CurveRole::Target, target, source, tol) {
        if let Some(reversed) = keep_target_side(op, s.side) {
            kept.push(if reversed { s.reversed_copy() } else { s });
        }
    }

    let turn = match op {
        BooleanOp::Intersect | BooleanOp::Difference => TurnPreference::Left,
        BooleanOp::Union => TurnPreference::Right,
    };
    let mut rings: Vec<Ring<T>> = stitch_subcurves(&kept, turn, tol)
        .into_iter()
        .filter(|r| !r.all_on_boundary)
        .map(|r| r.ring)
        .collect();

    // congruent part pairs resolve like stretches: same winding keeps the
    // source copy for intersect/union, opposite winding only survives a
    // difference
    for l in &set.loops {
        let keep = match op {
            BooleanOp::Intersect | BooleanOp::Union => !l.opposing,
            BooleanOp::Difference => l.opposing,
        };
        if keep {
            rings.push(source.part(l.source_part).clone());
        }
    }

    // whole parts without any intersection, kept by which side of the other
    // geometry they lie on
    for pi in 0..source.part_count() {
        if set.source_part_in_loop(pi) || set.source_part_has_points(pi) {
            continue;
        }
        let ring = source.part(pi);
        let side = definite_containment(target, ring, tol);
        let keep = match op {
            BooleanOp::Intersect => side == PointContainment::Inside,
            BooleanOp::Union | BooleanOp::Difference => side == PointContainment::Outside,
        };
        if keep {
            rings.push(ring.clone());
        }
    }
    for pi in 0..target.part_count() {
        if set.target_part_in_loop(pi) || set.target_part_has_points(pi) {
            continue;
        }
        let ring = target.part(pi);
        let side = definite_containment(source, ring, tol);
        match op {
            BooleanOp::Intersect if side == PointContainment::Inside => {
                rings.push(ring.clone());
            }
            BooleanOp::Union if side == PointContainment::Outside => {
                rings.push(ring.clone());
            }
            BooleanOp::Difference if side == PointContainment::Inside => {
                rings.push(ring.reversed());
            }
            _ => {}
        }
    }

    OverlayResult {
        polygons: assemble_groups(rings, tol),
        congruent: false,
    }
}

/// Assemble a flat pool of result rings into polygons: counter clockwise
/// rings become exteriors, clockwise rings attach as holes to the smallest
/// exterior containing them. Rings with near zero area are discarded.
///
/// # Panics
///
/// Panics when a hole ring is not contained by any exterior; that only
/// happens when the input geometry was not simple.
pub(crate) fn assemble_groups<T>(rings: Vec<Ring<T>>, tol: T) -> Vec<RingGroup<T>>
where
    T: Real,
{
    let mut exteriors: Vec<Ring<T>> = Vec::new();
    let mut holes: Vec<Ring<T>> = Vec::new();
    for r in rings {
        let area = r.signed_area();
        if area.fuzzy_eq_zero_eps(tol) {
            continue;
        }
        if area > T::zero() {
            exteriors.push(r);
        } else {
            holes.push(r);
        }
    }

    let mut groups: Vec<RingGroup<T>> = exteriors.into_iter().map(RingGroup::new).collect();
    for h in holes {
        let mut best: Option<(usize, T)> = None;
        for (gi, g) in groups.iter().enumerate() {
            if definite_containment(g.exterior(), &h, tol) != PointContainment::Inside {
                continue;
            }
            let area = g.exterior().signed_area();
            if best.map(|(_, ba)| area < ba).unwrap_or(true) {
                best = Some((gi, area));
            }
        }
        let Some((gi, _)) = best else {
            panic!("hole ring not contained by any exterior; input geometry is not simple");
        };
        groups[gi].add_hole(h);
    }
    groups
}
