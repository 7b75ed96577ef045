//! Navigation over the intersection point set: splitting curves into
//! subcurves between intersection points, classifying which side of the other
//! geometry each subcurve lies on, and stitching kept subcurves into result
//! rings.
//!
//! The stitcher is a boundary walk: starting from any kept subcurve it keeps
//! choosing the next subcurve out of the junction cluster the current one
//! ends in, picking by turn angle, and closes a ring exactly when the chosen
//! continuation is the subcurve the walk started from. Closing on the start
//! subcurve (rather than on first returning to the start location) is what
//! lets a walk pass through the start location mid-ring, e.g. when splicing a
//! hole into its containing ring at a single touch point.

use super::intersection_points::IntersectionSet;
use super::predicates::{PointContainment, source_contains_point_xy};
use crate::core::math::{Vector2, delta_angle, dist_to_line_seg};
use crate::core::traits::Real;
use crate::geom::{Point, Ring, SegmentSource, dedupe_points_xy};

/// Which of the two operand curves a subcurve or point position refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveRole {
    Source,
    Target,
}

/// Which side of the other geometry a subcurve lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubcurveSide {
    Inside,
    Outside,
    /// The subcurve runs along the other geometry's boundary (a linear
    /// overlap stretch).
    OnBoundary {
        /// `true` when the subcurve travels opposite to the other boundary's
        /// direction along the shared stretch.
        opposing: bool,
    },
}

/// How the target curve passes the source area boundary at an intersection
/// point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointClass {
    /// The target enters the source area here.
    Inbound,
    /// The target leaves the source area here.
    Outbound,
    /// The target touches the boundary without changing sides.
    Touching,
}

/// Turn taken at a junction when more than one continuation is available.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnPreference {
    /// Most counter clockwise continuation (keeps the enclosed region
    /// minimal).
    Left,
    /// Most clockwise continuation (merges regions).
    Right,
}

/// A maximal piece of one operand curve between two consecutive intersection
/// points (or a full loop when the part carries a single point).
#[derive(Debug, Clone)]
pub struct Subcurve<T = f64> {
    pub role: CurveRole,
    pub part: usize,
    /// Intersection point id the piece starts at.
    pub from: usize,
    /// Intersection point id the piece ends at (`from == to` for a full
    /// loop).
    pub to: usize,
    /// Coincidence cluster of the start point.
    pub start_cluster: usize,
    /// Coincidence cluster of the end point.
    pub end_cluster: usize,
    /// Vertex path in travel order, at least two points.
    pub points: Vec<Point<T>>,
    pub side: SubcurveSide,
    /// `true` when the piece travels opposite to its part's vertex order.
    pub reversed: bool,
    /// Index of the opposite-direction duplicate of this piece, if one was
    /// created.
    pub twin: Option<usize>,
}

impl<T> Subcurve<T>
where
    T: Real,
{
    #[inline]
    pub fn start_pos(&self) -> Vector2<T> {
        self.points[0].pos()
    }

    #[inline]
    pub fn end_pos(&self) -> Vector2<T> {
        self.points[self.points.len() - 1].pos()
    }

    /// Direction leaving the start point.
    #[inline]
    pub fn start_direction(&self) -> Vector2<T> {
        self.points[1].pos() - self.points[0].pos()
    }

    /// Direction arriving at the end point.
    #[inline]
    pub fn end_direction(&self) -> Vector2<T> {
        let n = self.points.len();
        self.points[n - 1].pos() - self.points[n - 2].pos()
    }

    /// Copy of this piece traveling the opposite direction. The twin link is
    /// cleared; the caller wires twins up after insertion.
    pub fn reversed_copy(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        let side = match self.side {
            SubcurveSide::OnBoundary { opposing } => SubcurveSide::OnBoundary {
                opposing: !opposing,
            },
            other => other,
        };
        Subcurve {
            role: self.role,
            part: self.part,
            from: self.to,
            to: self.from,
            start_cluster: self.end_cluster,
            end_cluster: self.start_cluster,
            points,
            side,
            reversed: !self.reversed,
            twin: None,
        }
    }
}

/// XY position at the arc length fraction given along a vertex path.
fn path_point_at_fraction<T>(points: &[Point<T>], fraction: T) -> Vector2<T>
where
    T: Real,
{
    let mut total = T::zero();
    for w in points.windows(2) {
        total = total + (w[1].pos() - w[0].pos()).length();
    }
    if total.fuzzy_eq_zero() {
        return points[0].pos();
    }

    let mut remaining = total * fraction;
    for w in points.windows(2) {
        let d = w[1].pos() - w[0].pos();
        let len = d.length();
        if remaining <= len {
            return w[0].pos() + d.scale(remaining / len);
        }
        remaining = remaining - len;
    }
    points[points.len() - 1].pos()
}

/// Travel direction at the arc length fraction given along a vertex path.
fn path_direction_at_fraction<T>(points: &[Point<T>], fraction: T) -> Vector2<T>
where
    T: Real,
{
    let mut total = T::zero();
    for w in points.windows(2) {
        total = total + (w[1].pos() - w[0].pos()).length();
    }
    let mut remaining = total * fraction;
    for w in points.windows(2) {
        let d = w[1].pos() - w[0].pos();
        let len = d.length();
        if remaining <= len {
            return d;
        }
        remaining = remaining - len;
    }
    points[points.len() - 1].pos() - points[points.len() - 2].pos()
}

/// Direction of the boundary segment of `geom` closest to `pos` within `tol`.
fn boundary_direction_at<S, T>(geom: &S, pos: Vector2<T>, tol: T) -> Option<Vector2<T>>
where
    S: SegmentSource<T>,
    T: Real,
{
    let mut best: Option<(T, Vector2<T>)> = None;
    let mut stack = Vec::new();
    for pi in 0..geom.part_count() {
        let ring = geom.part(pi);
        ring.visit_segments_near(pos, tol, &mut stack, &mut |i| {
            let (a, b) = ring.seg(i);
            let d = dist_to_line_seg(a, b, pos);
            if d <= tol && best.map(|(bd, _)| d < bd).unwrap_or(true) {
                best = Some((d, b - a));
            }
        });
    }
    best.map(|(_, dir)| dir)
}

/// Classify which side of `other` a subcurve path lies on.
///
/// Sampled at the arc length midpoint; between consecutive intersection
/// points the path cannot change sides, so one definite sample decides. The
/// quarter points back the midpoint up when it happens to land on the
/// boundary (e.g. grazing a vertex of `other`); only a path on the boundary
/// at all three samples counts as a stretch.
fn classify_path_side<S, T>(points: &[Point<T>], other: &S, tol: T) -> SubcurveSide
where
    S: SegmentSource<T>,
    T: Real,
{
    let half = T::half();
    let quarter = half * half;
    for fraction in [half, quarter, T::one() - quarter] {
        let sample = path_point_at_fraction(points, fraction);
        match source_contains_point_xy(other, sample, tol) {
            PointContainment::Inside => return SubcurveSide::Inside,
            PointContainment::Outside => return SubcurveSide::Outside,
            PointContainment::OnBoundary => {}
        }
    }

    let mid = path_point_at_fraction(points, half);
    let travel = path_direction_at_fraction(points, half);
    let opposing = match boundary_direction_at(other, mid, tol) {
        Some(dir) => travel.dot(dir) < T::zero(),
        None => false,
    };
    SubcurveSide::OnBoundary { opposing }
}

/// Split the `role` operand of the intersection set into subcurves between
/// consecutive intersection points, classified against `other`.
///
/// Parts covered by a congruent loop stretch and parts without any points
/// produce no subcurves (callers handle them whole). On an open part only the
/// pieces *between* points are produced; the tails before the first and after
/// the last point have a free end and cannot participate in any ring.
pub fn build_subcurves<C, O, T>(
    set: &IntersectionSet<T>,
    role: CurveRole,
    curve: &C,
    other: &O,
    tol: T,
) -> Vec<Subcurve<T>>
where
    C: SegmentSource<T>,
    O: SegmentSource<T>,
    T: Real,
{
    let order = match role {
        CurveRole::Source => &set.along_source,
        CurveRole::Target => &set.along_target,
    };
    let pos_of = |id: usize| match role {
        CurveRole::Source => set.points[id].source,
        CurveRole::Target => set.points[id].target,
    };
    let part_in_loop = |part: usize| match role {
        CurveRole::Source => set.source_part_in_loop(part),
        CurveRole::Target => set.target_part_in_loop(part),
    };

    let mut result = Vec::new();
    for part in 0..curve.part_count() {
        if part_in_loop(part) {
            continue;
        }
        let ids: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&id| pos_of(id).part == part)
            .collect();
        if ids.is_empty() {
            continue;
        }

        let ring = curve.part(part);
        let closed = ring.is_closed(tol);

        let mut push = |from: usize, to: usize, mut points: Vec<Point<T>>| {
            if points.len() < 2 {
                return;
            }
            // endpoint z values follow the z policy captured on the points
            points[0].z = set.points[from].pos.z;
            let last = points.len() - 1;
            points[last].z = set.points[to].pos.z;
            let side = classify_path_side(&points, other, tol);
            result.push(Subcurve {
                role,
                part,
                from,
                to,
                start_cluster: set.cluster_of[from],
                end_cluster: set.cluster_of[to],
                points,
                side,
                reversed: false,
                twin: None,
            });
        };

        if closed {
            if ids.len() == 1 {
                let id = ids[0];
                let points = ring.full_loop_points(pos_of(id).vv, tol);
                push(id, id, points);
            } else {
                for k in 0..ids.len() {
                    let from = ids[k];
                    let to = ids[(k + 1) % ids.len()];
                    let a = pos_of(from).vv;
                    let b = pos_of(to).vv;
                    let wrapping = k + 1 == ids.len();
                    // two coincident points pinching the whole part leave the
                    // wrap piece spanning the full loop
                    let points = if wrapping && (ring.wrap_vv(b) - ring.wrap_vv(a)).abs() <= tol {
                        ring.full_loop_points(a, tol)
                    } else {
                        ring.subcurve_points(a, b, tol)
                    };
                    push(from, to, points);
                }
            }
        } else {
            for w in ids.windows(2) {
                let a = pos_of(w[0]).vv;
                let b = pos_of(w[1]).vv;
                let points = ring.subcurve_points(a, b, tol);
                push(w[0], w[1], points);
            }
        }
    }
    result
}

/// Classify how the target curve passes the source area boundary at
/// intersection point `id`: sampled between the point and its neighbors along
/// the target curve.
pub fn classify_point<S, G, T>(
    set: &IntersectionSet<T>,
    id: usize,
    source: &S,
    target: &G,
    tol: T,
) -> PointClass
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    let p = &set.points[id];
    let part = p.target.part;
    let ring = target.part(part);
    let closed = ring.is_closed(tol);
    let n = T::from(ring.segment_count()).unwrap();
    let vv = p.target.vv;

    let ids: Vec<usize> = set
        .along_target
        .iter()
        .copied()
        .filter(|&q| set.points[q].target.part == part)
        .collect();
    let k = ids.iter().position(|&q| q == id).unwrap();

    let before_vv = if k > 0 {
        Some((set.points[ids[k - 1]].target.vv + vv) / T::two())
    } else if closed {
        let last_vv = set.points[ids[ids.len() - 1]].target.vv;
        Some(ring.wrap_vv((last_vv + vv + n) / T::two()))
    } else if vv > T::zero() {
        Some(vv / T::two())
    } else {
        None
    };
    let after_vv = if k + 1 < ids.len() {
        Some((vv + set.points[ids[k + 1]].target.vv) / T::two())
    } else if closed {
        let first_vv = set.points[ids[0]].target.vv;
        Some(ring.wrap_vv((vv + first_vv + n) / T::two()))
    } else if vv < n {
        Some((vv + n) / T::two())
    } else {
        None
    };

    let side_at = |vv: Option<T>| {
        vv.map(|v| source_contains_point_xy(source, ring.pos_at(v), tol))
            .unwrap_or(PointContainment::Outside)
    };
    match (side_at(before_vv), side_at(after_vv)) {
        (PointContainment::Outside, PointContainment::Inside) => PointClass::Inbound,
        (PointContainment::Inside, PointContainment::Outside) => PointClass::Outbound,
        _ => PointClass::Touching,
    }
}

/// A closed ring produced by stitching subcurves.
#[derive(Debug)]
pub(crate) struct StitchedRing<T = f64>
where
    T: Real,
{
    pub ring: Ring<T>,
    /// Indices of the subcurves walked, in order.
    pub used: Vec<usize>,
    /// Every walked subcurve lay on the other geometry's boundary.
    pub all_on_boundary: bool,
}

/// Stitch the kept subcurves into closed rings.
///
/// Each walk starts at an unvisited subcurve and repeatedly picks the
/// continuation out of the end junction by turn preference, closing when the
/// pick is the walk's starting subcurve. The opposite-direction twin of the
/// current piece is never picked unless it is the only way on (an immediate
/// U-turn is only valid at a dead end of a sliver).
///
/// # Panics
///
/// Panics when a junction offers no continuation or a walk fails to close
/// within the subcurve count; both mean the input geometry self-intersects
/// (is not simple).
pub(crate) fn stitch_subcurves<T>(
    subs: &[Subcurve<T>],
    turn: TurnPreference,
    tol: T,
) -> Vec<StitchedRing<T>>
where
    T: Real,
{
    let mut visited = vec![false; subs.len()];
    let mut rings = Vec::new();

    for start in 0..subs.len() {
        if visited[start] {
            continue;
        }

        let mut used: Vec<usize> = Vec::new();
        let mut path: Vec<Point<T>> = Vec::new();
        let mut current = start;
        loop {
            assert!(
                used.len() <= subs.len(),
                "walk failed to close; input geometry is not simple"
            );
            visited[current] = true;
            used.push(current);
            path.extend_from_slice(&subs[current].points);

            let junction = subs[current].end_cluster;
            let in_dir = subs[current].end_direction();
            let in_angle = T::atan2(in_dir.y, in_dir.x);

            let mut best: Option<(usize, T)> = None;
            for (i, s) in subs.iter().enumerate() {
                if s.start_cluster != junction {
                    continue;
                }
                if visited[i] && i != start {
                    continue;
                }
                if subs[current].twin == Some(i) {
                    continue;
                }
                let out = s.start_direction();
                let delta = delta_angle(in_angle, T::atan2(out.y, out.x));
                let better = match best {
                    None => true,
                    Some((_, best_delta)) => match turn {
                        TurnPreference::Left => delta > best_delta,
                        TurnPreference::Right => delta < best_delta,
                    },
                };
                if better {
                    best = Some((i, delta));
                }
            }
            // the U-turn twin is allowed only as a last resort
            if best.is_none() {
                if let Some(tw) = subs[current].twin {
                    if subs[tw].start_cluster == junction && (!visited[tw] || tw == start) {
                        best = Some((tw, T::zero()));
                    }
                }
            }

            let Some((next, _)) = best else {
                panic!("no continuation at an intersection junction; input geometry is not simple");
            };
            if next == start {
                break;
            }
            current = next;
        }

        let all_on_boundary = used
            .iter()
            .all(|&i| matches!(subs[i].side, SubcurveSide::OnBoundary { .. }));

        dedupe_points_xy(&mut path, tol);
        if path.len() >= 2 && path[path.len() - 1].fuzzy_eq_xy_eps(path[0], tol) {
            path.pop();
        }
        let mut ring = Ring::from_points(path);
        ring.close();
        rings.push(StitchedRing {
            ring,
            used,
            all_on_boundary,
        });
    }
    rings
}
