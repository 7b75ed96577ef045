//! Aggregation of per-segment-pair intersections into the intersection point
//! set walked by the navigator.
//!
//! Raw segment pair results are materialized as [`IntersectionPoint`]s
//! addressed by *virtual vertex* positions on both curves (segment index plus
//! fraction). Collinear overlap pieces are folded into maximal stretches
//! first: pieces that continue each other across segment boundaries merge,
//! including across the seam vertex of a closed ring (a stretch interrupted
//! only by the ring's start/end vertex is one stretch, not two). A stretch
//! covering an entire closed part is recorded as a [`LoopStretch`] (ring
//! congruence) instead of producing points.

use std::collections::BTreeMap;

use super::seg_intersect::{SegIntersectKind, seg_seg_intersect_xy};
use super::{OverlayOptions, ZSource};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::geom::{Plane, Point, Ring, SegmentSource, seg::seg_aabb};

/// A position along a multi-part curve: part index plus virtual vertex value
/// (segment index + fraction in `[0, segment_count]`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurvePos<T = f64> {
    pub part: usize,
    pub vv: T,
}

/// What an intersection point structurally is.
///
/// Whether a point behaves inbound/outbound/touching for a particular
/// operation is decided later by the navigator from the subcurves around it;
/// this tag records only the local segment level evidence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntersectionKind {
    /// Proper crossing strictly interior to both segments.
    Crossing,
    /// Single point incidence involving at least one segment endpoint.
    Touching,
    /// First point of a linear overlap stretch (in source direction).
    LinearStart,
    /// Source vertex interior to a linear overlap stretch (only materialized
    /// on request).
    LinearIntermediate,
    /// Last point of a linear overlap stretch (in source direction).
    LinearEnd,
}

/// Travel permissions at an intersection point. A direction is disallowed at
/// the free end of an open part (there is no curve to continue onto).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TravelFlags {
    pub source_forward: bool,
    pub source_backward: bool,
    pub target_forward: bool,
    pub target_backward: bool,
}

impl TravelFlags {
    #[inline]
    pub fn unrestricted() -> Self {
        TravelFlags {
            source_forward: true,
            source_backward: true,
            target_forward: true,
            target_backward: true,
        }
    }
}

/// A single intersection point between the source and target curves.
#[derive(Debug, Clone)]
pub struct IntersectionPoint<T = f64> {
    /// XY from the source geometry, z per the [`ZSource`] policy in effect.
    pub pos: Point<T>,
    pub source: CurvePos<T>,
    pub target: CurvePos<T>,
    pub kind: IntersectionKind,
    pub travel: TravelFlags,
}

/// A linear overlap stretch covering an entire closed part (the part pair is
/// congruent within tolerance).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoopStretch {
    pub source_part: usize,
    pub target_part: usize,
    /// `true` when the target winds opposite to the source.
    pub opposing: bool,
}

/// The complete intersection point set for a source/target curve pair, with
/// the points ordered (ranked) along both curves and grouped into coincident
/// clusters.
#[derive(Debug, Clone)]
pub struct IntersectionSet<T = f64> {
    pub points: Vec<IntersectionPoint<T>>,
    pub loops: Vec<LoopStretch>,
    /// Point ids sorted by (part, vv) along the source.
    pub along_source: Vec<usize>,
    /// Point ids sorted by (part, vv) along the target.
    pub along_target: Vec<usize>,
    /// Rank of each point id within `along_source`.
    pub source_rank: Vec<usize>,
    /// Rank of each point id within `along_target`.
    pub target_rank: Vec<usize>,
    /// Groups of point ids coincident in XY within the merge tolerance.
    pub clusters: Vec<Vec<usize>>,
    /// Cluster index of each point id.
    pub cluster_of: Vec<usize>,
}

impl<T> IntersectionSet<T>
where
    T: Real,
{
    fn new() -> Self {
        IntersectionSet {
            points: Vec::new(),
            loops: Vec::new(),
            along_source: Vec::new(),
            along_target: Vec::new(),
            source_rank: Vec::new(),
            target_rank: Vec::new(),
            clusters: Vec::new(),
            cluster_of: Vec::new(),
        }
    }

    /// No intersection points and no congruent loops at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.loops.is_empty()
    }

    /// Returns `true` if the source part given is covered by a congruent loop
    /// stretch.
    pub fn source_part_in_loop(&self, part: usize) -> bool {
        self.loops.iter().any(|l| l.source_part == part)
    }

    /// Returns `true` if the target part given is covered by a congruent loop
    /// stretch.
    pub fn target_part_in_loop(&self, part: usize) -> bool {
        self.loops.iter().any(|l| l.target_part == part)
    }

    /// Returns `true` if any point lies on the source part given.
    pub fn source_part_has_points(&self, part: usize) -> bool {
        self.points.iter().any(|p| p.source.part == part)
    }

    /// Returns `true` if any point lies on the target part given.
    pub fn target_part_has_points(&self, part: usize) -> bool {
        self.points.iter().any(|p| p.target.part == part)
    }

    /// Order the points along both curves and group coincident points into
    /// clusters.
    fn finish(&mut self, merge_eps: T) {
        let n = self.points.len();

        self.along_source = (0..n).collect();
        self.along_source.sort_by(|&a, &b| {
            let pa = self.points[a].source;
            let pb = self.points[b].source;
            pa.part
                .cmp(&pb.part)
                .then(pa.vv.partial_cmp(&pb.vv).unwrap())
        });
        self.along_target = (0..n).collect();
        self.along_target.sort_by(|&a, &b| {
            let pa = self.points[a].target;
            let pb = self.points[b].target;
            pa.part
                .cmp(&pb.part)
                .then(pa.vv.partial_cmp(&pb.vv).unwrap())
        });

        self.source_rank = vec![0; n];
        self.target_rank = vec![0; n];
        for (rank, &id) in self.along_source.iter().enumerate() {
            self.source_rank[id] = rank;
        }
        for (rank, &id) in self.along_target.iter().enumerate() {
            self.target_rank[id] = rank;
        }

        self.clusters.clear();
        self.cluster_of = vec![0; n];
        for id in 0..n {
            let pos = self.points[id].pos.pos();
            let found = self.clusters.iter().position(|c| {
                let rep = self.points[c[0]].pos.pos();
                rep.fuzzy_eq_eps(pos, merge_eps)
            });
            match found {
                Some(c) => {
                    self.clusters[c].push(id);
                    self.cluster_of[id] = c;
                }
                None => {
                    self.cluster_of[id] = self.clusters.len();
                    self.clusters.push(vec![id]);
                }
            }
        }
    }
}

/// A collinear overlap interval between one source segment and one target
/// segment, in virtual vertex values. `s0 <= s1` before merging; after the
/// wrap-around seam join `s0 > s1` encodes a stretch passing the closed
/// source part's start vertex.
#[derive(Debug, Copy, Clone)]
struct LinearPiece<T> {
    s0: T,
    s1: T,
    t0: T,
    t1: T,
    opposing: bool,
}

/// Do the two virtual vertex values address the same location on the ring?
fn continues<T>(ring: &Ring<T>, vv_a: T, vv_b: T, tol: T) -> bool
where
    T: Real,
{
    ring.pos_at(ring.wrap_vv(vv_a))
        .fuzzy_eq_eps(ring.pos_at(ring.wrap_vv(vv_b)), tol)
}

/// Locate `pos` on the ring: virtual vertex value of the closest segment
/// point within `tol`, if any.
fn locate_on_part<T>(ring: &Ring<T>, pos: Vector2<T>, tol: T) -> Option<T>
where
    T: Real,
{
    let mut best: Option<(T, T)> = None;
    let mut stack = Vec::new();
    ring.visit_segments_near(pos, tol, &mut stack, &mut |i| {
        let (v1, v2) = ring.seg(i);
        let Some((t, _)) = crate::core::math::seg_line_parameters(v1, v2, pos, tol) else {
            return;
        };
        let t = num_traits::Float::min(num_traits::Float::max(t, T::zero()), T::one());
        let dist = crate::core::math::dist_squared(
            crate::core::math::point_from_parametric(v1, v2, t),
            pos,
        )
        .sqrt();
        if dist <= tol && best.map(|(bd, _)| dist < bd).unwrap_or(true) {
            best = Some((dist, T::from(i).unwrap() + t));
        }
    });
    best.map(|(_, vv)| vv)
}

struct PointBuilder<T> {
    z_source: ZSource,
    tol: T,
    /// Best fit planes per source part, computed only for
    /// [`ZSource::FromSourcePlane`].
    source_planes: Vec<Option<Plane<T>>>,
    points: Vec<IntersectionPoint<T>>,
}

impl<T> PointBuilder<T>
where
    T: Real,
{
    fn point_z(&self, sring: &Ring<T>, spi: usize, svv: T, tring: &Ring<T>, tvv: T) -> T {
        match self.z_source {
            ZSource::FromTarget => tring.point_at(tvv).z,
            ZSource::FromSourcePlane => {
                let pos = sring.pos_at(svv);
                self.source_planes[spi]
                    .map(|p| p.z_at(pos.x, pos.y))
                    .unwrap_or(T::nan())
            }
            ZSource::Interpolate => {
                let sz = sring.point_at(svv).z;
                let tz = tring.point_at(tvv).z;
                match (sz.is_nan(), tz.is_nan()) {
                    (false, false) => (sz + tz) / T::two(),
                    (false, true) => sz,
                    (true, false) => tz,
                    (true, true) => T::nan(),
                }
            }
        }
    }

    /// Materialize an intersection point, suppressing duplicates: a point is
    /// dropped when an existing point on the same part pair is coincident on
    /// both curves. Stretch endpoints are pushed before single points so
    /// single-point duplicates at stretch boundaries lose.
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        sring: &Ring<T>,
        spi: usize,
        svv: T,
        tring: &Ring<T>,
        tpi: usize,
        tvv: T,
        kind: IntersectionKind,
    ) {
        let spos = sring.pos_at(svv);
        let tpos = tring.pos_at(tvv);

        let dup = self.points.iter().any(|q| {
            q.source.part == spi
                && q.target.part == tpi
                && sring.pos_at(q.source.vv).fuzzy_eq_eps(spos, self.tol)
                && tring.pos_at(q.target.vv).fuzzy_eq_eps(tpos, self.tol)
        });
        if dup {
            return;
        }

        let z = self.point_z(sring, spi, svv, tring, tvv);
        let s_count = T::from(sring.segment_count()).unwrap();
        let t_count = T::from(tring.segment_count()).unwrap();
        let s_closed = sring.is_closed(self.tol);
        let t_closed = tring.is_closed(self.tol);
        let travel = TravelFlags {
            source_forward: s_closed || svv < s_count,
            source_backward: s_closed || svv > T::zero(),
            target_forward: t_closed || tvv < t_count,
            target_backward: t_closed || tvv > T::zero(),
        };

        self.points.push(IntersectionPoint {
            pos: Point::from_pos(spos, z),
            source: CurvePos { part: spi, vv: svv },
            target: CurvePos { part: tpi, vv: tvv },
            kind,
            travel,
        });
    }
}

/// Compute the full intersection point set between the source and target
/// curves.
///
/// # Panics
///
/// Panics if `opts.tolerance` is negative.
pub fn collect_intersections<S, G, T>(
    source: &S,
    target: &G,
    opts: &OverlayOptions<T>,
) -> IntersectionSet<T>
where
    S: SegmentSource<T>,
    G: SegmentSource<T>,
    T: Real,
{
    let tol = opts.tolerance;
    assert!(tol >= T::zero(), "tolerance must be non-negative");

    struct RawPoint<T> {
        spi: usize,
        svv: T,
        tpi: usize,
        tvv: T,
        crossing: bool,
    }

    let mut raw: Vec<RawPoint<T>> = Vec::new();
    let mut pieces: BTreeMap<(usize, usize), Vec<LinearPiece<T>>> = BTreeMap::new();
    let mut query_stack: Vec<usize> = Vec::new();

    for tpi in 0..target.part_count() {
        let tring = target.part(tpi);
        let t_closed = tring.is_closed(tol);
        let tseg_count = tring.segment_count();
        for tseg in 0..tseg_count {
            let (tv1, tv2) = tring.seg_points(tseg);
            let seg_box = seg_aabb(tv1, tv2);
            for spi in 0..source.part_count() {
                let sring = source.part(spi);
                let sseg_count = sring.segment_count();
                if sseg_count == 0 {
                    continue;
                }
                let Some(ext) = sring.extents() else {
                    continue;
                };
                if ext.min_x > seg_box.max_x + tol
                    || ext.max_x < seg_box.min_x - tol
                    || ext.min_y > seg_box.max_y + tol
                    || ext.max_y < seg_box.min_y - tol
                {
                    continue;
                }
                let s_closed = sring.is_closed(tol);

                let mut candidates: Vec<usize> = Vec::new();
                sring.visit_segments_in_aabb(seg_box, tol, &mut query_stack, &mut |i| {
                    candidates.push(i)
                });
                // index visit order is arbitrary
                candidates.sort_unstable();

                for &sseg in &candidates {
                    let (sv1, sv2) = sring.seg_points(sseg);
                    let r = seg_seg_intersect_xy(sv1.pos(), sv2.pos(), tv1.pos(), tv2.pos(), tol);
                    match r.kind {
                        SegIntersectKind::None => {}
                        SegIntersectKind::Point { source_t, target_t } => {
                            // points at a segment end are re-found at the
                            // start of the following segment
                            let skip_src =
                                source_t == T::one() && (s_closed || sseg + 1 < sseg_count);
                            let skip_tgt =
                                target_t == T::one() && (t_closed || tseg + 1 < tseg_count);
                            if skip_src || skip_tgt {
                                continue;
                            }
                            raw.push(RawPoint {
                                spi,
                                svv: T::from(sseg).unwrap() + source_t,
                                tpi,
                                tvv: T::from(tseg).unwrap() + target_t,
                                crossing: r.is_interior_crossing(),
                            });
                        }
                        SegIntersectKind::Linear {
                            source_t,
                            target_t,
                            opposing,
                        } => {
                            pieces.entry((spi, tpi)).or_default().push(LinearPiece {
                                s0: T::from(sseg).unwrap() + source_t.0,
                                s1: T::from(sseg).unwrap() + source_t.1,
                                t0: T::from(tseg).unwrap() + target_t.0,
                                t1: T::from(tseg).unwrap() + target_t.1,
                                opposing,
                            });
                        }
                    }
                }
            }
        }
    }

    let source_planes = if opts.z_source == ZSource::FromSourcePlane {
        (0..source.part_count())
            .map(|i| Plane::fit(source.part(i).points()))
            .collect()
    } else {
        Vec::new()
    };

    let mut builder = PointBuilder {
        z_source: opts.z_source,
        tol,
        source_planes,
        points: Vec::new(),
    };
    let mut set = IntersectionSet::new();

    // stretches first so coincident single points dedupe against them
    for (&(spi, tpi), list) in pieces.iter_mut() {
        let sring = source.part(spi);
        let tring = target.part(tpi);
        let s_closed = sring.is_closed(tol);

        list.sort_by(|a, b| a.s0.partial_cmp(&b.s0).unwrap());
        let mut chains: Vec<LinearPiece<T>> = Vec::new();
        for &piece in list.iter() {
            if let Some(last) = chains.last_mut() {
                if last.opposing == piece.opposing
                    && continues(sring, last.s1, piece.s0, tol)
                    && continues(tring, last.t1, piece.t0, tol)
                {
                    last.s1 = piece.s1;
                    last.t1 = piece.t1;
                    continue;
                }
            }
            chains.push(piece);
        }

        // join across the source part's seam vertex (pseudo-break filter)
        if s_closed && chains.len() >= 2 {
            let first = chains[0];
            let last = chains[chains.len() - 1];
            if last.opposing == first.opposing
                && continues(sring, last.s1, first.s0, tol)
                && continues(tring, last.t1, first.t0, tol)
            {
                chains[0].s0 = last.s0;
                chains[0].t0 = last.t0;
                chains.pop();
            }
        }

        // a single chain closing on itself covers the whole part
        if chains.len() == 1 {
            let c = chains[0];
            let n = T::from(sring.segment_count()).unwrap();
            let span = if c.s1 >= c.s0 {
                c.s1 - c.s0
            } else {
                c.s1 + n - c.s0
            };
            if s_closed
                && (span - n).abs() < T::half()
                && continues(sring, c.s1, c.s0, tol)
                && continues(tring, c.t1, c.t0, tol)
            {
                set.loops.push(LoopStretch {
                    source_part: spi,
                    target_part: tpi,
                    opposing: c.opposing,
                });
                continue;
            }
        }

        for c in &chains {
            builder.push(
                sring,
                spi,
                c.s0,
                tring,
                tpi,
                c.t0,
                IntersectionKind::LinearStart,
            );
            if opts.include_linear_intermediates {
                let n = T::from(sring.segment_count()).unwrap();
                let end_unwrapped = if c.s1 >= c.s0 { c.s1 } else { c.s1 + n };
                let mut v = c.s0.floor() + T::one();
                while v < end_unwrapped {
                    let svv = sring.wrap_vv(v);
                    let pos = sring.pos_at(svv);
                    if let Some(tvv) = locate_on_part(tring, pos, tol) {
                        builder.push(
                            sring,
                            spi,
                            svv,
                            tring,
                            tpi,
                            tvv,
                            IntersectionKind::LinearIntermediate,
                        );
                    }
                    v = v + T::one();
                }
            }
            builder.push(
                sring,
                spi,
                c.s1,
                tring,
                tpi,
                c.t1,
                IntersectionKind::LinearEnd,
            );
        }
    }

    for r in &raw {
        // a part pair that collapsed into a full loop already accounts for
        // every incidence between the two parts; corner touches recorded
        // before the collapse must not survive it
        if set
            .loops
            .iter()
            .any(|l| l.source_part == r.spi && l.target_part == r.tpi)
        {
            continue;
        }
        let kind = if r.crossing {
            IntersectionKind::Crossing
        } else {
            IntersectionKind::Touching
        };
        builder.push(
            source.part(r.spi),
            r.spi,
            r.svv,
            target.part(r.tpi),
            r.tpi,
            r.tvv,
            kind,
        );
    }

    set.points = builder.points;
    set.finish(num_traits::Float::max(tol, T::fuzzy_epsilon()));
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Ring;

    fn opts() -> OverlayOptions<f64> {
        OverlayOptions::default()
    }

    fn square(x: f64, y: f64, size: f64) -> Ring<f64> {
        ring![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
    }

    #[test]
    fn crossing_squares() {
        // half-overlapping unit squares, boundaries cross twice
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, -0.5, 1.0);
        let set = collect_intersections(&a, &b, &opts());

        assert_eq!(set.points.len(), 2);
        assert!(set.loops.is_empty());
        assert!(
            set.points
                .iter()
                .all(|p| p.kind == IntersectionKind::Crossing
                    || p.kind == IntersectionKind::Touching)
        );
        // one on a's bottom edge at x=0.5, one on a's right edge at y=0.5
        let mut positions: Vec<(f64, f64)> =
            set.points.iter().map(|p| (p.pos.x, p.pos.y)).collect();
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((positions[0].0 - 0.5).abs() < 1e-9 && positions[0].1.abs() < 1e-9);
        assert!((positions[1].0 - 1.0).abs() < 1e-9 && (positions[1].1 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn ranks_follow_curve_order() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, -0.5, 1.0);
        let set = collect_intersections(&a, &b, &opts());

        for w in set.along_source.windows(2) {
            let p = set.points[w[0]].source.vv;
            let q = set.points[w[1]].source.vv;
            assert!(p <= q);
        }
        for (rank, &id) in set.along_target.iter().enumerate() {
            assert_eq!(set.target_rank[id], rank);
        }
    }

    #[test]
    fn shared_edge_stretch() {
        // squares sharing the full edge x=1, traversed in opposite directions
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let set = collect_intersections(&a, &b, &opts());

        let starts: Vec<_> = set
            .points
            .iter()
            .filter(|p| p.kind == IntersectionKind::LinearStart)
            .collect();
        let ends: Vec<_> = set
            .points
            .iter()
            .filter(|p| p.kind == IntersectionKind::LinearEnd)
            .collect();
        assert_eq!(starts.len(), 1);
        assert_eq!(ends.len(), 1);
        assert_eq!(set.points.len(), 2);

        // stretch runs along a's right edge from (1,0) to (1,1)
        assert!(starts[0].pos.fuzzy_eq_xy(Point::new_xy(1.0, 0.0)));
        assert!(ends[0].pos.fuzzy_eq_xy(Point::new_xy(1.0, 1.0)));
    }

    #[test]
    fn congruent_rings_form_loop() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.0, 0.0, 1.0);
        let set = collect_intersections(&a, &b, &opts());

        assert!(set.points.is_empty());
        assert_eq!(set.loops.len(), 1);
        assert!(!set.loops[0].opposing);

        let rev = b.reversed();
        let set = collect_intersections(&a, &rev, &opts());
        assert!(set.points.is_empty());
        assert_eq!(set.loops.len(), 1);
        assert!(set.loops[0].opposing);
    }

    #[test]
    fn stretch_across_seam_vertex_is_single() {
        // source ring's seam vertex (0,0) sits inside the overlap; the
        // stretch must not break there
        let src = ring![(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let cutter = open_ring![(0.2, 0.0), (0.9, 0.0)];
        let set = collect_intersections(&src, &cutter, &opts());

        assert_eq!(set.points.len(), 2);
        let start = set
            .points
            .iter()
            .find(|p| p.kind == IntersectionKind::LinearStart)
            .unwrap();
        let end = set
            .points
            .iter()
            .find(|p| p.kind == IntersectionKind::LinearEnd)
            .unwrap();
        assert!(start.pos.fuzzy_eq_xy(Point::new_xy(0.2, 0.0)));
        assert!(end.pos.fuzzy_eq_xy(Point::new_xy(0.9, 0.0)));
    }

    #[test]
    fn linear_intermediates_on_request() {
        let src = ring![(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let cutter = open_ring![(0.2, 0.0), (0.9, 0.0)];
        let mut o = opts();
        o.include_linear_intermediates = true;
        let set = collect_intersections(&src, &cutter, &o);

        let mids: Vec<_> = set
            .points
            .iter()
            .filter(|p| p.kind == IntersectionKind::LinearIntermediate)
            .collect();
        assert_eq!(mids.len(), 1);
        assert!(mids[0].pos.fuzzy_eq_xy(Point::new_xy(0.5, 0.0)));
    }

    #[test]
    fn clusters_group_coincident_points() {
        // corner of b touches a's edge where two b-segments meet: both parts
        // record the same location once, clustered together
        let a = square(0.0, 0.0, 2.0);
        let b = ring![(1.0, 0.0), (3.0, -2.0), (3.0, 2.0)];
        let set = collect_intersections(&a, &b, &opts());

        // every cluster member is coincident with its representative
        for cluster in &set.clusters {
            let rep = set.points[cluster[0]].pos;
            for &id in cluster {
                assert!(set.points[id].pos.fuzzy_eq_xy_eps(rep, 1e-5));
            }
        }
        // the touch at (1,0) forms one cluster
        let touch_clusters: Vec<_> = set
            .clusters
            .iter()
            .filter(|c| set.points[c[0]].pos.fuzzy_eq_xy(Point::new_xy(1.0, 0.0)))
            .collect();
        assert_eq!(touch_clusters.len(), 1);
    }

    #[test]
    fn travel_flags_at_open_ends() {
        // open cutter starting exactly on the boundary
        let a = square(0.0, 0.0, 2.0);
        let cutter = open_ring![(1.0, 0.0), (1.0, 1.0)];
        let set = collect_intersections(&a, &cutter, &opts());

        assert_eq!(set.points.len(), 1);
        let p = &set.points[0];
        assert!(p.travel.source_forward && p.travel.source_backward);
        assert!(p.travel.target_forward);
        // nothing before the cutter's start vertex
        assert!(!p.travel.target_backward);
    }
}
