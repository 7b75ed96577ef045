use super::Point;
use super::seg::{seg_aabb, seg_point_at};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use static_aabb2d_index::{AABB, StaticAABB2DIndex, StaticAABB2DIndexBuilder};
use std::cell::OnceCell;

/// Minimum segment count before queries go through the lazily built spatial
/// index rather than a linear scan.
const SPATIAL_INDEX_MIN_SEGMENTS: usize = 16;

/// Winding orientation of a closed ring in the XY plane.
///
/// By convention exterior rings are counter clockwise (positive signed area)
/// and hole rings are clockwise. Open rings and rings with near zero projected
/// area (e.g. fully degenerate or vertical geometry) have no defined
/// orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingOrientation {
    CounterClockwise,
    Clockwise,
    Undefined,
}

/// A vertex path in the plane, closed (a ring proper, with the first vertex
/// repeated as the last) or open (a cutter curve).
///
/// Vertices are [`Point`]s so z values ride along; all ring computations use
/// XY only. Positions along the ring are addressed by *virtual vertex* values:
/// a value `v` in `[0, segment_count]` addresses the point on segment
/// `floor(v)` at fraction `v - floor(v)`.
///
/// A lazily built segment AABB index accelerates proximity queries on larger
/// rings; it is created on first use and invalidated by mutation. Because the
/// lazy cell is not thread safe a `Ring` is `Send` but not `Sync`; concurrent
/// overlay runs should operate on clones.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ring<T = f64>
where
    T: Real,
{
    points: Vec<Point<T>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: OnceCell<StaticAABB2DIndex<T>>,
}

impl<T> std::fmt::Debug for Ring<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ring").field("points", &self.points).finish()
    }
}

impl<T> Clone for Ring<T>
where
    T: Real,
{
    fn clone(&self) -> Self {
        // index is rebuilt on demand rather than cloned
        Ring {
            points: self.points.clone(),
            index: OnceCell::new(),
        }
    }
}

impl<T> PartialEq for Ring<T>
where
    T: Real,
{
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T> Default for Ring<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Ring {
            points: Vec::new(),
            index: OnceCell::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Ring {
            points: Vec::with_capacity(capacity),
            index: OnceCell::new(),
        }
    }

    #[inline]
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Ring {
            points,
            index: OnceCell::new(),
        }
    }

    /// Add a vertex with x, y and z.
    #[inline]
    pub fn add(&mut self, x: T, y: T, z: T) {
        self.points.push(Point::new(x, y, z));
        self.invalidate_index();
    }

    /// Add a vertex with undefined z.
    #[inline]
    pub fn add_xy(&mut self, x: T, y: T) {
        self.points.push(Point::new_xy(x, y));
        self.invalidate_index();
    }

    /// Add a vertex point.
    #[inline]
    pub fn add_point(&mut self, point: Point<T>) {
        self.points.push(point);
        self.invalidate_index();
    }

    /// Close the ring by repeating the first vertex at the end (no-op if it
    /// already fuzzy repeats or the ring has fewer than 3 vertices).
    pub fn close(&mut self) {
        if self.points.len() < 3 {
            return;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if !first.fuzzy_eq_xy(last) {
            self.points.push(first);
            self.invalidate_index();
        }
    }

    /// Reverse the vertex order in place (flips orientation).
    pub fn reverse(&mut self) {
        self.points.reverse();
        self.invalidate_index();
    }

    /// Copy of the ring with reversed vertex order.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Ring::from_points(points)
    }

    #[inline]
    fn invalidate_index(&mut self) {
        self.index.take();
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex at position `i`.
    #[inline]
    pub fn at(&self, i: usize) -> Point<T> {
        self.points[i]
    }

    /// Number of segments (`vertex_count - 1`, 0 for fewer than 2 vertices).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns `true` if the ring is closed: at least 4 vertices with the
    /// first fuzzy repeating as the last within `epsilon` XY distance.
    pub fn is_closed(&self, epsilon: T) -> bool {
        self.points.len() >= 4
            && self.points[0].fuzzy_eq_xy_eps(self.points[self.points.len() - 1], epsilon)
    }

    /// Start and end vertex of segment `i`.
    #[inline]
    pub fn seg_points(&self, i: usize) -> (Point<T>, Point<T>) {
        (self.points[i], self.points[i + 1])
    }

    /// XY positions of segment `i` endpoints.
    #[inline]
    pub fn seg(&self, i: usize) -> (Vector2<T>, Vector2<T>) {
        (self.points[i].pos(), self.points[i + 1].pos())
    }

    /// Index of the segment after `i`, wrapping past the last segment.
    #[inline]
    pub fn next_wrapping_seg(&self, i: usize) -> usize {
        let n = self.segment_count();
        if i + 1 >= n { 0 } else { i + 1 }
    }

    /// Index of the segment before `i`, wrapping past the first segment.
    #[inline]
    pub fn prev_wrapping_seg(&self, i: usize) -> usize {
        let n = self.segment_count();
        if i == 0 { n - 1 } else { i - 1 }
    }

    /// Signed area of the ring by the shoelace formula over XY.
    ///
    /// Positive for counter clockwise winding. Meaningful only for closed
    /// rings; an open ring is summed as if closed by a final edge back to the
    /// first vertex.
    pub fn signed_area(&self) -> T {
        let n = self.segment_count();
        if n < 2 {
            return T::zero();
        }

        let mut sum = T::zero();
        for i in 0..n {
            let (p0, p1) = self.seg(i);
            sum = sum + p0.perp_dot(p1);
        }
        // closing edge contributes zero for a properly closed ring
        let last = self.points[n].pos();
        let first = self.points[0].pos();
        sum = sum + last.perp_dot(first);

        sum / T::two()
    }

    /// Winding orientation, determined by the sign of [`Ring::signed_area`].
    ///
    /// Open rings and rings whose area is within `area_epsilon` of zero are
    /// [`RingOrientation::Undefined`].
    pub fn orientation_eps(&self, epsilon: T, area_epsilon: T) -> RingOrientation {
        if !self.is_closed(epsilon) {
            return RingOrientation::Undefined;
        }

        let area = self.signed_area();
        if area.fuzzy_eq_zero_eps(area_epsilon) {
            RingOrientation::Undefined
        } else if area > T::zero() {
            RingOrientation::CounterClockwise
        } else {
            RingOrientation::Clockwise
        }
    }

    /// Same as [`Ring::orientation_eps`] using the default fuzzy epsilon for
    /// both distances and area.
    pub fn orientation(&self) -> RingOrientation {
        self.orientation_eps(T::fuzzy_epsilon(), T::fuzzy_epsilon())
    }

    /// XY extents of the ring, `None` if empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_x = Real::max_value();
        let mut min_y = Real::max_value();
        let mut max_x = Real::min_value();
        let mut max_y = Real::min_value();
        for p in &self.points {
            min_x = num_traits::Float::min(min_x, p.x);
            min_y = num_traits::Float::min(min_y, p.y);
            max_x = num_traits::Float::max(max_x, p.x);
            max_y = num_traits::Float::max(max_y, p.y);
        }

        Some(AABB::new(min_x, min_y, max_x, max_y))
    }

    /// Segment AABB index, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the ring has no segments.
    pub fn ensure_index(&self) -> &StaticAABB2DIndex<T> {
        self.index.get_or_init(|| {
            let seg_count = self.segment_count();
            assert!(seg_count != 0, "cannot index a ring with no segments");
            let mut builder = StaticAABB2DIndexBuilder::new(seg_count);
            for i in 0..seg_count {
                let (v1, v2) = self.seg_points(i);
                let aabb = seg_aabb(v1, v2);
                builder.add(aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y);
            }
            builder
                .build()
                .expect("failed to build ring segment index")
        })
    }

    /// Visit the indices of all segments whose AABB inflated by `epsilon`
    /// contains `point`.
    ///
    /// Uses the spatial index for larger rings, a linear scan otherwise.
    /// `query_stack` is scratch memory reused across queries.
    pub fn visit_segments_near<V>(
        &self,
        point: Vector2<T>,
        epsilon: T,
        query_stack: &mut Vec<usize>,
        visitor: &mut V,
    ) where
        V: FnMut(usize),
    {
        let seg_count = self.segment_count();
        if seg_count == 0 {
            return;
        }

        if seg_count < SPATIAL_INDEX_MIN_SEGMENTS {
            for i in 0..seg_count {
                let (v1, v2) = self.seg_points(i);
                let aabb = seg_aabb(v1, v2);
                if point.x >= aabb.min_x - epsilon
                    && point.x <= aabb.max_x + epsilon
                    && point.y >= aabb.min_y - epsilon
                    && point.y <= aabb.max_y + epsilon
                {
                    visitor(i);
                }
            }
            return;
        }

        let index = self.ensure_index();
        let mut visit = |i: usize| {
            visitor(i);
        };
        index.visit_query_with_stack(
            point.x - epsilon,
            point.y - epsilon,
            point.x + epsilon,
            point.y + epsilon,
            &mut visit,
            query_stack,
        );
    }

    /// Indices of all segments whose AABB inflated by `epsilon` contains
    /// `point`. Convenience wrapper around [`Ring::visit_segments_near`].
    pub fn find_segments_near(&self, point: Vector2<T>, epsilon: T) -> Vec<usize> {
        let mut result = Vec::new();
        let mut query_stack = Vec::new();
        self.visit_segments_near(point, epsilon, &mut query_stack, &mut |i| result.push(i));
        result
    }

    /// Visit the indices of all segments whose AABB intersects `query`
    /// inflated by `epsilon`.
    ///
    /// Uses the spatial index for larger rings, a linear scan otherwise.
    pub fn visit_segments_in_aabb<V>(
        &self,
        query: AABB<T>,
        epsilon: T,
        query_stack: &mut Vec<usize>,
        visitor: &mut V,
    ) where
        V: FnMut(usize),
    {
        let seg_count = self.segment_count();
        if seg_count == 0 {
            return;
        }

        if seg_count < SPATIAL_INDEX_MIN_SEGMENTS {
            for i in 0..seg_count {
                let (v1, v2) = self.seg_points(i);
                let aabb = seg_aabb(v1, v2);
                if aabb.min_x <= query.max_x + epsilon
                    && aabb.max_x >= query.min_x - epsilon
                    && aabb.min_y <= query.max_y + epsilon
                    && aabb.max_y >= query.min_y - epsilon
                {
                    visitor(i);
                }
            }
            return;
        }

        let index = self.ensure_index();
        let mut visit = |i: usize| {
            visitor(i);
        };
        index.visit_query_with_stack(
            query.min_x - epsilon,
            query.min_y - epsilon,
            query.max_x + epsilon,
            query.max_y + epsilon,
            &mut visit,
            query_stack,
        );
    }

    /// Wrap a virtual vertex value into `[0, segment_count)` (closed rings).
    #[inline]
    pub fn wrap_vv(&self, vv: T) -> T {
        let n = T::from(self.segment_count()).unwrap();
        if vv >= n { vv - n } else { vv }
    }

    /// Point at the virtual vertex value given (`vv` in `[0, segment_count]`).
    ///
    /// # Panics
    ///
    /// Panics if the ring has no segments.
    pub fn point_at(&self, vv: T) -> Point<T> {
        let n = self.segment_count();
        assert!(n != 0, "cannot evaluate a ring with no segments");

        let max_seg = n - 1;
        let seg = (vv.floor().to_usize().unwrap_or(0)).min(max_seg);
        let t = vv - T::from(seg).unwrap();
        let (v1, v2) = self.seg_points(seg);
        let t = num_traits::Float::min(num_traits::Float::max(t, T::zero()), T::one());
        seg_point_at(v1, v2, t)
    }

    /// XY position at the virtual vertex value given.
    #[inline]
    pub fn pos_at(&self, vv: T) -> Vector2<T> {
        self.point_at(vv).pos()
    }

    /// Extract the vertex path from virtual vertex `start` forward to `end`.
    ///
    /// For a closed ring the walk wraps past the ring start when
    /// `end <= start`; `start == end` yields a single point (use
    /// [`Ring::full_loop_points`] to walk all the way around). Consecutive
    /// duplicate points within `epsilon` are removed.
    pub fn subcurve_points(&self, start: T, end: T, epsilon: T) -> Vec<Point<T>> {
        let n = self.segment_count();
        assert!(n != 0, "cannot extract a subcurve from a ring with no segments");
        let nf = T::from(n).unwrap();

        let start = self.wrap_vv(start);
        let mut span = self.wrap_vv(end) - start;
        if span < T::zero() {
            assert!(
                self.is_closed(epsilon),
                "subcurve wraps past the end of an open ring"
            );
            span = span + nf;
        }

        self.walk_points(start, span, epsilon)
    }

    /// Extract the complete vertex cycle of a closed ring starting and ending
    /// at virtual vertex `start`.
    pub fn full_loop_points(&self, start: T, epsilon: T) -> Vec<Point<T>> {
        assert!(self.is_closed(epsilon), "full loop requires a closed ring");
        let n = T::from(self.segment_count()).unwrap();
        self.walk_points(self.wrap_vv(start), n, epsilon)
    }

    fn walk_points(&self, start: T, span: T, epsilon: T) -> Vec<Point<T>> {
        let n = self.segment_count();
        let end_unwrapped = start + span;

        let mut result = Vec::new();
        result.push(self.point_at(start));

        let mut v = start.floor().to_i64().unwrap() + 1;
        while T::from(v).unwrap() < end_unwrapped {
            let idx = (v as usize) % n;
            result.push(self.points[idx]);
            v += 1;
        }

        result.push(self.point_at(self.wrap_vv(end_unwrapped)));
        dedupe_points_xy(&mut result, epsilon);
        result
    }
}

/// Remove consecutive points that fuzzy repeat within `epsilon` XY distance
/// (keeping the first of each run).
pub fn dedupe_points_xy<T>(points: &mut Vec<Point<T>>, epsilon: T)
where
    T: Real,
{
    if points.len() < 2 {
        return;
    }

    let mut write = 1;
    for read in 1..points.len() {
        if !points[read].fuzzy_eq_xy_eps(points[write - 1], epsilon) {
            points[write] = points[read];
            write += 1;
        }
    }
    points.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn unit_square() -> Ring<f64> {
        ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
    }

    #[test]
    fn closed_ring_basics() {
        let r = unit_square();
        assert!(r.is_closed(1e-8));
        assert_eq!(r.vertex_count(), 5);
        assert_eq!(r.segment_count(), 4);
        assert_fuzzy_eq!(r.signed_area(), 1.0);
        assert_eq!(r.orientation(), RingOrientation::CounterClockwise);

        let rev = r.reversed();
        assert_fuzzy_eq!(rev.signed_area(), -1.0);
        assert_eq!(rev.orientation(), RingOrientation::Clockwise);
    }

    #[test]
    fn open_ring_orientation_undefined() {
        let r = open_ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        assert!(!r.is_closed(1e-8));
        assert_eq!(r.orientation(), RingOrientation::Undefined);
    }

    #[test]
    fn zero_area_orientation_undefined() {
        // degenerate sliver, out and back along the same line
        let r = ring![(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)];
        assert_eq!(r.orientation(), RingOrientation::Undefined);
    }

    #[test]
    fn extents() {
        let r = unit_square();
        let aabb = r.extents().unwrap();
        assert_fuzzy_eq!(aabb.min_x, 0.0);
        assert_fuzzy_eq!(aabb.min_y, 0.0);
        assert_fuzzy_eq!(aabb.max_x, 1.0);
        assert_fuzzy_eq!(aabb.max_y, 1.0);
        assert!(Ring::<f64>::new().extents().is_none());
    }

    #[test]
    fn point_at_virtual_vertex() {
        let r = unit_square();
        let p = r.point_at(0.5);
        assert_fuzzy_eq!(p.x, 0.5);
        assert_fuzzy_eq!(p.y, 0.0);

        let p = r.point_at(2.25);
        assert_fuzzy_eq!(p.x, 0.75);
        assert_fuzzy_eq!(p.y, 1.0);

        // end of last segment
        let p = r.point_at(4.0);
        assert!(p.fuzzy_eq_xy(Point::new_xy(0.0, 0.0)));
    }

    #[test]
    fn find_segments_near_linear_scan() {
        let r = unit_square();
        let near = r.find_segments_near(Vector2::new(0.5, 0.0), 1e-3);
        assert_eq!(near, vec![0]);

        // corner touches two segment boxes
        let near = r.find_segments_near(Vector2::new(1.0, 0.0), 1e-3);
        assert_eq!(near, vec![0, 1]);
    }

    #[test]
    fn find_segments_near_indexed() {
        // circle-ish ring with enough segments to force the spatial index
        let mut r = Ring::with_capacity(41);
        for i in 0..40 {
            let a = (i as f64) * std::f64::consts::TAU / 40.0;
            r.add_xy(a.cos(), a.sin());
        }
        r.close();
        assert!(r.segment_count() >= SPATIAL_INDEX_MIN_SEGMENTS);

        let near = r.find_segments_near(Vector2::new(1.0, 0.0), 1e-3);
        assert!(!near.is_empty());
        for i in near {
            let (v1, v2) = r.seg_points(i);
            assert!(
                v1.fuzzy_eq_xy_eps(Point::new_xy(1.0, 0.0), 0.2)
                    || v2.fuzzy_eq_xy_eps(Point::new_xy(1.0, 0.0), 0.2)
            );
        }
    }

    #[test]
    fn subcurve_forward() {
        let r = unit_square();
        let pts = r.subcurve_points(0.5, 2.5, 1e-8);
        assert_eq!(pts.len(), 4);
        assert!(pts[0].fuzzy_eq_xy(Point::new_xy(0.5, 0.0)));
        assert!(pts[1].fuzzy_eq_xy(Point::new_xy(1.0, 0.0)));
        assert!(pts[2].fuzzy_eq_xy(Point::new_xy(1.0, 1.0)));
        assert!(pts[3].fuzzy_eq_xy(Point::new_xy(0.5, 1.0)));
    }

    #[test]
    fn subcurve_wrapping() {
        let r = unit_square();
        let pts = r.subcurve_points(3.5, 0.5, 1e-8);
        assert_eq!(pts.len(), 3);
        assert!(pts[0].fuzzy_eq_xy(Point::new_xy(0.0, 0.5)));
        assert!(pts[1].fuzzy_eq_xy(Point::new_xy(0.0, 0.0)));
        assert!(pts[2].fuzzy_eq_xy(Point::new_xy(0.5, 0.0)));
    }

    #[test]
    fn full_loop() {
        let r = unit_square();
        let pts = r.full_loop_points(1.5, 1e-8);
        // start point, 4 corners, back to start point
        assert_eq!(pts.len(), 6);
        assert!(pts[0].fuzzy_eq_xy(Point::new_xy(1.0, 0.5)));
        assert!(pts[5].fuzzy_eq_xy(Point::new_xy(1.0, 0.5)));
    }

    #[test]
    fn dedupe() {
        let mut pts = vec![
            Point::new_xy(0.0, 0.0),
            Point::new_xy(0.0, 0.0),
            Point::new_xy(1.0, 0.0),
            Point::new_xy(1.0 + 1e-10, 0.0),
            Point::new_xy(2.0, 0.0),
        ];
        dedupe_points_xy(&mut pts, 1e-8);
        assert_eq!(pts.len(), 3);
    }
}
