//! Free functions operating on a single straight segment given as a start and
//! end [`Point`].

use super::Point;
use crate::core::math::{Vector2, angle, dist_squared};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Length of the segment.
#[inline]
pub fn seg_length<T>(v1: Point<T>, v2: Point<T>) -> T
where
    T: Real,
{
    dist_squared(v1.pos(), v2.pos()).sqrt()
}

/// Direction angle (radians) of the segment going from `v1` to `v2`.
#[inline]
pub fn seg_direction_angle<T>(v1: Point<T>, v2: Point<T>) -> T
where
    T: Real,
{
    angle(v1.pos(), v2.pos())
}

/// Point on the segment at parametric value `t` (`t = 0` at `v1`, `t = 1` at
/// `v2`).
///
/// The z component is linearly interpolated when both endpoint z values are
/// defined, otherwise it is undefined (NaN). At `t` exactly 0 or 1 the
/// endpoint is returned unchanged so defined z values survive even when the
/// opposite endpoint has none.
#[inline]
pub fn seg_point_at<T>(v1: Point<T>, v2: Point<T>, t: T) -> Point<T>
where
    T: Real,
{
    if t == T::zero() {
        return v1;
    }
    if t == T::one() {
        return v2;
    }

    let pos = v1.pos() + (v2.pos() - v1.pos()).scale(t);
    let z = v1.z + (v2.z - v1.z) * t;
    Point::from_pos(pos, z)
}

/// Midpoint of the segment (z interpolated the same way as [`seg_point_at`]).
#[inline]
pub fn seg_midpoint<T>(v1: Point<T>, v2: Point<T>) -> Point<T>
where
    T: Real,
{
    seg_point_at(v1, v2, T::half())
}

/// Axis aligned bounding box of the segment (XY only).
#[inline]
pub fn seg_aabb<T>(v1: Point<T>, v2: Point<T>) -> AABB<T>
where
    T: Real,
{
    AABB::new(
        num_traits::Float::min(v1.x, v2.x),
        num_traits::Float::min(v1.y, v2.y),
        num_traits::Float::max(v1.x, v2.x),
        num_traits::Float::max(v1.y, v2.y),
    )
}

/// Returns `true` if `point` is within `epsilon` XY distance of the segment.
#[inline]
pub fn seg_fuzzy_contains_point<T>(v1: Point<T>, v2: Point<T>, point: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    crate::core::math::dist_to_line_seg(v1.pos(), v2.pos(), point) <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn point_at_interpolates_z() {
        let v1 = Point::new(0.0, 0.0, 10.0);
        let v2 = Point::new(4.0, 0.0, 20.0);
        let mid = seg_midpoint(v1, v2);
        assert_fuzzy_eq!(mid.x, 2.0);
        assert_fuzzy_eq!(mid.z, 15.0);
    }

    #[test]
    fn point_at_undefined_z() {
        let v1 = Point::new_xy(0.0, 0.0);
        let v2 = Point::new(4.0, 0.0, 20.0);
        // interior point has no z (one endpoint undefined)
        assert!(!seg_point_at(v1, v2, 0.25).has_z());
        // exact endpoints keep their own z state
        assert!(!seg_point_at(v1, v2, 0.0).has_z());
        assert!(seg_point_at(v1, v2, 1.0).has_z());
    }

    #[test]
    fn fuzzy_contains() {
        let v1 = Point::new_xy(0.0, 0.0);
        let v2 = Point::new_xy(10.0, 0.0);
        assert!(seg_fuzzy_contains_point(
            v1,
            v2,
            Vector2::new(5.0, 0.0005),
            1e-3
        ));
        assert!(!seg_fuzzy_contains_point(
            v1,
            v2,
            Vector2::new(5.0, 0.002),
            1e-3
        ));
        // beyond the segment end
        assert!(!seg_fuzzy_contains_point(
            v1,
            v2,
            Vector2::new(10.5, 0.0),
            1e-3
        ));
    }
}
