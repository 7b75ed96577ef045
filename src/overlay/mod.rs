//! The overlay engine: fuzzy predicates, the segment intersection model, the
//! intersection point graph/navigator and the ring algebra operations.

pub mod cut;
pub mod intersection_points;
pub mod navigator;
pub mod predicates;
pub mod ring_algebra;
pub mod seg_intersect;

pub use cut::{CutResult, CutSide, cut_xy};
pub use intersection_points::{
    CurvePos, IntersectionKind, IntersectionPoint, IntersectionSet, LoopStretch, TravelFlags,
    collect_intersections,
};
pub use navigator::{
    CurveRole, PointClass, Subcurve, SubcurveSide, TurnPreference, build_subcurves, classify_point,
};
pub use predicates::{
    PointContainment, TouchesResult, Trilean, area_contains_curve_xy, bounds_disjoint,
    definite_containment, interior_intersects_xy, ring_contains_point_xy, rings_congruent_xy,
    source_contains_point_xy, touches_xy,
};
pub use ring_algebra::{
    BooleanOp, OverlayResult, boolean_xy, difference_xy, intersect_xy, union_xy,
};

use crate::core::traits::Real;

/// Where the z value of a generated intersection point comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ZSource {
    /// Interpolate linearly along the target segment the point lies on.
    FromTarget,
    /// Evaluate the best fit plane of the source part at the point's XY.
    FromSourcePlane,
    /// Mean of the source- and target-interpolated z values; when only one
    /// side has a defined z that one is used.
    #[default]
    Interpolate,
}

/// Options shared by the overlay operations.
#[derive(Debug, Copy, Clone)]
pub struct OverlayOptions<T = f64> {
    /// Fuzzy tolerance: any XY distance less than or equal to this is treated
    /// as coincident. Must be `>= 0`.
    pub tolerance: T,
    /// Z policy for generated intersection points.
    pub z_source: ZSource,
    /// When `true`, intersection points are also materialized at source
    /// vertices interior to linear overlap stretches (vertex preservation).
    pub include_linear_intermediates: bool,
}

impl<T> OverlayOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same defaults with the tolerance given.
    #[inline]
    pub fn with_tolerance(tolerance: T) -> Self {
        OverlayOptions {
            tolerance,
            ..Self::default()
        }
    }
}

impl<T> Default for OverlayOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        OverlayOptions {
            tolerance: T::from(1e-5).unwrap(),
            z_source: ZSource::default(),
            include_linear_intermediates: false,
        }
    }
}
