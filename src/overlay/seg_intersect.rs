//! Fuzzy intersection of two straight segments in the XY plane.
//!
//! This is the lowest layer of the overlay engine. A segment pair is
//! classified as not intersecting, intersecting in a single point (a proper
//! interior crossing or an endpoint touch) or overlapping linearly (collinear
//! within tolerance over a shared interval). All endpoint incidences are
//! resolved by perpendicular distance and along-ratio against the other
//! segment with the along position snapped to the nearest endpoint when within
//! tolerance, so shared vertices produce exact parametric values of 0 or 1.

use crate::core::math::{Vector2, dist_squared, seg_line_parameters};
use crate::core::traits::Real;

/// Classification of a segment pair intersection.
///
/// Parametric values are fractions along each segment (0 at the start vertex,
/// 1 at the end vertex).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegIntersectKind<T = f64> {
    /// The segments do not come within tolerance of each other.
    None,
    /// Single point of intersection (crossing or touch).
    Point { source_t: T, target_t: T },
    /// Collinear overlap over an interval, ordered by increasing source
    /// parameter; `target_t.0` corresponds to `source_t.0`.
    Linear {
        source_t: (T, T),
        target_t: (T, T),
        /// `true` when the target runs in the opposite direction of the
        /// source over the shared interval.
        opposing: bool,
    },
}

/// Result of intersecting a source segment with a target segment.
///
/// Besides the overall [`SegIntersectKind`], the four endpoint incidence
/// tests are exposed: for each endpoint of one segment that lies within
/// tolerance of the other segment, the parametric position on the other
/// segment (snapped to 0/1 near that segment's own endpoints).
#[derive(Debug, Copy, Clone)]
pub struct SegIntersect<T = f64> {
    /// Position of the source start vertex on the target, if within tolerance.
    pub source_start_on_target: Option<T>,
    /// Position of the source end vertex on the target, if within tolerance.
    pub source_end_on_target: Option<T>,
    /// Position of the target start vertex on the source, if within tolerance.
    pub target_start_on_source: Option<T>,
    /// Position of the target end vertex on the source, if within tolerance.
    pub target_end_on_source: Option<T>,
    pub kind: SegIntersectKind<T>,
}

impl<T> SegIntersect<T>
where
    T: Real,
{
    /// Returns `true` when the single intersection point is a proper interior
    /// crossing (no endpoint of either segment is involved).
    pub fn is_interior_crossing(&self) -> bool {
        matches!(self.kind, SegIntersectKind::Point { .. })
            && self.source_start_on_target.is_none()
            && self.source_end_on_target.is_none()
            && self.target_start_on_source.is_none()
            && self.target_end_on_source.is_none()
    }
}

/// Position of endpoint `e` on the segment `p0 -> p1`, if within `tol`.
///
/// Returns the parametric value with snapping: positions within `tol` of the
/// segment start/end snap to exactly 0/1. Degenerate (near zero length)
/// segments are treated as the single point `p0`.
fn endpoint_on_seg<T>(p0: Vector2<T>, p1: Vector2<T>, len: T, e: Vector2<T>, tol: T) -> Option<T>
where
    T: Real,
{
    if len <= tol {
        if dist_squared(p0, e).sqrt() <= tol {
            return Some(T::zero());
        }
        return None;
    }

    // len > tol, so the line is well defined
    let (t, d) = seg_line_parameters(p0, p1, e, tol)?;
    if d.abs() > tol {
        return None;
    }

    let pos = t * len;
    if pos < -tol || pos > len + tol {
        return None;
    }
    if pos.abs() <= tol {
        Some(T::zero())
    } else if (pos - len).abs() <= tol {
        Some(T::one())
    } else {
        Some(t)
    }
}

/// Intersect the source segment `sp0 -> sp1` with the target segment
/// `tp0 -> tp1` under fuzzy tolerance `tol`.
///
/// Two or more distinct endpoint incidences imply the segments are collinear
/// within tolerance and yield a [`SegIntersectKind::Linear`] overlap interval.
/// A single incidence is a touch. With no incidence at all, a proper crossing
/// is solved for parametrically and accepted only when strictly interior to
/// both segments (more than `tol` away from every endpoint); crossings at
/// endpoints always surface as endpoint incidences instead.
pub fn seg_seg_intersect_xy<T>(
    sp0: Vector2<T>,
    sp1: Vector2<T>,
    tp0: Vector2<T>,
    tp1: Vector2<T>,
    tol: T,
) -> SegIntersect<T>
where
    T: Real,
{
    debug_assert!(tol >= T::zero(), "tolerance must be non-negative");

    let src_len = (sp1 - sp0).length();
    let tgt_len = (tp1 - tp0).length();

    let source_start_on_target = endpoint_on_seg(tp0, tp1, tgt_len, sp0, tol);
    let source_end_on_target = endpoint_on_seg(tp0, tp1, tgt_len, sp1, tol);
    let target_start_on_source = endpoint_on_seg(sp0, sp1, src_len, tp0, tol);
    let target_end_on_source = endpoint_on_seg(sp0, sp1, src_len, tp1, tol);

    // (source parameter, target parameter) for each incidence
    let mut matches: Vec<(T, T)> = Vec::new();
    if let Some(f) = source_start_on_target {
        matches.push((T::zero(), f));
    }
    if let Some(f) = source_end_on_target {
        matches.push((T::one(), f));
    }
    if let Some(f) = target_start_on_source {
        matches.push((f, T::zero()));
    }
    if let Some(f) = target_end_on_source {
        matches.push((f, T::one()));
    }

    // collapse incidences that are the same location on both segments (e.g. a
    // shared vertex reports once per segment)
    let mut distinct: Vec<(T, T)> = Vec::new();
    for m in matches {
        let dup = distinct.iter().any(|d| {
            (d.0 - m.0).abs() * src_len <= tol && (d.1 - m.1).abs() * tgt_len <= tol
        });
        if !dup {
            distinct.push(m);
        }
    }

    let kind = match distinct.len() {
        0 => interior_crossing(sp0, sp1, tp0, tp1, src_len, tgt_len, tol),
        1 => SegIntersectKind::Point {
            source_t: distinct[0].0,
            target_t: distinct[0].1,
        },
        _ => {
            distinct.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
            let first = distinct[0];
            let last = distinct[distinct.len() - 1];
            SegIntersectKind::Linear {
                source_t: (first.0, last.0),
                target_t: (first.1, last.1),
                opposing: first.1 > last.1,
            }
        }
    };

    SegIntersect {
        source_start_on_target,
        source_end_on_target,
        target_start_on_source,
        target_end_on_source,
        kind,
    }
}

/// Parametric solve for a crossing strictly interior to both segments.
fn interior_crossing<T>(
    sp0: Vector2<T>,
    sp1: Vector2<T>,
    tp0: Vector2<T>,
    tp1: Vector2<T>,
    src_len: T,
    tgt_len: T,
    tol: T,
) -> SegIntersectKind<T>
where
    T: Real,
{
    if src_len <= tol || tgt_len <= tol {
        return SegIntersectKind::None;
    }

    let vs = sp1 - sp0;
    let vt = tp1 - tp0;
    let denom = vs.perp_dot(vt);
    // near parallel without any endpoint incidence means no intersection
    if denom.fuzzy_eq_zero_eps(src_len * tgt_len * T::fuzzy_epsilon()) {
        return SegIntersectKind::None;
    }

    let w = tp0 - sp0;
    let source_t = w.perp_dot(vt) / denom;
    let target_t = w.perp_dot(vs) / denom;

    let src_pos = source_t * src_len;
    let tgt_pos = target_t * tgt_len;
    let strictly_interior = src_pos > tol
        && src_pos < src_len - tol
        && tgt_pos > tol
        && tgt_pos < tgt_len - tol;
    if strictly_interior {
        SegIntersectKind::Point { source_t, target_t }
    } else {
        SegIntersectKind::None
    }
}
