//! Tolerance-aware planar topological overlay for polygon rings.
//!
//! This crate computes containment/touch relations and boolean set operations
//! (intersection, union, difference, cut-by-curve) between closed rings and
//! multi-part polygons under fuzzy arithmetic: every entry point takes an
//! explicit `tolerance >= 0` and any XY distance less than or equal to it is
//! treated as coincident. This keeps results stable for near-degenerate input
//! such as collinear overlapping edges, shared vertices and boundaries that
//! only differ by noise.
//!
//! Organization:
//! - [`core`] holds the numeric traits (fuzzy comparing, [`core::traits::Real`])
//!   and the 2D vector math shared by everything else.
//! - [`geom`] holds the primitive geometry the algorithms consume: points with
//!   an optional z, rings, ring groups (exterior + holes) and best fit planes.
//! - [`overlay`] holds the overlay engine itself: fuzzy predicates, the
//!   segment intersection model, the intersection point graph and the ring
//!   algebra operations.
//!
//! All ring algebra operates purely on XY; z values ride along and are
//! interpolated onto generated intersection points according to
//! [`overlay::ZSource`].

#[macro_use]
mod macros;

pub mod core;
pub mod geom;
pub mod overlay;

pub use static_aabb2d_index::AABB;
