//! Primitive geometry consumed by the overlay algorithms: points with an
//! optional z component, rings (closed or open vertex paths), ring groups
//! (exterior + holes) and best fit planes.

mod plane;
mod point;
mod ring;
mod ring_group;
pub mod seg;
mod traits;

pub use plane::Plane;
pub use point::Point;
pub use ring::{Ring, RingOrientation, dedupe_points_xy};
pub use ring_group::RingGroup;
pub use traits::SegmentSource;
