mod group_test_properties;

// not every test binary uses every helper
#[allow(unused_imports)]
pub use group_test_properties::*;

use fuzzy_overlay::geom::Ring;
use fuzzy_overlay::ring;

/// Axis aligned square ring, counter clockwise.
pub fn square(x: f64, y: f64, size: f64) -> Ring<f64> {
    ring![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
}
