use crate::core::math::Vector2;
use crate::core::traits::Real;

/// A 3D point with an optional z component.
///
/// The overlay algorithms operate purely on x and y; z values ride along and
/// are interpolated onto generated intersection points. A NaN z marks the z
/// as undefined (pure 2D input), see [`Point::has_z`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new point with x, y and z components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Point { x, y, z }
    }

    /// Create a new point with undefined (NaN) z.
    #[inline]
    pub fn new_xy(x: T, y: T) -> Self {
        Point::new(x, y, T::nan())
    }

    /// Create a point from a 2D position and a z value.
    #[inline]
    pub fn from_pos(pos: Vector2<T>, z: T) -> Self {
        Point::new(pos.x, pos.y, z)
    }

    /// The XY position of the point as a vector.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Returns `true` if the z component is defined (not NaN).
    #[inline]
    pub fn has_z(&self) -> bool {
        !self.z.is_nan()
    }

    /// Copy of the point with z replaced by the value given.
    #[inline]
    pub fn with_z(&self, z: T) -> Self {
        Point::new(self.x, self.y, z)
    }

    /// Fuzzy equal comparison of the XY components only using the `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_xy_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison of the XY components only using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq_xy(&self, other: Self) -> bool {
        self.fuzzy_eq_xy_eps(other, T::fuzzy_epsilon())
    }

    /// Fuzzy equal comparison including z using the `fuzzy_epsilon` given.
    ///
    /// Two undefined z values compare equal, an undefined z never equals a
    /// defined one.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        let z_eq = match (self.has_z(), other.has_z()) {
            (false, false) => true,
            (true, true) => self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon),
            _ => false,
        };
        self.fuzzy_eq_xy_eps(other, fuzzy_epsilon) && z_eq
    }

    /// Fuzzy equal comparison including z using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_z() {
        let p = Point::new_xy(1.0, 2.0);
        assert!(!p.has_z());
        assert!(p.with_z(3.0).has_z());

        let q = Point::new_xy(1.0, 2.0);
        assert!(p.fuzzy_eq(q));
        assert!(p.fuzzy_eq_xy(q.with_z(5.0)));
        assert!(!p.fuzzy_eq(q.with_z(5.0)));
    }

    #[test]
    fn xy_compare_ignores_z() {
        let p = Point::new(1.0, 2.0, 3.0);
        let q = Point::new(1.0 + 1e-10, 2.0, -7.0);
        assert!(p.fuzzy_eq_xy(q));
        assert!(!p.fuzzy_eq(q));
    }
}
