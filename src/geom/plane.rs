use super::Point;
use crate::core::traits::Real;

/// A plane in 3D space, used to evaluate z values for geometry whose vertices
/// carry z.
///
/// Stored as the implicit form `nx*x + ny*y + nz*z + d = 0` with a unit
/// normal.
#[derive(Debug, Copy, Clone)]
pub struct Plane<T = f64> {
    nx: T,
    ny: T,
    nz: T,
    d: T,
}

impl<T> Plane<T>
where
    T: Real,
{
    /// Best fit plane through the vertex cycle given, using the Newell normal
    /// (sum of edge cross products) and the centroid of the contributing
    /// vertices.
    ///
    /// Vertices with undefined z are skipped. Returns `None` when fewer than
    /// three vertices contribute or the Newell normal degenerates to zero
    /// length (collinear input).
    pub fn fit(points: &[Point<T>]) -> Option<Self> {
        let usable: Vec<Point<T>> = points.iter().copied().filter(|p| p.has_z()).collect();
        if usable.len() < 3 {
            return None;
        }

        let mut nx = T::zero();
        let mut ny = T::zero();
        let mut nz = T::zero();
        let mut cx = T::zero();
        let mut cy = T::zero();
        let mut cz = T::zero();
        let n = usable.len();
        for i in 0..n {
            let p = usable[i];
            let q = usable[(i + 1) % n];
            nx = nx + (p.y - q.y) * (p.z + q.z);
            ny = ny + (p.z - q.z) * (p.x + q.x);
            nz = nz + (p.x - q.x) * (p.y + q.y);
            cx = cx + p.x;
            cy = cy + p.y;
            cz = cz + p.z;
        }

        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        if len.fuzzy_eq_zero() {
            return None;
        }
        nx = nx / len;
        ny = ny / len;
        nz = nz / len;

        let count = T::from(n).unwrap();
        let d = -(nx * cx / count + ny * cy / count + nz * cz / count);
        Some(Plane { nx, ny, nz, d })
    }

    /// The z value of the plane at the XY position given.
    ///
    /// Returns NaN (undefined) when the plane is vertical (normal z fuzzy
    /// zero).
    pub fn z_at(&self, x: T, y: T) -> T {
        if self.nz.fuzzy_eq_zero() {
            return T::nan();
        }
        -(self.nx * x + self.ny * y + self.d) / self.nz
    }
}
