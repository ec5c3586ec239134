//! 3D vector algebra on the sphere: dot/cross products, the spherical angle
//! between two vectors, and triangle area via the spherical-excess
//! (l'Huilier) formula.

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// `x` component.
    pub x: f64,
    /// `y` component.
    pub y: f64,
    /// `z` component.
    pub z: f64,
}

impl Vec3 {
    /// Initializes a new 3D vector with the specified component values.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm (`‖v‖`).
    #[must_use]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y.mul_add(other.y, self.z * other.z))
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scales every component by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Returns `self` normalized to unit length.
    ///
    /// The result is meaningless for a zero vector; callers work with
    /// vectors known to be nonzero (cell centers, cross products of
    /// non-antipodal points).
    #[must_use]
    pub fn normalized(self) -> Self {
        self.scale(1.0 / self.norm())
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Spherical angle between two nonzero vectors (radians), robust across the
/// whole range via `atan2(‖x × y‖, x · y)` rather than `acos` on a normalized
/// dot product.
#[must_use]
pub fn angle(x: Vec3, y: Vec3) -> f64 {
    x.cross(y).norm().atan2(x.dot(y))
}

/// Area of the spherical triangle `(a, b, c)` on a sphere of radius `radius`,
/// via l'Huilier's theorem.
///
/// Degenerate triangles (collinear on a great circle, or a repeated vertex)
/// yield `0.0` rather than a `NaN` from a negative square root.
#[must_use]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3, radius: f64) -> f64 {
    let s1 = angle(a, b) / 2.0;
    let s2 = angle(b, c) / 2.0;
    let s3 = angle(c, a) / 2.0;
    let s = (s1 + s2 + s3) / 2.0;

    let t = s.tan() * (s - s1).tan() * (s - s2).tan() * (s - s3).tan();

    if t > 0.0 {
        4.0 * t.sqrt().atan() * radius * radius
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "./vector_tests.rs"]
mod tests;
