use crate::math::Point;

/// A 2D affine transform stored as six components:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// mapping `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn from_rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn from_translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn transform_point(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// The analytic inverse, or `None` when the matrix is singular
    /// (zero or non-finite determinant).
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        Some(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.f - self.d * self.e) / det,
            (self.b * self.e - self.a * self.f) / det,
        ))
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Affine {
    type Output = Self;

    // (m1 * m2).transform_point(p) == m1.transform_point(m2.transform_point(p))
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.e + self.c * other.f + self.e,
            self.b * other.e + self.d * other.f + self.f,
        )
    }
}

impl From<Affine> for [f64; 6] {
    fn from(m: Affine) -> Self {
        [m.a, m.b, m.c, m.d, m.e, m.f]
    }
}

impl From<[f64; 6]> for Affine {
    fn from([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self { a, b, c, d, e, f }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_near(result: Point, expected: Point) {
        assert!(
            (result.x - expected.x).abs() < 1e-9 && (result.y - expected.y).abs() < 1e-9,
            "expected {expected:?}, got {result:?}"
        );
    }

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Point::new(3.5, -7.25);
        assert_eq!(Affine::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn translation_moves_points() {
        let m = Affine::from_translation(10.0, 20.0);
        assert_eq!(m.transform_point(Point::new(1.0, 2.0)), Point::new(11.0, 22.0));
    }

    #[test]
    fn scale_then_translate_composes_in_call_order() {
        // Post-multiplying T then S applies S to the point first.
        let m = Affine::from_translation(10.0, 0.0) * Affine::from_scale(2.0, 2.0);
        assert_eq!(m.transform_point(Point::new(3.0, 4.0)), Point::new(16.0, 8.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let m = Affine::from_rotation(std::f64::consts::FRAC_PI_2);
        assert_point_near(m.transform_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn mul_matches_nested_transform() {
        let m1 = Affine::from_rotation(0.3) * Affine::from_translation(5.0, -2.0);
        let m2 = Affine::from_scale(1.5, 0.5);
        let p = Point::new(-4.0, 9.0);
        assert_point_near(
            (m1 * m2).transform_point(p),
            m1.transform_point(m2.transform_point(p)),
        );
    }

    #[test]
    fn inverse_round_trips() {
        let m = Affine::from_translation(12.0, -3.0)
            * Affine::from_rotation(0.7)
            * Affine::from_scale(2.5, 0.25);
        let inv = m.try_inverse().unwrap();
        let p = Point::new(42.0, -17.0);
        assert_point_near(inv.transform_point(m.transform_point(p)), p);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(Affine::from_scale(0.0, 1.0).try_inverse().is_none());
        assert!(Affine::new(2.0, 4.0, 1.0, 2.0, 0.0, 0.0).try_inverse().is_none());
    }

    #[test]
    fn determinant_of_pure_scale() {
        assert_eq!(Affine::from_scale(2.0, 3.0).determinant(), 6.0);
        assert_eq!(Affine::IDENTITY.determinant(), 1.0);
    }
}
