//! 2-D affine transform.
//!
//! Row-major 2x3 matrix in the usual affine layout:
//!
//! ```text
//! | a  c  tx |
//! | b  d  ty |
//! ```
//!
//! Behaviors compose transforms incrementally (translate-by, rotate-by)
//! rather than setting absolute positions, so `then` keeps the existing
//! transform on the left.

use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            tx: dx,
            ty: dy,
            ..Self::IDENTITY
        }
    }

    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// `self` applied first, then `next`.
    pub fn then(&self, next: Transform2D) -> Self {
        Self {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            tx: self.tx * next.a + self.ty * next.c + next.tx,
            ty: self.tx * next.b + self.ty * next.d + next.ty,
        }
    }

    pub fn translated_by(&self, dx: f32, dy: f32) -> Self {
        self.then(Self::translation(dx, dy))
    }

    pub fn rotated_by(&self, angle: f32) -> Self {
        self.then(Self::rotation(angle))
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.a + point.y * self.c + self.tx,
            point.x * self.b + point.y * self.d + self.ty,
        )
    }

    /// The rotation component, in radians.
    pub fn rotation_angle(&self) -> f32 {
        self.b.atan2(self.a)
    }

    /// The translation component.
    pub fn translation_offset(&self) -> Point {
        Point::new(self.tx, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "expected {b}, got {a}");
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Point::new(3.0, -4.0);
        assert_eq!(Transform2D::IDENTITY.apply(p), p);
    }

    #[test]
    fn translations_accumulate() {
        let t = Transform2D::IDENTITY
            .translated_by(10.0, 0.0)
            .translated_by(-3.0, 5.0);
        assert_eq!(t.translation_offset(), Point::new(7.0, 5.0));
    }

    #[test]
    fn rotations_accumulate() {
        let step = 0.2_f32;
        let mut t = Transform2D::IDENTITY;
        for _ in 0..5 {
            t = t.rotated_by(step);
        }
        assert_close(t.rotation_angle(), 1.0);
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let t = Transform2D::rotation(std::f32::consts::FRAC_PI_2);
        let p = t.apply(Point::new(1.0, 0.0));
        assert_close(p.x, 0.0);
        assert_close(p.y, 1.0);
    }
}
