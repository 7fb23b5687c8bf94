use std::ops::Mul;

use crate::angle::Angle;
use crate::vector::{Vec3, Vec4};

/// A 4x4 matrix, stored row-major. Vectors transform as `v' = M * v`
/// (column vector on the right).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Mat4 {
    rows: [[f32; 4]; 4],
}

impl Mat4 {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        r0c0: f32, r0c1: f32, r0c2: f32, r0c3: f32,
        r1c0: f32, r1c1: f32, r1c2: f32, r1c3: f32,
        r2c0: f32, r2c1: f32, r2c2: f32, r2c3: f32,
        r3c0: f32, r3c1: f32, r3c2: f32, r3c3: f32,
    ) -> Self {
        Self {
            rows: [
                [r0c0, r0c1, r0c2, r0c3],
                [r1c0, r1c1, r1c2, r1c3],
                [r2c0, r2c1, r2c2, r2c3],
                [r3c0, r3c1, r3c2, r3c3],
            ],
        }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub const fn zero() -> Self {
        Self::from_rows([[0.0; 4]; 4])
    }

    #[rustfmt::skip]
    pub const fn translate(direction: Vec3) -> Self {
        Self::new(
            1.0, 0.0, 0.0, direction.x,
            0.0, 1.0, 0.0, direction.y,
            0.0, 0.0, 1.0, direction.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub const fn scale(factors: Vec3) -> Self {
        Self::new(
            factors.x, 0.0, 0.0, 0.0,
            0.0, factors.y, 0.0, 0.0,
            0.0, 0.0, factors.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_x(angle: Angle) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_y(angle: Angle) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::new(
            cos, 0.0, sin, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn rotation_z(angle: Angle) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::new(
            cos, -sin, 0.0, 0.0,
            sin, cos, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                out.rows[col][row] = self.rows[row][col];
            }
        }
        out
    }

    /// Transforms a position (w = 1). No perspective divide; use
    /// [`Mat4::mul`] with a [`Vec4`] when w matters.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (*self * Vec4::from_point(point)).xyz()
    }

    /// Transforms a direction (w = 0, translation ignored).
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        (*self * Vec4::from_direction(direction)).xyz()
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(m: Mat4) -> Self {
        m.rows
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.rows[row][k] * rhs.rows[k][col];
                }
                out.rows[row][col] = acc;
            }
        }
        out
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        let row = |i: usize| {
            Vec4::new(
                self.rows[i][0],
                self.rows[i][1],
                self.rows[i][2],
                self.rows[i][3],
            )
            .dot(&rhs)
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}
