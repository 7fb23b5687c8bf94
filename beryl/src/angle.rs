use std::ops::{Mul, Neg};

/// Shorthand for building angles from bare floats: `90.0.deg()`, `0.5.rad()`.
pub trait ToAngle: Sized {
    fn rad(self) -> Angle;
    fn deg(self) -> Angle;
}

impl ToAngle for f32 {
    fn rad(self) -> Angle {
        Angle::from_rad(self)
    }

    fn deg(self) -> Angle {
        Angle::from_deg(self)
    }
}

/// An angle, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    const PI_180: f32 = std::f32::consts::PI / 180.0;

    pub const fn from_rad(radians: f32) -> Self {
        Self { radians }
    }

    pub fn from_deg(degrees: f32) -> Self {
        Self::from_rad(degrees * Self::PI_180)
    }

    pub fn to_rad(self) -> f32 {
        self.radians
    }

    pub fn to_deg(self) -> f32 {
        self.radians / Self::PI_180
    }

    pub fn sin(self) -> f32 {
        self.radians.sin()
    }

    pub fn cos(self) -> f32 {
        self.radians.cos()
    }

    pub fn tan(self) -> f32 {
        self.radians.tan()
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle::from_rad(-self.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f32) -> Self::Output {
        Angle::from_rad(self.radians * rhs)
    }
}
