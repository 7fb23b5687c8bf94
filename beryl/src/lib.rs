mod angle;
mod mat4;
mod norm;
mod unit;
mod vector;

#[cfg(test)]
pub mod test_util;

pub mod prelude {
    pub use crate::angle::{Angle, ToAngle};
    pub use crate::mat4::Mat4;
    pub use crate::norm::Normed;
    pub use crate::unit::Unit;
    pub use crate::vector::{Vec3, Vec4};
}

pub use angle::{Angle, ToAngle};
pub use mat4::Mat4;
pub use norm::Normed;
pub use unit::Unit;
pub use vector::{Vec3, Vec4};
