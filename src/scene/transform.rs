use beryl::prelude::*;

/// Position, Euler rotation (radians) and per-axis scale of one placed
/// object or collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    /// Leaves the object where it is.
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            rotation: Vec3::zero(),
            scale: Vec3::one(),
        }
    }
}

impl Transform {
    /// Builds `T * (Rz * Ry * Rx) * S`: with `v' = M * v`, scale applies
    /// first, then rotation, then translation. The rotation factor order
    /// is part of the contract, swapping it changes the orientation of
    /// anything rotated around more than one axis.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Mat4::rotation_z(Angle::from_rad(self.rotation.z))
            * Mat4::rotation_y(Angle::from_rad(self.rotation.y))
            * Mat4::rotation_x(Angle::from_rad(self.rotation.x));

        Mat4::translate(self.position) * rotation * Mat4::scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(is: Vec3, should: Vec3) {
        assert!(
            (is - should).norm() < 1e-6,
            "is: {:?} should: {:?}",
            is,
            should
        );
    }

    #[test]
    fn pure_translation_maps_origin_to_position() {
        let transform = Transform {
            position: Vec3::new(4.0, -2.0, 9.5),
            ..Transform::default()
        };

        let p = transform.model_matrix().transform_point(Vec3::zero());
        assert_eq!(p, Vec3::new(4.0, -2.0, 9.5));
    }

    #[test]
    fn scale_applies_before_translation() {
        let transform = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            scale: Vec3::new(2.0, 2.0, 2.0),
            ..Transform::default()
        };

        let p = transform.model_matrix().transform_point(Vec3::one());
        assert_close(p, Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn rotation_factors_compose_z_y_x() {
        // X rotation hits the vertex first: (0,1,0) -> (0,0,1) -> (1,0,0).
        let transform = Transform {
            rotation: Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0),
            ..Transform::default()
        };

        let p = transform.model_matrix().transform_point(Vec3::unit_y());
        assert_close(p, Vec3::unit_x());
    }

    #[test]
    fn single_axis_rotation_matches_axis_matrix() {
        let transform = Transform {
            rotation: Vec3::new(0.0, 0.3, 0.0),
            ..Transform::default()
        };

        let direct = Mat4::rotation_y(Angle::from_rad(0.3));
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_close(
            transform.model_matrix().transform_point(p),
            direct.transform_point(p),
        );
    }
}
