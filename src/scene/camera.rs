//! The two camera variants and their shared view/projection math.
//!
//! Both cameras keep a {forward, up} unit pair as kinematic state and are
//! driven once per tick with the held input signals and the elapsed time.
//! All axis-angle rotation goes through [`Vec3::rotated_around`], which
//! implements Rodrigues' formula.

use beryl::prelude::*;

use crate::core::input::{CameraInput, Viewport};

pub const NEAR_CLIP_PLANE: f32 = 0.1;
pub const FAR_CLIP_PLANE: f32 = 1000.0;

/// Orbit radius bounds. The lower bound keeps the eye off the target so
/// the view basis stays well defined.
pub const MIN_TARGET_DISTANCE: f32 = 0.0001;
pub const MAX_TARGET_DISTANCE: f32 = 15.0;

/// Capability contract shared by the camera variants. The projection is
/// variant-independent and comes as a default method.
pub trait SceneCamera {
    /// Advances the kinematic state by `dt` seconds of the given held
    /// signals. Signals are independent and additive; holding left and
    /// right together cancels out over the tick.
    fn update(&mut self, input: &CameraInput, dt: f32);

    fn view_matrix(&self) -> Mat4;

    fn projection_matrix(&self, fov: Angle, viewport: Viewport) -> Mat4 {
        perspective(fov, viewport.aspect_ratio(), NEAR_CLIP_PLANE, FAR_CLIP_PLANE)
    }
}

/// Right-handed look-from view matrix: basis {right, up, -forward} at
/// `eye`, with `right = -normalize(cross(forward, up))`.
fn look_from(eye: Vec3, forward: Vec3, up: Vec3) -> Mat4 {
    let right = -forward.cross(&up).normalized();

    #[rustfmt::skip]
    let view = Mat4::new(
        right.x, right.y, right.z, -right.dot(&eye),
        up.x, up.y, up.z, -up.dot(&eye),
        -forward.x, -forward.y, -forward.z, forward.dot(&eye),
        0.0, 0.0, 0.0, 1.0,
    );
    view
}

/// Symmetric OpenGL perspective frustum from a vertical field of view.
pub fn perspective(fov: Angle, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    let n = near;
    let f = far;
    let t = (fov * 0.5).tan() * n;
    let r = aspect_ratio * t;
    let l = -r;
    let b = -t;

    #[rustfmt::skip]
    let projection = Mat4::new(
        2.0 * n / (r - l), 0.0, (r + l) / (r - l), 0.0,
        0.0, 2.0 * n / (t - b), (t + b) / (t - b), 0.0,
        0.0, 0.0, -(f + n) / (f - n), -(2.0 * f * n) / (f - n),
        0.0, 0.0, -1.0, 0.0,
    );
    projection
}

/// Free-fly camera: turns about the world up axis and walks along its own
/// forward direction.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl FirstPersonCamera {
    /// Units per second of forward/backward travel.
    pub const MOVE_SPEED: f32 = 2.0;
    /// Degrees per second of turning.
    pub const ROTATE_SPEED: f32 = 140.0;

    pub fn new(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self {
            position,
            forward: (look_at - position).normalized(),
            up,
        }
    }

    fn turn(&mut self, angle: Angle) {
        let world_up = Unit::new_unchecked(Vec3::unit_y());
        self.forward = self.forward.rotated_around(&world_up, angle);
    }
}

impl SceneCamera for FirstPersonCamera {
    fn update(&mut self, input: &CameraInput, dt: f32) {
        let turn_step = Angle::from_deg(Self::ROTATE_SPEED * dt);
        if input.left {
            self.turn(turn_step);
        }
        if input.right {
            self.turn(-turn_step);
        }

        if input.forward {
            self.position += self.forward * (Self::MOVE_SPEED * dt);
        }
        if input.backward {
            self.position += self.forward * (-Self::MOVE_SPEED * dt);
        }
    }

    fn view_matrix(&self) -> Mat4 {
        look_from(self.position, self.forward, self.up)
    }
}

/// Camera orbiting a target on a sphere of adjustable radius.
///
/// Unlike [`FirstPersonCamera`], `forward` points *from* the target
/// outward to the eye, so the eye sits at `target + distance * forward`
/// and the view basis flips the direction when it is built.
#[derive(Debug, Clone)]
pub struct OrbitalCamera {
    pub target: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub distance_from_target: f32,
}

impl OrbitalCamera {
    /// Degrees per second, both yaw and pitch.
    pub const ROTATE_SPEED: f32 = 90.0;
    /// Degrees per second about the orbit axis.
    pub const ROLL_SPEED: f32 = 90.0;
    /// Units per second of radius change.
    pub const ZOOM_SPEED: f32 = 2.0;

    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            target,
            forward: (eye - target).normalized(),
            up,
            distance_from_target: (eye - target).norm(),
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        self.target + self.forward * self.distance_from_target
    }

    /// Restores the fixed home pose: looking at (0, 1, 0) from three
    /// units along +Z.
    pub fn reset(&mut self) {
        self.target = Vec3::new(0.0, 1.0, 0.0);
        self.up = Vec3::unit_y();
        self.distance_from_target = 3.0;
        let eye = Vec3::new(0.0, 1.0, 3.0);
        self.forward = (eye - self.target).normalized();
    }

    fn yaw(&mut self, angle: Angle) {
        let axis = Unit::new_unchecked(self.up);
        self.forward = self.forward.rotated_around(&axis, angle);
    }

    fn pitch(&mut self, angle: Angle) {
        let axis = Unit::new_normalize(self.forward.cross(&self.up));
        self.forward = self.forward.rotated_around(&axis, angle);
        self.up = self.up.rotated_around(&axis, angle);
    }

    fn roll(&mut self, angle: Angle) {
        let axis = Unit::new_unchecked(self.forward);
        self.up = self.up.rotated_around(&axis, angle);
    }
}

impl SceneCamera for OrbitalCamera {
    fn update(&mut self, input: &CameraInput, dt: f32) {
        let rotate_step = Angle::from_deg(Self::ROTATE_SPEED * dt);
        if input.left {
            self.yaw(rotate_step);
        }
        if input.right {
            self.yaw(-rotate_step);
        }
        if input.forward {
            self.pitch(rotate_step);
        }
        if input.backward {
            self.pitch(-rotate_step);
        }

        if input.zoom_in {
            self.distance_from_target -= Self::ZOOM_SPEED * dt;
        }
        if input.zoom_out {
            self.distance_from_target += Self::ZOOM_SPEED * dt;
        }
        self.distance_from_target = self
            .distance_from_target
            .max(MIN_TARGET_DISTANCE)
            .min(MAX_TARGET_DISTANCE);

        let roll_step = Angle::from_deg(Self::ROLL_SPEED * dt);
        if input.roll_left {
            self.roll(roll_step);
        }
        if input.roll_right {
            self.roll(-roll_step);
        }

        if input.reset {
            self.reset();
        }
    }

    fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        // from the eye's point of view the look direction flips
        let eye_forward = (self.target - eye).normalized();
        look_from(eye, eye_forward, self.up)
    }
}
