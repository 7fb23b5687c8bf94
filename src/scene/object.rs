use std::rc::Rc;

use beryl::prelude::*;
use hw_format::mesh::MeshData;

use crate::color::Color;
use crate::scene::transform::Transform;

/// Scene-level role of an object, used by the group visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    General,
    Wall,
    Roof,
}

/// One placed drawable: a shared immutable mesh, its own transform and the
/// cached matrices/color the host renderer binds.
///
/// The cached model matrix is NOT kept in sync with `transform`; callers
/// mutate the transform and then explicitly call [`compute_model_matrix`]
/// (or let a collection overwrite the matrix). View and projection are
/// pushed by the scene driver each tick / on camera change.
///
/// [`compute_model_matrix`]: SceneObject::compute_model_matrix
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: Rc<MeshData>,
    pub transform: Transform,
    pub category: ObjectCategory,
    model_matrix: Mat4,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    color: Color,
    active: bool,
}

impl SceneObject {
    pub fn new(mesh: Rc<MeshData>) -> Self {
        Self {
            mesh,
            transform: Transform::default(),
            category: ObjectCategory::General,
            model_matrix: Mat4::identity(),
            view_matrix: Mat4::identity(),
            projection_matrix: Mat4::identity(),
            color: Color::WHITE,
            active: true,
        }
    }

    pub fn with_category(mesh: Rc<MeshData>, category: ObjectCategory) -> Self {
        Self {
            category,
            ..Self::new(mesh)
        }
    }

    /// Recomputes the cached world matrix from the object's own transform.
    pub fn compute_model_matrix(&mut self) {
        self.model_matrix = self.transform.model_matrix();
    }

    /// Overwrites the cached world matrix, used by collections to install
    /// a parent-composed matrix.
    pub fn set_model_matrix(&mut self, matrix: Mat4) {
        self.model_matrix = matrix;
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    pub fn set_view_matrix(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn set_projection_matrix(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The triangle index buffer the renderer binds: triangulated and
    /// shifted to the 0-based convention. Face references are taken as
    /// stored; a mesh that skipped `MeshData::validate_indices` can
    /// contain a zero reference, which wraps to a garbage index here
    /// instead of panicking.
    pub fn index_buffer(&self) -> Vec<u32> {
        self.mesh
            .triangulated_indices()
            .into_iter()
            .map(|i| i.wrapping_sub(1))
            .collect()
    }
}
