//! Scene assembly and the per-tick driver loop.

pub mod camera;
pub mod collection;
pub mod object;
pub mod transform;

use std::path::Path;
use std::rc::Rc;

use beryl::prelude::*;
use log::info;

use crate::assets::obj::{self, ParserError};
use crate::assets::postprocess;
use hw_format::error::FormatError;
use crate::color::ColorSampler;
use crate::core::input::{CameraInput, SceneEvent, Viewport};
use crate::scene::camera::{FirstPersonCamera, OrbitalCamera, SceneCamera};
use crate::scene::collection::Collection;
use crate::scene::object::{ObjectCategory, SceneObject};

/// Scale applied to every freshly loaded object; placement logic
/// overrides it afterwards.
pub const DEFAULT_OBJECT_SCALE: f32 = 0.5;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to parse model: {0}")]
    Parse(#[from] ParserError),
    #[error("Model is not renderable: {0}")]
    InvalidMesh(#[from] FormatError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraVariant {
    FirstPerson,
    Orbital,
}

/// Owns the placed objects, both camera variants and the matrices shared
/// with them.
///
/// The view matrix is recomputed from the active camera every [`tick`]
/// and pushed into each object; the projection only changes when the
/// camera variant or viewport does.
///
/// [`tick`]: Scene::tick
pub struct Scene {
    objects: Vec<SceneObject>,
    first_person: FirstPersonCamera,
    orbital: OrbitalCamera,
    active: CameraVariant,
    viewport: Viewport,
    fov: Angle,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    colors: ColorSampler,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        let start = Vec3::new(-5.0, 1.0, 0.0);
        let look_at = Vec3::new(0.0, 1.0, 0.0);
        let first_person = FirstPersonCamera::new(start, look_at, Vec3::unit_y());
        let orbital = OrbitalCamera::new(start, look_at, Vec3::unit_y());

        let active = CameraVariant::Orbital;
        let fov = Angle::from_deg(90.0);
        let view_matrix = orbital.view_matrix();
        let projection_matrix = orbital.projection_matrix(fov, viewport);

        Self {
            objects: Vec::new(),
            first_person,
            orbital,
            active,
            viewport,
            fov,
            view_matrix,
            projection_matrix,
            colors: ColorSampler::default(),
        }
    }

    fn active_camera(&self) -> &dyn SceneCamera {
        match self.active {
            CameraVariant::FirstPerson => &self.first_person,
            CameraVariant::Orbital => &self.orbital,
        }
    }

    fn active_camera_mut(&mut self) -> &mut dyn SceneCamera {
        match self.active {
            CameraVariant::FirstPerson => &mut self.first_person,
            CameraVariant::Orbital => &mut self.orbital,
        }
    }

    /// Installs the current shared matrices and takes ownership of the
    /// object. Returns its index.
    pub fn add_object(&mut self, mut object: SceneObject) -> usize {
        object.set_view_matrix(self.view_matrix);
        object.set_projection_matrix(self.projection_matrix);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Dissolves a collection into the scene. World matrices are taken
    /// as-is; call [`Collection::update_transforms`] first if the group
    /// transform matters.
    pub fn adopt(&mut self, collection: Collection) {
        for object in collection.into_objects() {
            self.add_object(object);
        }
    }

    /// Parses, grounds and places an OBJ model at the world origin with
    /// the default scale and a sampled color. Returns the object's index.
    ///
    /// Face references are range-checked here; the parser itself admits
    /// dangling ones, but nothing unrenderable enters the scene.
    pub fn load_object<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LoadError> {
        self.load_object_as(path, ObjectCategory::General)
    }

    pub fn load_object_as<P: AsRef<Path>>(
        &mut self,
        path: P,
        category: ObjectCategory,
    ) -> Result<usize, LoadError> {
        let parsed = obj::parse_file(path.as_ref())?;
        let grounded = postprocess::move_to_world_origin(&parsed);
        grounded.validate_indices()?;
        info!(
            "Loaded {:?}: {} vertices, {} faces",
            grounded.name,
            grounded.vertices.len(),
            grounded.faces.len()
        );

        let mut object = SceneObject::with_category(Rc::new(grounded), category);
        object.transform.scale = Vec3::one() * DEFAULT_OBJECT_SCALE;
        object.compute_model_matrix();
        object.set_color(self.colors.next());

        Ok(self.add_object(object))
    }

    /// Advances the active camera and pushes the fresh view matrix into
    /// every object.
    pub fn tick(&mut self, input: &CameraInput, dt: f32) {
        self.active_camera_mut().update(input, dt);
        self.view_matrix = self.active_camera().view_matrix();
        for object in &mut self.objects {
            object.set_view_matrix(self.view_matrix);
        }
    }

    pub fn handle_event(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::SwitchCamera => self.switch_camera(),
            SceneEvent::ReassignColors => self.reassign_colors(),
            SceneEvent::ToggleWalls => self.toggle_category(ObjectCategory::Wall),
            SceneEvent::ToggleRoofs => self.toggle_category(ObjectCategory::Roof),
        }
    }

    fn switch_camera(&mut self) {
        self.active = match self.active {
            CameraVariant::FirstPerson => CameraVariant::Orbital,
            CameraVariant::Orbital => CameraVariant::FirstPerson,
        };
        info!("Switched to {:?} camera", self.active);

        self.view_matrix = self.active_camera().view_matrix();
        self.projection_matrix = self.active_camera().projection_matrix(self.fov, self.viewport);
        for object in &mut self.objects {
            object.set_view_matrix(self.view_matrix);
            object.set_projection_matrix(self.projection_matrix);
        }
    }

    fn reassign_colors(&mut self) {
        for object in &mut self.objects {
            let color = self.colors.next();
            object.set_color(color);
        }
    }

    fn toggle_category(&mut self, category: ObjectCategory) {
        for object in &mut self.objects {
            if object.category == category {
                object.toggle_active();
            }
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.projection_matrix = self.active_camera().projection_matrix(self.fov, viewport);
        for object in &mut self.objects {
            object.set_projection_matrix(self.projection_matrix);
        }
    }

    pub fn active_variant(&self) -> CameraVariant {
        self.active
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::obj::parse_str;
    use hw_format::mesh::MeshData;

    fn triangle_mesh() -> Rc<MeshData> {
        Rc::new(parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3").unwrap())
    }

    fn test_scene() -> Scene {
        Scene::new(Viewport::new(800, 600))
    }

    #[test]
    fn starts_on_orbital_camera() {
        let scene = test_scene();
        assert_eq!(scene.active_variant(), CameraVariant::Orbital);
        assert_eq!(scene.view_matrix(), scene.orbital.view_matrix());
    }

    #[test]
    fn switching_camera_refreshes_object_matrices() {
        let mut scene = test_scene();
        scene.add_object(SceneObject::new(triangle_mesh()));

        scene.handle_event(SceneEvent::SwitchCamera);

        assert_eq!(scene.active_variant(), CameraVariant::FirstPerson);
        assert_eq!(scene.view_matrix(), scene.first_person.view_matrix());
        assert_eq!(scene.objects()[0].view_matrix(), scene.view_matrix());

        scene.handle_event(SceneEvent::SwitchCamera);
        assert_eq!(scene.active_variant(), CameraVariant::Orbital);
    }

    #[test]
    fn tick_drives_only_the_active_camera() {
        let mut scene = test_scene();
        scene.add_object(SceneObject::new(triangle_mesh()));
        let fp_before = scene.first_person.view_matrix();
        let view_before = scene.view_matrix();

        scene.tick(&CameraInput::headings(true, false, false, false), 0.1);

        assert_ne!(scene.view_matrix(), view_before);
        assert_eq!(scene.first_person.view_matrix(), fp_before);
        assert_eq!(scene.objects()[0].view_matrix(), scene.view_matrix());
    }

    #[test]
    fn toggles_only_hit_their_category() {
        let mut scene = test_scene();
        scene.add_object(SceneObject::new(triangle_mesh()));
        scene.add_object(SceneObject::with_category(triangle_mesh(), ObjectCategory::Wall));
        scene.add_object(SceneObject::with_category(triangle_mesh(), ObjectCategory::Roof));

        scene.handle_event(SceneEvent::ToggleWalls);
        assert!(scene.objects()[0].is_active());
        assert!(!scene.objects()[1].is_active());
        assert!(scene.objects()[2].is_active());

        scene.handle_event(SceneEvent::ToggleRoofs);
        scene.handle_event(SceneEvent::ToggleWalls);
        assert!(scene.objects()[1].is_active());
        assert!(!scene.objects()[2].is_active());
    }

    #[test]
    fn reassigning_colors_changes_every_object() {
        let mut scene = test_scene();
        scene.add_object(SceneObject::new(triangle_mesh()));
        scene.add_object(SceneObject::new(triangle_mesh()));
        let before: Vec<_> = scene.objects().iter().map(|o| o.color()).collect();

        scene.handle_event(SceneEvent::ReassignColors);

        for (object, old) in scene.objects().iter().zip(before) {
            assert_ne!(object.color(), old);
        }
        assert_ne!(scene.objects()[0].color(), scene.objects()[1].color());
    }

    #[test]
    fn adopted_collection_members_receive_scene_matrices() {
        let mut scene = test_scene();
        let mut collection = Collection::default();
        collection.transform.position = Vec3::new(2.0, 0.0, 0.0);
        collection.add(SceneObject::new(triangle_mesh()));
        collection.update_transforms();

        scene.adopt(collection);

        let object = &scene.objects()[0];
        assert_eq!(object.view_matrix(), scene.view_matrix());
        assert_eq!(object.model_matrix(), Mat4::translate(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn load_object_grounds_scales_and_colors() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = std::env::temp_dir().join("housewalk_scene_load_test.obj");
        std::fs::write(&path, "o Crate\nv 2 1 2\nv 4 1 2\nv 4 3 2\nv 2 3 2\nf 1 2 3 4\n")?;

        let mut scene = test_scene();
        let index = scene.load_object(&path)?;
        std::fs::remove_file(&path)?;

        let object = &scene.objects()[index];
        assert_eq!(object.mesh.name, "CrateAtWorldOrigin");
        assert_eq!(object.transform.scale, Vec3::one() * 0.5);
        assert_eq!(
            object.model_matrix(),
            Mat4::scale(Vec3::one() * DEFAULT_OBJECT_SCALE)
        );
        assert_ne!(object.color(), crate::color::Color::WHITE);
        assert_eq!(object.index_buffer(), vec![3, 0, 2, 2, 0, 1]);
        Ok(())
    }

    #[test]
    fn missing_model_file_surfaces_io_error() {
        let mut scene = test_scene();
        let result = scene.load_object("definitely/not/here.obj");
        assert!(matches!(result, Err(LoadError::Parse(ParserError::Io(_)))));
    }

    #[test]
    fn load_rejects_mesh_with_dangling_face_reference() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join("housewalk_scene_dangling_ref_test.obj");
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n")?;

        let mut scene = test_scene();
        let result = scene.load_object(&path);
        std::fs::remove_file(&path)?;

        assert!(matches!(
            result,
            Err(LoadError::InvalidMesh(
                FormatError::VertexIndexOutOfRange { vertex: 0, .. }
            ))
        ));
        assert!(scene.objects().is_empty());
        Ok(())
    }
}
