use beryl::prelude::*;

use crate::scene::object::SceneObject;
use crate::scene::transform::Transform;

/// A one-level grouping of objects under a shared parent transform.
///
/// Nesting is not supported; a collection holds objects, never other
/// collections. Like [`SceneObject`], matrices are only recomputed on an
/// explicit [`update_transforms`] call, so members stay stale until the
/// caller asks for a recompute.
///
/// [`update_transforms`]: Collection::update_transforms
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub objects: Vec<SceneObject>,
    pub transform: Transform,
}

impl Collection {
    pub fn new(transform: Transform) -> Self {
        Self {
            objects: Vec::new(),
            transform,
        }
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Installs `parent * local` as each member's world matrix. The local
    /// transforms themselves are left untouched, so moving the parent and
    /// recomputing again works as expected.
    pub fn update_transforms(&mut self) {
        let parent = self.transform.model_matrix();
        for object in &mut self.objects {
            object.set_model_matrix(parent * object.transform.model_matrix());
        }
    }

    /// Dissolves the group, handing its members over to the caller. Their
    /// world matrices keep whatever the last recompute installed.
    pub fn into_objects(self) -> Vec<SceneObject> {
        self.objects
    }
}
