//! Grounds a parsed mesh: bounding-box center moved to X=0/Z=0, lowest
//! vertex resting on the Y=0 plane.

use beryl::prelude::*;
use hw_format::mesh::{MeshData, Vertex};
use log::warn;

/// Appended to the mesh name so a grounded mesh is recognizable.
pub const WORLD_ORIGIN_SUFFIX: &str = "AtWorldOrigin";

/// Returns a translated copy of `model`. The translation vector comes from
/// a single min/max pass over the vertices: X and Z move by the bounding
/// box midpoint, Y by the bounding box minimum. Faces and normals pass
/// through untouched; the input is never mutated.
pub fn move_to_world_origin(model: &MeshData) -> MeshData {
    if model.vertices.is_empty() {
        warn!("Mesh {:?} has no vertices, nothing to center", model.name);
        return model.clone();
    }

    let mut min = Vec3::new(f32::MAX, f32::MAX, f32::MAX);
    let mut max = Vec3::new(f32::MIN, f32::MIN, f32::MIN);

    for vertex in &model.vertices {
        let p = vertex.position;
        min = Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
        max = Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
    }

    // midpoint at X and Z, but the bottom of the bounding box lies flat
    // on the Y = 0 plane
    let translation = Vec3::new(
        min.x + (max.x - min.x) / 2.0,
        min.y,
        min.z + (max.z - min.z) / 2.0,
    );

    MeshData {
        name: format!("{}{}", model.name, WORLD_ORIGIN_SUFFIX),
        vertices: model
            .vertices
            .iter()
            .map(|v| Vertex {
                index: v.index,
                position: v.position - translation,
            })
            .collect(),
        normals: model.normals.clone(),
        faces: model.faces.clone(),
    }
}
