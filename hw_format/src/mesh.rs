use crate::error::{FormatError, Result};
use beryl::prelude::*;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MESH_NAME: &str = "Unnamed";

/// A parsed vertex. `index` is the 1-based position the vertex holds in the
/// source file's numbering, assigned sequentially by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub index: u32,
    pub position: Vec3,
}

/// A parsed vertex normal, 1-based like [`Vertex`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    pub index: u32,
    pub direction: Vec3,
}

/// One corner of a face: a 1-based vertex reference plus optional texture
/// and normal references. `None` stands for an absent field in the source
/// (`v`, `v/vt`, `v//vn`, `v/vt/vn`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRef {
    pub vertex: u32,
    pub texture: Option<u32>,
    pub normal: Option<u32>,
}

impl FaceRef {
    pub fn vertex_only(vertex: u32) -> Self {
        Self {
            vertex,
            texture: None,
            normal: None,
        }
    }
}

/// A polygonal face. Three refs form a triangle, four a quad; anything
/// beyond the fourth ref is carried but ignored by flattening.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Face {
    pub refs: Vec<FaceRef>,
}

impl Face {
    pub fn is_quad(&self) -> bool {
        self.refs.len() >= 4
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub normals: Vec<Normal>,
    pub faces: Vec<Face>,
}

impl Default for MeshData {
    fn default() -> Self {
        Self {
            name: DEFAULT_MESH_NAME.into(),
            vertices: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl MeshData {
    /// Flattens all faces into a triangle index buffer. Quads {v1,v2,v3,v4}
    /// split along the fixed diagonal as (v4,v1,v3) then (v3,v1,v2);
    /// triangles pass through as (v1,v2,v3). Indices stay 1-based; shift by
    /// -1 for a 0-based target convention.
    pub fn triangulated_indices(&self) -> Vec<u32> {
        let mut indices = Vec::new();

        for face in &self.faces {
            if face.is_quad() {
                let [v1, v2, v3, v4] = [
                    face.refs[0].vertex,
                    face.refs[1].vertex,
                    face.refs[2].vertex,
                    face.refs[3].vertex,
                ];
                indices.extend_from_slice(&[v4, v1, v3]);
                indices.extend_from_slice(&[v3, v1, v2]);
            } else if face.refs.len() == 3 {
                indices.extend(face.refs.iter().map(|r| r.vertex));
            } else {
                warn!(
                    "Skipping degenerate face with {} reference(s)",
                    face.refs.len()
                );
            }
        }

        indices
    }

    /// Vertex positions in parse order, ready for upload.
    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn normal_directions(&self) -> Vec<Vec3> {
        self.normals.iter().map(|n| n.direction).collect()
    }

    /// Range-checks every face reference against the vertex/normal counts.
    /// The parser deliberately does not do this (forward references are
    /// structurally permitted); call this before handing the index buffer
    /// to a renderer if exactness is required.
    pub fn validate_indices(&self) -> Result<()> {
        for (face_idx, face) in self.faces.iter().enumerate() {
            for r in &face.refs {
                if r.vertex == 0 || r.vertex as usize > self.vertices.len() {
                    return Err(FormatError::VertexIndexOutOfRange {
                        face: face_idx,
                        vertex: r.vertex,
                        count: self.vertices.len(),
                    });
                }
                if let Some(normal) = r.normal {
                    if normal == 0 || normal as usize > self.normals.len() {
                        return Err(FormatError::NormalIndexOutOfRange {
                            face: face_idx,
                            normal,
                            count: self.normals.len(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize::<MeshData>(bytes)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        MeshData::from_bytes(&data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}
