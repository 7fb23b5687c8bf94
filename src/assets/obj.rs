//! Parses `.obj` mesh descriptions (https://en.wikipedia.org/wiki/Wavefront_.obj_file).
//!
//! The parser is line-oriented and strict: a malformed vertex, normal or
//! face definition aborts the whole parse, no partial mesh is returned.
//! Unrecognized line kinds are skipped, they are not errors.

use std::fs;
use std::io;
use std::path::Path;

use hw_format::mesh::{Face, FaceRef, MeshData, Normal, Vertex, DEFAULT_MESH_NAME};
use log::{debug, info};

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
    #[error("Failed to read mesh source: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: field {field} of a {kind} definition is not a number")]
    BadCoordinate {
        line: usize,
        field: usize,
        kind: &'static str,
    },
    #[error("Line {line}: expected 3 fields in a {kind} definition, found {found}")]
    WrongCoordinateCount {
        line: usize,
        kind: &'static str,
        found: usize,
    },
    #[error("Line {line}: face reference \"{token}\" is not of the form v, v/vt, v//vn or v/vt/vn")]
    BadFaceReference { line: usize, token: String },
    #[error("Line {line}: face definition has no vertex references")]
    EmptyFace { line: usize },
}

pub fn parse_file(path: &Path) -> Result<MeshData, ParserError> {
    info!("Loading mesh: {}", path.display());
    let source = fs::read_to_string(path)?;
    parse_str(&source)
}

/// Parses an in-memory mesh description. Line numbers in errors are
/// 1-based, counted over `\n`-separated lines.
pub fn parse_str(source: &str) -> Result<MeshData, ParserError> {
    let mut mesh = MeshData::default();
    let mut name: Option<String> = None;

    // the file's own numbering is ignored, references are resolved
    // against these sequential 1-based counters
    let mut vertex_index: u32 = 1;
    let mut normal_index: u32 = 1;

    for (line_idx, line) in source.split('\n').enumerate() {
        let line_no = line_idx + 1;

        let mut fields = line.split_whitespace();
        let tag = match fields.next() {
            Some(tag) => tag,
            None => continue, // blank line
        };
        let rest: Vec<&str> = fields.collect();

        match tag {
            "#" => debug!("Comment: {:?}", line),
            // the last name definition wins, even an empty one
            "o" => name = Some(line.trim_start()[tag.len()..].trim().into()),
            "v" => {
                mesh.vertices.push(Vertex {
                    index: vertex_index,
                    position: parse_coordinates(&rest, line_no, "vertex")?.into(),
                });
                vertex_index += 1;
            }
            "vn" => {
                mesh.normals.push(Normal {
                    index: normal_index,
                    direction: parse_coordinates(&rest, line_no, "vertex normal")?.into(),
                });
                normal_index += 1;
            }
            // texture coordinates are accepted but unused
            "vt" => debug!("Ignoring texture coordinates: {:?}", line),
            "f" => mesh.faces.push(parse_face(&rest, line_no)?),
            _ => debug!("Ignoring line {}: {:?}", line_no, line),
        }
    }

    mesh.name = name.unwrap_or_else(|| DEFAULT_MESH_NAME.into());
    Ok(mesh)
}

fn parse_coordinates(
    fields: &[&str],
    line: usize,
    kind: &'static str,
) -> Result<[f32; 3], ParserError> {
    if fields.len() != 3 {
        return Err(ParserError::WrongCoordinateCount {
            line,
            kind,
            found: fields.len(),
        });
    }

    let mut coords = [0.0f32; 3];
    for (field, text) in fields.iter().enumerate() {
        coords[field] = text
            .parse()
            .map_err(|_| ParserError::BadCoordinate { line, field, kind })?;
    }

    Ok(coords)
}

fn parse_face(tokens: &[&str], line: usize) -> Result<Face, ParserError> {
    if tokens.is_empty() {
        return Err(ParserError::EmptyFace { line });
    }

    let refs = tokens
        .iter()
        .map(|token| parse_face_ref(token, line))
        .collect::<Result<_, _>>()?;

    Ok(Face { refs })
}

/// A face reference is `v`, `v/vt`, `v//vn` or `v/vt/vn`; indices are
/// 1-based and deliberately not range-checked here (faces may precede
/// the vertices they reference), see `MeshData::validate_indices`.
fn parse_face_ref(token: &str, line: usize) -> Result<FaceRef, ParserError> {
    let bad = || ParserError::BadFaceReference {
        line,
        token: token.into(),
    };

    let parts: Vec<&str> = token.split('/').collect();
    match parts.len() {
        1 => Ok(FaceRef {
            vertex: parts[0].parse().map_err(|_| bad())?,
            texture: None,
            normal: None,
        }),
        2 => Ok(FaceRef {
            vertex: parts[0].parse().map_err(|_| bad())?,
            texture: Some(parts[1].parse().map_err(|_| bad())?),
            normal: None,
        }),
        3 => Ok(FaceRef {
            vertex: parts[0].parse().map_err(|_| bad())?,
            texture: if parts[1].is_empty() {
                None
            } else {
                Some(parts[1].parse().map_err(|_| bad())?)
            },
            normal: Some(parts[2].parse().map_err(|_| bad())?),
        }),
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_line_parses_floats_in_order() {
        let mesh = parse_str("v 1.5 -2.25 3.0").unwrap();
        assert_eq!(mesh.vertices.len(), 1);
        assert_eq!(mesh.vertices[0].index, 1);
        assert_eq!(mesh.vertices[0].position, [1.5, -2.25, 3.0].into());
    }

    #[test]
    fn vertex_indices_count_sequentially_from_one() {
        let mesh = parse_str("v 0 0 0\nv 1 1 1\nvn 0 1 0").unwrap();
        assert_eq!(mesh.vertices[1].index, 2);
        assert_eq!(mesh.normals[0].index, 1);
    }

    #[test]
    fn bad_vertex_float_is_fatal() {
        match parse_str("v 0 0 0\nv 1 banana 3") {
            Err(ParserError::BadCoordinate { line: 2, field: 1, .. }) => {}
            other => panic!("expected BadCoordinate, got {:?}", other.map(|m| m.name)),
        }
    }

    #[test]
    fn wrong_vertex_field_count_is_fatal() {
        assert!(matches!(
            parse_str("v 1 2"),
            Err(ParserError::WrongCoordinateCount { line: 1, found: 2, .. })
        ));
        assert!(matches!(
            parse_str("vn 1 2 3 4"),
            Err(ParserError::WrongCoordinateCount { found: 4, .. })
        ));
    }

    #[test]
    fn face_reference_forms_round_trip() {
        let mesh = parse_str("f 1 2/7 3//5 4/8/6").unwrap();
        let refs = &mesh.faces[0].refs;
        assert_eq!(refs[0], FaceRef { vertex: 1, texture: None, normal: None });
        assert_eq!(refs[1], FaceRef { vertex: 2, texture: Some(7), normal: None });
        assert_eq!(refs[2], FaceRef { vertex: 3, texture: None, normal: Some(5) });
        assert_eq!(refs[3], FaceRef { vertex: 4, texture: Some(8), normal: Some(6) });
    }

    #[test]
    fn face_reference_with_too_many_parts_is_fatal() {
        assert!(matches!(
            parse_str("f 1/2/3/4 5 6"),
            Err(ParserError::BadFaceReference { line: 1, .. })
        ));
    }

    #[test]
    fn face_reference_with_non_integer_field_is_fatal() {
        assert!(matches!(
            parse_str("f 1 2 x//3"),
            Err(ParserError::BadFaceReference { .. })
        ));
    }

    #[test]
    fn face_without_references_is_fatal() {
        assert!(matches!(
            parse_str("f"),
            Err(ParserError::EmptyFace { line: 1 })
        ));
    }

    #[test]
    fn face_indices_are_not_range_checked() {
        // faces may precede the vertices they reference
        let mesh = parse_str("f 1 2 3\nv 0 0 0").unwrap();
        assert_eq!(mesh.faces.len(), 1);
        assert!(mesh.validate_indices().is_err());
    }

    #[test]
    fn object_name_defaults_and_last_definition_wins() {
        assert_eq!(parse_str("v 0 0 0").unwrap().name, "Unnamed");
        let mesh = parse_str("o First\nv 0 0 0\no  Second Name \n").unwrap();
        assert_eq!(mesh.name, "Second Name");
    }

    #[test]
    fn bare_object_line_overwrites_an_earlier_name() {
        let mesh = parse_str("o First\nv 0 0 0\no\n").unwrap();
        assert_eq!(mesh.name, "");
    }

    #[test]
    fn comments_textures_and_unknown_lines_are_skipped() {
        let source = "# a comment\nvt 0.5 0.5\nmtllib scene.mtl\ns off\n\nv 1 2 3";
        let mesh = parse_str(source).unwrap();
        assert_eq!(mesh.vertices.len(), 1);
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn single_triangle_end_to_end() {
        let mesh = parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3").unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.faces.len(), 1);
        assert_eq!(
            mesh.faces[0].refs.iter().map(|r| r.vertex).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(mesh.triangulated_indices(), vec![1, 2, 3]);
    }

    #[test]
    fn quad_parses_and_triangulates() {
        let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4";
        let mesh = parse_str(source).unwrap();
        assert!(mesh.faces[0].is_quad());
        assert_eq!(mesh.triangulated_indices(), vec![4, 1, 3, 3, 1, 2]);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        assert!(matches!(
            parse_file(Path::new("/nonexistent/model.obj")),
            Err(ParserError::Io(_))
        ));
    }
}
