use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Serialization Error: {0}")]
    SerializationError(#[from] Box<bincode::ErrorKind>),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Face {face} references vertex {vertex}, but the mesh only has {count} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        vertex: u32,
        count: usize,
    },
    #[error("Face {face} references normal {normal}, but the mesh only has {count} normals")]
    NormalIndexOutOfRange {
        face: usize,
        normal: u32,
        count: usize,
    },
}
