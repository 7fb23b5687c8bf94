//! Core of a walkable indoor 3D scene: OBJ mesh loading, transform
//! hierarchies and the two user-driven cameras. Rendering, input polling
//! and window management live with the host.

pub mod assets;
pub mod color;
pub mod core;
pub mod scene;
