//! Mesh loading and the indexed triangle mesh consumed by the box engine.

pub mod obj;
pub mod trimesh;

pub use obj::{load_points, read_obj};
pub use trimesh::TriMesh;
