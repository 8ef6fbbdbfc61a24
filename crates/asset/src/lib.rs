//! Asset loading (meshes).
//! E1: OBJ importer producing flat, centered position/normal buffers
//! ready for a non-indexed triangle-list draw.

pub mod error;
pub mod mesh;
pub mod obj;

pub use error::ObjError;
pub use mesh::MeshBuffers;
pub use obj::{FacePolicy, ObjLoader, load_obj_from_path, load_obj_from_reader, load_obj_from_str};
