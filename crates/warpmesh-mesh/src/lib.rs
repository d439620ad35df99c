//! Fulldome warp mesh generation.
//!
//! Maps each vertex of a regular output grid to the UV coordinate in a
//! fisheye source image that should be sampled there, compensating for a
//! lens mounted ahead of or behind the viewer's head. The result is written
//! as the flat text mesh format read by Blender's dome warp.

mod format;
mod generator;
mod writer;

pub use format::General;
pub use generator::{WarpMesh, normalized_position, warp_uv};
pub use writer::{MESH_FORMAT_VERSION, write_mesh, write_summary};
