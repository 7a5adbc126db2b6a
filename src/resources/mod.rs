//! Geometry resources
//!
//! CPU-side mesh data, independent of any GPU implementation:
//! - [`MeshData`]: positions, normals and triangle indices
//! - [`primitives`]: sphere, cylinder, cube and annular plate generators
//! - [`MeshLibrary`]: the canonical buffers shared by every draw

pub mod geometry;
pub mod library;
pub mod primitives;

pub use geometry::{BoundingBox, MeshData};
pub use library::{MeshLibrary, PrimitiveKind};
