//! # Rendering Module
//!
//! Everything needed to hand chunk geometry to an external renderer: the
//! vertex format, the cube geometry tables and the mesh builder.
//!
//! No GPU resources, shaders or materials are managed here; consumers read
//! [`MeshBuffer::vertices`](meshing::MeshBuffer::vertices) and
//! [`MeshBuffer::indices`](meshing::MeshBuffer::indices) and upload them however
//! they like.

pub mod cube_face;
pub mod meshing;
pub mod vertex;

pub use meshing::{MeshBuffer, MeshBuilder, MeshOptions};
pub use vertex::Vertex;
