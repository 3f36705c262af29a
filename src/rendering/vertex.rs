//! Vertex data emitted by the mesh builder.
//!
//! The layout is plain `#[repr(C)]` data so a renderer can upload a vertex
//! slice directly with `bytemuck::cast_slice`.

use cgmath::Point3;

use crate::voxels::voxel::Color;

/// A single mesh vertex in chunk-local space.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Color: 4x f32 (16 bytes)
///
/// Total size: 28 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in chunk-local units (one unit per voxel)
    pub position: [f32; 3],
    /// Colour of the voxel this vertex belongs to
    pub color: Color,
}

impl Vertex {
    /// Creates a vertex at `pos` with the given colour.
    pub fn new(pos: Point3<f32>, color: Color) -> Self {
        Vertex {
            position: [pos.x, pos.y, pos.z],
            color,
        }
    }

    /// The position as a cgmath point.
    pub fn point(&self) -> Point3<f32> {
        Point3::new(self.position[0], self.position[1], self.position[2])
    }
}
