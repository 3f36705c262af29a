//! # Voxel Module
//!
//! Defines the single grid cell value ([`Voxel`]) and its display colour.

use serde::{Deserialize, Serialize};

/// A grid-local integer coordinate `(x, y, z)`.
pub type GridPosition = (i32, i32, i32);

/// An RGBA colour used only for visualisation.
///
/// Channels are normalised to `0.0..=1.0`. The `#[repr(C)]` layout lets the
/// colour be uploaded directly as vertex attribute data.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// Opaque white, the colour freshly filled chunks use.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a colour from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A single cell of a [`VoxelGrid`](crate::voxels::grid::VoxelGrid).
///
/// `position` always equals the index of the cell holding the voxel. The grid
/// maintains this itself; the field is a convenience copy and the array index
/// stays authoritative.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voxel {
    /// Whether the voxel is solid.
    pub active: bool,
    /// Grid-local position of the cell.
    pub position: GridPosition,
    /// Display colour; has no effect on editing, meshing or splitting.
    pub color: Color,
}

impl Voxel {
    /// Creates an active voxel of the given colour.
    pub fn solid(position: GridPosition, color: Color) -> Self {
        Voxel {
            active: true,
            position,
            color,
        }
    }

    /// Creates an inactive voxel, the default content of every cell.
    pub fn empty(position: GridPosition) -> Self {
        Voxel {
            active: false,
            position,
            color: Color::WHITE,
        }
    }
}
