//! # Cube Face Module
//!
//! Geometry tables for the unit cube emitted per active voxel.
//!
//! Corners are numbered
//!
//! ```text
//!        4 ──────── 5
//!       /|         /|
//!      3 ──────── 2 |
//!      | 7 ───────|─6
//!      |/         |/
//!      0 ──────── 1
//! ```
//!
//! with `0 = (0,0,0)`, `1 = (1,0,0)`, `2 = (1,1,0)`, `3 = (0,1,0)` on the
//! `z = 0` side and `4..=7` on the `z = 1` side. For every triangle
//! `(a, b, c)` the normal `(b - a) x (c - a)` points out of the cube.

use cgmath::Vector3;

use crate::voxels::voxel::GridPosition;

/// Cube corner offsets relative to the voxel's integer coordinate.
pub const CUBE_CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
];

/// Number of vertices emitted per voxel.
pub const VERTICES_PER_CUBE: usize = CUBE_CORNERS.len();

/// Number of triangle indices emitted per voxel with every face present.
pub const INDICES_PER_CUBE: usize = 36;

/// The six faces of a voxel cube, in emission order.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum CubeFace {
    /// The face at `z = 0` (facing negative Z)
    FRONT = 0,
    /// The face at `y = 1` (facing positive Y)
    TOP = 1,
    /// The face at `x = 1` (facing positive X)
    RIGHT = 2,
    /// The face at `x = 0` (facing negative X)
    LEFT = 3,
    /// The face at `z = 1` (facing positive Z)
    BACK = 4,
    /// The face at `y = 0` (facing negative Y)
    BOTTOM = 5,
}

impl CubeFace {
    /// All faces in emission order.
    pub fn all() -> [CubeFace; 6] {
        [
            CubeFace::FRONT,
            CubeFace::TOP,
            CubeFace::RIGHT,
            CubeFace::LEFT,
            CubeFace::BACK,
            CubeFace::BOTTOM,
        ]
    }

    /// Corner indices of the two triangles making up this face.
    pub fn triangles(self) -> [u32; 6] {
        match self {
            CubeFace::FRONT => [0, 2, 1, 0, 3, 2],
            CubeFace::TOP => [2, 3, 4, 2, 4, 5],
            CubeFace::RIGHT => [1, 2, 5, 1, 5, 6],
            CubeFace::LEFT => [0, 7, 4, 0, 4, 3],
            CubeFace::BACK => [5, 4, 7, 5, 7, 6],
            CubeFace::BOTTOM => [0, 6, 7, 0, 1, 6],
        }
    }

    /// Grid offset of the voxel sharing this face.
    pub fn neighbor_offset(self) -> GridPosition {
        match self {
            CubeFace::FRONT => (0, 0, -1),
            CubeFace::TOP => (0, 1, 0),
            CubeFace::RIGHT => (1, 0, 0),
            CubeFace::LEFT => (-1, 0, 0),
            CubeFace::BACK => (0, 0, 1),
            CubeFace::BOTTOM => (0, -1, 0),
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> Vector3<f32> {
        let (x, y, z) = self.neighbor_offset();
        Vector3::new(x as f32, y as f32, z as f32)
    }
}
