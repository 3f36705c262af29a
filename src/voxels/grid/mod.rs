//! # Grid Module
//!
//! Dense, fixed-size storage for the voxels of one chunk.
//!
//! ## Memory Layout
//!
//! Voxels live in a single flat `Vec<Voxel>` addressed by the linear index
//! `(x * dim_y + y) * dim_z + z`. Walking the buffer front to back is
//! therefore the same as scanning ascending x, then y, then z, which is the
//! order meshing and connectivity analysis both rely on.
//!
//! Dimensions are fixed at construction. Every accessor checks bounds before
//! computing an index, so an out-of-range coordinate can never alias a valid
//! cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};

use super::voxel::{GridPosition, Voxel};

pub mod grid_fill;
pub mod grid_iteration;

/// The six face-adjacent neighbour offsets.
pub const FACE_NEIGHBOR_OFFSETS: [GridPosition; 6] = [
    (0, 1, 0),
    (0, -1, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Size of a grid along each axis. All three axes are strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct GridDimensions {
    x: i32,
    y: i32,
    z: i32,
}

impl GridDimensions {
    /// Validates and creates a set of grid dimensions.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Cell count along each axis
    ///
    /// # Returns
    /// The dimensions, guaranteed to have a volume that fits in an `i32`.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidDimensions`] if any axis is zero or
    /// negative, or if the total cell count exceeds `i32::MAX`.
    pub fn new(x: i32, y: i32, z: i32) -> VoxelResult<Self> {
        if x <= 0 || y <= 0 || z <= 0 {
            return Err(VoxelError::InvalidDimensions { x, y, z });
        }
        let max_volume = i32::MAX as usize;
        (x as usize)
            .checked_mul(y as usize)
            .and_then(|area| area.checked_mul(z as usize))
            .filter(|&volume| volume <= max_volume)
            .ok_or(VoxelError::InvalidDimensions { x, y, z })?;
        Ok(GridDimensions { x, y, z })
    }

    /// Creates cubic dimensions `size x size x size`.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidDimensions`] if `size` is not positive.
    pub fn cube(size: i32) -> VoxelResult<Self> {
        Self::new(size, size, size)
    }

    /// Size along X.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Size along Y.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Size along Z.
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Pure range check against all three axes.
    pub fn contains(&self, (x, y, z): GridPosition) -> bool {
        (0..self.x).contains(&x) && (0..self.y).contains(&y) && (0..self.z).contains(&z)
    }

    /// Linear buffer index of a position, or `None` when out of bounds.
    pub fn linear_index(&self, position: GridPosition) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let (x, y, z) = position;
        let (dim_y, dim_z) = (self.y as usize, self.z as usize);
        Some((x as usize * dim_y + y as usize) * dim_z + z as usize)
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    ///
    /// `index` must be below [`volume`](Self::volume), which always fits in
    /// an `i32`.
    pub fn position_of(&self, index: usize) -> GridPosition {
        let (dim_y, dim_z) = (self.y as usize, self.z as usize);
        let z = index % dim_z;
        let y = (index / dim_z) % dim_y;
        let x = index / (dim_z * dim_y);
        (x as i32, y as i32, z as i32)
    }
}

impl TryFrom<[i32; 3]> for GridDimensions {
    type Error = VoxelError;

    fn try_from([x, y, z]: [i32; 3]) -> VoxelResult<Self> {
        GridDimensions::new(x, y, z)
    }
}

impl From<GridDimensions> for [i32; 3] {
    fn from(dimensions: GridDimensions) -> Self {
        [dimensions.x, dimensions.y, dimensions.z]
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Dense three-axis voxel storage for one chunk.
///
/// Every in-range coordinate holds a defined [`Voxel`], inactive unless set
/// otherwise. Out-of-range coordinates are rejected at the accessor boundary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VoxelGrid {
    dimensions: GridDimensions,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Creates a grid with every cell inactive.
    ///
    /// # Arguments
    /// * `dimensions` - Fixed size of the grid
    ///
    /// # Returns
    /// A grid of `dimensions.volume()` inactive voxels, each recording its
    /// own position.
    pub fn new(dimensions: GridDimensions) -> Self {
        let voxels = (0..dimensions.volume())
            .map(|index| Voxel::empty(dimensions.position_of(index)))
            .collect();
        VoxelGrid { dimensions, voxels }
    }

    /// The fixed dimensions of this grid.
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Whether `(x, y, z)` lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        self.dimensions.contains((x, y, z))
    }

    /// Returns the voxel stored at `(x, y, z)`.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`] if any coordinate is outside `[0, dim)`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> VoxelResult<Voxel> {
        let index = self.checked_index((x, y, z))?;
        Ok(self.voxels[index])
    }

    /// Stores `voxel` at `(x, y, z)`.
    ///
    /// The stored voxel's `position` is rewritten to `(x, y, z)` so the cell
    /// index and the recorded position can never drift apart.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`] if any coordinate is outside `[0, dim)`.
    pub fn set(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> VoxelResult<()> {
        let index = self.checked_index((x, y, z))?;
        self.voxels[index] = Voxel {
            position: (x, y, z),
            ..voxel
        };
        Ok(())
    }

    /// Whether the cell at `position` is in bounds and active.
    pub fn is_active(&self, position: GridPosition) -> bool {
        self.dimensions
            .linear_index(position)
            .is_some_and(|index| self.voxels[index].active)
    }

    /// Sets the active flag of one cell, keeping its colour.
    ///
    /// Returns whether the flag actually changed.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`] for out-of-range positions.
    pub fn set_active(&mut self, position: GridPosition, active: bool) -> VoxelResult<bool> {
        let index = self.checked_index(position)?;
        let voxel = &mut self.voxels[index];
        let changed = voxel.active != active;
        voxel.active = active;
        Ok(changed)
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.voxels.iter().filter(|voxel| voxel.active).count()
    }

    /// Whether no cell is active.
    pub fn is_empty(&self) -> bool {
        !self.voxels.iter().any(|voxel| voxel.active)
    }

    /// Positions of all active cells in ascending x, y, z order.
    pub fn active_positions(&self) -> Vec<GridPosition> {
        self.iter_active().map(|voxel| voxel.position).collect()
    }

    /// Raw view of the cell buffer in linear-index order.
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    fn checked_index(&self, position: GridPosition) -> VoxelResult<usize> {
        self.dimensions
            .linear_index(position)
            .ok_or(VoxelError::OutOfBounds {
                position,
                dimensions: self.dimensions,
            })
    }

    /// Encodes the grid as a JSON snapshot.
    ///
    /// # Errors
    /// Returns [`VoxelError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> VoxelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Loads a grid from a JSON snapshot produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    /// Fails on malformed JSON, invalid dimensions, a cell count that does not
    /// match the dimensions, or any voxel whose stored position differs from
    /// the cell it occupies.
    pub fn from_json(json: &str) -> VoxelResult<Self> {
        let snapshot: GridSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    fn from_snapshot(snapshot: GridSnapshot) -> VoxelResult<Self> {
        let GridSnapshot { dimensions, voxels } = snapshot;
        if voxels.len() != dimensions.volume() {
            return Err(VoxelError::VoxelCountMismatch {
                expected: dimensions.volume(),
                actual: voxels.len(),
            });
        }
        for (index, voxel) in voxels.iter().enumerate() {
            let expected = dimensions.position_of(index);
            if voxel.position != expected {
                return Err(VoxelError::PositionMismatch {
                    index: expected,
                    stored: voxel.position,
                });
            }
        }
        Ok(VoxelGrid { dimensions, voxels })
    }
}

/// Unvalidated wire form of a [`VoxelGrid`].
#[derive(Deserialize)]
struct GridSnapshot {
    dimensions: GridDimensions,
    voxels: Vec<Voxel>,
}
