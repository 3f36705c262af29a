//! # Error Module
//!
//! Errors raised by grid access, chunk construction and snapshot loading.
//!
//! Carving deliberately does not surface [`VoxelError::OutOfBounds`]; see
//! [`Chunk::carve`](crate::voxels::chunk::Chunk::carve) for the masking contract.

use thiserror::Error;

use crate::voxels::grid::GridDimensions;
use crate::voxels::voxel::GridPosition;

/// Errors that can occur while building, editing or loading voxel data.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// A coordinate lies outside `[0, dim)` on at least one axis.
    #[error("position {position:?} is outside grid of dimensions {dimensions}")]
    OutOfBounds {
        /// The rejected position.
        position: GridPosition,
        /// Dimensions of the grid that rejected it.
        dimensions: GridDimensions,
    },

    /// A grid was requested with a non-positive size on some axis.
    #[error("invalid grid dimensions {x}x{y}x{z}: every axis must be positive")]
    InvalidDimensions {
        /// Requested size along X.
        x: i32,
        /// Requested size along Y.
        y: i32,
        /// Requested size along Z.
        z: i32,
    },

    /// A loaded voxel carries a position that disagrees with its array index.
    #[error("voxel stored at {index:?} claims position {stored:?}")]
    PositionMismatch {
        /// The cell the voxel occupies.
        index: GridPosition,
        /// The position recorded inside the voxel.
        stored: GridPosition,
    },

    /// A loaded snapshot has the wrong number of cells for its dimensions.
    #[error("expected {expected} voxels, snapshot holds {actual}")]
    VoxelCountMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Cell count actually present.
        actual: usize,
    },

    /// A split was requested with components that are not disjoint.
    #[error("position {0:?} appears in more than one component")]
    OverlappingComponents(GridPosition),

    /// Configuration parsed but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON encoding or decoding failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading a config or snapshot file failed.
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for voxel operations.
pub type VoxelResult<T> = Result<T, VoxelError>;
