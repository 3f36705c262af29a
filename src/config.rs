//! # Config Module
//!
//! JSON-backed description of a chunk to create.
//!
//! ```json
//! {
//!     "dimensions": [16, 16, 16],
//!     "fill": { "kind": "random", "density": 0.6, "seed": 42 },
//!     "color": { "r": 0.8, "g": 0.6, "b": 0.4, "a": 1.0 },
//!     "cull_hidden_faces": false,
//!     "placement": [0.0, 0.0, 0.0]
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults of
//! [`ChunkConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};
use crate::voxels::chunk::DEFAULT_CHUNK_DIMENSION;
use crate::voxels::grid::grid_fill::FillPattern;
use crate::voxels::grid::GridDimensions;
use crate::voxels::voxel::Color;

/// Settings for building a [`Chunk`](crate::voxels::chunk::Chunk).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Grid size along x, y and z. Each must be positive.
    pub dimensions: [i32; 3],
    /// Initial contents of the grid.
    pub fill: FillPattern,
    /// Colour of initially active voxels.
    pub color: Color,
    /// Whether meshes drop faces hidden between active neighbours.
    pub cull_hidden_faces: bool,
    /// Scene-space placement of the chunk.
    pub placement: [f32; 3],
}

impl Default for ChunkConfig {
    fn default() -> Self {
        ChunkConfig {
            dimensions: [DEFAULT_CHUNK_DIMENSION; 3],
            fill: FillPattern::Solid,
            color: Color::WHITE,
            cull_hidden_faces: false,
            placement: [0.0; 3],
        }
    }
}

impl ChunkConfig {
    /// Parses a config from JSON and validates it.
    ///
    /// # Errors
    /// Fails on malformed JSON or if [`validate`](Self::validate) fails.
    pub fn from_json_str(json: &str) -> VoxelResult<Self> {
        let config: ChunkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or does not parse and validate.
    pub fn load(path: impl AsRef<Path>) -> VoxelResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The validated grid dimensions.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidDimensions`] for a non-positive axis.
    pub fn grid_dimensions(&self) -> VoxelResult<GridDimensions> {
        let [x, y, z] = self.dimensions;
        GridDimensions::new(x, y, z)
    }

    /// Checks every field.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> VoxelResult<()> {
        self.grid_dimensions()?;
        self.fill.validate()?;
        if self.placement.iter().any(|component| !component.is_finite()) {
            return Err(VoxelError::InvalidConfig(format!(
                "placement {:?} is not finite",
                self.placement
            )));
        }
        Ok(())
    }
}
