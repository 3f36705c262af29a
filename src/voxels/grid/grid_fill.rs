//! # Grid Fill Module
//!
//! Constructors that populate a fresh [`VoxelGrid`] with a pattern. `Solid`
//! is the reference starting state for a carvable chunk; the others exist for
//! testing and demos.

use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};
use crate::voxels::voxel::{Color, Voxel};

use super::{GridDimensions, VoxelGrid};

/// How a new grid is populated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FillPattern {
    /// Every cell active.
    #[default]
    Solid,
    /// Every cell inactive.
    Empty,
    /// Cells active where `x + y + z` is even. No two active cells share a face.
    Checkerboard,
    /// Each cell active with probability `density`, reproducible from `seed`.
    Random {
        /// Probability in `0.0..=1.0` that a cell is active.
        density: f64,
        /// Seed for the generator.
        seed: u64,
    },
}

impl FillPattern {
    /// Checks pattern parameters.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidConfig`] for a random density outside `[0, 1]`.
    pub fn validate(&self) -> VoxelResult<()> {
        match self {
            FillPattern::Random { density, .. } if !(0.0..=1.0).contains(density) => Err(
                VoxelError::InvalidConfig(format!("fill density {density} is outside [0, 1]")),
            ),
            _ => Ok(()),
        }
    }
}

impl VoxelGrid {
    /// Creates a grid populated according to `pattern`, active cells painted `color`.
    ///
    /// # Errors
    /// Propagates [`FillPattern::validate`] failures.
    pub fn filled(
        dimensions: GridDimensions,
        pattern: FillPattern,
        color: Color,
    ) -> VoxelResult<Self> {
        pattern.validate()?;
        let mut grid = VoxelGrid::new(dimensions);
        match pattern {
            FillPattern::Solid => grid.fill_where(color, |_| true),
            FillPattern::Empty => {}
            FillPattern::Checkerboard => {
                grid.fill_where(color, |(x, y, z)| (x + y + z) % 2 == 0)
            }
            FillPattern::Random { density, seed } => {
                let mut rng = fastrand::Rng::with_seed(seed);
                grid.fill_where(color, |_| rng.f64() < density)
            }
        }
        Ok(grid)
    }

    /// Creates a grid with every cell active, the reference starting state.
    pub fn solid(dimensions: GridDimensions, color: Color) -> Self {
        let mut grid = VoxelGrid::new(dimensions);
        grid.fill_where(color, |_| true);
        grid
    }

    fn fill_where(&mut self, color: Color, mut predicate: impl FnMut((i32, i32, i32)) -> bool) {
        for voxel in self.voxels.iter_mut() {
            if predicate(voxel.position) {
                *voxel = Voxel::solid(voxel.position, color);
            }
        }
    }
}
