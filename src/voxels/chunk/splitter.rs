//! # Splitter Module
//!
//! Moves each connected component of a chunk into a chunk of its own.
//!
//! For every component a new grid with the source's dimensions is allocated,
//! the component's voxels are copied across at their original coordinates and
//! then deactivated in the source. New chunks inherit the source's placement
//! and mesh options, so they render exactly where the material used to be.

use bitvec::prelude::BitVec;
use log::info;

use crate::error::{VoxelError, VoxelResult};
use crate::voxels::connectivity::Component;
use crate::voxels::grid::VoxelGrid;

use super::Chunk;

/// Splits a chunk along a component partition.
pub struct ChunkSplitter;

impl ChunkSplitter {
    /// Extracts each of `components` from `source` into a new chunk.
    ///
    /// With one component or none this is a no-op returning an empty list.
    /// Otherwise the new chunks are returned in component order, and both
    /// they and `source` have freshly built meshes.
    ///
    /// All positions are checked before anything is mutated, so on error
    /// `source` is untouched.
    ///
    /// # Errors
    /// - [`VoxelError::OutOfBounds`] if a position lies outside the source grid.
    /// - [`VoxelError::OverlappingComponents`] if a position occurs twice.
    pub fn split(source: &mut Chunk, components: &[Component]) -> VoxelResult<Vec<Chunk>> {
        if components.len() <= 1 {
            return Ok(Vec::new());
        }
        Self::validate(source.grid(), components)?;

        let dimensions = source.grid().dimensions();
        let options = source.mesh_options();
        let placement = source.placement();
        let mut pieces = Vec::with_capacity(components.len());

        for component in components {
            let mut grid = VoxelGrid::new(dimensions);
            for &(x, y, z) in component {
                let voxel = source.grid().get(x, y, z)?;
                grid.set(x, y, z, voxel)?;
                source.grid_mut().set_active((x, y, z), false)?;
            }
            let mut piece = Chunk::with_options(grid, options);
            piece.set_placement(placement);
            pieces.push(piece);
        }

        source.rebuild_mesh();
        info!(
            "Split chunk into {} pieces ({} voxels left in source)",
            pieces.len(),
            source.active_count()
        );
        Ok(pieces)
    }

    fn validate(grid: &VoxelGrid, components: &[Component]) -> VoxelResult<()> {
        let dimensions = grid.dimensions();
        let mut claimed = BitVec::<usize>::repeat(false, dimensions.volume());
        for &position in components.iter().flatten() {
            let index = dimensions
                .linear_index(position)
                .ok_or(VoxelError::OutOfBounds {
                    position,
                    dimensions,
                })?;
            if claimed.replace(index, true) {
                return Err(VoxelError::OverlappingComponents(position));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::voxel::{Color, Voxel};

    #[test]
    fn single_component_is_a_no_op() {
        let mut chunk = Chunk::solid(3, 1, 1).unwrap();
        let components = chunk.find_connected_components();
        let pieces = ChunkSplitter::split(&mut chunk, &components).unwrap();
        assert!(pieces.is_empty());
        assert_eq!(chunk.active_count(), 3);
    }

    #[test]
    fn split_copies_colour_and_keeps_coordinates() {
        let mut chunk = Chunk::solid(3, 1, 1).unwrap();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let mut grid = chunk.grid().clone();
        grid.set(2, 0, 0, Voxel::solid((2, 0, 0), red)).unwrap();
        grid.set_active((1, 0, 0), false).unwrap();
        chunk = Chunk::from_grid(grid);

        let pieces = chunk.split_into_objects().unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[1].grid().get(2, 0, 0).unwrap().color, red);
        assert!(pieces[1].grid().get(2, 0, 0).unwrap().active);
        assert!(pieces[0].grid().is_active((0, 0, 0)));
        assert!(chunk.is_empty());
        assert!(chunk.mesh().is_empty());
    }

    #[test]
    fn split_rejects_out_of_bounds_without_mutation() {
        let mut chunk = Chunk::solid(2, 1, 1).unwrap();
        let components = vec![vec![(0, 0, 0)], vec![(7, 0, 0)]];
        assert!(matches!(
            ChunkSplitter::split(&mut chunk, &components),
            Err(VoxelError::OutOfBounds { .. })
        ));
        assert_eq!(chunk.active_count(), 2);
    }

    #[test]
    fn split_rejects_overlap_without_mutation() {
        let mut chunk = Chunk::solid(2, 1, 1).unwrap();
        let components = vec![vec![(0, 0, 0), (1, 0, 0)], vec![(1, 0, 0)]];
        assert!(matches!(
            ChunkSplitter::split(&mut chunk, &components),
            Err(VoxelError::OverlappingComponents((1, 0, 0)))
        ));
        assert_eq!(chunk.active_count(), 2);
    }

    #[test]
    fn partial_partition_leaves_remainder_in_source() {
        let mut chunk = Chunk::solid(4, 1, 1).unwrap();
        let components = vec![vec![(0, 0, 0)], vec![(3, 0, 0)]];
        let pieces = ChunkSplitter::split(&mut chunk, &components).unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(chunk.grid().active_positions(), vec![(1, 0, 0), (2, 0, 0)]);
        assert_eq!(chunk.vertices().len(), 16);
    }

    #[test]
    fn pieces_inherit_placement() {
        let mut chunk = Chunk::solid(3, 1, 1).unwrap();
        chunk.set_placement(cgmath::Vector3::new(1.0, 2.0, 3.0));
        chunk.carve((1, 0, 0));
        for piece in chunk.split_into_objects().unwrap() {
            assert_eq!(piece.placement(), chunk.placement());
        }
    }
}
