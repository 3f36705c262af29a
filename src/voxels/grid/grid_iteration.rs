//! # Grid Iteration Module
//!
//! Iterators over a [`VoxelGrid`] that respect its scan order.
//!
//! Because the flat buffer is laid out so that ascending linear index equals
//! ascending x, then y, then z, both iterators here simply walk the buffer.
//! Consumers (meshing, connectivity analysis) depend on this order for
//! reproducible output.

use crate::voxels::voxel::{GridPosition, Voxel};

use super::{GridDimensions, VoxelGrid, FACE_NEIGHBOR_OFFSETS};

/// An iterator over the active voxels of a grid in ascending x, y, z order.
pub struct ActiveVoxelIterator<'a> {
    /// Remaining cells, front first
    cells: std::slice::Iter<'a, Voxel>,
}

impl<'a> Iterator for ActiveVoxelIterator<'a> {
    type Item = &'a Voxel;

    fn next(&mut self) -> Option<Self::Item> {
        self.cells.by_ref().find(|voxel| voxel.active)
    }
}

/// In-bounds face neighbours of one position.
pub struct FaceNeighbors {
    dimensions: GridDimensions,
    origin: GridPosition,
    next_offset: usize,
}

impl Iterator for FaceNeighbors {
    type Item = GridPosition;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy, dz)) = FACE_NEIGHBOR_OFFSETS.get(self.next_offset) {
            self.next_offset += 1;
            let (x, y, z) = self.origin;
            let neighbor = match (x.checked_add(dx), y.checked_add(dy), z.checked_add(dz)) {
                (Some(nx), Some(ny), Some(nz)) => (nx, ny, nz),
                _ => continue,
            };
            if self.dimensions.contains(neighbor) {
                return Some(neighbor);
            }
        }
        None
    }
}

impl VoxelGrid {
    /// Iterates the active voxels in ascending x, y, z order.
    pub fn iter_active(&self) -> ActiveVoxelIterator<'_> {
        ActiveVoxelIterator {
            cells: self.voxels.iter(),
        }
    }

    /// Iterates the in-bounds positions sharing a face with `position`.
    ///
    /// Diagonal neighbours are never produced.
    pub fn face_neighbors(&self, position: GridPosition) -> FaceNeighbors {
        FaceNeighbors {
            dimensions: self.dimensions,
            origin: position,
            next_offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::voxels::grid::{GridDimensions, VoxelGrid};

    #[test]
    fn active_iteration_follows_scan_order() {
        let mut grid = VoxelGrid::new(GridDimensions::new(2, 2, 2).unwrap());
        for position in [(1, 0, 0), (0, 1, 1), (0, 0, 1)] {
            grid.set_active(position, true).unwrap();
        }
        let order: Vec<_> = grid.iter_active().map(|v| v.position).collect();
        assert_eq!(order, vec![(0, 0, 1), (0, 1, 1), (1, 0, 0)]);
    }

    #[test]
    fn corner_has_three_face_neighbors() {
        let grid = VoxelGrid::new(GridDimensions::cube(3).unwrap());
        let mut corner: Vec<_> = grid.face_neighbors((0, 0, 0)).collect();
        corner.sort();
        assert_eq!(corner, vec![(0, 0, 1), (0, 1, 0), (1, 0, 0)]);
        assert_eq!(grid.face_neighbors((1, 1, 1)).count(), 6);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid = VoxelGrid::new(GridDimensions::cube(1).unwrap());
        assert_eq!(grid.face_neighbors((0, 0, 0)).count(), 0);
    }

    #[test]
    fn extreme_origins_yield_no_neighbors() {
        let grid = VoxelGrid::new(GridDimensions::cube(2).unwrap());
        assert_eq!(grid.face_neighbors((i32::MAX, 0, 0)).count(), 0);
        assert_eq!(grid.face_neighbors((0, i32::MIN, 0)).count(), 0);
        assert_eq!(grid.face_neighbors((i32::MAX, i32::MIN, i32::MAX)).count(), 0);

        // one step outside still reaches back into the grid
        let back: Vec<_> = grid.face_neighbors((-1, 0, 0)).collect();
        assert_eq!(back, vec![(0, 0, 0)]);
    }
}
