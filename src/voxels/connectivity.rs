//! # Connectivity Module
//!
//! Partitions the active cells of a [`VoxelGrid`] into maximal 6-connected
//! components. Two active cells are connected when a chain of face-adjacent
//! active cells joins them; edge and corner contact does not count.
//!
//! ## Algorithm
//!
//! The grid is scanned in ascending x, y, z order. Each active cell not yet
//! visited seeds a breadth-first flood fill that claims everything reachable
//! from it. Visited state is kept in a [`BitVec`] indexed like the grid's own
//! buffer, so each cell is enqueued at most once and the whole pass is
//! `O(volume)`.

use std::collections::VecDeque;

use bitvec::prelude::BitVec;

use super::grid::VoxelGrid;
use super::voxel::GridPosition;

/// One maximal set of face-connected active positions.
///
/// Positions appear in breadth-first discovery order starting at the seed.
pub type Component = Vec<GridPosition>;

/// Flood-fill based component finder for a single grid.
pub struct ConnectivityAnalyzer<'a> {
    /// The grid being analysed
    grid: &'a VoxelGrid,
    /// One bit per cell, set once the cell has been claimed by a component
    visited: BitVec,
}

impl<'a> ConnectivityAnalyzer<'a> {
    /// Prepares an analyzer over `grid`.
    pub fn new(grid: &'a VoxelGrid) -> Self {
        let mut visited = BitVec::with_capacity(grid.dimensions().volume());
        visited.resize(grid.dimensions().volume(), false);
        ConnectivityAnalyzer { grid, visited }
    }

    /// Consumes the analyzer and returns every component.
    ///
    /// Components are ordered by their seed, which is the lowest position in
    /// scan order within each component. An empty grid yields no components.
    pub fn components(mut self) -> Vec<Component> {
        let grid = self.grid;
        let mut components = Vec::new();
        for voxel in grid.iter_active() {
            let seed = voxel.position;
            if self.is_visited(seed) {
                continue;
            }
            components.push(self.flood_fill(seed));
        }
        components
    }

    fn flood_fill(&mut self, seed: GridPosition) -> Component {
        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        self.mark_visited(seed);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for neighbor in self.grid.face_neighbors(current) {
                if self.grid.is_active(neighbor) && !self.is_visited(neighbor) {
                    self.mark_visited(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        component
    }

    fn is_visited(&self, position: GridPosition) -> bool {
        self.grid
            .dimensions()
            .linear_index(position)
            .is_some_and(|index| self.visited[index])
    }

    fn mark_visited(&mut self, position: GridPosition) {
        if let Some(index) = self.grid.dimensions().linear_index(position) {
            self.visited.set(index, true);
        }
    }
}

/// Returns the 6-connected components of the active cells of `grid`.
///
/// Shorthand for `ConnectivityAnalyzer::new(grid).components()`.
pub fn find_connected_components(grid: &VoxelGrid) -> Vec<Component> {
    ConnectivityAnalyzer::new(grid).components()
}
