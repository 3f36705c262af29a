//! # Chunk Module
//!
//! This module provides the [`Chunk`] struct, the unit that owns one
//! [`VoxelGrid`] together with the [`MeshBuffer`] derived from it.
//!
//! ## Editing
//!
//! Every successful edit replaces the mesh wholesale by re-running the
//! [`MeshBuilder`]. There is no dirty tracking and no partial update: once an
//! edit method returns, `mesh()` reflects the grid exactly.
//!
//! ## Splitting
//!
//! [`Chunk::split_into_objects`] finds the 6-connected components of the grid
//! and, when there is more than one, moves each into a new chunk (see
//! [`splitter`]). The new chunks are plain owned values; putting them into a
//! scene is up to the caller, for example through
//! [`World`](crate::voxels::world::World).

use cgmath::Vector3;
use log::{debug, warn};

use crate::config::ChunkConfig;
use crate::error::VoxelResult;
use crate::rendering::meshing::{MeshBuffer, MeshBuilder, MeshOptions};
use crate::rendering::vertex::Vertex;

use super::connectivity::{find_connected_components, Component};
use super::grid::{GridDimensions, VoxelGrid};
use super::voxel::{Color, GridPosition};

pub mod splitter;

use splitter::ChunkSplitter;

/// Default edge length of a chunk, in voxels.
pub const DEFAULT_CHUNK_DIMENSION: i32 = 16;

/// A grid of voxels plus its renderable mesh and scene placement.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// The voxel data; exclusively owned by this chunk
    grid: VoxelGrid,
    /// Mesh derived from `grid`, rebuilt after every mutation
    mesh: MeshBuffer,
    /// Scene-space offset applied by the host when drawing this chunk
    placement: Vector3<f32>,
    /// Builder reused for every rebuild of this chunk
    mesh_builder: MeshBuilder,
}

impl Chunk {
    /// Wraps an existing grid, building its mesh immediately.
    ///
    /// # Arguments
    /// * `grid` - Voxel data the chunk takes ownership of
    ///
    /// # Returns
    /// A chunk at the origin with default [`MeshOptions`] and a mesh that
    /// already matches `grid`.
    pub fn from_grid(grid: VoxelGrid) -> Self {
        Self::with_options(grid, MeshOptions::default())
    }

    /// Wraps an existing grid using the given mesh options.
    pub fn with_options(grid: VoxelGrid, options: MeshOptions) -> Self {
        let mesh_builder = MeshBuilder::new(options);
        let mesh = mesh_builder.build(&grid);
        Chunk {
            grid,
            mesh,
            placement: Vector3::new(0.0, 0.0, 0.0),
            mesh_builder,
        }
    }

    /// Creates a fully active white chunk, the reference starting state.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidDimensions`](crate::error::VoxelError::InvalidDimensions)
    /// if any axis is not positive.
    pub fn solid(x: i32, y: i32, z: i32) -> VoxelResult<Self> {
        let dimensions = GridDimensions::new(x, y, z)?;
        Ok(Self::from_grid(VoxelGrid::solid(dimensions, Color::WHITE)))
    }

    /// Creates a chunk as described by `config`.
    ///
    /// # Errors
    /// Fails if the configuration does not validate.
    pub fn from_config(config: &ChunkConfig) -> VoxelResult<Self> {
        config.validate()?;
        let dimensions = config.grid_dimensions()?;
        let grid = VoxelGrid::filled(dimensions, config.fill, config.color)?;
        let options = MeshOptions {
            cull_hidden_faces: config.cull_hidden_faces,
        };
        let mut chunk = Self::with_options(grid, options);
        let [px, py, pz] = config.placement;
        chunk.placement = Vector3::new(px, py, pz);
        Ok(chunk)
    }

    /// The voxel grid, read-only.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The current mesh, read-only.
    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    /// Mesh vertices for an external renderer.
    pub fn vertices(&self) -> &[Vertex] {
        &self.mesh.vertices
    }

    /// Mesh triangle indices for an external renderer.
    pub fn indices(&self) -> &[u32] {
        &self.mesh.indices
    }

    /// Scene-space placement offset.
    pub fn placement(&self) -> Vector3<f32> {
        self.placement
    }

    /// Moves the chunk in scene space. The mesh is chunk-local and unaffected.
    pub fn set_placement(&mut self, placement: Vector3<f32>) {
        self.placement = placement;
    }

    /// Mesh options used for every rebuild.
    pub fn mesh_options(&self) -> MeshOptions {
        self.mesh_builder.options()
    }

    /// Number of active voxels.
    pub fn active_count(&self) -> usize {
        self.grid.active_count()
    }

    /// Whether the chunk has no active voxels left.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Removes the voxel at `position` and rebuilds the mesh.
    ///
    /// Out-of-bounds positions are ignored: nothing changes and no error is
    /// raised. Returns `true` when the position was inside the grid (whether
    /// or not the cell was already inactive), `false` when it was ignored.
    pub fn carve(&mut self, position: GridPosition) -> bool {
        match self.try_carve(position) {
            Ok(_) => true,
            Err(err) => {
                warn!("Ignoring carve: {}", err);
                false
            }
        }
    }

    /// Strict form of [`carve`](Self::carve).
    ///
    /// Returns whether the cell went from active to inactive.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`](crate::error::VoxelError::OutOfBounds)
    /// without touching the grid or mesh.
    pub fn try_carve(&mut self, position: GridPosition) -> VoxelResult<bool> {
        let changed = self.grid.set_active(position, false)?;
        debug!("Carved {:?} (changed: {})", position, changed);
        self.rebuild_mesh();
        Ok(changed)
    }

    /// Returns the 6-connected components of the active voxels.
    ///
    /// Read-only; components are ordered by their lowest position in
    /// ascending x, y, z scan order.
    pub fn find_connected_components(&self) -> Vec<Component> {
        find_connected_components(&self.grid)
    }

    /// Extracts every disconnected body into its own chunk.
    ///
    /// With at most one component this does nothing and returns an empty
    /// list. Otherwise each component is moved into a new chunk of the same
    /// dimensions and placement, keeping its original grid coordinates, and
    /// this chunk is left with whatever was not claimed (normally nothing).
    ///
    /// # Errors
    /// Cannot fail for components computed from this chunk's own grid; the
    /// result type is shared with [`ChunkSplitter::split`].
    pub fn split_into_objects(&mut self) -> VoxelResult<Vec<Chunk>> {
        let components = self.find_connected_components();
        ChunkSplitter::split(self, &components)
    }

    /// Regenerates the mesh from the current grid.
    pub fn rebuild_mesh(&mut self) {
        self.mesh = self.mesh_builder.build(&self.grid);
    }

    /// Mutable grid access for the splitter. Callers must rebuild the mesh.
    pub(crate) fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }
}
