#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Carve
//!
//! Destructible voxel chunks: a dense grid per chunk, a cube mesh rebuilt
//! after every edit, and detection of bodies that editing has cut loose.
//!
//! ## Key Modules
//!
//! * `voxels` - Voxel grid storage, connectivity analysis, chunks and the world registry
//! * `rendering` - Vertex format and mesh generation
//! * `config` - JSON chunk configuration
//! * `error` - Error types shared by the crate
//!
//! ## Usage
//!
//! ```rust
//! use voxel_carve::Chunk;
//!
//! let mut chunk = Chunk::solid(3, 1, 1).unwrap();
//! chunk.carve((1, 0, 0));
//!
//! let pieces = chunk.split_into_objects().unwrap();
//! assert_eq!(pieces.len(), 2);
//! assert!(chunk.is_empty());
//! ```
//!
//! Splitting only builds the new chunks. Registering them with a scene is the
//! caller's job, see [`ChunkRegistry`].

use std::path::Path;

use log::info;

pub mod config;
pub mod error;
pub mod rendering;
pub mod voxels;

pub use config::ChunkConfig;
pub use error::{VoxelError, VoxelResult};
pub use rendering::{MeshBuffer, MeshBuilder, MeshOptions, Vertex};
pub use voxels::chunk::Chunk;
pub use voxels::connectivity::{find_connected_components, Component, ConnectivityAnalyzer};
pub use voxels::grid::grid_fill::FillPattern;
pub use voxels::grid::{GridDimensions, VoxelGrid};
pub use voxels::voxel::{Color, GridPosition, Voxel};
pub use voxels::world::{split_into_registry, ChunkId, ChunkRegistry, World};

/// Installs an `env_logger` writing to stdout, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let mut log_builder = env_logger::Builder::new();
    let _ = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();
}

/// Runs the native demo.
///
/// Builds a chunk from the config at `config_path` (or the default config),
/// carves a one-voxel-thick wall through the middle of the X axis, splits the
/// chunk and reports the result.
///
/// # Errors
/// Fails if the config cannot be loaded or the split fails.
pub fn run(config_path: Option<&Path>) -> VoxelResult<()> {
    let config = match config_path {
        Some(path) => ChunkConfig::load(path)?,
        None => ChunkConfig::default(),
    };
    let mut world = World::new();
    let chunk = Chunk::from_config(&config)?;
    info!(
        "Created {} chunk with {} voxels, {} vertices, {} triangles",
        chunk.grid().dimensions(),
        chunk.active_count(),
        chunk.mesh().vertex_count(),
        chunk.mesh().triangle_count()
    );
    let id = world.add_chunk(chunk);

    let dimensions = config.grid_dimensions()?;
    let wall_x = dimensions.x() / 2;
    let mut carved = 0;
    for y in 0..dimensions.y() {
        for z in 0..dimensions.z() {
            if world.carve(id, (wall_x, y, z)) {
                carved += 1;
            }
        }
    }
    info!("Carved {} cells at x = {}", carved, wall_x);

    let pieces = world.split_chunk(id)?;
    for piece in &pieces {
        if let Some(chunk) = world.get_chunk(*piece) {
            info!(
                "{}: {} voxels, {} vertices",
                piece,
                chunk.active_count(),
                chunk.mesh().vertex_count()
            );
        }
    }
    let removed = world.remove_empty();
    info!(
        "{} pieces after split, {} empty chunks removed, {} chunks live",
        pieces.len(),
        removed.len(),
        world.len()
    );
    Ok(())
}
