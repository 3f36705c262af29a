//! # Voxels Module
//!
//! Voxel data and the algorithms that operate on it.
//!
//! ## Architecture
//!
//! * **Voxel**: a single cell with active state and colour
//! * **Grid**: dense fixed-size storage for one chunk's voxels
//! * **Connectivity**: 6-connected component discovery over a grid
//! * **Chunk**: owns a grid and its mesh; carving and splitting live here
//! * **World**: host-side registry that takes ownership of split chunks
//!
//! ## Data Flow
//!
//! 1. A carve deactivates one cell of a chunk's grid
//! 2. The chunk rebuilds its mesh from the whole grid
//! 3. On request, connectivity analysis partitions the active cells
//! 4. With more than one component, each is moved into a new chunk
//! 5. The caller registers the new chunks with its world
//!
//! ## Thread Safety
//!
//! Everything here is synchronous and single-threaded. A chunk exclusively
//! owns its grid; distinct chunks share nothing and may be processed on
//! different threads by the caller.

pub mod chunk;
pub mod connectivity;
pub mod grid;
pub mod voxel;
pub mod world;
