//! # World Module
//!
//! The host side of chunk lifecycle. Chunks produced by a split are plain
//! values; they only become part of a scene when something registers them.
//! [`ChunkRegistry`] is that seam, and [`World`] is a simple in-memory
//! implementation keyed by [`ChunkId`].
//!
//! A real engine would implement [`ChunkRegistry`] on top of its own scene
//! graph, attaching a renderable entity at the chunk's placement.

use std::collections::HashMap;
use std::fmt;

use log::info;

use crate::error::VoxelResult;

use super::chunk::Chunk;
use super::voxel::GridPosition;

/// Identifier handed out by a [`ChunkRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkId(u64);

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk#{}", self.0)
    }
}

/// Anything that can take ownership of chunks and make them live in a scene.
pub trait ChunkRegistry {
    /// Takes ownership of `chunk` and returns the id it is known by.
    fn register(&mut self, chunk: Chunk) -> ChunkId;
}

/// Splits `chunk` and registers every resulting piece with `registry`.
///
/// Returns the ids of the new chunks in component order; empty when the chunk
/// was already a single connected body.
///
/// # Errors
/// Propagates [`Chunk::split_into_objects`] failures.
pub fn split_into_registry<R: ChunkRegistry>(
    chunk: &mut Chunk,
    registry: &mut R,
) -> VoxelResult<Vec<ChunkId>> {
    let pieces = chunk.split_into_objects()?;
    Ok(pieces.into_iter().map(|piece| registry.register(piece)).collect())
}

/// An in-memory collection of chunks.
#[derive(Default)]
pub struct World {
    /// All live chunks by id
    chunks: HashMap<ChunkId, Chunk>,
    /// Next id to hand out; ids are never reused
    next_id: u64,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chunk and returns its id.
    pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkId {
        let id = ChunkId(self.next_id);
        self.next_id += 1;
        self.chunks.insert(id, chunk);
        id
    }

    /// Looks up a chunk.
    pub fn get_chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(&id)
    }

    /// Looks up a chunk mutably.
    pub fn get_chunk_mut(&mut self, id: ChunkId) -> Option<&mut Chunk> {
        self.chunks.get_mut(&id)
    }

    /// Removes a chunk, returning it if it existed.
    pub fn remove_chunk(&mut self, id: ChunkId) -> Option<Chunk> {
        self.chunks.remove(&id)
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the world holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// All ids in ascending (creation) order.
    pub fn chunk_ids(&self) -> Vec<ChunkId> {
        let mut ids: Vec<ChunkId> = self.chunks.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Carves a voxel in the chunk `id`.
    ///
    /// Returns `false` if the chunk does not exist or the position is out of
    /// its bounds, mirroring [`Chunk::carve`].
    pub fn carve(&mut self, id: ChunkId, position: GridPosition) -> bool {
        self.chunks
            .get_mut(&id)
            .is_some_and(|chunk| chunk.carve(position))
    }

    /// Splits chunk `id` and registers each piece as a new chunk.
    ///
    /// The source chunk stays registered even when the split leaves it
    /// empty; use [`remove_empty`](Self::remove_empty) to drop such shells.
    /// Returns an empty list for unknown ids and single-body chunks.
    ///
    /// # Errors
    /// Propagates [`Chunk::split_into_objects`] failures.
    pub fn split_chunk(&mut self, id: ChunkId) -> VoxelResult<Vec<ChunkId>> {
        let Some(chunk) = self.chunks.get_mut(&id) else {
            return Ok(Vec::new());
        };
        let pieces = chunk.split_into_objects()?;
        let ids: Vec<ChunkId> = pieces.into_iter().map(|piece| self.add_chunk(piece)).collect();
        if !ids.is_empty() {
            info!("{} split into {} chunks", id, ids.len());
        }
        Ok(ids)
    }

    /// Drops every chunk without active voxels, returning their ids.
    pub fn remove_empty(&mut self) -> Vec<ChunkId> {
        let mut removed: Vec<ChunkId> = self
            .chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_empty())
            .map(|(&id, _)| id)
            .collect();
        removed.sort();
        for id in &removed {
            self.chunks.remove(id);
        }
        removed
    }
}

impl ChunkRegistry for World {
    fn register(&mut self, chunk: Chunk) -> ChunkId {
        self.add_chunk(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut world = World::new();
        let a = world.add_chunk(Chunk::solid(1, 1, 1).unwrap());
        let b = world.add_chunk(Chunk::solid(1, 1, 1).unwrap());
        assert!(a < b);
        assert_eq!(world.chunk_ids(), vec![a, b]);
        assert_eq!(a.to_string(), "chunk#0");
    }

    #[test]
    fn split_registers_pieces() {
        let mut world = World::new();
        let id = world.add_chunk(Chunk::solid(3, 1, 1).unwrap());
        assert!(world.carve(id, (1, 0, 0)));
        let pieces = world.split_chunk(id).unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(world.len(), 3);
        assert_eq!(world.remove_empty(), vec![id]);
        assert_eq!(world.chunk_ids(), pieces);
    }

    #[test]
    fn unknown_ids_are_harmless() {
        let mut world = World::new();
        let id = world.add_chunk(Chunk::solid(1, 1, 1).unwrap());
        world.remove_chunk(id);
        assert!(!world.carve(id, (0, 0, 0)));
        assert!(world.split_chunk(id).unwrap().is_empty());
        assert!(world.is_empty());
    }

    #[test]
    fn split_into_registry_uses_trait() {
        let mut world = World::new();
        let mut chunk = Chunk::solid(5, 1, 1).unwrap();
        chunk.carve((1, 0, 0));
        chunk.carve((3, 0, 0));
        let ids = split_into_registry(&mut chunk, &mut world).unwrap();
        assert_eq!(ids.len(), 3);
        assert!(chunk.is_empty());
        let sizes: Vec<usize> = ids
            .iter()
            .map(|&id| world.get_chunk(id).map_or(0, Chunk::active_count))
            .collect();
        assert_eq!(sizes, vec![1, 1, 1]);
    }
}
