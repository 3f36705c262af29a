//! Mesh generation for voxel chunks.
//!
//! [`MeshBuilder`] turns a [`VoxelGrid`] snapshot into a [`MeshBuffer`]: one
//! axis-aligned unit cube per active voxel, eight vertices and twelve
//! triangles each.
//!
//! Voxels are visited in ascending x, then y, then z order, so vertex and
//! index offsets are identical for identical grids. Faces shared by two
//! active voxels are emitted twice by default. [`MeshOptions::cull_hidden_faces`]
//! switches to a mode that drops those faces; it changes vertex and index
//! counts and is off unless asked for.
//!
//! Every build produces a brand new buffer. Nothing is patched in place.

use cgmath::{InnerSpace, Point3, Vector3};
use log::debug;
use web_time::Instant;

use crate::rendering::cube_face::{CubeFace, CUBE_CORNERS, INDICES_PER_CUBE, VERTICES_PER_CUBE};
use crate::rendering::vertex::Vertex;
use crate::voxels::grid::VoxelGrid;
use crate::voxels::voxel::Voxel;

/// Vertex and triangle-index buffers derived from a grid.
///
/// `indices.len()` is always a multiple of 3 and every index is below
/// `vertices.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex data in emission order
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the buffer holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions only, for consumers that ignore colour.
    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.vertices.iter().map(|vertex| vertex.position)
    }

    /// One unit normal per triangle, computed as `(b - a) x (c - a)`.
    ///
    /// For meshes from [`MeshBuilder`] each normal points out of its cube.
    pub fn face_normals(&self) -> Vec<Vector3<f32>> {
        self.indices
            .chunks_exact(3)
            .map(|triangle| {
                let a = self.vertices[triangle[0] as usize].point();
                let b = self.vertices[triangle[1] as usize].point();
                let c = self.vertices[triangle[2] as usize].point();
                (b - a).cross(c - a).normalize()
            })
            .collect()
    }

    /// Approximate memory used by both buffers, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<Vertex>()
            + self.indices.len() * std::mem::size_of::<u32>()
    }

    fn push_cube(&mut self, voxel: &Voxel, faces: &[CubeFace]) {
        let (x, y, z) = voxel.position;
        let origin = Point3::new(x as f32, y as f32, z as f32);
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(CUBE_CORNERS.iter().map(|&[cx, cy, cz]| {
            Vertex::new(origin + Vector3::new(cx, cy, cz), voxel.color)
        }));
        for face in faces {
            self.indices
                .extend(face.triangles().iter().map(|corner| vertex_offset + corner));
        }
    }
}

/// Knobs for [`MeshBuilder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshOptions {
    /// Skip faces shared with an active face-neighbour, and skip voxels with
    /// no exposed face entirely. Off by default.
    pub cull_hidden_faces: bool,
}

/// Builds [`MeshBuffer`]s from grids.
#[derive(Copy, Clone, Debug, Default)]
pub struct MeshBuilder {
    options: MeshOptions,
}

impl MeshBuilder {
    /// Creates a builder with the given options.
    pub fn new(options: MeshOptions) -> Self {
        MeshBuilder { options }
    }

    /// The options this builder was created with.
    pub fn options(&self) -> MeshOptions {
        self.options
    }

    /// Generates a fresh mesh for every active voxel of `grid`.
    ///
    /// # Arguments
    /// * `grid` - Grid to mesh; voxels are visited in ascending x, y, z order
    ///
    /// # Returns
    /// A new [`MeshBuffer`]. Without culling it holds 8 vertices and 36
    /// indices per active voxel.
    pub fn build(&self, grid: &VoxelGrid) -> MeshBuffer {
        let start = Instant::now();
        let active = grid.active_count();
        let mut mesh = MeshBuffer {
            vertices: Vec::with_capacity(active * VERTICES_PER_CUBE),
            indices: Vec::with_capacity(active * INDICES_PER_CUBE),
        };

        let all_faces = CubeFace::all();
        let mut exposed = Vec::with_capacity(all_faces.len());
        for voxel in grid.iter_active() {
            if self.options.cull_hidden_faces {
                exposed.clear();
                exposed.extend(all_faces.iter().copied().filter(|face| {
                    let (x, y, z) = voxel.position;
                    let (dx, dy, dz) = face.neighbor_offset();
                    !grid.is_active((x + dx, y + dy, z + dz))
                }));
                if exposed.is_empty() {
                    continue;
                }
                mesh.push_cube(voxel, &exposed);
            } else {
                mesh.push_cube(voxel, &all_faces);
            }
        }

        debug!(
            "Built mesh for {} voxels: {} vertices, {} triangles in {:?}",
            active,
            mesh.vertex_count(),
            mesh.triangle_count(),
            start.elapsed()
        );
        mesh
    }
}
