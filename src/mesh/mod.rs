//! Mesh import: OBJ text in, renderable buffers out.

mod obj;

pub use obj::{load_obj, parse_obj};

/// Flat geometry buffers ready for upload to the rendering backend.
///
/// Produced once at load time and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions, three scalars per vertex (x, y, z), normalized
    /// into `[-1, 1]`.
    pub vertices: Vec<f32>,
    /// Triangle corner indices, three per triangle, each in
    /// `[0, vertex_count)`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles in the buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
