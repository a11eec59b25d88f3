//! Seam to the rendering backend.
//!
//! The backend itself (shader compilation, buffer management, draw calls)
//! lives outside this crate; all the core ever does is push named 4x4
//! uniforms at it.

use glam::Mat4;

/// Name of the view-matrix uniform, rewritten whenever the camera moves.
pub const UNIFORM_VIEW: &str = "u_v";

/// Name of the projection-matrix uniform, written once at startup.
pub const UNIFORM_PROJECTION: &str = "u_p";

/// Write access to the active shader's named 4x4 matrix uniforms.
///
/// Implemented by the embedder over whatever GPU abstraction it uses. The
/// core only ever writes [`UNIFORM_VIEW`] and [`UNIFORM_PROJECTION`].
pub trait UniformStore {
    /// Set the named 4x4 matrix uniform on the active shader.
    fn set_mat4(&mut self, name: &str, value: &Mat4);
}
