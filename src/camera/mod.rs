//! Arcball camera: viewpoint state and pointer-driven control.

/// Camera controller mapping pointer input to zoom/orbit/pan.
mod controller;
/// Core camera state: eye, center, view basis, view/projection matrices.
mod core;

pub use controller::CameraController;
pub use core::Camera;
