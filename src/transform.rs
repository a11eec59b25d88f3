//! Named affine-transform building blocks.
//!
//! The interaction code composes every manipulation out of these two ops
//! instead of spelling the translate/rotate/translate-back chains inline at
//! each call site.

use glam::{Mat4, Vec3};

/// Conjugate `transform` so it acts about `pivot` instead of the origin:
/// `T(pivot) * transform * T(pivot)⁻¹`.
#[must_use]
pub fn about_pivot(transform: Mat4, pivot: Vec3) -> Mat4 {
    Mat4::from_translation(pivot) * transform * Mat4::from_translation(-pivot)
}

/// Rotation by `angle` radians about an arbitrary `axis` through `pivot`.
///
/// `axis` need not be unit length; it is normalized here.
#[must_use]
pub fn rotation_about_pivot(axis: Vec3, angle: f32, pivot: Vec3) -> Mat4 {
    about_pivot(Mat4::from_axis_angle(axis.normalize(), angle), pivot)
}

/// Translation component of an affine transform.
#[must_use]
pub fn translation_of(transform: &Mat4) -> Vec3 {
    transform.w_axis.truncate()
}
