//! Viewpoint state and derived matrices.

use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Initial viewer position, matching the reference viewer's framing.
const DEFAULT_EYE: Vec3 = Vec3::new(2.0, 0.5, -2.0);

/// Look-at camera with a cached view-space basis.
///
/// Invariant: `right`, `up`, and `forward` are mutually orthogonal unit
/// vectors derived from the current `eye`/`center`, and `view` is the
/// look-at transform for them. Every mutation goes through [`Camera::place`],
/// which re-derives all of it, so the cached values are never stale.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Create a camera at the default viewpoint looking at the origin, with
    /// a fixed perspective projection taken from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let projection = Mat4::perspective_rh_gl(
            options.fovy.to_radians(),
            options.aspect(),
            options.znear,
            options.zfar,
        );
        let mut camera = Self {
            eye: DEFAULT_EYE,
            center: Vec3::ZERO,
            forward: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            view: Mat4::IDENTITY,
            projection,
        };
        camera.place(DEFAULT_EYE, Vec3::ZERO);
        camera
    }

    /// Move the viewpoint, re-deriving the basis vectors and view matrix.
    ///
    /// `eye` and `center` must not coincide; the look-at direction would be
    /// undefined.
    pub fn place(&mut self, eye: Vec3, center: Vec3) {
        self.eye = eye;
        self.center = center;
        self.forward = (eye - center).normalize();
        self.right = Vec3::Y.cross(self.forward).normalize();
        self.up = self.forward.cross(self.right).normalize();
        self.view = Mat4::look_at_rh(eye, center, self.up);
    }

    /// Viewer position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target in world space.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Distance from the eye to the look-at center.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.center)
    }

    /// Unit vector from the center toward the eye.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// View-aligned right axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// View-aligned up axis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current look-at view matrix.
    #[must_use]
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Fixed perspective projection matrix.
    #[must_use]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::Camera;
    use crate::options::CameraOptions;
    use glam::Vec3;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(&CameraOptions::default());
        assert!((camera.forward().length() - 1.0).abs() < EPS);
        assert!((camera.right().length() - 1.0).abs() < EPS);
        assert!((camera.up().length() - 1.0).abs() < EPS);
        assert!(camera.forward().dot(camera.right()).abs() < EPS);
        assert!(camera.forward().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn test_view_maps_eye_to_origin() {
        let camera = Camera::new(&CameraOptions::default());
        let eye_in_view = camera.view().transform_point3(camera.eye());
        assert!(eye_in_view.length() < EPS);
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let camera = Camera::new(&CameraOptions::default());
        let center_in_view =
            camera.view().transform_point3(camera.center());
        assert!(center_in_view.x.abs() < EPS);
        assert!(center_in_view.y.abs() < EPS);
        assert!((center_in_view.z + camera.distance()).abs() < EPS);
    }

    #[test]
    fn test_place_rederives_basis() {
        let mut camera = Camera::new(&CameraOptions::default());
        camera.place(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert!(camera.forward().distance(Vec3::Z) < EPS);
        assert!(camera.right().distance(Vec3::X) < EPS);
        assert!(camera.up().distance(Vec3::Y) < EPS);
    }
}
