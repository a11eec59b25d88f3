//! Pointer-driven arcball control: zoom, orbit, pan.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use crate::camera::Camera;
use crate::input::{InputSource, PointerButton};
use crate::options::CameraOptions;
use crate::render::{UniformStore, UNIFORM_PROJECTION, UNIFORM_VIEW};
use crate::transform::rotation_about_pivot;

/// Maps per-frame pointer deltas onto the camera and pushes the view
/// matrix to the render backend when it changed.
///
/// Level-triggered: behavior depends only on the current input snapshot,
/// never on press/release edges. A held button with zero pointer movement
/// leaves the camera untouched and uploads nothing.
pub struct CameraController {
    camera: Camera,
    /// Radians of yaw per pixel of horizontal drag (before gain and dt).
    yaw_sensitivity: f32,
    /// Radians of pitch per pixel of vertical drag (before gain and dt).
    pitch_sensitivity: f32,
    orbit_gain: f32,
    min_zoom_distance: f32,
}

impl CameraController {
    /// Create a controller with a freshly placed [`Camera`].
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            camera: Camera::new(options),
            yaw_sensitivity: TAU / options.viewport_width,
            pitch_sensitivity: PI / options.viewport_height,
            orbit_gain: options.orbit_gain,
            min_zoom_distance: options.min_zoom_distance,
        }
    }

    /// Read access to the camera state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Reposition the camera directly (initial framing, focus jumps).
    pub fn look_at(&mut self, eye: Vec3, center: Vec3) {
        self.camera.place(eye, center);
    }

    /// Push the fixed projection and current view matrices to the backend.
    /// Called once at startup; afterwards only the view is re-uploaded.
    pub fn upload_initial(&self, uniforms: &mut dyn UniformStore) {
        uniforms.set_mat4(UNIFORM_PROJECTION, self.camera.projection());
        uniforms.set_mat4(UNIFORM_VIEW, self.camera.view());
    }

    /// Apply one frame of camera input.
    ///
    /// Reads button state and pointer deltas from `input`, mutates the
    /// viewpoint, and re-uploads [`UNIFORM_VIEW`] if anything moved.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        elapsed_seconds: f32,
        uniforms: &mut dyn UniformStore,
    ) {
        let dx = input.pointer_dx();
        let dy = input.pointer_dy();
        let mut view_dirty = false;

        // Zoom: slide the eye along the sight line toward/away from center.
        if input.button_down(PointerButton::Right) && dy != 0.0 {
            view_dirty |= self.zoom(dy, elapsed_seconds);
        }

        // Orbit: yaw about world up through the center, then pitch about
        // the view-aligned right axis through the center.
        if input.button_down(PointerButton::Left)
            && !input.modifier_down()
            && (dx != 0.0 || dy != 0.0)
        {
            self.orbit(dx, dy, elapsed_seconds);
            view_dirty = true;
        }

        // Pan: translate eye and center together along the view plane.
        if (input.button_down(PointerButton::Middle)
            || (input.button_down(PointerButton::Left)
                && input.modifier_down()))
            && (dx != 0.0 || dy != 0.0)
        {
            self.pan(dx, dy, elapsed_seconds);
            view_dirty = true;
        }

        if view_dirty {
            uniforms.set_mat4(UNIFORM_VIEW, self.camera.view());
        }
    }

    /// Returns whether the eye actually moved.
    fn zoom(&mut self, dy: f32, elapsed_seconds: f32) -> bool {
        let amount = -dy * elapsed_seconds;
        // Inside the minimum distance only outward motion is allowed.
        if self.camera.distance() < self.min_zoom_distance && amount > 0.0 {
            return false;
        }
        let eye = self.camera.eye().lerp(self.camera.center(), amount);
        self.camera.place(eye, self.camera.center());
        true
    }

    fn orbit(&mut self, dx: f32, dy: f32, elapsed_seconds: f32) {
        let yaw =
            -dx * self.yaw_sensitivity * elapsed_seconds * self.orbit_gain;
        let pitch =
            dy * self.pitch_sensitivity * elapsed_seconds * self.orbit_gain;

        let center = self.camera.center();
        // Pitch axis is the right vector from before the yaw rotation.
        let right = self.camera.right();

        let mut eye = rotation_about_pivot(Vec3::Y, yaw, center)
            .transform_point3(self.camera.eye());
        eye = rotation_about_pivot(right, pitch, center)
            .transform_point3(eye);
        self.camera.place(eye, center);
    }

    fn pan(&mut self, dx: f32, dy: f32, elapsed_seconds: f32) {
        // Vertical delta inverted: dragging up moves the view up.
        let offset = self.camera.up() * (-dy * elapsed_seconds)
            + self.camera.right() * (dx * elapsed_seconds);
        self.camera.place(
            self.camera.eye() + offset,
            self.camera.center() + offset,
        );
    }
}
