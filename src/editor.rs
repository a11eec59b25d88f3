//! Camera-aligned manipulation of a node's local transform.
//!
//! Every interaction is expressed in the camera's current axes and applied
//! as if the node had no prior orientation: dragging left moves the node
//! left on screen no matter how deeply nested or pre-rotated it is. That
//! works by round-tripping the local transform through the accumulated
//! parent-to-world transform `P = W * L⁻¹`, applying the view-aligned
//! deltas there, and converting back.

use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

use crate::camera::Camera;
use crate::input::{InputSource, PointerButton};
use crate::options::{CameraOptions, EditorOptions};
use crate::scene::SceneNode;
use crate::transform::{about_pivot, translation_of};

/// Maps per-frame pointer deltas onto a selected scene node.
pub struct NodeEditor {
    /// Radians of yaw per pixel of horizontal drag (before gain and dt).
    yaw_sensitivity: f32,
    /// Radians of pitch per pixel of vertical drag (before gain and dt).
    pitch_sensitivity: f32,
    rotate_gain: f32,
    translate_speed: f32,
}

impl NodeEditor {
    /// Create an editor sharing the camera's angular sensitivities.
    #[must_use]
    pub fn new(camera: &CameraOptions, editor: &EditorOptions) -> Self {
        Self {
            yaw_sensitivity: TAU / camera.viewport_width,
            pitch_sensitivity: PI / camera.viewport_height,
            rotate_gain: editor.rotate_gain,
            translate_speed: editor.translate_speed,
        }
    }

    /// Apply one frame of manipulation input to `node`.
    ///
    /// Builds scale/rotate/translate deltas from the pointer state (each
    /// identity when its trigger is absent) and folds them into the node's
    /// local transform. When no input is active the local transform is left
    /// bit-for-bit untouched.
    pub fn update(
        &self,
        node: &mut dyn SceneNode,
        camera: &Camera,
        input: &dyn InputSource,
        elapsed_seconds: f32,
    ) {
        let dx = input.pointer_dx();
        let dy = input.pointer_dy();

        let mut scale = Mat4::IDENTITY;
        let mut rotation = Mat4::IDENTITY;
        let mut translation = Mat4::IDENTITY;
        let mut node_dirty = false;

        // Scale: uniform, about the node's own local frame.
        if input.button_down(PointerButton::Right) && dy != 0.0 {
            let factor = 1.0 + dy * elapsed_seconds;
            scale = Mat4::from_scale(Vec3::splat(factor));
            node_dirty = true;
        }

        // Rotate: about the camera's current up and right axes.
        if input.button_down(PointerButton::Left)
            && !input.modifier_down()
            && (dx != 0.0 || dy != 0.0)
        {
            let yaw = dx
                * self.yaw_sensitivity
                * elapsed_seconds
                * self.rotate_gain;
            let pitch = dy
                * self.pitch_sensitivity
                * elapsed_seconds
                * self.rotate_gain;
            rotation = Mat4::from_axis_angle(camera.up(), yaw)
                * Mat4::from_axis_angle(camera.right(), pitch);
            node_dirty = true;
        }

        // Translate: along the camera's up and right axes.
        if (input.button_down(PointerButton::Middle)
            || (input.button_down(PointerButton::Left)
                && input.modifier_down()))
            && (dx != 0.0 || dy != 0.0)
        {
            let x = dx * elapsed_seconds * self.translate_speed;
            let y = -dy * elapsed_seconds * self.translate_speed;
            let offset = camera.up() * y + camera.right() * x;
            translation = Mat4::from_translation(offset);
            node_dirty = true;
        }

        if !node_dirty {
            return;
        }

        let local = node.local_transform();
        let world = node.world_transform();
        // Accumulated parent-to-world transform, excluding this node's own
        // local contribution.
        let parent = world * local.inverse();

        // Scale composes in the node's own local frame.
        let mut transform = local * scale;

        // Lift into world-relative terms so the remaining deltas act along
        // view-aligned axes rather than the node's own rotated ones.
        transform = parent * transform;

        // Rotate about the node's own position, not the world origin.
        let pivot = translation_of(&transform);
        transform = about_pivot(rotation, pivot) * transform;

        // World-aligned translation, then drop back out of world space.
        transform = translation * transform;
        transform = parent.inverse() * transform;

        node.set_local_transform(transform);
    }
}
