//! Runtime configuration for the viewer core.
//!
//! All fields carry defaults matching the reference interaction tuning, so
//! an embedder can start from `ViewerOptions::default()` and persist edits
//! as TOML.

use serde::{Deserialize, Serialize};

use crate::error::ArcviewError;

/// Camera projection and control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Viewport width in pixels; sets the horizontal angular sensitivity
    /// (one full drag across the viewport orbits a full turn).
    pub viewport_width: f32,
    /// Viewport height in pixels; sets the vertical angular sensitivity
    /// (one full drag down the viewport orbits half a turn).
    pub viewport_height: f32,
    /// Gain applied to orbit angles on top of the per-axis sensitivity.
    pub orbit_gain: f32,
    /// Closest the eye may approach the look-at center while zooming in.
    /// Motion away from the center is never limited.
    pub min_zoom_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.5,
            zfar: 100.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            orbit_gain: 25.0,
            min_zoom_distance: 0.5,
        }
    }
}

impl CameraOptions {
    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }
}

/// Node-manipulation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    /// Gain applied to node rotation angles on top of the per-axis
    /// sensitivity.
    pub rotate_gain: f32,
    /// World units of translation per pixel-second of pointer drag.
    pub translate_speed: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            rotate_gain: 30.0,
            translate_speed: 0.5,
        }
    }
}

/// Top-level viewer options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ViewerOptions {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Node-manipulation tuning.
    pub editor: EditorOptions,
}

impl ViewerOptions {
    /// Parse options from a TOML document. Missing fields fall back to
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::OptionsParse`] on malformed TOML.
    pub fn from_toml(text: &str) -> Result<Self, ArcviewError> {
        toml::from_str(text)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))
    }

    /// Serialize options to a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ArcviewError> {
        toml::to_string_pretty(self)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))
    }
}
