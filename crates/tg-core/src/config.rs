//! Gizmo configuration
//!
//! Tunable strengths and behavior flags for the transform engine, loadable
//! from RON configuration files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GIZMO_DISTANCE, DEFAULT_ROTATION_STRENGTH, DEFAULT_SCALE_STRENGTH,
    DEFAULT_SELECTION_RANGE, DEFAULT_TRANSLATION_STRENGTH,
};
use crate::error::GizmoError;

/// Transform engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// Constant distance the gizmo keeps from the camera, regardless of the
    /// target object's depth in the scene
    pub distance_from_camera: f32,
    /// Translation speed per unit of pointer travel, before distance scaling
    pub translation_strength: f32,
    /// Rotation speed per unit of pointer travel
    pub rotation_strength: f32,
    /// Scaling speed per unit of pointer travel
    pub scale_strength: f32,
    /// Permit scale components to pass through zero and go negative
    pub allow_negative_scaling: bool,
    /// Maximum ray distance when validating what a press landed on
    pub selection_range: f32,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            distance_from_camera: DEFAULT_GIZMO_DISTANCE,
            translation_strength: DEFAULT_TRANSLATION_STRENGTH,
            rotation_strength: DEFAULT_ROTATION_STRENGTH,
            scale_strength: DEFAULT_SCALE_STRENGTH,
            allow_negative_scaling: false,
            selection_range: DEFAULT_SELECTION_RANGE,
        }
    }
}

impl GizmoConfig {
    /// Load a config from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GizmoError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| GizmoError::ConfigIo(e.to_string()))?;
        ron::from_str(&text).map_err(|e| GizmoError::ConfigFormat(e.to_string()))
    }

    /// Save the config to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GizmoError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| GizmoError::ConfigFormat(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| GizmoError::ConfigIo(e.to_string()))
    }
}
