//! Interaction constants
//!
//! This module centralizes the magic numbers used across the interaction
//! pipeline: pointer projection, handle collider sizes and camera defaults.

/// Pointer projection constants
pub mod pointer {
    /// Depth in front of the camera of the plane pointer positions are
    /// projected into. Samples are only ever differenced, so the exact
    /// depth only affects delta magnitudes.
    pub const PLANE_DEPTH: f32 = 0.3;
}

/// Handle collider constants
pub mod rig {
    /// Translation arrow length along its axis
    pub const ARROW_LENGTH: f32 = 1.0;
    /// Hit test cylinder radius for translation arrows
    pub const ARROW_HIT_RADIUS: f32 = 0.08;
    /// Rotation ring radius
    pub const RING_RADIUS: f32 = 0.8;
    /// Hit test thickness for rotation rings
    pub const RING_HIT_THICKNESS: f32 = 0.1;
    /// Scale knob distance from the gizmo center, along the negative axis
    /// so knobs never overlap the translation arrows
    pub const SCALE_KNOB_OFFSET: f32 = 0.6;
    /// Hit test sphere radius for scale knobs
    pub const SCALE_HIT_RADIUS: f32 = 0.1;
}

/// Camera default parameters
pub mod camera {
    /// Default field of view in degrees
    pub const DEFAULT_FOV_DEGREES: f32 = 40.0;
    /// Default near clipping plane
    pub const DEFAULT_NEAR: f32 = 0.1;
    /// Default far clipping plane
    pub const DEFAULT_FAR: f32 = 100000.0;
    /// Default orbit distance
    pub const DEFAULT_DISTANCE: f32 = 5.0;
    /// Default yaw angle in degrees
    pub const DEFAULT_YAW_DEGREES: f32 = 45.0;
    /// Default pitch angle in degrees
    pub const DEFAULT_PITCH_DEGREES: f32 = 30.0;
    /// Minimum pitch angle in degrees
    pub const MIN_PITCH_DEGREES: f32 = -89.0;
    /// Maximum pitch angle in degrees
    pub const MAX_PITCH_DEGREES: f32 = 89.0;
    /// Pan sensitivity multiplier
    pub const PAN_SCALE: f32 = 0.002;
    /// Zoom sensitivity multiplier
    pub const ZOOM_SCALE: f32 = 0.1;
    /// Minimum orbit distance
    pub const MIN_DISTANCE: f32 = 0.1;
    /// Maximum orbit distance
    pub const MAX_DISTANCE: f32 = 10000.0;
}
