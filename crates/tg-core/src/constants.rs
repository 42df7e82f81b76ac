//! Global constants for tg-core

/// Smallest per-axis local scale when negative scaling is disallowed
pub const MIN_SCALE: f32 = 1e-4;

/// Default gizmo distance from the camera
pub const DEFAULT_GIZMO_DISTANCE: f32 = 6.0;

/// Default translation strength modifier
pub const DEFAULT_TRANSLATION_STRENGTH: f32 = 3.0;

/// Default rotation strength modifier
pub const DEFAULT_ROTATION_STRENGTH: f32 = 1.0;

/// Default scaling strength modifier
pub const DEFAULT_SCALE_STRENGTH: f32 = 40.0;

/// Default maximum ray distance for selection validation
pub const DEFAULT_SELECTION_RANGE: f32 = 100.0;
