//! Target transform representation

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::axis::{Axis, SpaceMode};
use crate::constants::MIN_SCALE;

/// Position, orientation and non-uniform scale of a transformable object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform at the world origin
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform at the given position
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Local +X basis vector in world space
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local +Y basis vector in world space
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local +Z basis vector in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Resolve an axis to a world-space unit vector for the given space mode
    pub fn resolve_axis(&self, axis: Axis, space: SpaceMode) -> Vec3 {
        match space {
            SpaceMode::Local => self.rotation * axis.unit(),
            SpaceMode::World => axis.unit(),
        }
    }

    /// Transform a world-space direction into this transform's local space
    pub fn inverse_transform_direction(&self, dir: Vec3) -> Vec3 {
        self.rotation.inverse() * dir
    }

    /// Rotate about a world-space axis by `angle` radians
    pub fn rotate_world(&mut self, axis: Vec3, angle: f32) {
        self.rotation = (Quat::from_axis_angle(axis, angle) * self.rotation).normalize();
    }

    /// Add a local-space scale delta, clamping each component to the minimum
    /// positive scale unless negative scaling is allowed
    pub fn apply_scale_delta(&mut self, delta: Vec3, allow_negative: bool) {
        let mut new_scale = self.scale + delta;
        if !allow_negative {
            new_scale = new_scale.max(Vec3::splat(MIN_SCALE));
        }
        self.scale = new_scale;
    }

    /// Matrix form (scale, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}
