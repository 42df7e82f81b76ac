//! Axis, transformation kind and coordinate space enums

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A coordinate axis a handle is bound to.
///
/// Whether this means the target's local basis vector or the fixed world
/// basis vector depends on the active [`SpaceMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in X/Y/Z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// World basis vector for this axis
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Which transform property a linear handle drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    Translation,
    Scale,
}

/// Coordinate space in which handle axes are resolved.
///
/// Scale handles are only defined in local space and are hidden while
/// `World` is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpaceMode {
    #[default]
    Local,
    World,
}

impl SpaceMode {
    /// Flip between `Local` and `World`
    pub fn toggled(&self) -> SpaceMode {
        match self {
            SpaceMode::Local => SpaceMode::World,
            SpaceMode::World => SpaceMode::Local,
        }
    }
}
