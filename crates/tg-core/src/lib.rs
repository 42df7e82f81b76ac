//! Transform gizmo core
//!
//! Data model and math for the gizmo's pointer-to-transform pipeline:
//! axes, transformation kinds, coordinate spaces, target transforms and
//! the gizmo configuration. No camera or scene knowledge lives here.

pub mod axis;
pub mod config;
pub mod constants;
pub mod error;
pub mod transform;

pub use axis::{Axis, SpaceMode, TransformKind};
pub use config::GizmoConfig;
pub use error::GizmoError;
pub use transform::Transform;
