//! Transform gizmo interaction pipeline
//!
//! Converts 2D pointer input into 3D transform edits through a set of
//! draggable handles:
//!
//! - [`camera::Camera`] - Orbit camera with screen/world projections
//! - [`scene::Scene`] - Transformable objects and layer-masked ray casting
//! - [`pointer::PointerTracker`] - Fixed-depth pointer sampling and deltas
//! - [`handle`] - Linear (translate/scale) and gimbal (rotate) drag handles
//! - [`rig::GizmoRig`] - The composed handle group and its colliders
//! - [`engine::TransformEngine`] - Applies handle events to the selection
//!
//! Everything runs frame-synchronously on one thread: the host calls
//! [`engine::TransformEngine::update`] once per frame with the pointer
//! snapshot, the active camera and the scene.

pub mod camera;
pub mod collision;
pub mod constants;
pub mod engine;
pub mod handle;
pub mod pointer;
pub mod rig;
pub mod scene;

pub use camera::Camera;
pub use engine::{FrameInput, TransformEngine};
pub use handle::{GimbalHandle, HandleEvent, HandleId, LinearHandle};
pub use pointer::PointerTracker;
pub use rig::GizmoRig;
pub use scene::{Layer, LayerMask, Scene, SceneHit, SceneObject};
