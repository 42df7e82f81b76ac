//! Transform engine
//!
//! The sole consumer of handle events. Owns the current selection, the
//! coordinate-space mode and the gizmo rig, and applies every pointer delta
//! to the selected object's translation, rotation and scale.
//!
//! One call to [`TransformEngine::update`] per rendered frame runs the fixed
//! order: selection validation, space toggle, gizmo placement, then the
//! frame's drained drag events.

use glam::{Quat, Vec2, Vec3};
use uuid::Uuid;

use tg_core::{GizmoConfig, SpaceMode, TransformKind};

use crate::camera::Camera;
use crate::handle::HandleEvent;
use crate::rig::GizmoRig;
use crate::scene::{Layer, LayerMask, Scene};

/// Per-frame input snapshot fed to the engine
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Pointer position in screen pixels
    pub pointer: Vec2,
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
    /// Coordinate-space toggle action fired this frame
    pub toggle_space: bool,
}

/// Applies handle drag events to the selected object and keeps the gizmo
/// placed at a constant apparent size in front of the camera
#[derive(Debug)]
pub struct TransformEngine {
    config: GizmoConfig,
    space: SpaceMode,
    selection: Option<Uuid>,
    rig: GizmoRig,
}

impl TransformEngine {
    /// Create an engine with nothing selected
    pub fn new(config: GizmoConfig) -> Self {
        Self {
            config,
            space: SpaceMode::default(),
            selection: None,
            rig: GizmoRig::new(),
        }
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    pub fn space(&self) -> SpaceMode {
        self.space
    }

    /// The currently selected object, if any
    pub fn selection(&self) -> Option<Uuid> {
        self.selection
    }

    /// The gizmo's handle group, for rendering and hit feedback
    pub fn rig(&self) -> &GizmoRig {
        &self.rig
    }

    /// Run one frame of the interaction loop
    pub fn update(&mut self, input: &FrameInput, camera: Option<&Camera>, scene: &mut Scene) {
        // Releasing the pointer ends every drag session unconditionally,
        // wherever the pointer is and whatever the camera state.
        if input.released {
            self.rig.release();
        }

        let Some(camera) = camera else {
            if input.pressed || self.rig.any_dragging() || self.selection.is_some() {
                tracing::warn!("no active camera; skipping gizmo frame");
            }
            return;
        };

        // 1. Selection validation, before any handle event is interpreted
        if input.pressed {
            self.validate_selection(camera, input, scene);
        }

        // 2. Coordinate-space toggle
        if input.toggle_space {
            self.toggle_space();
        }

        // 3. Gizmo placement
        self.place_gizmo(camera, scene);

        // 4. Hover feedback, then this frame's drag events
        if !self.rig.any_dragging() {
            let (origin, dir) = camera.screen_to_ray(input.pointer, input.viewport);
            self.rig.update_hover(origin, dir);
        }

        let events = match self.rig.poll(Some(camera), input.pointer, input.viewport) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("handle polling failed: {e}");
                Vec::new()
            }
        };
        for event in &events {
            self.handle_event(event, camera, scene);
        }
    }

    /// External selection broadcast: an object reported a press on itself
    pub fn on_object_selected(&mut self, id: Uuid) {
        tracing::debug!(%id, "object selected");
        self.selection = Some(id);
        self.rig.set_visible(true);
    }

    /// Toggle between local and world space. Scale handles only exist in
    /// local space, so the rig hides them in world mode.
    pub fn toggle_space(&mut self) {
        self.space = self.space.toggled();
        self.rig.set_space(self.space);
        tracing::debug!(space = ?self.space, "coordinate space toggled");
    }

    /// Decide what a fresh press means: grab a handle, select an object, or
    /// deselect. Exactly one of the three happens per press.
    fn validate_selection(&mut self, camera: &Camera, input: &FrameInput, scene: &Scene) {
        let (origin, dir) = camera.screen_to_ray(input.pointer, input.viewport);
        let mask = LayerMask::of(&[
            Layer::Transformable,
            Layer::LinearHandle,
            Layer::GimbalHandle,
        ]);

        let rig_hit = self
            .rig
            .hit_test(origin, dir, mask)
            .filter(|hit| hit.distance <= self.config.selection_range);
        let scene_hit = if mask.contains(Layer::Transformable) {
            scene.ray_cast(origin, dir, self.config.selection_range)
        } else {
            None
        };

        // The front-most collider wins: a transformable standing between the
        // camera and the gizmo absorbs the press instead of the handle behind
        // it. A press that grabs a handle never changes the selection.
        if let Some(hit) = rig_hit
            && scene_hit.is_none_or(|s| hit.distance <= s.distance)
        {
            // The hit point doubles as the gimbal's grab ray cast result
            let grab_point = matches!(hit.handle, crate::handle::HandleId::Gimbal { .. })
                .then_some(hit.point);
            if let Err(e) =
                self.rig
                    .press(hit.handle, Some(camera), input.pointer, input.viewport, grab_point)
            {
                tracing::warn!("failed to start drag session: {e}");
            }
        } else if let Some(hit) = scene_hit {
            self.on_object_selected(hit.object);
        } else {
            self.clear_selection();
        }
    }

    fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            tracing::debug!("selection cleared");
        }
        self.rig.set_visible(false);
    }

    /// Keep the gizmo at a constant distance from the camera along the
    /// camera-to-target ray, so its apparent size never changes with the
    /// target's depth in the scene
    fn place_gizmo(&mut self, camera: &Camera, scene: &Scene) {
        let target = match self.selection.and_then(|id| scene.object(id)) {
            Some(object) => object.transform,
            None => {
                // Nothing selected, or the selected object is gone
                self.selection = None;
                self.rig.set_visible(false);
                return;
            }
        };

        if let Some(to_target) = (target.translation - camera.position).try_normalize() {
            self.rig.position = camera.position + to_target * self.config.distance_from_camera;
        }
        self.rig.rotation = match self.space {
            SpaceMode::Local => target.rotation,
            SpaceMode::World => Quat::IDENTITY,
        };
        self.rig.set_visible(true);
    }

    /// Apply one handle event to the selected object
    pub fn handle_event(&mut self, event: &HandleEvent, camera: &Camera, scene: &mut Scene) {
        let Some(id) = self.selection else {
            return;
        };
        let Some(object) = scene.object_mut(id) else {
            return;
        };

        match *event {
            HandleEvent::LinearDrag { kind, axis, delta } => {
                let Some(delta_dir) = delta.try_normalize() else {
                    // Zero-length delta carries no direction this frame
                    return;
                };
                let resolved = object.transform.resolve_axis(axis, self.space);
                let perceived = perceived_axis(resolved, camera, self.rig.position);

                // Signed influence of the pointer motion along the axis as
                // the user perceives it; the transformation itself follows
                // the true axis.
                let influence = delta_dir.dot(perceived);
                let vector = resolved * influence;

                match kind {
                    TransformKind::Translation => {
                        // Farther targets move proportionally more per pixel
                        // so on-screen responsiveness stays constant
                        let modifier = camera.position.distance(object.transform.translation)
                            * self.config.translation_strength;
                        object.transform.translation += vector * modifier * delta.length();
                    }
                    TransformKind::Scale => {
                        let local_delta = object.transform.inverse_transform_direction(vector)
                            * self.config.scale_strength
                            * delta.length();
                        object
                            .transform
                            .apply_scale_delta(local_delta, self.config.allow_negative_scaling);
                    }
                }
            }
            HandleEvent::RotationDrag {
                axis,
                delta,
                grab_point,
            } => {
                let Some(delta_dir) = delta.try_normalize() else {
                    return;
                };
                let resolved = object.transform.resolve_axis(axis, self.space);
                let Some(tangent) = drag_tangent(resolved, grab_point - self.rig.position) else {
                    tracing::debug!("degenerate lever arm; skipping rotation frame");
                    return;
                };

                let angle =
                    delta_dir.dot(tangent) * delta.length() * self.config.rotation_strength;
                object.transform.rotate_world(resolved, angle);
            }
        }
    }
}

/// View-angle corrected version of a transformation axis.
///
/// Rotates the resolved axis by the angle between the camera's forward
/// direction and the camera-to-gizmo direction, about the axis perpendicular
/// to both. This keeps drag response intuitive when the true axis is nearly
/// edge-on to the camera. It is a deliberate heuristic approximation, not a
/// full view-projection-consistent correction.
pub fn perceived_axis(resolved: Vec3, camera: &Camera, gizmo_position: Vec3) -> Vec3 {
    let Some(to_gizmo) = (gizmo_position - camera.position).try_normalize() else {
        return resolved;
    };
    let forward = camera.forward();
    let Some(pivot) = forward.cross(to_gizmo).try_normalize() else {
        // Gizmo straight ahead: no correction to apply
        return resolved;
    };
    let angle = forward.dot(to_gizmo).clamp(-1.0, 1.0).acos();
    Quat::from_axis_angle(pivot, angle) * resolved
}

/// Direction along a rotation ring's surface at the grabbed point.
///
/// The rotation axis and the lever arm from the gizmo center to the grab
/// point are perpendicular by construction, so their cross product is the
/// tangent the ring can intuitively be dragged along. Returns `None` for a
/// degenerate lever arm.
pub fn drag_tangent(rotation_axis: Vec3, lever_arm: Vec3) -> Option<Vec3> {
    let lever = lever_arm.try_normalize()?;
    rotation_axis.cross(lever).try_normalize()
}
