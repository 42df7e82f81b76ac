//! The composed gizmo handle group
//!
//! Three translation arrows, three scale knobs and three rotation rings,
//! plus the colliders that make them pressable. The rig routes a press to
//! the nearest hit handle, polls dragging handles for events and keeps
//! hover highlighting current.

use glam::{Quat, Vec2, Vec3};

use tg_core::{Axis, GizmoError, SpaceMode, TransformKind};

use crate::camera::Camera;
use crate::collision::{ray_cylinder_intersection, ray_ring_intersection, ray_sphere_intersection};
use crate::constants::rig as constants;
use crate::handle::{GimbalHandle, HandleEvent, HandleId, LinearHandle};
use crate::scene::{Layer, LayerMask};

/// A ray hit on one of the rig's handles
#[derive(Debug, Clone, Copy)]
pub struct RigHit {
    pub handle: HandleId,
    /// World-space hit point on the handle collider
    pub point: Vec3,
    pub distance: f32,
}

/// The gizmo's handle group
#[derive(Debug)]
pub struct GizmoRig {
    /// Gizmo center in world space
    pub position: Vec3,
    /// Handle orientation: the target's rotation in local mode, identity in
    /// world mode
    pub rotation: Quat,
    visible: bool,
    linears: Vec<LinearHandle>,
    gimbals: Vec<GimbalHandle>,
}

impl Default for GizmoRig {
    fn default() -> Self {
        Self::new()
    }
}

impl GizmoRig {
    /// Create a hidden rig at the origin with one linear handle per axis per
    /// kind and one gimbal per axis
    pub fn new() -> Self {
        let mut linears = Vec::with_capacity(6);
        for kind in [TransformKind::Translation, TransformKind::Scale] {
            for axis in Axis::ALL {
                linears.push(LinearHandle::new(axis, kind));
            }
        }
        let gimbals = Axis::ALL.map(GimbalHandle::new).into_iter().collect();

        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            visible: false,
            linears,
            gimbals,
        }
    }

    /// Whether the handle group is shown at all
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the whole handle group
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the scale knobs are currently shown
    pub fn scale_handles_visible(&self) -> bool {
        self.linears
            .iter()
            .filter(|h| h.kind() == TransformKind::Scale)
            .all(|h| h.visible)
    }

    /// Apply the coordinate space: scale is undefined in world space, so its
    /// handles are hidden there rather than left inert. A hidden handle must
    /// not keep an in-flight drag session, so hiding also ends it.
    pub fn set_space(&mut self, space: SpaceMode) {
        let show_scale = space == SpaceMode::Local;
        for handle in &mut self.linears {
            if handle.kind() == TransformKind::Scale {
                if !show_scale && handle.is_dragging() {
                    handle.end_drag();
                }
                handle.visible = show_scale;
            }
        }
    }

    /// Axis direction in the rig's current orientation
    pub fn axis_direction(&self, axis: Axis) -> Vec3 {
        self.rotation * axis.unit()
    }

    /// Whether any handle currently owns a drag session
    pub fn any_dragging(&self) -> bool {
        self.dragging_handle().is_some()
    }

    /// The handle owning the current drag session, if any
    pub fn dragging_handle(&self) -> Option<HandleId> {
        for handle in &self.linears {
            if handle.is_dragging() {
                return Some(HandleId::Linear {
                    kind: handle.kind(),
                    axis: handle.axis(),
                });
            }
        }
        for handle in &self.gimbals {
            if handle.is_dragging() {
                return Some(HandleId::Gimbal {
                    axis: handle.axis(),
                });
            }
        }
        None
    }

    /// Cast a ray against the handle colliders in the masked layers.
    /// Returns the closest hit.
    pub fn hit_test(&self, ray_origin: Vec3, ray_dir: Vec3, mask: LayerMask) -> Option<RigHit> {
        if !self.visible {
            return None;
        }

        let mut closest: Option<RigHit> = None;
        let mut consider = |handle: HandleId, t: f32| {
            if closest.is_none_or(|hit| t < hit.distance) {
                closest = Some(RigHit {
                    handle,
                    point: ray_origin + ray_dir * t,
                    distance: t,
                });
            }
        };

        if mask.contains(Layer::LinearHandle) {
            for handle in &self.linears {
                if !handle.visible {
                    continue;
                }
                let dir = self.axis_direction(handle.axis());
                let t = match handle.kind() {
                    // Arrows are cylinders from the center out along the axis
                    TransformKind::Translation => ray_cylinder_intersection(
                        ray_origin,
                        ray_dir,
                        self.position,
                        self.position + dir * constants::ARROW_LENGTH,
                        constants::ARROW_HIT_RADIUS,
                    ),
                    // Scale knobs are spheres along the negative axis
                    TransformKind::Scale => ray_sphere_intersection(
                        ray_origin,
                        ray_dir,
                        self.position - dir * constants::SCALE_KNOB_OFFSET,
                        constants::SCALE_HIT_RADIUS,
                    ),
                };
                if let Some(t) = t {
                    consider(
                        HandleId::Linear {
                            kind: handle.kind(),
                            axis: handle.axis(),
                        },
                        t,
                    );
                }
            }
        }

        if mask.contains(Layer::GimbalHandle) {
            for handle in &self.gimbals {
                let normal = self.axis_direction(handle.axis());
                if let Some(t) = ray_ring_intersection(
                    ray_origin,
                    ray_dir,
                    self.position,
                    normal,
                    constants::RING_RADIUS,
                    constants::RING_HIT_THICKNESS,
                ) {
                    consider(
                        HandleId::Gimbal {
                            axis: handle.axis(),
                        },
                        t,
                    );
                }
            }
        }

        closest
    }

    /// Begin a drag session on the given handle. For gimbals, `grab_point`
    /// is the ring-surface point the press ray cast resolved; `None` marks
    /// a missed cast and yields an inert session.
    pub fn press(
        &mut self,
        id: HandleId,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
        grab_point: Option<Vec3>,
    ) -> Result<(), GizmoError> {
        match id {
            HandleId::Linear { kind, axis } => {
                for handle in &mut self.linears {
                    if handle.kind() == kind && handle.axis() == axis {
                        handle.begin_drag(camera, screen, viewport)?;
                    }
                }
            }
            HandleId::Gimbal { axis } => {
                for handle in &mut self.gimbals {
                    if handle.axis() == axis {
                        handle.begin_drag(camera, screen, viewport, grab_point)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Pointer released: end every drag session, wherever the pointer is
    pub fn release(&mut self) {
        for handle in &mut self.linears {
            handle.end_drag();
        }
        for handle in &mut self.gimbals {
            handle.end_drag();
        }
    }

    /// Poll all dragging handles, collecting this frame's events
    pub fn poll(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
    ) -> Result<Vec<HandleEvent>, GizmoError> {
        let mut events = Vec::new();
        for handle in &mut self.linears {
            if let Some(event) = handle.update(camera, screen, viewport)? {
                events.push(event);
            }
        }
        for handle in &mut self.gimbals {
            if let Some(event) = handle.update(camera, screen, viewport)? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Refresh hover flags from the pointer ray; at most one handle is
    /// hovered at a time
    pub fn update_hover(&mut self, ray_origin: Vec3, ray_dir: Vec3) {
        let hovered = self
            .hit_test(ray_origin, ray_dir, LayerMask::ALL)
            .map(|hit| hit.handle);

        for handle in &mut self.linears {
            let id = HandleId::Linear {
                kind: handle.kind(),
                axis: handle.axis(),
            };
            handle.set_hovered(hovered == Some(id));
        }
        for handle in &mut self.gimbals {
            let id = HandleId::Gimbal {
                axis: handle.axis(),
            };
            handle.set_hovered(hovered == Some(id));
        }
    }

    /// The hovered handle, if any
    pub fn hovered_handle(&self) -> Option<HandleId> {
        for handle in &self.linears {
            if handle.is_hovered() {
                return Some(HandleId::Linear {
                    kind: handle.kind(),
                    axis: handle.axis(),
                });
            }
        }
        for handle in &self.gimbals {
            if handle.is_hovered() {
                return Some(HandleId::Gimbal {
                    axis: handle.axis(),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_rig() -> GizmoRig {
        let mut rig = GizmoRig::new();
        rig.set_visible(true);
        rig
    }

    #[test]
    fn hidden_rig_is_not_hittable() {
        let rig = GizmoRig::new();
        let hit = rig.hit_test(Vec3::new(0.5, 0.0, 5.0), Vec3::NEG_Z, LayerMask::ALL);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_at_arrow_hits_translation_handle() {
        let rig = visible_rig();
        let hit = rig
            .hit_test(Vec3::new(0.5, 0.0, 5.0), Vec3::NEG_Z, LayerMask::ALL)
            .unwrap();
        assert_eq!(
            hit.handle,
            HandleId::Linear {
                kind: TransformKind::Translation,
                axis: Axis::X
            }
        );
    }

    #[test]
    fn ray_at_ring_hits_gimbal_handle() {
        let rig = visible_rig();
        // A point on the Z ring away from every arrow and knob
        let on_ring = constants::RING_RADIUS * std::f32::consts::FRAC_1_SQRT_2;
        let hit = rig
            .hit_test(Vec3::new(on_ring, on_ring, 5.0), Vec3::NEG_Z, LayerMask::ALL)
            .unwrap();
        assert_eq!(hit.handle, HandleId::Gimbal { axis: Axis::Z });
        // The resolved surface point lies on the ring plane
        assert!(hit.point.z.abs() < 1e-4);
    }

    #[test]
    fn ray_at_knob_hits_scale_handle() {
        let rig = visible_rig();
        let hit = rig
            .hit_test(
                Vec3::new(-constants::SCALE_KNOB_OFFSET, 0.0, 5.0),
                Vec3::NEG_Z,
                LayerMask::ALL,
            )
            .unwrap();
        assert_eq!(
            hit.handle,
            HandleId::Linear {
                kind: TransformKind::Scale,
                axis: Axis::X
            }
        );
    }

    #[test]
    fn world_space_hides_scale_knobs() {
        let mut rig = visible_rig();
        rig.set_space(SpaceMode::World);
        assert!(!rig.scale_handles_visible());

        let hit = rig.hit_test(
            Vec3::new(-constants::SCALE_KNOB_OFFSET, 0.0, 5.0),
            Vec3::NEG_Z,
            LayerMask::ALL,
        );
        assert!(hit.is_none());

        rig.set_space(SpaceMode::Local);
        assert!(rig.scale_handles_visible());
    }

    #[test]
    fn world_space_ends_active_scale_drag() {
        let mut rig = visible_rig();
        let camera = Camera::new(1.0);
        let viewport = Vec2::new(800.0, 600.0);

        rig.press(
            HandleId::Linear {
                kind: TransformKind::Scale,
                axis: Axis::X,
            },
            Some(&camera),
            Vec2::new(400.0, 300.0),
            viewport,
            None,
        )
        .unwrap();
        assert!(rig.any_dragging());

        rig.set_space(SpaceMode::World);
        assert!(!rig.any_dragging());

        // Translation sessions are unaffected by the toggle
        rig.press(
            HandleId::Linear {
                kind: TransformKind::Translation,
                axis: Axis::Y,
            },
            Some(&camera),
            Vec2::new(400.0, 300.0),
            viewport,
            None,
        )
        .unwrap();
        rig.set_space(SpaceMode::Local);
        assert_eq!(
            rig.dragging_handle(),
            Some(HandleId::Linear {
                kind: TransformKind::Translation,
                axis: Axis::Y
            })
        );
    }

    #[test]
    fn layer_mask_filters_handle_kinds() {
        let rig = visible_rig();
        let gimbal_only = LayerMask::of(&[Layer::GimbalHandle]);
        let hit = rig.hit_test(Vec3::new(0.5, 0.0, 5.0), Vec3::NEG_Z, gimbal_only);
        assert!(hit.is_none());
    }

    #[test]
    fn rotated_rig_moves_its_colliders() {
        let mut rig = visible_rig();
        // Local mode with a target rotated 90 degrees about Z: the X arrow
        // now points along world +Y
        rig.rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);

        let hit = rig
            .hit_test(Vec3::new(0.0, 0.5, 5.0), Vec3::NEG_Z, LayerMask::ALL)
            .unwrap();
        assert_eq!(
            hit.handle,
            HandleId::Linear {
                kind: TransformKind::Translation,
                axis: Axis::X
            }
        );
    }

    #[test]
    fn hover_follows_pointer_ray() {
        let mut rig = visible_rig();
        rig.update_hover(Vec3::new(0.5, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(
            rig.hovered_handle(),
            Some(HandleId::Linear {
                kind: TransformKind::Translation,
                axis: Axis::X
            })
        );

        // Pointer leaves all handles
        rig.update_hover(Vec3::new(50.0, 50.0, 5.0), Vec3::NEG_Z);
        assert_eq!(rig.hovered_handle(), None);
    }

    #[test]
    fn release_ends_every_session() {
        let mut rig = visible_rig();
        let camera = Camera::new(1.0);
        let viewport = Vec2::new(800.0, 600.0);

        rig.press(
            HandleId::Gimbal { axis: Axis::Y },
            Some(&camera),
            Vec2::new(400.0, 300.0),
            viewport,
            Some(Vec3::new(0.0, 0.0, 0.8)),
        )
        .unwrap();
        assert_eq!(rig.dragging_handle(), Some(HandleId::Gimbal { axis: Axis::Y }));

        rig.release();
        assert!(!rig.any_dragging());
    }
}
