//! Drag handles
//!
//! Each handle is an independent Idle -> Dragging -> Idle state machine fed
//! by per-frame pointer polling. Handles know nothing about coordinate
//! spaces or the selected target; they only tag pointer deltas with their
//! axis and kind. The engine consumes the emitted [`HandleEvent`]s.

use glam::{Vec2, Vec3};

use tg_core::{Axis, GizmoError, TransformKind};

use crate::camera::Camera;
use crate::pointer::PointerTracker;

/// Identifies one handle within the gizmo rig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    Linear { kind: TransformKind, axis: Axis },
    Gimbal { axis: Axis },
}

/// Event emitted by a dragging handle, one per polled frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleEvent {
    LinearDrag {
        kind: TransformKind,
        axis: Axis,
        delta: Vec3,
    },
    RotationDrag {
        axis: Axis,
        delta: Vec3,
        /// World-space point on the ring where the drag began, fixed for
        /// the whole session
        grab_point: Vec3,
    },
}

/// A pointer-draggable control bound to one axis and one transformation kind
#[derive(Debug)]
pub struct LinearHandle {
    axis: Axis,
    kind: TransformKind,
    tracker: PointerTracker,
    dragging: bool,
    /// Scale handles are hidden while world space is active
    pub visible: bool,
}

impl LinearHandle {
    /// Create an idle handle
    pub fn new(axis: Axis, kind: TransformKind) -> Self {
        Self {
            axis,
            kind,
            tracker: PointerTracker::new(),
            dragging: false,
            visible: true,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed over this handle; records the baseline sample
    pub fn begin_drag(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
    ) -> Result<(), GizmoError> {
        self.tracker.sample(camera, screen, viewport)?;
        self.dragging = true;
        Ok(())
    }

    /// Pointer released anywhere; ends the session
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Per-frame poll; emits the tagged movement delta while dragging
    pub fn update(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
    ) -> Result<Option<HandleEvent>, GizmoError> {
        if !self.dragging {
            return Ok(None);
        }
        let delta = self.tracker.movement_since_last(camera, screen, viewport)?;
        Ok(Some(HandleEvent::LinearDrag {
            kind: self.kind,
            axis: self.axis,
            delta,
        }))
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.tracker.set_hovered(hovered);
    }

    pub fn is_hovered(&self) -> bool {
        self.tracker.is_hovered()
    }
}

/// A pointer-draggable rotation ring bound to one axis
#[derive(Debug)]
pub struct GimbalHandle {
    axis: Axis,
    tracker: PointerTracker,
    dragging: bool,
    /// Ring-surface point resolved once at drag start. `None` means the
    /// grab ray found no hit and the session emits no rotation.
    grab_point: Option<Vec3>,
}

impl GimbalHandle {
    /// Create an idle handle
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            tracker: PointerTracker::new(),
            dragging: false,
            grab_point: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed over this ring. `grab_point` is the ring-surface
    /// point resolved by the press ray cast; it is held fixed for the whole
    /// session so the drag direction does not jitter as the pointer leaves
    /// the original grab point.
    pub fn begin_drag(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
        grab_point: Option<Vec3>,
    ) -> Result<(), GizmoError> {
        self.tracker.sample(camera, screen, viewport)?;
        self.dragging = true;
        self.grab_point = grab_point;
        if grab_point.is_none() {
            tracing::debug!(axis = ?self.axis, "gimbal grab ray missed; session is inert");
        }
        Ok(())
    }

    /// Pointer released anywhere; discards the session including the
    /// captured grab point
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.grab_point = None;
    }

    /// Per-frame poll; emits the movement delta and the session's grab point
    pub fn update(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
    ) -> Result<Option<HandleEvent>, GizmoError> {
        if !self.dragging {
            return Ok(None);
        }
        let delta = self.tracker.movement_since_last(camera, screen, viewport)?;
        let Some(grab_point) = self.grab_point else {
            // Dead session: the grab ray never resolved a surface point
            return Ok(None);
        };
        Ok(Some(HandleEvent::RotationDrag {
            axis: self.axis,
            delta,
            grab_point,
        }))
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.tracker.set_hovered(hovered);
    }

    pub fn is_hovered(&self) -> bool {
        self.tracker.is_hovered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_and_viewport() -> (Camera, Vec2) {
        (Camera::new(800.0 / 600.0), Vec2::new(800.0, 600.0))
    }

    #[test]
    fn idle_linear_handle_emits_nothing() {
        let (camera, viewport) = camera_and_viewport();
        let mut handle = LinearHandle::new(Axis::X, TransformKind::Translation);

        let event = handle
            .update(Some(&camera), Vec2::new(100.0, 100.0), viewport)
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn linear_drag_emits_tagged_deltas_until_release() {
        let (camera, viewport) = camera_and_viewport();
        let mut handle = LinearHandle::new(Axis::Y, TransformKind::Scale);

        handle
            .begin_drag(Some(&camera), Vec2::new(400.0, 300.0), viewport)
            .unwrap();
        assert!(handle.is_dragging());

        let event = handle
            .update(Some(&camera), Vec2::new(420.0, 300.0), viewport)
            .unwrap()
            .unwrap();
        match event {
            HandleEvent::LinearDrag { kind, axis, delta } => {
                assert_eq!(kind, TransformKind::Scale);
                assert_eq!(axis, Axis::Y);
                assert!(delta.length() > 0.0);
            }
            other => panic!("unexpected event {other:?}"),
        }

        handle.end_drag();
        assert!(!handle.is_dragging());
        let event = handle
            .update(Some(&camera), Vec2::new(440.0, 300.0), viewport)
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn gimbal_holds_grab_point_for_whole_session() {
        let (camera, viewport) = camera_and_viewport();
        let mut handle = GimbalHandle::new(Axis::Z);
        let grab = Vec3::new(0.8, 0.0, 0.0);

        handle
            .begin_drag(Some(&camera), Vec2::new(400.0, 300.0), viewport, Some(grab))
            .unwrap();

        for step in 1..4 {
            let pos = Vec2::new(400.0 + step as f32 * 10.0, 300.0);
            let event = handle.update(Some(&camera), pos, viewport).unwrap().unwrap();
            match event {
                HandleEvent::RotationDrag { grab_point, .. } => assert_eq!(grab_point, grab),
                other => panic!("unexpected event {other:?}"),
            }
        }

        handle.end_drag();
        // Session state is discarded, not retained for reuse
        assert!(!handle.is_dragging());
        let event = handle
            .update(Some(&camera), Vec2::new(500.0, 300.0), viewport)
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn missed_grab_ray_makes_session_inert() {
        let (camera, viewport) = camera_and_viewport();
        let mut handle = GimbalHandle::new(Axis::X);

        handle
            .begin_drag(Some(&camera), Vec2::new(400.0, 300.0), viewport, None)
            .unwrap();
        assert!(handle.is_dragging());

        let event = handle
            .update(Some(&camera), Vec2::new(450.0, 300.0), viewport)
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn begin_drag_without_camera_is_an_error() {
        let mut handle = LinearHandle::new(Axis::Z, TransformKind::Translation);
        let result = handle.begin_drag(None, Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert!(matches!(result, Err(GizmoError::MissingCamera)));
        assert!(!handle.is_dragging());
    }
}
