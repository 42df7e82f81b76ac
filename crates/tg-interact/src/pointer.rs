//! Pointer sampling shared by all handles

use glam::{Vec2, Vec3};

use tg_core::GizmoError;

use crate::camera::Camera;
use crate::constants::pointer::PLANE_DEPTH;

/// Tracks the pointer in a fixed-depth world plane and exposes per-frame
/// movement deltas plus hover state.
///
/// Samples are never used as absolute positions; only the difference to the
/// previous sample matters, so the fixed-depth projection nonlinearity only
/// shapes delta magnitudes.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last_sample: Vec3,
    hovered: bool,
}

impl PointerTracker {
    /// Create a tracker with no recorded sample
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the pointer into the fixed-depth plane and record the result
    /// as the new last sample
    pub fn sample(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
    ) -> Result<Vec3, GizmoError> {
        let camera = camera.ok_or(GizmoError::MissingCamera)?;
        let sample = camera.screen_to_world(screen, viewport, PLANE_DEPTH);
        self.last_sample = sample;
        Ok(sample)
    }

    /// Pointer movement since the previous sample.
    ///
    /// Calling this repeatedly during a drag yields a telescoping sequence
    /// of deltas whose sum approximates total pointer travel.
    pub fn movement_since_last(
        &mut self,
        camera: Option<&Camera>,
        screen: Vec2,
        viewport: Vec2,
    ) -> Result<Vec3, GizmoError> {
        let previous = self.last_sample;
        let current = self.sample(camera, screen, viewport)?;
        Ok(current - previous)
    }

    /// Hover entered; the renderer swaps to the highlight material
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether the pointer is currently over the handle
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_camera_fails_loudly() {
        let mut tracker = PointerTracker::new();
        let result = tracker.sample(None, Vec2::new(10.0, 10.0), Vec2::new(800.0, 600.0));
        assert!(matches!(result, Err(GizmoError::MissingCamera)));
    }

    #[test]
    fn deltas_telescope_across_samples() {
        let camera = Camera::new(800.0 / 600.0);
        let viewport = Vec2::new(800.0, 600.0);
        let mut tracker = PointerTracker::new();

        tracker
            .sample(Some(&camera), Vec2::new(400.0, 300.0), viewport)
            .unwrap();

        let a = tracker
            .movement_since_last(Some(&camera), Vec2::new(410.0, 300.0), viewport)
            .unwrap();
        let b = tracker
            .movement_since_last(Some(&camera), Vec2::new(420.0, 300.0), viewport)
            .unwrap();

        // Two consecutive deltas sum to the direct delta from start to end
        let mut direct = PointerTracker::new();
        direct
            .sample(Some(&camera), Vec2::new(400.0, 300.0), viewport)
            .unwrap();
        let whole = direct
            .movement_since_last(Some(&camera), Vec2::new(420.0, 300.0), viewport)
            .unwrap();
        assert!((a + b).abs_diff_eq(whole, 1e-5));
    }

    #[test]
    fn stationary_pointer_yields_zero_delta() {
        let camera = Camera::new(1.0);
        let viewport = Vec2::new(800.0, 600.0);
        let mut tracker = PointerTracker::new();

        let pos = Vec2::new(123.0, 456.0);
        tracker.sample(Some(&camera), pos, viewport).unwrap();
        let delta = tracker
            .movement_since_last(Some(&camera), pos, viewport)
            .unwrap();
        assert!(delta.length() < 1e-6);
    }

    #[test]
    fn hover_flag_tracks_enter_and_exit() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.is_hovered());
        tracker.set_hovered(true);
        assert!(tracker.is_hovered());
        tracker.set_hovered(false);
        assert!(!tracker.is_hovered());
    }
}
