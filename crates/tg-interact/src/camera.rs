//! Orbit camera for the 3D viewport

use glam::{Mat4, Vec2, Vec3};

use crate::constants::camera as constants;

/// Orbit camera
///
/// The concrete camera provider for the gizmo pipeline: position, forward
/// direction, screen-to-world projection and pick rays all come from here.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    // Orbit state
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Camera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        let yaw = constants::DEFAULT_YAW_DEGREES.to_radians();
        let pitch = constants::DEFAULT_PITCH_DEGREES.to_radians();
        let distance = constants::DEFAULT_DISTANCE;
        let target = Vec3::ZERO;

        let x = distance * pitch.cos() * yaw.cos();
        let y = distance * pitch.cos() * yaw.sin();
        let z = distance * pitch.sin();
        let position = target + Vec3::new(x, y, z);

        Self {
            position,
            target,
            up: Vec3::Z,
            fov: constants::DEFAULT_FOV_DEGREES.to_radians(),
            aspect,
            near: constants::DEFAULT_NEAR,
            far: constants::DEFAULT_FAR,
            yaw,
            pitch,
            distance,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unit vector from the camera towards its look target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(
            constants::MIN_PITCH_DEGREES.to_radians(),
            constants::MAX_PITCH_DEGREES.to_radians(),
        );
        self.update_position_from_orbit();
    }

    /// Pan the camera (move target)
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        let scale = self.distance * constants::PAN_SCALE;
        self.target += right * (-delta_x * scale) + up * (delta_y * scale);
        self.update_position_from_orbit();
    }

    /// Zoom the camera
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * constants::ZOOM_SCALE))
            .clamp(constants::MIN_DISTANCE, constants::MAX_DISTANCE);
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Convert screen coordinates to a world-space ray
    pub fn screen_to_ray(&self, screen: Vec2, viewport: Vec2) -> (Vec3, Vec3) {
        // Convert to normalized device coordinates
        let ndc_x = (2.0 * screen.x / viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / viewport.y);

        let inv_proj = self.projection_matrix().inverse();
        let inv_view = self.view_matrix().inverse();

        // Near and far points in NDC
        let near_ndc = glam::Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_ndc = glam::Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        // Transform to view space
        let near_view = inv_proj * near_ndc;
        let far_view = inv_proj * far_ndc;
        let near_view = near_view.truncate() / near_view.w;
        let far_view = far_view.truncate() / far_view.w;

        // Transform to world space
        let near_world = (inv_view * near_view.extend(1.0)).truncate();
        let far_world = (inv_view * far_view.extend(1.0)).truncate();

        let ray_origin = near_world;
        let ray_direction = (far_world - near_world).normalize();

        (ray_origin, ray_direction)
    }

    /// Project a screen position into world space on the plane `depth` in
    /// front of the camera, perpendicular to the view direction
    pub fn screen_to_world(&self, screen: Vec2, viewport: Vec2, depth: f32) -> Vec3 {
        let (ray_origin, ray_dir) = self.screen_to_ray(screen, viewport);
        let forward = self.forward();

        // The ray starts on the near plane, not at the camera position;
        // measure depth from the camera along the forward direction.
        let origin_depth = (ray_origin - self.position).dot(forward);
        let t = (depth - origin_depth) / ray_dir.dot(forward);
        ray_origin + ray_dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::new(800.0 / 600.0);
        let viewport = Vec2::new(800.0, 600.0);
        let (origin, dir) = camera.screen_to_ray(Vec2::new(400.0, 300.0), viewport);

        let to_target = (camera.target - origin).normalize();
        assert!(dir.abs_diff_eq(to_target, EPS));
    }

    #[test]
    fn screen_to_world_lands_on_fixed_depth_plane() {
        let camera = Camera::new(800.0 / 600.0);
        let viewport = Vec2::new(800.0, 600.0);

        for screen in [
            Vec2::new(400.0, 300.0),
            Vec2::new(100.0, 500.0),
            Vec2::new(700.0, 50.0),
        ] {
            let p = camera.screen_to_world(screen, viewport, 0.3);
            let depth = (p - camera.position).dot(camera.forward());
            assert!((depth - 0.3).abs() < EPS);
        }
    }

    #[test]
    fn aspect_update_rescales_projection() {
        let mut camera = Camera::new(1.0);
        let x_scale = camera.projection_matrix().x_axis.x;

        // Viewport resized to twice as wide: horizontal scale halves
        camera.update_aspect(2.0);
        assert!((camera.projection_matrix().x_axis.x - x_scale / 2.0).abs() < EPS);
        // Vertical scale is aspect-independent
        let narrow = Camera::new(1.0).projection_matrix().y_axis.y;
        assert!((camera.projection_matrix().y_axis.y - narrow).abs() < EPS);
    }

    #[test]
    fn orbit_keeps_distance_to_target() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.5, -0.2);
        let dist = (camera.position - camera.target).length();
        assert!((dist - camera.distance).abs() < EPS);
    }
}
