//! Handle collider intersection tests
//!
//! Ray casts against the analytic collider shapes the gizmo handles use:
//! cylinders for translation arrows, rings for rotation gimbals and spheres
//! for scale knobs. All functions return the ray parameter `t` of the
//! closest hit; the hit point is `ray_origin + ray_dir * t`.

use glam::Vec3;

/// Ray-cylinder intersection test.
///
/// Tests a finite cylinder given by its axis endpoints and radius. The ray
/// and cylinder axis are projected into the plane perpendicular to the axis,
/// which reduces the surface condition to a quadratic in `t`; hits outside
/// the finite axis segment are rejected.
pub fn ray_cylinder_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    cylinder_start: Vec3,
    cylinder_end: Vec3,
    radius: f32,
) -> Option<f32> {
    let cylinder_axis = (cylinder_end - cylinder_start).normalize();
    let cylinder_length = (cylinder_end - cylinder_start).length();

    // Project ray direction and origin offset onto the plane perpendicular
    // to the cylinder axis
    let d = ray_dir - cylinder_axis * ray_dir.dot(cylinder_axis);
    let o = (ray_origin - cylinder_start)
        - cylinder_axis * (ray_origin - cylinder_start).dot(cylinder_axis);

    // Quadratic coefficients: at² + bt + c = 0
    let a = d.dot(d);
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;

    // Ray parallel to the cylinder axis never crosses the lateral surface
    if a < 1e-12 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    // Closest positive intersection
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return None;
    }

    // Reject hits outside the finite segment
    let hit_point = ray_origin + ray_dir * t;
    let projection = (hit_point - cylinder_start).dot(cylinder_axis);
    if projection < 0.0 || projection > cylinder_length {
        return None;
    }

    Some(t)
}

/// Ray-ring intersection test.
///
/// The ring is a circle with thickness in 3D space, given by its center,
/// plane normal (the rotation axis), radius and hit tolerance. The ray is
/// intersected with the ring's plane, then the planar hit is accepted when
/// its distance from the circle line is within `thickness`.
pub fn ray_ring_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    ring_center: Vec3,
    ring_normal: Vec3,
    ring_radius: f32,
    thickness: f32,
) -> Option<f32> {
    let denom = ray_dir.dot(ring_normal);

    // Ray is nearly parallel to the plane
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (ring_center - ray_origin).dot(ring_normal) / denom;
    if t < 0.0 {
        return None;
    }

    let hit_point = ray_origin + ray_dir * t;
    let distance_from_center = (hit_point - ring_center).length();
    let distance_from_ring = (distance_from_center - ring_radius).abs();

    if distance_from_ring <= thickness {
        Some(t)
    } else {
        None
    }
}

/// Ray-sphere intersection test.
pub fn ray_sphere_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    sphere_center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - sphere_center;
    let a = ray_dir.dot(ray_dir);
    let b = 2.0 * oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 { Some(t) } else { None }
}
