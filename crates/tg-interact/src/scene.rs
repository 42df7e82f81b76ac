//! Transformable objects and layer-masked ray casting

use std::collections::HashMap;

use glam::Vec3;
use uuid::Uuid;

use tg_core::Transform;

use crate::collision::ray_sphere_intersection;

/// Collision layer a ray cast can be filtered against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Transformable,
    LinearHandle,
    GimbalHandle,
}

impl Layer {
    fn bit(&self) -> u8 {
        match self {
            Layer::Transformable => 1 << 0,
            Layer::LinearHandle => 1 << 1,
            Layer::GimbalHandle => 1 << 2,
        }
    }
}

/// A set of collision layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerMask(u8);

impl LayerMask {
    /// Empty mask
    pub const NONE: LayerMask = LayerMask(0);
    /// Every layer
    pub const ALL: LayerMask = LayerMask(0b111);

    /// Build a mask from a list of layers
    pub fn of(layers: &[Layer]) -> Self {
        LayerMask(layers.iter().fold(0, |acc, l| acc | l.bit()))
    }

    /// Whether the mask contains the layer
    pub fn contains(&self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }
}

/// A selectable, transformable object in the scene.
///
/// Objects are picked through a bounding-sphere collider centered on their
/// translation; the precise render mesh is out of scope here.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: Uuid,
    pub name: String,
    pub transform: Transform,
    /// Bounding sphere radius for picking
    pub collider_radius: f32,
}

impl SceneObject {
    /// Create a new object at the given position
    pub fn new(name: impl Into<String>, transform: Transform, collider_radius: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform,
            collider_radius,
        }
    }
}

/// Result of a scene ray cast
#[derive(Debug, Clone, Copy)]
pub struct SceneHit {
    pub object: Uuid,
    pub point: Vec3,
    pub distance: f32,
}

/// All transformable objects, keyed by id
#[derive(Debug, Default)]
pub struct Scene {
    objects: HashMap<Uuid, SceneObject>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning its id
    pub fn add_object(&mut self, object: SceneObject) -> Uuid {
        let id = object.id;
        self.objects.insert(id, object);
        id
    }

    /// Remove an object
    pub fn remove_object(&mut self, id: Uuid) -> Option<SceneObject> {
        self.objects.remove(&id)
    }

    /// Look up an object
    pub fn object(&self, id: Uuid) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Look up an object mutably
    pub fn object_mut(&mut self, id: Uuid) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Number of objects in the scene
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Cast a ray against all transformable objects within `max_distance`.
    /// Returns the nearest hit.
    pub fn ray_cast(&self, ray_origin: Vec3, ray_dir: Vec3, max_distance: f32) -> Option<SceneHit> {
        let mut closest: Option<SceneHit> = None;

        for object in self.objects.values() {
            if let Some(t) = ray_sphere_intersection(
                ray_origin,
                ray_dir,
                object.transform.translation,
                object.collider_radius,
            ) && t <= max_distance
                && closest.is_none_or(|hit| t < hit.distance)
            {
                closest = Some(SceneHit {
                    object: object.id,
                    point: ray_origin + ray_dir * t,
                    distance: t,
                });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_mask_membership() {
        let mask = LayerMask::of(&[Layer::Transformable, Layer::GimbalHandle]);
        assert!(mask.contains(Layer::Transformable));
        assert!(mask.contains(Layer::GimbalHandle));
        assert!(!mask.contains(Layer::LinearHandle));
        assert!(LayerMask::ALL.contains(Layer::LinearHandle));
        assert!(!LayerMask::NONE.contains(Layer::Transformable));
    }

    #[test]
    fn add_and_remove_track_object_count() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let id = scene.add_object(SceneObject::new("box", Transform::IDENTITY, 0.5));
        assert_eq!(scene.len(), 1);

        let removed = scene.remove_object(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(scene.is_empty());
        assert!(scene.remove_object(id).is_none());
    }

    #[test]
    fn ray_cast_returns_nearest_object() {
        let mut scene = Scene::new();
        let near = scene.add_object(SceneObject::new(
            "near",
            Transform::from_translation(Vec3::new(0.0, 0.0, 2.0)),
            0.5,
        ));
        let _far = scene.add_object(SceneObject::new(
            "far",
            Transform::from_translation(Vec3::new(0.0, 0.0, -3.0)),
            0.5,
        ));

        let hit = scene
            .ray_cast(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), 100.0)
            .unwrap();
        assert_eq!(hit.object, near);
        assert!((hit.distance - 7.5).abs() < 1e-4);
    }

    #[test]
    fn ray_cast_respects_max_distance() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new(
            "distant",
            Transform::from_translation(Vec3::new(0.0, 0.0, -200.0)),
            0.5,
        ));

        let hit = scene.ray_cast(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 100.0);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_cast_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.ray_cast(Vec3::ZERO, Vec3::X, 100.0).is_none());
    }
}
