//! Scene registry
//!
//! Minimal stand-in for the host's scene graph: objects carrying a world
//! transform and the shape descriptor annotating them. The editor only ever
//! reads the transform and reads/writes the clamped shape fields; the
//! descriptor is owned by the scene object it annotates.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Transform;
use crate::shapes::ShapeDescriptor;

new_key_type! {
    /// Stable key identifying a scene object
    pub struct ObjectKey;
}

/// A scene object: world transform plus the shape it carries
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// World transform of the owning frame
    pub transform: Transform,
    /// The editable shape, authored in the object's local space
    pub shape: ShapeDescriptor,
}

impl SceneObject {
    /// Create a scene object
    #[must_use]
    pub fn new(transform: Transform, shape: ShapeDescriptor) -> Self {
        Self { transform, shape }
    }
}

/// Registry of scene objects keyed by stable slotmap keys
#[derive(Debug, Default)]
pub struct SceneRegistry {
    objects: SlotMap<ObjectKey, SceneObject>,
}

impl SceneRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object, returning its key
    pub fn insert(&mut self, object: SceneObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Look up an object
    #[must_use]
    pub fn get(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Look up an object mutably
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Remove an object
    pub fn remove(&mut self, key: ObjectKey) -> Option<SceneObject> {
        self.objects.remove(key)
    }

    /// Number of objects in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the registry holds no objects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_insert_get_remove() {
        let mut registry = SceneRegistry::new();
        let key = registry.insert(SceneObject::new(
            Transform::identity(),
            ShapeDescriptor::sphere(Vec3::zeros(), 1.0),
        ));

        assert_eq!(registry.len(), 1);
        assert!(registry.get(key).is_some());

        let removed = registry.remove(key).expect("object present");
        assert_eq!(removed.shape, ShapeDescriptor::sphere(Vec3::zeros(), 1.0));
        assert!(registry.get(key).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_stale_key_misses() {
        let mut registry = SceneRegistry::new();
        let key = registry.insert(SceneObject::new(
            Transform::identity(),
            ShapeDescriptor::sphere(Vec3::zeros(), 1.0),
        ));
        registry.remove(key);

        registry.insert(SceneObject::new(
            Transform::identity(),
            ShapeDescriptor::sphere(Vec3::zeros(), 2.0),
        ));
        assert!(registry.get(key).is_none());
    }
}
