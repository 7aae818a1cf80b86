//! The scene document: an ordered list of objects plus persistence.

use crate::objects::SceneObject;
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scene persistence errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Invalid scene format: {0}")]
    InvalidFormat(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// An ordered collection of scene objects. Document order is insertion
/// order and is what serializes; draw order is derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Find an object by id.
    pub fn find(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append an object at the end of the document.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Remove an object by id, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }

    /// Drop every object whose id is in `ids`.
    pub fn remove_all(&mut self, ids: &[String]) {
        self.objects.retain(|o| !ids.iter().any(|id| id == o.id()));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in draw order: stable sort by z category, so objects within
    /// one category keep their document order.
    pub fn render_order(&self) -> Vec<&SceneObject> {
        let mut ordered: Vec<&SceneObject> = self.objects.iter().collect();
        ordered.sort_by_key(|o| o.z_category());
        ordered
    }

    /// Get the bounding box of all objects, loose enough to cover strokes
    /// and decorations.
    pub fn bounds(&self) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for object in &self.objects {
            let bounds = object.loose_bounds();
            result = Some(match result {
                Some(r) => r.union(bounds),
                None => bounds,
            });
        }
        result
    }

    /// Serialize the scene to a JSON array of tagged records.
    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::Serialization(e.to_string()))
    }

    /// Deserialize a scene from JSON. Anything other than a well-formed
    /// array of tagged records is rejected whole.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(|e| SceneError::InvalidFormat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ObjectKind, SceneObject};
    use kurbo::Point;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(SceneObject::spawn(ObjectKind::Wall, Point::new(0.0, 0.0)));
        scene.add(SceneObject::spawn(ObjectKind::Spring, Point::new(50.0, 50.0)));
        scene.add(SceneObject::spawn(ObjectKind::Text, Point::new(10.0, 10.0)));
        scene
    }

    #[test]
    fn test_find_and_remove() {
        let mut scene = sample_scene();
        let id = scene.objects()[1].id().to_string();
        assert!(scene.find(&id).is_some());
        let removed = scene.remove(&id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(scene.find(&id).is_none());
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let scene = sample_scene();
        let json = scene.to_json().unwrap();
        let restored = Scene::from_json(&json).unwrap();
        assert_eq!(restored, scene);
    }

    #[test]
    fn test_points_rehydrate() {
        let scene = sample_scene();
        let json = scene.to_json().unwrap();
        let restored = Scene::from_json(&json).unwrap();
        if let (SceneObject::Wall(a), SceneObject::Wall(b)) =
            (&scene.objects()[0], &restored.objects()[0])
        {
            assert_eq!(a.start, b.start);
            assert_eq!(a.end, b.end);
        } else {
            panic!("expected walls");
        }
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let result = Scene::from_json("{\"not\": \"a scene\"}");
        assert!(matches!(result, Err(SceneError::InvalidFormat(_))));
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let result = Scene::from_json("[{\"type\": \"blob\"}]");
        assert!(matches!(result, Err(SceneError::InvalidFormat(_))));
    }

    #[test]
    fn test_render_order_sorts_by_category() {
        let mut scene = Scene::new();
        scene.add(SceneObject::spawn(ObjectKind::Text, Point::new(0.0, 0.0)));
        scene.add(SceneObject::spawn(ObjectKind::Wall, Point::new(0.0, 0.0)));
        scene.add(SceneObject::spawn(ObjectKind::Wire, Point::new(0.0, 0.0)));
        scene.add(SceneObject::spawn(ObjectKind::Spring, Point::new(0.0, 0.0)));
        let kinds: Vec<ObjectKind> = scene.render_order().iter().map(|o| o.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ObjectKind::Wire,
                ObjectKind::Spring,
                ObjectKind::Wall,
                ObjectKind::Text
            ]
        );
    }

    #[test]
    fn test_bounds_union() {
        assert!(Scene::new().bounds().is_none());
        let mut scene = Scene::new();
        scene.add(SceneObject::spawn(ObjectKind::Circle, Point::new(0.0, 0.0)));
        let single = scene.bounds().unwrap();
        scene.add(SceneObject::spawn(ObjectKind::Circle, Point::new(500.0, 0.0)));
        let both = scene.bounds().unwrap();
        assert!(both.width() > single.width());
        assert!(both.x1 >= 500.0);
    }
}
