//! Selection tracking by object id, in insertion order.

use crate::objects::ObjectId;
use crate::scene::Scene;

/// The set of selected object ids. Order is insertion order; the first id
/// is the primary selection (what a properties panel would show).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<ObjectId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn primary(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    /// Make `id` the only selected object.
    pub fn select_only(&mut self, id: &str) {
        self.ids.clear();
        self.ids.push(id.to_string());
    }

    /// Add to the selection, keeping earlier ids first. Duplicates are
    /// ignored.
    pub fn add(&mut self, id: &str) {
        if !self.contains(id) {
            self.ids.push(id.to_string());
        }
    }

    /// Replace the whole selection.
    pub fn replace(&mut self, ids: Vec<ObjectId>) {
        self.ids.clear();
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer resolve in the scene. Called after undo,
    /// redo and document loads.
    pub fn retain_present(&mut self, scene: &Scene) {
        self.ids.retain(|id| scene.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ObjectKind, SceneObject};
    use kurbo::Point;

    #[test]
    fn test_select_only_replaces() {
        let mut selection = Selection::new();
        selection.add("a");
        selection.add("b");
        selection.select_only("c");
        assert_eq!(selection.ids(), ["c".to_string()]);
        assert_eq!(selection.primary(), Some("c"));
    }

    #[test]
    fn test_add_keeps_order_and_dedups() {
        let mut selection = Selection::new();
        selection.add("a");
        selection.add("b");
        selection.add("a");
        assert_eq!(selection.ids(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_retain_present_prunes_stale_ids() {
        let mut scene = Scene::new();
        scene.add(SceneObject::spawn(ObjectKind::Circle, Point::ZERO));
        let live = scene.objects()[0].id().to_string();

        let mut selection = Selection::new();
        selection.add(&live);
        selection.add("ghost");
        selection.retain_present(&scene);
        assert_eq!(selection.ids(), [live]);
    }
}
