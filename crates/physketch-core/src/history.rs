//! Linear undo history over scene snapshots.

use crate::scene::Scene;

/// Maximum number of undo levels to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// Past/present/future snapshot stacks. The present scene lives here; the
/// editor reads it through [`History::present`] and writes it through
/// [`History::push_state`] (a committed step) or [`History::update_state`]
/// (a live replacement that does not create an undo level).
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Scene>,
    present: Scene,
    future: Vec<Scene>,
}

impl History {
    pub fn new(present: Scene) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
        }
    }

    pub fn present(&self) -> &Scene {
        &self.present
    }

    /// Commit a new present. The previous present becomes undoable, any
    /// redo states are discarded, and the oldest level is dropped beyond
    /// the cap.
    pub fn push_state(&mut self, scene: Scene) {
        let previous = std::mem::replace(&mut self.present, scene);
        self.past.push(previous);
        self.future.clear();
        if self.past.len() > MAX_UNDO_HISTORY {
            self.past.remove(0);
        }
    }

    /// Replace the present without creating an undo level. Used for live
    /// drag updates after the checkpoint was taken at drag start.
    pub fn update_state(&mut self, scene: Scene) {
        self.present = scene;
    }

    /// Undo the last committed step. Returns false at the end of history.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Redo a previously undone step. Returns false if there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ObjectKind, SceneObject};
    use kurbo::Point;

    fn scene_with(count: usize) -> Scene {
        let mut scene = Scene::new();
        for i in 0..count {
            scene.add(SceneObject::spawn(
                ObjectKind::Circle,
                Point::new(i as f64 * 100.0, 0.0),
            ));
        }
        scene
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new(scene_with(0));
        history.push_state(scene_with(1));
        history.push_state(scene_with(2));

        assert!(history.undo());
        assert_eq!(history.present().len(), 1);
        assert!(history.undo());
        assert_eq!(history.present().len(), 0);
        assert!(!history.undo());

        assert!(history.redo());
        assert!(history.redo());
        assert_eq!(history.present().len(), 2);
        assert!(!history.redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = History::new(scene_with(0));
        history.push_state(scene_with(1));
        assert!(history.undo());
        assert!(history.can_redo());
        history.push_state(scene_with(3));
        assert!(!history.can_redo());
        assert_eq!(history.present().len(), 3);
    }

    #[test]
    fn test_update_does_not_create_levels() {
        let mut history = History::new(scene_with(2));
        // Drag discipline: one checkpoint of the unchanged scene, then a
        // stream of live updates.
        let snapshot = history.present().clone();
        history.push_state(snapshot);
        history.update_state(scene_with(5));
        history.update_state(scene_with(6));
        assert_eq!(history.present().len(), 6);
        assert!(history.undo());
        // One undo step covers the whole drag.
        assert_eq!(history.present().len(), 2);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = History::new(scene_with(0));
        for i in 1..=(MAX_UNDO_HISTORY + 10) {
            history.push_state(scene_with(i));
        }
        let mut undone = 0;
        while history.undo() {
            undone += 1;
        }
        assert_eq!(undone, MAX_UNDO_HISTORY);
        // The oldest reachable state is the one just inside the cap.
        assert_eq!(history.present().len(), 10);
    }
}
