//! The interactive editor: pointer state machine, selection, undo history
//! and snapping, glued together over a scene.
//!
//! Hosts feed world-coordinate pointer events in and render the [`Frame`]
//! that comes back out. All mutation goes through here so that the
//! checkpoint discipline holds: one undo step per drag, per property write,
//! per add/delete, per load.

use crate::fields::PropertyValue;
use crate::handles::{
    apply_handle_move, closest_handle, scene_handles, Handle, HandleKind, HANDLE_HIT_RADIUS,
};
use crate::history::History;
use crate::input::PointerEvent;
use crate::objects::{ObjectId, ObjectKind, SceneObject};
use crate::scene::{Scene, SceneError};
use crate::selection::Selection;
use crate::snap::{resolve_snap, SnapConfig, SnapContext, SnapResult};
use kurbo::{Point, Rect};

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// Dragging the handle at `index` into the current handle list.
    Handle { index: usize },
    /// Rubber-band selection from `start` to `current`.
    BoxSelect { start: Point, current: Point },
}

/// Cursor feedback for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Hovering a grabbable handle.
    Grab,
    /// Actively dragging.
    Grabbing,
}

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug)]
pub struct Frame<'a> {
    /// Objects in document order. Use [`Scene::render_order`] for draw
    /// order.
    pub objects: &'a [SceneObject],
    pub handles: &'a [Handle],
    pub selection: &'a Selection,
    /// The snap applied to the event most recently processed, for guide
    /// and highlight drawing.
    pub snap: Option<SnapResult>,
    pub drag: DragState,
    pub cursor: CursorHint,
}

/// The editor. One owned value per document; all methods take `&mut self`
/// and are meant to be called from a single thread.
pub struct Editor {
    history: History,
    selection: Selection,
    drag: DragState,
    config: SnapConfig,
    handles: Vec<Handle>,
    last_snap: Option<SnapResult>,
    cursor: CursorHint,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_scene(Scene::new())
    }

    pub fn with_scene(scene: Scene) -> Self {
        let handles = scene_handles(scene.objects());
        Self {
            history: History::new(scene),
            selection: Selection::new(),
            drag: DragState::Idle,
            config: SnapConfig::default(),
            handles,
            last_snap: None,
            cursor: CursorHint::Default,
        }
    }

    pub fn scene(&self) -> &Scene {
        self.history.present()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn snap_config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn last_snap(&self) -> Option<&SnapResult> {
        self.last_snap.as_ref()
    }

    /// Everything a renderer needs to draw the current frame.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            objects: self.history.present().objects(),
            handles: &self.handles,
            selection: &self.selection,
            snap: self.last_snap,
            drag: self.drag,
            cursor: self.cursor,
        }
    }

    /// Toggle snapping globally. The per-event Ctrl/Meta override composes
    /// with this.
    pub fn set_snapping_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Set the grid density (1 = 50 unit cells, 2 = 25, ...).
    pub fn set_grid_density(&mut self, density: f64) {
        self.config = self.config.with_grid_density(density);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Begin an interaction. A handle under the pointer starts a drag
    /// (with its one-and-only history checkpoint); anywhere else starts a
    /// box selection.
    pub fn pointer_down(&mut self, ev: PointerEvent) {
        if !matches!(self.drag, DragState::Idle) {
            return;
        }
        self.refresh_handles();

        if let Some(index) = closest_handle(&self.handles, ev.position, HANDLE_HIT_RADIUS) {
            let handle = self.handles[index].clone();
            // Checkpoint the pre-drag scene; the whole drag is one undo
            // step no matter how many move events follow.
            let snapshot = self.history.present().clone();
            self.history.push_state(snapshot);
            if !self.selection.contains(&handle.object_id) {
                self.selection.select_only(&handle.object_id);
            }
            self.drag = DragState::Handle { index };
            self.cursor = CursorHint::Grabbing;
            log::debug!("Grabbed {:?} handle on {}", handle.kind, handle.object_id);
        } else {
            self.drag = DragState::BoxSelect {
                start: ev.position,
                current: ev.position,
            };
        }
    }

    pub fn pointer_move(&mut self, ev: PointerEvent) {
        match self.drag {
            DragState::Handle { index } => self.drag_handle(index, ev),
            DragState::BoxSelect { start, .. } => {
                self.drag = DragState::BoxSelect {
                    start,
                    current: ev.position,
                };
            }
            DragState::Idle => {
                self.cursor = match closest_handle(&self.handles, ev.position, HANDLE_HIT_RADIUS)
                {
                    Some(_) => CursorHint::Grab,
                    None => CursorHint::Default,
                };
            }
        }
    }

    /// Finish the current interaction. Ending a box selection replaces the
    /// selection with the captured objects, unless nothing was captured.
    pub fn pointer_up(&mut self, _ev: PointerEvent) {
        match self.drag {
            DragState::Handle { .. } => {
                self.drag = DragState::Idle;
                self.last_snap = None;
                self.cursor = CursorHint::Default;
            }
            DragState::BoxSelect { start, current } => {
                self.drag = DragState::Idle;
                let rect = Rect::from_points(start, current);
                let mut captured: Vec<ObjectId> = Vec::new();
                for handle in &self.handles {
                    if contains_inclusive(rect, handle.position)
                        && !captured.iter().any(|id| *id == handle.object_id)
                    {
                        captured.push(handle.object_id.clone());
                    }
                }
                if !captured.is_empty() {
                    log::debug!("Box select captured {} object(s)", captured.len());
                    self.selection.replace(captured);
                }
            }
            DragState::Idle => {}
        }
    }

    /// Spawn a new object at `at`, commit it, and select it.
    pub fn add_object(&mut self, kind: ObjectKind, at: Point) -> ObjectId {
        let object = SceneObject::spawn(kind, at);
        let id = object.id().to_string();
        let mut scene = self.history.present().clone();
        scene.add(object);
        self.history.push_state(scene);
        self.selection.select_only(&id);
        self.refresh_handles();
        log::info!("Added {} as {}", kind.as_str(), id);
        id
    }

    /// Delete every selected object as one undo step. No-op with nothing
    /// selected.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let mut scene = self.history.present().clone();
        scene.remove_all(self.selection.ids());
        log::info!("Deleted {} object(s)", self.selection.len());
        self.history.push_state(scene);
        self.selection.clear();
        self.refresh_handles();
    }

    /// Write one property on one object as one undo step. Returns false
    /// (with the scene untouched) for unknown ids, unknown fields and type
    /// mismatches.
    pub fn set_field(&mut self, id: &str, field: &str, value: &PropertyValue) -> bool {
        let mut scene = self.history.present().clone();
        let Some(object) = scene.find_mut(id) else {
            log::debug!("set_field: no object {}", id);
            return false;
        };
        if !object.set_field(field, value) {
            log::debug!("set_field: rejected {} on {}", field, id);
            return false;
        }
        self.history.push_state(scene);
        self.refresh_handles();
        true
    }

    /// Replace the document with a parsed scene as one undo step. On a
    /// parse error the current scene is untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(), SceneError> {
        match Scene::from_json(json) {
            Ok(scene) => {
                log::info!("Loaded scene with {} object(s)", scene.len());
                self.history.push_state(scene);
                self.selection.retain_present(self.history.present());
                self.refresh_handles();
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to load scene: {}", e);
                Err(e)
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        self.history.present().to_json()
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            self.selection.retain_present(self.history.present());
            self.refresh_handles();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            self.selection.retain_present(self.history.present());
            self.refresh_handles();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn refresh_handles(&mut self) {
        self.handles = scene_handles(self.history.present().objects());
    }

    fn drag_handle(&mut self, index: usize, ev: PointerEvent) {
        let Some(handle) = self.handles.get(index).cloned() else {
            // The scene changed under the drag; abandon it.
            log::debug!("Stale handle index {}, abandoning drag", index);
            self.drag = DragState::Idle;
            self.last_snap = None;
            return;
        };
        let Some(object) = self.history.present().find(&handle.object_id).cloned() else {
            self.drag = DragState::Idle;
            self.last_snap = None;
            return;
        };

        // Ctrl/Meta suppresses snapping for this event only.
        let mut config = self.config;
        config.enabled = config.enabled && !(ev.modifiers.ctrl || ev.modifiers.meta);
        let context = SnapContext {
            anchor: drag_anchor(&object, handle.kind),
            smart: object.smart_snapping(),
        };
        let snap = resolve_snap(
            self.history.present().objects(),
            ev.position,
            Some(object.id()),
            &config,
            &context,
        );
        let target = snap.map(|s| s.position).unwrap_or(ev.position);

        let mut scene = self.history.present().clone();
        let group_drag = handle.kind.is_primary()
            && self.selection.len() > 1
            && self.selection.contains(&handle.object_id);
        if group_drag {
            // The lead handle snapped; everyone moves by the same delta.
            let delta = target - handle.position;
            for id in self.selection.ids() {
                if let Some(member) = scene.find_mut(id) {
                    member.translate(delta);
                }
            }
        } else if let Some(slot) = scene.find_mut(&handle.object_id) {
            *slot = apply_handle_move(&object, handle.kind, target);
        }
        self.history.update_state(scene);
        self.refresh_handles();
        self.last_snap = snap;
    }
}

/// The fixed endpoint a tip drag pivots around, for angular snapping.
fn drag_anchor(object: &SceneObject, kind: HandleKind) -> Option<Point> {
    match (object, kind) {
        (SceneObject::Vector(o), HandleKind::Tip) => Some(o.anchor),
        (SceneObject::LinearMarker(o), HandleKind::Tip) => Some(o.anchor),
        _ => None,
    }
}

/// Boundary-inclusive point-in-rect test; `Rect::contains` excludes the
/// max edges.
fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}
