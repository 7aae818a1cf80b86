//! Physketch Core Library
//!
//! Platform-agnostic geometry and interaction logic for the physketch
//! physics/circuit sketch editor: the scene model, handle extraction and
//! mutation, snapping, selection and undo history. Rendering and windowing
//! live in host crates.

pub mod editor;
pub mod fields;
pub mod geometry;
pub mod handles;
pub mod history;
pub mod input;
pub mod objects;
pub mod scene;
pub mod selection;
pub mod snap;

pub use editor::{CursorHint, DragState, Editor, Frame};
pub use fields::PropertyValue;
pub use handles::{
    apply_handle_move, closest_handle, handles_for, scene_handles, Handle, HandleKind,
    HANDLE_HIT_RADIUS,
};
pub use history::{History, MAX_UNDO_HISTORY};
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use objects::{ObjectId, ObjectKind, SceneObject, UNIT};
pub use scene::{Scene, SceneError};
pub use selection::Selection;
pub use snap::{
    resolve_snap, snap_to_grid, SnapConfig, SnapContext, SnapKind, SnapResult, GRID_SIZE,
    SNAP_THRESHOLD,
};
