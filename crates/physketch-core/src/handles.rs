//! Manipulation handle extraction and handle-driven mutation.
//!
//! Handles are derived data: extracted fresh from the scene whenever they
//! are needed and never stored on objects. Moving a handle produces a new
//! object value through [`apply_handle_move`].

use crate::geometry::{midpoint, rotate};
use crate::objects::{AcSource, Block, Circle, ObjectId, SceneObject};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default handle grab radius in world units.
pub const HANDLE_HIT_RADIUS: f64 = 15.0;

/// Which feature of an object a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleKind {
    Start,
    End,
    /// Midpoint of two-point objects, or the placement point of centered
    /// ones.
    Center,
    /// Fixed application point of an arrow.
    Anchor,
    Tip,
    P1,
    P2,
    P3,
    /// Radius control at `center + (radius, 0)`.
    Radius,
    MidTop,
    MidBottom,
    MidLeft,
    MidRight,
    /// Rim anchors on AC sources. Snap targets only; moving them is a no-op.
    Top,
    Bottom,
    Left,
    Right,
}

impl HandleKind {
    /// Primary handles place the whole object. Dragging one while the
    /// object sits in a multi-selection drags the whole selection.
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            HandleKind::Center | HandleKind::Start | HandleKind::Anchor | HandleKind::P1
        )
    }
}

/// A manipulation handle with its owner and world position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub object_id: ObjectId,
    pub kind: HandleKind,
    pub position: Point,
}

impl Handle {
    pub fn new(object_id: &str, kind: HandleKind, position: Point) -> Self {
        Self {
            object_id: object_id.to_string(),
            kind,
            position,
        }
    }
}

/// Get the manipulation handles for one object.
pub fn handles_for(object: &SceneObject) -> Vec<Handle> {
    let id = object.id();
    match object {
        SceneObject::Spring(o) => segment_handles(id, o.start, o.end),
        SceneObject::Wall(o) => segment_handles(id, o.start, o.end),
        SceneObject::Line(o) => segment_handles(id, o.start, o.end),
        SceneObject::Catenary(o) => segment_handles(id, o.start, o.end),
        SceneObject::Wire(o) => segment_handles(id, o.start, o.end),
        SceneObject::DcSource(o) => segment_handles(id, o.start, o.end),
        SceneObject::Resistor(o) => segment_handles(id, o.start, o.end),
        SceneObject::Inductor(o) => segment_handles(id, o.start, o.end),
        SceneObject::Capacitor(o) => segment_handles(id, o.start, o.end),
        SceneObject::Diode(o) => segment_handles(id, o.start, o.end),
        SceneObject::Switch(o) => segment_handles(id, o.start, o.end),
        SceneObject::Vector(o) => arrow_handles(id, o.anchor, o.tip),
        SceneObject::LinearMarker(o) => arrow_handles(id, o.anchor, o.tip),
        SceneObject::Block(o) => {
            let mids = o.edge_midpoints();
            vec![
                Handle::new(id, HandleKind::Center, o.center),
                Handle::new(id, HandleKind::MidTop, mids[0]),
                Handle::new(id, HandleKind::MidBottom, mids[1]),
                Handle::new(id, HandleKind::MidLeft, mids[2]),
                Handle::new(id, HandleKind::MidRight, mids[3]),
            ]
        }
        SceneObject::Pulley(o) => vec![Handle::new(id, HandleKind::Center, o.center)],
        SceneObject::Text(o) => vec![Handle::new(id, HandleKind::Center, o.center)],
        SceneObject::Triangle(o) => vec![
            Handle::new(id, HandleKind::P1, o.p1),
            Handle::new(id, HandleKind::P2, o.p2),
            Handle::new(id, HandleKind::P3, o.p3),
        ],
        SceneObject::Circle(o) => vec![
            Handle::new(id, HandleKind::Center, o.center),
            Handle::new(
                id,
                HandleKind::Radius,
                Point::new(o.center.x + o.radius, o.center.y),
            ),
        ],
        SceneObject::AcSource(o) => {
            let rim = o.rim_points();
            vec![
                Handle::new(id, HandleKind::Center, o.center),
                Handle::new(
                    id,
                    HandleKind::Radius,
                    Point::new(o.center.x + o.radius, o.center.y),
                ),
                Handle::new(id, HandleKind::Top, rim[0]),
                Handle::new(id, HandleKind::Bottom, rim[1]),
                Handle::new(id, HandleKind::Left, rim[2]),
                Handle::new(id, HandleKind::Right, rim[3]),
            ]
        }
    }
}

fn segment_handles(id: &str, start: Point, end: Point) -> Vec<Handle> {
    vec![
        Handle::new(id, HandleKind::Start, start),
        Handle::new(id, HandleKind::End, end),
        Handle::new(id, HandleKind::Center, midpoint(start, end)),
    ]
}

fn arrow_handles(id: &str, anchor: Point, tip: Point) -> Vec<Handle> {
    vec![
        Handle::new(id, HandleKind::Anchor, anchor),
        Handle::new(id, HandleKind::Tip, tip),
        Handle::new(id, HandleKind::Center, midpoint(anchor, tip)),
    ]
}

/// Handles for every object in scene order. Handle indices used during a
/// drag index into this flattened list.
pub fn scene_handles(objects: &[SceneObject]) -> Vec<Handle> {
    objects.iter().flat_map(handles_for).collect()
}

/// Index of the closest handle within `radius` of `point`, if any.
pub fn closest_handle(handles: &[Handle], point: Point, radius: f64) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_dist_sq = radius * radius;
    for (i, handle) in handles.iter().enumerate() {
        let dx = point.x - handle.position.x;
        let dy = point.y - handle.position.y;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = Some(i);
        }
    }
    best
}

/// Apply a handle move, returning the updated object. The input is never
/// mutated. An unrecognized object/handle pairing returns the object
/// unchanged.
pub fn apply_handle_move(object: &SceneObject, kind: HandleKind, target: Point) -> SceneObject {
    let mut updated = object.clone();
    match kind {
        HandleKind::Start => {
            if let Some((start, _)) = endpoints_mut(&mut updated) {
                *start = target;
            }
        }
        HandleKind::End => {
            if let Some((_, end)) = endpoints_mut(&mut updated) {
                *end = target;
            }
        }
        HandleKind::Anchor => {
            if let Some((anchor, _)) = arrow_points_mut(&mut updated) {
                *anchor = target;
            }
        }
        HandleKind::Tip => {
            if let Some((_, tip)) = arrow_points_mut(&mut updated) {
                *tip = target;
            }
        }
        HandleKind::Center => {
            // Two-point objects translate rigidly; centered objects are
            // placed directly.
            if let Some((a, b)) = two_point_mut(&mut updated) {
                let delta = target - midpoint(*a, *b);
                *a += delta;
                *b += delta;
            } else if let Some(center) = center_mut(&mut updated) {
                *center = target;
            }
        }
        HandleKind::P1 => {
            if let SceneObject::Triangle(o) = &mut updated {
                o.p1 = target;
            }
        }
        HandleKind::P2 => {
            if let SceneObject::Triangle(o) = &mut updated {
                o.p2 = target;
            }
        }
        HandleKind::P3 => {
            if let SceneObject::Triangle(o) = &mut updated {
                o.p3 = target;
            }
        }
        HandleKind::MidLeft | HandleKind::MidRight => {
            if let SceneObject::Block(o) = &mut updated {
                let local = rotate(target - o.center, -o.rotation);
                o.size.x = (local.x.abs() * 2.0).max(Block::MIN_SIDE);
            }
        }
        HandleKind::MidTop | HandleKind::MidBottom => {
            if let SceneObject::Block(o) = &mut updated {
                let local = rotate(target - o.center, -o.rotation);
                o.size.y = (local.y.abs() * 2.0).max(Block::MIN_SIDE);
            }
        }
        HandleKind::Radius => match &mut updated {
            SceneObject::Circle(o) => {
                o.radius = (target - o.center).hypot().max(Circle::MIN_RADIUS);
            }
            SceneObject::AcSource(o) => {
                o.radius = (target - o.center).hypot().max(AcSource::MIN_RADIUS);
            }
            _ => {}
        },
        // Rim anchors exist for wiring and snapping; they do not resize.
        HandleKind::Top | HandleKind::Bottom | HandleKind::Left | HandleKind::Right => {}
    }
    updated
}

fn endpoints_mut(object: &mut SceneObject) -> Option<(&mut Point, &mut Point)> {
    match object {
        SceneObject::Spring(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Wall(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Line(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Catenary(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Wire(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::DcSource(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Resistor(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Inductor(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Capacitor(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Diode(o) => Some((&mut o.start, &mut o.end)),
        SceneObject::Switch(o) => Some((&mut o.start, &mut o.end)),
        _ => None,
    }
}

fn arrow_points_mut(object: &mut SceneObject) -> Option<(&mut Point, &mut Point)> {
    match object {
        SceneObject::Vector(o) => Some((&mut o.anchor, &mut o.tip)),
        SceneObject::LinearMarker(o) => Some((&mut o.anchor, &mut o.tip)),
        _ => None,
    }
}

/// Both endpoint pairs: segment start/end and arrow anchor/tip.
fn two_point_mut(object: &mut SceneObject) -> Option<(&mut Point, &mut Point)> {
    match object {
        SceneObject::Vector(o) => Some((&mut o.anchor, &mut o.tip)),
        SceneObject::LinearMarker(o) => Some((&mut o.anchor, &mut o.tip)),
        other => endpoints_mut(other),
    }
}

fn center_mut(object: &mut SceneObject) -> Option<&mut Point> {
    match object {
        SceneObject::Block(o) => Some(&mut o.center),
        SceneObject::Pulley(o) => Some(&mut o.center),
        SceneObject::Circle(o) => Some(&mut o.center),
        SceneObject::Text(o) => Some(&mut o.center),
        SceneObject::AcSource(o) => Some(&mut o.center),
        _ => None,
    }
}
