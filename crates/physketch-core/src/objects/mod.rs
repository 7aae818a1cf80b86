//! Scene object definitions for the sketch editor.

mod arrow;
mod block;
mod circuit;
mod drawing;
mod pulley;
mod spring;
pub mod style;
mod wall;

pub use arrow::{LinearMarker, VectorArrow};
pub use block::Block;
pub use circuit::{AcSource, Capacitor, DcSource, Diode, Inductor, Resistor, Switch, Wire};
pub use drawing::{Catenary, Circle, Line, Text, Triangle};
pub use pulley::Pulley;
pub use spring::{Spring, SpringStyle};
pub use style::{Color, FontStyle, HeadStyle, Label, LineStyle};
pub use wall::Wall;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique object identifier. Factories mint `<kind>_<uuid>`, but any unique
/// string loaded from a document is accepted.
pub type ObjectId = String;

/// Base drawing unit in world coordinates. Object defaults are specified in
/// multiples of this.
pub const UNIT: f64 = 6.25;

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn mint_id(prefix: &str) -> ObjectId {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Discriminant for every object kind, used by factories and property
/// plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Spring,
    Wall,
    Block,
    Line,
    Catenary,
    Pulley,
    Vector,
    Triangle,
    Circle,
    Text,
    LinearMarker,
    Wire,
    DcSource,
    AcSource,
    Resistor,
    Inductor,
    Capacitor,
    Diode,
    Switch,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Spring => "spring",
            ObjectKind::Wall => "wall",
            ObjectKind::Block => "block",
            ObjectKind::Line => "line",
            ObjectKind::Catenary => "catenary",
            ObjectKind::Pulley => "pulley",
            ObjectKind::Vector => "vector",
            ObjectKind::Triangle => "triangle",
            ObjectKind::Circle => "circle",
            ObjectKind::Text => "text",
            ObjectKind::LinearMarker => "linearmarker",
            ObjectKind::Wire => "wire",
            ObjectKind::DcSource => "dcsource",
            ObjectKind::AcSource => "acsource",
            ObjectKind::Resistor => "resistor",
            ObjectKind::Inductor => "inductor",
            ObjectKind::Capacitor => "capacitor",
            ObjectKind::Diode => "diode",
            ObjectKind::Switch => "switch",
        }
    }
}

/// Enum wrapper for all object types. Serializes as a flat record with a
/// lowercase `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Spring(Spring),
    Wall(Wall),
    Block(Block),
    Line(Line),
    Catenary(Catenary),
    Pulley(Pulley),
    Vector(VectorArrow),
    Triangle(Triangle),
    Circle(Circle),
    Text(Text),
    LinearMarker(LinearMarker),
    Wire(Wire),
    DcSource(DcSource),
    AcSource(AcSource),
    Resistor(Resistor),
    Inductor(Inductor),
    Capacitor(Capacitor),
    Diode(Diode),
    Switch(Switch),
}

impl SceneObject {
    pub fn id(&self) -> &str {
        match self {
            SceneObject::Spring(o) => &o.id,
            SceneObject::Wall(o) => &o.id,
            SceneObject::Block(o) => &o.id,
            SceneObject::Line(o) => &o.id,
            SceneObject::Catenary(o) => &o.id,
            SceneObject::Pulley(o) => &o.id,
            SceneObject::Vector(o) => &o.id,
            SceneObject::Triangle(o) => &o.id,
            SceneObject::Circle(o) => &o.id,
            SceneObject::Text(o) => &o.id,
            SceneObject::LinearMarker(o) => &o.id,
            SceneObject::Wire(o) => &o.id,
            SceneObject::DcSource(o) => &o.id,
            SceneObject::AcSource(o) => &o.id,
            SceneObject::Resistor(o) => &o.id,
            SceneObject::Inductor(o) => &o.id,
            SceneObject::Capacitor(o) => &o.id,
            SceneObject::Diode(o) => &o.id,
            SceneObject::Switch(o) => &o.id,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            SceneObject::Spring(_) => ObjectKind::Spring,
            SceneObject::Wall(_) => ObjectKind::Wall,
            SceneObject::Block(_) => ObjectKind::Block,
            SceneObject::Line(_) => ObjectKind::Line,
            SceneObject::Catenary(_) => ObjectKind::Catenary,
            SceneObject::Pulley(_) => ObjectKind::Pulley,
            SceneObject::Vector(_) => ObjectKind::Vector,
            SceneObject::Triangle(_) => ObjectKind::Triangle,
            SceneObject::Circle(_) => ObjectKind::Circle,
            SceneObject::Text(_) => ObjectKind::Text,
            SceneObject::LinearMarker(_) => ObjectKind::LinearMarker,
            SceneObject::Wire(_) => ObjectKind::Wire,
            SceneObject::DcSource(_) => ObjectKind::DcSource,
            SceneObject::AcSource(_) => ObjectKind::AcSource,
            SceneObject::Resistor(_) => ObjectKind::Resistor,
            SceneObject::Inductor(_) => ObjectKind::Inductor,
            SceneObject::Capacitor(_) => ObjectKind::Capacitor,
            SceneObject::Diode(_) => ObjectKind::Diode,
            SceneObject::Switch(_) => ObjectKind::Switch,
        }
    }

    /// Rigidly move the whole object. Every coordinate-valued field shifts
    /// by the same delta; nothing else changes.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            SceneObject::Spring(o) => o.translate(delta),
            SceneObject::Wall(o) => o.translate(delta),
            SceneObject::Block(o) => o.translate(delta),
            SceneObject::Line(o) => o.translate(delta),
            SceneObject::Catenary(o) => o.translate(delta),
            SceneObject::Pulley(o) => o.translate(delta),
            SceneObject::Vector(o) => o.translate(delta),
            SceneObject::Triangle(o) => o.translate(delta),
            SceneObject::Circle(o) => o.translate(delta),
            SceneObject::Text(o) => o.translate(delta),
            SceneObject::LinearMarker(o) => o.translate(delta),
            SceneObject::Wire(o) => o.translate(delta),
            SceneObject::DcSource(o) => o.translate(delta),
            SceneObject::AcSource(o) => o.translate(delta),
            SceneObject::Resistor(o) => o.translate(delta),
            SceneObject::Inductor(o) => o.translate(delta),
            SceneObject::Capacitor(o) => o.translate(delta),
            SceneObject::Diode(o) => o.translate(delta),
            SceneObject::Switch(o) => o.translate(delta),
        }
    }

    /// Whether edge and angular snapping should engage for drags of this
    /// object. Arrows carry an opt-out flag; everything else snaps smart.
    pub fn smart_snapping(&self) -> bool {
        match self {
            SceneObject::Vector(o) => o.smart_snapping,
            SceneObject::LinearMarker(o) => o.smart_snapping,
            _ => true,
        }
    }

    /// Render layering category: higher draws on top. Document order breaks
    /// ties.
    pub fn z_category(&self) -> u8 {
        match self.kind() {
            ObjectKind::Spring | ObjectKind::Line | ObjectKind::Catenary => 1,
            ObjectKind::Wall
            | ObjectKind::Block
            | ObjectKind::Triangle
            | ObjectKind::Circle
            | ObjectKind::Pulley => 2,
            ObjectKind::Vector => 3,
            ObjectKind::Text => 4,
            _ => 0,
        }
    }

    /// Loose axis-aligned bounding box: a safe overestimate that includes
    /// stroke width, labels, and sag allowances. Used for export cropping.
    pub fn loose_bounds(&self) -> Rect {
        match self {
            SceneObject::Spring(o) => {
                segment_box(o.start, o.end).inflate(o.width / 2.0, o.width / 2.0)
            }
            SceneObject::Wall(o) => segment_box(o.start, o.end).inflate(10.0, 10.0),
            SceneObject::Block(o) => {
                // Unrotated diagonal covers any rotation.
                let diagonal = o.size.hypot() / 2.0;
                centered_box(o.center, diagonal)
            }
            SceneObject::Line(o) => {
                segment_box(o.start, o.end).inflate(o.width / 2.0, o.width / 2.0)
            }
            SceneObject::Catenary(o) => {
                let b = segment_box(o.start, o.end);
                Rect::new(b.x0, b.y0, b.x1, b.y1 + o.slack)
            }
            SceneObject::Pulley(o) => centered_box(o.center, o.radius),
            SceneObject::Vector(o) => segment_box(o.anchor, o.tip).inflate(20.0, 20.0),
            SceneObject::Triangle(o) => {
                segment_box(o.p1, o.p2).union(segment_box(o.p2, o.p3))
            }
            SceneObject::Circle(o) => centered_box(o.center, o.radius),
            SceneObject::Text(o) => {
                let w = o.content.chars().count() as f64 * o.font.size * 0.6;
                let h = o.font.size;
                let diagonal = (w * w + h * h).sqrt() / 2.0;
                centered_box(o.center, diagonal)
            }
            SceneObject::LinearMarker(o) => segment_box(o.anchor, o.tip).inflate(20.0, 20.0),
            SceneObject::Wire(o) => segment_box(o.start, o.end).inflate(4.0, 4.0),
            SceneObject::DcSource(o) => {
                segment_box(o.start, o.end).inflate(o.width / 2.0, o.width / 2.0)
            }
            SceneObject::AcSource(o) => centered_box(o.center, o.radius),
            SceneObject::Resistor(o) => {
                segment_box(o.start, o.end).inflate(o.width, o.width)
            }
            SceneObject::Inductor(o) => {
                segment_box(o.start, o.end).inflate(o.width, o.width)
            }
            SceneObject::Capacitor(o) => {
                segment_box(o.start, o.end).inflate(o.width / 2.0, o.width / 2.0)
            }
            SceneObject::Diode(o) => {
                let glyph = 21.0 * o.scale;
                segment_box(o.start, o.end).inflate(glyph / 2.0, glyph / 2.0)
            }
            SceneObject::Switch(o) => segment_box(o.start, o.end).inflate(20.0, 20.0),
        }
    }

    /// Create an object of the given kind with its default geometry placed
    /// around `at`.
    pub fn spawn(kind: ObjectKind, at: Point) -> SceneObject {
        match kind {
            ObjectKind::Spring => SceneObject::Spring(Spring::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::Wall => SceneObject::Wall(Wall::new(
                Point::new(at.x - 100.0, at.y + 100.0),
                Point::new(at.x + 100.0, at.y + 100.0),
            )),
            ObjectKind::Block => SceneObject::Block(Block::new(
                at,
                Vec2::new(10.0 * UNIT, 10.0 * UNIT),
            )),
            ObjectKind::Line => SceneObject::Line(Line::new(
                Point::new(at.x - 50.0, at.y - 50.0),
                Point::new(at.x + 50.0, at.y + 50.0),
            )),
            ObjectKind::Catenary => SceneObject::Catenary(Catenary::new(
                Point::new(at.x - 60.0, at.y),
                Point::new(at.x + 60.0, at.y),
            )),
            ObjectKind::Pulley => {
                SceneObject::Pulley(Pulley::new(Point::new(at.x, at.y - 50.0)))
            }
            ObjectKind::Vector => SceneObject::Vector(VectorArrow::new(
                at,
                Point::new(at.x + 50.0, at.y - 50.0),
            )),
            ObjectKind::Triangle => SceneObject::Triangle(Triangle::incline(at)),
            ObjectKind::Circle => SceneObject::Circle(Circle::new(at, 5.0 * UNIT)),
            ObjectKind::Text => SceneObject::Text(Text::new(at, "Text")),
            ObjectKind::LinearMarker => SceneObject::LinearMarker(LinearMarker::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::Wire => SceneObject::Wire(Wire::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::DcSource => SceneObject::DcSource(DcSource::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::AcSource => SceneObject::AcSource(AcSource::new(at)),
            ObjectKind::Resistor => SceneObject::Resistor(Resistor::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::Inductor => SceneObject::Inductor(Inductor::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::Capacitor => SceneObject::Capacitor(Capacitor::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::Diode => SceneObject::Diode(Diode::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
            ObjectKind::Switch => SceneObject::Switch(Switch::new(
                Point::new(at.x - 50.0, at.y),
                Point::new(at.x + 50.0, at.y),
            )),
        }
    }
}

fn segment_box(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

fn centered_box(center: Point, half: f64) -> Rect {
    Rect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_id_carries_prefix() {
        let id = mint_id("spring");
        assert!(id.starts_with("spring_"));
        assert_ne!(mint_id("spring"), id);
    }

    #[test]
    fn test_spawn_spring_geometry() {
        let obj = SceneObject::spawn(ObjectKind::Spring, Point::new(400.0, 300.0));
        match obj {
            SceneObject::Spring(ref s) => {
                assert_eq!(s.start, Point::new(350.0, 300.0));
                assert_eq!(s.end, Point::new(450.0, 300.0));
                assert_eq!(s.coils, 10);
            }
            _ => panic!("expected spring"),
        }
        assert_eq!(obj.kind(), ObjectKind::Spring);
    }

    #[test]
    fn test_spawn_block_is_ten_units_square() {
        let obj = SceneObject::spawn(ObjectKind::Block, Point::new(0.0, 0.0));
        match obj {
            SceneObject::Block(ref b) => {
                assert_eq!(b.size, Vec2::new(62.5, 62.5));
                assert_eq!(b.mass_label, "M");
            }
            _ => panic!("expected block"),
        }
    }

    #[test]
    fn test_serialized_form_is_type_tagged() {
        let obj = SceneObject::spawn(ObjectKind::Wall, Point::new(0.0, 0.0));
        let json = serde_json::to_value(&obj).unwrap();
        assert_eq!(json["type"], "wall");
        assert_eq!(json["hatch_angle"], 45.0);
        assert_eq!(json["start"]["y"], 100.0);
    }

    #[test]
    fn test_translate_dispatch_covers_every_kind() {
        let kinds = [
            ObjectKind::Spring,
            ObjectKind::Wall,
            ObjectKind::Block,
            ObjectKind::Line,
            ObjectKind::Catenary,
            ObjectKind::Pulley,
            ObjectKind::Vector,
            ObjectKind::Triangle,
            ObjectKind::Circle,
            ObjectKind::Text,
            ObjectKind::LinearMarker,
            ObjectKind::Wire,
            ObjectKind::DcSource,
            ObjectKind::AcSource,
            ObjectKind::Resistor,
            ObjectKind::Inductor,
            ObjectKind::Capacitor,
            ObjectKind::Diode,
            ObjectKind::Switch,
        ];
        for kind in kinds {
            let mut obj = SceneObject::spawn(kind, Point::new(0.0, 0.0));
            let before = obj.loose_bounds();
            obj.translate(Vec2::new(7.0, -3.0));
            let after = obj.loose_bounds();
            assert!((after.x0 - before.x0 - 7.0).abs() < 1e-9, "{:?}", kind);
            assert!((after.y0 - before.y0 + 3.0).abs() < 1e-9, "{:?}", kind);
        }
    }

    #[test]
    fn test_z_categories() {
        let spring = SceneObject::spawn(ObjectKind::Spring, Point::ZERO);
        let wall = SceneObject::spawn(ObjectKind::Wall, Point::ZERO);
        let vector = SceneObject::spawn(ObjectKind::Vector, Point::ZERO);
        let text = SceneObject::spawn(ObjectKind::Text, Point::ZERO);
        let wire = SceneObject::spawn(ObjectKind::Wire, Point::ZERO);
        assert_eq!(spring.z_category(), 1);
        assert_eq!(wall.z_category(), 2);
        assert_eq!(vector.z_category(), 3);
        assert_eq!(text.z_category(), 4);
        assert_eq!(wire.z_category(), 0);
    }
}
