//! Circuit elements: wires, sources, and two-terminal components.
//!
//! All of these except `AcSource` are segment-like: geometry is a start and
//! an end terminal, everything else is drawn along that axis.

use super::style::Label;
use super::{default_true, mint_id, ObjectId, UNIT};
use crate::geometry::midpoint;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A plain connecting wire, with optional junction dots and a current arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    /// Draw a current direction arrow at the midpoint.
    #[serde(default)]
    pub show_arrow: bool,
    #[serde(default)]
    pub flip_arrow: bool,
    #[serde(default)]
    pub label: Label,
}

impl Wire {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("wire"),
            start,
            end,
            start_dot: false,
            end_dot: false,
            show_arrow: false,
            flip_arrow: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// A DC voltage source (battery), one or more cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcSource {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Number of cells drawn in series.
    pub cells: u32,
    /// Long plate length.
    #[serde(default = "default_plate_width")]
    pub width: f64,
    /// Gap between the plates of one cell.
    #[serde(default = "default_plate_spacing")]
    pub spacing: f64,
    #[serde(default = "default_true")]
    pub show_polarity: bool,
    #[serde(default)]
    pub flip_polarity: bool,
    #[serde(default = "default_true")]
    pub show_terminals: bool,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    #[serde(default)]
    pub label: Label,
}

fn default_plate_width() -> f64 {
    36.0
}

fn default_plate_spacing() -> f64 {
    8.0
}

impl DcSource {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("dcsource"),
            start,
            end,
            cells: 1,
            width: default_plate_width(),
            spacing: default_plate_spacing(),
            show_polarity: true,
            flip_polarity: false,
            show_terminals: true,
            start_dot: false,
            end_dot: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// An AC voltage source: a circle with a sine glyph, placed by center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcSource {
    pub id: ObjectId,
    pub center: Point,
    pub radius: f64,
    #[serde(default)]
    pub label: Label,
}

impl AcSource {
    /// Smallest permitted radius.
    pub const MIN_RADIUS: f64 = 1.0;

    pub fn new(center: Point) -> Self {
        Self {
            id: mint_id("acsource"),
            center,
            radius: 4.0 * UNIT,
            label: Label::default(),
        }
    }

    /// Cardinal rim points: top, bottom, left, right. These are terminal
    /// anchors for wiring, not resize handles.
    pub fn rim_points(&self) -> [Point; 4] {
        let c = self.center;
        let r = self.radius;
        [
            Point::new(c.x, c.y - r),
            Point::new(c.x, c.y + r),
            Point::new(c.x - r, c.y),
            Point::new(c.x + r, c.y),
        ]
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// A zigzag resistor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistor {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Zigzag amplitude.
    pub width: f64,
    /// Number of zigzag peaks.
    pub coils: u32,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    #[serde(default)]
    pub label: Label,
}

impl Resistor {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("resistor"),
            start,
            end,
            width: 12.0,
            coils: 6,
            start_dot: false,
            end_dot: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// A looping inductor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inductor {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Loop amplitude.
    pub width: f64,
    /// Number of loops.
    pub coils: u32,
    /// Fraction of each end kept as straight lead wire.
    #[serde(default = "default_inductor_wire_ratio")]
    pub wire_ratio: f64,
    /// Loop sweep start in degrees.
    #[serde(default = "default_loop_start")]
    pub spiral_start: f64,
    /// Loop sweep end in degrees.
    #[serde(default = "default_loop_end")]
    pub spiral_end: f64,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    #[serde(default)]
    pub label: Label,
}

fn default_inductor_wire_ratio() -> f64 {
    0.15
}

fn default_loop_start() -> f64 {
    -90.0
}

fn default_loop_end() -> f64 {
    90.0
}

impl Inductor {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("inductor"),
            start,
            end,
            width: 16.0,
            coils: 4,
            wire_ratio: default_inductor_wire_ratio(),
            spiral_start: default_loop_start(),
            spiral_end: default_loop_end(),
            start_dot: false,
            end_dot: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// A parallel-plate capacitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacitor {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Plate length.
    pub width: f64,
    /// Gap between the plates.
    pub separation: f64,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    #[serde(default)]
    pub label: Label,
}

impl Capacitor {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("capacitor"),
            start,
            end,
            width: 24.0,
            separation: 8.0,
            start_dot: false,
            end_dot: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// A diode (triangle and bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diode {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Glyph scale factor.
    pub scale: f64,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    #[serde(default)]
    pub label: Label,
}

impl Diode {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("diode"),
            start,
            end,
            scale: 1.0,
            start_dot: false,
            end_dot: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// A knife switch. The open/closed state is purely visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    #[serde(default = "default_true")]
    pub open: bool,
    /// Angle of the open blade in degrees.
    #[serde(default = "default_blade_angle")]
    pub blade_angle: f64,
    #[serde(default)]
    pub start_dot: bool,
    #[serde(default)]
    pub end_dot: bool,
    #[serde(default)]
    pub label: Label,
}

fn default_blade_angle() -> f64 {
    30.0
}

impl Switch {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("switch"),
            start,
            end,
            open: true,
            blade_angle: default_blade_angle(),
            start_dot: false,
            end_dot: false,
            label: Label::default(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}
