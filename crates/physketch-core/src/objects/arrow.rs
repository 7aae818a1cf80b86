//! Anchor/tip annotation arrows: force vectors and linear measurement
//! markers.

use super::style::{Color, HeadStyle, Label, LineStyle};
use super::{default_true, mint_id, ObjectId};
use crate::geometry::midpoint;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A force/velocity vector drawn from an anchor to a tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorArrow {
    pub id: ObjectId,
    /// Fixed application point.
    pub anchor: Point,
    pub tip: Point,
    #[serde(default)]
    pub label: Label,
    /// Draw dashed x/y component projections.
    #[serde(default)]
    pub show_components: bool,
    /// Opt out of edge/angular snapping while dragging the tip.
    #[serde(default = "default_true")]
    pub smart_snapping: bool,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub head_style: HeadStyle,
    #[serde(default = "default_head_length")]
    pub head_length: f64,
    #[serde(default = "default_head_width")]
    pub head_width: f64,
}

pub(super) fn default_stroke_width() -> f64 {
    2.0
}

pub(super) fn default_head_length() -> f64 {
    16.0
}

pub(super) fn default_head_width() -> f64 {
    12.0
}

impl VectorArrow {
    pub fn new(anchor: Point, tip: Point) -> Self {
        Self {
            id: mint_id("vec"),
            anchor,
            tip,
            label: Label::default(),
            show_components: false,
            smart_snapping: true,
            color: Color::black(),
            line_style: LineStyle::Solid,
            stroke_width: default_stroke_width(),
            head_style: HeadStyle::Filled,
            head_length: default_head_length(),
            head_width: default_head_width(),
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.anchor, self.tip)
    }

    /// Displacement from anchor to tip.
    pub fn delta(&self) -> Vec2 {
        self.tip - self.anchor
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.anchor += delta;
        self.tip += delta;
    }
}

/// A dimension-style measurement marker between two points, with optional
/// extension lines and a single or double arrow head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearMarker {
    pub id: ObjectId,
    pub anchor: Point,
    pub tip: Point,
    #[serde(default)]
    pub label: Label,
    #[serde(default = "default_true")]
    pub smart_snapping: bool,
    #[serde(default)]
    pub color: Color,
    /// Single arrow head at the tip instead of heads at both ends.
    #[serde(default)]
    pub single_arrow: bool,
    /// Render the label on the line with a backing box instead of beside it.
    #[serde(default)]
    pub text_on_line: bool,
    #[serde(default = "default_true")]
    pub show_extensions: bool,
    /// Extra extension line length in world units.
    #[serde(default)]
    pub extension_length: f64,
    #[serde(default)]
    pub flip_extension: bool,
    #[serde(default)]
    pub dashed_extension: bool,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_head_length")]
    pub head_length: f64,
    #[serde(default = "default_head_width")]
    pub head_width: f64,
    /// Horizontal label nudge.
    #[serde(default)]
    pub label_shift: f64,
}

impl LinearMarker {
    pub fn new(anchor: Point, tip: Point) -> Self {
        Self {
            id: mint_id("marker"),
            anchor,
            tip,
            label: Label::default(),
            smart_snapping: true,
            color: Color::black(),
            single_arrow: false,
            text_on_line: false,
            show_extensions: true,
            extension_length: 0.0,
            flip_extension: false,
            dashed_extension: false,
            stroke_width: default_stroke_width(),
            head_length: default_head_length(),
            head_width: default_head_width(),
            label_shift: 0.0,
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.anchor, self.tip)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.anchor += delta;
        self.tip += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_smart_snapping_defaults_on() {
        let v = VectorArrow::new(Point::new(0.0, 0.0), Point::new(50.0, -50.0));
        assert!(v.smart_snapping);
        assert_eq!(v.delta(), Vec2::new(50.0, -50.0));
    }

    #[test]
    fn test_vector_deserialize_without_flag_defaults_on() {
        let json = r#"{
            "id": "vec_1",
            "anchor": {"x": 0.0, "y": 0.0},
            "tip": {"x": 10.0, "y": 0.0}
        }"#;
        let v: VectorArrow = serde_json::from_str(json).unwrap();
        assert!(v.smart_snapping);
        assert_eq!(v.stroke_width, 2.0);
    }

    #[test]
    fn test_marker_translate() {
        let mut m = LinearMarker::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0));
        m.translate(Vec2::new(1.0, 2.0));
        assert_eq!(m.anchor, Point::new(1.0, 2.0));
        assert_eq!(m.tip, Point::new(41.0, 2.0));
    }
}
