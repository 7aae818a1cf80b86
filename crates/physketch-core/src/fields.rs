//! Single-field property writes, the editing path behind a properties
//! panel.
//!
//! [`SceneObject::set_field`] is string-keyed on purpose: panels are built
//! from per-kind field lists and write back without a per-kind API. Unknown
//! fields and type mismatches are rejected, never panics.

use crate::objects::{
    AcSource, Block, Circle, Color, HeadStyle, Label, LineStyle, SceneObject, SpringStyle,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A dynamically typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
    Color(Color),
    Point(Point),
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<Color> for PropertyValue {
    fn from(v: Color) -> Self {
        PropertyValue::Color(v)
    }
}

impl From<Point> for PropertyValue {
    fn from(v: Point) -> Self {
        PropertyValue::Point(v)
    }
}

impl SceneObject {
    /// The object's label, for kinds that carry one.
    pub fn label_mut(&mut self) -> Option<&mut Label> {
        match self {
            SceneObject::Spring(o) => Some(&mut o.label),
            SceneObject::Vector(o) => Some(&mut o.label),
            SceneObject::LinearMarker(o) => Some(&mut o.label),
            SceneObject::Wire(o) => Some(&mut o.label),
            SceneObject::DcSource(o) => Some(&mut o.label),
            SceneObject::AcSource(o) => Some(&mut o.label),
            SceneObject::Resistor(o) => Some(&mut o.label),
            SceneObject::Inductor(o) => Some(&mut o.label),
            SceneObject::Capacitor(o) => Some(&mut o.label),
            SceneObject::Diode(o) => Some(&mut o.label),
            SceneObject::Switch(o) => Some(&mut o.label),
            _ => None,
        }
    }

    /// Write one named field. Returns false (and leaves the object alone)
    /// for unknown fields, wrong value types, and kinds that lack the
    /// field. Numeric writes clamp to the same minima the handle mutation
    /// enforces.
    pub fn set_field(&mut self, field: &str, value: &PropertyValue) -> bool {
        // Label text and flip are shared by every labelled kind.
        if let Some(label) = self.label_mut() {
            match (field, value) {
                ("label", PropertyValue::Text(v)) => {
                    label.text = v.clone();
                    return true;
                }
                ("label_flipped", PropertyValue::Bool(v)) => {
                    label.flipped = *v;
                    return true;
                }
                _ => {}
            }
        }

        match self {
            SceneObject::Spring(o) => match (field, value) {
                ("coils", PropertyValue::Int(v)) => o.coils = (*v).max(1) as u32,
                ("width", PropertyValue::Float(v)) => o.width = *v,
                ("style", PropertyValue::Text(v)) => match v.as_str() {
                    "coil" => o.style = SpringStyle::Coil,
                    "zigzag" => o.style = SpringStyle::Zigzag,
                    "spiral" => o.style = SpringStyle::Spiral,
                    _ => return false,
                },
                ("spiral_start", PropertyValue::Float(v)) => o.spiral_start = *v,
                ("spiral_end", PropertyValue::Float(v)) => o.spiral_end = *v,
                ("wire_ratio", PropertyValue::Float(v)) => o.wire_ratio = *v,
                _ => return false,
            },
            SceneObject::Wall(o) => match (field, value) {
                ("hatch_angle", PropertyValue::Float(v)) => o.hatch_angle = *v,
                _ => return false,
            },
            SceneObject::Block(o) => match (field, value) {
                ("width", PropertyValue::Float(v)) => o.size.x = v.max(Block::MIN_SIDE),
                ("height", PropertyValue::Float(v)) => o.size.y = v.max(Block::MIN_SIDE),
                ("rotation", PropertyValue::Float(v)) => o.rotation = *v,
                ("mass_label", PropertyValue::Text(v)) => o.mass_label = v.clone(),
                ("font_size", PropertyValue::Float(v)) => o.font.size = *v,
                ("center", PropertyValue::Point(v)) => o.center = *v,
                _ => return false,
            },
            SceneObject::Pulley(o) => match (field, value) {
                ("radius", PropertyValue::Float(v)) => o.radius = v.max(1.0),
                ("has_hanger", PropertyValue::Bool(v)) => o.has_hanger = *v,
                ("hanger_length", PropertyValue::Float(v)) => o.hanger_length = v.max(0.0),
                ("hanger_angle", PropertyValue::Float(v)) => o.hanger_angle = *v,
                ("center", PropertyValue::Point(v)) => o.center = *v,
                _ => return false,
            },
            SceneObject::Vector(o) => match (field, value) {
                ("show_components", PropertyValue::Bool(v)) => o.show_components = *v,
                ("smart_snapping", PropertyValue::Bool(v)) => o.smart_snapping = *v,
                ("color", PropertyValue::Color(v)) => o.color = *v,
                ("line_style", PropertyValue::Text(v)) => match v.as_str() {
                    "solid" => o.line_style = LineStyle::Solid,
                    "dashed" => o.line_style = LineStyle::Dashed,
                    _ => return false,
                },
                ("head_style", PropertyValue::Text(v)) => match v.as_str() {
                    "filled" => o.head_style = HeadStyle::Filled,
                    "hollow" => o.head_style = HeadStyle::Hollow,
                    "simple" => o.head_style = HeadStyle::Simple,
                    _ => return false,
                },
                ("stroke_width", PropertyValue::Float(v)) => o.stroke_width = *v,
                ("head_length", PropertyValue::Float(v)) => o.head_length = *v,
                ("head_width", PropertyValue::Float(v)) => o.head_width = *v,
                _ => return false,
            },
            SceneObject::LinearMarker(o) => match (field, value) {
                ("smart_snapping", PropertyValue::Bool(v)) => o.smart_snapping = *v,
                ("color", PropertyValue::Color(v)) => o.color = *v,
                ("single_arrow", PropertyValue::Bool(v)) => o.single_arrow = *v,
                ("text_on_line", PropertyValue::Bool(v)) => o.text_on_line = *v,
                ("show_extensions", PropertyValue::Bool(v)) => o.show_extensions = *v,
                ("extension_length", PropertyValue::Float(v)) => o.extension_length = *v,
                ("flip_extension", PropertyValue::Bool(v)) => o.flip_extension = *v,
                ("dashed_extension", PropertyValue::Bool(v)) => o.dashed_extension = *v,
                ("stroke_width", PropertyValue::Float(v)) => o.stroke_width = *v,
                ("head_length", PropertyValue::Float(v)) => o.head_length = *v,
                ("head_width", PropertyValue::Float(v)) => o.head_width = *v,
                ("label_shift", PropertyValue::Float(v)) => o.label_shift = *v,
                _ => return false,
            },
            SceneObject::Line(o) => match (field, value) {
                ("color", PropertyValue::Color(v)) => o.color = *v,
                ("width", PropertyValue::Float(v)) => o.width = *v,
                ("dashed", PropertyValue::Bool(v)) => o.dashed = *v,
                _ => return false,
            },
            SceneObject::Catenary(o) => match (field, value) {
                ("slack", PropertyValue::Float(v)) => o.slack = v.max(0.0),
                ("color", PropertyValue::Color(v)) => o.color = *v,
                _ => return false,
            },
            SceneObject::Triangle(o) => match (field, value) {
                ("p1", PropertyValue::Point(v)) => o.p1 = *v,
                ("p2", PropertyValue::Point(v)) => o.p2 = *v,
                ("p3", PropertyValue::Point(v)) => o.p3 = *v,
                _ => return false,
            },
            SceneObject::Circle(o) => match (field, value) {
                ("radius", PropertyValue::Float(v)) => o.radius = v.max(Circle::MIN_RADIUS),
                ("center", PropertyValue::Point(v)) => o.center = *v,
                _ => return false,
            },
            SceneObject::Text(o) => match (field, value) {
                ("content", PropertyValue::Text(v)) => o.content = v.clone(),
                ("rotation", PropertyValue::Float(v)) => o.rotation = *v,
                ("font_size", PropertyValue::Float(v)) => o.font.size = *v,
                ("bold", PropertyValue::Bool(v)) => o.font.bold = *v,
                ("italic", PropertyValue::Bool(v)) => o.font.italic = *v,
                ("center", PropertyValue::Point(v)) => o.center = *v,
                _ => return false,
            },
            SceneObject::Wire(o) => match (field, value) {
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                ("show_arrow", PropertyValue::Bool(v)) => o.show_arrow = *v,
                ("flip_arrow", PropertyValue::Bool(v)) => o.flip_arrow = *v,
                _ => return false,
            },
            SceneObject::DcSource(o) => match (field, value) {
                ("cells", PropertyValue::Int(v)) => o.cells = (*v).max(1) as u32,
                ("width", PropertyValue::Float(v)) => o.width = *v,
                ("spacing", PropertyValue::Float(v)) => o.spacing = *v,
                ("show_polarity", PropertyValue::Bool(v)) => o.show_polarity = *v,
                ("flip_polarity", PropertyValue::Bool(v)) => o.flip_polarity = *v,
                ("show_terminals", PropertyValue::Bool(v)) => o.show_terminals = *v,
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                _ => return false,
            },
            SceneObject::AcSource(o) => match (field, value) {
                ("radius", PropertyValue::Float(v)) => o.radius = v.max(AcSource::MIN_RADIUS),
                ("center", PropertyValue::Point(v)) => o.center = *v,
                _ => return false,
            },
            SceneObject::Resistor(o) => match (field, value) {
                ("width", PropertyValue::Float(v)) => o.width = *v,
                ("coils", PropertyValue::Int(v)) => o.coils = (*v).max(1) as u32,
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                _ => return false,
            },
            SceneObject::Inductor(o) => match (field, value) {
                ("width", PropertyValue::Float(v)) => o.width = *v,
                ("coils", PropertyValue::Int(v)) => o.coils = (*v).max(1) as u32,
                ("wire_ratio", PropertyValue::Float(v)) => o.wire_ratio = *v,
                ("spiral_start", PropertyValue::Float(v)) => o.spiral_start = *v,
                ("spiral_end", PropertyValue::Float(v)) => o.spiral_end = *v,
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                _ => return false,
            },
            SceneObject::Capacitor(o) => match (field, value) {
                ("width", PropertyValue::Float(v)) => o.width = *v,
                ("separation", PropertyValue::Float(v)) => o.separation = *v,
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                _ => return false,
            },
            SceneObject::Diode(o) => match (field, value) {
                ("scale", PropertyValue::Float(v)) => o.scale = *v,
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                _ => return false,
            },
            SceneObject::Switch(o) => match (field, value) {
                ("open", PropertyValue::Bool(v)) => o.open = *v,
                ("blade_angle", PropertyValue::Float(v)) => o.blade_angle = *v,
                ("start_dot", PropertyValue::Bool(v)) => o.start_dot = *v,
                ("end_dot", PropertyValue::Bool(v)) => o.end_dot = *v,
                _ => return false,
            },
        }
        true
    }
}
