//! Spring object.

use super::style::Label;
use super::{mint_id, ObjectId};
use crate::geometry::midpoint;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Drawing style for the spring body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringStyle {
    /// Looping coil (helix projection).
    Coil,
    /// Flat zigzag.
    #[default]
    Zigzag,
    /// Torsion spiral wound around the midpoint.
    Spiral,
}

/// A coil/zigzag/spiral spring between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Number of coils or zigzag peaks.
    pub coils: u32,
    /// Coil amplitude perpendicular to the axis.
    pub width: f64,
    #[serde(default)]
    pub style: SpringStyle,
    /// Spiral sweep start in degrees (spiral style only).
    #[serde(default = "default_spiral_start")]
    pub spiral_start: f64,
    /// Spiral sweep end in degrees (spiral style only).
    #[serde(default = "default_spiral_end")]
    pub spiral_end: f64,
    /// Fraction of each end kept as straight lead wire.
    #[serde(default = "default_wire_ratio")]
    pub wire_ratio: f64,
    #[serde(default)]
    pub label: Label,
}

fn default_spiral_start() -> f64 {
    -90.0
}

fn default_spiral_end() -> f64 {
    90.0
}

fn default_wire_ratio() -> f64 {
    0.2
}

impl Spring {
    /// Create a new spring with default styling. Fresh springs carry a
    /// 75..-90 spiral sweep; documents missing the fields fall back to
    /// -90..90.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("spring"),
            start,
            end,
            coils: 10,
            width: 20.0,
            style: SpringStyle::default(),
            spiral_start: 75.0,
            spiral_end: -90.0,
            wire_ratio: default_wire_ratio(),
            label: Label::default(),
        }
    }

    /// Midpoint of the spring axis.
    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_moves_both_endpoints() {
        let mut spring = Spring::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        spring.translate(Vec2::new(5.0, -3.0));
        assert_eq!(spring.start, Point::new(5.0, -3.0));
        assert_eq!(spring.end, Point::new(105.0, -3.0));
    }

    #[test]
    fn test_midpoint() {
        let spring = Spring::new(Point::new(0.0, 0.0), Point::new(100.0, 40.0));
        assert_eq!(spring.midpoint(), Point::new(50.0, 20.0));
    }
}
