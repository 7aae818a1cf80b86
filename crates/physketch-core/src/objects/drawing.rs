//! Plain drawing primitives: lines, catenaries, triangles, circles, text.

use super::style::{Color, FontStyle};
use super::{mint_id, ObjectId, UNIT};
use crate::geometry::midpoint;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A straight decoration line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub color: Color,
    /// Stroke width.
    pub width: f64,
    #[serde(default)]
    pub dashed: bool,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("line"),
            start,
            end,
            color: Color::black(),
            width: 2.0,
            dashed: false,
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

/// A slack rope hanging between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catenary {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// How far the rope sags below the chord.
    pub slack: f64,
    #[serde(default = "default_rope_color")]
    pub color: Color,
}

fn default_rope_color() -> Color {
    Color::gray()
}

impl Catenary {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("cat"),
            start,
            end,
            slack: 40.0,
            color: Color::gray(),
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

/// A triangle given by its three vertices (inclines, wedges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub id: ObjectId,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            id: mint_id("tri"),
            p1,
            p2,
            p3,
        }
    }

    /// Default incline centered at `at`: 30 units wide, 20 units tall.
    pub fn incline(at: Point) -> Self {
        let half_base = 30.0 * UNIT / 2.0;
        let height = 20.0 * UNIT;
        Self::new(
            Point::new(at.x, at.y - height / 2.0),
            Point::new(at.x - half_base, at.y + height / 2.0),
            Point::new(at.x + half_base, at.y + height / 2.0),
        )
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.p1 += delta;
        self.p2 += delta;
        self.p3 += delta;
    }
}

/// A plain circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: ObjectId,
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Smallest permitted radius.
    pub const MIN_RADIUS: f64 = 1.0;

    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: mint_id("circ"),
            center,
            radius,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// Free-standing text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub id: ObjectId,
    pub center: Point,
    pub content: String,
    #[serde(default)]
    pub font: FontStyle,
    /// Rotation in radians.
    #[serde(default)]
    pub rotation: f64,
}

impl Text {
    pub fn new(center: Point, content: impl Into<String>) -> Self {
        Self {
            id: mint_id("txt"),
            center,
            content: content.into(),
            font: FontStyle::sized(24.0),
            rotation: 0.0,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incline_is_isosceles() {
        let tri = Triangle::incline(Point::new(0.0, 0.0));
        assert_eq!(tri.p1, Point::new(0.0, -62.5));
        assert_eq!(tri.p2, Point::new(-93.75, 62.5));
        assert_eq!(tri.p3, Point::new(93.75, 62.5));
    }

    #[test]
    fn test_triangle_translate_moves_all_vertices() {
        let mut tri = Triangle::incline(Point::new(0.0, 0.0));
        tri.translate(Vec2::new(10.0, 0.0));
        assert_eq!(tri.p1, Point::new(10.0, -62.5));
        assert_eq!(tri.p2, Point::new(-83.75, 62.5));
    }

    #[test]
    fn test_catenary_defaults() {
        let rope = Catenary::new(Point::new(-60.0, 0.0), Point::new(60.0, 0.0));
        assert_eq!(rope.slack, 40.0);
        assert_eq!(rope.color, Color::gray());
    }
}
