//! Wall object: a hatched surface segment. Walls are the main reference
//! geometry for smart snapping.

use super::{mint_id, ObjectId};
use crate::geometry::midpoint;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A straight wall with hatching on one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    /// Hatch stroke angle relative to the wall, in degrees.
    pub hatch_angle: f64,
}

impl Wall {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: mint_id("wall"),
            start,
            end,
            hatch_angle: 45.0,
        }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    /// The wall surface as a segment.
    pub fn segment(&self) -> (Point, Point) {
        (self.start, self.end)
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
    fn test_new_wall_defaults() {
        let wall = Wall::new(Point::new(-100.0, 100.0), Point::new(100.0, 100.0));
        assert_eq!(wall.hatch_angle, 45.0);
        assert_eq!(wall.midpoint(), Point::new(0.0, 100.0));
    }
}
