//! Block object: a rotatable rectangular mass.

use super::style::FontStyle;
use super::{mint_id, ObjectId, UNIT};
use crate::geometry::rotate;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A rectangular mass, centered, with free rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: ObjectId,
    pub center: Point,
    /// Full width/height extents.
    pub size: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Mass annotation drawn at the center ("M", "m1", ...).
    pub mass_label: String,
    #[serde(default)]
    pub font: FontStyle,
}

impl Block {
    /// Smallest permitted side length.
    pub const MIN_SIDE: f64 = 2.0 * UNIT;

    pub fn new(center: Point, size: Vec2) -> Self {
        Self {
            id: mint_id("block"),
            center,
            size,
            rotation: 0.0,
            mass_label: "M".to_string(),
            font: FontStyle::default(),
        }
    }

    /// Map a point from the block's local frame (origin at center, unrotated)
    /// into world space.
    pub fn local_to_world(&self, local: Vec2) -> Point {
        self.center + rotate(local, self.rotation)
    }

    /// The four corners in world space, clockwise from top-left.
    pub fn corners(&self) -> [Point; 4] {
        let hw = self.size.x / 2.0;
        let hh = self.size.y / 2.0;
        [
            self.local_to_world(Vec2::new(-hw, -hh)),
            self.local_to_world(Vec2::new(hw, -hh)),
            self.local_to_world(Vec2::new(hw, hh)),
            self.local_to_world(Vec2::new(-hw, hh)),
        ]
    }

    /// The four edge segments in world space.
    pub fn edges(&self) -> [(Point, Point); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Edge midpoints in world space: top, bottom, left, right.
    pub fn edge_midpoints(&self) -> [Point; 4] {
        let hw = self.size.x / 2.0;
        let hh = self.size.y / 2.0;
        [
            self.local_to_world(Vec2::new(0.0, -hh)),
            self.local_to_world(Vec2::new(0.0, hh)),
            self.local_to_world(Vec2::new(-hw, 0.0)),
            self.local_to_world(Vec2::new(hw, 0.0)),
        ]
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_unrotated() {
        let block = Block::new(Point::new(10.0, 10.0), Vec2::new(20.0, 40.0));
        let c = block.corners();
        assert_eq!(c[0], Point::new(0.0, -10.0));
        assert_eq!(c[2], Point::new(20.0, 30.0));
    }

    #[test]
    fn test_edge_midpoints_rotated() {
        let mut block = Block::new(Point::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        block.rotation = std::f64::consts::FRAC_PI_2;
        let mids = block.edge_midpoints();
        // Top midpoint (0, -10) rotates onto the +x axis.
        assert!((mids[0].x - 10.0).abs() < 1e-9);
        assert!(mids[0].y.abs() < 1e-9);
    }

    #[test]
    fn test_min_side_matches_two_units() {
        assert_eq!(Block::MIN_SIDE, 12.5);
    }
}
