//! Pulley object: a wheel with an optional hanger strap. Purely visual, no
//! rope logic.

use super::{mint_id, ObjectId, UNIT};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pulley {
    pub id: ObjectId,
    pub center: Point,
    pub radius: f64,
    /// Draw the mounting strap.
    #[serde(default = "super::default_true")]
    pub has_hanger: bool,
    /// Strap length beyond the rim.
    #[serde(default = "default_hanger_length")]
    pub hanger_length: f64,
    /// Strap direction in radians (0 points up).
    #[serde(default)]
    pub hanger_angle: f64,
}

fn default_hanger_length() -> f64 {
    10.0 * UNIT
}

impl Pulley {
    pub fn new(center: Point) -> Self {
        Self {
            id: mint_id("pulley"),
            center,
            radius: 8.0 * UNIT,
            has_hanger: true,
            hanger_length: default_hanger_length(),
            hanger_angle: 0.0,
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
    fn test_new_pulley_defaults() {
        let pulley = Pulley::new(Point::new(0.0, 0.0));
        assert_eq!(pulley.radius, 50.0);
        assert_eq!(pulley.hanger_length, 62.5);
        assert!(pulley.has_hanger);
    }
}
