//! Shared geometry helpers for handles and snapping.

use kurbo::{Point, Vec2};

/// Direction of a vector, or the zero vector when the input is too short to
/// carry a direction. Never produces NaN.
pub fn unit_or_zero(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len < 1e-12 { Vec2::ZERO } else { v / len }
}

/// Counter-clockwise perpendicular.
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotate a vector by an angle in radians.
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let cos_a = angle.cos();
    let sin_a = angle.sin();
    Vec2::new(v.x * cos_a - v.y * sin_a, v.x * sin_a + v.y * cos_a)
}

/// Rotate a point around a pivot by an angle in radians.
pub fn rotate_about(p: Point, pivot: Point, angle: f64) -> Point {
    pivot + rotate(p - pivot, angle)
}

/// Midpoint of two points.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Closest point to `p` on the closed segment `a`-`b`.
pub fn project_to_segment(p: Point, a: Point, b: Point) -> Point {
    let seg = b - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        // Segment is a point
        return a;
    }
    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    a + seg * t
}

/// Squared distance from `p` to the closed segment `a`-`b`.
pub fn dist_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let nearest = project_to_segment(p, a, b);
    let dx = p.x - nearest.x;
    let dy = p.y - nearest.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_or_zero_regular() {
        let u = unit_or_zero(Vec2::new(3.0, 4.0));
        assert!((u.hypot() - 1.0).abs() < 1e-12);
        assert!((u.x - 0.6).abs() < 1e-12);
        assert!((u.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_unit_or_zero_zero_vector() {
        let u = unit_or_zero(Vec2::ZERO);
        assert_eq!(u, Vec2::ZERO);
        assert!(!u.x.is_nan() && !u.y.is_nan());
    }

    #[test]
    fn test_perp_is_ccw() {
        let p = perp(Vec2::new(1.0, 0.0));
        assert_eq!(p, Vec2::new(0.0, 1.0));
        assert!((p.dot(Vec2::new(1.0, 0.0))).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(Vec2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!((r.x - 0.0).abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_about_pivot() {
        let p = rotate_about(
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            std::f64::consts::PI,
        );
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_project_to_segment_interior() {
        let p = project_to_segment(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(p, Point::new(5.0, 0.0));
    }

    #[test]
    fn test_project_to_segment_clamps_to_ends() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(project_to_segment(Point::new(-4.0, 2.0), a, b), a);
        assert_eq!(project_to_segment(Point::new(14.0, 2.0), a, b), b);
    }

    #[test]
    fn test_project_to_segment_degenerate() {
        let a = Point::new(3.0, 3.0);
        assert_eq!(project_to_segment(Point::new(9.0, 9.0), a, a), a);
    }

    #[test]
    fn test_dist_sq_to_segment() {
        let d = dist_sq_to_segment(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 9.0).abs() < 1e-12);
    }
}
