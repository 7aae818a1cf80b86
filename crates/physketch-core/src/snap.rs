//! Snapping resolver for handle drags.
//!
//! One entry point, [`resolve_snap`], tries the snap sources in priority
//! order: wall/block edge projection, angular alignment against an anchor,
//! fixed reference points, then the grid. The first source that produces a
//! candidate within the threshold wins.

use crate::geometry::{dist_sq_to_segment, perp, project_to_segment, unit_or_zero};
use crate::objects::SceneObject;
use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};

/// Default grid cell size in world units (density 1).
pub const GRID_SIZE: f64 = 50.0;
/// Default snap acceptance distance in world units.
pub const SNAP_THRESHOLD: f64 = 15.0;

/// Edges shorter than this are skipped as reference geometry.
const MIN_EDGE_LEN: f64 = 0.1;
/// Drag vectors shorter than this carry no usable direction for angular
/// snapping.
const MIN_DIRECTION_LEN: f64 = 5.0;
/// Angular snap needs the anchor within 20 units of the edge (squared).
const ANCHOR_RANGE_SQ: f64 = 400.0;
/// Cosine threshold for treating two directions as aligned.
const ALIGN_DOT: f64 = 0.97;

/// What a snapped point aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapKind {
    /// Grid intersection.
    Grid,
    /// Projection onto a wall or block edge.
    Object,
    /// Perpendicular to a reference edge, measured from the drag anchor.
    Normal,
    /// Parallel to a reference edge, measured from the drag anchor.
    Tangent,
    /// Fixed reference point (endpoint or edge midpoint).
    Midpoint,
}

/// A resolved snap candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// The snapped position to use instead of the raw pointer position.
    pub position: Point,
    pub kind: SnapKind,
    /// Reference edge for angular snaps, for drawing an alignment guide.
    pub guide: Option<Line>,
}

impl SnapResult {
    fn at(position: Point, kind: SnapKind) -> Self {
        Self {
            position,
            kind,
            guide: None,
        }
    }
}

/// Snapping configuration. `enabled` is the global toggle; the controller
/// additionally clears it per event while Ctrl/Meta is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    pub grid_size: f64,
    pub threshold: f64,
    pub enabled: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            threshold: SNAP_THRESHOLD,
            enabled: true,
        }
    }
}

impl SnapConfig {
    /// Derive the grid size from a density factor: density 1 is a 50 unit
    /// grid, density 2 a 25 unit grid. Non-positive densities are ignored.
    pub fn with_grid_density(mut self, density: f64) -> Self {
        if density > 0.0 {
            self.grid_size = GRID_SIZE / density;
        }
        self
    }
}

/// Per-drag context for the resolver.
#[derive(Debug, Clone, Copy)]
pub struct SnapContext {
    /// Fixed counterpart point when a vector-like tip is being dragged.
    /// Enables angular snapping.
    pub anchor: Option<Point>,
    /// Smart-snapping flag of the dragged object. When false only fixed
    /// points and the grid attract.
    pub smart: bool,
}

impl Default for SnapContext {
    fn default() -> Self {
        Self {
            anchor: None,
            smart: true,
        }
    }
}

impl SnapContext {
    pub fn with_anchor(anchor: Point) -> Self {
        Self {
            anchor: Some(anchor),
            ..Self::default()
        }
    }
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Resolve the snap for a dragged point. `dragged_id` excludes the object
/// being dragged from the reference set. Returns `None` when nothing within
/// the threshold attracts the point.
pub fn resolve_snap(
    objects: &[SceneObject],
    raw: Point,
    dragged_id: Option<&str>,
    config: &SnapConfig,
    context: &SnapContext,
) -> Option<SnapResult> {
    if !config.enabled {
        return None;
    }

    let mut best: Option<SnapResult> = None;
    let mut best_dist_sq = config.threshold * config.threshold;

    for obj in objects {
        if dragged_id == Some(obj.id()) {
            continue;
        }
        match obj {
            SceneObject::Wall(wall) => {
                if context.smart {
                    let hit = scan_edge(
                        wall.segment(),
                        raw,
                        context,
                        config.threshold,
                        &mut best,
                        &mut best_dist_sq,
                    );
                    if hit.is_some() {
                        return hit;
                    }
                } else {
                    let points = [wall.start, wall.end, wall.midpoint()];
                    scan_fixed_points(&points, raw, &mut best, &mut best_dist_sq);
                }
            }
            SceneObject::Block(block) => {
                if context.smart {
                    for edge in block.edges() {
                        let hit = scan_edge(
                            edge,
                            raw,
                            context,
                            config.threshold,
                            &mut best,
                            &mut best_dist_sq,
                        );
                        if hit.is_some() {
                            return hit;
                        }
                    }
                } else {
                    scan_fixed_points(&block.edge_midpoints(), raw, &mut best, &mut best_dist_sq);
                }
            }
            _ => {}
        }
    }

    if best.is_some() {
        return best;
    }

    let grid_point = snap_to_grid(raw, config.grid_size);
    if (raw - grid_point).hypot() < config.threshold {
        return Some(SnapResult::at(grid_point, SnapKind::Grid));
    }

    None
}

/// Check one reference edge: track the closest on-edge projection in
/// `best`, and return immediately on an angular alignment hit.
fn scan_edge(
    (a, b): (Point, Point),
    raw: Point,
    context: &SnapContext,
    threshold: f64,
    best: &mut Option<SnapResult>,
    best_dist_sq: &mut f64,
) -> Option<SnapResult> {
    let edge_vec = b - a;
    if edge_vec.hypot() < MIN_EDGE_LEN {
        return None;
    }

    let projected = project_to_segment(raw, a, b);
    let dist_sq = (raw - projected).hypot2();
    if dist_sq < *best_dist_sq {
        *best_dist_sq = dist_sq;
        *best = Some(SnapResult::at(projected, SnapKind::Object));
    }

    angular_snap(raw, a, b, context.anchor, threshold)
}

/// Angular snap: when the anchor-to-pointer direction is nearly parallel or
/// perpendicular to the edge, snap it exact while preserving the length.
fn angular_snap(
    raw: Point,
    a: Point,
    b: Point,
    anchor: Option<Point>,
    threshold: f64,
) -> Option<SnapResult> {
    let anchor = anchor?;
    if dist_sq_to_segment(anchor, a, b) >= ANCHOR_RANGE_SQ {
        return None;
    }

    let v = raw - anchor;
    let len = v.hypot();
    if len < MIN_DIRECTION_LEN {
        // Too short to have an angle
        return None;
    }
    let dir = unit_or_zero(b - a);
    let normal = perp(dir);
    let unit_v = v / len;

    for (axis, kind) in [(normal, SnapKind::Normal), (dir, SnapKind::Tangent)] {
        let dot = unit_v.dot(axis);
        if dot.abs() > ALIGN_DOT {
            let snapped = anchor + axis * (len * dot.signum());
            if (raw - snapped).hypot() < threshold {
                return Some(SnapResult {
                    position: snapped,
                    kind,
                    guide: Some(Line::new(a, b)),
                });
            }
        }
    }
    None
}

fn scan_fixed_points(
    points: &[Point],
    raw: Point,
    best: &mut Option<SnapResult>,
    best_dist_sq: &mut f64,
) {
    for &p in points {
        let d = raw - p;
        let dist_sq = d.hypot2();
        if dist_sq < *best_dist_sq {
            *best_dist_sq = dist_sq;
            *best = Some(SnapResult::at(p, SnapKind::Midpoint));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Block, Wall};
    use kurbo::Vec2;

    fn wall_scene(start: Point, end: Point) -> Vec<SceneObject> {
        vec![SceneObject::Wall(Wall::new(start, end))]
    }

    #[test]
    fn test_grid_snap_is_idempotent_on_grid_points() {
        let result = resolve_snap(
            &[],
            Point::new(100.0, 150.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Grid);
        assert_eq!(result.position, Point::new(100.0, 150.0));
    }

    #[test]
    fn test_grid_snap_rejects_distant_points() {
        let result = resolve_snap(
            &[],
            Point::new(23.0, 23.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_grid_snap_accepts_nearby_points() {
        let result = resolve_snap(
            &[],
            Point::new(46.0, 53.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Grid);
        assert_eq!(result.position, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_disabled_config_never_snaps() {
        let config = SnapConfig {
            enabled: false,
            ..SnapConfig::default()
        };
        let result = resolve_snap(
            &[],
            Point::new(100.0, 150.0),
            None,
            &config,
            &SnapContext::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_edge_projection_snap() {
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let result = resolve_snap(
            &scene,
            Point::new(48.0, 6.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Object);
        assert_eq!(result.position, Point::new(48.0, 0.0));
        assert!(result.guide.is_none());
    }

    #[test]
    fn test_edge_snap_beats_grid() {
        // (48, 6) is also within threshold of the (50, 0) grid node.
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let result = resolve_snap(
            &scene,
            Point::new(48.0, 6.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Object);
    }

    #[test]
    fn test_closest_edge_wins() {
        let scene = vec![
            SceneObject::Wall(Wall::new(Point::new(0.0, 10.0), Point::new(100.0, 10.0))),
            SceneObject::Wall(Wall::new(Point::new(0.0, -4.0), Point::new(100.0, -4.0))),
        ];
        let result = resolve_snap(
            &scene,
            Point::new(50.0, 0.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        )
        .unwrap();
        assert_eq!(result.position, Point::new(50.0, -4.0));
    }

    #[test]
    fn test_dragged_wall_never_snaps_to_itself() {
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let id = scene[0].id().to_string();
        let result = resolve_snap(
            &scene,
            Point::new(48.0, 6.0),
            Some(&id),
            &SnapConfig::default(),
            &SnapContext::default(),
        );
        // Only the grid remains, and (48, 6) rounds to (50, 0) within range.
        let result = result.unwrap();
        assert_eq!(result.kind, SnapKind::Grid);
        assert_eq!(result.position, Point::new(50.0, 0.0));
    }

    #[test]
    fn test_perpendicular_snap_is_exact() {
        // Vertical wall; anchor sits 5 units off the wall; the drag points
        // almost along the wall normal.
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        let anchor = Point::new(5.0, 50.0);
        let raw = Point::new(-35.0, 52.0);
        let result = resolve_snap(
            &scene,
            raw,
            None,
            &SnapConfig::default(),
            &SnapContext::with_anchor(anchor),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Normal);
        // Exactly perpendicular: same y as the anchor, length preserved.
        assert_eq!(result.position.y, 50.0);
        let len = (raw - anchor).hypot();
        assert!(((result.position - anchor).hypot() - len).abs() < 1e-12);
        let guide = result.guide.unwrap();
        assert_eq!(guide.p0, Point::new(0.0, 0.0));
        assert_eq!(guide.p1, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_parallel_snap_reports_tangent() {
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        let anchor = Point::new(5.0, 50.0);
        // Nearly straight up, parallel to the wall.
        let raw = Point::new(6.0, 90.0);
        let result = resolve_snap(
            &scene,
            raw,
            None,
            &SnapConfig::default(),
            &SnapContext::with_anchor(anchor),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Tangent);
        assert_eq!(result.position.x, 5.0);
    }

    #[test]
    fn test_angular_snap_needs_minimum_length() {
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        let anchor = Point::new(5.0, 50.0);
        let raw = Point::new(2.0, 50.0);
        let result = resolve_snap(
            &scene,
            raw,
            None,
            &SnapConfig::default(),
            &SnapContext::with_anchor(anchor),
        );
        // Falls through to the edge projection instead.
        let result = result.unwrap();
        assert_eq!(result.kind, SnapKind::Object);
    }

    #[test]
    fn test_angular_snap_needs_anchor_near_edge() {
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        // Anchor well clear of the wall, outside the 20 unit range. The
        // drag direction would otherwise align with the wall normal.
        let anchor = Point::new(30.0, 170.0);
        let raw = Point::new(-10.0, 172.0);
        let result = resolve_snap(
            &scene,
            raw,
            None,
            &SnapConfig::default(),
            &SnapContext::with_anchor(anchor),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_non_smart_wall_attracts_fixed_points() {
        let scene = wall_scene(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let context = SnapContext {
            smart: false,
            ..SnapContext::default()
        };
        let result = resolve_snap(
            &scene,
            Point::new(96.0, 4.0),
            None,
            &SnapConfig::default(),
            &context,
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Midpoint);
        assert_eq!(result.position, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_block_edge_projection() {
        let scene = vec![SceneObject::Block(Block::new(
            Point::new(0.0, 0.0),
            Vec2::new(40.0, 40.0),
        ))];
        let result = resolve_snap(
            &scene,
            Point::new(26.0, 5.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Object);
        assert_eq!(result.position, Point::new(20.0, 5.0));
    }

    #[test]
    fn test_non_smart_block_attracts_edge_midpoints() {
        let scene = vec![SceneObject::Block(Block::new(
            Point::new(0.0, 0.0),
            Vec2::new(40.0, 40.0),
        ))];
        let context = SnapContext {
            smart: false,
            ..SnapContext::default()
        };
        let result = resolve_snap(
            &scene,
            Point::new(24.0, 3.0),
            None,
            &SnapConfig::default(),
            &context,
        )
        .unwrap();
        assert_eq!(result.kind, SnapKind::Midpoint);
        assert_eq!(result.position, Point::new(20.0, 0.0));
    }

    #[test]
    fn test_degenerate_wall_is_skipped() {
        let scene = wall_scene(Point::new(30.0, 30.0), Point::new(30.0, 30.0));
        let result = resolve_snap(
            &scene,
            Point::new(31.0, 31.0),
            None,
            &SnapConfig::default(),
            &SnapContext::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_grid_density_scales_cell_size() {
        let config = SnapConfig::default().with_grid_density(2.0);
        assert_eq!(config.grid_size, 25.0);
        let config = config.with_grid_density(0.0);
        assert_eq!(config.grid_size, 25.0);
    }
}
