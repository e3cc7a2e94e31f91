use super::Point2;
use crate::geometry::Bounds;

/// Distances from `p` to the left, right, bottom and top edges of `bounds`.
///
/// Values are negative when the point lies outside the corresponding edge.
#[must_use]
pub fn edge_distances(p: &Point2, bounds: &Bounds) -> [f64; 4] {
    [
        p.x - bounds.xmin,
        bounds.xmax - p.x,
        p.y - bounds.ymin,
        bounds.ymax - p.y,
    ]
}

/// Returns the distance from `p` to the nearest of the four edges of `bounds`.
#[must_use]
pub fn wall_clearance(p: &Point2, bounds: &Bounds) -> f64 {
    edge_distances(p, bounds)
        .into_iter()
        .fold(f64::INFINITY, f64::min)
}
