use crate::geometry::Bounds;
use crate::math::distance_2d::wall_clearance;
use crate::math::{round_to, Point2};
use crate::result::GridDetails;

/// Decimal places used for every summary statistic.
pub const STATS_PRECISION: u32 = 2;

/// Summarizes a generated grid.
///
/// The boundary distance of a point is its distance to the nearest of the
/// four edges; the reported value is the mean over all points, computed at
/// full precision and then rounded. `avg_point_distance` echoes the
/// requested spacing. Both averages are `0` for an empty grid.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_details(points: &[Point2], bounds: &Bounds, spacing: f64) -> GridDetails {
    let num_points = points.len();
    let (avg_point_distance, avg_boundary_distance) = if num_points == 0 {
        (0.0, 0.0)
    } else {
        let total: f64 = points.iter().map(|p| wall_clearance(p, bounds)).sum();
        (spacing, total / num_points as f64)
    };

    GridDetails {
        spacing: round_to(spacing, STATS_PRECISION),
        num_points,
        avg_point_distance: round_to(avg_point_distance, STATS_PRECISION),
        avg_boundary_distance: round_to(avg_boundary_distance, STATS_PRECISION),
    }
}
