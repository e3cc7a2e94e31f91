use super::layout::AxisOffsets;
use crate::math::Point2;

/// Expands column and row offsets into grid points.
///
/// Points are ordered column by column, bottom to top within each column.
#[must_use]
pub fn assemble(offsets: &AxisOffsets) -> Vec<Point2> {
    let mut points = Vec::with_capacity(offsets.point_count());
    for &x in &offsets.xs {
        points.extend(offsets.ys.iter().map(|&y| Point2::new(x, y)));
    }
    points
}
