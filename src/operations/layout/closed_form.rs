use tracing::debug;

use super::{check_parameters, check_point_limit, count_along, AxisOffsets, GridParams};
use crate::error::{Axis, Result};
use crate::geometry::Bounds;

/// Lays out a grid centered inside the wall-offset margin.
///
/// Row and column counts are `floor(usable / spacing) + 1`, where the usable
/// extent is the rectangle extent minus `2 × wall_offset`. Leftover space is
/// split evenly on both sides, so the first and last offset on each axis lie
/// on or inside the margin.
#[derive(Debug)]
pub struct ClosedFormLayout {
    bounds: Bounds,
    spacing: f64,
    wall_offset: f64,
    max_points: usize,
}

impl ClosedFormLayout {
    /// Creates a new closed-form layout.
    #[must_use]
    pub fn new(bounds: Bounds, spacing: f64, wall_offset: f64) -> Self {
        Self {
            bounds,
            spacing,
            wall_offset,
            max_points: GridParams::default().max_points,
        }
    }

    /// Sets the maximum number of points the layout may produce.
    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` for non-positive spacing or a
    ///   negative wall offset
    /// - `GeometryError::UsableExtentNegative` if the wall offset leaves no
    ///   usable width or height
    /// - `LayoutError::TooManyPoints` if the grid exceeds the point limit
    pub fn execute(&self) -> Result<AxisOffsets> {
        check_parameters(self.spacing, self.wall_offset)?;

        let xs = self.axis_offsets(Axis::X)?;
        let ys = self.axis_offsets(Axis::Y)?;
        check_point_limit(xs.len(), ys.len(), self.max_points)?;

        debug!(
            cols = xs.len(),
            rows = ys.len(),
            x_start = xs.first().copied(),
            y_start = ys.first().copied(),
            "closed-form layout"
        );
        Ok(AxisOffsets { xs, ys })
    }

    #[allow(clippy::cast_precision_loss)]
    fn axis_offsets(&self, axis: Axis) -> Result<Vec<f64>> {
        let usable = self.bounds.usable_extent(axis, self.wall_offset)?;
        let count = count_along(usable, self.spacing, self.max_points)?;

        let span = (count - 1) as f64 * self.spacing;
        let lower = match axis {
            Axis::X => self.bounds.xmin,
            Axis::Y => self.bounds.ymin,
        };
        let start = lower + self.wall_offset + (usable - span) / 2.0;

        Ok((0..count)
            .map(|i| start + i as f64 * self.spacing)
            .collect())
    }
}
