use tracing::{debug, trace, warn};

use super::{check_parameters, check_point_limit, count_along, AxisOffsets, GridParams};
use crate::error::{Axis, GeometryError, LayoutError, Result};
use crate::geometry::Bounds;
use crate::math::distance_2d::wall_clearance;
use crate::math::{Point2, BOUNDARY_TOLERANCE};

/// Hard cap on column search attempts, independent of the zy step.
const MAX_SEARCH_ATTEMPTS: usize = 100_000;

/// Lays out a grid anchored at the lower-left corner of the wall-offset
/// margin.
///
/// # Algorithm
///
/// 1. Fix the first column at `x = xmin + wall_offset`.
/// 2. Starting at `y = ymin + wall_offset + zy` with `zy = 0`, stack points
///    `spacing` apart until the next one would pass `ymax - wall_offset`.
///    If any point violates the clearance the column is discarded and `zy`
///    grows by `zy_step`. The number of attempts is bounded by the usable
///    height divided by `zy_step`.
/// 3. Replicate the accepted column every `spacing` to the right while the
///    column clears the right wall. A column landing exactly on the margin
///    (within [`BOUNDARY_TOLERANCE`]) is included and ends the sweep.
///
/// The result is not centered; leftover space accumulates at the top and
/// right.
///
/// Once the usable width and height are known to be positive, the first
/// column built at `zy = 0` lies within `[ymin + wall_offset, ymax -
/// wall_offset]` up to [`BOUNDARY_TOLERANCE`], so it is accepted on the first
/// attempt. `LayoutError::NoFeasibleLayout` therefore only surfaces when the
/// attempt budget is exhausted before any column is tried.
#[derive(Debug)]
pub struct FeasibilitySearch {
    bounds: Bounds,
    spacing: f64,
    wall_offset: f64,
    zy_step: f64,
    max_points: usize,
}

impl FeasibilitySearch {
    /// Creates a new search layout with the default zy step.
    #[must_use]
    pub fn new(bounds: Bounds, spacing: f64, wall_offset: f64) -> Self {
        let defaults = GridParams::default();
        Self {
            bounds,
            spacing,
            wall_offset,
            zy_step: defaults.zy_step,
            max_points: defaults.max_points,
        }
    }

    /// Sets the vertical nudge applied between attempts.
    #[must_use]
    pub fn with_zy_step(mut self, zy_step: f64) -> Self {
        self.zy_step = zy_step;
        self
    }

    /// Sets the maximum number of points the layout may produce.
    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` for non-positive spacing or zy
    ///   step, or a negative wall offset
    /// - `GeometryError::UsableExtentNegative` if the wall offset leaves no
    ///   usable width or height
    /// - `LayoutError::NoFeasibleLayout` if no column passes within the
    ///   attempt budget
    /// - `LayoutError::TooManyPoints` if the grid exceeds the point limit
    pub fn execute(&self) -> Result<AxisOffsets> {
        check_parameters(self.spacing, self.wall_offset)?;
        if !self.zy_step.is_finite() || self.zy_step <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "zy_step",
                value: self.zy_step,
            }
            .into());
        }

        let usable_width = self.bounds.usable_extent(Axis::X, self.wall_offset)?;
        let usable_height = self.bounds.usable_extent(Axis::Y, self.wall_offset)?;
        let max_cols = count_along(usable_width, self.spacing, self.max_points)?;
        let max_rows = count_along(usable_height, self.spacing, self.max_points)?;
        check_point_limit(max_cols, max_rows, self.max_points)?;

        let attempts = count_along(usable_height, self.zy_step, MAX_SEARCH_ATTEMPTS)
            .unwrap_or(MAX_SEARCH_ATTEMPTS);

        let x_start = self.bounds.xmin + self.wall_offset;
        let ys = self.search_column(x_start, attempts)?;
        let xs = self.replicate_columns(x_start);
        check_point_limit(xs.len(), ys.len(), self.max_points)?;

        debug!(
            cols = xs.len(),
            rows = ys.len(),
            x_start,
            y_start = ys.first().copied(),
            "search layout"
        );
        Ok(AxisOffsets { xs, ys })
    }

    /// Finds the first nudge whose column clears every wall.
    #[allow(clippy::cast_precision_loss)]
    fn search_column(&self, x: f64, attempts: usize) -> Result<Vec<f64>> {
        let y_low = self.bounds.ymin + self.wall_offset;
        let y_high = self.bounds.ymax - self.wall_offset;

        let mut made = 0;
        for attempt in 0..attempts {
            let zy = attempt as f64 * self.zy_step;
            let y0 = y_low + zy;
            // Nudges only move the column up, so nothing later can fit.
            if y0 > y_high + BOUNDARY_TOLERANCE {
                break;
            }
            made += 1;

            match self.build_column(x, y0, y_high) {
                Some(ys) => {
                    if attempt > 0 {
                        warn!(attempt, zy, "column accepted after retries");
                    }
                    return Ok(ys);
                }
                None => trace!(attempt, zy, "column rejected"),
            }
        }

        Err(LayoutError::NoFeasibleLayout {
            spacing: self.spacing,
            wall_offset: self.wall_offset,
            zy_step: self.zy_step,
            attempts: made,
        }
        .into())
    }

    /// Stacks points upward from `y0`; `None` if any point violates the
    /// clearance.
    #[allow(clippy::cast_precision_loss)]
    fn build_column(&self, x: f64, y0: f64, y_high: f64) -> Option<Vec<f64>> {
        let min_clearance = self.wall_offset - BOUNDARY_TOLERANCE;
        let mut ys = Vec::new();
        let mut k = 0_usize;
        loop {
            let y = y0 + k as f64 * self.spacing;
            if wall_clearance(&Point2::new(x, y), &self.bounds) < min_clearance {
                return None;
            }
            ys.push(y);

            k += 1;
            if y0 + k as f64 * self.spacing > y_high + BOUNDARY_TOLERANCE {
                return Some(ys);
            }
        }
    }

    /// Column x-offsets from `x_start` rightwards.
    #[allow(clippy::cast_precision_loss)]
    fn replicate_columns(&self, x_start: f64) -> Vec<f64> {
        let mut xs = Vec::new();
        let mut i = 0_usize;
        loop {
            let x = x_start + i as f64 * self.spacing;
            let d_right = self.bounds.xmax - x;
            if d_right < self.wall_offset - BOUNDARY_TOLERANCE {
                break;
            }
            xs.push(x);
            if (d_right - self.wall_offset).abs() < BOUNDARY_TOLERANCE {
                break;
            }
            i += 1;
        }
        xs
    }
}
