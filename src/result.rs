use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Rectangle;
use crate::math::{round_to, Point2};

/// Summary statistics of a generated grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDetails {
    /// Requested spacing, rounded to two decimals.
    pub spacing: f64,
    /// Number of points in the grid.
    pub num_points: usize,
    /// Always the requested spacing (rounded), not a measured distance.
    pub avg_point_distance: f64,
    /// Mean distance from each point to its nearest edge, rounded to two decimals.
    pub avg_boundary_distance: f64,
}

/// A generated grid together with its input rectangle and statistics.
///
/// Serializes as `{"Rectangle": [[x, y]; 4], "Grid": [[x, y], ...], "Details": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridResult {
    /// Input corners, echoed unchanged.
    #[serde(rename = "Rectangle")]
    pub rectangle: [[f64; 2]; 4],
    /// Grid points rounded to the display precision, column by column.
    #[serde(rename = "Grid")]
    pub grid: Vec<[f64; 2]>,
    #[serde(rename = "Details")]
    pub details: GridDetails,
}

impl GridResult {
    /// Packages full-precision `points` for output, rounding each coordinate
    /// to `precision` decimals.
    #[must_use]
    pub fn new(
        rectangle: &Rectangle,
        points: &[Point2],
        precision: u32,
        details: GridDetails,
    ) -> Self {
        Self {
            rectangle: rectangle.corners.map(|c| [c.x, c.y]),
            grid: points
                .iter()
                .map(|p| [round_to(p.x, precision), round_to(p.y, precision)])
                .collect(),
            details,
        }
    }

    /// Iterates over the (rounded) grid points.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.grid.iter().map(|&[x, y]| Point2::new(x, y))
    }

    /// Compact JSON rendering.
    ///
    /// # Errors
    ///
    /// Returns `RectGridError::Serialize` if serialization fails. Coordinates are
    /// always finite, so this does not happen for results built by [`GridResult::new`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering.
    ///
    /// # Errors
    ///
    /// Returns `RectGridError::Serialize` if serialization fails. Coordinates are
    /// always finite, so this does not happen for results built by [`GridResult::new`].
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
