mod closed_form;
mod feasibility_search;

pub use closed_form::ClosedFormLayout;
pub use feasibility_search::FeasibilitySearch;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, LayoutError, Result};
use crate::geometry::Bounds;

/// Selects how column and row offsets are laid out inside the rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    /// Anchors the first column at the lower-left wall offset and searches
    /// upwards for a column whose every point clears the walls.
    Search,
    /// Computes row and column counts directly and centers the grid.
    #[default]
    ClosedForm,
}

impl LayoutVariant {
    /// Decimal places used for emitted coordinates when none are configured.
    #[must_use]
    pub fn default_precision(self) -> u32 {
        match self {
            Self::Search => 2,
            Self::ClosedForm => 1,
        }
    }

    /// Runs the selected layout algorithm.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`FeasibilitySearch::execute`] or
    /// [`ClosedFormLayout::execute`].
    pub fn layout(self, bounds: Bounds, spacing: f64, params: &GridParams) -> Result<AxisOffsets> {
        match self {
            Self::Search => FeasibilitySearch::new(bounds, spacing, params.wall_offset)
                .with_zy_step(params.zy_step)
                .with_max_points(params.max_points)
                .execute(),
            Self::ClosedForm => ClosedFormLayout::new(bounds, spacing, params.wall_offset)
                .with_max_points(params.max_points)
                .execute(),
        }
    }
}

impl std::fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::ClosedForm => f.write_str("closed-form"),
        }
    }
}

/// Column x-coordinates and row y-coordinates of a grid.
///
/// Every column carries the same set of row offsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisOffsets {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl AxisOffsets {
    /// Number of grid points these offsets produce.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.xs.len().saturating_mul(self.ys.len())
    }
}

/// Parameters controlling grid generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    /// Minimum distance from every point to every rectangle edge.
    pub wall_offset: f64,
    /// Vertical nudge applied between column search attempts.
    pub zy_step: f64,
    /// Decimal places for emitted coordinates; `None` uses the variant default.
    pub display_precision: Option<u32>,
    /// Upper bound on the number of generated points.
    pub max_points: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            wall_offset: 0.2,
            zy_step: 0.1,
            display_precision: None,
            max_points: 1_000_000,
        }
    }
}

/// Rejects non-finite or non-positive spacing and negative wall offsets.
pub(crate) fn check_parameters(spacing: f64, wall_offset: f64) -> Result<()> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "spacing",
            value: spacing,
        }
        .into());
    }
    if !wall_offset.is_finite() || wall_offset < 0.0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "wall_offset",
            value: wall_offset,
        }
        .into());
    }
    Ok(())
}

/// Number of points spaced `spacing` apart that fit in `usable`, counting
/// both ends: `floor(usable / spacing) + 1`.
///
/// # Errors
///
/// Returns `LayoutError::TooManyPoints` if the count exceeds `limit`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn count_along(usable: f64, spacing: f64, limit: usize) -> Result<usize> {
    let steps = (usable / spacing).floor();
    if steps.is_finite() && steps >= 0.0 && steps < limit as f64 {
        return Ok(steps as usize + 1);
    }
    Err(LayoutError::TooManyPoints {
        requested: (steps as usize).saturating_add(1),
        limit,
    }
    .into())
}

/// Fails if a `cols × rows` grid would exceed `limit` points.
pub(crate) fn check_point_limit(cols: usize, rows: usize, limit: usize) -> Result<()> {
    let requested = cols.saturating_mul(rows);
    if requested > limit {
        return Err(LayoutError::TooManyPoints { requested, limit }.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn params_defaults() {
        let p = GridParams::default();
        assert!((p.wall_offset - 0.2).abs() < 1e-12);
        assert!((p.zy_step - 0.1).abs() < 1e-12);
        assert_eq!(p.display_precision, None);
    }

    #[test]
    fn params_partial_json() {
        let p: GridParams = serde_json::from_str(r#"{"wall_offset": 0.5}"#).unwrap();
        assert!((p.wall_offset - 0.5).abs() < 1e-12);
        assert!((p.zy_step - 0.1).abs() < 1e-12);
        assert_eq!(p.max_points, 1_000_000);
    }

    #[test]
    fn variant_serde_names() {
        assert_eq!(
            serde_json::to_string(&LayoutVariant::ClosedForm).unwrap(),
            "\"closed-form\""
        );
        let v: LayoutVariant = serde_json::from_str("\"search\"").unwrap();
        assert_eq!(v, LayoutVariant::Search);
        assert_eq!(LayoutVariant::Search.to_string(), "search");
    }

    #[test]
    fn variant_precision() {
        assert_eq!(LayoutVariant::Search.default_precision(), 2);
        assert_eq!(LayoutVariant::ClosedForm.default_precision(), 1);
    }

    #[test]
    fn count_along_counts_both_ends() {
        assert_eq!(count_along(29.6, 1.8, 1000).unwrap(), 17);
        assert_eq!(count_along(9.6, 1.8, 1000).unwrap(), 6);
        assert_eq!(count_along(0.5, 1.8, 1000).unwrap(), 1);
    }

    #[test]
    fn count_along_respects_limit() {
        let err = count_along(1e9, 1e-9, 1000).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RectGridError::Layout(LayoutError::TooManyPoints { limit: 1000, .. })
        ));
    }

    #[test]
    fn point_limit() {
        assert!(check_point_limit(10, 10, 100).is_ok());
        assert!(check_point_limit(11, 10, 100).is_err());
        assert!(check_point_limit(usize::MAX, 2, 100).is_err());
    }

    #[test]
    fn parameters_checked() {
        assert!(check_parameters(1.0, 0.0).is_ok());
        assert!(check_parameters(0.0, 0.2).is_err());
        assert!(check_parameters(-1.0, 0.2).is_err());
        assert!(check_parameters(f64::NAN, 0.2).is_err());
        assert!(check_parameters(1.0, -0.1).is_err());
        assert!(check_parameters(1.0, f64::INFINITY).is_err());
    }
}
