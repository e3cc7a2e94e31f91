use tracing::debug;

use super::assemble::assemble;
use super::layout::{GridParams, LayoutVariant};
use super::stats::compute_details;
use crate::error::Result;
use crate::geometry::Rectangle;
use crate::result::GridResult;

/// Generates grid points inside a rectangle, keeping a minimum clearance
/// from every wall.
///
/// Runs the four stages in order: bounds extraction, column/row layout with
/// the selected [`LayoutVariant`], point assembly, and statistics.
#[derive(Debug, Clone)]
pub struct GenerateGrid {
    rectangle: Rectangle,
    spacing: f64,
    variant: LayoutVariant,
    params: GridParams,
}

impl GenerateGrid {
    /// Creates a new grid generation with default parameters and the
    /// closed-form layout.
    #[must_use]
    pub fn new(rectangle: Rectangle, spacing: f64) -> Self {
        Self {
            rectangle,
            spacing,
            variant: LayoutVariant::default(),
            params: GridParams::default(),
        }
    }

    /// Sets the layout variant.
    #[must_use]
    pub fn with_variant(mut self, variant: LayoutVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the minimum wall clearance.
    #[must_use]
    pub fn with_wall_offset(mut self, wall_offset: f64) -> Self {
        self.params.wall_offset = wall_offset;
        self
    }

    /// Replaces all generation parameters.
    #[must_use]
    pub fn with_params(mut self, params: GridParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NotAxisAligned` if the corners are not an
    ///   axis-aligned rectangle
    /// - `GeometryError::ParameterOutOfRange` for invalid numeric parameters
    /// - `GeometryError::UsableExtentNegative` if the wall offset leaves no
    ///   usable width or height
    /// - `LayoutError::NoFeasibleLayout` if the search variant finds no column
    /// - `LayoutError::TooManyPoints` if the grid exceeds `max_points`
    pub fn execute(&self) -> Result<GridResult> {
        let bounds = self.rectangle.bounds()?;
        let offsets = self.variant.layout(bounds, self.spacing, &self.params)?;
        let points = assemble(&offsets);
        let details = compute_details(&points, &bounds, self.spacing);

        debug!(
            variant = %self.variant,
            spacing = self.spacing,
            wall_offset = self.params.wall_offset,
            num_points = details.num_points,
            "generated grid"
        );

        let precision = self
            .params
            .display_precision
            .unwrap_or_else(|| self.variant.default_precision());
        Ok(GridResult::new(&self.rectangle, &points, precision, details))
    }
}

/// Generates a grid with the given wall offset and layout variant.
///
/// # Errors
///
/// See [`GenerateGrid::execute`].
pub fn generate_grid(
    rectangle: Rectangle,
    spacing: f64,
    wall_offset: f64,
    variant: LayoutVariant,
) -> Result<GridResult> {
    GenerateGrid::new(rectangle, spacing)
        .with_wall_offset(wall_offset)
        .with_variant(variant)
        .execute()
}
