use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for grid generation.
#[derive(Debug, Error)]
pub enum RectGridError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("failed to serialize grid result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Coarse classification of a [`RectGridError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The free-text query could not be parsed.
    Parse,
    /// The corners do not describe an axis-aligned rectangle, or a parameter is out of range.
    Geometry,
    /// The wall offset leaves no usable extent on some axis.
    InvalidGeometry,
    /// The column search exhausted its attempts.
    NoFeasibleLayout,
    /// The grid would exceed the configured point limit.
    Limit,
    /// The result could not be rendered as JSON.
    Serialize,
}

impl RectGridError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Geometry(GeometryError::UsableExtentNegative { .. }) => {
                ErrorKind::InvalidGeometry
            }
            Self::Geometry(_) => ErrorKind::Geometry,
            Self::Layout(LayoutError::NoFeasibleLayout { .. }) => ErrorKind::NoFeasibleLayout,
            Self::Layout(LayoutError::TooManyPoints { .. }) => ErrorKind::Limit,
            Self::Serialize(_) => ErrorKind::Serialize,
        }
    }
}

/// Errors raised by the text-embedded query grammar.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected 4 coordinate pairs in {input:?}, found {found}")]
    TooFewCoordinates { input: String, found: usize },

    #[error("no `spacing:` or `Vspacing=` value in {input:?}")]
    MissingSpacing { input: String },

    #[error("invalid number {token:?} in {input:?}")]
    InvalidNumber { input: String, token: String },
}

/// Axis of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors related to the input rectangle and numeric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("corners {corners:?} do not form an axis-aligned rectangle")]
    NotAxisAligned { corners: [Point2; 4] },

    #[error(
        "wall offset {wall_offset} leaves no usable {axis} extent \
         (extent {extent}, usable {usable})"
    )]
    UsableExtentNegative {
        axis: Axis,
        extent: f64,
        wall_offset: f64,
        usable: f64,
    },

    #[error("parameter {parameter} = {value} is out of range")]
    ParameterOutOfRange { parameter: &'static str, value: f64 },
}

/// Errors raised while laying out grid columns and rows.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(
        "no feasible column after {attempts} attempts \
         (spacing {spacing}, wall offset {wall_offset}, zy step {zy_step})"
    )]
    NoFeasibleLayout {
        spacing: f64,
        wall_offset: f64,
        zy_step: f64,
        attempts: usize,
    },

    #[error("grid of {requested} points exceeds the limit of {limit}")]
    TooManyPoints { requested: usize, limit: usize },
}

/// Convenience type alias for results using [`RectGridError`].
pub type Result<T> = std::result::Result<T, RectGridError>;
