//! Grid requests embedded in free text.
//!
//! A query carries four coordinate pairs written `(x, y)` and one spacing
//! value introduced by `spacing` or `Vspacing` followed by `:` or `=`
//! (case-insensitive), e.g.
//!
//! ```text
//! grid for (0, 0) (0, 10) (30, 10) (30, 0) with spacing: 1.8
//! ```
//!
//! The first four pairs, in order of appearance, become the rectangle
//! corners. Anything else in the text is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::geometry::Rectangle;
use crate::operations::{GenerateGrid, LayoutVariant};

/// Revision of the query grammar accepted by [`parse_query`].
pub const QUERY_GRAMMAR_VERSION: u32 = 1;

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)";

#[allow(clippy::expect_used)]
static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\(\s*({NUMBER})\s*,\s*({NUMBER})\s*\)")).expect("literal pattern")
});

#[allow(clippy::expect_used)]
static SPACING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\bv?spacing\s*[:=]\s*({NUMBER})")).expect("literal pattern")
});

/// Rectangle and spacing extracted from a query string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuery {
    pub rectangle: Rectangle,
    pub spacing: f64,
}

/// Extracts a rectangle and spacing from `input`.
///
/// # Errors
///
/// - `ParseError::TooFewCoordinates` if fewer than four `(x, y)` pairs appear
/// - `ParseError::MissingSpacing` if no spacing value appears
pub fn parse_query(input: &str) -> std::result::Result<ParsedQuery, ParseError> {
    let pairs: Vec<_> = PAIR_RE.captures_iter(input).collect();
    if pairs.len() < 4 {
        return Err(ParseError::TooFewCoordinates {
            input: input.to_owned(),
            found: pairs.len(),
        });
    }

    let mut corners = [(0.0, 0.0); 4];
    for (corner, caps) in corners.iter_mut().zip(&pairs) {
        *corner = (
            parse_number(input, &caps[1])?,
            parse_number(input, &caps[2])?,
        );
    }

    let spacing = SPACING_RE
        .captures(input)
        .ok_or_else(|| ParseError::MissingSpacing {
            input: input.to_owned(),
        })?;
    let spacing = parse_number(input, &spacing[1])?;

    Ok(ParsedQuery {
        rectangle: Rectangle::from_pairs(corners),
        spacing,
    })
}

fn parse_number(input: &str, token: &str) -> std::result::Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        input: input.to_owned(),
        token: token.to_owned(),
    })
}

/// Writes `rectangle` and `spacing` in the form accepted by [`parse_query`].
#[must_use]
pub fn format_query(rectangle: &Rectangle, spacing: f64) -> String {
    let pairs: Vec<String> = rectangle
        .corners
        .iter()
        .map(|c| format!("({}, {})", c.x, c.y))
        .collect();
    format!("{} spacing: {spacing}", pairs.join(" "))
}

/// Parses `input` and generates a closed-form grid with the default wall
/// offset, returning the result as a JSON string.
///
/// # Errors
///
/// Returns the parse error, or any error of [`GenerateGrid::execute`].
pub fn generate_grid_from_query(input: &str) -> Result<String> {
    generate_grid_from_query_with(input, LayoutVariant::ClosedForm)
}

/// Like [`generate_grid_from_query`], with an explicit layout variant.
///
/// # Errors
///
/// Returns the parse error, or any error of [`GenerateGrid::execute`].
pub fn generate_grid_from_query_with(input: &str, variant: LayoutVariant) -> Result<String> {
    let query = parse_query(input)?;
    GenerateGrid::new(query.rectangle, query.spacing)
        .with_variant(variant)
        .execute()?
        .to_json()
}
