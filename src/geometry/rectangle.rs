use crate::error::{Axis, GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// Axis-aligned extents of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Extent along `axis` left over after reserving `wall_offset` on both sides.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UsableExtentNegative` if the offset consumes the
    /// whole extent (usable extent `<= 0`).
    pub fn usable_extent(&self, axis: Axis, wall_offset: f64) -> Result<f64> {
        let extent = match axis {
            Axis::X => self.width(),
            Axis::Y => self.height(),
        };
        let usable = extent - 2.0 * wall_offset;
        if usable <= 0.0 {
            return Err(GeometryError::UsableExtentNegative {
                axis,
                extent,
                wall_offset,
                usable,
            }
            .into());
        }
        Ok(usable)
    }
}

/// A rectangle given by its four corners in lower-left, upper-left,
/// upper-right, lower-right order.
///
/// The corners are kept exactly as supplied so they can be echoed back in
/// results. Axis alignment is checked by [`Rectangle::bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub corners: [Point2; 4],
}

impl Rectangle {
    /// Creates a rectangle from four corners.
    #[must_use]
    pub fn new(corners: [Point2; 4]) -> Self {
        Self { corners }
    }

    /// Creates a rectangle from `(x, y)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: [(f64, f64); 4]) -> Self {
        Self {
            corners: pairs.map(|(x, y)| Point2::new(x, y)),
        }
    }

    /// Creates the rectangle spanning `[xmin, xmax] × [ymin, ymax]` with
    /// corners in LL, UL, UR, LR order.
    #[must_use]
    pub fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::from_pairs([(xmin, ymin), (xmin, ymax), (xmax, ymax), (xmax, ymin)])
    }

    /// Derives the rectangle's bounds from all four corners.
    ///
    /// The corners may appear in any order, but together they must be exactly
    /// the four combinations of two distinct x-values and two distinct
    /// y-values.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if a coordinate is not
    /// finite, or `GeometryError::NotAxisAligned` if the corners do not form
    /// a non-degenerate axis-aligned rectangle.
    pub fn bounds(&self) -> Result<Bounds> {
        for c in &self.corners {
            for (parameter, value) in [("corner.x", c.x), ("corner.y", c.y)] {
                if !value.is_finite() {
                    return Err(GeometryError::ParameterOutOfRange { parameter, value }.into());
                }
            }
        }

        let not_aligned = || GeometryError::NotAxisAligned {
            corners: self.corners,
        };

        let xs = distinct_values(self.corners.iter().map(|c| c.x));
        let ys = distinct_values(self.corners.iter().map(|c| c.y));
        let (&[xmin, xmax], &[ymin, ymax]) = (xs.as_slice(), ys.as_slice()) else {
            return Err(not_aligned().into());
        };

        // Every (x, y) combination must be covered exactly once.
        for x in [xmin, xmax] {
            for y in [ymin, ymax] {
                let hits = self
                    .corners
                    .iter()
                    .filter(|c| (c.x - x).abs() < TOLERANCE && (c.y - y).abs() < TOLERANCE)
                    .count();
                if hits != 1 {
                    return Err(not_aligned().into());
                }
            }
        }

        Ok(Bounds {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }
}

/// Returns the sorted values of `iter` with near-duplicates collapsed.
fn distinct_values(iter: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = iter.collect();
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
    values
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RectGridError;

    #[test]
    fn bounds_from_canonical_order() {
        let rect = Rectangle::from_pairs([(0.0, 0.0), (0.0, 10.0), (30.0, 10.0), (30.0, 0.0)]);
        let b = rect.bounds().unwrap();
        assert_eq!(
            b,
            Bounds {
                xmin: 0.0,
                xmax: 30.0,
                ymin: 0.0,
                ymax: 10.0
            }
        );
        assert!((b.width() - 30.0).abs() < TOLERANCE);
        assert!((b.height() - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn bounds_ignore_corner_order() {
        // Clockwise from the upper-right instead of LL, UL, UR, LR.
        let rect = Rectangle::from_pairs([(5.0, 2.0), (5.0, -1.0), (-3.0, -1.0), (-3.0, 2.0)]);
        let b = rect.bounds().unwrap();
        assert!((b.xmin + 3.0).abs() < TOLERANCE);
        assert!((b.xmax - 5.0).abs() < TOLERANCE);
        assert!((b.ymin + 1.0).abs() < TOLERANCE);
        assert!((b.ymax - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn rotated_rectangle_rejected() {
        let rect = Rectangle::from_pairs([(0.0, 0.0), (-1.0, 1.0), (0.0, 2.0), (1.0, 1.0)]);
        let err = rect.bounds().unwrap_err();
        assert!(matches!(
            err,
            RectGridError::Geometry(GeometryError::NotAxisAligned { .. })
        ));
    }

    #[test]
    fn repeated_corner_rejected() {
        // Two distinct xs and ys, but (0, 1) and (1, 0) are missing.
        let rect = Rectangle::from_pairs([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]);
        assert!(rect.bounds().is_err());
    }

    #[test]
    fn zero_width_rejected() {
        let rect = Rectangle::from_pairs([(2.0, 0.0), (2.0, 5.0), (2.0, 5.0), (2.0, 0.0)]);
        assert!(rect.bounds().is_err());
    }

    #[test]
    fn non_finite_corner_rejected() {
        let rect = Rectangle::from_pairs([(0.0, 0.0), (0.0, f64::NAN), (1.0, 1.0), (1.0, 0.0)]);
        let err = rect.bounds().unwrap_err();
        assert!(matches!(
            err,
            RectGridError::Geometry(GeometryError::ParameterOutOfRange { .. })
        ));
    }

    #[test]
    fn from_bounds_corner_order() {
        let rect = Rectangle::from_bounds(1.0, 2.0, 4.0, 6.0);
        assert_eq!(rect.corners[0], Point2::new(1.0, 2.0));
        assert_eq!(rect.corners[1], Point2::new(1.0, 6.0));
        assert_eq!(rect.corners[2], Point2::new(4.0, 6.0));
        assert_eq!(rect.corners[3], Point2::new(4.0, 2.0));
    }

    #[test]
    fn usable_extent_positive() {
        let b = Rectangle::from_bounds(0.0, 0.0, 30.0, 10.0).bounds().unwrap();
        assert!((b.usable_extent(Axis::X, 0.2).unwrap() - 29.6).abs() < 1e-9);
        assert!((b.usable_extent(Axis::Y, 0.2).unwrap() - 9.6).abs() < 1e-9);
    }

    #[test]
    fn usable_extent_consumed() {
        let b = Rectangle::from_bounds(0.0, 0.0, 30.0, 1.0).bounds().unwrap();
        assert!(b.usable_extent(Axis::Y, 0.5).is_err());
        let err = b.usable_extent(Axis::Y, 0.7).unwrap_err();
        assert!(matches!(
            err,
            RectGridError::Geometry(GeometryError::UsableExtentNegative { axis: Axis::Y, .. })
        ));
    }
}
