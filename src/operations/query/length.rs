use crate::error::{GeometryError, QueryError, Result};
use crate::geometry::curve::ParametricCurve2;
use crate::math::Point2;

/// Computes the arc length of a curve.
pub struct Length;

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning the curve's arc length.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve does not support arc-length
    /// parameterization.
    pub fn execute(&self, curve: &dyn ParametricCurve2) -> Result<f64> {
        if !curve.has_arc_length() {
            return Err(QueryError::ArcLengthUnsupported.into());
        }
        Ok(curve.arc_length())
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates a point on a curve at a given arc-length distance from its
/// start, with range checking.
pub struct PointAtLength {
    s: f64,
}

impl PointAtLength {
    /// Creates a new `PointAtLength` query.
    #[must_use]
    pub fn new(s: f64) -> Self {
        Self { s }
    }

    /// Executes the query, returning the 2D point.
    ///
    /// On a zero-length curve the only distance passing the range check is
    /// `s = 0`, which still reaches [`ParametricCurve2::sample_arc_length`]
    /// and yields its NaN point.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve does not support arc-length
    /// parameterization or if `s` is outside `[0, arc_length]`.
    pub fn execute(&self, curve: &dyn ParametricCurve2) -> Result<Point2> {
        if !curve.has_arc_length() {
            return Err(QueryError::ArcLengthUnsupported.into());
        }
        let max = curve.arc_length();
        if self.s < 0.0 || self.s > max {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "s",
                value: self.s,
                min: 0.0,
                max,
            }
            .into());
        }
        Ok(curve.sample_arc_length(self.s))
    }
}
