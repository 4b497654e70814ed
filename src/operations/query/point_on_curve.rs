use crate::error::{GeometryError, Result};
use crate::geometry::curve::ParametricCurve2;
use crate::math::Point2;

/// Evaluates a point on a curve at a given parameter, with range checking.
///
/// Unlike [`ParametricCurve2::sample_t`], which extrapolates silently, this
/// query rejects parameters outside the curve's domain.
pub struct PointOnCurve {
    t: f64,
}

impl PointOnCurve {
    /// Creates a new `PointOnCurve` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query against a curve, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, param_length]`.
    pub fn execute(&self, curve: &dyn ParametricCurve2) -> Result<Point2> {
        let max = curve.param_length();
        if self.t < 0.0 || self.t > max {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: self.t,
                min: 0.0,
                max,
            }
            .into());
        }
        Ok(curve.sample_t(self.t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Arc2;

    #[test]
    fn in_range_parameter_samples() {
        let arc = Arc2::new(Point2::origin(), 10.0, 0.0, 90.0);
        let p = PointOnCurve::new(0.0).execute(&arc).unwrap();
        assert!((p - Point2::new(10.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn out_of_range_parameter_rejected() {
        let arc = Arc2::new(Point2::origin(), 10.0, 0.0, 90.0);
        assert!(PointOnCurve::new(1.5).execute(&arc).is_err());
        assert!(PointOnCurve::new(-0.1).execute(&arc).is_err());
    }
}
