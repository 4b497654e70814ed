mod arc;
mod segment;

pub use arc::Arc2;
pub use segment::Segment2;

use crate::math::{Point2, Vector2};

/// Trait for parametric curves in 2D space.
///
/// Implementors map a normalized parameter in `[0, param_length]` to points
/// in the plane and answer the standard proximity queries. All methods are
/// infallible: degenerate inputs (out-of-range parameters, zero-length
/// curves) produce degenerate-but-defined numeric outputs rather than
/// errors, and callers are responsible for supplying geometrically valid
/// parameters. Validated access lives in [`crate::operations::query`].
pub trait ParametricCurve2 {
    /// Returns whether the curve is closed (ends where it starts).
    fn is_closed(&self) -> bool;

    /// Returns the length of the curve's parameter domain `[0, param_length]`.
    fn param_length(&self) -> f64;

    /// Evaluates the curve at parameter `t`.
    ///
    /// `t` is not clamped; values outside the domain extrapolate.
    fn sample_t(&self, t: f64) -> Point2;

    /// Computes the unit tangent vector at parameter `t`.
    fn tangent_t(&self, t: f64) -> Vector2;

    /// Returns whether the curve supports arc-length parameterization.
    fn has_arc_length(&self) -> bool;

    /// Returns the total arc length of the curve.
    fn arc_length(&self) -> f64;

    /// Evaluates the curve at arc-length distance `a` from its start.
    fn sample_arc_length(&self, a: f64) -> Point2;

    /// Returns the minimum distance from `point` to the curve.
    fn distance(&self, point: &Point2) -> f64;

    /// Returns the point on the curve closest to `point`.
    fn nearest_point(&self, point: &Point2) -> Point2;

    /// Reverses the traversal direction of the curve in place.
    ///
    /// The set of points on the curve is unchanged; only the
    /// parameter-to-point mapping flips.
    fn reverse(&mut self);
}
