use crate::geometry::curve::ParametricCurve2;
use crate::math::Point2;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the curve.
    pub point: Point2,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on a curve to a given point.
pub struct ClosestPointOnCurve {
    point: Point2,
}

impl ClosestPointOnCurve {
    /// Creates a new `ClosestPointOnCurve` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query, returning the closest point and its distance.
    #[must_use]
    pub fn execute(&self, curve: &dyn ParametricCurve2) -> ClosestPointResult {
        ClosestPointResult {
            point: curve.nearest_point(&self.point),
            distance: curve.distance(&self.point),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc2, Segment2};

    #[test]
    fn closest_point_on_arc_interior() {
        let arc = Arc2::new(Point2::origin(), 10.0, 0.0, 90.0);
        let result = ClosestPointOnCurve::new(Point2::new(10.0, 10.0)).execute(&arc);
        let expected = 200.0_f64.sqrt() - 10.0;
        assert!((result.distance - expected).abs() < 1e-9);
        let on_circle = (result.point - Point2::origin()).norm();
        assert!((on_circle - 10.0).abs() < 1e-9);
    }

    #[test]
    fn closest_point_on_segment_clamps() {
        let s = Segment2::new(Point2::origin(), Point2::new(10.0, 0.0)).unwrap();
        let result = ClosestPointOnCurve::new(Point2::new(15.0, 0.0)).execute(&s);
        assert!((result.point - Point2::new(10.0, 0.0)).norm() < 1e-10);
        assert!((result.distance - 5.0).abs() < 1e-10);
    }

    #[test]
    fn dispatches_through_trait_objects() {
        let arc = Arc2::new(Point2::origin(), 1.0, 0.0, 180.0);
        let seg = Segment2::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        let curves: Vec<&dyn ParametricCurve2> = vec![&arc, &seg];
        let query = ClosestPointOnCurve::new(Point2::new(0.0, 2.0));
        let distances: Vec<f64> = curves
            .iter()
            .map(|c| query.execute(*c).distance)
            .collect();
        assert!((distances[0] - 1.0).abs() < 1e-10, "arc d={}", distances[0]);
        assert!((distances[1] - 2.0).abs() < 1e-10, "seg d={}", distances[1]);
    }
}
