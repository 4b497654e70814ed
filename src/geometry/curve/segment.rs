use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::ParametricCurve2;

/// A bounded line segment in the plane.
///
/// The parametric form is `P(t) = (1 - t) * start + t * end` over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    start: Point2,
    end: Point2,
}

impl Segment2 {
    /// Creates a new segment between two points.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide (zero-length segment).
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("segment endpoints coincide".into()).into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Clamped projection parameter of `point` onto the segment.
    fn project(&self, point: &Point2) -> f64 {
        let dir = self.end - self.start;
        let t = (point - self.start).dot(&dir) / dir.norm_squared();
        t.clamp(0.0, 1.0)
    }
}

impl ParametricCurve2 for Segment2 {
    fn is_closed(&self) -> bool {
        false
    }

    fn param_length(&self) -> f64 {
        1.0
    }

    fn sample_t(&self, t: f64) -> Point2 {
        Point2::from(self.start.coords.lerp(&self.end.coords, t))
    }

    fn tangent_t(&self, _t: f64) -> Vector2 {
        (self.end - self.start).normalize()
    }

    fn has_arc_length(&self) -> bool {
        true
    }

    fn arc_length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    fn sample_arc_length(&self, a: f64) -> Point2 {
        self.sample_t(a / self.arc_length())
    }

    fn distance(&self, point: &Point2) -> f64 {
        (point - self.nearest_point(point)).norm()
    }

    fn nearest_point(&self, point: &Point2) -> Point2 {
        self.sample_t(self.project(point))
    }

    fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }
}
