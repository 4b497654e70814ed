use crate::math::angle::{clamp_angle_deg, DEG_TO_RAD, RAD_TO_DEG};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::ParametricCurve2;

/// A circular arc in the plane.
///
/// Defined by a center, radius, and an angular interval in degrees measured
/// counter-clockwise from the positive x-axis (atan2 convention). The
/// parametric domain is `[0, 1]`: `t = 0` maps to the start angle and
/// `t = 1` to the end angle, unless the arc has been [`reversed`].
///
/// This is a lightweight value type: the radius is not validated (a zero
/// radius degenerates to a point) and a 360° span is not treated as a
/// closed circle.
///
/// [`reversed`]: Arc2::reversed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2 {
    center: Point2,
    radius: f64,
    angle_start_deg: f64,
    angle_end_deg: f64,
    is_reversed: bool,
}

impl Arc2 {
    /// Creates a new arc.
    ///
    /// If `end_deg` is less than `start_deg`, the end angle is normalized by
    /// adding 360° so that `angle_end_deg >= angle_start_deg` always holds.
    /// An arc from 350° to 10° therefore stores an end angle of 370° and
    /// spans 20°, not -340°.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (non-negative; not validated)
    /// * `start_deg` - Start angle in degrees, CCW from +x
    /// * `end_deg` - End angle in degrees, CCW from +x
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        let angle_end_deg = if end_deg < start_deg {
            end_deg + 360.0
        } else {
            end_deg
        };
        Self {
            center,
            radius,
            angle_start_deg: start_deg,
            angle_end_deg,
            is_reversed: false,
        }
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in degrees.
    #[must_use]
    pub fn angle_start_deg(&self) -> f64 {
        self.angle_start_deg
    }

    /// Returns the end angle in degrees, post-normalization.
    #[must_use]
    pub fn angle_end_deg(&self) -> f64 {
        self.angle_end_deg
    }

    /// Returns whether the traversal direction has been reversed.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    /// Returns a copy of this arc with the traversal direction flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut arc = *self;
        arc.is_reversed = !arc.is_reversed;
        arc
    }

    /// Interpolated angle at parameter `t`, in radians.
    fn angle_at(&self, t: f64) -> f64 {
        let theta_deg = if self.is_reversed {
            (1.0 - t) * self.angle_end_deg + t * self.angle_start_deg
        } else {
            (1.0 - t) * self.angle_start_deg + t * self.angle_end_deg
        };
        theta_deg * DEG_TO_RAD
    }

    /// Point on the full circle at angle `theta` (radians).
    fn point_at_angle(&self, theta: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y + self.radius * theta.sin(),
        )
    }
}

impl ParametricCurve2 for Arc2 {
    fn is_closed(&self) -> bool {
        false
    }

    fn param_length(&self) -> f64 {
        1.0
    }

    fn sample_t(&self, t: f64) -> Point2 {
        self.point_at_angle(self.angle_at(t))
    }

    fn tangent_t(&self, t: f64) -> Vector2 {
        // Unit tangent for increasing angle. reverse() does not flip its
        // sign, so on a reversed arc it points against the travel direction.
        let theta = self.angle_at(t);
        Vector2::new(-theta.sin(), theta.cos())
    }

    fn has_arc_length(&self) -> bool {
        true
    }

    fn arc_length(&self) -> f64 {
        (self.angle_end_deg - self.angle_start_deg) * DEG_TO_RAD * self.radius
    }

    /// Evaluates the arc at arc-length distance `a` from its start.
    ///
    /// A degenerate arc (zero radius or zero angular span) has zero arc
    /// length; the division then produces a non-finite parameter and the
    /// result is a NaN point. This is deliberately not guarded.
    fn sample_arc_length(&self, a: f64) -> Point2 {
        let t = a / self.arc_length();
        self.sample_t(t)
    }

    fn distance(&self, point: &Point2) -> f64 {
        let to_point = point - self.center;
        let len = to_point.norm();
        if len <= TOLERANCE {
            // Query at the center: every arc point is exactly one radius away.
            return self.radius;
        }
        let dir = to_point / len;
        let theta = dir.y.atan2(dir.x);
        // The containment test compares the radian-valued angle against the
        // degree-valued bounds; only the clamp below is unit-correct.
        if theta < self.angle_start_deg || theta > self.angle_end_deg {
            let theta = theta.clamp(
                self.angle_start_deg * DEG_TO_RAD,
                self.angle_end_deg * DEG_TO_RAD,
            );
            (point - self.point_at_angle(theta)).norm()
        } else {
            (len - self.radius).abs()
        }
    }

    fn nearest_point(&self, point: &Point2) -> Point2 {
        let to_point = point - self.center;
        let len = to_point.norm();
        if len <= TOLERANCE {
            // All arc points are equidistant from the center; pick the middle.
            return self.sample_t(0.5);
        }
        let dir = to_point / len;
        let theta_deg = dir.y.atan2(dir.x) * RAD_TO_DEG;
        let theta_deg = clamp_angle_deg(theta_deg, self.angle_start_deg, self.angle_end_deg);
        self.point_at_angle(theta_deg * DEG_TO_RAD)
    }

    fn reverse(&mut self) {
        self.is_reversed = !self.is_reversed;
    }
}
