//! Degree/radian conversion and angular-interval utilities.

use std::f64::consts::PI;

/// Multiply a degree value by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Multiply a radian value by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Clamps `theta` (degrees) to the angular interval `[min_deg, max_deg]`.
///
/// The interval is treated as a continuous range of angles, not a pair of
/// scalars: an angle outside the interval snaps to whichever endpoint is
/// closer along the shorter circular path, so a query just past 360° clamps
/// correctly into an interval like `[350, 370]`. Intervals spanning 360° or
/// more contain every angle.
#[must_use]
pub fn clamp_angle_deg(theta: f64, min_deg: f64, max_deg: f64) -> f64 {
    // Work relative to the interval midpoint so the wrap test is symmetric.
    let center = 0.5 * (min_deg + max_deg);
    let extent = max_deg - center;

    // Signed offset from the midpoint, wrapped into [-180, 180].
    let mut delta = (theta - center) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }

    if delta.abs() <= extent {
        center + delta
    } else if delta > 0.0 {
        max_deg
    } else {
        min_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn inside_interval_unchanged() {
        let c = clamp_angle_deg(45.0, 0.0, 90.0);
        assert!((c - 45.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn below_interval_snaps_to_min() {
        let c = clamp_angle_deg(-10.0, 0.0, 90.0);
        assert!(c.abs() < TOL, "c={c}");
    }

    #[test]
    fn above_interval_snaps_to_max() {
        let c = clamp_angle_deg(100.0, 0.0, 90.0);
        assert!((c - 90.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn snaps_along_shorter_path() {
        // 350° is 10° short of the interval start and 260° past its end,
        // so the nearer endpoint around the circle is 0°.
        let c = clamp_angle_deg(350.0, 0.0, 90.0);
        assert!(c.abs() < TOL, "c={c}");
    }

    #[test]
    fn wrapped_interval_contains_angle_past_360() {
        // 5° is the same direction as 365°, inside [350, 370].
        let c = clamp_angle_deg(5.0, 350.0, 370.0);
        assert!((c - 365.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn wrapped_interval_snaps_to_near_endpoint() {
        // 330° is 20° below the interval start; 15° is 5° above its
        // wrapped end. The end is closer.
        let c = clamp_angle_deg(15.0, 350.0, 370.0);
        assert!((c - 370.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn full_span_interval_contains_everything() {
        let c = clamp_angle_deg(123.0, 0.0, 360.0);
        assert!((c - 123.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn negative_bounds() {
        let c = clamp_angle_deg(-100.0, -90.0, -30.0);
        assert!((c + 90.0).abs() < TOL, "c={c}");
    }
}
