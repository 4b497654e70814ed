mod closest_point;
mod length;
mod point_on_curve;

pub use closest_point::{ClosestPointOnCurve, ClosestPointResult};
pub use length::{Length, PointAtLength};
pub use point_on_curve::PointOnCurve;
