pub mod curve;

pub use curve::{Arc2, ParametricCurve2, Segment2};
