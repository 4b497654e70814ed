use thiserror::Error;

/// Top-level error type for the curvis toolkit.
#[derive(Debug, Error)]
pub enum CurvisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to curve queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("curve does not support arc-length parameterization")]
    ArcLengthUnsupported,
}

/// Convenience type alias for results using [`CurvisError`].
pub type Result<T> = std::result::Result<T, CurvisError>;
