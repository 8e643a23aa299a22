use thiserror::Error;

/// Launch parameter rejected at the flight-model boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("fill ratio must lie strictly between 0 and 1, got {0}")]
    FillRatio(f64),

    #[error("drag coefficient must be positive, got {0}")]
    DragCoefficient(f64),

    #[error("launch pressure must be positive, got {0} psi")]
    Pressure(f64),
}
