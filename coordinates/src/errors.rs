use crate::CoordinateType;
use thiserror::Error;

/// Every failure a construction or conversion call can surface. Each kind
/// is distinguishable so callers can branch on the cause.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoordinateErrors {
    #[error("no coordinates provided")]
    NoCoordinates,
    #[error("expected {expected} coordinate values for {coordinate_type}, got {got}")]
    WrongComponentCount {
        coordinate_type: CoordinateType,
        expected: usize,
        got: usize,
    },
    #[error("expected 2 or 3 cartesian coordinate values, got {0}")]
    WrongCartesianComponentCount(usize),
    #[error("'{0}' is not numeric")]
    NotNumeric(String),
    #[error("cannot convert from {from} to {to}")]
    UnsupportedConversion {
        from: CoordinateType,
        to: CoordinateType,
    },
    #[error("expected a center with {expected} components, got {got}")]
    MalformedCenter { expected: usize, got: usize },
}
