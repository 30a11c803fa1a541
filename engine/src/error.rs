use thiserror::Error;

/// The error taxonomy of spec §7. The geometry kernel and the event series
/// never raise — they fold every non-event into `+∞` (§4.1, §4.3) — so these
/// variants only surface from the initialiser and from the end-of-run
/// conservation check.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("dimension mismatch: expected {expected} axes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invariant breach: expected {expected} particles within the box, observed {observed}")]
    InvariantBreach { expected: usize, observed: usize },

    #[error("numerical pathology: negative event time {0} popped from the event series")]
    NumericalPathology(f64),
}
