use thiserror::Error;

/// Failure modes of a single classification call.
///
/// Both variants are fatal to the call in question and carry no retry
/// semantics; the caller decides whether to try again with the next
/// capture. The oval fallback is never used to mask either of these.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("invalid landmark set: {0}")]
    InvalidLandmarkSet(String),
    #[error("degenerate geometry: {quantity} is {value}, expected > 0")]
    DegenerateMeasurement { quantity: &'static str, value: f32 },
}
