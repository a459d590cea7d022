use thiserror::Error;

/// Recoverable engine errors.
///
/// None of these are fatal to a running tick loop: an invalid request
/// leaves engine state untouched, and malformed gesture input degrades to
/// the no-hand rest policy at the signal layer.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid landmark input: {0}")]
    InvalidInput(String),
}
