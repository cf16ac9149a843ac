use thiserror::Error;

/// Engine error types
///
/// Every validation failure is raised synchronously at the offending call and
/// leaves prior state untouched; there is no fatal state beyond these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Wrong selector, empty stop list, or an otherwise malformed argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Progress value outside the engine's configured range.
    #[error("progress {value} outside range [{start}, {end}]")]
    OutOfRange { value: f64, start: f64, end: f64 },

    /// `set_progress` called before `init`.
    #[error("engine not initialized; call init() first")]
    NotInitialized,
}
