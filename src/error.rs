//! Engine error types

use thiserror::Error;

/// Errors surfaced by the costing engine.
///
/// The engine never recovers internally — a typed failure is returned and the
/// caller (UI / orchestration layer) decides whether to halt or prompt for a
/// correction. Missing numeric inputs are not errors; they are normalized to
/// zero before any calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A tariff value required as a divisor or consumption rate is zero or
    /// negative. Fatal to the single calculation call, never defaulted.
    #[error("invalid tariff configuration: {0}")]
    InvalidConfiguration(String),

    /// A leg type token outside IMPORT / EXPORT / EMPTY.
    #[error("invalid leg type: {0:?}")]
    InvalidLegType(String),
}

/// Convenience alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
