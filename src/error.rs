//! Error types for driver validation and projection faults

use thiserror::Error;

/// Errors surfaced by the projection engine.
///
/// All variants are terminal for the run: a projection either completes
/// fully and consistently or is discarded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A driver field is non-finite or outside its hard domain
    /// (e.g. growth_rate <= -1 would collapse revenue below zero).
    #[error("invalid driver `{field}` = {value}: {reason}")]
    InvalidDriver {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A seed (period-0) field is non-finite.
    #[error("invalid seed value `{field}` = {value}: must be finite")]
    InvalidSeed { field: &'static str, value: f64 },

    /// An intermediate value became NaN or infinite mid-projection.
    /// Never coerced to zero; the run aborts at the offending period.
    #[error("non-finite `{field}` produced in period {period}")]
    NumericFault { field: &'static str, period: u32 },
}
