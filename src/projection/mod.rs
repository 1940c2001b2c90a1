//! Projection engine: the per-period recurrence and the run driver

mod check;
mod engine;

pub use check::{verify_balance, ConsistencyReport, PeriodCheck};
pub use engine::{advance, run, Projection, ProjectionConfig, ProjectionEngine};

// ============================================================================
// Default Run Parameters
// ============================================================================

/// Default projection horizon in periods
pub const DEFAULT_HORIZON: u32 = 5;

/// Default balance-check tolerance, relative to balance-sheet magnitude.
/// The identity holds by construction; anything beyond float accumulation
/// noise indicates an engine defect, so the tolerance is tight.
pub const DEFAULT_BALANCE_TOLERANCE: f64 = 1e-9;
