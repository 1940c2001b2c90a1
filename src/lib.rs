//! Three-statement financial projection engine
//!
//! Links an Income Statement, Balance Sheet, and Cash Flow Statement through
//! a year-by-year recurrence: the income statement produces profit, the cash
//! flow statement adjusts profit to cash (indirect method), and the balance
//! sheet absorbs the resulting cash balance. The closing loop keeps
//! Assets = Liabilities + Equity at every period.
//!
//! The engine is pure arithmetic over a [`DriverSet`] of scalar assumptions
//! and a [`HistoricalActuals`] seed supplied by the caller. Presentation
//! (tables, charts) consumes the ordered sequence of [`PeriodRecord`]s and
//! lives outside this crate's core.

pub mod drivers;
pub mod error;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod statements;

pub use drivers::DriverSet;
pub use error::ModelError;
pub use projection::{Projection, ProjectionConfig, ProjectionEngine};
pub use statements::{HistoricalActuals, PeriodRecord};
