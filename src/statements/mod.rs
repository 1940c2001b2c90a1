//! Statement data structures: the per-period record and the historical seed

mod record;
mod seed;

pub use record::PeriodRecord;
pub use seed::HistoricalActuals;
