//! The period recurrence and the projection run
//!
//! `advance` is the whole model: one pure function deriving a period's
//! income statement, balance sheet, and cash flow statement from the prior
//! period's closing state and the driver set. The run is a sequential fold
//! of `advance` over the horizon; each period depends only on the one
//! before it.

use crate::drivers::DriverSet;
use crate::error::ModelError;
use crate::projection::{verify_balance, ConsistencyReport, DEFAULT_BALANCE_TOLERANCE, DEFAULT_HORIZON};
use crate::statements::{HistoricalActuals, PeriodRecord};
use log::debug;

/// Run parameters for a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Number of projected periods beyond the seed
    pub horizon: u32,
    /// Relative tolerance for the post-run balance check
    pub balance_tolerance: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            balance_tolerance: DEFAULT_BALANCE_TOLERANCE,
        }
    }
}

/// Derive one period from the previous period's closing state.
///
/// Pure: output depends only on the arguments, so repeated calls with the
/// same inputs are bit-identical. The only failure mode is a non-finite
/// value in the produced record, surfaced as [`ModelError::NumericFault`].
///
/// Sign conventions (expenses negative) carry through every step: the CFO
/// line subtracts the negative depreciation to add its magnitude back, and
/// net fixed assets add the negative depreciation to subtract it.
pub fn advance(
    previous: &PeriodRecord,
    drivers: &DriverSet,
    period: u32,
) -> Result<PeriodRecord, ModelError> {
    // Income statement
    let revenue = previous.revenue * (1.0 + drivers.growth_rate);
    let cogs = -revenue * drivers.cogs_ratio;
    let gross_profit = revenue + cogs;
    let operating_expenses = -revenue * drivers.sga_ratio;
    // Depreciation runs off the prior period's asset base; the one-period
    // lag is intentional
    let depreciation = -previous.net_fixed_assets * drivers.depreciation_rate;
    let ebit = gross_profit + operating_expenses + depreciation;
    // Interest fixed at zero, so pre-tax income is EBIT
    let pretax_income = ebit;
    // Negative pre-tax income yields a positive tax line (a tax benefit);
    // intended arithmetic, not a guarded branch
    let taxes = -pretax_income * drivers.tax_rate;
    let net_income = pretax_income + taxes;

    // Working capital and fixed assets: ratios of current revenue,
    // recomputed fresh each period
    let receivables = revenue * drivers.receivables_ratio;
    let inventory = revenue * drivers.inventory_ratio;
    let payables = revenue * drivers.payables_ratio;
    let capex = revenue * drivers.capex_ratio;
    let net_fixed_assets = previous.net_fixed_assets + capex + depreciation;

    // Cash flow statement, indirect method
    let delta_receivables = receivables - previous.receivables;
    let delta_inventory = inventory - previous.inventory;
    let delta_payables = payables - previous.payables;
    let cfo = net_income - depreciation - delta_receivables - delta_inventory + delta_payables;
    let cfi = -capex;
    // Debt and equity held flat
    let cff = 0.0;
    let net_change_in_cash = cfo + cfi + cff;

    // Balance sheet close: the cash flow statement is the sole writer of
    // the cash balance (the plug)
    let cash = previous.cash + net_change_in_cash;
    let debt = previous.debt;
    let share_capital = previous.share_capital;
    let retained_earnings = previous.retained_earnings + net_income;

    let total_assets = cash + receivables + inventory + net_fixed_assets;
    let total_liabilities_equity = payables + debt + share_capital + retained_earnings;
    let balance_check = total_assets - total_liabilities_equity;

    let record = PeriodRecord {
        period,
        revenue,
        cogs,
        gross_profit,
        operating_expenses,
        depreciation,
        ebit,
        pretax_income,
        taxes,
        net_income,
        cash,
        receivables,
        inventory,
        net_fixed_assets,
        payables,
        debt,
        share_capital,
        retained_earnings,
        total_assets,
        total_liabilities_equity,
        balance_check,
        cfo,
        cfi,
        cff,
        net_change_in_cash,
    };
    record.ensure_finite()?;
    Ok(record)
}

/// Project `horizon` periods from a seed record.
///
/// Returns `horizon + 1` records: index 0 is the seed unchanged, index i
/// is `advance` applied to index i-1. Horizon 0 returns just the seed.
pub fn run(
    seed: &HistoricalActuals,
    drivers: &DriverSet,
    horizon: u32,
) -> Result<Vec<PeriodRecord>, ModelError> {
    drivers.validate()?;

    let mut records = Vec::with_capacity(horizon as usize + 1);
    records.push(seed.to_record()?);

    for period in 1..=horizon {
        // records is never empty: seeded above
        let next = advance(&records[records.len() - 1], drivers, period)?;
        debug!(
            "period {}: revenue={:.2} net_income={:.2} cash={:.2} check={:.2e}",
            period, next.revenue, next.net_income, next.cash, next.balance_check
        );
        records.push(next);
    }

    Ok(records)
}

/// Engine wrapper binding a driver set and run config.
pub struct ProjectionEngine {
    drivers: DriverSet,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(drivers: DriverSet, config: ProjectionConfig) -> Self {
        Self { drivers, config }
    }

    /// Run the full projection from a seed.
    pub fn project(&self, seed: &HistoricalActuals) -> Result<Projection, ModelError> {
        let records = run(seed, &self.drivers, self.config.horizon)?;
        Ok(Projection {
            records,
            balance_tolerance: self.config.balance_tolerance,
        })
    }
}

/// An ordered, completed projection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    records: Vec<PeriodRecord>,
    balance_tolerance: f64,
}

impl Projection {
    /// Wrap an already-computed record sequence with the default tolerance.
    pub fn from_records(records: Vec<PeriodRecord>) -> Self {
        Self {
            records,
            balance_tolerance: DEFAULT_BALANCE_TOLERANCE,
        }
    }

    /// All period records, seed first.
    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    /// The terminal period.
    pub fn last(&self) -> &PeriodRecord {
        // A run always contains at least the seed
        &self.records[self.records.len() - 1]
    }

    /// Post-hoc balance verification over every projected period.
    pub fn verify(&self) -> ConsistencyReport {
        verify_balance(&self.records, self.balance_tolerance)
    }
}
