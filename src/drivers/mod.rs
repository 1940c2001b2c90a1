//! Projection drivers: the scalar assumptions applied uniformly to every
//! projected period
//!
//! Growth and margin drivers shape the income statement; working-capital
//! ratios and capex/depreciation drivers shape the balance sheet and the
//! cash flow statement.

use crate::error::ModelError;
use log::warn;
use serde::{Deserialize, Serialize};

/// Scalar assumptions for a projection run.
///
/// Expense-side drivers are ratios of current-period revenue except
/// `depreciation_rate`, which applies to the prior period's net fixed
/// assets. All fields are read-only once a run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSet {
    /// Annual revenue growth (0.10 = +10% per year)
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    /// Cost of goods sold as a fraction of revenue
    #[serde(default = "default_cogs_ratio")]
    pub cogs_ratio: f64,

    /// SG&A operating expenses as a fraction of revenue
    #[serde(default = "default_sga_ratio")]
    pub sga_ratio: f64,

    /// Effective tax rate on pre-tax income
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Accounts receivable as a fraction of revenue
    #[serde(default = "default_receivables_ratio")]
    pub receivables_ratio: f64,

    /// Inventory as a fraction of revenue
    #[serde(default = "default_inventory_ratio")]
    pub inventory_ratio: f64,

    /// Accounts payable as a fraction of revenue
    #[serde(default = "default_payables_ratio")]
    pub payables_ratio: f64,

    /// Capital expenditure as a fraction of revenue
    #[serde(default = "default_capex_ratio")]
    pub capex_ratio: f64,

    /// Depreciation rate on prior-period net fixed assets
    #[serde(default = "default_depreciation_rate")]
    pub depreciation_rate: f64,
}

fn default_growth_rate() -> f64 { 0.10 }
fn default_cogs_ratio() -> f64 { 0.40 }
fn default_sga_ratio() -> f64 { 0.20 }
fn default_tax_rate() -> f64 { 0.34 }
fn default_receivables_ratio() -> f64 { 0.10 }
fn default_inventory_ratio() -> f64 { 0.10 }
fn default_payables_ratio() -> f64 { 0.08 }
fn default_capex_ratio() -> f64 { 0.05 }
fn default_depreciation_rate() -> f64 { 0.10 }

impl Default for DriverSet {
    fn default() -> Self {
        Self {
            growth_rate: 0.10,
            cogs_ratio: 0.40,
            sga_ratio: 0.20,
            tax_rate: 0.34,
            receivables_ratio: 0.10,
            inventory_ratio: 0.10,
            payables_ratio: 0.08,
            capex_ratio: 0.05,
            depreciation_rate: 0.10,
        }
    }
}

impl DriverSet {
    /// Validate the driver set before a run starts.
    ///
    /// Hard errors: non-finite fields, and growth_rate <= -1 (revenue would
    /// collapse to zero or below). Values outside their natural business
    /// range (negative ratios, tax_rate above 1) remain numerically
    /// well-defined, so they only log a warning.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ModelError::InvalidDriver {
                    field,
                    value,
                    reason: "must be finite",
                });
            }
        }

        if self.growth_rate <= -1.0 {
            return Err(ModelError::InvalidDriver {
                field: "growth_rate",
                value: self.growth_rate,
                reason: "must be greater than -1",
            });
        }

        for (field, value) in [
            ("cogs_ratio", self.cogs_ratio),
            ("sga_ratio", self.sga_ratio),
            ("receivables_ratio", self.receivables_ratio),
            ("inventory_ratio", self.inventory_ratio),
            ("payables_ratio", self.payables_ratio),
            ("capex_ratio", self.capex_ratio),
        ] {
            if value < 0.0 {
                warn!("driver {} = {} is negative", field, value);
            }
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            warn!("tax_rate = {} outside [0, 1]", self.tax_rate);
        }
        if !(0.0..=1.0).contains(&self.depreciation_rate) {
            warn!("depreciation_rate = {} outside [0, 1]", self.depreciation_rate);
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("growth_rate", self.growth_rate),
            ("cogs_ratio", self.cogs_ratio),
            ("sga_ratio", self.sga_ratio),
            ("tax_rate", self.tax_rate),
            ("receivables_ratio", self.receivables_ratio),
            ("inventory_ratio", self.inventory_ratio),
            ("payables_ratio", self.payables_ratio),
            ("capex_ratio", self.capex_ratio),
            ("depreciation_rate", self.depreciation_rate),
        ]
    }
}
