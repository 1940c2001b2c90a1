//! Historical actuals: the injected period-0 state a projection starts from

use crate::error::ModelError;
use crate::statements::PeriodRecord;
use serde::{Deserialize, Serialize};

/// Historical (period-0) actuals supplied by the caller.
///
/// Thirteen input lines; the remaining period-0 statement lines (gross
/// profit, EBIT, totals) are derived by [`to_record`](Self::to_record).
/// Defaults mirror a small reference company and double as a worked
/// example; real runs supply their own figures, typically from JSON.
///
/// Expense lines follow the record's sign convention and are negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalActuals {
    #[serde(default = "default_revenue")]
    pub revenue: f64,
    #[serde(default = "default_cogs")]
    pub cogs: f64,
    #[serde(default = "default_operating_expenses")]
    pub operating_expenses: f64,
    #[serde(default = "default_depreciation")]
    pub depreciation: f64,
    #[serde(default = "default_taxes")]
    pub taxes: f64,
    #[serde(default = "default_cash")]
    pub cash: f64,
    #[serde(default = "default_receivables")]
    pub receivables: f64,
    #[serde(default = "default_inventory")]
    pub inventory: f64,
    #[serde(default = "default_net_fixed_assets")]
    pub net_fixed_assets: f64,
    #[serde(default = "default_payables")]
    pub payables: f64,
    #[serde(default = "default_debt")]
    pub debt: f64,
    #[serde(default = "default_share_capital")]
    pub share_capital: f64,
    #[serde(default = "default_retained_earnings")]
    pub retained_earnings: f64,
}

fn default_revenue() -> f64 { 100_000.0 }
fn default_cogs() -> f64 { -40_000.0 }
fn default_operating_expenses() -> f64 { -20_000.0 }
fn default_depreciation() -> f64 { -2_000.0 }
fn default_taxes() -> f64 { -10_000.0 }
fn default_cash() -> f64 { 20_000.0 }
fn default_receivables() -> f64 { 10_000.0 }
fn default_inventory() -> f64 { 10_000.0 }
fn default_net_fixed_assets() -> f64 { 50_000.0 }
fn default_payables() -> f64 { 8_000.0 }
fn default_debt() -> f64 { 20_000.0 }
fn default_share_capital() -> f64 { 30_000.0 }
fn default_retained_earnings() -> f64 { 32_000.0 }

impl Default for HistoricalActuals {
    fn default() -> Self {
        Self {
            revenue: default_revenue(),
            cogs: default_cogs(),
            operating_expenses: default_operating_expenses(),
            depreciation: default_depreciation(),
            taxes: default_taxes(),
            cash: default_cash(),
            receivables: default_receivables(),
            inventory: default_inventory(),
            net_fixed_assets: default_net_fixed_assets(),
            payables: default_payables(),
            debt: default_debt(),
            share_capital: default_share_capital(),
            retained_earnings: default_retained_earnings(),
        }
    }
}

impl HistoricalActuals {
    /// Build the full period-0 record.
    ///
    /// Derived income lines are computed from the inputs; the cash flow
    /// section is zero (there is no prior period to reconcile against).
    /// Rejects non-finite inputs before they reach the engine.
    pub fn to_record(&self) -> Result<PeriodRecord, ModelError> {
        for (field, value) in [
            ("revenue", self.revenue),
            ("cogs", self.cogs),
            ("operating_expenses", self.operating_expenses),
            ("depreciation", self.depreciation),
            ("taxes", self.taxes),
            ("cash", self.cash),
            ("receivables", self.receivables),
            ("inventory", self.inventory),
            ("net_fixed_assets", self.net_fixed_assets),
            ("payables", self.payables),
            ("debt", self.debt),
            ("share_capital", self.share_capital),
            ("retained_earnings", self.retained_earnings),
        ] {
            if !value.is_finite() {
                return Err(ModelError::InvalidSeed { field, value });
            }
        }

        let gross_profit = self.revenue + self.cogs;
        let ebit = gross_profit + self.operating_expenses + self.depreciation;
        let pretax_income = ebit;
        let net_income = pretax_income + self.taxes;

        let total_assets = self.cash + self.receivables + self.inventory + self.net_fixed_assets;
        let total_liabilities_equity =
            self.payables + self.debt + self.share_capital + self.retained_earnings;

        Ok(PeriodRecord {
            period: 0,
            revenue: self.revenue,
            cogs: self.cogs,
            gross_profit,
            operating_expenses: self.operating_expenses,
            depreciation: self.depreciation,
            ebit,
            pretax_income,
            taxes: self.taxes,
            net_income,
            cash: self.cash,
            receivables: self.receivables,
            inventory: self.inventory,
            net_fixed_assets: self.net_fixed_assets,
            payables: self.payables,
            debt: self.debt,
            share_capital: self.share_capital,
            retained_earnings: self.retained_earnings,
            total_assets,
            total_liabilities_equity,
            balance_check: total_assets - total_liabilities_equity,
            cfo: 0.0,
            cfi: 0.0,
            cff: 0.0,
            net_change_in_cash: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_seed_balances() {
        let record = HistoricalActuals::default().to_record().unwrap();

        assert_eq!(record.period, 0);
        assert_relative_eq!(record.gross_profit, 60_000.0);
        assert_relative_eq!(record.ebit, 38_000.0);
        assert_relative_eq!(record.net_income, 28_000.0);
        assert_relative_eq!(record.total_assets, 90_000.0);
        assert_relative_eq!(record.total_liabilities_equity, 90_000.0);
        assert_relative_eq!(record.balance_check, 0.0);
        assert_eq!(record.net_change_in_cash, 0.0);
    }

    #[test]
    fn test_rejects_non_finite_seed() {
        let seed = HistoricalActuals {
            cash: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            seed.to_record(),
            Err(ModelError::InvalidSeed { field: "cash", .. })
        ));
    }

    #[test]
    fn test_serde_partial_seed() {
        let seed: HistoricalActuals =
            serde_json::from_str(r#"{"revenue": 250000.0, "cogs": -90000.0}"#).unwrap();
        assert_eq!(seed.revenue, 250_000.0);
        assert_eq!(seed.cogs, -90_000.0);
        assert_eq!(seed.debt, 20_000.0);
    }
}
