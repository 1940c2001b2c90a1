//! The per-period statement record produced by the recurrence engine

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// One fiscal period of the linked three-statement model.
///
/// Period 0 holds the historical actuals; periods 1..N are projected.
/// A record is created once by the engine for its period index and never
/// mutated afterward.
///
/// Sign convention: expense lines (cogs, operating_expenses, depreciation,
/// taxes) are stored negative. The cash flow statement's depreciation
/// add-back and the balance identity both depend on this convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Period index (0 = historical seed)
    pub period: u32,

    // Income statement
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub depreciation: f64,
    pub ebit: f64,
    pub pretax_income: f64,
    pub taxes: f64,
    pub net_income: f64,

    // Balance sheet
    pub cash: f64,
    pub receivables: f64,
    pub inventory: f64,
    pub net_fixed_assets: f64,
    pub payables: f64,
    pub debt: f64,
    pub share_capital: f64,
    pub retained_earnings: f64,
    pub total_assets: f64,
    pub total_liabilities_equity: f64,
    /// Total assets minus total liabilities + equity; ~0 when the
    /// statements link correctly
    pub balance_check: f64,

    // Cash flow statement (indirect method)
    pub cfo: f64,
    pub cfi: f64,
    pub cff: f64,
    pub net_change_in_cash: f64,
}

impl PeriodRecord {
    /// All numeric fields with their names, in statement order.
    /// Drives the finiteness check and the CSV writer.
    pub fn fields(&self) -> [(&'static str, f64); 24] {
        [
            ("revenue", self.revenue),
            ("cogs", self.cogs),
            ("gross_profit", self.gross_profit),
            ("operating_expenses", self.operating_expenses),
            ("depreciation", self.depreciation),
            ("ebit", self.ebit),
            ("pretax_income", self.pretax_income),
            ("taxes", self.taxes),
            ("net_income", self.net_income),
            ("cash", self.cash),
            ("receivables", self.receivables),
            ("inventory", self.inventory),
            ("net_fixed_assets", self.net_fixed_assets),
            ("payables", self.payables),
            ("debt", self.debt),
            ("share_capital", self.share_capital),
            ("retained_earnings", self.retained_earnings),
            ("total_assets", self.total_assets),
            ("total_liabilities_equity", self.total_liabilities_equity),
            ("balance_check", self.balance_check),
            ("cfo", self.cfo),
            ("cfi", self.cfi),
            ("cff", self.cff),
            ("net_change_in_cash", self.net_change_in_cash),
        ]
    }

    /// Fail with the first non-finite field, if any.
    pub fn ensure_finite(&self) -> Result<(), ModelError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ModelError::NumericFault {
                    field,
                    period: self.period,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::HistoricalActuals;

    #[test]
    fn test_field_count_matches_struct() {
        let record = HistoricalActuals::default().to_record().unwrap();
        assert_eq!(record.fields().len(), 24);
    }

    #[test]
    fn test_ensure_finite_flags_field() {
        let mut record = HistoricalActuals::default().to_record().unwrap();
        record.cfo = f64::INFINITY;
        record.period = 3;
        assert_eq!(
            record.ensure_finite(),
            Err(ModelError::NumericFault {
                field: "cfo",
                period: 3
            })
        );
    }
}
