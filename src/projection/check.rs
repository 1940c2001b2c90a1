//! Post-hoc balance verification
//!
//! The accounting identity Assets = Liabilities + Equity holds by
//! construction in the recurrence, so a failing check means an engine
//! defect, not a data problem. The check never alters a record.

use crate::statements::PeriodRecord;
use log::error;

/// Balance-check outcome for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodCheck {
    pub period: u32,
    /// Total assets minus total liabilities + equity
    pub balance_check: f64,
    pub passed: bool,
}

/// Per-period and aggregate balance verification for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyReport {
    checks: Vec<PeriodCheck>,
    tolerance: f64,
}

impl ConsistencyReport {
    /// True when every projected period balances.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn checks(&self) -> &[PeriodCheck] {
        &self.checks
    }

    /// Periods whose balance check exceeded tolerance.
    pub fn failures(&self) -> impl Iterator<Item = &PeriodCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Verify |balance_check| for every record with index >= 1.
///
/// The tolerance is relative to balance-sheet magnitude with a floor of
/// one currency unit of scale, so tiny and huge balance sheets are judged
/// consistently. The seed is excluded: historical actuals may legitimately
/// carry an imbalance the model did not produce.
pub fn verify_balance(records: &[PeriodRecord], tolerance: f64) -> ConsistencyReport {
    let checks = records
        .iter()
        .filter(|r| r.period >= 1)
        .map(|r| {
            let scale = r.total_assets.abs().max(1.0);
            let passed = r.balance_check.abs() < tolerance * scale;
            if !passed {
                error!(
                    "balance check failed in period {}: assets - liabilities+equity = {} (tolerance {})",
                    r.period,
                    r.balance_check,
                    tolerance * scale
                );
            }
            PeriodCheck {
                period: r.period,
                balance_check: r.balance_check,
                passed,
            }
        })
        .collect();

    ConsistencyReport { checks, tolerance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::DriverSet;
    use crate::projection::{run, DEFAULT_BALANCE_TOLERANCE};
    use crate::statements::HistoricalActuals;

    #[test]
    fn test_clean_run_passes() {
        let records = run(&HistoricalActuals::default(), &DriverSet::default(), 10).unwrap();
        let report = verify_balance(&records, DEFAULT_BALANCE_TOLERANCE);

        assert!(report.passed());
        assert_eq!(report.checks().len(), 10);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_corrupted_record_flagged() {
        let mut records = run(&HistoricalActuals::default(), &DriverSet::default(), 5).unwrap();
        records[3].balance_check = 250.0;

        let report = verify_balance(&records, DEFAULT_BALANCE_TOLERANCE);
        assert!(!report.passed());
        let failed: Vec<u32> = report.failures().map(|c| c.period).collect();
        assert_eq!(failed, vec![3]);
    }

    #[test]
    fn test_seed_imbalance_ignored() {
        // Historical actuals that do not balance are a data property, not
        // an engine defect
        let seed = HistoricalActuals {
            debt: 25_000.0,
            ..Default::default()
        };
        let records = run(&seed, &DriverSet::default(), 3).unwrap();
        assert!(records[0].balance_check.abs() > 1.0);

        let report = verify_balance(&records, DEFAULT_BALANCE_TOLERANCE);
        // The recurrence preserves whatever imbalance the seed carries, so
        // every projected period reports the same offset and fails loudly
        assert_eq!(report.checks().len(), 3);
        assert!(report.checks().iter().all(|c| c.period >= 1));
        assert!(!report.passed());
        for check in report.checks() {
            assert!((check.balance_check - records[0].balance_check).abs() < 1e-6);
        }
    }
}
