//! Presentation boundary: statement views, CSV export, and chart series
//!
//! The engine guarantees the field set and the accounting identities; this
//! module only regroups fields the way a table or chart layer consumes
//! them. Nothing here feeds back into the numbers.

use crate::statements::PeriodRecord;
use std::io::Write;

/// The three tables a presentation layer renders from one record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementView {
    Income,
    BalanceSheet,
    CashFlow,
}

impl StatementView {
    /// Column names for this view, in display order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            StatementView::Income => &[
                "revenue",
                "cogs",
                "gross_profit",
                "operating_expenses",
                "depreciation",
                "ebit",
                "pretax_income",
                "taxes",
                "net_income",
            ],
            StatementView::BalanceSheet => &[
                "cash",
                "receivables",
                "inventory",
                "net_fixed_assets",
                "total_assets",
                "payables",
                "debt",
                "share_capital",
                "retained_earnings",
                "total_liabilities_equity",
                "balance_check",
            ],
            // Indirect method: starts at net income, adds back
            // depreciation, then the cash flow buckets
            StatementView::CashFlow => &[
                "net_income",
                "depreciation",
                "cfo",
                "cfi",
                "cff",
                "net_change_in_cash",
                "cash",
            ],
        }
    }

    /// Extract this view's row for one period.
    pub fn row(&self, record: &PeriodRecord) -> Vec<f64> {
        let fields = record.fields();
        self.columns()
            .iter()
            .map(|col| {
                fields
                    .iter()
                    .find(|(name, _)| name == col)
                    .map(|(_, value)| *value)
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }
}

/// Write the full record table as CSV, one row per period.
pub fn write_csv<W: Write>(writer: W, records: &[PeriodRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["period".to_string()];
    if let Some(first) = records.first() {
        header.extend(first.fields().iter().map(|(name, _)| name.to_string()));
    }
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![record.period.to_string()];
        row.extend(record.fields().iter().map(|(_, value)| format!("{:.2}", value)));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// The three series the chart layer plots across periods.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub periods: Vec<u32>,
    pub revenue: Vec<f64>,
    pub net_income: Vec<f64>,
    pub cash: Vec<f64>,
}

impl ChartSeries {
    pub fn from_records(records: &[PeriodRecord]) -> Self {
        Self {
            periods: records.iter().map(|r| r.period).collect(),
            revenue: records.iter().map(|r| r.revenue).collect(),
            net_income: records.iter().map(|r| r.net_income).collect(),
            cash: records.iter().map(|r| r.cash).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::DriverSet;
    use crate::projection::run;
    use crate::statements::HistoricalActuals;

    fn records() -> Vec<PeriodRecord> {
        run(&HistoricalActuals::default(), &DriverSet::default(), 5).unwrap()
    }

    #[test]
    fn test_views_cover_known_fields() {
        let record = &records()[1];
        for view in [
            StatementView::Income,
            StatementView::BalanceSheet,
            StatementView::CashFlow,
        ] {
            let row = view.row(record);
            assert_eq!(row.len(), view.columns().len());
            assert!(row.iter().all(|v| v.is_finite()), "unknown column in {:?}", view);
        }
    }

    #[test]
    fn test_income_view_row_values() {
        let record = &records()[1];
        let row = StatementView::Income.row(record);
        assert_eq!(row[0], record.revenue);
        assert_eq!(row[8], record.net_income);
    }

    #[test]
    fn test_csv_output_shape() {
        let records = records();
        let mut buf = Vec::new();
        write_csv(&mut buf, &records).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // Header + 6 periods
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("period,revenue,"));
        assert!(lines[1].starts_with("0,100000.00,"));
    }

    #[test]
    fn test_chart_series() {
        let records = records();
        let series = ChartSeries::from_records(&records);
        assert_eq!(series.periods, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(series.revenue[1], records[1].revenue);
        assert_eq!(series.cash[5], records[5].cash);
    }
}
