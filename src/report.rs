//! Report formatting for the CLI and HTTP entry points
//!
//! The calculator returns plain numbers; everything here is display concern:
//! thousands separators, percentage strings and surplus/deficit framing.

use crate::assumptions::{ReferenceInstrument, REFERENCE_INSTRUMENTS};
use crate::error::Result;
use crate::projection::{BalanceStatus, ProjectionResult, MONTHS_PER_YEAR};
use crate::scenario::BatchScenario;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::io::Write;

pub const DISCLAIMER: &str =
    "This tool is for estimation and learning only and does not constitute investment advice.";

/// Group an integer amount with thousands separators: `-1234567` -> `-1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit amount, rounded
pub fn format_amount(value: f64) -> String {
    group_thousands(value.round() as i64)
}

/// Weight as a whole percentage: `0.6` -> `60%`
pub fn format_percent(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

/// One-line framing of the monthly balance
pub fn balance_line(balance: f64) -> String {
    match BalanceStatus::from_balance(balance) {
        BalanceStatus::Surplus => format!("Monthly surplus: {}", format_amount(balance)),
        BalanceStatus::Balanced => "Income and spending are exactly balanced".to_string(),
        BalanceStatus::Deficit => format!("Monthly overspend: {}", format_amount(balance.abs())),
    }
}

/// Summary sentence for the end of the projection
///
/// The final balance is truncated to whole units.
pub fn final_balance_line(result: &ProjectionResult) -> String {
    format!(
        "Estimated assets after {} years: about {} (assuming {} annual return)",
        result.horizon_years,
        group_thousands(result.final_balance.trunc() as i64),
        format_percent(result.annual_return)
    )
}

/// Plain-text report for terminal output
pub fn render_text(result: &ProjectionResult) -> String {
    let mut lines = vec![
        "Monthly Budget".to_string(),
        format!("  {}", balance_line(result.monthly_balance)),
        String::new(),
        format!("Allocation ({})", result.risk_category),
        format!("  {:<20} {:>6}  {:>12}", "Asset class", "Weight", "Per month"),
    ];
    let monthly_split = result.allocation.split(result.monthly_investment);
    for (entry, (_, amount)) in result.allocation.entries().iter().zip(&monthly_split) {
        lines.push(format!(
            "  {:<20} {:>6}  {:>12}",
            entry.asset_class,
            format_percent(entry.weight),
            format_amount(*amount)
        ));
    }
    lines.push(String::new());

    lines.push("Growth Projection".to_string());
    lines.push(format!("  {:>4}  {:>16}  {:>16}", "Year", "Balance", "Contributed"));
    for (year, balance) in result.year_end_balances() {
        let contributed = result.monthly_investment * (year * MONTHS_PER_YEAR) as f64;
        lines.push(format!(
            "  {:>4}  {:>16}  {:>16}",
            year,
            format_amount(balance),
            format_amount(contributed)
        ));
    }
    lines.push(format!("  {}", final_balance_line(result)));
    lines.push(String::new());

    lines.push("Reference ETFs".to_string());
    for inst in REFERENCE_INSTRUMENTS.iter() {
        lines.push(format!("  {:<6} {:<14} {}", inst.symbol, inst.category, inst.description));
    }
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// JSON document returned by the CLI and the HTTP handler
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub result: &'a ProjectionResult,
    pub total_contributed: f64,
    pub total_gain: f64,
    pub reference_instruments: &'static [ReferenceInstrument],
    pub disclaimer: &'static str,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a ProjectionResult) -> Self {
        Self {
            result,
            total_contributed: result.total_contributed(),
            total_gain: result.total_gain(),
            reference_instruments: &REFERENCE_INSTRUMENTS,
            disclaimer: DISCLAIMER,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Serialize)]
struct GrowthCsvRow {
    month: u32,
    balance: String,
    contributed: String,
    gain: String,
}

#[derive(Debug, Serialize)]
struct DatedGrowthCsvRow {
    month: u32,
    period: String,
    balance: String,
    contributed: String,
    gain: String,
}

/// Calendar label (`YYYY-MM`) for a projection month counted from `start`
pub fn period_label(start: NaiveDate, month: u32) -> Option<String> {
    let date = start.checked_add_months(Months::new(month.saturating_sub(1)))?;
    Some(format!("{:04}-{:02}", date.year(), date.month()))
}

/// Write the monthly growth table as CSV
///
/// With a start month, each row also carries its calendar period.
pub fn write_growth_csv<W: Write>(writer: W, result: &ProjectionResult, start: Option<NaiveDate>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in result.growth_rows() {
        let balance = format!("{:.2}", row.balance);
        let contributed = format!("{:.2}", row.contributed);
        let gain = format!("{:.2}", row.gain);
        match start {
            Some(start) => wtr.serialize(DatedGrowthCsvRow {
                month: row.month,
                period: period_label(start, row.month).unwrap_or_default(),
                balance,
                contributed,
                gain,
            })?,
            None => wtr.serialize(GrowthCsvRow {
                month: row.month,
                balance,
                contributed,
                gain,
            })?,
        }
    }
    wtr.flush()?;
    Ok(())
}

/// One line of the batch summary
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummaryRow {
    pub id: String,
    pub risk_category: String,
    pub horizon_years: u32,
    pub monthly_balance: String,
    pub status: BalanceStatus,
    pub final_balance: String,
    pub total_contributed: String,
    pub total_gain: String,
}

impl BatchSummaryRow {
    pub fn new(scenario: &BatchScenario, result: &ProjectionResult) -> Self {
        Self {
            id: scenario.id.clone(),
            risk_category: result.risk_category.as_str().to_string(),
            horizon_years: result.horizon_years,
            monthly_balance: format!("{:.2}", result.monthly_balance),
            status: result.balance_status,
            final_balance: format!("{:.2}", result.final_balance),
            total_contributed: format!("{:.2}", result.total_contributed()),
            total_gain: format!("{:.2}", result.total_gain()),
        }
    }
}

/// Write batch summary rows as CSV
pub fn write_batch_summary<W: Write>(writer: W, rows: &[BatchSummaryRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RiskCategory;
    use crate::projection::project;
    use crate::scenario::ProjectionInput;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(30000), "30,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-5000), "-5,000");
    }

    #[test]
    fn test_balance_framing() {
        assert_eq!(balance_line(10_000.0), "Monthly surplus: 10,000");
        assert_eq!(balance_line(0.0), "Income and spending are exactly balanced");
        assert_eq!(balance_line(-5_000.0), "Monthly overspend: 5,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.6), "60%");
        assert_eq!(format_percent(0.03), "3%");
        assert_eq!(format_percent(0.09), "9%");
    }

    #[test]
    fn test_final_balance_line_truncates() {
        let input = ProjectionInput {
            horizon_years: 1,
            ..Default::default()
        };
        let result = project(&input);
        assert_eq!(
            final_balance_line(&result),
            "Estimated assets after 1 years: about 60,820 (assuming 3% annual return)"
        );
    }

    #[test]
    fn test_render_text_sections() {
        let input = ProjectionInput {
            risk_category: RiskCategory::Aggressive,
            horizon_years: 3,
            ..Default::default()
        };
        let text = render_text(&project(&input));
        assert!(text.contains("Monthly surplus: 10,000"));
        assert!(text.contains("Allocation (Aggressive)"));
        assert!(text.contains("Broad-Market ETF"));
        assert!(text.contains("70%"));
        // Aggressive splits the 5,000 monthly investment 70/20/10
        assert!(text.lines().any(|l| l.contains("Broad-Market ETF") && l.ends_with("3,500")));
        assert!(text.lines().any(|l| l.contains("High-Dividend ETF") && l.ends_with("1,000")));
        assert!(text.lines().any(|l| l.contains("Other Growth") && l.ends_with("500")));
        // Year 3 contributions: 36 months of 5,000
        assert!(text.lines().any(|l| l.trim_start().starts_with("3 ") && l.ends_with("180,000")));
        assert!(text.contains("VTI"));
        assert!(text.ends_with(&format!("{}\n", DISCLAIMER)));
    }

    #[test]
    fn test_period_label() {
        let start = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(period_label(start, 1).as_deref(), Some("2026-11"));
        assert_eq!(period_label(start, 3).as_deref(), Some("2027-01"));
        assert_eq!(period_label(start, 14).as_deref(), Some("2027-12"));
    }

    #[test]
    fn test_growth_csv() {
        let input = ProjectionInput { horizon_years: 1, ..Default::default() };
        let result = project(&input);

        let mut buf = Vec::new();
        write_growth_csv(&mut buf, &result, None).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "month,balance,contributed,gain");
        assert_eq!(lines[1], "1,5000.00,5000.00,0.00");

        let mut buf = Vec::new();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        write_growth_csv(&mut buf, &result, Some(start)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("month,period,balance,contributed,gain\n1,2026-01,5000.00"));
        assert!(text.contains("12,2026-12,"));
    }

    #[test]
    fn test_json_report() {
        let result = project(&ProjectionInput::default());
        let json = Report::new(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["risk_category"], "conservative");
        assert_eq!(value["balance_status"], "surplus");
        assert_eq!(value["monthly_balances"].as_array().unwrap().len(), 120);
        assert_eq!(value["allocation"]["entries"][0]["asset_class"], "Bonds/Cash");
        assert_eq!(value["reference_instruments"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_batch_summary_csv() {
        let scenario = BatchScenario {
            id: "s1".to_string(),
            input: ProjectionInput {
                monthly_income: 20_000.0,
                fixed_expense: 25_000.0,
                monthly_investment: 0.0,
                ..Default::default()
            },
        };
        let result = project(&scenario.input);
        let rows = vec![BatchSummaryRow::new(&scenario, &result)];

        let mut buf = Vec::new();
        write_batch_summary(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "id,risk_category,horizon_years,monthly_balance,status,final_balance,total_contributed,total_gain"
        );
        assert_eq!(lines[1], "s1,conservative,10,-5000.00,deficit,0.00,0.00,0.00");
    }
}
