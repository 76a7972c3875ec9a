//! Load batches of scenarios from CSV
//!
//! Expected columns: `id, monthly_income, fixed_expense, monthly_investment,
//! risk_category, horizon_years`. Missing columns take the form defaults.

use super::ProjectionInput;
use crate::assumptions::RiskCategory;
use crate::error::Result;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A scenario tagged with the identifier from its input row
#[derive(Debug, Clone, PartialEq)]
pub struct BatchScenario {
    pub id: String,
    pub input: ProjectionInput,
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    id: String,
    #[serde(default = "default_income")]
    monthly_income: f64,
    #[serde(default = "default_expense")]
    fixed_expense: f64,
    #[serde(default = "default_investment")]
    monthly_investment: f64,
    #[serde(default)]
    risk_category: RiskCategory,
    #[serde(default = "default_years")]
    horizon_years: u32,
}

fn default_income() -> f64 { ProjectionInput::default().monthly_income }
fn default_expense() -> f64 { ProjectionInput::default().fixed_expense }
fn default_investment() -> f64 { ProjectionInput::default().monthly_investment }
fn default_years() -> u32 { ProjectionInput::default().horizon_years }

impl From<ScenarioRow> for BatchScenario {
    fn from(row: ScenarioRow) -> Self {
        Self {
            id: row.id,
            input: ProjectionInput {
                monthly_income: row.monthly_income,
                fixed_expense: row.fixed_expense,
                monthly_investment: row.monthly_investment,
                risk_category: row.risk_category,
                horizon_years: row.horizon_years,
            },
        }
    }
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<BatchScenario>> {
    let file = File::open(path.as_ref())?;
    info!("Loading scenarios from {}", path.as_ref().display());
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader
///
/// Rows that fail to parse or validate are logged and skipped; a missing or
/// unreadable header is an error.
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<BatchScenario>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.headers()?;

    let mut scenarios = Vec::new();
    for (idx, record) in rdr.deserialize::<ScenarioRow>().enumerate() {
        // Header is line 1
        let line = idx + 2;
        let scenario: BatchScenario = match record {
            Ok(row) => row.into(),
            Err(e) => {
                warn!("Skipping line {}: {}", line, e);
                continue;
            }
        };
        if let Err(e) = scenario.input.validate() {
            warn!("Skipping scenario {} (line {}): {}", scenario.id, line, e);
            continue;
        }
        scenarios.push(scenario);
    }

    info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
