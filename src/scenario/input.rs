//! Scenario inputs as entered on the calculator form
//!
//! Deserializes from JSON or CSV with per-field defaults matching the form's
//! initial values, and validates at the entry-point boundary.

use crate::assumptions::RiskCategory;
use crate::error::{ProjectorError, Result};
use crate::projection::{MAX_HORIZON_YEARS, MIN_HORIZON_YEARS};
use serde::{Deserialize, Serialize};

/// One calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Monthly income
    #[serde(default = "default_monthly_income")]
    pub monthly_income: f64,

    /// Monthly fixed expenses
    #[serde(default = "default_fixed_expense")]
    pub fixed_expense: f64,

    /// Amount invested every month
    #[serde(default = "default_monthly_investment")]
    pub monthly_investment: f64,

    #[serde(default)]
    pub risk_category: RiskCategory,

    /// Projection horizon in whole years, 1 to 30
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

fn default_monthly_income() -> f64 { 30_000.0 }
fn default_fixed_expense() -> f64 { 15_000.0 }
fn default_monthly_investment() -> f64 { 5_000.0 }
fn default_horizon_years() -> u32 { 10 }

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            monthly_income: 30_000.0,
            fixed_expense: 15_000.0,
            monthly_investment: 5_000.0,
            risk_category: RiskCategory::Conservative,
            horizon_years: 10,
        }
    }
}

impl ProjectionInput {
    /// Parse a JSON scenario, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject negative or non-finite amounts and out-of-range horizons
    pub fn validate(&self) -> Result<()> {
        check_amount("monthly_income", self.monthly_income)?;
        check_amount("fixed_expense", self.fixed_expense)?;
        check_amount("monthly_investment", self.monthly_investment)?;

        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            return Err(ProjectorError::InvalidInput {
                field: "horizon_years",
                reason: format!(
                    "{} is outside {}..={}",
                    self.horizon_years, MIN_HORIZON_YEARS, MAX_HORIZON_YEARS
                ),
            });
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectorError::InvalidInput {
            field,
            reason: format!("{} is not a finite number", value),
        });
    }
    if value < 0.0 {
        return Err(ProjectorError::InvalidInput {
            field,
            reason: format!("{} is negative", value),
        });
    }
    Ok(())
}
