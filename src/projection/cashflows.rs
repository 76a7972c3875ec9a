//! Projection output structures

use super::BalanceStatus;
use crate::assumptions::{AllocationPlan, RiskCategory};
use serde::Serialize;

/// One month of the growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthRow {
    /// Projection month (1-indexed)
    pub month: u32,
    /// Account balance after this month's growth and contribution
    pub balance: f64,
    /// Cumulative contributions through this month
    pub contributed: f64,
    /// Balance in excess of contributions
    pub gain: f64,
}

/// Complete result of projecting one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResult {
    pub risk_category: RiskCategory,
    pub annual_return: f64,
    pub monthly_rate: f64,
    pub horizon_years: u32,
    pub monthly_investment: f64,

    /// Income minus fixed expense minus investment (signed)
    pub monthly_balance: f64,
    pub balance_status: BalanceStatus,

    pub allocation: AllocationPlan,

    /// End-of-month balances, `horizon_years * 12` entries
    pub monthly_balances: Vec<f64>,
    /// Last entry of `monthly_balances`, 0 for an empty projection
    pub final_balance: f64,
}

impl ProjectionResult {
    pub fn total_months(&self) -> u32 {
        self.monthly_balances.len() as u32
    }

    pub fn total_contributed(&self) -> f64 {
        self.monthly_investment * self.monthly_balances.len() as f64
    }

    pub fn total_gain(&self) -> f64 {
        self.final_balance - self.total_contributed()
    }

    /// Growth table with contributions and gains per month
    pub fn growth_rows(&self) -> Vec<GrowthRow> {
        self.monthly_balances
            .iter()
            .enumerate()
            .map(|(i, &balance)| {
                let month = i as u32 + 1;
                let contributed = self.monthly_investment * month as f64;
                GrowthRow {
                    month,
                    balance,
                    contributed,
                    gain: balance - contributed,
                }
            })
            .collect()
    }

    /// Balance at the end of each projection year
    pub fn year_end_balances(&self) -> Vec<(u32, f64)> {
        self.monthly_balances
            .chunks(12)
            .enumerate()
            .filter_map(|(i, year)| year.last().map(|&b| (i as u32 + 1, b)))
            .collect()
    }
}
