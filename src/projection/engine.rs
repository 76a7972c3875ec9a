//! Monthly compounding growth engine

use super::{compute_monthly_balance, BalanceStatus, ProjectionResult, MAX_HORIZON_YEARS, MONTHS_PER_YEAR};
use crate::assumptions::select_allocation;
use crate::scenario::ProjectionInput;
use log::debug;

/// Convert an annual return to the equivalent monthly rate
///
/// Geometric: compounding the result twelve times reproduces the annual
/// return exactly, unlike `annual / 12`.
pub fn monthly_rate(annual_return: f64) -> f64 {
    (1.0 + annual_return).powf(1.0 / 12.0) - 1.0
}

/// Project end-of-month balances for a fixed monthly contribution
///
/// Starts from a zero balance; each month grows the balance by the monthly
/// rate and then adds the contribution. Returns `horizon_years * 12` values.
/// Callers validate the horizon; it must not exceed `MAX_HORIZON_YEARS`.
pub fn project_growth(annual_return: f64, monthly_investment: f64, horizon_years: u32) -> Vec<f64> {
    debug_assert!(
        horizon_years <= MAX_HORIZON_YEARS,
        "horizon_years {} exceeds {}",
        horizon_years,
        MAX_HORIZON_YEARS
    );
    let rate = monthly_rate(annual_return);
    let total_months = horizon_years as usize * MONTHS_PER_YEAR as usize;

    let mut balance = 0.0;
    let mut balances = Vec::with_capacity(total_months);
    for _ in 0..total_months {
        balance = balance * (1.0 + rate) + monthly_investment;
        balances.push(balance);
    }
    balances
}

/// Run the full calculation for one scenario
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let category = input.risk_category;
    let annual_return = category.annual_return();

    let monthly_balance = compute_monthly_balance(
        input.monthly_income,
        input.fixed_expense,
        input.monthly_investment,
    );
    let monthly_balances = project_growth(annual_return, input.monthly_investment, input.horizon_years);
    let final_balance = monthly_balances.last().copied().unwrap_or(0.0);

    debug!(
        "Projected {} months for {} at {:.2}%: final balance {:.2}",
        monthly_balances.len(),
        category,
        annual_return * 100.0,
        final_balance
    );

    ProjectionResult {
        risk_category: category,
        annual_return,
        monthly_rate: monthly_rate(annual_return),
        horizon_years: input.horizon_years,
        monthly_investment: input.monthly_investment,
        monthly_balance,
        balance_status: BalanceStatus::from_balance(monthly_balance),
        allocation: select_allocation(category),
        monthly_balances,
        final_balance,
    }
}
