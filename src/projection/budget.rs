//! Monthly budget balance

use serde::Serialize;

/// Income left over after fixed expenses and the monthly investment
///
/// Negative when the month is overspent. Inputs are assumed non-negative.
pub fn compute_monthly_balance(income: f64, fixed_expense: f64, investment: f64) -> f64 {
    income - fixed_expense - investment
}

/// How the monthly balance is framed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Money left over
    Surplus,
    /// Income exactly covers expenses and investment
    Balanced,
    /// Overspent
    Deficit,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance > 0.0 {
            BalanceStatus::Surplus
        } else if balance == 0.0 {
            BalanceStatus::Balanced
        } else {
            BalanceStatus::Deficit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surplus() {
        let balance = compute_monthly_balance(30_000.0, 15_000.0, 5_000.0);
        assert_eq!(balance, 10_000.0);
        assert_eq!(BalanceStatus::from_balance(balance), BalanceStatus::Surplus);
    }

    #[test]
    fn test_deficit() {
        let balance = compute_monthly_balance(20_000.0, 25_000.0, 0.0);
        assert_eq!(balance, -5_000.0);
        assert_eq!(BalanceStatus::from_balance(balance), BalanceStatus::Deficit);
    }

    #[test]
    fn test_exactly_balanced() {
        let balance = compute_monthly_balance(20_000.0, 15_000.0, 5_000.0);
        assert_eq!(balance, 0.0);
        assert_eq!(BalanceStatus::from_balance(balance), BalanceStatus::Balanced);
    }

    #[test]
    fn test_exact_subtraction() {
        // Any non-negative triple reproduces the plain expression bit for bit
        let cases = [(0.0, 0.0, 0.0), (1234.5, 0.25, 999.75), (1e9, 1.0, 1e-3)];
        for (income, expense, investment) in cases {
            assert_eq!(
                compute_monthly_balance(income, expense, investment),
                income - expense - investment
            );
        }
    }
}
