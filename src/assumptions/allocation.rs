//! Static asset allocation plans by risk category

use super::RiskCategory;
use serde::Serialize;

pub const BONDS_CASH: &str = "Bonds/Cash";
pub const HIGH_DIVIDEND_ETF: &str = "High-Dividend ETF";
pub const BROAD_MARKET_ETF: &str = "Broad-Market ETF";
pub const OTHER_GROWTH: &str = "Other Growth";

/// One asset class and its share of the monthly investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationEntry {
    pub asset_class: &'static str,
    pub weight: f64,
}

/// Ordered asset-class weights for a risk category
///
/// Weights sum to 1.0 by construction; the order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationPlan {
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    fn from_pairs(pairs: &[(&'static str, f64)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(asset_class, weight)| AllocationEntry { asset_class, weight })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Split a monthly amount across the plan's asset classes
    pub fn split(&self, amount: f64) -> Vec<(&'static str, f64)> {
        self.entries
            .iter()
            .map(|e| (e.asset_class, amount * e.weight))
            .collect()
    }
}

/// Look up the allocation plan for a risk category
pub fn select_allocation(category: RiskCategory) -> AllocationPlan {
    match category {
        RiskCategory::Conservative => AllocationPlan::from_pairs(&[
            (BONDS_CASH, 0.6),
            (HIGH_DIVIDEND_ETF, 0.3),
            (BROAD_MARKET_ETF, 0.1),
        ]),
        RiskCategory::Balanced => AllocationPlan::from_pairs(&[
            (BROAD_MARKET_ETF, 0.5),
            (HIGH_DIVIDEND_ETF, 0.3),
            (BONDS_CASH, 0.2),
        ]),
        RiskCategory::Aggressive => AllocationPlan::from_pairs(&[
            (BROAD_MARKET_ETF, 0.7),
            (HIGH_DIVIDEND_ETF, 0.2),
            (OTHER_GROWTH, 0.1),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weights_sum_to_one() {
        for category in RiskCategory::ALL {
            let plan = select_allocation(category);
            assert_abs_diff_eq!(plan.total_weight(), 1.0, epsilon = 1e-9);
            assert!(plan.entries().iter().all(|e| (0.0..=1.0).contains(&e.weight)));
        }
    }

    #[test]
    fn test_conservative_plan_order() {
        let plan = select_allocation(RiskCategory::Conservative);
        let labels: Vec<_> = plan.entries().iter().map(|e| e.asset_class).collect();
        assert_eq!(labels, vec![BONDS_CASH, HIGH_DIVIDEND_ETF, BROAD_MARKET_ETF]);
        assert_eq!(plan.entries()[0].weight, 0.6);
    }

    #[test]
    fn test_aggressive_plan() {
        let plan = select_allocation(RiskCategory::Aggressive);
        let pairs: Vec<_> = plan.entries().iter().map(|e| (e.asset_class, e.weight)).collect();
        assert_eq!(
            pairs,
            vec![(BROAD_MARKET_ETF, 0.7), (HIGH_DIVIDEND_ETF, 0.2), (OTHER_GROWTH, 0.1)]
        );
    }

    #[test]
    fn test_split_monthly_investment() {
        let plan = select_allocation(RiskCategory::Balanced);
        let split = plan.split(5000.0);
        assert_eq!(split.len(), 3);
        assert_abs_diff_eq!(split[0].1, 2500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(split.iter().map(|(_, v)| v).sum::<f64>(), 5000.0, epsilon = 1e-9);
    }
}
