//! Finance Projector - personal budget and investment growth calculator
//!
//! This library provides:
//! - Monthly surplus/deficit from income, fixed expenses and investment
//! - Static asset allocation plans selected by risk category
//! - Monthly compounding growth projections with fixed contributions
//! - A reference table of exchange-traded funds
//! - Report formatting for the CLI and HTTP entry points

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectorError, Result};
pub use assumptions::{RiskCategory, AllocationPlan, select_allocation, REFERENCE_INSTRUMENTS};
pub use projection::{
    compute_monthly_balance, monthly_rate, project, project_growth,
    BalanceStatus, GrowthRow, ProjectionResult,
};
pub use scenario::ProjectionInput;
