//! Projection engine: budget balance and compounding growth

mod budget;
mod engine;
mod cashflows;

pub use budget::{compute_monthly_balance, BalanceStatus};
pub use engine::{monthly_rate, project, project_growth};
pub use cashflows::{GrowthRow, ProjectionResult};

/// Number of projection months in a year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest supported horizon in years (360 monthly steps)
pub const MAX_HORIZON_YEARS: u32 = 30;

/// Shortest supported horizon in years
pub const MIN_HORIZON_YEARS: u32 = 1;
