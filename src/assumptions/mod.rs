//! Fixed assumptions: risk categories, allocation plans and reference instruments

mod risk;
pub mod allocation;
pub mod instruments;

pub use risk::RiskCategory;
pub use allocation::{AllocationEntry, AllocationPlan, select_allocation};
pub use instruments::{ReferenceInstrument, REFERENCE_INSTRUMENTS};
