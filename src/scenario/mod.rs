//! Scenario inputs and batch loading

mod input;
pub mod loader;

pub use input::ProjectionInput;
pub use loader::{load_scenarios, load_scenarios_from_reader, BatchScenario};
