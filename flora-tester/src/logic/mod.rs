pub mod reports;
pub mod scenarios;
pub mod tester;

pub use scenarios::{ALL_SCENARIOS, find_scenario};
pub use tester::*;
