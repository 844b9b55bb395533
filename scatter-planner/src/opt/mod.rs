pub mod loss;
pub mod planner;
pub mod search;

pub use planner::{ScatterPlanner, plan, plan_with};
