mod fetch_plan;
mod offset_planner;
mod window;


pub use fetch_plan::{CountedSource, FetchPlan};
pub use offset_planner::OffsetPlanner;
pub use window::PhysicalWindow;
