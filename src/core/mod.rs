pub mod events;
pub mod planner;

pub use events::PlannerEvent;
pub use planner::TripPlanner;
