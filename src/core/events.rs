use serde::{Deserialize, Serialize};

/// Progress of a single generate round trip, published to planner subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlannerEvent {
    /// Request submitted to the itinerary service
    Started,
    /// The service has not answered within the loading notice window
    SlowResponse,
    /// Response parsed into the given number of days
    Completed { days: usize },
    /// Request failed; `message` is what the user sees
    Failed { message: String },
}

impl PlannerEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlannerEvent::Completed { .. } | PlannerEvent::Failed { .. })
    }
}
