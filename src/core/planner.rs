use crate::{
    core::events::PlannerEvent,
    error::{Result, TripError},
    parser,
    services::ItineraryService,
    types::{DayItinerary, TripLimits, TripRequest, TripRequestBuilder},
};
use std::{sync::Arc, time::Duration};
use tokio::{sync::broadcast, time::timeout};
use tracing::{error, info, warn};

pub const DEFAULT_DAYS: u32 = 3;
pub const DEFAULT_LOADING_NOTICE: Duration = Duration::from_secs(8);
const EVENT_CAPACITY: usize = 16;

/// Drives the trip form and the generate round trip for one itinerary screen.
///
/// All form, loading and result state is owned here and only changes through
/// `&mut self`, so a planner can have at most one request in flight.
pub struct TripPlanner {
    service: Arc<dyn ItineraryService>,
    limits: TripLimits,
    loading_notice_after: Duration,
    events: broadcast::Sender<PlannerEvent>,
    form: TripRequestBuilder,
    current_interest: String,
    days_error: bool,
    is_loading: bool,
    error_message: Option<String>,
    show_loading_timeout: bool,
    itinerary: Vec<DayItinerary>,
    show_itinerary: bool,
    current_day: usize,
}

impl std::fmt::Debug for TripPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripPlanner")
            .field("limits", &self.limits)
            .field("form", &self.form)
            .field("is_loading", &self.is_loading)
            .field("error_message", &self.error_message)
            .field("days", &self.itinerary.len())
            .finish_non_exhaustive()
    }
}

impl TripPlanner {
    pub fn new(service: impl ItineraryService + 'static) -> Self {
        Self::from_arc(Arc::new(service))
    }

    pub fn from_arc(service: Arc<dyn ItineraryService>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            service,
            limits: TripLimits::default(),
            loading_notice_after: DEFAULT_LOADING_NOTICE,
            events,
            form: TripRequestBuilder::default().days(DEFAULT_DAYS),
            current_interest: String::new(),
            days_error: false,
            is_loading: false,
            error_message: None,
            show_loading_timeout: false,
            itinerary: Vec::new(),
            show_itinerary: false,
            current_day: 0,
        }
    }

    pub fn with_limits(mut self, limits: TripLimits) -> Self {
        self.limits = limits;
        self.days_error = !limits.days_in_range(self.form.current_days());
        self
    }

    pub fn with_loading_notice_after(mut self, wait: Duration) -> Self {
        self.loading_notice_after = wait;
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlannerEvent> {
        self.events.subscribe()
    }

    // Form input

    pub fn destination(&self) -> &str {
        self.form.current_destination()
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.form.set_destination(destination);
    }

    pub fn clear_destination(&mut self) {
        self.form.set_destination(String::new());
    }

    pub fn interests(&self) -> &[String] {
        self.form.current_interests()
    }

    pub fn current_interest(&self) -> &str {
        &self.current_interest
    }

    pub fn set_current_interest(&mut self, text: impl Into<String>) {
        self.current_interest = text.into();
    }

    /// Commit the pending interest text. The input is cleared either way.
    pub fn add_interest(&mut self) -> bool {
        let pending = std::mem::take(&mut self.current_interest);
        self.form.add_interest(&pending)
    }

    pub fn remove_interest(&mut self, interest: &str) {
        self.form.remove_interest(interest);
    }

    pub fn clear_interests(&mut self) {
        self.form.clear_interests();
    }

    pub fn days(&self) -> u32 {
        self.form.current_days()
    }

    pub fn set_days(&mut self, days: u32) {
        self.form.set_days(days);
        self.days_error = !self.limits.days_in_range(days);
    }

    pub fn increment_days(&mut self) {
        let days = self.days();
        if !self.days_error && days < self.limits.max_days {
            self.set_days(days + 1);
        }
    }

    pub fn decrement_days(&mut self) {
        let days = self.days();
        if !self.days_error && days > self.limits.min_days {
            self.set_days(days - 1);
        }
    }

    pub fn days_error(&self) -> bool {
        self.days_error
    }

    pub fn days_error_message(&self) -> Option<String> {
        self.days_error.then(|| self.limits.days_message())
    }

    pub fn limits(&self) -> &TripLimits {
        &self.limits
    }

    // Status

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn show_loading_timeout(&self) -> bool {
        self.show_loading_timeout
    }

    pub fn can_generate(&self) -> bool {
        !self.days_error
            && !self.is_loading
            && !(self.limits.require_destination && self.destination().trim().is_empty())
    }

    /// Snapshot of the request that `generate` would send.
    pub fn request(&self) -> Result<TripRequest> {
        self.form.clone().build(&self.limits)
    }

    /// Run one request/parse round trip and return the number of parsed days.
    ///
    /// A response with no recognizable days is `Ok(0)`.
    pub async fn generate(&mut self) -> Result<usize> {
        if !self.limits.days_in_range(self.days()) {
            self.days_error = true;
            return Err(TripError::Validation(self.limits.days_message()));
        }

        let request = match self.request() {
            Ok(request) => request,
            Err(err) => {
                self.error_message = Some(err.to_string());
                return Err(err);
            }
        };

        self.is_loading = true;
        self.error_message = None;
        self.show_loading_timeout = false;
        self.publish(PlannerEvent::Started);
        info!(
            target: "tripsight::planner",
            destination = %request.destination,
            days = request.days,
            interests = request.interests.len(),
            "generating itinerary"
        );

        let service = Arc::clone(&self.service);
        let mut call = service.generate_itinerary(&request);
        let outcome = match timeout(self.loading_notice_after, &mut call).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    target: "tripsight::planner",
                    waited_secs = self.loading_notice_after.as_secs_f64(),
                    "itinerary service is slow to respond"
                );
                self.show_loading_timeout = true;
                self.publish(PlannerEvent::SlowResponse);
                call.await
            }
        };

        self.is_loading = false;
        self.show_loading_timeout = false;

        match outcome {
            Ok(response) => {
                let days = parser::parse(&response.itinerary);
                let count = days.len();
                info!(target: "tripsight::planner", days = count, "itinerary ready");

                self.itinerary = days;
                self.current_day = 0;
                self.show_itinerary = true;
                self.publish(PlannerEvent::Completed { days: count });
                Ok(count)
            }
            Err(err) => {
                let message = format!("Error generating itinerary: {err}");
                error!(target: "tripsight::planner", code = err.error_code(), "{}", message);

                self.error_message = Some(message.clone());
                self.publish(PlannerEvent::Failed { message });
                Err(err)
            }
        }
    }

    // Result

    pub fn itinerary(&self) -> &[DayItinerary] {
        &self.itinerary
    }

    pub fn show_itinerary(&self) -> bool {
        self.show_itinerary
    }

    pub fn dismiss_itinerary(&mut self) {
        self.show_itinerary = false;
    }

    pub fn current_day_index(&self) -> usize {
        self.current_day
    }

    pub fn current_day(&self) -> Option<&DayItinerary> {
        self.itinerary.get(self.current_day)
    }

    pub fn next_day(&mut self) -> bool {
        if self.current_day + 1 < self.itinerary.len() {
            self.current_day += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_day(&mut self) -> bool {
        if self.current_day > 0 {
            self.current_day -= 1;
            true
        } else {
            false
        }
    }

    fn publish(&self, event: PlannerEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
