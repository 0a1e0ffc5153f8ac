use crate::error::{Result, TripError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trip request sent to the itinerary generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// Destination city or region, free text
    pub destination: String,
    /// Unique, trimmed interests in the order they were added
    pub interests: Vec<String>,
    /// Number of days to plan
    pub days: u32,
}

/// Envelope returned by the itinerary generation service on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripResponse {
    /// Raw multi-day itinerary text
    pub itinerary: String,
}

/// Bounds applied to a trip request before it is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripLimits {
    pub min_days: u32,
    pub max_days: u32,
    pub require_destination: bool,
}

impl Default for TripLimits {
    fn default() -> Self {
        Self {
            min_days: 1,
            max_days: 20,
            require_destination: true,
        }
    }
}

impl TripLimits {
    pub fn days_in_range(&self, days: u32) -> bool {
        (self.min_days..=self.max_days).contains(&days)
    }

    pub fn days_message(&self) -> String {
        format!(
            "Please enter a valid number of days (between {}-{})",
            self.min_days, self.max_days
        )
    }

    pub fn validate(&self, destination: &str, days: u32) -> Result<()> {
        if !self.days_in_range(days) {
            return Err(TripError::Validation(self.days_message()));
        }
        if self.require_destination && destination.trim().is_empty() {
            return Err(TripError::Validation(
                "Please enter a destination".to_string(),
            ));
        }
        Ok(())
    }
}

impl TripRequest {
    pub fn builder() -> TripRequestBuilder {
        TripRequestBuilder::default()
    }
}

/// Collects form input for a [`TripRequest`].
#[derive(Debug, Clone, Default)]
pub struct TripRequestBuilder {
    destination: String,
    interests: Vec<String>,
    days: u32,
}

impl TripRequestBuilder {
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn interest(mut self, interest: &str) -> Self {
        self.add_interest(interest);
        self
    }

    pub fn interests<'a>(mut self, interests: impl IntoIterator<Item = &'a str>) -> Self {
        for interest in interests {
            self.add_interest(interest);
        }
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Add an interest, returning whether it was accepted.
    ///
    /// Blank and duplicate interests are ignored.
    pub fn add_interest(&mut self, interest: &str) -> bool {
        let trimmed = interest.trim();
        if trimmed.is_empty() || self.interests.iter().any(|existing| existing == trimmed) {
            return false;
        }
        self.interests.push(trimmed.to_string());
        true
    }

    pub fn remove_interest(&mut self, interest: &str) {
        self.interests.retain(|existing| existing != interest);
    }

    pub fn clear_interests(&mut self) {
        self.interests.clear();
    }

    pub fn current_interests(&self) -> &[String] {
        &self.interests
    }

    pub fn current_destination(&self) -> &str {
        &self.destination
    }

    pub fn current_days(&self) -> u32 {
        self.days
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = days;
    }

    pub fn build(self, limits: &TripLimits) -> Result<TripRequest> {
        limits.validate(&self.destination, self.days)?;
        Ok(TripRequest {
            destination: self.destination,
            interests: self.interests,
            days: self.days,
        })
    }
}
