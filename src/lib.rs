//! tripsight: request AI-generated travel itineraries and read them back as
//! structured, day-by-day schedules.
//!
//! The generation service answers with loosely formatted text. [`parse`]
//! turns that text into [`DayItinerary`] records without ever failing, and
//! [`TripPlanner`] drives the full request/parse round trip for a screen.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tripsight::{HttpItineraryService, TripPlanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HttpItineraryService::new("http://localhost:8000")?;
//!     let mut planner = TripPlanner::new(service);
//!     planner.set_destination("Kyoto");
//!     planner.set_current_interest("Temples");
//!     planner.add_interest();
//!
//!     planner.generate().await?;
//!     for day in planner.itinerary() {
//!         println!("{} ({} sections)", day.title, day.sections.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod render;
pub mod schemas;
pub mod services;
pub mod types;

pub use auth::{AuthSession, AuthUser, FirebaseIdentityProvider, IdentityProvider, RememberedSession};
pub use config::Config;
pub use self::core::{PlannerEvent, TripPlanner};
pub use error::{Result, TripError};
pub use parser::parse;
pub use services::{ChatItineraryService, HttpItineraryService, ItineraryService};
pub use types::{
    DayItinerary, TimePeriod, TimeSection, TripLimits, TripRequest, TripRequestBuilder,
    TripResponse,
};

#[cfg(feature = "cli")]
pub mod cli;
