//! Transport to the itinerary generation service.

pub mod chat_client;
pub mod http_client;
pub mod prompt;

use crate::{
    error::Result,
    types::{TripRequest, TripResponse},
};
use async_trait::async_trait;
use std::sync::Arc;

pub use chat_client::ChatItineraryService;
pub use http_client::HttpItineraryService;

/// Submit a trip request and obtain the raw itinerary text.
#[async_trait]
pub trait ItineraryService: Send + Sync {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripResponse>;
}

#[async_trait]
impl<T: ItineraryService + ?Sized> ItineraryService for Arc<T> {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripResponse> {
        (**self).generate_itinerary(request).await
    }
}

#[async_trait]
impl<T: ItineraryService + ?Sized> ItineraryService for Box<T> {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripResponse> {
        (**self).generate_itinerary(request).await
    }
}
