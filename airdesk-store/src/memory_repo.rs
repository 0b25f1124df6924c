use std::sync::Arc;

use airdesk_core::{CoreResult, FlightRegistry, FlightRepository};
use airdesk_shared::{Flight, NewFlight, NewSeatAvailability, SearchResponse, Seat};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Flight repository backed by a single process-local registry.
///
/// One lock guards the whole registry, so operations are serialized: at most
/// one reader or writer touches it at a time.
#[derive(Clone, Default)]
pub struct InMemoryFlightRepository {
    registry: Arc<Mutex<FlightRegistry>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.registry.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.lock().await.is_empty()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn add_flight(&self, flight: NewFlight) -> CoreResult<()> {
        self.registry.lock().await.add(flight)
    }

    async fn add_seat_availability(
        &self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        self.registry
            .lock()
            .await
            .add_seat_availability(flight_id, availability)
    }

    async fn update_seat_availability(
        &self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        self.registry
            .lock()
            .await
            .update_seat_availability(flight_id, availability)
    }

    async fn remove_seat_availability(
        &self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        self.registry
            .lock()
            .await
            .remove_seat_availability(flight_id, availability)
    }

    async fn book_seat(&self, flight_id: &str, class_type: Option<&str>) -> CoreResult<Seat> {
        self.registry.lock().await.book_seat(flight_id, class_type)
    }

    async fn search(
        &self,
        source: Option<&str>,
        destination: Option<&str>,
    ) -> CoreResult<SearchResponse> {
        Ok(self.registry.lock().await.search(source, destination))
    }

    async fn get_flight(&self, flight_id: &str) -> CoreResult<Option<Flight>> {
        Ok(self.registry.lock().await.get(flight_id).cloned())
    }
}
