use async_trait::async_trait;
use airdesk_shared::{Flight, NewFlight, NewSeatAvailability, SearchResponse, Seat};
use crate::CoreResult;

/// Repository trait for flight inventory access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn add_flight(&self, flight: NewFlight) -> CoreResult<()>;

    async fn add_seat_availability(
        &self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()>;

    async fn update_seat_availability(
        &self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()>;

    async fn remove_seat_availability(
        &self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()>;

    /// Book the first available seat of a class
    async fn book_seat(&self, flight_id: &str, class_type: Option<&str>) -> CoreResult<Seat>;

    async fn search(
        &self,
        source: Option<&str>,
        destination: Option<&str>,
    ) -> CoreResult<SearchResponse>;

    async fn get_flight(&self, flight_id: &str) -> CoreResult<Option<Flight>>;
}
