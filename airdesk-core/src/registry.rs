use std::collections::{HashMap, HashSet};

use airdesk_shared::{ClassSeatAvailability, Flight, NewFlight, NewSeatAvailability, SearchResponse, Seat};
use tracing::{debug, info};

use crate::validation::{validate_availability, validate_flight};
use crate::{CoreResult, RegistryError};

/// In-memory flight registry, keyed by flight id.
///
/// Flights are kept in insertion order so that search results come back in
/// the order flights were registered. Flights are never removed, so the
/// positions held by `index` stay valid for the registry's lifetime.
pub struct FlightRegistry {
    flights: Vec<Flight>,
    index: HashMap<String, usize>,
}

impl FlightRegistry {
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a new flight
    pub fn add(&mut self, flight: impl Into<NewFlight>) -> CoreResult<()> {
        self.try_add(flight.into())
            .inspect_err(|e| debug!("Rejected flight: {}", e))
    }

    /// Append a seat pool for a class the flight does not have yet
    pub fn add_seat_availability(
        &mut self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        self.try_add_seat_availability(flight_id, availability)
            .inspect_err(|e| debug!("Rejected seat availability add on {}: {}", flight_id, e))
    }

    /// Replace the seat pool of an existing class, keeping its position
    pub fn update_seat_availability(
        &mut self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        self.try_update_seat_availability(flight_id, availability)
            .inspect_err(|e| debug!("Rejected seat availability update on {}: {}", flight_id, e))
    }

    /// Drop the seat pool of an existing class
    pub fn remove_seat_availability(
        &mut self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        self.try_remove_seat_availability(flight_id, availability)
            .inspect_err(|e| debug!("Rejected seat availability removal on {}: {}", flight_id, e))
    }

    /// Book the first available seat of a class.
    ///
    /// Seats are taken strictly from the front of `available_seats` and
    /// appended to `booked_seats`; cost plays no part in the choice.
    pub fn book_seat(&mut self, flight_id: &str, class_type: Option<&str>) -> CoreResult<Seat> {
        self.try_book_seat(flight_id, class_type)
            .inspect_err(|e| debug!("Rejected booking on {}: {}", flight_id, e))
    }

    /// Direct flights matching the given endpoints.
    ///
    /// An empty string counts as an absent endpoint. With both endpoints
    /// absent the result is always empty, even when the registry holds
    /// flights.
    pub fn search(&self, source: Option<&str>, destination: Option<&str>) -> SearchResponse {
        let source = source.filter(|s| !s.is_empty());
        let destination = destination.filter(|d| !d.is_empty());

        if source.is_none() && destination.is_none() {
            return SearchResponse::empty();
        }

        let results: Vec<Flight> = self
            .flights
            .iter()
            .filter(|flight| match (source, destination) {
                (Some(src), Some(dst)) => flight.source == src && flight.destination == dst,
                (Some(src), None) => flight.source == src,
                (None, Some(dst)) => flight.destination == dst,
                (None, None) => false,
            })
            .cloned()
            .collect();

        debug!(
            "Search {:?} -> {:?} matched {} flight(s)",
            source,
            destination,
            results.len()
        );

        SearchResponse::new(results)
    }

    pub fn get(&self, flight_id: &str) -> Option<&Flight> {
        self.index.get(flight_id).map(|&pos| &self.flights[pos])
    }

    /// All flights in insertion order
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    fn try_add(&mut self, draft: NewFlight) -> CoreResult<()> {
        let flight = validate_flight(draft)?;

        if self.index.contains_key(&flight.id) {
            return Err(RegistryError::DuplicateFlight(flight.id));
        }

        let mut seen = HashSet::new();
        for availability in &flight.seat_availabilities {
            if !seen.insert(availability.class_type.as_str()) {
                return Err(RegistryError::DuplicateClass {
                    flight_id: flight.id.clone(),
                    class_type: availability.class_type.clone(),
                });
            }
        }

        info!("Registered flight {} ({} -> {})", flight.id, flight.source, flight.destination);
        self.index.insert(flight.id.clone(), self.flights.len());
        self.flights.push(flight);
        Ok(())
    }

    fn try_add_seat_availability(
        &mut self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        let availability = validate_availability(availability)?;
        let flight = self.get_flight_mut(flight_id)?;

        if find_class(flight, &availability.class_type).is_some() {
            return Err(RegistryError::DuplicateClass {
                flight_id: flight_id.to_string(),
                class_type: availability.class_type,
            });
        }

        debug!("Added class {} to flight {}", availability.class_type, flight_id);
        flight.seat_availabilities.push(availability);
        Ok(())
    }

    fn try_update_seat_availability(
        &mut self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        let availability = validate_availability(availability)?;
        let flight = self.get_flight_mut(flight_id)?;
        let pos = require_class(flight, &availability.class_type)?;

        debug!("Updated class {} on flight {}", availability.class_type, flight_id);
        flight.seat_availabilities[pos] = availability;
        Ok(())
    }

    fn try_remove_seat_availability(
        &mut self,
        flight_id: &str,
        availability: Option<NewSeatAvailability>,
    ) -> CoreResult<()> {
        let availability = validate_availability(availability)?;
        let flight = self.get_flight_mut(flight_id)?;
        let pos = require_class(flight, &availability.class_type)?;

        debug!("Removed class {} from flight {}", availability.class_type, flight_id);
        flight.seat_availabilities.remove(pos);
        Ok(())
    }

    fn try_book_seat(&mut self, flight_id: &str, class_type: Option<&str>) -> CoreResult<Seat> {
        let flight = self.get_flight_mut(flight_id)?;
        let class_type = class_type
            .ok_or_else(|| RegistryError::InvalidInput("class type is absent".to_string()))?;
        let pos = require_class(flight, class_type)?;
        let pool = &mut flight.seat_availabilities[pos];

        if pool.available_seats.is_empty() {
            return Err(RegistryError::NoSeatsAvailable {
                flight_id: flight_id.to_string(),
                class_type: class_type.to_string(),
            });
        }

        let seat = pool.available_seats.remove(0);
        pool.booked_seats.push(seat.clone());

        info!("Booked seat {} in {} on flight {}", seat.id, class_type, flight_id);
        Ok(seat)
    }

    fn get_flight_mut(&mut self, flight_id: &str) -> CoreResult<&mut Flight> {
        let pos = *self
            .index
            .get(flight_id)
            .ok_or_else(|| RegistryError::FlightNotFound(flight_id.to_string()))?;
        Ok(&mut self.flights[pos])
    }
}

impl Default for FlightRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn find_class(flight: &Flight, class_type: &str) -> Option<usize> {
    flight
        .seat_availabilities
        .iter()
        .position(|availability: &ClassSeatAvailability| availability.class_type == class_type)
}

fn require_class(flight: &Flight, class_type: &str) -> CoreResult<usize> {
    find_class(flight, class_type).ok_or_else(|| RegistryError::ClassNotFound {
        flight_id: flight.id.clone(),
        class_type: class_type.to_string(),
    })
}
