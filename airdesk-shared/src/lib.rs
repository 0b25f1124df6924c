pub mod constants;
pub mod models;

pub use constants::{Airline, ClassType, Location};
pub use models::{ClassSeatAvailability, Flight, NewFlight, NewSeatAvailability, SearchResponse, Seat};
