pub mod flight;
pub mod search;
pub mod seat;

pub use flight::{Flight, NewFlight};
pub use search::SearchResponse;
pub use seat::{ClassSeatAvailability, NewSeatAvailability, Seat};
