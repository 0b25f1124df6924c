pub mod registry;
pub mod repository;
pub mod validation;

pub use registry::FlightRegistry;
pub use repository::FlightRepository;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Flight already registered: {0}")]
    DuplicateFlight(String),

    #[error("Class {class_type} already exists on flight {flight_id}")]
    DuplicateClass {
        flight_id: String,
        class_type: String,
    },

    #[error("Class {class_type} not found on flight {flight_id}")]
    ClassNotFound {
        flight_id: String,
        class_type: String,
    },

    #[error("No seats available in class {class_type} on flight {flight_id}")]
    NoSeatsAvailable {
        flight_id: String,
        class_type: String,
    },
}

pub type CoreResult<T> = Result<T, RegistryError>;
