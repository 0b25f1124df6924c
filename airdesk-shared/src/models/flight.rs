use serde::{Deserialize, Serialize};
use crate::models::seat::ClassSeatAvailability;

/// A registered flight with its per-class seat pools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub name: String,
    pub airline: String,
    pub source: String,
    pub destination: String,
    pub seat_availabilities: Vec<ClassSeatAvailability>,
}

/// Flight as handed in by a caller; `None` marks an absent field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub id: Option<String>,
    pub name: Option<String>,
    pub airline: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub seat_availabilities: Option<Vec<ClassSeatAvailability>>,
}

impl From<Flight> for NewFlight {
    fn from(flight: Flight) -> Self {
        Self {
            id: Some(flight.id),
            name: Some(flight.name),
            airline: Some(flight.airline),
            source: Some(flight.source),
            destination: Some(flight.destination),
            seat_availabilities: Some(flight.seat_availabilities),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_serializes_camel_case() {
        let flight = Flight {
            id: "AI-101".to_string(),
            name: "Morning Express".to_string(),
            airline: "AIRINDIA".to_string(),
            source: "AHMEDABAD".to_string(),
            destination: "JAIPUR".to_string(),
            seat_availabilities: vec![],
        };
        let value = serde_json::to_value(&flight).unwrap();
        assert_eq!(value["seatAvailabilities"], serde_json::json!([]));
        assert_eq!(value["destination"], "JAIPUR");
    }

    #[test]
    fn test_complete_flight_converts_to_full_draft() {
        let flight = Flight {
            id: "6E-7".to_string(),
            name: "Evening".to_string(),
            airline: "INDIGO".to_string(),
            source: "DELHI".to_string(),
            destination: "PUNE".to_string(),
            seat_availabilities: vec![],
        };
        let draft = NewFlight::from(flight);
        assert_eq!(draft.id.as_deref(), Some("6E-7"));
        assert_eq!(draft.seat_availabilities, Some(vec![]));
    }
}
