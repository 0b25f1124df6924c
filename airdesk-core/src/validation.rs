use airdesk_shared::{ClassSeatAvailability, Flight, NewFlight, NewSeatAvailability};
use crate::{CoreResult, RegistryError};

/// Turn a caller draft into a complete flight, rejecting the first absent field
pub fn validate_flight(draft: NewFlight) -> CoreResult<Flight> {
    Ok(Flight {
        id: draft.id.ok_or(RegistryError::MissingField("id"))?,
        name: draft.name.ok_or(RegistryError::MissingField("name"))?,
        airline: draft.airline.ok_or(RegistryError::MissingField("airline"))?,
        source: draft.source.ok_or(RegistryError::MissingField("source"))?,
        destination: draft.destination.ok_or(RegistryError::MissingField("destination"))?,
        seat_availabilities: draft
            .seat_availabilities
            .ok_or(RegistryError::MissingField("seatAvailabilities"))?,
    })
}

pub fn validate_availability(draft: Option<NewSeatAvailability>) -> CoreResult<ClassSeatAvailability> {
    let draft = draft.ok_or_else(|| RegistryError::InvalidInput("seat availability is absent".to_string()))?;

    Ok(ClassSeatAvailability {
        class_type: draft.class_type.ok_or(RegistryError::MissingField("classType"))?,
        available_seats: draft
            .available_seats
            .ok_or(RegistryError::MissingField("availableSeats"))?,
        booked_seats: draft
            .booked_seats
            .ok_or(RegistryError::MissingField("bookedSeats"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdesk_shared::Seat;

    #[test]
    fn test_empty_flight_rejected_on_id_first() {
        let result = validate_flight(NewFlight::default());
        assert_eq!(result.unwrap_err(), RegistryError::MissingField("id"));
    }

    #[test]
    fn test_flight_missing_seat_list_rejected() {
        let draft = NewFlight {
            id: Some("AI-1".to_string()),
            name: Some("AI-1".to_string()),
            airline: Some("AIRINDIA".to_string()),
            source: Some("AHMEDABAD".to_string()),
            destination: Some("JAIPUR".to_string()),
            seat_availabilities: None,
        };
        assert_eq!(
            validate_flight(draft).unwrap_err(),
            RegistryError::MissingField("seatAvailabilities")
        );
    }

    #[test]
    fn test_availability_checks() {
        assert!(matches!(validate_availability(None), Err(RegistryError::InvalidInput(_))));
        assert_eq!(
            validate_availability(Some(NewSeatAvailability::default())).unwrap_err(),
            RegistryError::MissingField("classType")
        );

        let partial = NewSeatAvailability {
            class_type: Some("BUSINESS".to_string()),
            available_seats: Some(vec![Seat::new("1", 2000.0)]),
            booked_seats: None,
        };
        assert_eq!(
            validate_availability(Some(partial)).unwrap_err(),
            RegistryError::MissingField("bookedSeats")
        );
    }

    #[test]
    fn test_empty_seat_lists_are_present_not_absent() {
        let draft = NewSeatAvailability {
            class_type: Some("ECONOMY".to_string()),
            available_seats: Some(vec![]),
            booked_seats: Some(vec![]),
        };
        let availability = validate_availability(Some(draft)).unwrap();
        assert_eq!(availability.class_type, "ECONOMY");
    }
}
