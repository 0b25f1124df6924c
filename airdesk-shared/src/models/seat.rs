use serde::{Deserialize, Serialize};

/// A single bookable seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub cost: f64,
}

impl Seat {
    pub fn new(id: impl Into<String>, cost: f64) -> Self {
        Self { id: id.into(), cost }
    }
}

/// Seat inventory for one cabin class on one flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSeatAvailability {
    pub class_type: String,
    pub available_seats: Vec<Seat>,
    pub booked_seats: Vec<Seat>,
}

impl ClassSeatAvailability {
    pub fn new(class_type: impl Into<String>, available_seats: Vec<Seat>, booked_seats: Vec<Seat>) -> Self {
        Self {
            class_type: class_type.into(),
            available_seats,
            booked_seats,
        }
    }
}

/// Caller-supplied availability where any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSeatAvailability {
    pub class_type: Option<String>,
    pub available_seats: Option<Vec<Seat>>,
    pub booked_seats: Option<Vec<Seat>>,
}

impl From<ClassSeatAvailability> for NewSeatAvailability {
    fn from(availability: ClassSeatAvailability) -> Self {
        Self {
            class_type: Some(availability.class_type),
            available_seats: Some(availability.available_seats),
            booked_seats: Some(availability.booked_seats),
        }
    }
}
