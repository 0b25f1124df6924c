use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Known values for flight fields. The registry stores these as plain strings
// and never checks them against the lists below.
// ============================================================================

/// Cabin classes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassType {
    Business,
    Economy,
    FirstClass,
    PremiumEconomy,
}

impl ClassType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Business => "BUSINESS",
            ClassType::Economy => "ECONOMY",
            ClassType::FirstClass => "FIRST_CLASS",
            ClassType::PremiumEconomy => "PREMIUM_ECONOMY",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Airline {
    #[serde(rename = "AIRINDIA")]
    AirIndia,
    Indigo,
    #[serde(rename = "SPICEJET")]
    SpiceJet,
    Vistara,
    #[serde(rename = "GOAIR")]
    GoAir,
    #[serde(rename = "AIRASIA")]
    AirAsia,
}

impl Airline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::AirIndia => "AIRINDIA",
            Airline::Indigo => "INDIGO",
            Airline::SpiceJet => "SPICEJET",
            Airline::Vistara => "VISTARA",
            Airline::GoAir => "GOAIR",
            Airline::AirAsia => "AIRASIA",
        }
    }
}

/// Cities served as flight endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    Ahmedabad,
    Bangalore,
    Chennai,
    Delhi,
    Hyderabad,
    Jaipur,
    Kolkata,
    Mumbai,
    Pune,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Ahmedabad => "AHMEDABAD",
            Location::Bangalore => "BANGALORE",
            Location::Chennai => "CHENNAI",
            Location::Delhi => "DELHI",
            Location::Hyderabad => "HYDERABAD",
            Location::Jaipur => "JAIPUR",
            Location::Kolkata => "KOLKATA",
            Location::Mumbai => "MUMBAI",
            Location::Pune => "PUNE",
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
