use std::path::Path;

use airdesk_core::FlightRepository;
use airdesk_shared::NewFlight;
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct SeedFile {
    flights: Vec<NewFlight>,
}

/// Outcome of loading a seed into a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    pub rejected: usize,
}

/// Read flights from a JSON document of the form `{ "flights": [...] }`
pub async fn load_seed(path: impl AsRef<Path>) -> Result<Vec<NewFlight>, SeedError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let seed: SeedFile = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    Ok(seed.flights)
}

/// Add every seeded flight, skipping the ones the registry rejects
pub async fn seed_repository(
    repo: &dyn FlightRepository,
    flights: Vec<NewFlight>,
) -> SeedReport {
    let mut report = SeedReport::default();

    for flight in flights {
        let id = flight.id.clone().unwrap_or_else(|| "<no id>".to_string());
        match repo.add_flight(flight).await {
            Ok(()) => report.added += 1,
            Err(e) => {
                warn!("Skipping seeded flight {}: {}", id, e);
                report.rejected += 1;
            }
        }
    }

    info!("Seeded {} flight(s), rejected {}", report.added, report.rejected);
    report
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryFlightRepository;
    use std::io::Write;

    const SEED: &str = r#"
        {
            "flights": [
                {
                    "id": "AI-101",
                    "name": "Morning Express",
                    "airline": "AIRINDIA",
                    "source": "AHMEDABAD",
                    "destination": "BANGALORE",
                    "seatAvailabilities": [
                        {
                            "classType": "BUSINESS",
                            "availableSeats": [{ "id": "1A", "cost": 9500.0 }],
                            "bookedSeats": []
                        }
                    ]
                },
                {
                    "id": "AI-101",
                    "name": "Duplicate",
                    "airline": "AIRINDIA",
                    "source": "AHMEDABAD",
                    "destination": "BANGALORE",
                    "seatAvailabilities": []
                },
                {
                    "id": "6E-22",
                    "name": "No destination",
                    "airline": "INDIGO",
                    "source": "DELHI",
                    "seatAvailabilities": []
                }
            ]
        }
    "#;

    #[tokio::test]
    async fn test_seed_skips_rejected_flights() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let flights = load_seed(file.path()).await.unwrap();
        assert_eq!(flights.len(), 3);
        assert!(flights[2].destination.is_none());

        let repo = InMemoryFlightRepository::new();
        let report = seed_repository(&repo, flights).await;
        assert_eq!(report, SeedReport { added: 1, rejected: 2 });
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_seed_errors() {
        let missing = load_seed("does/not/exist.json").await;
        assert!(matches!(missing, Err(SeedError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"flights\": 42 }").unwrap();
        assert!(matches!(load_seed(file.path()).await, Err(SeedError::Parse { .. })));
    }
}
