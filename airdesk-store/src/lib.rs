pub mod app_config;
pub mod memory_repo;
pub mod seed;

pub use memory_repo::InMemoryFlightRepository;
pub use seed::{load_seed, seed_repository, SeedError, SeedReport};
