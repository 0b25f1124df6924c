use airdesk_core::FlightRepository;
use airdesk_shared::SearchResponse;
use airdesk_store::app_config::Config;
use airdesk_store::{load_seed, seed_repository, InMemoryFlightRepository};
use anyhow::Context;

/// Build the repository and apply the configured seed file, if any
pub async fn bootstrap(config: &Config) -> anyhow::Result<InMemoryFlightRepository> {
    let repo = InMemoryFlightRepository::new();

    if let Some(path) = &config.registry.seed_file {
        let flights = load_seed(path).await?;
        let report = seed_repository(&repo, flights).await;
        tracing::info!("Registry ready with {} flight(s) from {}", report.added, path);
    } else {
        tracing::info!("No seed file configured, starting with an empty registry");
    }

    Ok(repo)
}

/// Bootstrap, then run the configured search when one is set
pub async fn run(config: &Config) -> anyhow::Result<Option<SearchResponse>> {
    let repo = bootstrap(config).await?;

    if !config.search.is_set() {
        return Ok(None);
    }

    let response = repo
        .search(
            config.search.source.as_deref(),
            config.search.destination.as_deref(),
        )
        .await
        .context("search failed")?;

    tracing::info!(
        "Search {:?} -> {:?} returned {} flight(s)",
        config.search.source,
        config.search.destination,
        response.total_count
    );

    Ok(Some(response))
}
