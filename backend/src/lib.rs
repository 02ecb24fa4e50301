mod error;
pub use error::HostError;

pub mod matchup;
pub use matchup::{Matchup, SeriesFormat};

pub mod stream;
pub use stream::SeriesStream;

/// Validates the series setup and prepares the progress stream for it.
#[tracing::instrument(skip_all, fields(team_a = matchup.team_a.name(), team_b = matchup.team_b.name()))]
pub fn stream_series<'a>(
    config: &simulation::SeriesConfig,
    matchup: &'a Matchup,
    simulator: &'a dyn simulation::MapSimulator,
    rng: &'a mut dyn rand::RngCore,
) -> Result<SeriesStream<'a>, HostError> {
    let series = simulation::Series::new(config, &matchup.team_a, &matchup.team_b, simulator, rng)?;
    tracing::info!(games_to_win = series.games_to_win(), model = simulator.name(), "Streaming series");

    Ok(SeriesStream::new(
        series,
        matchup.team_a.name(),
        matchup.team_b.name(),
    ))
}
