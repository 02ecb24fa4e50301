use std::io::Write;

use clap::Parser;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Model {
    Tactical,
    Duel,
}

impl From<Model> for simulation::MapModel {
    fn from(value: Model) -> Self {
        match value {
            Model::Tactical => Self::Tactical,
            Model::Duel => Self::Duel,
        }
    }
}

/// Simulates a series between two teams and streams the progress as NDJSON
/// on stdout.
#[derive(Debug, Parser)]
struct Args {
    /// JSON document with the two fully formed teams (`teamA`, `teamB`)
    #[arg(long, env = "SIM_MATCHUP")]
    matchup: std::path::PathBuf,

    #[arg(long, value_enum, default_value_t = backend::SeriesFormat::Bo3, env = "SIM_FORMAT")]
    format: backend::SeriesFormat,

    /// Bracket label, finals are always played as a best of five
    #[arg(long, env = "SIM_ROUND_NAME")]
    round_name: Option<String>,

    /// Seed for a reproducible run, a random one is drawn and logged otherwise
    #[arg(long, env = "SIM_SEED")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Model::Tactical, env = "SIM_MODEL")]
    model: Model,

    /// Pause between records so a UI can follow along
    #[arg(long, default_value_t = 0, env = "SIM_DELAY_MS")]
    delay_ms: u64,
}

fn main() -> std::process::ExitCode {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("simulation")
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Setting up logging: {:?}", e);
        return std::process::ExitCode::FAILURE;
    }

    let args = Args::parse();
    tracing::info!("Starting...");

    match run(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), backend::HostError> {
    let matchup = backend::Matchup::load(&args.matchup)?;

    let mut config = simulation::SeriesConfig::new(args.format.games_to_win());
    if let Some(round_name) = args.round_name {
        config = config.with_round_name(round_name);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Seeding simulation");
    let mut rng = simulation::seeded_rng(seed);

    let model = simulation::MapModel::from(args.model);
    let stream = backend::stream_series(&config, &matchup, model.simulator(), &mut rng)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for event in stream {
        serde_json::to_writer(&mut out, &event).map_err(backend::HostError::EncodeProgress)?;
        writeln!(out)?;
        out.flush()?;

        if args.delay_ms > 0 {
            std::thread::sleep(std::time::Duration::from_millis(args.delay_ms));
        }
    }

    Ok(())
}
