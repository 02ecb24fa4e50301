#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Reading matchup {path:?}: {source}")]
    ReadMatchup {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parsing matchup: {0}")]
    ParseMatchup(#[source] serde_json::Error),
    #[error("Encoding progress: {0}")]
    EncodeProgress(#[source] serde_json::Error),
    #[error("Invalid series: {0}")]
    Validation(#[from] simulation::ValidationError),
    #[error("Writing progress: {0}")]
    Output(#[from] std::io::Error),
}
