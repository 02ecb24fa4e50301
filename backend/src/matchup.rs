use crate::HostError;

/// The two rosters of a series, as handed over by the catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub team_a: simulation::Team,
    pub team_b: simulation::Team,
}

impl Matchup {
    pub fn from_reader<R>(reader: R) -> Result<Self, HostError>
    where
        R: std::io::Read,
    {
        serde_json::from_reader(std::io::BufReader::new(reader)).map_err(HostError::ParseMatchup)
    }

    #[tracing::instrument]
    pub fn load(path: &std::path::Path) -> Result<Self, HostError> {
        let file = std::fs::File::open(path).map_err(|source| HostError::ReadMatchup {
            path: path.to_path_buf(),
            source,
        })?;

        let matchup = Self::from_reader(file)?;
        tracing::info!(
            team_a = matchup.team_a.name(),
            team_b = matchup.team_b.name(),
            "Loaded matchup"
        );

        Ok(matchup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeriesFormat {
    Bo1,
    Bo3,
    Bo5,
}

impl SeriesFormat {
    pub fn games_to_win(&self) -> u32 {
        match self {
            Self::Bo1 => 1,
            Self::Bo3 => 2,
            Self::Bo5 => 3,
        }
    }
}
