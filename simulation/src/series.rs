//! Best-of-N orchestration on top of a [`MapSimulator`].

use crate::map::{MapContext, MapResult, MapSimulator};
use crate::{Player, SimulationError, Slot, Team, ValidationError};

/// Games to win in the final stages of a bracket, regardless of the format
/// the caller asked for.
pub const FINALS_GAMES_TO_WIN: u32 = 3;
const FINALS_LABELS: [&str; 2] = ["lower final", "grand final"];

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    pub games_to_win: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_name: Option<String>,
}

impl SeriesConfig {
    pub fn new(games_to_win: u32) -> Self {
        Self {
            games_to_win,
            round_name: None,
        }
    }

    pub fn with_round_name<N>(self, round_name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            round_name: Some(round_name.into()),
            ..self
        }
    }

    pub fn effective_games_to_win(&self) -> u32 {
        let label = self.round_name.as_deref().unwrap_or("").to_lowercase();
        if FINALS_LABELS.iter().any(|finals| label.contains(finals)) {
            FINALS_GAMES_TO_WIN
        } else {
            self.games_to_win
        }
    }

    pub fn max_games(&self) -> u32 {
        self.effective_games_to_win().saturating_mul(2).saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.effective_games_to_win() == 0 {
            return Err(ValidationError::InvalidGamesToWin);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPlayer {
    pub player: Player,
    pub kills: u32,
    pub deaths: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesRoster {
    pub name: String,
    pub players: Vec<SeriesPlayer>,
}

impl SeriesRoster {
    fn new(team: &Team) -> Self {
        Self {
            name: team.name().to_owned(),
            players: team
                .players()
                .iter()
                .map(|p| SeriesPlayer {
                    player: p.clone(),
                    kills: 0,
                    deaths: 0,
                })
                .collect(),
        }
    }

    fn merge(&mut self, stats: &[crate::PlayerMapStats]) {
        for line in stats {
            if let Some(entry) = self.players.iter_mut().find(|p| p.player.name == line.name) {
                entry.kills += line.kills;
                entry.deaths += line.deaths;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResult {
    pub winner: Slot,
    pub team_a_score: u32,
    pub team_b_score: u32,
    pub games_to_win: u32,
    pub team_a: SeriesRoster,
    pub team_b: SeriesRoster,
    pub map_results: Vec<MapResult>,
}

/// A series in progress, yielding each map as soon as it is played.
pub struct Series<'a> {
    games_to_win: u32,
    max_games: u32,
    context: MapContext,
    team_a: &'a Team,
    team_b: &'a Team,
    simulator: &'a dyn MapSimulator,
    rng: &'a mut dyn rand::RngCore,
    wins_a: u32,
    wins_b: u32,
    roster_a: SeriesRoster,
    roster_b: SeriesRoster,
    maps: Vec<MapResult>,
    failed: bool,
}

impl<'a> Series<'a> {
    pub fn new(
        config: &SeriesConfig,
        team_a: &'a Team,
        team_b: &'a Team,
        simulator: &'a dyn MapSimulator,
        rng: &'a mut dyn rand::RngCore,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        team_a.check_opponent(team_b)?;

        let games_to_win = config.effective_games_to_win();
        tracing::debug!(
            games_to_win,
            model = simulator.name(),
            team_a = team_a.name(),
            team_b = team_b.name(),
            "Starting series"
        );

        Ok(Self {
            games_to_win,
            max_games: config.max_games(),
            context: MapContext::default(),
            team_a,
            team_b,
            simulator,
            rng,
            wins_a: 0,
            wins_b: 0,
            roster_a: SeriesRoster::new(team_a),
            roster_b: SeriesRoster::new(team_b),
            maps: Vec::new(),
            failed: false,
        })
    }

    pub fn games_to_win(&self) -> u32 {
        self.games_to_win
    }

    pub fn score(&self) -> (u32, u32) {
        (self.wins_a, self.wins_b)
    }

    pub fn is_finished(&self) -> bool {
        self.failed
            || self.wins_a >= self.games_to_win
            || self.wins_b >= self.games_to_win
            || self.maps.len() as u32 >= self.max_games
    }

    /// Summary over the maps played so far.
    pub fn finish(self) -> SeriesResult {
        let winner = if self.wins_a > self.wins_b {
            Slot::A
        } else {
            Slot::B
        };

        SeriesResult {
            winner,
            team_a_score: self.wins_a,
            team_b_score: self.wins_b,
            games_to_win: self.games_to_win,
            team_a: self.roster_a,
            team_b: self.roster_b,
            map_results: self.maps,
        }
    }
}

impl Iterator for Series<'_> {
    type Item = Result<MapResult, SimulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let number = self.maps.len() + 1;
        let _map_guard = tracing::debug_span!("Map", number).entered();

        let result = match self
            .simulator
            .simulate_map(&self.context, self.team_a, self.team_b, &mut *self.rng)
        {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("Simulating map {}: {:?}", number, e);
                self.failed = true;
                return Some(Err(e));
            }
        };

        self.roster_a.merge(result.stats(Slot::A));
        self.roster_b.merge(result.stats(Slot::B));
        match result.winner {
            Slot::A => self.wins_a += 1,
            Slot::B => self.wins_b += 1,
        };
        self.maps.push(result.clone());

        if self.is_finished() {
            tracing::debug!(wins_a = self.wins_a, wins_b = self.wins_b, "Series decided");
        }

        Some(Ok(result))
    }
}

#[tracing::instrument(skip_all, fields(team_a = team_a.name(), team_b = team_b.name()))]
pub fn simulate_series<'a>(
    config: &SeriesConfig,
    team_a: &'a Team,
    team_b: &'a Team,
    simulator: &'a dyn MapSimulator,
    rng: &'a mut dyn rand::RngCore,
) -> Result<SeriesResult, SimulationError> {
    let mut series = Series::new(config, team_a, team_b, simulator, rng)?;
    for map in series.by_ref() {
        map?;
    }

    Ok(series.finish())
}
