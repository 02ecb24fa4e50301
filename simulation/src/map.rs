//! Common interface of the map level combat models.

use crate::{KillEvent, SimulationError, Side, Slot, Team};

pub const ROUNDS_TO_WIN: u32 = 13;
pub const HALF_LENGTH: u32 = 12;
pub const REGULATION_ROUNDS: u32 = 2 * HALF_LENGTH;
pub const OVERTIME_MARGIN: u32 = 2;

/// Map identity and tactical selectors handed to a model.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapContext {
    pub map: String,
    pub offensive_play: String,
}

impl Default for MapContext {
    fn default() -> Self {
        Self {
            map: "ascent".to_owned(),
            offensive_play: "Default".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerMapStats {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub number: u32,
    pub winner: Slot,
    pub kill_feed: Vec<KillEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResult {
    pub map: String,
    pub winner: Slot,
    pub score_a: u32,
    pub score_b: u32,
    pub team_a_stats: Vec<PlayerMapStats>,
    pub team_b_stats: Vec<PlayerMapStats>,
    pub rounds: Vec<RoundRecord>,
}

impl MapResult {
    pub fn stats(&self, slot: Slot) -> &[PlayerMapStats] {
        match slot {
            Slot::A => &self.team_a_stats,
            Slot::B => &self.team_b_stats,
        }
    }

    pub fn score(&self, slot: Slot) -> u32 {
        match slot {
            Slot::A => self.score_a,
            Slot::B => self.score_b,
        }
    }

    pub fn total_rounds(&self) -> u32 {
        self.score_a + self.score_b
    }
}

pub trait MapSimulator {
    fn name(&self) -> &'static str;

    fn simulate_map(
        &self,
        context: &MapContext,
        team_a: &Team,
        team_b: &Team,
        rng: &mut dyn rand::RngCore,
    ) -> Result<MapResult, SimulationError>;
}

/// Selects one of the available combat models by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapModel {
    /// Round winners drawn from team strength.
    #[default]
    Tactical,
    /// Every round fought out duel by duel, with a buy phase in between.
    Duel,
}

impl MapModel {
    pub fn simulator(&self) -> &'static (dyn MapSimulator + Send + Sync) {
        static TACTICAL: crate::tactical::TacticalMapSimulator = crate::tactical::TacticalMapSimulator;
        static DUEL: crate::skirmish::DuelMapSimulator = crate::skirmish::DuelMapSimulator;

        match self {
            Self::Tactical => &TACTICAL,
            Self::Duel => &DUEL,
        }
    }
}

impl std::fmt::Display for MapModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.simulator().name())
    }
}

/// Side played by team A in the given 1-based regulation round.
pub fn regulation_side(round: u32) -> Side {
    if round <= HALF_LENGTH {
        Side::Attack
    } else {
        Side::Defense
    }
}

/// Side played by team A in the given 0-based overtime round, swapping
/// every two rounds.
pub fn overtime_side(ot_round: u32) -> Side {
    if (ot_round / 2) % 2 == 0 {
        Side::Attack
    } else {
        Side::Defense
    }
}

/// Running score of a map together with every round winner so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreline {
    pub score_a: u32,
    pub score_b: u32,
    pub winners: Vec<Slot>,
}

impl Scoreline {
    pub fn record(&mut self, winner: Slot) {
        match winner {
            Slot::A => self.score_a += 1,
            Slot::B => self.score_b += 1,
        };
        self.winners.push(winner);
    }

    pub fn played(&self) -> u32 {
        self.score_a + self.score_b
    }

    /// Winner of the given 1-based round, if it was played.
    pub fn winner_of(&self, round: u32) -> Option<Slot> {
        let index = usize::try_from(round.checked_sub(1)?).ok()?;
        self.winners.get(index).copied()
    }

    pub fn regulation_decided(&self) -> bool {
        self.score_a >= ROUNDS_TO_WIN || self.score_b >= ROUNDS_TO_WIN
    }

    pub fn needs_overtime(&self) -> bool {
        self.score_a == HALF_LENGTH && self.score_b == HALF_LENGTH
    }

    pub fn overtime_decided(&self) -> bool {
        self.score_a.abs_diff(self.score_b) >= OVERTIME_MARGIN
    }

    pub fn leader(&self) -> Slot {
        if self.score_a > self.score_b {
            Slot::A
        } else {
            Slot::B
        }
    }
}
