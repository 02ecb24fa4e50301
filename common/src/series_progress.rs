use crate::Winner;

/// One line of the NDJSON stream sent to the front end.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesEvent {
    Map(MapProgress),
    Series(SeriesSummary),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapProgress {
    pub map_number: u32,
    pub map: String,
    pub winner: Winner,
    pub score_a: u32,
    pub score_b: u32,
    pub scoreboard: ScoreBoard,
    pub rounds: Vec<MapRound>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub winner: Winner,
    pub team_a_score: u32,
    pub team_b_score: u32,
    pub games_to_win: u32,
    pub maps_played: u32,
    pub scoreboard: ScoreBoard,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreBoard {
    pub teams: Vec<ScoreBoardTeam>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreBoardTeam {
    pub name: String,
    pub players: Vec<ScoreBoardPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreBoardPlayer {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapRound {
    pub number: u32,
    pub winner: Winner,
    pub events: Vec<RoundEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundEvent {
    Killed { attacker: String, died: String },
}
