#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Team {team:?} has {count} players, expected {expected}")]
    WrongPlayerCount {
        team: String,
        count: usize,
        expected: usize,
    },
    #[error("Both teams are named {0:?}")]
    DuplicateTeam(String),
    #[error("Team name must not be empty")]
    EmptyTeamName,
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    #[error("Team {team:?} lists player {player:?} more than once")]
    DuplicatePlayer { team: String, player: String },
    #[error("Stat {stat} of player {player:?} is {value}, expected a value in 0..=100")]
    StatOutOfRange {
        player: String,
        stat: &'static str,
        value: u8,
    },
    #[error("Unknown tier {0:?}")]
    UnknownTier(String),
    #[error("Unknown role {0:?}")]
    UnknownRole(String),
    #[error("Unknown weapon {0:?}")]
    UnknownWeapon(String),
    #[error("Unknown shield {0:?}")]
    UnknownShield(String),
    #[error("Games to win must be at least 1")]
    InvalidGamesToWin,
}

/// Failure of a simulation step.
///
/// Validated inputs cannot make the models fail on their own, the only source
/// is a record that is rebuilt inside a step and no longer validates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Rebuilding a record: {0}")]
    Validation(#[from] ValidationError),
}
