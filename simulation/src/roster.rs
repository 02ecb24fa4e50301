//! Player and team records shared by every simulation component.
//!
//! Records are values. Components receive them by reference and hand back
//! freshly built records; a [`Team`] can only be obtained through
//! [`Team::new`], which enforces the five player roster on every rebuild.

use rand::Rng;

use crate::{Role, ValidationError};

pub const TEAM_SIZE: usize = 5;

/// One of the two contenders in a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Attack,
    Defense,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Self::Attack => Self::Defense,
            Self::Defense => Self::Attack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    pub fn range(&self) -> std::ops::RangeInclusive<u8> {
        match self {
            Self::S => 90..=99,
            Self::A => 85..=89,
            Self::B => 80..=84,
            Self::C => 70..=79,
            Self::D => 60..=69,
        }
    }

    pub fn midpoint(&self) -> f64 {
        let range = self.range();
        (f64::from(*range.start()) + f64::from(*range.end())) / 2.0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(ValidationError::UnknownTier(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Tier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tier> for &'static str {
    fn from(value: Tier) -> Self {
        value.as_str()
    }
}

/// A stat is either a concrete number or a coarse tier letter.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Numeric(u8),
    Tier(Tier),
}

impl Stat {
    pub const MAX: u8 = 100;

    /// Scalar used for strength math, tiers resolve to their midpoint.
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Numeric(v) => f64::from(*v),
            Self::Tier(t) => t.midpoint(),
        }
    }

    /// One-off concrete value, tiers draw uniformly from their range.
    pub fn roll<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Numeric(v) => f64::from(*v),
            Self::Tier(t) => f64::from(rng.gen_range(t.range())),
        }
    }
}

impl From<u8> for Stat {
    fn from(value: u8) -> Self {
        Self::Numeric(value)
    }
}

impl From<Tier> for Stat {
    fn from(value: Tier) -> Self {
        Self::Tier(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatBlock {
    pub aim: Stat,
    #[serde(rename = "hs")]
    pub headshot_rate: Stat,
    pub support: Stat,
    pub clutch: Stat,
}

impl StatBlock {
    pub fn new<A, H, S, C>(aim: A, headshot_rate: H, support: S, clutch: C) -> Self
    where
        A: Into<Stat>,
        H: Into<Stat>,
        S: Into<Stat>,
        C: Into<Stat>,
    {
        Self {
            aim: aim.into(),
            headshot_rate: headshot_rate.into(),
            support: support.into(),
            clutch: clutch.into(),
        }
    }

    fn entries(&self) -> [(&'static str, &Stat); 4] {
        [
            ("aim", &self.aim),
            ("hs", &self.headshot_rate),
            ("support", &self.support),
            ("clutch", &self.clutch),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Weapon {
    Vandal,
    Phantom,
    Bulldog,
    Spectre,
    Sheriff,
    Ghost,
    Classic,
}

impl Weapon {
    pub fn cost(&self) -> u32 {
        match self {
            Self::Vandal | Self::Phantom => 2900,
            Self::Bulldog => 2050,
            Self::Spectre => 1600,
            Self::Sheriff => 800,
            Self::Ghost => 500,
            Self::Classic => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vandal => "vandal",
            Self::Phantom => "phantom",
            Self::Bulldog => "bulldog",
            Self::Spectre => "spectre",
            Self::Sheriff => "sheriff",
            Self::Ghost => "ghost",
            Self::Classic => "classic",
        }
    }
}

impl std::str::FromStr for Weapon {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vandal" => Ok(Self::Vandal),
            "phantom" => Ok(Self::Phantom),
            "bulldog" => Ok(Self::Bulldog),
            "spectre" => Ok(Self::Spectre),
            "sheriff" => Ok(Self::Sheriff),
            "ghost" => Ok(Self::Ghost),
            "classic" => Ok(Self::Classic),
            other => Err(ValidationError::UnknownWeapon(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Weapon {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weapon> for &'static str {
    fn from(value: Weapon) -> Self {
        value.as_str()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Shield {
    #[default]
    None,
    Light,
    Heavy,
}

impl Shield {
    pub fn cost(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Light => 400,
            Self::Heavy => 1000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Heavy => "heavy",
        }
    }
}

impl std::str::FromStr for Shield {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "light" => Ok(Self::Light),
            "heavy" => Ok(Self::Heavy),
            other => Err(ValidationError::UnknownShield(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Shield {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shield> for &'static str {
    fn from(value: Shield) -> Self {
        value.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Loadout {
    #[serde(default)]
    pub primary: Option<Weapon>,
    pub secondary: Weapon,
    #[serde(default)]
    pub shield: Shield,
    #[serde(default)]
    pub abilities: bool,
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            primary: None,
            secondary: Weapon::Classic,
            shield: Shield::None,
            abilities: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Titles {
    pub kickoff: u32,
    pub league: u32,
    pub masters: u32,
    pub champions: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SecondPlaces {
    pub masters: u32,
    pub champions: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Mvps {
    pub kickoff: u32,
    pub league: u32,
    pub masters: u32,
    pub champions: u32,
}

/// Career record shown by the catalog, carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accolades {
    pub titles: Titles,
    pub second_places: SecondPlaces,
    pub mvps: Mvps,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub nationality: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accolades: Option<Accolades>,
    pub stats: StatBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loadout: Option<Loadout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
}

impl Player {
    pub fn new<N, C>(name: N, role: Role, nationality: C, age: u32, stats: StatBlock) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            role,
            nationality: nationality.into(),
            age,
            photo: None,
            accolades: None,
            stats,
            credits: None,
            loadout: None,
            alive: None,
        }
    }

    pub fn with_credits(self, credits: u32) -> Self {
        Self {
            credits: Some(credits),
            ..self
        }
    }

    pub fn with_loadout(self, loadout: Loadout) -> Self {
        Self {
            loadout: Some(loadout),
            ..self
        }
    }

    pub fn with_alive(self, alive: bool) -> Self {
        Self {
            alive: Some(alive),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }

        for (stat, value) in self.stats.entries() {
            if let Stat::Numeric(v) = value {
                if *v > Stat::MAX {
                    return Err(ValidationError::StatOutOfRange {
                        player: self.name.clone(),
                        stat,
                        value: *v,
                    });
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TeamRecord", into = "TeamRecord")]
pub struct Team {
    name: String,
    players: [Player; TEAM_SIZE],
    loss_streak: Option<u32>,
    current_econ: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamRecord {
    name: String,
    players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    loss_streak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_econ: Option<u32>,
}

impl TryFrom<TeamRecord> for Team {
    type Error = ValidationError;

    fn try_from(value: TeamRecord) -> Result<Self, Self::Error> {
        Team::new(value.name, value.players).map(|team| Self {
            loss_streak: value.loss_streak,
            current_econ: value.current_econ,
            ..team
        })
    }
}

impl From<Team> for TeamRecord {
    fn from(value: Team) -> Self {
        Self {
            name: value.name,
            players: value.players.into(),
            loss_streak: value.loss_streak,
            current_econ: value.current_econ,
        }
    }
}

impl Team {
    pub fn new<N>(name: N, players: Vec<Player>) -> Result<Self, ValidationError>
    where
        N: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyTeamName);
        }

        let count = players.len();
        let players: [Player; TEAM_SIZE] =
            players
                .try_into()
                .map_err(|_| ValidationError::WrongPlayerCount {
                    team: name.clone(),
                    count,
                    expected: TEAM_SIZE,
                })?;

        let mut seen = std::collections::HashSet::new();
        for player in players.iter() {
            player.validate()?;

            if !seen.insert(player.name.as_str()) {
                return Err(ValidationError::DuplicatePlayer {
                    team: name.clone(),
                    player: player.name.clone(),
                });
            }
        }

        Ok(Self {
            name,
            players,
            loss_streak: None,
            current_econ: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn loss_streak(&self) -> Option<u32> {
        self.loss_streak
    }

    pub fn current_econ(&self) -> Option<u32> {
        self.current_econ
    }

    /// Rebuilds the team around a new roster, keeping the economy counters.
    pub fn with_players(&self, players: Vec<Player>) -> Result<Self, ValidationError> {
        Team::new(self.name.clone(), players).map(|team| Self {
            loss_streak: self.loss_streak,
            current_econ: self.current_econ,
            ..team
        })
    }

    /// Two rosters can only meet if their names tell them apart.
    pub fn check_opponent(&self, other: &Team) -> Result<(), ValidationError> {
        if self.name == other.name {
            return Err(ValidationError::DuplicateTeam(self.name.clone()));
        }
        Ok(())
    }

    pub fn with_economy(
        &self,
        loss_streak: Option<u32>,
        current_econ: Option<u32>,
    ) -> Result<Self, ValidationError> {
        Team::new(self.name.clone(), self.players.to_vec()).map(|team| Self {
            loss_streak,
            current_econ,
            ..team
        })
    }
}
