//! Match simulation engine for 5v5 tactical shooter series.
//!
//! Every operation is a pure function of its input records and an explicit
//! random number generator, so a fixed seed replays a simulation exactly:
//!
//! - [`duel::resolve_duel`] / [`round::simulate_round`]: individual combat
//! - [`strength::team_strength`]: roster strength for one side
//! - [`tactical::simulate_tactical_map`] and [`skirmish::simulate_duel_map`]:
//!   the two map models, both available through [`map::MapSimulator`]
//! - [`economy::decide_buy_strategy`] / [`buy::execute_buy_phase`]: buy phase
//! - [`series::simulate_series`]: best-of-N series

mod error;
pub use error::{SimulationError, ValidationError};

mod role;
pub use role::{Role, RoleProfile, FALLBACK_PROFILE, ROLE_PROFILES};

mod roster;
pub use roster::{
    Accolades, Loadout, Mvps, Player, SecondPlaces, Shield, Side, Slot, Stat, StatBlock, Team, Tier,
    Titles, Weapon, TEAM_SIZE,
};

pub mod buy;
pub mod duel;
pub mod economy;
pub mod map;
pub mod round;
pub mod series;
pub mod skirmish;
pub mod strength;
pub mod tactical;

pub use map::{MapContext, MapModel, MapResult, MapSimulator, PlayerMapStats, RoundRecord};
pub use round::{KillEvent, RoundResult};
pub use series::{Series, SeriesConfig, SeriesResult};

/// Seedable generator used wherever a reproducible simulation is needed.
pub type SimRng = rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> SimRng {
    <SimRng as rand::SeedableRng>::seed_from_u64(seed)
}
