//! Resolution of a single elimination between two alive players.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Player, Side, Slot};

pub const SUPPORT_BONUS: f64 = 1.15;

/// Snapshot of the alive rosters a duel is fought in.
#[derive(Debug, Clone, Copy)]
pub struct DuelState<'a> {
    pub alive_a: &'a [&'a Player],
    pub alive_b: &'a [&'a Player],
    pub attacking: Slot,
    /// No kill has happened yet this round.
    pub opening: bool,
}

/// A player addressed by slot and position in that slot's alive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    pub slot: Slot,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelOutcome {
    pub winner: Fighter,
    pub loser: Fighter,
}

impl<'a> DuelState<'a> {
    pub fn alive(&self, slot: Slot) -> &'a [&'a Player] {
        match slot {
            Slot::A => self.alive_a,
            Slot::B => self.alive_b,
        }
    }

    pub fn side_of(&self, slot: Slot) -> Side {
        if slot == self.attacking {
            Side::Attack
        } else {
            Side::Defense
        }
    }

    pub fn player(&self, fighter: Fighter) -> &'a Player {
        self.alive(fighter.slot)[fighter.index]
    }
}

/// Picks an initiator and an opponent and resolves who survives.
///
/// Returns `None` when one side has nobody left to fight.
pub fn resolve_duel<R>(state: &DuelState<'_>, rng: &mut R) -> Option<DuelOutcome>
where
    R: Rng + ?Sized,
{
    let initiator = select_initiator(state, rng)?;
    let opponent = select_opponent(state, initiator.slot, rng)?;

    Some(calculate_duel_outcome(state, initiator, opponent, rng))
}

/// Weighted draw over every alive player of both sides.
pub fn select_initiator<R>(state: &DuelState<'_>, rng: &mut R) -> Option<Fighter>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<(Fighter, u32)> = [Slot::A, Slot::B]
        .into_iter()
        .flat_map(|slot| {
            let side = state.side_of(slot);
            state
                .alive(slot)
                .iter()
                .enumerate()
                .map(move |(index, p)| (Fighter { slot, index }, p.role.profile().duel_weight(side)))
        })
        .collect();

    let last = candidates.last()?.0;
    let total: u32 = candidates.iter().map(|(_, w)| w).sum();

    let threshold = rng.gen::<f64>() * f64::from(total);
    let mut current = 0.0;
    for (fighter, weight) in candidates.iter() {
        current += f64::from(*weight);
        if threshold < current {
            return Some(*fighter);
        }
    }

    Some(last)
}

pub fn select_opponent<R>(state: &DuelState<'_>, initiator: Slot, rng: &mut R) -> Option<Fighter>
where
    R: Rng + ?Sized,
{
    let slot = initiator.other();
    let indices: Vec<usize> = (0..state.alive(slot).len()).collect();

    indices
        .choose(rng)
        .map(|index| Fighter { slot, index: *index })
}

pub fn calculate_duel_outcome<R>(
    state: &DuelState<'_>,
    initiator: Fighter,
    opponent: Fighter,
    rng: &mut R,
) -> DuelOutcome
where
    R: Rng + ?Sized,
{
    let initiator_wins = DuelOutcome {
        winner: initiator,
        loser: opponent,
    };
    let opponent_wins = DuelOutcome {
        winner: opponent,
        loser: initiator,
    };

    if state.opening {
        return if rng.gen::<f64>() < 0.5 {
            initiator_wins
        } else {
            opponent_wins
        };
    }

    let first = state.player(initiator);
    let second = state.player(opponent);

    let first_hs = first.stats.headshot_rate.roll(rng);
    if rng.gen::<f64>() < first_hs / 200.0 {
        tracing::trace!(killer = %first.name, "Instant kill");
        return initiator_wins;
    }
    let second_hs = second.stats.headshot_rate.roll(rng);
    if rng.gen::<f64>() < second_hs / 200.0 {
        tracing::trace!(killer = %second.name, "Instant kill");
        return opponent_wins;
    }

    let first_aim = first.stats.aim.roll(rng);
    let mut first_score = first_aim * rng.gen::<f64>();
    let second_aim = second.stats.aim.roll(rng);
    let mut second_score = second_aim * rng.gen::<f64>();

    first_score *= support_multiplier(state, initiator, rng);
    second_score *= support_multiplier(state, opponent, rng);

    let first_team = state.alive(initiator.slot).len();
    let second_team = state.alive(opponent.slot).len();
    if first_team < second_team {
        first_score *= clutch_multiplier(first, rng);
    }
    if second_team < first_team {
        second_score *= clutch_multiplier(second, rng);
    }

    if first_score > second_score {
        initiator_wins
    } else {
        opponent_wins
    }
}

/// Bonus from the first other living teammate of `fighter`, 1.0 when they
/// stand alone.
pub fn support_multiplier<R>(state: &DuelState<'_>, fighter: Fighter, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let supporter = state
        .alive(fighter.slot)
        .iter()
        .enumerate()
        .find(|(index, _)| *index != fighter.index)
        .map(|(_, p)| *p);

    match supporter {
        Some(supporter) => {
            let support = supporter.stats.support.roll(rng);
            if rng.gen::<f64>() < support / 150.0 {
                SUPPORT_BONUS
            } else {
                1.0
            }
        }
        None => 1.0,
    }
}

pub fn clutch_multiplier<R>(player: &Player, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let clutch = player.stats.clutch.roll(rng);
    1.0 + (clutch / 100.0) * rng.gen::<f64>()
}
