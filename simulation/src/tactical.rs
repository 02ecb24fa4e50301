//! Probabilistic map model.
//!
//! Each round is a single Bernoulli draw on the relative strength of the two
//! rosters for the sides they play that round. Opening rounds of each half
//! are adjusted for momentum, player statistics are synthesised afterwards
//! and never feed back into the round outcomes.

use rand::Rng;

use crate::map::{self, MapContext, MapResult, MapSimulator, PlayerMapStats, RoundRecord, Scoreline};
use crate::strength::{player_strength, team_strength};
use crate::{SimulationError, Side, Slot, Team};

pub const MOMENTUM_SHIFT: f64 = 0.25;
pub const MOMENTUM_CEILING: f64 = 0.95;
pub const MOMENTUM_FLOOR: f64 = 0.05;
/// Chance of team A taking the bonus round after winning both opening rounds.
pub const STREAK_HOLDER_ODDS: f64 = 0.35;

pub const BASE_KILLS_PER_ROUND: f64 = 0.75;
pub const BASE_DEATHS_PER_ROUND: f64 = 0.70;
pub const WINNER_PERFORMANCE: f64 = 1.1;
pub const LOSER_PERFORMANCE: f64 = 0.9;
pub const STAT_NOISE: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct TacticalMapSimulator;

impl MapSimulator for TacticalMapSimulator {
    fn name(&self) -> &'static str {
        "tactical"
    }

    fn simulate_map(
        &self,
        context: &MapContext,
        team_a: &Team,
        team_b: &Team,
        rng: &mut dyn rand::RngCore,
    ) -> Result<MapResult, SimulationError> {
        Ok(simulate_tactical_map(context, team_a, team_b, rng))
    }
}

/// Chance of team A winning a round with A playing `side_a`.
pub fn round_probability(team_a: &Team, team_b: &Team, side_a: Side) -> f64 {
    let strength_a = team_strength(team_a, side_a);
    let strength_b = team_strength(team_b, side_a.other());

    strength_a / (strength_a + strength_b)
}

/// Applies the pistol-round momentum and the bonus-round anti-streak rules
/// to the base probability of team A winning `round`.
pub fn adjust_for_momentum(round: u32, base: f64, scoreline: &Scoreline) -> f64 {
    let mut prob = base;

    let pistol = match round {
        2 => Some(1),
        14 => Some(map::HALF_LENGTH + 1),
        _ => None,
    };
    if let Some(winner) = pistol.and_then(|r| scoreline.winner_of(r)) {
        prob = match winner {
            Slot::A => (prob + MOMENTUM_SHIFT).min(MOMENTUM_CEILING),
            Slot::B => (prob - MOMENTUM_SHIFT).max(MOMENTUM_FLOOR),
        };
        tracing::trace!(round, ?winner, prob, "Pistol momentum");
    }

    let opening = match round {
        3 => Some(1),
        15 => Some(map::HALF_LENGTH + 1),
        _ => None,
    };
    if let Some(first) = opening {
        let streak = scoreline
            .winner_of(first)
            .zip(scoreline.winner_of(first + 1))
            .filter(|(a, b)| a == b)
            .map(|(a, _)| a);

        if let Some(holder) = streak {
            prob = match holder {
                Slot::A => STREAK_HOLDER_ODDS,
                Slot::B => 1.0 - STREAK_HOLDER_ODDS,
            };
            tracing::trace!(round, ?holder, prob, "Bonus round");
        }
    }

    prob
}

#[tracing::instrument(skip(team_a, team_b, rng), fields(team_a = team_a.name(), team_b = team_b.name()))]
pub fn simulate_tactical_map<R>(
    context: &MapContext,
    team_a: &Team,
    team_b: &Team,
    rng: &mut R,
) -> MapResult
where
    R: Rng + ?Sized,
{
    let mut scoreline = Scoreline::default();

    for round in 1..=map::REGULATION_ROUNDS {
        if scoreline.regulation_decided() {
            break;
        }

        let base = round_probability(team_a, team_b, map::regulation_side(round));
        let prob = adjust_for_momentum(round, base, &scoreline);

        let winner = if rng.gen::<f64>() < prob { Slot::A } else { Slot::B };
        scoreline.record(winner);
    }

    if scoreline.needs_overtime() {
        tracing::debug!("Regulation tied, going to overtime");

        let mut ot_round = 0;
        while !scoreline.overtime_decided() {
            let prob = round_probability(team_a, team_b, map::overtime_side(ot_round));

            let winner = if rng.gen::<f64>() < prob { Slot::A } else { Slot::B };
            scoreline.record(winner);
            ot_round += 1;
        }
    }

    let winner = scoreline.leader();
    tracing::debug!(?winner, score_a = scoreline.score_a, score_b = scoreline.score_b, "Map finished");

    let team_a_stats = synthesize_player_stats(team_a, scoreline.score_a, scoreline.score_b, rng);
    let team_b_stats = synthesize_player_stats(team_b, scoreline.score_b, scoreline.score_a, rng);

    MapResult {
        map: context.map.clone(),
        winner,
        score_a: scoreline.score_a,
        score_b: scoreline.score_b,
        team_a_stats,
        team_b_stats,
        rounds: scoreline
            .winners
            .iter()
            .zip(1..)
            .map(|(winner, number)| RoundRecord {
                number,
                winner: *winner,
                kill_feed: Vec::new(),
            })
            .collect(),
    }
}

/// Decorative kill/death lines derived from player strength and the map
/// outcome.
pub fn synthesize_player_stats<R>(
    team: &Team,
    rounds_won: u32,
    rounds_lost: u32,
    rng: &mut R,
) -> Vec<PlayerMapStats>
where
    R: Rng + ?Sized,
{
    let total_rounds = f64::from(rounds_won + rounds_lost);
    let performance = if rounds_won > rounds_lost {
        WINNER_PERFORMANCE
    } else {
        LOSER_PERFORMANCE
    };

    team.players()
        .iter()
        .map(|p| {
            // Neutral side for every player.
            let strength = player_strength(p, Side::Attack);

            let kill_modifier = (strength - 80.0) / 100.0 + 1.0;
            let expected_kills = total_rounds * BASE_KILLS_PER_ROUND * kill_modifier * performance;
            let kills = (expected_kills + noise(rng)).round_ties_even().max(0.0);

            let death_modifier = 1.0 - (strength - 80.0) / 100.0;
            let expected_deaths =
                total_rounds * BASE_DEATHS_PER_ROUND * death_modifier * (1.0 / performance);
            let deaths = (expected_deaths + noise(rng))
                .round_ties_even()
                .max(0.0)
                .min(total_rounds);

            PlayerMapStats {
                name: p.name.clone(),
                kills: kills as u32,
                deaths: deaths as u32,
            }
        })
        .collect()
}

fn noise<R>(rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    (rng.gen::<f64>() - 0.5) * STAT_NOISE
}
