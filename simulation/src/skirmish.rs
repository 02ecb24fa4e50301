//! Duel based map model.
//!
//! Every round runs a buy phase for both teams and is then fought out duel by
//! duel through [`simulate_round`]. Credits, loss streaks and surviving
//! weapons carry over between rounds; player statistics are counted from the
//! kill feeds.

use rand::Rng;

use crate::buy::execute_buy_phase;
use crate::map::{self, MapContext, MapResult, MapSimulator, PlayerMapStats, RoundRecord, Scoreline};
use crate::round::{simulate_round, RoundResult};
use crate::{Player, SimulationError, Side, Slot, Team, ValidationError};

pub const STARTING_CREDITS: u32 = 800;
pub const OVERTIME_CREDITS: u32 = 5000;
pub const WIN_REWARD: u32 = 3000;
pub const LOSS_REWARD: u32 = 1900;
pub const LOSS_REWARD_STEP: u32 = 500;
pub const MAX_LOSS_STEPS: u32 = 2;
pub const KILL_REWARD: u32 = 200;
pub const MAX_CREDITS: u32 = 9000;

#[derive(Debug, Clone, Copy, Default)]
pub struct DuelMapSimulator;

impl MapSimulator for DuelMapSimulator {
    fn name(&self) -> &'static str {
        "duel"
    }

    fn simulate_map(
        &self,
        context: &MapContext,
        team_a: &Team,
        team_b: &Team,
        rng: &mut dyn rand::RngCore,
    ) -> Result<MapResult, SimulationError> {
        simulate_duel_map(context, team_a, team_b, rng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pistol,
    Regular,
    Overtime,
}

struct DuelMap {
    team_a: Team,
    team_b: Team,
    scoreline: Scoreline,
    rounds: Vec<RoundRecord>,
}

#[tracing::instrument(skip(team_a, team_b, rng), fields(team_a = team_a.name(), team_b = team_b.name()))]
pub fn simulate_duel_map<R>(
    context: &MapContext,
    team_a: &Team,
    team_b: &Team,
    rng: &mut R,
) -> Result<MapResult, SimulationError>
where
    R: Rng + ?Sized,
{
    // Kill feeds are attributed by team name.
    team_a.check_opponent(team_b)?;

    let mut state = DuelMap {
        team_a: team_a.clone(),
        team_b: team_b.clone(),
        scoreline: Scoreline::default(),
        rounds: Vec::new(),
    };

    for round in 1..=map::REGULATION_ROUNDS {
        if state.scoreline.regulation_decided() {
            break;
        }

        let phase = if round == 1 || round == map::HALF_LENGTH + 1 {
            Phase::Pistol
        } else {
            Phase::Regular
        };
        state.play_round(round, map::regulation_side(round), phase, rng)?;
    }

    if state.scoreline.needs_overtime() {
        tracing::debug!("Regulation tied, going to overtime");

        let mut ot_round = 0;
        while !state.scoreline.overtime_decided() {
            let number = state.scoreline.played() + 1;
            state.play_round(number, map::overtime_side(ot_round), Phase::Overtime, rng)?;
            ot_round += 1;
        }
    }

    let winner = state.scoreline.leader();
    tracing::debug!(
        ?winner,
        score_a = state.scoreline.score_a,
        score_b = state.scoreline.score_b,
        "Map finished"
    );

    Ok(MapResult {
        map: context.map.clone(),
        winner,
        score_a: state.scoreline.score_a,
        score_b: state.scoreline.score_b,
        team_a_stats: tally(team_a, &state.rounds),
        team_b_stats: tally(team_b, &state.rounds),
        rounds: state.rounds,
    })
}

impl DuelMap {
    fn play_round<R>(&mut self, number: u32, side_a: Side, phase: Phase, rng: &mut R) -> Result<(), SimulationError>
    where
        R: Rng + ?Sized,
    {
        let _round_guard = tracing::debug_span!("Round", number, ?phase).entered();

        let (team_a, team_b) = match phase {
            Phase::Pistol => (reset_for_half(&self.team_a)?, reset_for_half(&self.team_b)?),
            Phase::Overtime => (
                grant_overtime_credits(&self.team_a)?,
                grant_overtime_credits(&self.team_b)?,
            ),
            Phase::Regular => (self.team_a.clone(), self.team_b.clone()),
        };

        let is_pistol = phase == Phase::Pistol;
        let bought_a = execute_buy_phase(&team_a, is_pistol)?;
        let bought_b = execute_buy_phase(&team_b, is_pistol)?;

        let attacking = match side_a {
            Side::Attack => Slot::A,
            Side::Defense => Slot::B,
        };
        let result = simulate_round(&bought_a.team, &bought_b.team, attacking, rng);

        self.team_a = settle(&bought_a.team, result.winner == Slot::A, &result)?;
        self.team_b = settle(&bought_b.team, result.winner == Slot::B, &result)?;

        self.scoreline.record(result.winner);
        self.rounds.push(RoundRecord {
            number,
            winner: result.winner,
            kill_feed: result.kill_feed,
        });

        Ok(())
    }
}

fn reset_for_half(team: &Team) -> Result<Team, ValidationError> {
    let players = team
        .players()
        .iter()
        .map(|p| Player {
            credits: Some(STARTING_CREDITS),
            loadout: None,
            alive: None,
            ..p.clone()
        })
        .collect();

    team.with_players(players)?.with_economy(Some(0), None)
}

fn grant_overtime_credits(team: &Team) -> Result<Team, ValidationError> {
    let players = team
        .players()
        .iter()
        .map(|p| Player {
            credits: Some(OVERTIME_CREDITS),
            ..p.clone()
        })
        .collect();

    team.with_players(players)
}

/// Pays out round rewards and records who is still standing.
fn settle(team: &Team, won: bool, result: &RoundResult) -> Result<Team, ValidationError> {
    let previous_streak = team.loss_streak().unwrap_or(0);
    let reward = if won {
        WIN_REWARD
    } else {
        LOSS_REWARD + LOSS_REWARD_STEP * previous_streak.min(MAX_LOSS_STEPS)
    };

    let players: Vec<Player> = team
        .players()
        .iter()
        .map(|p| {
            let kills = result
                .kill_feed
                .iter()
                .filter(|k| k.killer == p.name && k.killer_team == team.name())
                .count() as u32;
            let survived = won && result.survivors.contains(&p.name);

            let credits = p
                .credits
                .unwrap_or(0)
                .saturating_add(reward)
                .saturating_add(KILL_REWARD * kills)
                .min(MAX_CREDITS);

            Player {
                credits: Some(credits),
                alive: Some(survived),
                ..p.clone()
            }
        })
        .collect();

    let streak = if won { 0 } else { previous_streak + 1 };
    let econ = players.iter().filter_map(|p| p.credits).sum();

    team.with_players(players)?
        .with_economy(Some(streak), Some(econ))
}

fn tally(team: &Team, rounds: &[RoundRecord]) -> Vec<PlayerMapStats> {
    team.players()
        .iter()
        .map(|p| {
            let events = rounds.iter().flat_map(|r| r.kill_feed.iter());
            let kills = events
                .clone()
                .filter(|k| k.killer == p.name && k.killer_team == team.name())
                .count();
            let deaths = events
                .filter(|k| k.victim == p.name && k.victim_team == team.name())
                .count();

            PlayerMapStats {
                name: p.name.clone(),
                kills: kills as u32,
                deaths: deaths as u32,
            }
        })
        .collect()
}
