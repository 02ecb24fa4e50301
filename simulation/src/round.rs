use rand::Rng;

use crate::duel::{self, DuelState};
use crate::{Player, Slot, Team};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillEvent {
    pub killer: String,
    pub victim: String,
    pub killer_team: String,
    pub victim_team: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub winner: Slot,
    pub kill_feed: Vec<KillEvent>,
    /// Names of the players still standing at the end of the round.
    pub survivors: Vec<String>,
}

/// Plays duels until one roster is fully eliminated.
#[tracing::instrument(skip_all, fields(team_a = team_a.name(), team_b = team_b.name(), attacking = ?attacking))]
pub fn simulate_round<R>(team_a: &Team, team_b: &Team, attacking: Slot, rng: &mut R) -> RoundResult
where
    R: Rng + ?Sized,
{
    let mut alive_a: Vec<&Player> = team_a.players().iter().collect();
    let mut alive_b: Vec<&Player> = team_b.players().iter().collect();
    let mut kill_feed: Vec<KillEvent> = Vec::new();

    let team_name = |slot: Slot| match slot {
        Slot::A => team_a.name(),
        Slot::B => team_b.name(),
    };

    while !alive_a.is_empty() && !alive_b.is_empty() {
        let state = DuelState {
            alive_a: &alive_a,
            alive_b: &alive_b,
            attacking,
            opening: kill_feed.is_empty(),
        };

        let outcome = match duel::resolve_duel(&state, rng) {
            Some(o) => o,
            None => break,
        };

        let killer = state.player(outcome.winner);
        let victim = state.player(outcome.loser);
        tracing::trace!(killer = %killer.name, victim = %victim.name, "Kill");

        kill_feed.push(KillEvent {
            killer: killer.name.clone(),
            victim: victim.name.clone(),
            killer_team: team_name(outcome.winner.slot).to_owned(),
            victim_team: team_name(outcome.loser.slot).to_owned(),
        });

        match outcome.loser.slot {
            Slot::A => {
                alive_a.remove(outcome.loser.index);
            }
            Slot::B => {
                alive_b.remove(outcome.loser.index);
            }
        };
    }

    let (winner, survivors) = if alive_a.is_empty() {
        (Slot::B, alive_b)
    } else {
        (Slot::A, alive_a)
    };

    tracing::debug!(?winner, kills = kill_feed.len(), "Round finished");

    RoundResult {
        winner,
        kill_feed,
        survivors: survivors.into_iter().map(|p| p.name.clone()).collect(),
    }
}
