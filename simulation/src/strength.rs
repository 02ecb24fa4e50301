use crate::{Player, Role, Side, Team};

/// Multiplier for a player fighting from their preferred side.
pub const POSITIONAL_BONUS: f64 = 1.10;

/// Reserved for map specific adjustments, not modelled yet.
pub const MAP_BONUS: f64 = 0.0;

pub fn player_strength(player: &Player, side: Side) -> f64 {
    let stats = &player.stats;
    let raw = (stats.aim.resolve() + stats.clutch.resolve() + stats.support.resolve()) / 3.0;

    match (side, player.role) {
        (Side::Attack, Role::Duelist) | (Side::Defense, Role::Sentinel) => raw * POSITIONAL_BONUS,
        _ => raw,
    }
}

/// Average player strength on the given side plus the cohesion bonus.
pub fn team_strength(team: &Team, side: Side) -> f64 {
    let players = team.players();
    let count = players.len() as f64;

    let average = players
        .iter()
        .map(|p| player_strength(p, side))
        .sum::<f64>()
        / count;

    average + cohesion_bonus(players) + MAP_BONUS
}

pub fn cohesion_bonus(players: &[Player]) -> f64 {
    let count = players.len() as f64;
    let support = players.iter().map(|p| p.stats.support.resolve()).sum::<f64>() / count;
    let clutch = players.iter().map(|p| p.stats.clutch.resolve()).sum::<f64>() / count;

    (support + clutch) / 20.0
}
