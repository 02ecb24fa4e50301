#![allow(dead_code)]

use simulation::{Player, Role, Stat, StatBlock, Team, Tier};

pub const ROLES: [Role; 5] = [
    Role::Duelist,
    Role::Initiator,
    Role::Controller,
    Role::Sentinel,
    Role::Flex,
];

pub fn player(name: &str, role: Role, stat: u8) -> Player {
    Player::new(name, role, "BR", 22, StatBlock::new(stat, 25u8, stat, stat))
}

/// Five players, one per role, every stat set to `stat`.
pub fn uniform_team(name: &str, stat: u8) -> Team {
    let players = ROLES
        .iter()
        .enumerate()
        .map(|(i, role)| player(&format!("{}{}", name, i + 1), *role, stat))
        .collect();

    Team::new(name, players).unwrap()
}

pub fn tier_team(name: &str, tier: Tier) -> Team {
    let players = ROLES
        .iter()
        .enumerate()
        .map(|(i, role)| {
            Player::new(
                format!("{}{}", name, i + 1),
                *role,
                "KR",
                20,
                StatBlock::new(tier, Stat::Numeric(30), tier, tier),
            )
        })
        .collect();

    Team::new(name, players).unwrap()
}

pub fn with_credits(team: &Team, credits: u32) -> Team {
    let players = team
        .players()
        .iter()
        .cloned()
        .map(|p| p.with_credits(credits))
        .collect();

    team.with_players(players).unwrap()
}

pub fn sentinels() -> Team {
    tier_team("Sentinels", Tier::A)
}

pub fn loud() -> Team {
    uniform_team("LOUD", 84)
}
