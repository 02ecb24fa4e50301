mod fixtures;

use simulation::strength::{cohesion_bonus, player_strength, team_strength};
use simulation::{Role, Side, Tier};

fn approx(left: f64, right: f64) {
    assert!((left - right).abs() < 1e-9, "{} != {}", left, right);
}

#[test]
fn positional_bonus_only_on_preferred_side() {
    let duelist = fixtures::player("duelist", Role::Duelist, 80);
    let sentinel = fixtures::player("sentinel", Role::Sentinel, 80);
    let flex = fixtures::player("flex", Role::Flex, 80);

    approx(player_strength(&duelist, Side::Attack), 88.0);
    approx(player_strength(&duelist, Side::Defense), 80.0);
    approx(player_strength(&sentinel, Side::Attack), 80.0);
    approx(player_strength(&sentinel, Side::Defense), 88.0);
    approx(player_strength(&flex, Side::Attack), 80.0);
}

#[test]
fn uniform_team_strength() {
    let team = fixtures::uniform_team("Even", 80);

    approx(cohesion_bonus(team.players()), 8.0);
    approx(team_strength(&team, Side::Attack), 89.6);
    approx(team_strength(&team, Side::Defense), 89.6);
}

#[test]
fn tiers_use_their_midpoint() {
    let team = fixtures::tier_team("Tiers", Tier::B);

    // 82 everywhere, one player per side gets the bonus.
    approx(team_strength(&team, Side::Attack), (82.0 * 4.0 + 82.0 * 1.1) / 5.0 + 8.2);
}

#[test]
fn stronger_roster_is_favoured() {
    let strong = fixtures::uniform_team("Strong", 90);
    let weak = fixtures::uniform_team("Weak", 70);

    let prob = simulation::tactical::round_probability(&strong, &weak, Side::Attack);
    assert!(prob > 0.5 && prob < 1.0, "{}", prob);

    let mirrored = simulation::tactical::round_probability(&weak, &strong, Side::Defense);
    approx(prob + mirrored, 1.0);
}
