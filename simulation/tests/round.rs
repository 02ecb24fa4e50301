mod fixtures;

use pretty_assertions::assert_eq;
use simulation::round::simulate_round;
use simulation::{Slot, TEAM_SIZE};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn round_ends_with_one_side_eliminated() {
    let team_a = fixtures::loud();
    let team_b = fixtures::sentinels();

    for seed in 0..200 {
        let mut rng = simulation::seeded_rng(seed);
        let attacking = if seed % 2 == 0 { Slot::A } else { Slot::B };

        let result = simulate_round(&team_a, &team_b, attacking, &mut rng);

        let (winner, loser) = match result.winner {
            Slot::A => (&team_a, &team_b),
            Slot::B => (&team_b, &team_a),
        };
        let loser_deaths = result
            .kill_feed
            .iter()
            .filter(|k| k.victim_team == loser.name())
            .count();

        assert_eq!(loser_deaths, TEAM_SIZE);
        assert!(!result.survivors.is_empty());
        assert_eq!(
            result.kill_feed.len(),
            TEAM_SIZE + (TEAM_SIZE - result.survivors.len())
        );
        assert!(result
            .survivors
            .iter()
            .all(|name| winner.players().iter().any(|p| &p.name == name)));
        assert!(result.kill_feed.iter().all(|k| k.killer_team != k.victim_team));
    }

    assert!(logs_contain("Round finished"));
}

#[test]
fn nobody_dies_twice() {
    let team_a = fixtures::uniform_team("Alpha", 75);
    let team_b = fixtures::uniform_team("Bravo", 85);
    let mut rng = simulation::seeded_rng(99);

    for _ in 0..100 {
        let result = simulate_round(&team_a, &team_b, Slot::B, &mut rng);

        let mut victims: Vec<&str> = result.kill_feed.iter().map(|k| k.victim.as_str()).collect();
        let total = victims.len();
        victims.sort_unstable();
        victims.dedup();
        assert_eq!(victims.len(), total);

        for kill in result.kill_feed.iter() {
            assert!(!result.survivors.contains(&kill.victim));
        }
    }
}

#[test]
fn same_seed_same_round() {
    let team_a = fixtures::loud();
    let team_b = fixtures::sentinels();

    let first = simulate_round(&team_a, &team_b, Slot::A, &mut simulation::seeded_rng(42));
    let second = simulate_round(&team_a, &team_b, Slot::A, &mut simulation::seeded_rng(42));

    assert_eq!(first, second);
}
