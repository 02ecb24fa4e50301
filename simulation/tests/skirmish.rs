mod fixtures;

use pretty_assertions::assert_eq;
use simulation::map::{MapContext, ROUNDS_TO_WIN};
use simulation::skirmish::simulate_duel_map;
use simulation::{SimulationError, Slot, ValidationError, TEAM_SIZE};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn duel_map_scores_are_valid() {
    let team_a = fixtures::loud();
    let team_b = fixtures::sentinels();
    let context = MapContext {
        map: "bind".to_owned(),
        ..MapContext::default()
    };

    for seed in 0..40 {
        let mut rng = simulation::seeded_rng(seed);
        let result = simulate_duel_map(&context, &team_a, &team_b, &mut rng).unwrap();

        let high = result.score_a.max(result.score_b);
        let low = result.score_a.min(result.score_b);
        if result.total_rounds() > 24 {
            assert_eq!(high - low, 2);
        } else {
            assert_eq!(high, ROUNDS_TO_WIN);
        }
        assert_eq!(result.score(result.winner), high);
        assert_eq!(result.map, "bind");
        assert_eq!(result.rounds.len() as u32, result.total_rounds());
    }

    assert!(logs_contain("Buy decision"));
}

#[test]
fn stats_come_from_the_kill_feed() {
    let team_a = fixtures::uniform_team("Alpha", 80);
    let team_b = fixtures::uniform_team("Bravo", 80);
    let mut rng = simulation::seeded_rng(4);

    let result = simulate_duel_map(&MapContext::default(), &team_a, &team_b, &mut rng).unwrap();

    let kills = |slot: Slot| result.stats(slot).iter().map(|s| s.kills).sum::<u32>();
    let deaths = |slot: Slot| result.stats(slot).iter().map(|s| s.deaths).sum::<u32>();
    let feed_len: usize = result.rounds.iter().map(|r| r.kill_feed.len()).sum();

    assert_eq!(kills(Slot::A), deaths(Slot::B));
    assert_eq!(kills(Slot::B), deaths(Slot::A));
    assert_eq!((kills(Slot::A) + kills(Slot::B)) as usize, feed_len);

    let names: Vec<&str> = result.stats(Slot::A).iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha1", "Alpha2", "Alpha3", "Alpha4", "Alpha5"]);
}

#[test]
fn every_round_is_fought_out() {
    let team_a = fixtures::loud();
    let team_b = fixtures::uniform_team("Fnatic", 70);
    let mut rng = simulation::seeded_rng(31);

    let result = simulate_duel_map(&MapContext::default(), &team_a, &team_b, &mut rng).unwrap();

    for round in result.rounds.iter() {
        let loser = match round.winner {
            Slot::A => team_b.name(),
            Slot::B => team_a.name(),
        };
        let eliminated = round.kill_feed.iter().filter(|k| k.victim_team == loser).count();

        assert_eq!(eliminated, TEAM_SIZE, "round {}", round.number);
        assert!(round.kill_feed.len() < 2 * TEAM_SIZE);
    }
}

#[test]
fn same_seed_same_map() {
    let team_a = fixtures::loud();
    let team_b = fixtures::sentinels();

    let first = simulate_duel_map(
        &MapContext::default(),
        &team_a,
        &team_b,
        &mut simulation::seeded_rng(12),
    );
    let second = simulate_duel_map(
        &MapContext::default(),
        &team_a,
        &team_b,
        &mut simulation::seeded_rng(12),
    );

    assert_eq!(first, second);
}

#[test]
fn same_named_teams_are_rejected() {
    let team_a = fixtures::uniform_team("Mirror", 80);
    let team_b = fixtures::uniform_team("Mirror", 70);
    let mut rng = simulation::seeded_rng(1);

    let result = simulate_duel_map(&MapContext::default(), &team_a, &team_b, &mut rng);

    assert_eq!(
        result,
        Err(SimulationError::Validation(ValidationError::DuplicateTeam(
            "Mirror".to_owned()
        )))
    );
}
