use pretty_assertions::assert_eq;
use simulation::map::{MapContext, MapModel, MapResult, MapSimulator};
use simulation::{SeriesConfig, SimulationError, Team, ValidationError};
use tracing_test::traced_test;

fn team_json(name: &str) -> serde_json::Value {
    let roles = ["Duelist", "Initiator", "Controller", "Sentinel", "Flex"];
    let players: Vec<serde_json::Value> = roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            serde_json::json!({
                "name": format!("{}{}", name, i + 1),
                "role": role,
                "nationality": "BR",
                "age": 20 + i,
                "stats": { "aim": "A", "hs": 28, "support": 80, "clutch": "B" },
            })
        })
        .collect();

    serde_json::json!({ "name": name, "players": players })
}

fn matchup() -> backend::Matchup {
    let json = serde_json::json!({
        "teamA": team_json("Paper Rex"),
        "teamB": team_json("DRX"),
    });

    backend::Matchup::from_reader(json.to_string().as_bytes()).unwrap()
}

/// Fails every map.
struct Broken;

impl MapSimulator for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn simulate_map(
        &self,
        _context: &MapContext,
        _team_a: &Team,
        _team_b: &Team,
        _rng: &mut dyn rand::RngCore,
    ) -> Result<MapResult, SimulationError> {
        Err(ValidationError::EmptyTeamName.into())
    }
}

#[test]
fn matchup_parses_catalog_teams() {
    let matchup = matchup();

    assert_eq!(matchup.team_a.name(), "Paper Rex");
    assert_eq!(matchup.team_b.players()[4].name, "DRX5");
}

#[test]
fn matchup_with_short_roster_is_rejected() {
    let mut short = team_json("Short");
    short["players"].as_array_mut().unwrap().pop();
    let json = serde_json::json!({ "teamA": short, "teamB": team_json("DRX") });

    let result = backend::Matchup::from_reader(json.to_string().as_bytes());

    assert!(matches!(result, Err(backend::HostError::ParseMatchup(_))));
}

#[test]
fn missing_matchup_file() {
    let result = backend::Matchup::load(std::path::Path::new("/nonexistent/matchup.json"));

    assert!(matches!(result, Err(backend::HostError::ReadMatchup { .. })));
}

#[test]
#[traced_test]
fn stream_ends_with_series_summary() {
    let matchup = matchup();
    let config = SeriesConfig::new(backend::SeriesFormat::Bo5.games_to_win());
    let mut rng = simulation::seeded_rng(2024);

    let events: Vec<common::SeriesEvent> =
        backend::stream_series(&config, &matchup, MapModel::Tactical.simulator(), &mut rng)
            .unwrap()
            .collect();

    let (last, maps) = events.split_last().unwrap();
    let summary = match last {
        common::SeriesEvent::Series(summary) => summary,
        other => panic!("Expected a series record, got {:?}", other),
    };

    assert_eq!(summary.maps_played as usize, maps.len());
    assert_eq!(summary.games_to_win, 3);
    assert_eq!(summary.team_a_score.max(summary.team_b_score), 3);
    assert_eq!(summary.scoreboard.teams[0].name, "Paper Rex");
    assert_eq!(summary.scoreboard.teams[1].players.len(), 5);

    for (index, event) in maps.iter().enumerate() {
        match event {
            common::SeriesEvent::Map(map) => {
                assert_eq!(map.map_number as usize, index + 1);
                assert_eq!(map.rounds.len() as u32, map.score_a + map.score_b);
            }
            other => panic!("Expected a map record, got {:?}", other),
        }
    }

    assert!(logs_contain("Series finished"));
}

#[test]
fn duel_model_streams_kill_events() {
    let matchup = matchup();
    let config = SeriesConfig::new(1);
    let mut rng = simulation::seeded_rng(3);

    let events: Vec<common::SeriesEvent> =
        backend::stream_series(&config, &matchup, MapModel::Duel.simulator(), &mut rng)
            .unwrap()
            .collect();

    assert_eq!(events.len(), 2);
    let map = match &events[0] {
        common::SeriesEvent::Map(map) => map,
        other => panic!("Expected a map record, got {:?}", other),
    };
    assert!(map.rounds.iter().all(|r| r.events.len() >= 5));
}

#[test]
fn failing_map_emits_error_record() {
    let matchup = matchup();
    let config = SeriesConfig::new(2);
    let mut rng = simulation::seeded_rng(0);

    let events: Vec<common::SeriesEvent> = backend::stream_series(&config, &matchup, &Broken, &mut rng)
        .unwrap()
        .collect();

    assert_eq!(
        events,
        vec![common::SeriesEvent::Error {
            message: "Rebuilding a record: Team name must not be empty".to_owned(),
        }]
    );
}

#[test]
fn invalid_config_is_rejected_before_streaming() {
    let matchup = matchup();
    let mut rng = simulation::seeded_rng(0);

    let result = backend::stream_series(
        &SeriesConfig::new(0),
        &matchup,
        MapModel::Tactical.simulator(),
        &mut rng,
    );

    assert!(matches!(
        result,
        Err(backend::HostError::Validation(ValidationError::InvalidGamesToWin))
    ));
}

#[test]
fn records_are_tagged() {
    let event = common::SeriesEvent::Error {
        message: "boom".to_owned(),
    };

    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        serde_json::json!({ "type": "error", "message": "boom" })
    );
}

#[test]
fn matchup_against_itself_is_rejected() {
    let json = serde_json::json!({
        "teamA": team_json("DRX"),
        "teamB": team_json("DRX"),
    });
    let matchup = backend::Matchup::from_reader(json.to_string().as_bytes()).unwrap();
    let mut rng = simulation::seeded_rng(0);

    let result = backend::stream_series(
        &SeriesConfig::new(1),
        &matchup,
        MapModel::Duel.simulator(),
        &mut rng,
    );

    assert!(matches!(
        result,
        Err(backend::HostError::Validation(ValidationError::DuplicateTeam(_)))
    ));
}
