use simulation::{MapResult, Series, SeriesResult, Slot};

/// Turns a [`Series`] into the progress records sent to a client.
///
/// One `map` record per completed map, then a closing `series` record. If a
/// map fails, an `error` record follows the last successful map and the
/// stream ends there.
pub struct SeriesStream<'a> {
    series: Option<Series<'a>>,
    team_a: String,
    team_b: String,
}

impl<'a> SeriesStream<'a> {
    pub fn new(series: Series<'a>, team_a: &str, team_b: &str) -> Self {
        Self {
            series: Some(series),
            team_a: team_a.to_owned(),
            team_b: team_b.to_owned(),
        }
    }
}

impl Iterator for SeriesStream<'_> {
    type Item = common::SeriesEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let series = self.series.as_mut()?;

        match series.next() {
            Some(Ok(map)) => {
                let number = series.score().0 + series.score().1;
                Some(common::SeriesEvent::Map(map_progress(
                    number,
                    &map,
                    &self.team_a,
                    &self.team_b,
                )))
            }
            Some(Err(e)) => {
                tracing::error!("Series aborted: {:?}", e);
                self.series = None;
                Some(common::SeriesEvent::Error {
                    message: e.to_string(),
                })
            }
            None => {
                let result = self.series.take()?.finish();
                tracing::info!(
                    winner = ?result.winner,
                    score_a = result.team_a_score,
                    score_b = result.team_b_score,
                    "Series finished"
                );
                Some(common::SeriesEvent::Series(series_summary(&result)))
            }
        }
    }
}

pub fn winner(slot: Slot) -> common::Winner {
    match slot {
        Slot::A => common::Winner::A,
        Slot::B => common::Winner::B,
    }
}

pub fn map_progress(number: u32, map: &MapResult, team_a: &str, team_b: &str) -> common::MapProgress {
    let board = |name: &str, slot: Slot| common::ScoreBoardTeam {
        name: name.to_owned(),
        players: map
            .stats(slot)
            .iter()
            .map(|p| common::ScoreBoardPlayer {
                name: p.name.clone(),
                kills: p.kills,
                deaths: p.deaths,
            })
            .collect(),
    };

    common::MapProgress {
        map_number: number,
        map: map.map.clone(),
        winner: winner(map.winner),
        score_a: map.score_a,
        score_b: map.score_b,
        scoreboard: common::ScoreBoard {
            teams: vec![board(team_a, Slot::A), board(team_b, Slot::B)],
        },
        rounds: map
            .rounds
            .iter()
            .map(|r| common::MapRound {
                number: r.number,
                winner: winner(r.winner),
                events: r
                    .kill_feed
                    .iter()
                    .map(|k| common::RoundEvent::Killed {
                        attacker: k.killer.clone(),
                        died: k.victim.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn series_summary(result: &SeriesResult) -> common::SeriesSummary {
    let board = |roster: &simulation::series::SeriesRoster| common::ScoreBoardTeam {
        name: roster.name.clone(),
        players: roster
            .players
            .iter()
            .map(|p| common::ScoreBoardPlayer {
                name: p.player.name.clone(),
                kills: p.kills,
                deaths: p.deaths,
            })
            .collect(),
    };

    common::SeriesSummary {
        winner: winner(result.winner),
        team_a_score: result.team_a_score,
        team_b_score: result.team_b_score,
        games_to_win: result.games_to_win,
        maps_played: result.map_results.len() as u32,
        scoreboard: common::ScoreBoard {
            teams: vec![board(&result.team_a), board(&result.team_b)],
        },
    }
}
