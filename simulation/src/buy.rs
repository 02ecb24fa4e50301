use crate::economy::{self, BuyDecision, BuyStrategy};
use crate::{Loadout, Player, Shield, Team, ValidationError, Weapon};

#[derive(Debug, Clone, PartialEq)]
pub struct BuyPhaseOutcome {
    pub team: Team,
    pub decision: BuyDecision,
}

/// Spends one player's credits according to the team strategy.
pub fn execute_buy(player: &Player, strategy: BuyStrategy) -> Player {
    let mut credits = player.credits.unwrap_or(0);

    let carried = match (player.alive, player.loadout) {
        (Some(true), Some(loadout)) => loadout.primary,
        _ => None,
    };
    let mut loadout = Loadout {
        primary: carried,
        ..Loadout::default()
    };

    let mut try_buy = |cost: u32| -> bool {
        if credits >= cost {
            credits -= cost;
            true
        } else {
            false
        }
    };

    match strategy {
        BuyStrategy::FullBuy => {
            let rifle = Weapon::Vandal.cost() + Shield::Heavy.cost() + player.role.profile().ability_cost;
            let cheap_rifle = Weapon::Bulldog.cost() + Shield::Heavy.cost();

            if try_buy(rifle) {
                loadout.primary = Some(Weapon::Vandal);
                loadout.shield = Shield::Heavy;
                loadout.abilities = true;
            } else if try_buy(cheap_rifle) {
                loadout.primary = Some(Weapon::Bulldog);
                loadout.shield = Shield::Heavy;
            }
        }
        BuyStrategy::ForceBuy => {
            if try_buy(Weapon::Spectre.cost() + Shield::Light.cost()) {
                loadout.primary = Some(Weapon::Spectre);
                loadout.shield = Shield::Light;
            } else if try_buy(Weapon::Sheriff.cost()) {
                loadout.secondary = Weapon::Sheriff;
            }
        }
        BuyStrategy::Eco => {
            if try_buy(Weapon::Ghost.cost()) {
                loadout.secondary = Weapon::Ghost;
            }
        }
    };

    Player {
        credits: Some(credits),
        loadout: Some(loadout),
        ..player.clone()
    }
}

/// Applies one strategy to every player and rebuilds the team.
pub fn apply_strategy(team: &Team, strategy: BuyStrategy) -> Result<Team, ValidationError> {
    let players: Vec<Player> = team
        .players()
        .iter()
        .map(|p| execute_buy(p, strategy))
        .collect();
    let econ = players.iter().filter_map(|p| p.credits).sum();

    team.with_players(players)?
        .with_economy(team.loss_streak(), Some(econ))
}

/// Decides the team's strategy for the round and executes it for every
/// player.
#[tracing::instrument(skip(team), fields(team = team.name()))]
pub fn execute_buy_phase(team: &Team, is_pistol: bool) -> Result<BuyPhaseOutcome, ValidationError> {
    let decision = economy::decide_buy_strategy(team, is_pistol);
    let team = apply_strategy(team, decision.strategy)?;

    Ok(BuyPhaseOutcome { team, decision })
}
