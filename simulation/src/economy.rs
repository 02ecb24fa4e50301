use crate::Team;

pub const LOSS_BONUS_STEP: u32 = 500;
pub const MIN_LOSS_REWARD: u32 = 1900;
pub const FULL_BUY_THRESHOLD: f64 = 5000.0;
pub const FORCE_BUY_WINDOW: (f64, f64) = (3500.0, 4500.0);
pub const SAVE_MARGIN: f64 = 1500.0;
pub const SAVE_STREAK: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuyStrategy {
    FullBuy,
    ForceBuy,
    Eco,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuyDecision {
    pub strategy: BuyStrategy,
    pub reasoning: String,
}

impl BuyDecision {
    fn new(strategy: BuyStrategy, reasoning: &str) -> Self {
        Self {
            strategy,
            reasoning: reasoning.to_owned(),
        }
    }
}

/// Mean credits over the players whose credits are known, 0 if none are.
pub fn average_credits(team: &Team) -> f64 {
    let known: Vec<u32> = team.players().iter().filter_map(|p| p.credits).collect();
    if known.is_empty() {
        return 0.0;
    }

    known.iter().map(|c| f64::from(*c)).sum::<f64>() / known.len() as f64
}

#[tracing::instrument(skip(team), fields(team = team.name()))]
pub fn decide_buy_strategy(team: &Team, is_pistol: bool) -> BuyDecision {
    let decision = decide(average_credits(team), team.loss_streak().unwrap_or(0), is_pistol);
    tracing::debug!(strategy = ?decision.strategy, "Buy decision");
    decision
}

pub fn decide(average_credits: f64, loss_streak: u32, is_pistol: bool) -> BuyDecision {
    if is_pistol {
        return BuyDecision::new(BuyStrategy::FullBuy, "Pistol round, buying what is possible.");
    }

    let loss_bonus = loss_streak.saturating_mul(LOSS_BONUS_STEP);
    let next_min_eco = f64::from(MIN_LOSS_REWARD.saturating_add(loss_bonus));

    if average_credits > FULL_BUY_THRESHOLD {
        return BuyDecision::new(
            BuyStrategy::FullBuy,
            "High economy, full buy to press advantage.",
        );
    }

    let (low, high) = FORCE_BUY_WINDOW;
    if low < average_credits && average_credits < high {
        if loss_streak >= SAVE_STREAK {
            return BuyDecision::new(
                BuyStrategy::Eco,
                "On a loss streak, saving for a better buy next round.",
            );
        }
        return BuyDecision::new(BuyStrategy::ForceBuy, "Decent economy, force buying to contest.");
    }

    if average_credits < next_min_eco + SAVE_MARGIN {
        return BuyDecision::new(BuyStrategy::Eco, "Low on credits, saving for a full buy.");
    }

    BuyDecision::new(BuyStrategy::FullBuy, "Sufficient credits for a full buy.")
}
