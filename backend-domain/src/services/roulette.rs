// Roulette draw
// Produces a score for the ledger; the outcome itself is plain randomness.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const ROULETTE_GAME_TYPE: &str = "roulette";
pub const ROULETTE_SYMBOLS: [&str; 6] = ["🍎", "🍊", "🍋", "🍇", "🍓", "🥝"];
pub const ROULETTE_MIN_SCORE: i64 = 10;
pub const ROULETTE_MAX_SCORE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouletteOutcome {
    pub symbol: &'static str,
    pub won: bool,
    pub score: i64,
}

impl RouletteOutcome {
    pub fn details(&self) -> String {
        format!("symbol:{},won:{}", self.symbol, self.won)
    }
}

pub fn spin<R: Rng>(rng: &mut R) -> RouletteOutcome {
    let symbol = ROULETTE_SYMBOLS
        .choose(rng)
        .copied()
        .unwrap_or(ROULETTE_SYMBOLS[0]);
    let base_score = rng.random_range(ROULETTE_MIN_SCORE..=ROULETTE_MAX_SCORE);
    let won = rng.random_bool(0.5);
    RouletteOutcome {
        symbol,
        won,
        score: if won { base_score } else { 0 },
    }
}
