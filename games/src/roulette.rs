//! Single-number roulette wheel resolving one bet per spin.

use crate::rng::RandomSource;
use crate::GameError;
use parlor_types::{
    color_of, Color, RouletteBet, RouletteOutcome, MAX_POCKET, ROULETTE_EVEN_MONEY_MULTIPLIER,
    ROULETTE_STRAIGHT_MULTIPLIER,
};

pub struct RouletteEngine<R> {
    rng: R,
    spinning: bool,
}

/// Whether a bet covers the drawn pocket. Zero wins nothing but a straight
/// bet on zero itself.
fn bet_wins(bet: RouletteBet, pocket: u8) -> bool {
    match bet {
        RouletteBet::Straight(backed) => pocket == backed,
        RouletteBet::Even => pocket != 0 && pocket % 2 == 0,
        RouletteBet::Odd => pocket != 0 && pocket % 2 == 1,
        RouletteBet::Red => color_of(pocket) == Color::Red,
        RouletteBet::Black => color_of(pocket) == Color::Black,
    }
}

fn payout_multiplier(bet: RouletteBet) -> u64 {
    match bet {
        RouletteBet::Straight(_) => ROULETTE_STRAIGHT_MULTIPLIER,
        RouletteBet::Even | RouletteBet::Odd | RouletteBet::Red | RouletteBet::Black => {
            ROULETTE_EVEN_MONEY_MULTIPLIER
        }
    }
}

impl<R: RandomSource> RouletteEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            spinning: false,
        }
    }

    /// Spin the wheel and resolve `kind` against the drawn pocket.
    ///
    /// Exactly one payout rule applies per bet type; a miss pays nothing.
    /// The outcome's `delta` is `winnings - bet`.
    pub fn spin(&mut self, bet: u64, kind: RouletteBet) -> Result<RouletteOutcome, GameError> {
        if bet == 0 {
            return Err(GameError::InvalidBet);
        }
        if let RouletteBet::Straight(backed) = kind {
            if backed > MAX_POCKET {
                return Err(GameError::InvalidPocket);
            }
        }
        if self.spinning {
            return Err(GameError::SpinInProgress);
        }
        self.spinning = true;

        let pocket = self.rng.draw_uniform(u32::from(MAX_POCKET) + 1) as u8;
        let winnings = if bet_wins(kind, pocket) {
            bet.saturating_mul(payout_multiplier(kind))
        } else {
            0
        };

        self.spinning = false;
        Ok(RouletteOutcome {
            pocket,
            color: color_of(pocket),
            winnings,
            delta: winnings as i64 - bet as i64,
        })
    }
}
