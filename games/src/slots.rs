//! Three-reel slot machine with a fixed payout ladder.

use crate::rng::RandomSource;
use crate::GameError;
use parlor_types::{
    SlotsOutcome, Symbol, REEL_COUNT, SLOTS_PAIR_MULTIPLIER, SLOTS_TRIPLE_MULTIPLIER,
};

pub struct SlotsEngine<R> {
    rng: R,
    spinning: bool,
}

impl<R: RandomSource> SlotsEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            spinning: false,
        }
    }

    /// Spin the reels against `bet` and compute the payout.
    ///
    /// Rules are evaluated in order, first match wins: all three reels equal
    /// pays 5x, an adjacent pair pays 2x, anything else pays nothing. The
    /// outcome's `delta` is `winnings - bet`.
    pub fn spin(&mut self, bet: u64) -> Result<SlotsOutcome, GameError> {
        if bet == 0 {
            return Err(GameError::InvalidBet);
        }
        // Explicit state check in place of the old advisory flag. The spin
        // never suspends, so this can only trip on a caller bug.
        if self.spinning {
            return Err(GameError::SpinInProgress);
        }
        self.spinning = true;

        let mut reels = [Symbol::Cherry; REEL_COUNT];
        for reel in reels.iter_mut() {
            let index = self.rng.draw_uniform(Symbol::ALL.len() as u32) as usize;
            *reel = Symbol::ALL[index];
        }

        let winnings = if reels[0] == reels[1] && reels[1] == reels[2] {
            bet.saturating_mul(SLOTS_TRIPLE_MULTIPLIER)
        } else if reels[0] == reels[1] || reels[1] == reels[2] {
            bet.saturating_mul(SLOTS_PAIR_MULTIPLIER)
        } else {
            0
        };

        self.spinning = false;
        Ok(SlotsOutcome {
            reels,
            winnings,
            delta: winnings as i64 - bet as i64,
        })
    }
}
