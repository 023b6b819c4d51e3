//! Game outcome and payout computation engines.
//!
//! Three independent engines (slots, blackjack, roulette), each a small
//! state machine over an in-memory reel, hand, or wheel, producing an
//! outcome record and a signed balance delta. The delta is forwarded to a
//! [`Ledger`] by the [`Table`] layer; the engines themselves never touch a
//! balance.
//!
//! Randomness is injected through [`rng::RandomSource`] so every draw can be
//! seeded or scripted in tests.
//!
//! [`Ledger`]: ledger::Ledger
//! [`Table`]: table::Table

pub mod ledger;
pub mod rng;
pub mod table;

mod blackjack;
mod roulette;
mod slots;


pub use blackjack::{score_hand, BlackjackEngine, RoundState};
pub use roulette::RouletteEngine;
pub use slots::SlotsEngine;

use thiserror::Error;

/// Error during game execution. All variants are recoverable by re-issuing a
/// valid action; no engine failure corrupts round state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Bet of zero, rejected before any state change.
    #[error("bet must be greater than zero")]
    InvalidBet,
    /// Straight bet on a pocket outside the wheel.
    #[error("straight bet pocket must be in 0..=36")]
    InvalidPocket,
    /// Re-entrant spin on an engine already mid-spin.
    #[error("spin already in progress")]
    SpinInProgress,
    /// Action invoked outside its valid round state.
    #[error("action is not valid in the current round state")]
    IllegalState,
    /// No cards left to draw.
    #[error("deck exhausted")]
    DeckExhausted,
}
