use crate::{Card, Color, Symbol, REEL_COUNT};
use serde::{Deserialize, Serialize};

/// How a resolved blackjack round ended for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Push,
    Lose,
}

/// One slots spin. `delta` is the signed net change for the ledger
/// (`winnings - bet`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsOutcome {
    pub reels: [Symbol; REEL_COUNT],
    pub winnings: u64,
    pub delta: i64,
}

/// One roulette spin against a single bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteOutcome {
    pub pocket: u8,
    pub color: Color,
    pub winnings: u64,
    pub delta: i64,
}

/// The opening deal of a blackjack round. The dealer's hole card is withheld
/// from this view but retained by the engine for scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealOutcome {
    pub player: [Card; 2],
    pub dealer_upcard: Card,
}

/// Result of a player hit. A bust resolves the round with `delta = -bet`;
/// otherwise the round continues and no balance change is due.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitOutcome {
    pub bust: bool,
    pub hand: Vec<Card>,
    pub delta: i64,
}

/// Resolution after the player stands and the dealer plays out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandOutcome {
    pub result: RoundResult,
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub delta: i64,
}
