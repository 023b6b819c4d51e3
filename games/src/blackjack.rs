//! Blackjack round state machine: deck, deal, hit, stand, scoring.
//!
//! One engine instance owns one deck and one round at a time. The deck is
//! rebuilt and reshuffled at every deal, and cards are always drawn from the
//! tail of the shuffled deck.

use crate::rng::{shuffle, RandomSource};
use crate::GameError;
use parlor_types::{
    standard_deck, Card, DealOutcome, HitOutcome, RoundResult, StandOutcome, BLACKJACK_TARGET,
    DEALER_STAND,
};

/// Lifecycle of a round. `hit` and `stand` are only valid while InProgress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    InProgress,
    Resolved,
}

/// Hand total under the soft-ace rule.
///
/// Aces start at 11; while the total is over 21 and a soft ace remains, one
/// ace drops to 1. The loop stops as soon as the total fits: {A,A} is 12,
/// {A,6} is 17, {A,6,5} is 12.
pub fn score_hand(hand: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut soft_aces: u8 = 0;

    for card in hand {
        if card.rank.is_ace() {
            soft_aces += 1;
        }
        total += u16::from(card.rank.base_value());
    }

    while total > u16::from(BLACKJACK_TARGET) && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    total.min(u16::from(u8::MAX)) as u8
}

pub struct BlackjackEngine<R> {
    rng: R,
    deck: Vec<Card>,
    player_hand: Vec<Card>,
    dealer_hand: Vec<Card>,
    state: RoundState,
    bet: u64,
}

impl<R: RandomSource> BlackjackEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            deck: Vec::new(),
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
            state: RoundState::Idle,
            bet: 0,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    /// The dealer's full hand, hole card included. Callers rendering a live
    /// round should show only the upcard until the round resolves.
    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer_hand
    }

    pub(crate) fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Start a round: rebuild and shuffle the deck, then draw player, player,
    /// dealer, dealer, in exactly that order. Valid from Idle or Resolved;
    /// dealing into a live round is rejected.
    pub fn deal(&mut self, bet: u64) -> Result<DealOutcome, GameError> {
        let mut deck = standard_deck();
        shuffle(&mut self.rng, &mut deck);
        self.start_round(bet, deck)
    }

    /// Deal from a prepared deck. Draws come off the tail, so the last five
    /// cards of `deck` script the opening deal and the first extra draw.
    #[cfg(test)]
    pub(crate) fn deal_rigged(&mut self, bet: u64, deck: Vec<Card>) -> Result<DealOutcome, GameError> {
        self.start_round(bet, deck)
    }

    fn start_round(&mut self, bet: u64, deck: Vec<Card>) -> Result<DealOutcome, GameError> {
        if bet == 0 {
            return Err(GameError::InvalidBet);
        }
        if self.state == RoundState::InProgress {
            return Err(GameError::IllegalState);
        }

        self.bet = bet;
        self.deck = deck;
        self.player_hand.clear();
        self.dealer_hand.clear();

        let first = self.draw()?;
        let second = self.draw()?;
        self.player_hand.push(first);
        self.player_hand.push(second);
        let upcard = self.draw()?;
        self.dealer_hand.push(upcard);
        let hole = self.draw()?;
        self.dealer_hand.push(hole);

        self.state = RoundState::InProgress;
        Ok(DealOutcome {
            player: [first, second],
            dealer_upcard: upcard,
        })
    }

    /// Draw one card to the player hand. A bust resolves the round with
    /// `delta = -bet`; otherwise the round continues with no balance change.
    pub fn hit(&mut self) -> Result<HitOutcome, GameError> {
        if self.state != RoundState::InProgress {
            return Err(GameError::IllegalState);
        }

        let card = self.draw()?;
        self.player_hand.push(card);

        if score_hand(&self.player_hand) > BLACKJACK_TARGET {
            self.state = RoundState::Resolved;
            Ok(HitOutcome {
                bust: true,
                hand: self.player_hand.clone(),
                delta: -(self.bet as i64),
            })
        } else {
            Ok(HitOutcome {
                bust: false,
                hand: self.player_hand.clone(),
                delta: 0,
            })
        }
    }

    /// Stand: the dealer draws to any 17 (soft 17 stands), then the round
    /// resolves. Win pays `+2*bet`, push returns `+bet`, loss costs `-bet`.
    pub fn stand(&mut self) -> Result<StandOutcome, GameError> {
        if self.state != RoundState::InProgress {
            return Err(GameError::IllegalState);
        }

        while score_hand(&self.dealer_hand) < DEALER_STAND {
            let card = self.draw()?;
            self.dealer_hand.push(card);
        }
        self.state = RoundState::Resolved;

        let player_total = score_hand(&self.player_hand);
        let dealer_total = score_hand(&self.dealer_hand);
        let bet = self.bet as i64;

        let (result, delta) = if dealer_total > BLACKJACK_TARGET || player_total > dealer_total {
            (RoundResult::Win, bet.saturating_mul(2))
        } else if player_total == dealer_total {
            (RoundResult::Push, bet)
        } else {
            (RoundResult::Lose, -bet)
        };

        Ok(StandOutcome {
            result,
            player_hand: self.player_hand.clone(),
            dealer_hand: self.dealer_hand.clone(),
            delta,
        })
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.pop().ok_or(GameError::DeckExhausted)
    }
}
