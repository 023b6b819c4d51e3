//! One seat's view of the casino: the three engines plus the ledger that
//! absorbs their deltas.
//!
//! The table is the only place game outcomes and balances meet. Engines stay
//! synchronous and pure; every resolved delta is forwarded to the [`Ledger`]
//! here, and a ledger failure is surfaced to the caller while the round
//! itself stays resolved.

use crate::ledger::{Ledger, LedgerError};
use crate::rng::{EntropySource, RandomSource};
use crate::{BlackjackEngine, GameError, RouletteEngine, SlotsEngine};
use parlor_types::{DealOutcome, HitOutcome, RouletteBet, RouletteOutcome, SlotsOutcome, StandOutcome};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// A resolved action together with the balance it settled to. `balance` is
/// `None` when the action produced no ledger transaction (a zero delta).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<T> {
    pub outcome: T,
    pub balance: Option<i64>,
}

pub struct Table<R, L> {
    slots: SlotsEngine<R>,
    roulette: RouletteEngine<R>,
    blackjack: BlackjackEngine<R>,
    ledger: L,
}

impl<L: Ledger> Table<EntropySource, L> {
    pub fn with_entropy(ledger: L) -> Self {
        Self::new(ledger, EntropySource::new)
    }
}

impl<R: RandomSource, L: Ledger> Table<R, L> {
    /// `source` is called once per engine so each game draws from its own
    /// stream.
    pub fn new(ledger: L, mut source: impl FnMut() -> R) -> Self {
        Self {
            slots: SlotsEngine::new(source()),
            roulette: RouletteEngine::new(source()),
            blackjack: BlackjackEngine::new(source()),
            ledger,
        }
    }

    pub async fn play_slots(&mut self, bet: u64) -> Result<Settled<SlotsOutcome>, TableError> {
        let outcome = self.slots.spin(bet)?;
        debug!(?outcome.reels, outcome.winnings, "slots spin");
        let balance = self.settle(outcome.delta).await?;
        Ok(Settled { outcome, balance })
    }

    pub async fn play_roulette(
        &mut self,
        bet: u64,
        kind: RouletteBet,
    ) -> Result<Settled<RouletteOutcome>, TableError> {
        let outcome = self.roulette.spin(bet, kind)?;
        debug!(outcome.pocket, outcome.winnings, "roulette spin");
        let balance = self.settle(outcome.delta).await?;
        Ok(Settled { outcome, balance })
    }

    /// Open a blackjack round. Nothing settles at the deal; the bet is only
    /// applied, net, when the round resolves.
    pub fn blackjack_deal(&mut self, bet: u64) -> Result<DealOutcome, TableError> {
        Ok(self.blackjack.deal(bet)?)
    }

    pub async fn blackjack_hit(&mut self) -> Result<Settled<HitOutcome>, TableError> {
        let outcome = self.blackjack.hit()?;
        let balance = self.settle(outcome.delta).await?;
        Ok(Settled { outcome, balance })
    }

    pub async fn blackjack_stand(&mut self) -> Result<Settled<StandOutcome>, TableError> {
        let outcome = self.blackjack.stand()?;
        debug!(?outcome.result, outcome.delta, "blackjack stand");
        let balance = self.settle(outcome.delta).await?;
        Ok(Settled { outcome, balance })
    }

    pub fn blackjack_player_hand(&self) -> &[parlor_types::Card] {
        self.blackjack.player_hand()
    }

    async fn settle(&self, delta: i64) -> Result<Option<i64>, TableError> {
        if delta == 0 {
            return Ok(None);
        }
        match self.ledger.apply_delta(delta).await {
            Ok(balance) => {
                debug!(delta, balance, "settled");
                Ok(Some(balance))
            }
            Err(err) => {
                warn!(delta, %err, "ledger refused delta");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::rng::{ScriptedSource, SeededSource};
    use crate::RoundState;
    use futures::future::BoxFuture;
    use parlor_types::{standard_deck, Card, Rank, RoundResult, Suit};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct CountingLedger {
        inner: MemoryLedger,
        calls: Arc<AtomicUsize>,
    }

    impl CountingLedger {
        fn new(starting_balance: i64) -> Self {
            Self {
                inner: MemoryLedger::new(starting_balance),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Ledger for CountingLedger {
        fn apply_delta(&self, delta: i64) -> BoxFuture<'_, Result<i64, LedgerError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.apply_delta(delta)
        }
    }

    struct RejectingLedger;

    impl Ledger for RejectingLedger {
        fn apply_delta(&self, _delta: i64) -> BoxFuture<'_, Result<i64, LedgerError>> {
            Box::pin(async { Err(LedgerError::Unavailable("offline".into())) })
        }
    }

    fn rigged_deck(draws: &[Card]) -> Vec<Card> {
        let mut deck: Vec<Card> = standard_deck()
            .into_iter()
            .filter(|c| !draws.contains(c))
            .collect();
        deck.extend(draws.iter().rev());
        deck
    }

    #[tokio::test]
    async fn slots_win_settles_into_the_balance() {
        let ledger = MemoryLedger::new(100);
        let mut table = Table::new(ledger.clone(), || ScriptedSource::new([0]));

        let settled = table.play_slots(10).await.expect("spin");
        assert_eq!(settled.outcome.delta, 40);
        assert_eq!(settled.balance, Some(140));
        assert_eq!(ledger.balance(), Ok(140));
    }

    #[tokio::test]
    async fn roulette_loss_debits_the_bet() {
        // Pocket 2 is black, so the red bet misses.
        let ledger = MemoryLedger::new(100);
        let mut table = Table::new(ledger.clone(), || ScriptedSource::new([2]));

        let settled = table
            .play_roulette(10, RouletteBet::Red)
            .await
            .expect("spin");
        assert_eq!(settled.balance, Some(90));
    }

    #[tokio::test]
    async fn safe_hit_never_touches_the_ledger() {
        let ledger = CountingLedger::new(100);
        let mut table = Table::new(ledger.clone(), || SeededSource::new(0));

        let deck = rigged_deck(&[
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Four, Suit::Hearts),
        ]);
        table.blackjack.deal_rigged(10, deck).expect("deal");

        let settled = table.blackjack_hit().await.expect("hit");
        assert!(!settled.outcome.bust);
        assert_eq!(settled.balance, None);
        assert_eq!(ledger.calls(), 0);
    }

    #[tokio::test]
    async fn stand_settles_exactly_one_delta() {
        let ledger = CountingLedger::new(100);
        let mut table = Table::new(ledger.clone(), || SeededSource::new(0));

        // Player 17 vs dealer 14 drawing to a bust.
        let deck = rigged_deck(&[
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Eight, Suit::Hearts),
        ]);
        table.blackjack.deal_rigged(10, deck).expect("deal");

        let settled = table.blackjack_stand().await.expect("stand");
        assert_eq!(settled.outcome.result, RoundResult::Win);
        assert_eq!(settled.balance, Some(120));
        assert_eq!(ledger.calls(), 1);

        // A second stand is rejected before reaching the ledger.
        let err = table.blackjack_stand().await.expect_err("double stand");
        assert_eq!(err, TableError::Game(GameError::IllegalState));
        assert_eq!(ledger.calls(), 1);
    }

    #[tokio::test]
    async fn ledger_failure_surfaces_but_the_round_stays_resolved() {
        let mut table = Table::new(RejectingLedger, || SeededSource::new(4));
        table.blackjack_deal(10).expect("deal");

        let err = table.blackjack_stand().await.expect_err("stand");
        assert!(matches!(err, TableError::Ledger(LedgerError::Unavailable(_))));
        assert_eq!(table.blackjack.state(), RoundState::Resolved);
    }

    #[tokio::test]
    async fn overdraft_rejection_carries_both_sides() {
        let ledger = MemoryLedger::new(5);
        let mut table = Table::new(ledger.clone(), || ScriptedSource::new([2]));

        let err = table
            .play_roulette(10, RouletteBet::Red)
            .await
            .expect_err("spin");
        assert_eq!(
            err,
            TableError::Ledger(LedgerError::Rejected {
                balance: 5,
                delta: -10
            })
        );
        assert_eq!(ledger.balance(), Ok(5));
    }
}
