//! Balance ledger seam between game outcomes and whatever holds the money.
//!
//! Engines compute signed deltas; the ledger applies them. The trait is
//! async-shaped so a backing store behind a network hop plugs in without
//! touching the game layer. [`MemoryLedger`] is the in-process implementation
//! used by the simulator and tests.

use futures::future::BoxFuture;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The delta would take the balance below zero.
    #[error("insufficient balance for delta {delta} against {balance}")]
    Rejected { balance: i64, delta: i64 },
    /// The backing store could not be reached or is corrupt.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Applies signed balance deltas and reports the resulting balance.
pub trait Ledger: Send + Sync {
    /// Apply `delta` atomically. A rejection leaves the balance untouched.
    fn apply_delta(&self, delta: i64) -> BoxFuture<'_, Result<i64, LedgerError>>;
}

/// Single-balance in-memory ledger. Clones share the same balance.
#[derive(Clone)]
pub struct MemoryLedger {
    balance: Arc<Mutex<i64>>,
}

impl MemoryLedger {
    pub fn new(starting_balance: i64) -> Self {
        Self {
            balance: Arc::new(Mutex::new(starting_balance)),
        }
    }

    pub fn balance(&self) -> Result<i64, LedgerError> {
        self.balance
            .lock()
            .map(|guard| *guard)
            .map_err(|_| LedgerError::Unavailable("balance lock poisoned".into()))
    }
}

impl Ledger for MemoryLedger {
    fn apply_delta(&self, delta: i64) -> BoxFuture<'_, Result<i64, LedgerError>> {
        Box::pin(async move {
            let mut balance = self
                .balance
                .lock()
                .map_err(|_| LedgerError::Unavailable("balance lock poisoned".into()))?;
            let updated = balance.saturating_add(delta);
            if updated < 0 {
                return Err(LedgerError::Rejected {
                    balance: *balance,
                    delta,
                });
            }
            *balance = updated;
            Ok(updated)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deltas_accumulate() {
        let ledger = MemoryLedger::new(100);
        assert_eq!(ledger.apply_delta(40).await, Ok(140));
        assert_eq!(ledger.apply_delta(-90).await, Ok(50));
        assert_eq!(ledger.balance(), Ok(50));
    }

    #[tokio::test]
    async fn overdraft_is_rejected_and_balance_unchanged() {
        let ledger = MemoryLedger::new(30);
        assert_eq!(
            ledger.apply_delta(-31).await,
            Err(LedgerError::Rejected {
                balance: 30,
                delta: -31
            })
        );
        assert_eq!(ledger.balance(), Ok(30));
    }

    #[tokio::test]
    async fn draining_to_exactly_zero_is_allowed() {
        let ledger = MemoryLedger::new(30);
        assert_eq!(ledger.apply_delta(-30).await, Ok(0));
    }

    #[tokio::test]
    async fn clones_share_one_balance() {
        let ledger = MemoryLedger::new(0);
        let clone = ledger.clone();
        clone.apply_delta(25).await.expect("apply");
        assert_eq!(ledger.balance(), Ok(25));
    }
}
