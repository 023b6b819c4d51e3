use crate::STARTING_BALANCE;
use serde::{Deserialize, Serialize};

/// A seated player. The balance is the ledger's opening value; once play
/// starts, the ledger owns the number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub balance: i64,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            balance: STARTING_BALANCE,
        }
    }
}
