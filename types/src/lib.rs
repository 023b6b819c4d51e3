//! Shared data model for the parlor game engines.
//!
//! Pure data only: cards, slot symbols, roulette bets, outcome records, and
//! the constants the payout tables are built from. Game logic lives in
//! `parlor-games`.

mod card;
mod constants;
mod outcome;
mod player;
mod roulette;
mod symbol;

pub use card::*;
pub use constants::*;
pub use outcome::*;
pub use player::*;
pub use roulette::*;
pub use symbol::*;
