/// Balance granted to a new player.
pub const STARTING_BALANCE: i64 = 1_000;

/// Default wager when the caller does not pick one.
pub const DEFAULT_BET: u64 = 10;

/// Cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// Reels on the slot machine.
pub const REEL_COUNT: usize = 3;

/// Slots payout when all three reels match.
pub const SLOTS_TRIPLE_MULTIPLIER: u64 = 5;

/// Slots payout when an adjacent pair matches.
pub const SLOTS_PAIR_MULTIPLIER: u64 = 2;

/// Roulette payout for a straight (single-number) hit.
pub const ROULETTE_STRAIGHT_MULTIPLIER: u64 = 35;

/// Roulette payout for even/odd/red/black hits.
pub const ROULETTE_EVEN_MONEY_MULTIPLIER: u64 = 2;

/// Highest roulette pocket; the wheel is 0..=36.
pub const MAX_POCKET: u8 = 36;

/// Blackjack bust threshold.
pub const BLACKJACK_TARGET: u8 = 21;

/// Dealer stands on any total at or above this, soft hands included.
pub const DEALER_STAND: u8 = 17;
