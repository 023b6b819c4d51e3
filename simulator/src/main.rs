//! Scripted session runner for the parlor engines.
//!
//! Seats a player with the standard starting balance and plays a fixed number
//! of rounds of each game through a [`Table`] backed by a [`MemoryLedger`],
//! then prints a JSON summary. Pass `--seed` to replay a session exactly.

use anyhow::Result;
use clap::Parser;
use parlor_games::ledger::{LedgerError, MemoryLedger};
use parlor_games::rng::SeededSource;
use parlor_games::score_hand;
use parlor_games::table::{Table, TableError};
use parlor_types::{Player, RouletteBet, RoundResult, DEALER_STAND, DEFAULT_BET};
use serde::Serialize;
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "parlor-simulator", about = "Plays scripted sessions against the casino engines")]
struct Args {
    /// Rounds to play of each game.
    #[arg(long, default_value_t = 100)]
    rounds: u64,

    /// Stake per round.
    #[arg(long, default_value_t = DEFAULT_BET)]
    bet: u64,

    /// Seat name for the summary.
    #[arg(long, default_value = "guest")]
    name: String,

    /// Seed for a reproducible session; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Serialize, Default)]
struct GameTally {
    rounds: u64,
    wins: u64,
    net: i64,
}

#[derive(Serialize)]
struct Summary {
    player: String,
    seed: u64,
    slots: GameTally,
    roulette: GameTally,
    blackjack: GameTally,
    starting_balance: i64,
    final_balance: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let player = Player::new(args.name.clone());
    let ledger = MemoryLedger::new(player.balance);
    let mut stream = seed;
    let mut table = Table::new(ledger.clone(), || {
        stream = stream.wrapping_add(1);
        SeededSource::new(stream)
    });
    info!(player = %player.name, seed, "session start");

    let mut slots = GameTally::default();
    for _ in 0..args.rounds {
        match table.play_slots(args.bet).await {
            Ok(settled) => {
                slots.rounds += 1;
                slots.net += settled.outcome.delta;
                if settled.outcome.winnings > 0 {
                    slots.wins += 1;
                }
            }
            Err(err) if broke(&err) => {
                warn!(game = "slots", "balance exhausted, stopping");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut roulette = GameTally::default();
    for _ in 0..args.rounds {
        match table.play_roulette(args.bet, RouletteBet::Red).await {
            Ok(settled) => {
                roulette.rounds += 1;
                roulette.net += settled.outcome.delta;
                if settled.outcome.winnings > 0 {
                    roulette.wins += 1;
                }
            }
            Err(err) if broke(&err) => {
                warn!(game = "roulette", "balance exhausted, stopping");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut blackjack = GameTally::default();
    for _ in 0..args.rounds {
        match play_blackjack_round(&mut table, args.bet).await {
            Ok(Some((result, delta))) => {
                blackjack.rounds += 1;
                blackjack.net += delta;
                if result == RoundResult::Win {
                    blackjack.wins += 1;
                }
            }
            Ok(None) => {
                warn!(game = "blackjack", "balance exhausted, stopping");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let final_balance = ledger.balance()?;
    let summary = Summary {
        player: player.name,
        seed,
        slots,
        roulette,
        blackjack,
        starting_balance: player.balance,
        final_balance,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// One blackjack round under the basic "hit below 17" policy. Returns the
/// resolution and its delta, or `None` when the ledger refuses the stake.
async fn play_blackjack_round<R, L>(
    table: &mut Table<R, L>,
    bet: u64,
) -> Result<Option<(RoundResult, i64)>, TableError>
where
    R: parlor_games::rng::RandomSource,
    L: parlor_games::ledger::Ledger,
{
    table.blackjack_deal(bet)?;
    loop {
        if score_hand(table.blackjack_player_hand()) >= DEALER_STAND {
            break;
        }
        match table.blackjack_hit().await {
            Ok(settled) if settled.outcome.bust => {
                return Ok(Some((RoundResult::Lose, settled.outcome.delta)));
            }
            Ok(_) => {}
            Err(err) if broke(&err) => return Ok(None),
            Err(err) => return Err(err),
        }
    }
    match table.blackjack_stand().await {
        Ok(settled) => Ok(Some((settled.outcome.result, settled.outcome.delta))),
        Err(err) if broke(&err) => Ok(None),
        Err(err) => Err(err),
    }
}

fn broke(err: &TableError) -> bool {
    matches!(err, TableError::Ledger(LedgerError::Rejected { .. }))
}
