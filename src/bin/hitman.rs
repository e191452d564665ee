//! Play Hitman in the terminal.
//!
//! ```text
//! hitman --players Alice,Bob,Carol --seed 42
//! RUST_LOG=hitman=debug hitman
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hitman::core::{GameConfig, DEFAULT_DECK_SIZE, DEFAULT_PLAYERS};
use hitman::games::hitman::{console, Table};

#[derive(Parser, Debug)]
#[command(name = "hitman", version, about = "Draw, play, survive the Hitman")]
struct Args {
    /// Player names in seating order, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PLAYERS.map(String::from))]
    players: Vec<String>,

    /// Initial deck counter
    #[arg(long, default_value_t = DEFAULT_DECK_SIZE, allow_negative_numbers = true)]
    deck_size: i32,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = GameConfig::new()
        .with_players(args.players)
        .with_deck_size(args.deck_size);
    config.seed = args.seed;

    let mut table = match Table::new(config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("hitman: {e}");
            return ExitCode::from(2);
        }
    };

    println!("Seed: {}", table.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    match console::run(&mut table, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hitman: {e}");
            ExitCode::FAILURE
        }
    }
}
