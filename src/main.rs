//! Fourstack -- an interactive Connect-Four game.
//!
//! Black (human) moves first; Red is automated by default. Reads column
//! choices from stdin and renders the board to stdout.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --rows N     Board rows, minimum 4 (default: 10)
//!   --cols N     Board columns, minimum 4 (default: 10)
//!   --no-ai      Red is a second human instead of the random player
//!   --seed N     Random seed for the automated player, 0 for entropy (default: 0)
//!   --delay MS   Automated player thinking delay in ms (default: 1000)

use std::cell::RefCell;
use std::env;
use std::io::{self, BufWriter};
use std::rc::Rc;
use std::time::Duration;

use fourstack::engine::{GameConfig, GameEngine};
use fourstack::player::{HumanPlayer, MoveProvider, RandomPlayer};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = GameConfig::default();
    let mut seed: u64 = 0;
    let mut delay_ms: u64 = 1000;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                config.rows = parse_arg(&args, i, "--rows");
            }
            "--cols" => {
                i += 1;
                config.cols = parse_arg(&args, i, "--cols");
            }
            "--no-ai" => {
                config.automated_red = false;
            }
            "--seed" => {
                i += 1;
                seed = parse_arg(&args, i, "--seed");
            }
            "--delay" => {
                i += 1;
                delay_ms = parse_arg(&args, i, "--delay");
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Both human seats share one stdin lock, so the terminal is wrapped
    // once and handed to each seat behind a shared cell.
    let human = Rc::new(RefCell::new(HumanPlayer::new(
        io::stdin().lock(),
        io::stdout(),
    )));
    let black: Box<dyn MoveProvider> = Box::new(human.clone());
    let red: Box<dyn MoveProvider> = if config.automated_red {
        let player = if seed == 0 {
            RandomPlayer::new()
        } else {
            RandomPlayer::seeded(seed)
        };
        Box::new(player.with_delay(Duration::from_millis(delay_ms)))
    } else {
        Box::new(human.clone())
    };

    let mut engine = match GameEngine::new(&config, black, red) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid board configuration: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = engine.play(&mut out) {
        eprintln!("Game aborted: {}", e);
        std::process::exit(1);
    }
}

/// Parses the value following a flag, exiting with a message when it is
/// missing or not a number.
fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let value = args.get(i).unwrap_or_else(|| {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    });
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: '{}'", flag, value);
        std::process::exit(1);
    })
}

fn print_usage() {
    eprintln!("Usage: fourstack [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rows N     Board rows, minimum 4 (default: 10)");
    eprintln!("  --cols N     Board columns, minimum 4 (default: 10)");
    eprintln!("  --no-ai      Red is a second human instead of the random player");
    eprintln!("  --seed N     Random seed for the automated player, 0 for entropy (default: 0)");
    eprintln!("  --delay MS   Automated player thinking delay in ms (default: 1000)");
    eprintln!("  --help       Show this help");
}
