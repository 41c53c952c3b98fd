//! Hold'em equity calculator binary.
//!
//! Usage:
//!   cargo run --release --bin equity -- <HOLE> [BOARD] [OPPONENTS] [TRIALS] [OPTIONS]
//!
//! Example:
//!   cargo run --release --bin equity -- AhKs QdJc2s 3
//!
//! Options:
//!   --workers <N>        Number of workers (default: one per thread)
//!   --seed <N>           Random seed (optional)
//!   --json               Print the response as JSON
//!
//! A `SimulationConfig` JSON file named by `EQUITY_CONFIG` is loaded first;
//! `--workers` and `--seed` override it. Set `RUST_LOG=debug` for logs.

use std::env;
use std::process;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use poker_equity::cards::{cards_str, parse_cards, Card, Street};
use poker_equity::equity::{
    EquityRequest, EquityResponse, EquitySimulator, SimulationConfig, DEFAULT_TRIALS,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut positional: Vec<String> = Vec::new();
    let mut workers: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--workers" | "-w" => {
                i += 1;
                if i < args.len() {
                    workers = args[i].parse().ok();
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                process::exit(2);
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    let request = match build_request(&positional) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            process::exit(2);
        }
    };

    let mut config = load_config();
    if let Some(w) = workers {
        config = config.with_workers(w);
    }
    if let Some(s) = seed {
        config = config.with_seed(s);
    }

    let simulator = match EquitySimulator::new(config) {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    if !json {
        print_request(&request);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Simulating {} trials...", request.trials));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let result = simulator.estimate(&request);
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&response) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize response: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_response(&response, start.elapsed());
    }
}

fn build_request(positional: &[String]) -> Result<EquityRequest, String> {
    let hole = positional.first().ok_or("missing hole cards")?;
    let hole = parse_cards(hole).map_err(|e| e.to_string())?;
    let hole: [Card; 2] = hole
        .try_into()
        .map_err(|cards: Vec<Card>| format!("expected 2 hole cards, got {}", cards.len()))?;

    // A numeric second argument means the board was left out.
    let mut rest = positional[1..].iter().peekable();
    let board = match rest.peek() {
        Some(arg) if arg.parse::<u64>().is_err() => {
            let board = parse_cards(arg).map_err(|e| e.to_string())?;
            rest.next();
            board
        }
        _ => Vec::new(),
    };

    let opponents = match rest.next() {
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("invalid opponent count '{}'", arg))?,
        None => 1,
    };
    let trials = match rest.next() {
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("invalid trial count '{}'", arg))?,
        None => DEFAULT_TRIALS,
    };
    if let Some(arg) = rest.next() {
        return Err(format!("unexpected argument '{}'", arg));
    }

    Ok(EquityRequest::new(hole, board, opponents).with_trials(trials))
}

fn load_config() -> SimulationConfig {
    let Ok(path) = env::var("EQUITY_CONFIG") else {
        return SimulationConfig::default();
    };

    match SimulationConfig::from_json_file(&path) {
        Ok(config) => {
            log::info!("Loaded config from: {}", path);
            config
        }
        Err(e) => {
            eprintln!("Could not load {}: {}", path, e);
            eprintln!("Using default settings");
            SimulationConfig::default()
        }
    }
}

fn print_request(request: &EquityRequest) {
    let glyphs: String = request.hole.iter().map(|c| c.glyph()).collect();
    println!("=================================================");
    println!("  Hold'em Equity");
    println!("=================================================");
    println!("Hand:      {} {}", cards_str(&request.hole), glyphs);
    match Street::from_board_len(request.board.len()) {
        Some(Street::Preflop) => println!("Street:    Preflop"),
        Some(street) => println!("Street:    {} [{}]", street, cards_str(&request.board)),
        None => println!("Board:     [{}]", cards_str(&request.board)),
    }
    println!("Opponents: {}", request.opponents);
    println!();
}

fn print_response(response: &EquityResponse, elapsed: Duration) {
    println!("Win:    {:>6.2}%", response.win * 100.0);
    println!("Tie:    {:>6.2}%", response.tie * 100.0);
    println!("Loss:   {:>6.2}%", response.loss * 100.0);
    println!("Equity: {:>6.2}%", response.equity() * 100.0);
    println!();
    println!(
        "{} trials in {:.2}s ({:.0} trials/s)",
        response.trials,
        elapsed.as_secs_f64(),
        response.trials as f64 / elapsed.as_secs_f64().max(1e-9)
    );
}

fn print_help() {
    println!("Usage: equity <HOLE> [BOARD] [OPPONENTS] [TRIALS] [OPTIONS]");
    println!();
    println!("Arguments:");
    println!("  HOLE          Two hole cards, e.g. AhKs");
    println!("  BOARD         Zero to five board cards, e.g. QdJc2s");
    println!("  OPPONENTS     Number of opponents (default: 1)");
    println!("  TRIALS        Number of trials (default: {})", DEFAULT_TRIALS);
    println!();
    println!("Options:");
    println!("  --workers, -w <N>   Number of workers (default: one per thread)");
    println!("  --seed, -s <N>      Random seed");
    println!("  --json              Print the response as JSON");
    println!("  --help, -h          Show this help");
    println!();
    println!("Environment:");
    println!("  EQUITY_CONFIG       Path to a SimulationConfig JSON file");
    println!("  RUST_LOG            Log level, e.g. debug");
}
