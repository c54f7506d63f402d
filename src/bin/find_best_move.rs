//! CLI front-end: reads a `GameSnapshot` as JSON (from a file or stdin),
//! runs the search, and prints the chosen move in algebraic notation.

use rusty_chess::client::{execute, RecordingSink};
use rusty_chess::search::SearchEngine;
use rusty_chess::snapshot::{board_from_snapshot, GameSnapshot};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Duration;

const DEFAULT_TIME_BUDGET_MS: u64 = 1000;

struct Config {
    snapshot_path: Option<String>,
    time_budget_ms: u64,
    quiet: bool,
}

fn print_usage() {
    eprintln!("usage: find-best-move [--snapshot <path>] [--time-ms <ms>] [--quiet]");
    eprintln!();
    eprintln!("  reads a GameSnapshot as JSON from <path>, or from stdin if omitted");
    eprintln!();
    eprintln!("examples:");
    eprintln!("  find-best-move --snapshot position.json");
    eprintln!("  cat position.json | find-best-move --time-ms 500");
}

fn parse_args() -> Option<Config> {
    let mut config = Config {
        snapshot_path: None,
        time_budget_ms: DEFAULT_TIME_BUDGET_MS,
        quiet: false,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--snapshot" => config.snapshot_path = Some(args.next()?),
            "--time-ms" => config.time_budget_ms = args.next()?.parse().ok()?,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => return None,
            other => {
                eprintln!("unrecognized argument: {other}");
                return None;
            }
        }
    }
    Some(config)
}

fn main() -> ExitCode {
    let Some(config) = parse_args() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let raw = match &config.snapshot_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("failed to read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buf) {
                eprintln!("failed to read snapshot from stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let snapshot: GameSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("failed to parse snapshot: {err}");
            return ExitCode::FAILURE;
        }
    };

    let board = match board_from_snapshot(&snapshot) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid snapshot: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = SearchEngine::new();
    let Some(mv) = engine.find_best_move(&board, Duration::from_millis(config.time_budget_ms))
    else {
        eprintln!("no legal moves available");
        return ExitCode::FAILURE;
    };

    let mut sink = RecordingSink::default();
    execute(&mv, &mut sink);
    for (from, to, promotion) in &sink.submitted {
        match promotion {
            Some(p) => println!("{from}{to}={p}"),
            None => println!("{from}{to}"),
        }
    }

    if !config.quiet {
        if let Some(metrics) = engine.last_metrics() {
            metrics.print();
        }
    }

    ExitCode::SUCCESS
}
