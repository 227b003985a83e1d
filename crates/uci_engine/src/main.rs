//! UCI front end for the negamax engine.
//!
//! Usage:
//!   uci_engine [--config engine.toml]
//!   uci_engine [--config engine.toml] selfplay [--depth D] [--max-moves N]

mod selfplay;
mod session;

use anyhow::{bail, Context, Result};
use negamax_engine::EngineConfig;
use session::{Flow, Session};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX_MOVES: u32 = 100;

fn main() -> Result<()> {
    // stdout belongs to the UCI protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, rest) = split_config_arg(&args)?;

    let mut config = match &config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    info!(depth = config.depth, mobility = %config.mobility, "engine config");

    match rest.first().map(String::as_str) {
        None => run_uci(config),
        Some("selfplay") => {
            let max_moves = parse_selfplay_args(&rest[1..], &mut config)?;
            let mut stdout = io::stdout().lock();
            let outcome = selfplay::play(&config, max_moves, &mut stdout)?;
            info!(plies = outcome.plies, result = outcome.result, "selfplay done");
            Ok(())
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

fn run_uci(config: EngineConfig) -> Result<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if session.handle(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    info!(
        plies = session.game().ply_count(),
        depth = session.config().depth,
        "uci session closed"
    );
    Ok(())
}

/// Pulls `--config <path>` out of the argument list, returning the rest.
fn split_config_arg(args: &[String]) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut path = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" || arg == "-c" {
            let value = iter.next().context("--config needs a path")?;
            path = Some(PathBuf::from(value));
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((path, rest))
}

fn parse_selfplay_args(args: &[String], config: &mut EngineConfig) -> Result<u32> {
    let mut max_moves = DEFAULT_MAX_MOVES;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => {
                let depth: u8 = args
                    .get(i + 1)
                    .context("--depth needs a value")?
                    .parse()
                    .context("--depth must be a number")?;
                config.set_depth(depth)?;
                i += 1;
            }
            "--max-moves" | "-m" => {
                max_moves = args
                    .get(i + 1)
                    .context("--max-moves needs a value")?
                    .parse()
                    .context("--max-moves must be a number")?;
                i += 1;
            }
            other => bail!("unknown selfplay option: {other}"),
        }
        i += 1;
    }
    Ok(max_moves)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  uci_engine [--config <file>]                 speak UCI on stdin/stdout");
    eprintln!("  uci_engine [--config <file>] selfplay [options]");
    eprintln!();
    eprintln!("Selfplay options:");
    eprintln!("  --depth, -d <n>       search depth (1-8)");
    eprintln!("  --max-moves, -m <n>   stop after n full moves (default {DEFAULT_MAX_MOVES})");
}
