//! Twisty - command-line cube driver

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use twisty::{GameSession, MoveOutcome, SessionRegistry, TwistyConfig, run_play};
use twisty_cube::parse_sequence;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TwistyConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Scramble { moves, seed, json } => {
            run_scramble(config.with_overrides(moves, seed), json)
        }
        Command::Apply {
            algorithm,
            scramble,
            seed,
            json,
        } => run_apply(config.with_overrides(None, seed), &algorithm, scramble, json),
        Command::Play { moves, seed } => run_interactive(config.with_overrides(moves, seed)),
    }
}

/// Register a scrambled session and print it
#[instrument(skip(config))]
fn run_scramble(config: TwistyConfig, json: bool) -> Result<()> {
    let registry = SessionRegistry::new();
    let session =
        registry.create_scrambled(session_id(), *config.scramble_moves(), &mut config.rng())?;
    info!(
        count = session.cube_state().move_history().len(),
        "Scrambled cube"
    );
    print_session(&session, json)
}

/// Apply an algorithm to a fresh, optionally scrambled, session and print it
#[instrument(skip(config))]
fn run_apply(config: TwistyConfig, algorithm: &str, scramble: usize, json: bool) -> Result<()> {
    let sequence = parse_sequence(algorithm)?;

    let registry = SessionRegistry::new();
    let id = session_id();
    registry.create_scrambled(id.clone(), scramble, &mut config.rng())?;
    for mv in &sequence {
        let applied = registry.apply_move(&id, *mv)?;
        if *applied.outcome() == MoveOutcome::IgnoredCompleted {
            info!(session_id = %id, "Cube solved before the algorithm ended");
            break;
        }
    }

    let session = registry
        .get(&id)
        .with_context(|| format!("Session not found: {}", id))?;
    debug!(
        applied = sequence.len(),
        solved = session.cube_state().solved(),
        "Algorithm applied"
    );
    print_session(&session, json)
}

/// Register a scrambled session and drive it from stdin
#[instrument(skip(config))]
fn run_interactive(config: TwistyConfig) -> Result<()> {
    let registry = SessionRegistry::new();
    let id = session_id();
    registry.create_scrambled(id.clone(), *config.scramble_moves(), &mut config.rng())?;
    info!(session_id = %id, "Starting interactive session");

    let stdin = std::io::stdin();
    run_play(&registry, &id, stdin.lock(), std::io::stdout())
}

fn session_id() -> String {
    format!("cube_{}", std::process::id())
}

fn print_session(session: &GameSession, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session)?);
    } else {
        let state = session.cube_state();
        println!("{}", state.display());
        println!(
            "moves: {}  solved: {}  status: {:?}",
            state.move_history().len(),
            state.solved(),
            session.status()
        );
    }
    Ok(())
}
