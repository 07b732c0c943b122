//! Line-oriented interactive loop over one registered session.

use crate::session::{MoveOutcome, SessionRegistry};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use twisty_cube::{CubeState, parse_sequence};

const HELP: &str = "\
Enter an algorithm such as R U R' U' to turn the cube.
Commands: state (print JSON), finish (end the session), help, quit";

/// Drives the session `id` from `input`, writing the net and status to `output`.
///
/// Each line is either a command or a whitespace-separated algorithm. A bad
/// algorithm is reported and skipped without touching the cube. The loop ends
/// on `quit`, `exit`, end of input, or once the session completes.
///
/// # Errors
///
/// Returns an error if `id` is not registered or if reading or writing fails.
#[instrument(skip(registry, input, output))]
pub fn run_play<R: BufRead, W: Write>(
    registry: &SessionRegistry,
    id: &str,
    input: R,
    mut output: W,
) -> Result<()> {
    let session = registry
        .get(id)
        .with_context(|| format!("Session not found: {}", id))?;
    print_cube(&mut output, session.cube_state())?;
    writeln!(output, "{}", HELP)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        debug!(line, "Read input line");

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(output, "{}", HELP)?,
            "state" => {
                let session = registry
                    .get(id)
                    .with_context(|| format!("Session not found: {}", id))?;
                writeln!(output, "{}", serde_json::to_string_pretty(session.cube_state())?)?;
            }
            "finish" => {
                let session = registry.finish(id)?;
                let verdict = if session.cube_state().solved() {
                    "solved"
                } else {
                    "unsolved"
                };
                writeln!(
                    output,
                    "Session finished ({}) after {} moves.",
                    verdict,
                    session.cube_state().move_history().len()
                )?;
                break;
            }
            algorithm => {
                let moves = match parse_sequence(algorithm) {
                    Ok(moves) => moves,
                    Err(e) => {
                        writeln!(output, "{}", e)?;
                        continue;
                    }
                };

                let mut last = None;
                for mv in moves {
                    let applied = registry.apply_move(id, mv)?;
                    if *applied.outcome() == MoveOutcome::IgnoredCompleted {
                        break;
                    }
                    last = Some(applied);
                }

                if let Some(applied) = last {
                    print_cube(&mut output, applied.state())?;
                }
                if registry.get(id).is_some_and(|s| s.is_completed()) {
                    writeln!(output, "Solved! Session completed.")?;
                    break;
                }
            }
        }
    }

    Ok(())
}

fn print_cube<W: Write>(output: &mut W, state: &CubeState) -> Result<()> {
    writeln!(output, "{}", state.display())?;
    writeln!(
        output,
        "moves: {}  solved: {}",
        state.move_history().len(),
        state.solved()
    )?;
    Ok(())
}
