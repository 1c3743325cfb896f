// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Garland CLI.
//!
//! Loads a participant list, solves the gift-exchange assignment, prints the
//! result, and optionally writes one pairing document per giver. Failure
//! modes map to distinct exit codes so scripts can tell "nothing to load"
//! apart from "no valid assignment exists":
//!
//! - 0: success (rendering problems downgrade to warnings)
//! - 1: invalid participants file or any other failure
//! - 2: no participants source found
//! - 3: the constraints admit no valid assignment

use clap::Parser;
use garland_model::{
    loading::{LoadError, ParticipantSource},
    roster::Roster,
};
use garland_render::{pdf::PairingDocumentWriter, report};
use garland_solver::solver::{SolverBuilder, DEFAULT_ATTEMPT_BUDGET};
use rand::{rngs::StdRng, SeedableRng};
use std::{io::Write, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Assign every participant of a gift exchange exactly one recipient.
#[derive(Debug, Parser)]
#[command(name = "garland")]
#[command(version)]
#[command(about = "Assign every participant of a gift exchange exactly one recipient")]
struct Cli {
    /// Path to a participants JSON file. Falls back to $GARLAND_PARTICIPANTS
    /// and then to resources/participants.json[.example].
    #[arg(long)]
    participants: Option<PathBuf>,

    /// Directory to write pairing PDFs into. If omitted, no PDFs are written.
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Image embedded in each pairing PDF.
    #[arg(long)]
    artwork: Option<PathBuf>,

    /// Bound on randomized attempts before the exact fallback.
    #[arg(long, default_value_t = DEFAULT_ATTEMPT_BUDGET)]
    attempts: usize,

    /// Permit participants to draw themselves.
    #[arg(long)]
    allow_self: bool,

    /// Seed the randomness source for a reproducible assignment.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the assignment as a JSON object instead of a table.
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Process exit codes. Distinguishable by callers per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ExitStatus {
    Success = 0,
    Failure = 1,
    NoInput = 2,
    Unsatisfiable = 3,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(cli) as i32);
}

fn run(cli: Cli) -> ExitStatus {
    let raw = match ParticipantSource::new().load(cli.participants.as_deref()) {
        Ok(raw) => raw,
        Err(err @ LoadError::NotFound(_)) => {
            eprintln!("{err}");
            return ExitStatus::NoInput;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitStatus::Failure;
        }
    };

    let roster = match Roster::from_json_values(&raw) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("invalid participants file: {err}");
            return ExitStatus::Failure;
        }
    };

    let builder = SolverBuilder::new()
        .with_attempt_budget(cli.attempts)
        .with_ban_self(!cli.allow_self);
    let solved = match cli.seed {
        Some(seed) => {
            let mut solver = builder.with_rng(StdRng::seed_from_u64(seed)).build();
            solver.solve(&roster)
        }
        None => {
            let mut solver = builder.build();
            solver.solve(&roster)
        }
    };

    let assignment = match solved {
        Ok(assignment) => assignment,
        Err(err) => {
            eprintln!("{err}");
            return ExitStatus::Unsatisfiable;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let printed = if cli.json {
        writeln!(stdout, "{}", report::to_json(&roster, &assignment))
    } else {
        report::write_listing(&mut stdout, &roster, &assignment)
    };
    if let Err(err) = printed {
        eprintln!("failed to write the assignment listing: {err}");
        return ExitStatus::Failure;
    }

    if let Some(outdir) = &cli.outdir {
        let mut writer = PairingDocumentWriter::new(outdir);
        if let Some(artwork) = &cli.artwork {
            writer = writer.with_artwork(artwork);
        }
        // The assignment is already produced; a rendering failure is a
        // warning, not a solve failure.
        match writer.write_all(&roster, &assignment) {
            Ok(written) => info!(count = written.len(), "wrote pairing documents"),
            Err(err) => warn!(error = %err, "skipping pairing documents"),
        }
    }

    ExitStatus::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinguishable() {
        assert_eq!(ExitStatus::Success as i32, 0);
        assert_eq!(ExitStatus::Failure as i32, 1);
        assert_eq!(ExitStatus::NoInput as i32, 2);
        assert_eq!(ExitStatus::Unsatisfiable as i32, 3);
    }

    #[test]
    fn test_cli_parses_solver_tunables() {
        let cli = Cli::parse_from([
            "garland",
            "--attempts",
            "50",
            "--allow-self",
            "--seed",
            "7",
        ]);
        assert_eq!(cli.attempts, 50);
        assert!(cli.allow_self);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.participants.is_none());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["garland"]);
        assert_eq!(cli.attempts, DEFAULT_ATTEMPT_BUDGET);
        assert!(!cli.allow_self);
        assert!(!cli.json);
        assert!(cli.outdir.is_none());
    }

    #[test]
    fn test_missing_explicit_participants_file_is_no_input() {
        let cli = Cli::parse_from([
            "garland",
            "--participants",
            "/definitely/not/here/participants.json",
        ]);
        assert_eq!(run(cli), ExitStatus::NoInput);
    }
}
