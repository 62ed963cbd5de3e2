//! Command-line interface for the Powline engine's offline tooling.
//!
//! Two subcommands cover the reporting workflows: `score` runs the live
//! powder scorer over a decoded conditions payload, and `rank` sections a
//! payload into the dashboard shape for a user profile. Both read JSON from
//! disk and write a pretty-printed JSON report to stdout.
#![forbid(unsafe_code)]

use std::io::{BufReader, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use powline_core::ResortSignal;
use serde::{Deserialize, Serialize};

mod error;
mod rank;
mod score;

pub use error::CliError;

const ARG_RESORTS: &str = "resorts";
const ARG_DATE: &str = "date";
const ARG_HOLIDAYS: &str = "holidays";
const ARG_PROFILE: &str = "profile";
const ARG_RADIUS: &str = "radius";
const ENV_SCORE_RESORTS: &str = "POWLINE_CMDS_SCORE_RESORTS";
const ENV_RANK_RESORTS: &str = "POWLINE_CMDS_RANK_RESORTS";

/// Run the Powline CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => score::run_score(args),
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "powline",
    about = "Offline scoring and ranking utilities for the Powline engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a conditions payload with the live powder scorer.
    Score(score::ScoreArgs),
    /// Rank a conditions payload into the dashboard sections.
    Rank(rank::RankArgs),
}

/// Top level of an aggregated conditions payload.
#[derive(Debug, Clone, Deserialize)]
struct ConditionsPayload {
    resorts: Vec<ResortSignal>,
}

/// Loads the resorts from a JSON conditions payload on disk.
///
/// The payload is the aggregated feed document with a top-level `resorts`
/// array; metadata fields around it are ignored.
fn load_payload(path: &Utf8Path) -> Result<Vec<ResortSignal>, CliError> {
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenPayload {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let payload: ConditionsPayload =
        serde_json::from_reader(reader).map_err(|source| CliError::ParsePayload {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(payload.resorts)
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match std::fs::metadata(path.as_std_path()) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes a pretty-printed JSON report followed by a newline.
fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
mod tests;
