//! Score command implementation for the Powline CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use powline_core::{PowderScorer, ScoreResult};
use powline_scorer::{HolidayCalendar, LiveScorer};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATE, ARG_HOLIDAYS, ARG_RESORTS, CliError, ENV_SCORE_RESORTS, load_payload,
    require_existing, write_report,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score each resort in a conditions payload with the live \
                 powder scorer. The payload is the aggregated feed JSON with \
                 a top-level resorts array; the report lists every resort \
                 with its score, verdict, and headline, best first.",
    about = "Score a conditions payload with the live powder scorer"
)]
#[ortho_config(prefix = "POWLINE")]
pub(crate) struct ScoreArgs {
    /// Path to the conditions payload JSON.
    #[arg(long = ARG_RESORTS, value_name = "path")]
    #[serde(default)]
    pub(crate) resorts: Option<Utf8PathBuf>,
    /// Date to score for; defaults to today.
    #[arg(long = ARG_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    /// Path to a JSON array of holiday dates; defaults to the bundled
    /// 2025-26 season calendar.
    #[arg(long = ARG_HOLIDAYS, value_name = "path")]
    #[serde(default)]
    pub(crate) holidays: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the conditions payload JSON.
    pub(crate) resorts: Utf8PathBuf,
    /// Date the context flags are derived for.
    pub(crate) date: NaiveDate,
    /// Optional holiday date list; `None` uses the bundled season.
    pub(crate) holidays: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.resorts, ARG_RESORTS)?;
        if let Some(holidays) = &self.holidays {
            require_existing(holidays, ARG_HOLIDAYS)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let resorts = args.resorts.ok_or(CliError::MissingArgument {
            field: ARG_RESORTS,
            env: ENV_SCORE_RESORTS,
        })?;
        let date = args.date.unwrap_or_else(today);
        Ok(Self {
            resorts,
            date,
            holidays: args.holidays,
        })
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// One scored resort in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ScoreReportRow {
    /// Stable resort identifier.
    pub(crate) slug: String,
    /// Display name.
    pub(crate) name: String,
    /// Score, verdict, and headline from the live scorer.
    #[serde(flatten)]
    pub(crate) result: ScoreResult,
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_score(args)?;
    write_report(writer, &report)
}

fn execute_score(args: ScoreArgs) -> Result<Vec<ScoreReportRow>, CliError> {
    let config = resolve_score_config(args)?;
    let signals = load_payload(&config.resorts)?;
    let calendar = load_calendar(config.holidays.as_deref())?;
    let context = calendar.context_for(config.date);
    let mut report: Vec<ScoreReportRow> = signals
        .into_iter()
        .map(|signal| {
            let result = LiveScorer.score(&signal, context);
            ScoreReportRow {
                slug: signal.slug,
                name: signal.name,
                result,
            }
        })
        .collect();
    // Stable sort keeps payload order between equal scores.
    report.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    Ok(report)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded holiday date list, or the bundled season calendar.
pub(crate) fn load_calendar(path: Option<&Utf8Path>) -> Result<HolidayCalendar, CliError> {
    let Some(path) = path else {
        return Ok(HolidayCalendar::season_2025_26());
    };
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenCalendar {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let dates: Vec<NaiveDate> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseCalendar {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(HolidayCalendar::new(dates))
}
