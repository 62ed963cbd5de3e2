//! Rank command implementation for the Powline CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use powline_core::{DriveRadius, UserProfile};
use powline_rank::{DashboardSections, rank_for_dashboard};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PROFILE, ARG_RADIUS, ARG_RESORTS, CliError, ENV_RANK_RESORTS, load_payload,
    require_existing, write_report,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a conditions payload into the dashboard sections for \
                 a user profile: the top pick, the remaining nearby resorts, \
                 and the farther resorts worth the drive. The radius flag \
                 overrides the profile's drive tolerance.",
    about = "Rank a conditions payload into the dashboard sections"
)]
#[ortho_config(prefix = "POWLINE")]
pub(crate) struct RankArgs {
    /// Path to the conditions payload JSON.
    #[arg(long = ARG_RESORTS, value_name = "path")]
    #[serde(default)]
    pub(crate) resorts: Option<Utf8PathBuf>,
    /// Path to a user profile JSON; defaults to the first-load profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Drive radius override: 45, 60, 120, 180, or fly.
    #[arg(long = ARG_RADIUS, value_name = "radius")]
    #[serde(default)]
    pub(crate) radius: Option<DriveRadius>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the conditions payload JSON.
    pub(crate) resorts: Utf8PathBuf,
    /// Optional user profile; `None` uses the first-load defaults.
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Optional drive radius overriding the profile's tolerance.
    pub(crate) radius: Option<DriveRadius>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.resorts, ARG_RESORTS)?;
        if let Some(profile) = &self.profile {
            require_existing(profile, ARG_PROFILE)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let resorts = args.resorts.ok_or(CliError::MissingArgument {
            field: ARG_RESORTS,
            env: ENV_RANK_RESORTS,
        })?;
        Ok(Self {
            resorts,
            profile: args.profile,
            radius: args.radius,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let sections = execute_rank(args)?;
    write_report(writer, &sections)
}

fn execute_rank(args: RankArgs) -> Result<DashboardSections, CliError> {
    let config = resolve_rank_config(args)?;
    let signals = load_payload(&config.resorts)?;
    let profile = load_profile(config.profile.as_deref())?;
    let radius = config.radius.unwrap_or(profile.max_drive_minutes);
    Ok(rank_for_dashboard(signals, radius))
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded user profile, or the first-load defaults.
pub(crate) fn load_profile(path: Option<&Utf8Path>) -> Result<UserProfile, CliError> {
    let Some(path) = path else {
        return Ok(UserProfile::default());
    };
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenProfile {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })
}
