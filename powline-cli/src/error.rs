//! Error types emitted by the Powline CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Powline CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the conditions payload failed.
    #[error("failed to open conditions payload at {path:?}: {source}")]
    OpenPayload {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Conditions payload JSON could not be decoded.
    #[error("failed to parse conditions payload at {path:?}: {source}")]
    ParsePayload {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the user profile failed.
    #[error("failed to open user profile at {path:?}: {source}")]
    OpenProfile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// User profile JSON could not be decoded.
    #[error("failed to parse user profile at {path:?}: {source}")]
    ParseProfile {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the holiday calendar failed.
    #[error("failed to open holiday calendar at {path:?}: {source}")]
    OpenCalendar {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Holiday calendar JSON could not be decoded.
    #[error("failed to parse holiday calendar at {path:?}: {source}")]
    ParseCalendar {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}
