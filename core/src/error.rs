use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure while turning Criterion output into a report.
///
/// Every variant carries the file it was raised for so the CLI can point at
/// the offending input without extra context.
#[derive(Debug)]
pub enum ReportError {
    /// An expected file could not be read, or the report could not be written.
    Io { path: PathBuf, source: io::Error },

    /// The file is not valid JSON, or a field holds the wrong type of value.
    Parse { path: PathBuf, source: serde_json::Error },

    /// A required field is absent or `null`.
    MissingField { path: PathBuf, field: &'static str },

    /// The runtime estimate cannot be turned into a throughput.
    InvalidRuntime { path: PathBuf, value: f64 },

    /// The configuration file is unreadable or malformed.
    Config { path: PathBuf, message: String },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ReportError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn missing_field(path: impl Into<PathBuf>, field: &'static str) -> Self {
        ReportError::MissingField {
            path: path.into(),
            field,
        }
    }

    /// File the error was raised for.
    pub fn path(&self) -> &Path {
        match self {
            ReportError::Io { path, .. }
            | ReportError::Parse { path, .. }
            | ReportError::MissingField { path, .. }
            | ReportError::InvalidRuntime { path, .. }
            | ReportError::Config { path, .. } => path,
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            ReportError::Parse { path, source } => write!(f, "failed to parse {}: {}", path.display(), source),
            ReportError::MissingField { path, field } => {
                write!(f, "missing required field `{}` in {}", field, path.display())
            }
            ReportError::InvalidRuntime { path, value } => write!(
                f,
                "runtime estimate {} in {} must be a positive finite number",
                value,
                path.display()
            ),
            ReportError::Config { path, message } => {
                write!(f, "invalid configuration {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io { source, .. } => Some(source),
            ReportError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
