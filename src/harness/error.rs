//! Error types for the verification harness.

use std::fmt;
use std::io;

use crate::board::FenError;

/// Invalid invocation. Fatal: the run stops before any fixture is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two arguments, so no `-d <depth>` pair can be present
    MissingDepth,
    /// Depth absent, zero, or beyond the corpus
    DepthOutOfRange { found: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDepth => write!(f, "Depth must be provided using the -d flag"),
            ConfigError::DepthOutOfRange { .. } => write!(f, "Depth should be within 1-5"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failures the verification loop does not handle: a fixture that is not a
/// valid position, or output that cannot be written.
#[derive(Debug)]
pub enum HarnessError {
    Fen { index: usize, source: FenError },
    Io(io::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Fen { index, source } => {
                write!(f, "fixture {index} is not a valid position: {source}")
            }
            HarnessError::Io(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Fen { source, .. } => Some(source),
            HarnessError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        HarnessError::Io(err)
    }
}
