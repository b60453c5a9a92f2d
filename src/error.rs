//! Error types for loading sources and projecting plots.

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Failure to obtain the source text. This is the only way a load can fail;
/// the parser itself accepts any text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed (missing, unreadable, ...).
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{path} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    /// The background load worker went away without answering.
    #[error("load worker for {path} stopped before finishing")]
    WorkerGone { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Why a plot request produced nothing to draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// No row had both selected columns parse as finite numbers.
    #[error("no numeric data to plot for '{x_key}' against '{y_key}'")]
    NoNumericData { x_key: String, y_key: String },

    /// The requested column is not part of the current table.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}
