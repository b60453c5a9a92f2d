use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::error::LoadError;

use super::model::ColumnTable;
use super::parser;

// ---------------------------------------------------------------------------
// Synchronous entry-points
// ---------------------------------------------------------------------------

/// Read a source file as UTF-8 text. A leading byte-order mark is dropped.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Read and parse a source file into a fresh [`ColumnTable`].
pub fn load_source(path: &Path) -> Result<ColumnTable, LoadError> {
    let text = read_source(path)?;
    Ok(parser::parse(&text))
}

// ---------------------------------------------------------------------------
// Background loading
// ---------------------------------------------------------------------------

/// Result of one background load.
pub type LoadOutcome = Result<ColumnTable, LoadError>;

/// A load running on a worker thread.
///
/// Dropping it abandons the load: the worker's answer is discarded.
pub struct PendingLoad {
    path: PathBuf,
    rx: Receiver<LoadOutcome>,
}

impl PendingLoad {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check for the worker's answer.
    pub fn poll(&self) -> Option<LoadOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::WorkerGone {
                path: self.path.clone(),
            })),
        }
    }

    /// Block until the worker answers.
    #[cfg(test)]
    pub fn wait(self) -> LoadOutcome {
        self.rx.recv().unwrap_or(Err(LoadError::WorkerGone { path: self.path }))
    }
}

/// Start loading `path` on a worker thread. `notify` runs once the outcome is
/// ready (e.g. to wake the UI).
pub fn spawn_load<F>(path: PathBuf, notify: F) -> PendingLoad
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let worker_path = path.clone();

    thread::spawn(move || {
        log::info!("Loading {}", worker_path.display());
        let outcome = load_source(&worker_path);
        if tx.send(outcome).is_err() {
            log::debug!(
                "Discarding result for {}: load was superseded",
                worker_path.display()
            );
            return;
        }
        notify();
    });

    PendingLoad { path, rx }
}
