// ⚠️ Error Kinds - typed failures for the load path
//
// No-match is NOT an error: a query with zero matches is a normal result,
// reported by the matcher. Everything here is terminal - there is no state
// to roll back, so there is no recovery path.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while loading the ship database.
///
/// Matching itself never fails; once records are loaded the rest of the run
/// is infallible.
#[derive(Debug, Error)]
pub enum EcmError {
    /// The ship database file could not be opened or read.
    #[error("failed to open ship database {path:?}: {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row had the wrong column count or a non-numeric priority.
    /// Fails fast so malformed data never reaches the matcher.
    #[error("bad ship record at line {line}: {source}")]
    BadRecord {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
