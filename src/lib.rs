// ECM Lookup - Core Library
// Exposes the ship database, matcher/ranker, jammer mapping and report
// rendering for use in the CLI and tests.

pub mod db;
pub mod error;
pub mod jammer;
pub mod matcher;
pub mod report;

// Re-export commonly used types
pub use db::{load_csv, ShipRecord};
pub use error::EcmError;
pub use jammer::{jammer_for_race, UNKNOWN_JAMMER};
pub use matcher::{rank, MatchReport, QueryMatch};
pub use report::write_report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
