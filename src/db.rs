// 🛰️ Ship Database - CSV → ShipRecord
// Loads the static ship reference table (ecm.csv) into typed records.
//
// The table is read once per invocation and never mutated afterwards.
// Malformed rows (wrong column count, non-numeric priority) fail here,
// before the matcher ever sees them.

use serde::Deserialize;
use std::path::Path;

use crate::error::EcmError;

// ============================================================================
// SHIP RECORD
// ============================================================================

/// One row of the ship reference table.
///
/// Field order mirrors the CSV columns: ship, ship_class, ecm_race,
/// ecm_priority, alt_name_1, alt_name_2. Records are values - loaded once,
/// read-only for the rest of the run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipRecord {
    /// Primary ship name, e.g. "Vexor Navy Issue"
    pub ship: String,

    /// Hull class, e.g. "Force Recon Ship"
    pub ship_class: String,

    /// Faction the ship's sensors belong to. Recognized values are
    /// Minmatar/Caldari/Gallente/Amarr (any casing); anything else is
    /// allowed but maps to the unknown jammer label.
    pub ecm_race: String,

    /// ECM jamming priority, 1..10. Highest priority is displayed first.
    /// Used only for ordering - 0 or a negative value is legal, just
    /// sorts last.
    pub ecm_priority: i32,

    /// Alternate name or abbreviation, e.g. "vni". May be empty.
    pub alt_name_1: String,

    /// Second alternate name. May be empty.
    pub alt_name_2: String,
}

// ============================================================================
// CSV LOADING
// ============================================================================

/// Load the ship table from a CSV file with a header row.
///
/// Duplicate rows are permitted and kept - each one is independently
/// matchable. Row order in the file is preserved; the matcher relies on it
/// for its stable tie-break.
pub fn load_csv(csv_path: &Path) -> Result<Vec<ShipRecord>, EcmError> {
    let mut rdr = csv::Reader::from_path(csv_path).map_err(|source| EcmError::DatabaseOpen {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: ShipRecord = result.map_err(|source| EcmError::BadRecord {
            // +2: records.len() rows parsed so far, plus the header row,
            // one-based
            line: records.len() as u64 + 2,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
