// 📡 Jammer Mapping - ecm_race → jammer label
// Which ECM jammer to activate against each faction's sensor type.
//
// The mapping is total: the four recognized factions get their fixed label,
// everything else (including empty or misspelled races) falls back to the
// unknown label. Data-driven table so new factions are a one-line change.

// ============================================================================
// JAMMER TABLE
// ============================================================================

/// Recognized factions and their jammer labels, matched case-insensitively.
const JAMMER_TABLE: &[(&str, &str)] = &[
    ("minmatar", "Ladar - Red"),
    ("caldari", "Gravimetric - Blue"),
    ("gallente", "Magnetometric - Turquoise"),
    ("amarr", "Radar - Yellow"),
];

/// Label used for any race not in the table.
pub const UNKNOWN_JAMMER: &str = "Unknown - No ECM Race";

/// Map a ship's faction to the jammer label to display.
///
/// Pure and total - never fails, never allocates beyond the lowercase copy.
pub fn jammer_for_race(race: &str) -> &'static str {
    let race_lower = race.to_lowercase();

    JAMMER_TABLE
        .iter()
        .find(|(faction, _)| *faction == race_lower)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_JAMMER)
}

// ============================================================================
// TESTS
// ============================================================================
