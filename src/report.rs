// 📋 Report - fixed-width console output
//
// Column layout is load-bearing: fleet pilots eyeball this in a terminal
// next to the game client, so priority stays right-aligned in 2 columns and
// every text field gets a fixed width.

use std::io::{self, Write};

use crate::jammer::jammer_for_race;
use crate::matcher::MatchReport;

/// Write the ranked match list, a blank line, then any unmatched queries.
///
/// Line format per matched ship:
/// `{:>2} {:<25} ({:<25}) {:<10} {:<15}` =
/// priority, ship, jammer label, race, class.
pub fn write_report<W: Write>(out: &mut W, report: &MatchReport) -> io::Result<()> {
    for ship in &report.ships {
        writeln!(
            out,
            "{:>2} {:<25} ({:<25}) {:<10} {:<15}",
            ship.ecm_priority,
            ship.ship,
            jammer_for_race(&ship.ecm_race),
            ship.ecm_race,
            ship.ship_class,
        )?;
    }

    writeln!(out)?;

    for query in report.unmatched() {
        writeln!(out, "'{}' - No matching ship name", query)?;
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
