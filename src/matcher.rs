// 🎯 Matcher/Ranker - partial ship names → priority-ordered records
//
// Substring matching against ship name and both alternate names,
// case-insensitive, one output record per table row no matter how many
// queries hit it. Matched records are sorted by ECM priority descending
// with table order as the tie-break.

use std::cmp::Reverse;

use crate::db::ShipRecord;

// ============================================================================
// MATCH REPORT
// ============================================================================

/// Outcome of one query string.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    pub query: String,
    pub found: bool,
}

/// Result of a matching pass: display-ordered records plus per-query
/// match status.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Matched records, sorted by `ecm_priority` descending. Records with
    /// equal priority keep their table order (stable sort). Each table row
    /// appears at most once.
    pub ships: Vec<ShipRecord>,

    /// One entry per distinct query string, in first-seen argument order.
    /// Duplicate query strings collapse to a single entry.
    pub queries: Vec<QueryMatch>,
}

impl MatchReport {
    /// Queries that matched nothing, in first-seen order.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.queries
            .iter()
            .filter(|q| !q.found)
            .map(|q| q.query.as_str())
    }
}

// ============================================================================
// RANKING
// ============================================================================

/// Match every query against every record and rank the hits.
///
/// For each record, queries are tested in the order given against the ship
/// name, then alt_name_1, then alt_name_2; the first hit claims the record
/// and marks the query found. An empty query string matches everything -
/// substring containment with an empty needle is always true, and that
/// boundary is deliberately not special-cased.
pub fn rank(records: &[ShipRecord], queries: &[String]) -> MatchReport {
    // every distinct query starts unfound, first-seen order kept
    let mut query_matches: Vec<QueryMatch> = Vec::new();
    for query in queries {
        if !query_matches.iter().any(|q| &q.query == query) {
            query_matches.push(QueryMatch {
                query: query.clone(),
                found: false,
            });
        }
    }

    let mut ships = Vec::new();

    for record in records {
        let fields = [&record.ship, &record.alt_name_1, &record.alt_name_2];

        'this_record: for field in fields {
            let field_lower = field.to_lowercase();
            for qm in query_matches.iter_mut() {
                if field_lower.contains(&qm.query.to_lowercase()) {
                    qm.found = true;
                    ships.push(record.clone());
                    break 'this_record;
                }
            }
        }
    }

    // sort_by_key is stable, so equal priorities keep table order
    ships.sort_by_key(|ship| Reverse(ship.ecm_priority));

    MatchReport {
        ships,
        queries: query_matches,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ship: &str, class: &str, race: &str, priority: i32, alt1: &str, alt2: &str) -> ShipRecord {
        ShipRecord {
            ship: ship.to_string(),
            ship_class: class.to_string(),
            ecm_race: race.to_string(),
            ecm_priority: priority,
            alt_name_1: alt1.to_string(),
            alt_name_2: alt2.to_string(),
        }
    }

    fn sample_table() -> Vec<ShipRecord> {
        vec![
            record("Cormorant", "Destroyer", "Caldari", 2, "", ""),
            record("Falcon", "Force Recon Ship", "Caldari", 10, "", ""),
            record("Vexor Navy Issue", "Cruiser", "Gallente", 5, "vni", ""),
            record("Merlin", "Frigate", "Caldari", 1, "", ""),
        ]
    }

    fn queries(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_orders_by_priority_descending() {
        let report = rank(&sample_table(), &queries(&["corm", "merl", "vni", "falc"]));

        let names: Vec<&str> = report.ships.iter().map(|s| s.ship.as_str()).collect();
        assert_eq!(
            names,
            vec!["Falcon", "Vexor Navy Issue", "Cormorant", "Merlin"]
        );
        assert_eq!(report.unmatched().count(), 0);
    }

    #[test]
    fn test_case_insensitive_partial_match() {
        let report = rank(&sample_table(), &queries(&["FALC"]));

        assert_eq!(report.ships.len(), 1);
        assert_eq!(report.ships[0].ship, "Falcon");
        assert!(report.queries[0].found);
    }

    #[test]
    fn test_alt_name_match() {
        let report = rank(&sample_table(), &queries(&["vni"]));

        assert_eq!(report.ships.len(), 1);
        assert_eq!(report.ships[0].ship, "Vexor Navy Issue");
    }

    #[test]
    fn test_second_alt_name_match() {
        let table = vec![record("Scorpion Navy Issue", "Battleship", "Caldari", 4, "sni", "navy scorp")];
        let report = rank(&table, &queries(&["navy scorp"]));

        assert_eq!(report.ships.len(), 1);
    }

    #[test]
    fn test_record_included_once_despite_multiple_matching_queries() {
        // "vex" and "vni" both hit the same record
        let report = rank(&sample_table(), &queries(&["vex", "vni"]));

        assert_eq!(report.ships.len(), 1);
        assert_eq!(report.ships[0].ship, "Vexor Navy Issue");
        // first hit short-circuits the record, so only "vex" gets marked
        assert!(report.queries[0].found);
        assert!(!report.queries[1].found);
    }

    #[test]
    fn test_one_query_matches_multiple_records() {
        // "c" hits Cormorant and Falcon
        let report = rank(&sample_table(), &queries(&["c"]));

        let names: Vec<&str> = report.ships.iter().map(|s| s.ship.as_str()).collect();
        assert_eq!(names, vec!["Falcon", "Cormorant"]);
    }

    #[test]
    fn test_unmatched_query_reported() {
        let report = rank(&sample_table(), &queries(&["zzz"]));

        assert!(report.ships.is_empty());
        let unmatched: Vec<&str> = report.unmatched().collect();
        assert_eq!(unmatched, vec!["zzz"]);
    }

    #[test]
    fn test_matched_query_not_in_unmatched_set() {
        let report = rank(&sample_table(), &queries(&["falc", "zzz"]));

        let unmatched: Vec<&str> = report.unmatched().collect();
        assert_eq!(unmatched, vec!["zzz"]);
    }

    #[test]
    fn test_duplicate_queries_collapse() {
        let report = rank(&sample_table(), &queries(&["zzz", "falc", "zzz"]));

        assert_eq!(report.queries.len(), 2);
        let unmatched: Vec<&str> = report.unmatched().collect();
        assert_eq!(unmatched, vec!["zzz"]);
    }

    #[test]
    fn test_equal_priority_keeps_table_order() {
        let table = vec![
            record("Blackbird", "Cruiser", "Caldari", 9, "", ""),
            record("Celestis", "Cruiser", "Gallente", 9, "", ""),
            record("Bellicose", "Cruiser", "Minmatar", 9, "", ""),
        ];
        let report = rank(&table, &queries(&["b", "celestis"]));

        let names: Vec<&str> = report.ships.iter().map(|s| s.ship.as_str()).collect();
        assert_eq!(names, vec!["Blackbird", "Celestis", "Bellicose"]);
    }

    #[test]
    fn test_empty_table() {
        let report = rank(&[], &queries(&["falc"]));

        assert!(report.ships.is_empty());
        assert_eq!(report.unmatched().collect::<Vec<_>>(), vec!["falc"]);
    }

    #[test]
    fn test_empty_query_matches_every_record() {
        // substring containment with an empty needle is always true
        let report = rank(&sample_table(), &queries(&[""]));

        assert_eq!(report.ships.len(), 4);
        assert!(report.queries[0].found);
    }

    #[test]
    fn test_duplicate_table_rows_each_matchable() {
        let table = vec![
            record("Griffin", "Frigate", "Caldari", 9, "", ""),
            record("Griffin", "Frigate", "Caldari", 9, "", ""),
        ];
        let report = rank(&table, &queries(&["grif"]));

        assert_eq!(report.ships.len(), 2);
    }
}
