use tracing::debug;

use super::banned::BannedSet;
use super::options::QueryOptions;
use crate::record::StatRecord;

/// Run a query over records in file order.
///
/// Admission happens in a single pass: banned identifiers, then the error
/// filter, then the numeric bounds, then the byte budget. The budget is
/// greedy in input order and only admitted records count against it. The
/// scan stops once `max_count` records are admitted, before sorting, so the
/// result is the top `max_count` of what was admitted rather than of the
/// whole database.
pub fn select<I>(records: I, banned: &BannedSet, options: &QueryOptions) -> Vec<StatRecord>
where
    I: IntoIterator<Item = StatRecord>,
{
    let mut selected = Vec::new();
    let mut total_bytes: u64 = 0;

    for record in records {
        if banned.contains(&record.identifier) {
            continue;
        }
        if options.exclude_errors && record.has_errors() {
            continue;
        }
        if !options.bounds_admit(&record) {
            continue;
        }
        if let Some(cap) = options.max_total_bytes {
            match total_bytes.checked_add(record.bytes) {
                Some(total) if total <= cap => total_bytes = total,
                _ => continue,
            }
        }

        selected.push(record);

        if options.max_count.is_some_and(|max| selected.len() >= max) {
            break;
        }
    }

    debug!(
        "Admitted {} records ({} bytes against budget)",
        selected.len(),
        total_bytes
    );

    // sort_by is stable: ties keep file order
    let sort_by = options.sort_by;
    selected.sort_by(|a, b| sort_by.key(b).cmp(&sort_by.key(a)));

    if let Some(max) = options.max_count {
        selected.truncate(max);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Bounds, SortBy};

    fn record(id: &str, seeders: u64, leechers: u64, bytes: u64) -> StatRecord {
        StatRecord {
            identifier: id.to_string(),
            seeders,
            leechers,
            bytes,
            errors: vec![],
        }
    }

    fn ids(records: &[StatRecord]) -> Vec<&str> {
        records.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn test_default_sorts_by_leechers_descending() {
        let records = vec![record("a", 0, 1, 0), record("b", 0, 3, 0), record("c", 0, 2, 0)];
        let result = select(records, &BannedSet::default(), &QueryOptions::default());
        assert_eq!(ids(&result), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let records = vec![
            record("first", 9, 1, 0),
            record("second", 1, 1, 0),
            record("third", 5, 1, 0),
        ];
        let result = select(records, &BannedSet::default(), &QueryOptions::default());
        assert_eq!(ids(&result), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_banned_beats_everything() {
        let banned: BannedSet = ["b"].into_iter().collect();
        let records = vec![record("a", 1, 1, 10), record("b", 100, 100, 10)];
        let options = QueryOptions {
            seeders: Bounds::new(Some(50), None),
            ..Default::default()
        };
        assert!(select(records.clone(), &banned, &options).is_empty());
        assert_eq!(
            ids(&select(records, &banned, &QueryOptions::default())),
            vec!["a"]
        );
    }

    #[test]
    fn test_exclude_errors() {
        let mut broken = record("broken", 10, 10, 10);
        broken.errors.push("no_tracker_response".to_string());
        let records = vec![broken, record("ok", 0, 0, 0)];

        let options = QueryOptions {
            exclude_errors: true,
            ..Default::default()
        };
        let result = select(records.clone(), &BannedSet::default(), &options);
        assert_eq!(ids(&result), vec!["ok"]);

        let result = select(records, &BannedSet::default(), &QueryOptions::default());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_budget_is_greedy_in_file_order() {
        let records = vec![record("big", 0, 0, 1024), record("small", 0, 0, 600)];
        let options = QueryOptions {
            max_total_bytes: Some(1500),
            ..Default::default()
        };
        let result = select(records, &BannedSet::default(), &options);
        assert_eq!(ids(&result), vec!["big"]);
    }

    #[test]
    fn test_budget_skips_then_admits_later_fit() {
        let records = vec![
            record("a", 0, 0, 1000),
            record("b", 0, 0, 800),
            record("c", 0, 0, 400),
        ];
        let options = QueryOptions {
            max_total_bytes: Some(1500),
            ..Default::default()
        };
        let result = select(records, &BannedSet::default(), &options);
        assert_eq!(ids(&result), vec!["a", "c"]);
        assert!(result.iter().map(|r| r.bytes).sum::<u64>() <= 1500);
    }

    #[test]
    fn test_filtered_records_do_not_consume_budget() {
        let records = vec![record("filtered", 0, 0, 1000), record("kept", 5, 0, 1000)];
        let options = QueryOptions {
            seeders: Bounds::new(Some(1), None),
            max_total_bytes: Some(1000),
            ..Default::default()
        };
        let result = select(records, &BannedSet::default(), &options);
        assert_eq!(ids(&result), vec!["kept"]);
    }

    #[test]
    fn test_max_count_stops_scan_before_sort() {
        let records = vec![
            record("a", 0, 1, 0),
            record("b", 0, 2, 0),
            record("best", 0, 99, 0),
        ];
        let options = QueryOptions {
            max_count: Some(2),
            ..Default::default()
        };
        let result = select(records, &BannedSet::default(), &options);
        assert_eq!(ids(&result), vec!["b", "a"]);
    }

    #[test]
    fn test_max_count_zero_yields_nothing() {
        let options = QueryOptions {
            max_count: Some(0),
            ..Default::default()
        };
        let result = select(vec![record("a", 1, 1, 1)], &BannedSet::default(), &options);
        assert!(result.is_empty());
    }

    #[test]
    fn test_sort_by_bytes() {
        let records = vec![record("a", 5, 2, 1024), record("b", 1, 0, 2048)];
        let options = QueryOptions {
            sort_by: SortBy::Bytes,
            ..Default::default()
        };
        let result = select(records, &BannedSet::default(), &options);
        assert_eq!(ids(&result), vec!["b", "a"]);
    }
}
