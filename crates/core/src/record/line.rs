use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::StatRecord;

/// Separator between identifier, stats and error sections.
const SECTION_SEPARATOR: &str = " # ";

static STATS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+) seeders?, (\d+) leechers?, (\d+) bytes?").expect("valid stats pattern")
});

/// Parse one database line.
///
/// Returns `None` for blank lines, comment lines (leading `#`) and anything
/// that does not follow the record grammar. Never fails.
pub fn parse_record_line(line: &str) -> Option<StatRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut sections = line.splitn(3, SECTION_SEPARATOR);
    let identifier = sections.next()?.trim();
    let stats = sections.next()?.trim();
    let errors = sections.next().map(str::trim).unwrap_or_default();

    if identifier.is_empty() {
        return None;
    }

    let caps = STATS_PATTERN.captures(stats)?;
    let seeders = caps.get(1)?.as_str().parse().ok()?;
    let leechers = caps.get(2)?.as_str().parse().ok()?;
    let bytes = caps.get(3)?.as_str().parse().ok()?;

    Some(StatRecord {
        identifier: identifier.to_string(),
        seeders,
        leechers,
        bytes,
        errors: errors.split_whitespace().map(str::to_string).collect(),
    })
}
