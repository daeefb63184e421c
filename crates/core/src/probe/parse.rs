//! Parsers for `transmission-show` output.
//!
//! Both parsers are tolerant: unrecognised lines are ignored, and the
//! result always carries a usable value.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::types::{ProbeWarning, Probed, SwarmCounts};
use crate::units::{scale_to_bytes, SizeUnit};

/// Marker on lines that report a tracker scrape.
const SCRAPE_MARKER: &str = "scrape?";

/// Marker on the line that reports total payload size.
const SIZE_MARKER: &str = "Total Size:";

static SEEDERS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s+seeders?").expect("valid seeders pattern"));

static LEECHERS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s+leechers?").expect("valid leechers pattern"));

static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Total Size:\s*([\d.,]+)\s*([A-Za-z]+)").expect("valid total size pattern")
});

/// Extract seeder and leecher counts from scrape-mode output.
///
/// Several trackers may answer; the largest count seen for each field wins.
pub fn parse_scrape_output(output: &str) -> Probed<SwarmCounts> {
    let mut probed = Probed::clean(SwarmCounts::default());

    for line in output.lines().filter(|l| l.contains(SCRAPE_MARKER)) {
        let lower = line.to_lowercase();
        if lower.contains("no match") {
            probed = probed.warn(ProbeWarning::NoTrackerResponse);
        } else if lower.contains("error") {
            probed = probed.warn(ProbeWarning::TrackerError);
        } else {
            if let Some(seeders) = max_count(&SEEDERS_PATTERN, line) {
                probed.value.seeders = probed.value.seeders.max(seeders);
            }
            if let Some(leechers) = max_count(&LEECHERS_PATTERN, line) {
                probed.value.leechers = probed.value.leechers.max(leechers);
            }
        }
    }

    probed
}

/// Extract the total payload size in bytes from size-mode output.
pub fn parse_size_output(output: &str) -> Probed<u64> {
    output
        .lines()
        .filter(|l| l.contains(SIZE_MARKER))
        .find_map(parse_size_line)
        .map(Probed::clean)
        .unwrap_or_else(|| Probed::failed(vec![ProbeWarning::NoSizeFound]))
}

fn max_count(pattern: &Regex, line: &str) -> Option<u64> {
    pattern
        .captures_iter(line)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u64>().ok())
        .max()
}

fn parse_size_line(line: &str) -> Option<u64> {
    let caps = SIZE_PATTERN.captures(line)?;
    let value: f64 = caps.get(1)?.as_str().replace(',', "").parse().ok()?;
    let unit = SizeUnit::from_suffix(caps.get(2)?.as_str())?;
    Some(scale_to_bytes(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRAPE_OK: &str = "\
Name: some-item
File: some-item_archive.torrent

Querying http://bt1.archive.org:6969/scrape?info_hash=%AB%CD ... 4 seeders, 1 leechers
Querying http://bt2.archive.org:6969/scrape?info_hash=%AB%CD ... 7 seeders, 0 leechers
";

    #[test]
    fn test_scrape_keeps_maximum_per_field() {
        let probed = parse_scrape_output(SCRAPE_OK);
        assert!(probed.is_clean());
        assert_eq!(
            probed.value,
            SwarmCounts {
                seeders: 7,
                leechers: 1
            }
        );
    }

    #[test]
    fn test_scrape_singular_and_case() {
        let probed = parse_scrape_output("http://t/scrape? ... 1 Seeder, 1 LEECHER");
        assert_eq!(probed.value.seeders, 1);
        assert_eq!(probed.value.leechers, 1);
    }

    #[test]
    fn test_scrape_ignores_unmarked_lines() {
        let probed = parse_scrape_output("Total: 99 seeders, 99 leechers\n");
        assert_eq!(probed.value, SwarmCounts::default());
        assert!(probed.is_clean());
    }

    #[test]
    fn test_scrape_no_match() {
        let output = "Querying http://t/scrape?info_hash=x ... No Match\n";
        let probed = parse_scrape_output(output);
        assert_eq!(probed.warnings, vec![ProbeWarning::NoTrackerResponse]);
        assert_eq!(probed.value, SwarmCounts::default());
    }

    #[test]
    fn test_scrape_tracker_error() {
        let output = "\
Querying http://a/scrape?info_hash=x ... error: connection refused
Querying http://b/scrape?info_hash=x ... 3 seeders, 2 leechers
";
        let probed = parse_scrape_output(output);
        assert_eq!(probed.warnings, vec![ProbeWarning::TrackerError]);
        assert_eq!(probed.value.seeders, 3);
        assert_eq!(probed.value.leechers, 2);
    }

    #[test]
    fn test_no_match_takes_precedence_over_error() {
        let output = "http://a/scrape? error: no match\n";
        let probed = parse_scrape_output(output);
        assert_eq!(probed.warnings, vec![ProbeWarning::NoTrackerResponse]);
    }

    #[test]
    fn test_size_lowercase_kb() {
        let probed = parse_size_output("Name: x\nTotal Size: 160.1 kB\n");
        assert!(probed.is_clean());
        assert_eq!(probed.value, 163942);
    }

    #[test]
    fn test_size_without_space_and_commas() {
        assert_eq!(parse_size_output("Total Size: 160.1kB").value, 163942);
        assert_eq!(
            parse_size_output("Total Size: 1,024 MB").value,
            1024 * 1024 * 1024
        );
        assert_eq!(parse_size_output("Total Size: 2 GiB").value, 2 * 1024u64.pow(3));
        assert_eq!(parse_size_output("Total Size: 12 B").value, 12);
    }

    #[test]
    fn test_size_first_parsable_line_wins() {
        let output = "\
Total Size: unknown
Total Size: 1.5 GB
Total Size: 9 TB
";
        assert_eq!(parse_size_output(output).value, 1610612736);
    }

    #[test]
    fn test_size_missing() {
        let probed = parse_size_output("Name: x\nPiece Count: 4\n");
        assert_eq!(probed.value, 0);
        assert_eq!(probed.warnings, vec![ProbeWarning::NoSizeFound]);

        let probed = parse_size_output("Total Size: 3 furlongs\n");
        assert_eq!(probed.warnings, vec![ProbeWarning::NoSizeFound]);
    }
}
