//! Turns one torrent file into one stats record.
//!
//! The builder never fails: missing files, tool crashes, timeouts and
//! unhelpful trackers all end up as error tokens on the record.

use std::path::Path;
use tracing::{debug, warn};

use crate::probe::{
    parse_scrape_output, parse_size_output, ProbeMode, ProbeWarning, Probed, Prober, SwarmCounts,
};
use crate::record::StatRecord;

/// Derive an item identifier from a torrent path.
///
/// Takes the final path component and strips `suffix` when present.
pub fn identifier_from_path(path: &Path, suffix: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    if suffix.is_empty() {
        return name;
    }
    name.strip_suffix(suffix)
        .map(str::to_string)
        .unwrap_or(name)
}

/// Builds stats records by probing torrent files.
pub struct StatsBuilder<P> {
    prober: P,
    torrent_suffix: String,
}

impl<P: Prober> StatsBuilder<P> {
    /// Creates a builder that strips `torrent_suffix` from file names.
    pub fn new(prober: P, torrent_suffix: impl Into<String>) -> Self {
        Self {
            prober,
            torrent_suffix: torrent_suffix.into(),
        }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Probe a torrent file. Scrape warnings precede size warnings.
    pub async fn build(&self, path: &Path) -> StatRecord {
        let mut record = StatRecord::empty(identifier_from_path(path, &self.torrent_suffix));

        if !matches!(tokio::fs::try_exists(path).await, Ok(true)) {
            warn!("Torrent file not found: {:?}", path);
            record.errors.push(ProbeWarning::FileNotFound.to_string());
            return record;
        }

        debug!("Probing {:?} with {}", path, self.prober.name());
        let counts = self.scrape(path).await;
        record.seeders = counts.value.seeders;
        record.leechers = counts.value.leechers;

        let size = self.size(path).await;
        record.bytes = size.value;

        record.errors = counts
            .warnings
            .iter()
            .chain(size.warnings.iter())
            .map(ToString::to_string)
            .collect();

        debug!(
            "Built record for {}: {} seeders, {} leechers, {} bytes, {} errors",
            record.identifier,
            record.seeders,
            record.leechers,
            record.bytes,
            record.errors.len()
        );

        record
    }

    async fn scrape(&self, path: &Path) -> Probed<SwarmCounts> {
        match self.prober.run(ProbeMode::Scrape, path).await {
            Ok(stdout) => parse_scrape_output(&stdout),
            Err(e) => {
                warn!("Scrape probe failed for {:?}: {}", path, e);
                Probed::failed(e.into_warnings())
            }
        }
    }

    async fn size(&self, path: &Path) -> Probed<u64> {
        match self.prober.run(ProbeMode::Size, path).await {
            Ok(stdout) => parse_size_output(&stdout),
            Err(e) => {
                warn!("Size probe failed for {:?}: {}", path, e);
                Probed::failed(e.into_warnings())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_identifier_strips_suffix() {
        assert_eq!(
            identifier_from_path(
                Path::new("torrent-file-candidates/foo-bar_archive.torrent"),
                "_archive.torrent"
            ),
            "foo-bar"
        );
    }

    #[test]
    fn test_identifier_without_suffix() {
        assert_eq!(
            identifier_from_path(Path::new("/tmp/other.torrent"), "_archive.torrent"),
            "other.torrent"
        );
        assert_eq!(
            identifier_from_path(&PathBuf::from("plain"), "_archive.torrent"),
            "plain"
        );
    }

    #[test]
    fn test_identifier_empty_suffix_is_noop() {
        assert_eq!(identifier_from_path(Path::new("a/b.torrent"), ""), "b.torrent");
    }
}
