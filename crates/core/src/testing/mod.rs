//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarmdb_core::testing::{MockProber, MockResponse};
//!
//! let prober = MockProber::new();
//! prober
//!     .set_response(ProbeMode::Scrape, MockResponse::output("... scrape? 3 seeders, 1 leechers"))
//!     .await;
//!
//! let builder = StatsBuilder::new(prober, "_archive.torrent");
//! ```

mod mock_prober;

pub use mock_prober::{MockProber, MockResponse, RecordedProbe};

/// Canned `transmission-show` output used across tests.
pub mod fixtures {
    /// Scrape output from two trackers answering.
    pub fn scrape_output(seeders: u64, leechers: u64) -> String {
        format!(
            "Name: item\n\
             Querying http://bt1.archive.org:6969/scrape?info_hash=%01%02 ... {} seeders, {} leechers\n\
             Querying http://bt2.archive.org:6969/scrape?info_hash=%01%02 ... 0 seeders, 0 leechers\n",
            seeders, leechers
        )
    }

    /// Scrape output where no tracker knows the torrent.
    pub fn scrape_no_match() -> String {
        "Querying http://bt1.archive.org:6969/scrape?info_hash=%01%02 ... no match\n".to_string()
    }

    /// Size-mode output reporting `size` (e.g. `"160.1 kB"`).
    pub fn size_output(size: &str) -> String {
        format!(
            "Name: item\nFile: item_archive.torrent\n\nTRACKERS\n\nFILES\n\n  item.mp4 ({})\n\nTotal Size: {}\n",
            size, size
        )
    }
}
