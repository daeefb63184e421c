use crate::record::StatRecord;

/// Download root for archive.org items.
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://archive.org/download";

/// How a selected record is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    /// Bare identifier with a `name=` annotation.
    #[default]
    Names,
    /// Torrent download URL with an `identifier=` annotation.
    Urls,
}

/// Torrent URL for an item under `base`.
pub fn download_url(base: &str, identifier: &str) -> String {
    format!(
        "{}/{}/{}_archive.torrent",
        base.trim_end_matches('/'),
        identifier,
        identifier
    )
}

/// Format one output line for a selected record.
pub fn render_line(record: &StatRecord, projection: Projection, download_base: &str) -> String {
    let (object, annotation) = match projection {
        Projection::Names => (
            record.identifier.clone(),
            format!("name={}", record.identifier),
        ),
        Projection::Urls => (
            download_url(download_base, &record.identifier),
            format!("identifier={}", record.identifier),
        ),
    };

    let mut line = format!(
        "{} # leeches={} seeds={} peers={} size={} {}",
        object,
        record.leechers,
        record.seeders,
        record.peers(),
        record.bytes,
        annotation
    );
    if record.has_errors() {
        line.push_str(" errors=");
        line.push_str(&record.error_text());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatRecord {
        StatRecord {
            identifier: "a".to_string(),
            seeders: 5,
            leechers: 2,
            bytes: 1024,
            errors: vec![],
        }
    }

    #[test]
    fn test_render_names() {
        assert_eq!(
            render_line(&sample(), Projection::Names, DEFAULT_DOWNLOAD_BASE),
            "a # leeches=2 seeds=5 peers=7 size=1024 name=a"
        );
    }

    #[test]
    fn test_render_urls() {
        assert_eq!(
            render_line(&sample(), Projection::Urls, DEFAULT_DOWNLOAD_BASE),
            "https://archive.org/download/a/a_archive.torrent # leeches=2 seeds=5 peers=7 size=1024 identifier=a"
        );
    }

    #[test]
    fn test_render_errors() {
        let mut record = sample();
        record.errors = vec!["scrape_timeout".to_string(), "no_size_found".to_string()];
        assert!(render_line(&record, Projection::Names, DEFAULT_DOWNLOAD_BASE)
            .ends_with("name=a errors=scrape_timeout no_size_found"));
    }

    #[test]
    fn test_download_url_trailing_slash() {
        assert_eq!(
            download_url("http://mirror.local/download/", "x"),
            "http://mirror.local/download/x/x_archive.torrent"
        );
    }
}
