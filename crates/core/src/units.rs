//! Byte-size unit conversion.
//!
//! Every unit here is a power of 1024, including the decimal-looking
//! `kB`/`KB` spellings that `transmission-show` prints.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

const KIB: u64 = 1024;

static HUMAN_BYTES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+(?:\.\d+)?)([KMGT]?)$").expect("valid size pattern"));

/// Errors from parsing a human-friendly size.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("Invalid size: {0}")]
    InvalidSize(String),
}

/// Unit suffix as printed in probe output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

impl SizeUnit {
    /// Look up a unit suffix. Case-sensitive.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "B" => Some(Self::Bytes),
            "KB" | "kB" | "KiB" => Some(Self::Kilo),
            "MB" | "MiB" => Some(Self::Mega),
            "GB" | "GiB" => Some(Self::Giga),
            "TB" | "TiB" => Some(Self::Tera),
            "PB" => Some(Self::Peta),
            "EB" => Some(Self::Exa),
            _ => None,
        }
    }

    pub fn multiplier(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::Kilo => KIB,
            Self::Mega => KIB.pow(2),
            Self::Giga => KIB.pow(3),
            Self::Tera => KIB.pow(4),
            Self::Peta => KIB.pow(5),
            Self::Exa => KIB.pow(6),
        }
    }
}

/// Scale a measured value to whole bytes, truncating any fraction.
pub fn scale_to_bytes(value: f64, unit: SizeUnit) -> u64 {
    // `as` saturates for out-of-range floats
    (value * unit.multiplier() as f64) as u64
}

/// Parse sizes like `10K`, `5M`, `1.5G` or a bare byte count.
///
/// The suffix is case-insensitive and optional.
pub fn parse_human_bytes(input: &str) -> Result<u64, UnitError> {
    let trimmed = input.trim();
    let caps = HUMAN_BYTES_PATTERN
        .captures(trimmed)
        .ok_or_else(|| UnitError::InvalidSize(input.to_string()))?;

    let number: f64 = caps[1]
        .parse()
        .map_err(|_| UnitError::InvalidSize(input.to_string()))?;

    let unit = match caps[2].to_ascii_uppercase().as_str() {
        "K" => SizeUnit::Kilo,
        "M" => SizeUnit::Mega,
        "G" => SizeUnit::Giga,
        "T" => SizeUnit::Tera,
        _ => SizeUnit::Bytes,
    };

    Ok(scale_to_bytes(number, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_human_bytes() {
        assert_eq!(parse_human_bytes("10K").unwrap(), 10240);
        assert_eq!(parse_human_bytes("1.5G").unwrap(), 1610612736);
        assert_eq!(parse_human_bytes("512").unwrap(), 512);
        assert_eq!(parse_human_bytes("2m").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_human_bytes(" 1T ").unwrap(), 1024u64.pow(4));
    }

    #[test]
    fn test_parse_human_bytes_rejects_garbage() {
        for bad in ["", "K", "1.5.5G", "10KB", "-3M", "1P", "ten"] {
            assert!(
                matches!(parse_human_bytes(bad), Err(UnitError::InvalidSize(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_lowercase_kb_is_binary() {
        let unit = SizeUnit::from_suffix("kB").unwrap();
        assert_eq!(unit, SizeUnit::Kilo);
        assert_eq!(scale_to_bytes(160.1, unit), 163942);
    }

    #[test]
    fn test_unit_lookup_is_case_sensitive() {
        assert_eq!(SizeUnit::from_suffix("GiB"), Some(SizeUnit::Giga));
        assert_eq!(SizeUnit::from_suffix("EB"), Some(SizeUnit::Exa));
        assert_eq!(SizeUnit::from_suffix("gb"), None);
        assert_eq!(SizeUnit::from_suffix("Kb"), None);
        assert_eq!(SizeUnit::from_suffix("PiB"), None);
    }
}
