//! Swarm statistics records and the flat-file line format.
//!
//! One line of the database holds one [`StatRecord`]:
//!
//! ```text
//! <identifier> # <seeders> seeders, <leechers> leechers, <bytes> bytes[ # <token> <token> ...]
//! ```
//!
//! The builder writes this grammar via `Display`; the query engine reads it
//! back with [`parse_record_line`], skipping anything that does not match.

mod line;
mod types;

pub use line::parse_record_line;
pub use types::StatRecord;
