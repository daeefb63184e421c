//! Filtered, sorted, size-budgeted views of the stats database.
//!
//! A query is a single pass over the database in file order. Each record is
//! checked against the banned set, the error filter, the numeric bounds and
//! finally the cumulative byte budget; survivors are then sorted and cut to
//! the requested count. The budget is admitted greedily in file order, so
//! line order acts as a priority signal.

mod banned;
mod database;
mod engine;
mod error;
mod options;
mod output;

pub use banned::BannedSet;
pub use database::Database;
pub use engine::select;
pub use error::QueryError;
pub use options::{Bounds, QueryOptions, SortBy};
pub use output::{download_url, render_line, Projection, DEFAULT_DOWNLOAD_BASE};
