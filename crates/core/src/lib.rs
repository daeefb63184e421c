pub mod builder;
pub mod config;
pub mod probe;
pub mod query;
pub mod record;
pub mod testing;
pub mod units;

pub use builder::{identifier_from_path, StatsBuilder};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config, ConfigError,
    QueryConfig,
};
pub use probe::{
    ProbeConfig, ProbeError, ProbeMode, ProbeWarning, Probed, Prober, SwarmCounts,
    TransmissionShow,
};
pub use query::{
    render_line, select, BannedSet, Bounds, Database, Projection, QueryError, QueryOptions,
    SortBy,
};
pub use record::{parse_record_line, StatRecord};
pub use units::{parse_human_bytes, SizeUnit, UnitError};
