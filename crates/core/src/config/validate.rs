use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Probe timeout is not 0
/// - Probe tool path and torrent suffix are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.probe.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "probe.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.probe.tool_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "probe.tool_path cannot be empty".to_string(),
        ));
    }

    if config.probe.torrent_suffix.is_empty() {
        return Err(ConfigError::ValidationError(
            "probe.torrent_suffix cannot be empty".to_string(),
        ));
    }

    Ok(())
}
