//! `transmission-show` backed prober.

use async_trait::async_trait;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::ProbeConfig;
use super::error::ProbeError;
use super::traits::Prober;
use super::types::ProbeMode;

/// Runs `transmission-show` once per probe, bounded by the configured timeout.
pub struct TransmissionShow {
    config: ProbeConfig,
}

impl TransmissionShow {
    /// Creates a new prober with the given configuration.
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Creates a prober with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ProbeConfig::default())
    }

    /// Builds the tool arguments for a mode.
    fn build_args(&self, mode: ProbeMode, path: &Path) -> Vec<String> {
        vec![
            self.config.flag(mode).to_string(),
            path.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl Prober for TransmissionShow {
    fn name(&self) -> &str {
        "transmission-show"
    }

    async fn run(&self, mode: ProbeMode, path: &Path) -> Result<String, ProbeError> {
        let args = self.build_args(mode, path);
        debug!(
            "Running {:?} {}",
            self.config.tool_path,
            args.join(" ")
        );

        let child = Command::new(&self.config.tool_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProbeError::invocation(mode, e))?;

        // Dropping the output future on timeout kills the child.
        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(timeout_duration, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ProbeError::invocation(mode, e)),
            Err(_) => {
                return Err(ProbeError::Timeout {
                    mode,
                    timeout_secs: self.config.timeout_secs,
                })
            }
        };

        if !output.status.success() {
            return Err(ProbeError::failed(
                mode,
                exit_code(output.status),
                &String::from_utf8_lossy(&output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Exit code, or the negated signal number when the tool was killed.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
