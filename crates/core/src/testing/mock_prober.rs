//! Mock prober for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::probe::{ProbeError, ProbeMode, Prober};

/// A recorded probe call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedProbe {
    pub mode: ProbeMode,
    pub path: PathBuf,
}

/// Scripted outcome of a probe call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Clean exit with this standard output.
    Output(String),
    /// Non-zero exit.
    Exit { code: i32, stderr: String },
    /// The call timed out.
    Timeout,
    /// The tool could not be run.
    Invocation(String),
}

impl MockResponse {
    pub fn output(stdout: impl Into<String>) -> Self {
        Self::Output(stdout.into())
    }

    pub fn exit(code: i32, stderr: impl Into<String>) -> Self {
        Self::Exit {
            code,
            stderr: stderr.into(),
        }
    }

    fn into_result(self, mode: ProbeMode) -> Result<String, ProbeError> {
        match self {
            Self::Output(stdout) => Ok(stdout),
            Self::Exit { code, stderr } => Err(ProbeError::failed(mode, code, &stderr)),
            Self::Timeout => Err(ProbeError::Timeout {
                mode,
                timeout_secs: 30,
            }),
            Self::Invocation(message) => Err(ProbeError::invocation(mode, message)),
        }
    }
}

/// Mock implementation of the Prober trait.
///
/// Responses are configured per mode; an unconfigured mode returns empty
/// output. Every call is recorded.
#[derive(Debug, Default)]
pub struct MockProber {
    calls: Arc<RwLock<Vec<RecordedProbe>>>,
    responses: Arc<RwLock<HashMap<ProbeMode, MockResponse>>>,
}

impl MockProber {
    /// Create a new mock prober.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for every call in `mode`.
    pub async fn set_response(&self, mode: ProbeMode, response: MockResponse) {
        self.responses.write().await.insert(mode, response);
    }

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedProbe> {
        self.calls.read().await.clone()
    }

    /// Get the number of calls made.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl Prober for MockProber {
    fn name(&self) -> &str {
        "mock"
    }

    async fn run(&self, mode: ProbeMode, path: &Path) -> Result<String, ProbeError> {
        self.calls.write().await.push(RecordedProbe {
            mode,
            path: path.to_path_buf(),
        });

        self.responses
            .read()
            .await
            .get(&mode)
            .cloned()
            .unwrap_or_else(|| MockResponse::Output(String::new()))
            .into_result(mode)
    }
}
