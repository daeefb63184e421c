//! Error types for the probe module.

use thiserror::Error;

use super::types::{ProbeMode, ProbeWarning};

/// Errors from a single invocation of the probing tool.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The tool did not finish in time and was killed.
    #[error("{mode} probe timed out after {timeout_secs} seconds")]
    Timeout { mode: ProbeMode, timeout_secs: u64 },

    /// The tool exited with a non-zero code.
    #[error("{mode} probe exited with code {code}")]
    Failed {
        mode: ProbeMode,
        code: i32,
        stderr: Option<String>,
    },

    /// The tool could not be spawned or waited on.
    #[error("{mode} probe could not run: {message}")]
    Invocation { mode: ProbeMode, message: String },
}

impl ProbeError {
    /// Creates a failed error, keeping stderr only when it has content.
    ///
    /// Whitespace runs in stderr collapse to single spaces so the text stays
    /// on one database line.
    pub fn failed(mode: ProbeMode, code: i32, stderr: &str) -> Self {
        let stderr = single_line(stderr);
        Self::Failed {
            mode,
            code,
            stderr: (!stderr.is_empty()).then_some(stderr),
        }
    }

    /// Creates an invocation error from any displayable cause.
    pub fn invocation(mode: ProbeMode, cause: impl ToString) -> Self {
        Self::Invocation {
            mode,
            message: single_line(&cause.to_string()),
        }
    }

    /// The warnings this failure contributes to a record.
    pub fn into_warnings(self) -> Vec<ProbeWarning> {
        match self {
            Self::Timeout { mode, .. } => vec![ProbeWarning::Timeout(mode)],
            Self::Failed { mode, code, stderr } => {
                let mut warnings = vec![ProbeWarning::Exit { mode, code }];
                if let Some(text) = stderr {
                    warnings.push(ProbeWarning::Stderr { mode, text });
                }
                warnings
            }
            Self::Invocation { mode, message } => {
                vec![ProbeWarning::Invocation { mode, message }]
            }
        }
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
