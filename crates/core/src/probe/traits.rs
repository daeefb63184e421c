//! Trait definitions for the probe module.

use async_trait::async_trait;
use std::path::Path;

use super::error::ProbeError;
use super::types::ProbeMode;

/// Something that can interrogate a torrent file.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns the name of this prober implementation.
    fn name(&self) -> &str;

    /// Runs the tool in the given mode and returns its standard output.
    ///
    /// Only a clean exit yields `Ok`; the output is left unparsed.
    async fn run(&self, mode: ProbeMode, path: &Path) -> Result<String, ProbeError>;
}
