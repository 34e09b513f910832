pub use anyhow::{anyhow, bail, Context, Error, Result};
pub use log::{debug, error, info, warn};
use thiserror::Error;

/// Failures from the Xray api. Only rendered to text when the orchestrator
/// folds them into the outgoing status message.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The platform answered with a non-success status
    #[error("{status}: {detail}")]
    Upstream { status: u16, detail: String },
    /// The request never completed, no status is available
    #[error("<none>: {0}")]
    Transport(String),
    /// Rejected configuration value
    #[error("Unknown report type: {0:?}")]
    Config(String),
}

impl ApiError {
    pub fn upstream(status: u16, detail: impl Into<String>) -> ApiError {
        ApiError::Upstream {
            status,
            detail: detail.into(),
        }
    }
}
