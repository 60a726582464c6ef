use std::time::Duration;

use calcq_common::codec::CalcqJsonCodec;
use codee::Decoder;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Default API base of the expression service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Default delay between two scheduled list refreshes.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3_000;

/// How overlapping list refreshes are reconciled.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefreshOrdering {
    /// Whichever response completes last is rendered, even if it was
    /// requested before a response that is already on screen.
    #[default]
    LastCompleted,
    /// Each refresh is numbered when it starts. A response older than the
    /// newest one already rendered is dropped.
    LatestIssued,
}

/// Settings for the expression client.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration:
///
/// ```rust,ignore
/// let config = ClientConfig::from_json(r#"{ "poll_interval_ms": 1000 }"#)?;
/// assert_eq!(config.base_url, DEFAULT_BASE_URL);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
    /// Poll cadence in milliseconds
    pub poll_interval_ms: u64,
    /// Policy for overlapping refreshes
    pub ordering: RefreshOrdering,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            ordering: RefreshOrdering::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_ordering(mut self, ordering: RefreshOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Parse and validate a JSON configuration object.
    pub fn from_json(text: &str) -> Result<Self, ClientError> {
        let config = <CalcqJsonCodec as Decoder<ClientConfig>>::decode(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the client cannot run with.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ClientError::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
