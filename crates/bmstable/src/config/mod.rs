//! Fetch configuration.
//!
//! Default constants live in nested modules; `FetchConfig` bundles the values the
//! HTTP transport actually uses and can be built fluently or deserialized.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP transport defaults.
pub mod http {
    use std::time::Duration;

    /// Global timeout applied to each fetch (connect + body).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Upper bound on a single response body. Large chart lists run a few MB.
    pub const MAX_BODY_SIZE: u64 = 64 * 1024 * 1024;

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("bmstable/", env!("CARGO_PKG_VERSION"));
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// `None` disables the timeout and leaves the transport default in place.
    #[serde(with = "secs_opt")]
    pub timeout: Option<Duration>,
    pub max_body_size: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Some(http::DEFAULT_TIMEOUT),
            max_body_size: http::MAX_BODY_SIZE,
            user_agent: http::USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Fluent builder for [`FetchConfig`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn max_body_size(mut self, bytes: u64) -> Self {
        self.config.max_body_size = bytes;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> FetchConfig {
        self.config
    }
}

/// Timeouts are written as whole seconds.
mod secs_opt {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}
