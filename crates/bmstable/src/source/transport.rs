//! Transport abstraction for testability.
//!
//! The pipeline only needs "GET this URL, give me the bytes". Keeping that behind
//! a trait lets tests run the whole pipeline against canned documents.

use thiserror::Error;

use crate::config::FetchConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request failed or returned a non-success status.
    #[error("{0}")]
    Network(String),

    /// The exchange succeeded but the body could not be consumed.
    #[error("{0}")]
    Read(String),
}

/// Blocking byte fetcher.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).get(url)
    }
}

/// `ureq`-backed transport.
pub struct HttpTransport {
    agent: ureq::Agent,
    config: FetchConfig,
}

impl HttpTransport {
    pub fn new(config: FetchConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(config.timeout)
            .build()
            .into();
        Self { agent, config }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .call()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        response
            .body_mut()
            .with_config()
            .limit(self.config.max_body_size)
            .read_to_vec()
            .map_err(|e| TransportError::Read(e.to_string()))
    }
}
