//! Mock transport for testing
//!
//! Serves canned bodies from memory and records every requested URL, so tests can
//! exercise the full pipeline without network access.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::source::{Transport, TransportError};

#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, Result<Vec<u8>, TransportError>>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_string(), Ok(body.into()));
        self
    }

    /// Fail requests for `url` with `error`
    pub fn with_error(mut self, url: &str, error: TransportError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Network(format!("http status: 404 for {url}"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_bodies_and_records() {
        let mock = MockTransport::new()
            .with_body("http://a/1", "one")
            .with_error("http://a/2", TransportError::Read("eof".to_string()));

        assert_eq!(mock.get("http://a/1").unwrap(), b"one");
        assert_eq!(
            mock.get("http://a/2").unwrap_err(),
            TransportError::Read("eof".to_string())
        );
        assert!(matches!(mock.get("http://a/3"), Err(TransportError::Network(_))));
        assert_eq!(mock.requests(), vec!["http://a/1", "http://a/2", "http://a/3"]);
    }
}
