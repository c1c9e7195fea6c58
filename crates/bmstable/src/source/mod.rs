mod payload;
pub mod transport;

// Mock transport for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

pub use payload::{decode_json, decode_text, fetch_json, fetch_text, sanitize};
pub use transport::{HttpTransport, Transport, TransportError};

#[doc(hidden)]
pub use mock::MockTransport;
