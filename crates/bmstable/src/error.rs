use strum::Display;
use thiserror::Error;

/// Pipeline stage a fetch or decode failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    #[strum(serialize = "entry page")]
    EntryPage,
    #[strum(serialize = "header")]
    Header,
    #[strum(serialize = "chart list")]
    ChartList,
}

/// Coarse failure category, for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    Network,
    Read,
    Format,
    Decode,
    Schema,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("net: cannot get {stage} from {url}: {message}")]
    Network {
        stage: Stage,
        url: String,
        message: String,
    },

    #[error("io: cannot read {stage} body from {url}: {message}")]
    Read {
        stage: Stage,
        url: String,
        message: String,
    },

    #[error("unexpected format in {url}: {message}")]
    Format { url: String, message: String },

    #[error("json: cannot decode {stage} from {url}: {source}")]
    Decode {
        stage: Stage,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("course {course:?}: {message}")]
    Schema { course: String, message: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network { .. } => ErrorKind::Network,
            Error::Read { .. } => ErrorKind::Read,
            Error::Format { .. } => ErrorKind::Format,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Schema { .. } => ErrorKind::Schema,
        }
    }

    pub(crate) fn format(url: &str, message: impl Into<String>) -> Self {
        Error::Format {
            url: url.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::EntryPage.to_string(), "entry page");
        assert_eq!(Stage::Header.to_string(), "header");
        assert_eq!(Stage::ChartList.to_string(), "chart list");
    }

    #[test]
    fn test_network_message_names_stage_and_url() {
        let err = Error::Network {
            stage: Stage::ChartList,
            url: "http://example.test/data.json".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "net: cannot get chart list from http://example.test/data.json: connection refused"
        );
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_schema_message_names_course() {
        let err = Error::Schema {
            course: "GENOCIDE dan 1".to_string(),
            message: "no sha256 or md5 provided".to_string(),
        };
        assert!(err.to_string().contains("GENOCIDE dan 1"));
        assert_eq!(err.kind(), ErrorKind::Schema);
    }
}
