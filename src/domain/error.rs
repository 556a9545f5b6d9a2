//! Lookup errors
//!
//! One error type flows through the whole pipeline. Resolvers build it with
//! the stage they belong to, and the orchestrator hands it to the caller as-is.

use crate::domain::value_objects::LookupStage;
use std::error::Error as StdError;

/// Transport-level failure (DNS, refused connection, timeout, broken body).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(Box<dyn StdError + Send + Sync>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Failure of one lookup stage.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request never produced an HTTP response.
    #[error("network error when fetching {stage}: {source}")]
    Network {
        stage: LookupStage,
        #[source]
        source: TransportError,
    },

    /// Upstream answered with a status outside the success range.
    #[error("Status Code {status} when fetching {stage}{context}. Response: {body}")]
    UpstreamStatus {
        stage: LookupStage,
        status: u16,
        /// Extra detail about the request, e.g. " for 1.2.3.4"
        context: String,
        body: String,
    },

    /// The body was not JSON or did not have the expected shape.
    #[error("invalid {stage} response: {reason}")]
    Parse { stage: LookupStage, reason: String },
}

impl LookupError {
    pub fn network(stage: LookupStage, source: TransportError) -> Self {
        Self::Network { stage, source }
    }

    pub fn parse(stage: LookupStage, reason: impl Into<String>) -> Self {
        Self::Parse {
            stage,
            reason: reason.into(),
        }
    }

    /// Stage that raised this error.
    pub fn stage(&self) -> LookupStage {
        match self {
            Self::Network { stage, .. }
            | Self::UpstreamStatus { stage, .. }
            | Self::Parse { stage, .. } => *stage,
        }
    }

    /// HTTP status, for upstream status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message_contains_status_and_body() {
        let err = LookupError::UpstreamStatus {
            stage: LookupStage::Ip,
            status: 503,
            context: String::new(),
            body: "upstream down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Status Code 503 when fetching IP. Response: upstream down"
        );
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_upstream_status_message_with_context() {
        let err = LookupError::UpstreamStatus {
            stage: LookupStage::Coordinates,
            status: 404,
            context: " for 1.2.3.4".to_string(),
            body: "{\"status\":\"error\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Status Code 404 when fetching coordinates for 1.2.3.4. Response: {\"status\":\"error\"}"
        );
    }

    #[test]
    fn test_network_error_keeps_source() {
        let err = LookupError::network(
            LookupStage::PassTimes,
            TransportError::new("connection refused"),
        );
        assert_eq!(err.stage(), LookupStage::PassTimes);
        assert!(err.to_string().contains("connection refused"));
        assert!(err.source().is_some());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_parse_error() {
        let err = LookupError::parse(LookupStage::Coordinates, "missing field `data`");
        assert_eq!(err.stage(), LookupStage::Coordinates);
        assert_eq!(
            err.to_string(),
            "invalid coordinates response: missing field `data`"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<LookupError>();
        assert_send_sync::<TransportError>();
    }
}
