//! The error taxonomy shared by every network-facing operation.

use thiserror::Error;

/// Failure modes of the fetch pipeline.
///
/// Every network-facing operation returns one of these rather than raising
/// an uncatchable fault. None of the variants trigger automatic retry;
/// retry is a caller-initiated re-invocation of the same operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Malformed endpoint construction. A programmer error: the request
    /// never left the process.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connectivity failure: DNS, timeout, or a TLS handshake rejected by
    /// the pinning validator. Recoverable; eligible for manual retry.
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// The server answered with a status outside `[200, 300)`.
    #[error("bad response from server (status {0})")]
    BadResponse(u16),

    /// The payload arrived but did not match the expected shape. Never
    /// silently defaulted.
    #[error("failed to decode response: {0}")]
    DecodingError(String),
}

impl NetworkError {
    /// True for failures worth presenting with a "try again" affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NetworkError::TransportFailure(_) | NetworkError::BadResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_code() {
        let err = NetworkError::BadResponse(503);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn retryability_split() {
        assert!(NetworkError::TransportFailure("timeout".into()).is_retryable());
        assert!(NetworkError::BadResponse(500).is_retryable());
        assert!(!NetworkError::InvalidRequest("bad path".into()).is_retryable());
        assert!(!NetworkError::DecodingError("missing field".into()).is_retryable());
    }
}
