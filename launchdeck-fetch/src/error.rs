//! Fetch-layer error types.

use thiserror::Error;

/// Failures while computing or configuring the public-key pin.
///
/// Any of these encountered during a handshake means the connection is
/// rejected; a pin that cannot be computed is treated as a pin mismatch,
/// never as a fallback to chain-only trust.
#[derive(Debug, Error)]
pub enum PinError {
    /// The configured fingerprint is not a base64 SHA-256 digest.
    #[error("malformed pin fingerprint (expected base64-encoded SHA-256 digest)")]
    MalformedPin,

    /// The leaf certificate could not be parsed.
    #[error("failed to parse server certificate: {0}")]
    CertificateParse(String),

    /// The leaf key uses an algorithm without a known SPKI header.
    #[error("unsupported public key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),

    /// The pinned host is not a valid DNS name.
    #[error("invalid pinned host name: {0}")]
    InvalidHost(String),

    /// The WebPKI verifier could not be constructed.
    #[error("failed to build trust verifier: {0}")]
    VerifierBuild(String),
}
