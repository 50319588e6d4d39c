//! TLS public-key pinning.
//!
//! The validator computes a canonical fingerprint of the server's leaf
//! certificate public key and compares it against a single expected value
//! for the pinned domain. The fingerprint is the base64-encoded SHA-256
//! digest of the key's DER Subject-Public-Key-Info: a fixed ASN.1 header
//! constant per key algorithm, followed by the raw key bits.
//!
//! Enforcement happens inside the TLS handshake via a rustls
//! [`ServerCertVerifier`]: standard WebPKI chain validation runs first, then
//! the pin check. A mismatch fails the handshake; there is no
//! warn-and-accept path and no fallback to chain-only trust.

use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use ring::digest;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{CertificateError, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tracing::{debug, warn};
use x509_parser::oid_registry::{
    OID_EC_P256, OID_KEY_TYPE_EC_PUBLIC_KEY, OID_NIST_EC_P384, OID_PKCS1_RSAENCRYPTION,
};
use x509_parser::prelude::*;

use crate::error::PinError;

// ============================================================================
// SPKI headers
// ============================================================================

// DER header for an EC P-256 SubjectPublicKeyInfo (id-ecPublicKey, prime256v1).
const SPKI_HEADER_EC_P256: &[u8] = &[
    0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08,
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00,
];

// DER header for an EC P-384 SubjectPublicKeyInfo (id-ecPublicKey, secp384r1).
const SPKI_HEADER_EC_P384: &[u8] = &[
    0x30, 0x76, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05,
    0x2b, 0x81, 0x04, 0x00, 0x22, 0x03, 0x62, 0x00,
];

// DER header for an RSA-2048 SubjectPublicKeyInfo (rsaEncryption, NULL params).
const SPKI_HEADER_RSA_2048: &[u8] = &[
    0x30, 0x82, 0x01, 0x22, 0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01,
    0x01, 0x01, 0x05, 0x00, 0x03, 0x82, 0x01, 0x0f, 0x00,
];

// DER header for an RSA-4096 SubjectPublicKeyInfo (rsaEncryption, NULL params).
const SPKI_HEADER_RSA_4096: &[u8] = &[
    0x30, 0x82, 0x02, 0x22, 0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01,
    0x01, 0x01, 0x05, 0x00, 0x03, 0x82, 0x02, 0x0f, 0x00,
];

// DER-encoded RSAPublicKey lengths for the two supported modulus sizes.
const RSA_2048_KEY_LEN: usize = 270;
const RSA_4096_KEY_LEN: usize = 526;

// ============================================================================
// Fingerprint
// ============================================================================

/// A SHA-256 digest of a canonical DER SPKI, compared for exact equality.
#[derive(Clone, PartialEq, Eq)]
pub struct PinnedKeyFingerprint([u8; 32]);

impl PinnedKeyFingerprint {
    /// Parses the configured base64-encoded digest.
    pub fn from_base64(encoded: &str) -> Result<Self, PinError> {
        let bytes = BASE64.decode(encoded).map_err(|_| PinError::MalformedPin)?;
        let digest: [u8; 32] = bytes.try_into().map_err(|_| PinError::MalformedPin)?;
        Ok(Self(digest))
    }

    /// Digests a canonical DER SPKI byte sequence.
    pub fn of_spki(spki_der: &[u8]) -> Self {
        let digest = digest::digest(&digest::SHA256, spki_der);
        let mut out = [0u8; 32];
        out.copy_from_slice(digest.as_ref());
        Self(out)
    }

    /// Constant-time equality against another fingerprint.
    pub fn matches(&self, other: &PinnedKeyFingerprint) -> bool {
        ring::constant_time::verify_slices_are_equal(&self.0, &other.0).is_ok()
    }

    /// The base64 form, as it appears in configuration.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl fmt::Display for PinnedKeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl fmt::Debug for PinnedKeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PinnedKeyFingerprint({})", self.to_base64())
    }
}

// ============================================================================
// SPKI extraction
// ============================================================================

/// Computes the canonical SPKI fingerprint of a DER-encoded certificate.
///
/// Returns an error when the certificate cannot be parsed or its key
/// algorithm has no known SPKI header; during a handshake either case
/// rejects the connection.
pub fn spki_fingerprint(cert_der: &[u8]) -> Result<PinnedKeyFingerprint, PinError> {
    let (_, cert) = X509Certificate::from_der(cert_der)
        .map_err(|e| PinError::CertificateParse(e.to_string()))?;
    let spki = cert.public_key();
    let key_bits: &[u8] = &spki.subject_public_key.data;
    let header = spki_header(&spki.algorithm, key_bits.len())?;

    let mut canonical = Vec::with_capacity(header.len() + key_bits.len());
    canonical.extend_from_slice(header);
    canonical.extend_from_slice(key_bits);
    Ok(PinnedKeyFingerprint::of_spki(&canonical))
}

/// Selects the fixed SPKI header for a supported key algorithm.
fn spki_header(
    algorithm: &AlgorithmIdentifier<'_>,
    key_len: usize,
) -> Result<&'static [u8], PinError> {
    let oid = &algorithm.algorithm;
    if *oid == OID_KEY_TYPE_EC_PUBLIC_KEY {
        let curve = algorithm
            .parameters
            .as_ref()
            .and_then(|params| params.as_oid().ok())
            .ok_or_else(|| {
                PinError::UnsupportedKeyAlgorithm("EC key without a named curve".to_string())
            })?;
        if curve == OID_EC_P256 {
            Ok(SPKI_HEADER_EC_P256)
        } else if curve == OID_NIST_EC_P384 {
            Ok(SPKI_HEADER_EC_P384)
        } else {
            Err(PinError::UnsupportedKeyAlgorithm(format!(
                "EC curve {curve}"
            )))
        }
    } else if *oid == OID_PKCS1_RSAENCRYPTION {
        match key_len {
            RSA_2048_KEY_LEN => Ok(SPKI_HEADER_RSA_2048),
            RSA_4096_KEY_LEN => Ok(SPKI_HEADER_RSA_4096),
            other => Err(PinError::UnsupportedKeyAlgorithm(format!(
                "RSA key of {other} encoded bytes"
            ))),
        }
    } else {
        Err(PinError::UnsupportedKeyAlgorithm(oid.to_string()))
    }
}

// ============================================================================
// Certificate verifier
// ============================================================================

/// A rustls certificate verifier that layers a public-key pin over standard
/// WebPKI chain validation.
///
/// The pin narrows trust; it never widens it. Chain validation runs first,
/// and the pin is checked only for the configured host. Both must pass for
/// the handshake to proceed.
#[derive(Debug)]
pub struct PinnedServerCertVerifier {
    inner: Arc<WebPkiServerVerifier>,
    pinned_host: String,
    pin: PinnedKeyFingerprint,
}

impl PinnedServerCertVerifier {
    /// Builds a verifier with the Mozilla root set and the given pin.
    pub fn new(pinned_host: &str, pin: PinnedKeyFingerprint) -> Result<Self, PinError> {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let inner = WebPkiServerVerifier::builder_with_provider(
            Arc::new(roots),
            Arc::new(rustls::crypto::ring::default_provider()),
        )
        .build()
        .map_err(|e| PinError::VerifierBuild(e.to_string()))?;

        Ok(Self {
            inner,
            pinned_host: pinned_host.to_string(),
            pin,
        })
    }

    /// Checks the leaf certificate against the pin.
    fn check_pin(&self, end_entity: &CertificateDer<'_>) -> Result<(), rustls::Error> {
        let observed = spki_fingerprint(end_entity.as_ref()).map_err(|e| {
            warn!(error = %e, "Could not compute SPKI fingerprint; rejecting connection");
            rustls::Error::InvalidCertificate(CertificateError::ApplicationVerificationFailure)
        })?;

        if observed.matches(&self.pin) {
            debug!(host = %self.pinned_host, "Public key pin verified");
            Ok(())
        } else {
            warn!(
                host = %self.pinned_host,
                expected = %self.pin,
                observed = %observed,
                "Public key pin mismatch; rejecting connection"
            );
            Err(rustls::Error::InvalidCertificate(
                CertificateError::ApplicationVerificationFailure,
            ))
        }
    }

    fn is_pinned_host(&self, server_name: &ServerName<'_>) -> bool {
        match server_name {
            ServerName::DnsName(dns) => dns.as_ref().eq_ignore_ascii_case(&self.pinned_host),
            _ => false,
        }
    }
}

impl ServerCertVerifier for PinnedServerCertVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        let verified = self.inner.verify_server_cert(
            end_entity,
            intermediates,
            server_name,
            ocsp_response,
            now,
        )?;

        if self.is_pinned_host(server_name) {
            self.check_pin(end_entity)?;
        }
        Ok(verified)
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.inner.supported_verify_schemes()
    }
}

/// Builds a rustls client configuration with the pinning verifier mounted.
pub fn pinned_tls_config(
    pinned_host: &str,
    pin: PinnedKeyFingerprint,
) -> Result<rustls::ClientConfig, PinError> {
    let verifier = Arc::new(PinnedServerCertVerifier::new(pinned_host, pin)?);
    let config = rustls::ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()
    .map_err(|e| PinError::VerifierBuild(e.to_string()))?
    .dangerous()
    .with_custom_certificate_verifier(verifier)
    .with_no_client_auth();
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rcgen::{CertifiedKey, generate_simple_self_signed};

    fn p256_certificate() -> CertifiedKey {
        generate_simple_self_signed(vec!["localhost".to_string()]).unwrap()
    }

    #[test]
    fn fingerprint_base64_roundtrip() {
        let fp = PinnedKeyFingerprint::of_spki(b"some spki bytes");
        let parsed = PinnedKeyFingerprint::from_base64(&fp.to_base64()).unwrap();
        assert!(fp.matches(&parsed));
    }

    #[test]
    fn malformed_pin_is_rejected() {
        assert!(matches!(
            PinnedKeyFingerprint::from_base64("not-base64!!!"),
            Err(PinError::MalformedPin)
        ));
        // valid base64, wrong digest length
        assert!(matches!(
            PinnedKeyFingerprint::from_base64("c2hvcnQ="),
            Err(PinError::MalformedPin)
        ));
    }

    #[test]
    fn assembled_spki_matches_certificate_spki() {
        let CertifiedKey { cert, .. } = p256_certificate();
        let computed = spki_fingerprint(cert.der().as_ref()).unwrap();

        // The header + raw-key assembly must reproduce the SPKI exactly as
        // it appears in the certificate.
        let (_, parsed) = X509Certificate::from_der(cert.der().as_ref()).unwrap();
        let expected = PinnedKeyFingerprint::of_spki(parsed.public_key().raw);
        assert!(computed.matches(&expected));
    }

    #[test]
    fn one_byte_difference_fails_the_match() {
        let CertifiedKey { cert, .. } = p256_certificate();
        let fp = spki_fingerprint(cert.der().as_ref()).unwrap();

        let mut tampered = fp.0;
        tampered[0] ^= 0x01;
        assert!(!fp.matches(&PinnedKeyFingerprint(tampered)));
    }

    #[test]
    fn distinct_keys_produce_distinct_fingerprints() {
        let a = spki_fingerprint(p256_certificate().cert.der().as_ref()).unwrap();
        let b = spki_fingerprint(p256_certificate().cert.der().as_ref()).unwrap();
        assert!(!a.matches(&b));
    }

    #[test]
    fn unsupported_key_algorithm_is_rejected() {
        let key = rcgen::KeyPair::generate_for(&rcgen::PKCS_ED25519).unwrap();
        let cert = rcgen::CertificateParams::new(vec!["localhost".to_string()])
            .unwrap()
            .self_signed(&key)
            .unwrap();
        assert!(matches!(
            spki_fingerprint(cert.der().as_ref()),
            Err(PinError::UnsupportedKeyAlgorithm(_))
        ));
    }

    #[test]
    fn garbage_certificate_is_rejected() {
        assert!(matches!(
            spki_fingerprint(b"not a certificate"),
            Err(PinError::CertificateParse(_))
        ));
    }

    #[test]
    fn pin_check_accepts_matching_leaf_and_rejects_tampered_pin() {
        let CertifiedKey { cert, .. } = p256_certificate();
        let fp = spki_fingerprint(cert.der().as_ref()).unwrap();

        let verifier = PinnedServerCertVerifier::new("localhost", fp.clone()).unwrap();
        assert!(verifier.check_pin(cert.der()).is_ok());

        let mut tampered = fp.0;
        tampered[31] ^= 0xff;
        let verifier =
            PinnedServerCertVerifier::new("localhost", PinnedKeyFingerprint(tampered)).unwrap();
        assert!(verifier.check_pin(cert.der()).is_err());
    }

    #[test]
    fn chain_validation_runs_before_the_pin() {
        // A self-signed certificate with a matching pin must still fail:
        // the pin narrows WebPKI trust, it does not replace it.
        let CertifiedKey { cert, .. } = p256_certificate();
        let fp = spki_fingerprint(cert.der().as_ref()).unwrap();
        let verifier = PinnedServerCertVerifier::new("localhost", fp).unwrap();

        let server_name = ServerName::try_from("localhost").unwrap();
        let result = verifier.verify_server_cert(
            cert.der(),
            &[],
            &server_name,
            &[],
            UnixTime::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn pin_applies_only_to_the_pinned_host() {
        let CertifiedKey { cert, .. } = p256_certificate();
        let fp = spki_fingerprint(cert.der().as_ref()).unwrap();
        let verifier = PinnedServerCertVerifier::new("api.spacexdata.com", fp).unwrap();

        let pinned = ServerName::try_from("api.spacexdata.com").unwrap();
        let other = ServerName::try_from("example.org").unwrap();
        assert!(verifier.is_pinned_host(&pinned));
        assert!(!verifier.is_pinned_host(&other));
    }
}
