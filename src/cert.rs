//! Parsed-object-backed certificate values.
//!
//! Two kinds of certificate value flow through a test-case corpus: ones that
//! a strict X.509 decoder can parse, wrapped here, and ones that have been
//! mutated at the DER level and exist only as bytes ([`crate::raw`]). Both
//! expose the same read-only encoding surface through [`CertificateLike`],
//! selected by the producer and never inspected by the consumer.

use std::sync::Arc;

use der::{Decode, Encode, EncodePem};
use x509_cert::certificate::CertificateInner;

use crate::error::{CertMangleError, Result};
use crate::key::KeyPair;

/// Read-only encoding surface shared by parsed and raw certificate values.
pub trait CertificateLike {
    /// The certificate's DER bytes.
    fn cert_der(&self) -> Result<Vec<u8>>;

    /// The certificate's PEM text.
    fn cert_pem(&self) -> Result<String>;
}

/// An X.509 certificate backed by a parsed object.
#[derive(Debug, Clone)]
pub struct Certificate {
    /// The inner representation of the certificate.
    pub inner: CertificateInner,
}

impl Certificate {
    /// Parses a certificate from DER bytes.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = CertificateInner::from_der(der)?;
        Ok(Certificate { inner })
    }

    /// Encodes the certificate into DER format.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| CertMangleError::EncodingError(e.to_string()))
    }

    /// Encodes the certificate into PEM format.
    pub fn to_pem(&self) -> Result<String> {
        self.inner
            .to_pem(pkcs8::LineEnding::LF)
            .map_err(|e| CertMangleError::EncodingError(e.to_string()))
    }
}

impl CertificateLike for Certificate {
    fn cert_der(&self) -> Result<Vec<u8>> {
        self.to_der()
    }

    fn cert_pem(&self) -> Result<String> {
        self.to_pem()
    }
}

/// A parsed certificate together with its private key.
///
/// The key is shared, not owned: it is the caller's signing key, and this
/// value only ever reads it.
#[derive(Clone)]
pub struct CertificateWithPrivateKey {
    pub cert: Certificate,
    pub key: Arc<KeyPair>,
}

impl CertificateWithPrivateKey {
    /// PEM text of the associated private key (PKCS#8).
    pub fn key_pem(&self) -> Result<String> {
        self.key.private_key_pem()
    }
}

impl CertificateLike for CertificateWithPrivateKey {
    fn cert_der(&self) -> Result<Vec<u8>> {
        self.cert.to_der()
    }

    fn cert_pem(&self) -> Result<String> {
        self.cert.to_pem()
    }
}
