//! Raw byte-carrying certificate and CRL values.
//!
//! Output of the mutation pipeline may be intentionally unparseable by a
//! strict decoder, so these types make no claims about the semantic validity
//! of their bytes. They carry exactly one immutable DER buffer and expose
//! the same read-only encoding surface as the parsed variants in
//! [`crate::cert`], which lets mutated and well-formed values travel through
//! a test-case corpus uniformly.

use std::str::FromStr;
use std::sync::Arc;

use crate::cert::CertificateLike;
use crate::error::{CertMangleError, Result};
use crate::key::KeyPair;
use crate::pem_utils::der_to_pem;

/// PEM label for certificates.
pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// PEM label for certificate revocation lists.
pub const CRL_LABEL: &str = "X509 CRL";

/// Output encodings for raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Der,
    Pem,
}

impl FromStr for Encoding {
    type Err = CertMangleError;

    /// Parses an encoding name, case-insensitively. Anything other than
    /// `der` or `pem` fails with [`CertMangleError::UnsupportedFormat`].
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "der" => Ok(Encoding::Der),
            "pem" => Ok(Encoding::Pem),
            other => Err(CertMangleError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A certificate represented as raw DER bytes.
///
/// Provides the same encoding surface as [`crate::cert::Certificate`]
/// without any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCertificate {
    cert_der: Vec<u8>,
}

impl RawCertificate {
    pub fn new(cert_der: Vec<u8>) -> Self {
        RawCertificate { cert_der }
    }

    /// The certificate's DER bytes, exactly as produced.
    pub fn cert_der(&self) -> &[u8] {
        &self.cert_der
    }

    /// PEM text of the certificate.
    pub fn cert_pem(&self) -> String {
        der_to_pem(&self.cert_der, CERTIFICATE_LABEL)
    }
}

impl CertificateLike for RawCertificate {
    fn cert_der(&self) -> Result<Vec<u8>> {
        Ok(self.cert_der.clone())
    }

    fn cert_pem(&self) -> Result<String> {
        Ok(RawCertificate::cert_pem(self))
    }
}

/// A raw certificate together with its private key.
///
/// The key is shared with the caller (usually an issuing CA fixture) and is
/// only ever read.
#[derive(Clone)]
pub struct RawCertificatePair {
    cert: RawCertificate,
    key: Arc<KeyPair>,
}

impl RawCertificatePair {
    pub fn new(cert_der: Vec<u8>, key: Arc<KeyPair>) -> Self {
        RawCertificatePair {
            cert: RawCertificate::new(cert_der),
            key,
        }
    }

    pub fn cert_der(&self) -> &[u8] {
        self.cert.cert_der()
    }

    pub fn cert_pem(&self) -> String {
        self.cert.cert_pem()
    }

    /// The shared signing key.
    pub fn key(&self) -> &Arc<KeyPair> {
        &self.key
    }

    /// PEM text of the associated private key (PKCS#8).
    pub fn key_pem(&self) -> Result<String> {
        self.key.private_key_pem()
    }
}

impl CertificateLike for RawCertificatePair {
    fn cert_der(&self) -> Result<Vec<u8>> {
        Ok(self.cert.cert_der().to_vec())
    }

    fn cert_pem(&self) -> Result<String> {
        Ok(self.cert.cert_pem())
    }
}

/// A CRL represented as raw DER bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCRL {
    crl_der: Vec<u8>,
}

impl RawCRL {
    pub fn new(crl_der: Vec<u8>) -> Self {
        RawCRL { crl_der }
    }

    /// The CRL's DER bytes, exactly as produced.
    pub fn crl_der(&self) -> &[u8] {
        &self.crl_der
    }

    /// Returns the CRL bytes in the requested encoding: the raw DER buffer,
    /// or its PEM text (label `X509 CRL`) as bytes.
    pub fn public_bytes(&self, encoding: Encoding) -> Vec<u8> {
        match encoding {
            Encoding::Der => self.crl_der.clone(),
            Encoding::Pem => der_to_pem(&self.crl_der, CRL_LABEL).into_bytes(),
        }
    }
}
