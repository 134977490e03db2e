use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CertMangleError>;

/// Represents errors that can occur in the certmangle library.
///
/// Every variant is a terminal failure of the pipeline stage that detects it;
/// none are retried. Note that an *unavailable* der-ascii bridge is not an
/// error at all: the mutation pipeline reports it as an `Ok(None)` skip (see
/// [`crate::mutate`]), while an invoked-but-failing bridge is the hard
/// [`CertMangleError::BridgeFailure`].
#[derive(Debug, Error, Clone)]
pub enum CertMangleError {
    /// An ASN.1 length field exceeds the 4-octet cap or overruns the buffer.
    #[error("Malformed length field: {0}")]
    MalformedLength(String),

    /// Indefinite-length encoding, which DER forbids.
    #[error("Indefinite length encoding not supported")]
    UnsupportedEncoding,

    /// A buffer does not carry the outer-SEQUENCE shape of a Certificate or
    /// CertificateList.
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),

    /// A (key family, hash) combination outside the closed
    /// AlgorithmIdentifier table.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signing attempted with a key family outside {RSA, EC}.
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// An encoding format outside {DER, PEM} was requested.
    #[error("Unsupported encoding format: {0}")]
    UnsupportedFormat(String),

    /// An external der-ascii tool was invoked but exited non-zero or
    /// produced no output.
    #[error("der-ascii bridge failure: {0}")]
    BridgeFailure(String),

    /// Error during data encoding.
    #[error("Failed to encode data: {0}")]
    EncodingError(String),

    /// Error during data decoding.
    #[error("Failed to decode data: {0}")]
    DecodingError(String),

    /// Error during key generation.
    #[error("Key generation error: {0}")]
    KeyGenerationError(String),

    /// Error from the underlying signing primitive.
    #[error("Signing error: {0}")]
    SigningError(String),
}

impl From<der::Error> for CertMangleError {
    fn from(err: der::Error) -> Self {
        CertMangleError::DecodingError(err.to_string())
    }
}
