//! TBS signing and the AlgorithmIdentifier lookup table.
//!
//! The table is a closed, explicit enumeration of the six signature
//! algorithms the fixture corpus needs, keyed by (key family, hash). It is
//! intentionally not a generic OID encoder: an incorrect generic encoder
//! would be a greater risk than an auditable table of pre-encoded bytes.

use ecdsa::signature::hazmat::PrehashSigner;
use rsa::pkcs1v15::SigningKey as RsaSigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::{CertMangleError, Result};
use crate::key::KeyPair;

/// Hash algorithms usable for certificate and CRL signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digests `data` with this algorithm.
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

// sha256WithRSAEncryption (1.2.840.113549.1.1.11)
const RSA_SHA256: &[u8] = &[
    0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b, 0x05, 0x00,
];
// sha384WithRSAEncryption (1.2.840.113549.1.1.12)
const RSA_SHA384: &[u8] = &[
    0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0c, 0x05, 0x00,
];
// sha512WithRSAEncryption (1.2.840.113549.1.1.13)
const RSA_SHA512: &[u8] = &[
    0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0d, 0x05, 0x00,
];
// ecdsa-with-SHA256 (1.2.840.10045.4.3.2)
const ECDSA_SHA256: &[u8] = &[
    0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02,
];
// ecdsa-with-SHA384 (1.2.840.10045.4.3.3)
const ECDSA_SHA384: &[u8] = &[
    0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x03,
];
// ecdsa-with-SHA512 (1.2.840.10045.4.3.4)
const ECDSA_SHA512: &[u8] = &[
    0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x04,
];

/// Looks up the pre-encoded AlgorithmIdentifier DER for a signing key and
/// hash combination.
///
/// The table covers exactly {RSA, ECDSA} x {SHA-256, SHA-384, SHA-512}. Any
/// other key family fails with [`CertMangleError::UnsupportedAlgorithm`].
pub fn signature_algorithm_der(key: &KeyPair, hash: HashAlgorithm) -> Result<&'static [u8]> {
    match key {
        KeyPair::Rsa { .. } => Ok(match hash {
            HashAlgorithm::Sha256 => RSA_SHA256,
            HashAlgorithm::Sha384 => RSA_SHA384,
            HashAlgorithm::Sha512 => RSA_SHA512,
        }),
        KeyPair::EcdsaP256 { .. } | KeyPair::EcdsaP384 { .. } => Ok(match hash {
            HashAlgorithm::Sha256 => ECDSA_SHA256,
            HashAlgorithm::Sha384 => ECDSA_SHA384,
            HashAlgorithm::Sha512 => ECDSA_SHA512,
        }),
        KeyPair::Ed25519 { .. } => Err(CertMangleError::UnsupportedAlgorithm(format!(
            "{} with {}",
            key.family_name(),
            hash.name()
        ))),
    }
}

/// Signs TBS (to-be-signed) bytes with a private key.
///
/// RSA keys sign with PKCS#1 v1.5 padding over the given hash; EC keys sign
/// with ECDSA using the given hash as the digest, producing the ASN.1 DER
/// signature encoding. The hash passed here must be the one used for the
/// AlgorithmIdentifier lookup; the pipeline guarantees that by construction
/// since both come from one parameter.
pub fn sign_tbs(tbs: &[u8], key: &KeyPair, hash: HashAlgorithm) -> Result<Vec<u8>> {
    match key {
        KeyPair::Rsa { private, .. } => {
            let signature = match hash {
                HashAlgorithm::Sha256 => {
                    let signing_key: RsaSigningKey<Sha256> = RsaSigningKey::new((**private).clone());
                    signing_key.sign(tbs).to_vec()
                }
                HashAlgorithm::Sha384 => {
                    let signing_key: RsaSigningKey<Sha384> = RsaSigningKey::new((**private).clone());
                    signing_key.sign(tbs).to_vec()
                }
                HashAlgorithm::Sha512 => {
                    let signing_key: RsaSigningKey<Sha512> = RsaSigningKey::new((**private).clone());
                    signing_key.sign(tbs).to_vec()
                }
            };
            Ok(signature)
        }
        KeyPair::EcdsaP256 { signing_key, .. } => {
            let digest = hash.digest(tbs);
            let signature: p256::ecdsa::Signature = signing_key
                .sign_prehash(&digest)
                .map_err(|e| CertMangleError::SigningError(e.to_string()))?;
            Ok(signature.to_der().to_vec())
        }
        KeyPair::EcdsaP384 { signing_key, .. } => {
            let digest = hash.digest(tbs);
            let signature: p384::ecdsa::Signature = signing_key
                .sign_prehash(&digest)
                .map_err(|e| CertMangleError::SigningError(e.to_string()))?;
            Ok(signature.to_der().to_vec())
        }
        KeyPair::Ed25519 { .. } => Err(CertMangleError::UnsupportedKeyType(
            key.family_name().to_string(),
        )),
    }
}
