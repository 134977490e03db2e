//! The modify-and-resign pipeline.
//!
//! This is the operation the rest of the system exists for: take a validly
//! constructed certificate or CRL, rewrite its TBS encoding into a shape a
//! high-level builder cannot produce, and re-sign and reassemble it into a
//! byte-exact, still-DER-valid outer structure.
//!
//! The stages run in a fixed order with no branching or retry:
//!
//! 1. convert the input DER to der-ascii text ([`crate::bridge`])
//! 2. apply the caller's text transform exactly once
//! 3. convert the text back to DER
//! 4. extract the (possibly now malformed) TBS ([`crate::asn1`])
//! 5. sign the TBS bytes ([`crate::sign`])
//! 6. look up the AlgorithmIdentifier for the key/hash pair
//! 7. assemble the final outer SEQUENCE
//!
//! Any stage failure aborts the whole run with that stage's error; there is
//! no partial output. If the der-ascii tools are not installed at all, the
//! pipeline is a no-op returning `Ok(None)` and spawns nothing - callers are
//! expected to treat mutation as an optional capability and skip such cases.

use log::warn;

use crate::asn1;
use crate::bridge;
use crate::error::Result;
use crate::key::KeyPair;
use crate::sign::{self, HashAlgorithm};

/// Modifies a certificate's TBSCertificate at the DER level and re-signs it.
///
/// `modifier` receives the der-ascii text of the whole certificate and
/// returns the edited text; it is applied exactly once and never inspected.
/// `signing_key` is usually the issuer's key, and `hash` must be the hash the
/// final AlgorithmIdentifier should name (SHA-256 for the common case).
///
/// Returns `Ok(None)` if the der-ascii tools are unavailable.
pub fn modify_certificate(
    cert_der: &[u8],
    signing_key: &KeyPair,
    modifier: impl FnOnce(&str) -> String,
    hash: HashAlgorithm,
) -> Result<Option<Vec<u8>>> {
    if !bridge::available() {
        warn!("der-ascii tools not available, skipping certificate modification");
        return Ok(None);
    }

    let mutated_der = roundtrip_mutation(cert_der, modifier)?;
    let tbs = asn1::extract_tbs_certificate(&mutated_der)?;
    Ok(Some(resign(tbs, signing_key, hash)?))
}

/// Modifies a CRL's TBSCertList at the DER level and re-signs it.
///
/// Same contract as [`modify_certificate`].
pub fn modify_crl(
    crl_der: &[u8],
    signing_key: &KeyPair,
    modifier: impl FnOnce(&str) -> String,
    hash: HashAlgorithm,
) -> Result<Option<Vec<u8>>> {
    if !bridge::available() {
        warn!("der-ascii tools not available, skipping CRL modification");
        return Ok(None);
    }

    let mutated_der = roundtrip_mutation(crl_der, modifier)?;
    let tbs = asn1::extract_tbs_cert_list(&mutated_der)?;
    Ok(Some(resign(tbs, signing_key, hash)?))
}

/// Externalizes DER to text, applies the caller's transform, and
/// internalizes the result back to DER.
fn roundtrip_mutation(der: &[u8], modifier: impl FnOnce(&str) -> String) -> Result<Vec<u8>> {
    let ascii = bridge::der_to_ascii(der)?;
    let modified_ascii = modifier(&ascii);
    bridge::ascii_to_der(&modified_ascii)
}

/// Signs mutated TBS bytes and assembles the final signed structure.
fn resign(tbs: &[u8], signing_key: &KeyPair, hash: HashAlgorithm) -> Result<Vec<u8>> {
    let signature = sign::sign_tbs(tbs, signing_key, hash)?;
    let algorithm_der = sign::signature_algorithm_der(signing_key, hash)?;
    Ok(asn1::assemble_signed_data(tbs, algorithm_der, &signature))
}
