//! Minimal DER structural routines.
//!
//! This is deliberately not a general ASN.1 parser. The only structural
//! shapes handled here are the ones that occur at the outermost level of a
//! Certificate or CertificateList: an outer SEQUENCE whose first child is the
//! TBSCertificate/TBSCertList, followed by an AlgorithmIdentifier and a
//! BIT STRING signature. Everything inside the TBS is opaque bytes, which is
//! what lets intentionally malformed content flow through unchanged.

use crate::error::{CertMangleError, Result};

/// ASN.1 universal tag for SEQUENCE.
pub const SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 universal tag for BIT STRING.
const BIT_STRING_TAG: u8 = 0x03;

/// Long-form length fields above this many octets (lengths over 4 GiB) are
/// treated as implausible for certificate data and rejected. Documented
/// limit, not full DER generality.
const MAX_LENGTH_OCTETS: usize = 4;

/// Parses an ASN.1 DER length field starting at `offset` (which must point
/// at the first length octet, i.e. just past the tag).
///
/// Returns `(length_value, octets_consumed)`.
///
/// Indefinite-length form (`0x80`) fails with
/// [`CertMangleError::UnsupportedEncoding`]; DER forbids it, and rejecting it
/// early catches a common hand-edit mistake. Long forms longer than 4 octets
/// or overrunning the buffer fail with [`CertMangleError::MalformedLength`].
pub fn decode_length(data: &[u8], offset: usize) -> Result<(usize, usize)> {
    let first = *data.get(offset).ok_or_else(|| {
        CertMangleError::MalformedLength("unexpected end of data while parsing length".to_string())
    })?;

    // Short form: the length is the octet itself.
    if first < 0x80 {
        return Ok((first as usize, 1));
    }

    if first == 0x80 {
        return Err(CertMangleError::UnsupportedEncoding);
    }

    let num_length_octets = (first & 0x7f) as usize;
    if num_length_octets > MAX_LENGTH_OCTETS {
        return Err(CertMangleError::MalformedLength(format!(
            "length field too long: {num_length_octets} octets"
        )));
    }

    let octets = data
        .get(offset + 1..offset + 1 + num_length_octets)
        .ok_or_else(|| {
            CertMangleError::MalformedLength(
                "unexpected end of data while parsing length".to_string(),
            )
        })?;

    let mut length = 0usize;
    for &octet in octets {
        length = (length << 8) | octet as usize;
    }

    Ok((length, 1 + num_length_octets))
}

/// Encodes a length value as a DER length field.
///
/// Values below 128 use the single-octet short form; anything else uses the
/// long form with the minimal big-endian octet count. Round-trips with
/// [`decode_length`] for every representable value.
pub fn encode_length(length: usize) -> Vec<u8> {
    if length < 0x80 {
        return vec![length as u8];
    }

    let mut octets: Vec<u8> = Vec::new();
    let mut rest = length;
    while rest > 0 {
        octets.insert(0, (rest & 0xff) as u8);
        rest >>= 8;
    }

    let mut encoded = Vec::with_capacity(1 + octets.len());
    encoded.push(0x80 | octets.len() as u8);
    encoded.extend_from_slice(&octets);
    encoded
}

/// Extracts the first child element of an outer SEQUENCE.
///
/// The returned slice is the exact sub-slice of the input, including the
/// child's own tag and length octets. Signatures are computed over encoded
/// bytes, not a semantic re-encoding, so this must be bit-for-bit.
fn first_sequence_child(der: &[u8]) -> Result<&[u8]> {
    if der.len() < 2 {
        return Err(CertMangleError::MalformedStructure(
            "DER data too short".to_string(),
        ));
    }

    if der[0] != SEQUENCE_TAG {
        return Err(CertMangleError::MalformedStructure(format!(
            "expected SEQUENCE tag (0x30), got 0x{:02x}",
            der[0]
        )));
    }

    let (outer_length, length_octets) = decode_length(der, 1)?;
    let content_start = 1 + length_octets;

    if content_start + outer_length > der.len() {
        return Err(CertMangleError::MalformedStructure(
            "SEQUENCE length exceeds data".to_string(),
        ));
    }

    if content_start >= der.len() {
        return Err(CertMangleError::MalformedStructure(
            "SEQUENCE is empty".to_string(),
        ));
    }

    // Skip the child's tag octet, then read its length to find its full span.
    let (child_length, child_length_octets) = decode_length(der, content_start + 1)?;
    let child_total = 1 + child_length_octets + child_length;

    der.get(content_start..content_start + child_total)
        .ok_or_else(|| {
            CertMangleError::MalformedStructure("first element exceeds data".to_string())
        })
}

/// Extracts the TBSCertificate from a DER-encoded certificate.
///
/// X.509 Certificate structure:
///
/// ```text
/// SEQUENCE {
///     TBSCertificate SEQUENCE { ... }
///     SignatureAlgorithm AlgorithmIdentifier
///     SignatureValue BIT STRING
/// }
/// ```
pub fn extract_tbs_certificate(cert_der: &[u8]) -> Result<&[u8]> {
    first_sequence_child(cert_der)
}

/// Extracts the TBSCertList from a DER-encoded CRL, which has the same
/// outer-SEQUENCE-of-three shape as a certificate.
pub fn extract_tbs_cert_list(crl_der: &[u8]) -> Result<&[u8]> {
    first_sequence_child(crl_der)
}

/// Assembles TBS bytes, an AlgorithmIdentifier, and a raw signature into the
/// outer SEQUENCE of a Certificate or CRL.
///
/// The signature is wrapped in a BIT STRING with a zero "unused bits" octet
/// (signatures are always a whole number of octets). No validation of the
/// inputs' internal structure is performed: this is the seam that lets
/// intentionally invalid TBS content end up inside a structurally valid
/// envelope. The one property this function always upholds is that the outer
/// SEQUENCE length field exactly matches its content.
pub fn assemble_signed_data(tbs_der: &[u8], algorithm_der: &[u8], signature: &[u8]) -> Vec<u8> {
    let sig_length = encode_length(1 + signature.len());
    let mut sig_der = Vec::with_capacity(2 + sig_length.len() + signature.len());
    sig_der.push(BIT_STRING_TAG);
    sig_der.extend_from_slice(&sig_length);
    sig_der.push(0x00);
    sig_der.extend_from_slice(signature);

    let content_length = tbs_der.len() + algorithm_der.len() + sig_der.len();
    let outer_length = encode_length(content_length);

    let mut signed = Vec::with_capacity(1 + outer_length.len() + content_length);
    signed.push(SEQUENCE_TAG);
    signed.extend_from_slice(&outer_length);
    signed.extend_from_slice(tbs_der);
    signed.extend_from_slice(algorithm_der);
    signed.extend_from_slice(&sig_der);
    signed
}
