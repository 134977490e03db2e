//! # CertMangle - DER-Level Certificate and CRL Mutation
//!
//! CertMangle takes a validly constructed X.509 certificate or CRL,
//! externally rewrites its structural (TBS) encoding into a form that a
//! high-level certificate API cannot produce - wrong tag, truncated length,
//! reordered fields, duplicated extensions - and deterministically re-signs
//! and reassembles it into a byte-exact, still-DER-valid outer structure.
//!
//! It exists because conformance testing of X.509 path validators requires
//! *structurally invalid but syntactically parseable* certificates that
//! ordinary certificate builders refuse to emit.
//!
//! ## How a mutation works
//!
//! 1. The input DER is converted to text with Google's `der2ascii`.
//! 2. A caller-supplied transform edits the text.
//! 3. `ascii2der` converts the edited text back to DER.
//! 4. The (possibly malformed) TBSCertificate or TBSCertList is extracted.
//! 5. The TBS bytes are re-signed and reassembled into a fresh outer
//!    SEQUENCE.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use certmangle::{
//!     key::KeyPair,
//!     mutate::modify_certificate,
//!     raw::RawCertificate,
//!     sign::HashAlgorithm,
//! };
//!
//! # fn main() -> Result<(), certmangle::error::CertMangleError> {
//! // The issuer's signing key and an already-encoded certificate.
//! let ca_key = KeyPair::generate_ecdsa_p256();
//! let cert_der: Vec<u8> = todo!("encode a certificate with your builder of choice");
//!
//! // Swap the TBS version tag for a context-specific one the builder
//! // could never emit, then re-sign.
//! let mutated = modify_certificate(
//!     &cert_der,
//!     &ca_key,
//!     |ascii| ascii.replace("INTEGER { 2 }", "INTEGER { 9 }"),
//!     HashAlgorithm::Sha256,
//! )?;
//!
//! match mutated {
//!     Some(der) => {
//!         let cert = RawCertificate::new(der);
//!         println!("{}", cert.cert_pem());
//!     }
//!     // der2ascii/ascii2der are not installed: mutation is an optional
//!     // capability, skip the test case.
//!     None => eprintln!("der-ascii tools unavailable"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported signature algorithms
//!
//! Re-signing supports exactly {RSA PKCS#1 v1.5, ECDSA} x {SHA-256, SHA-384,
//! SHA-512}, via a closed table of pre-encoded AlgorithmIdentifiers. This is
//! intentional: the fixture corpus only ever needs these six combinations,
//! and an explicit table is auditable in a way a generic OID encoder is not.
//!
//! ## Module Organization
//!
//! - [`asn1`]: DER length codec, TBS extraction, and signed-data assembly
//! - [`sign`]: TBS signing and the AlgorithmIdentifier table
//! - [`key`]: Signing key handles (RSA, ECDSA P-256/P-384, Ed25519)
//! - [`bridge`]: Process boundary to the der-ascii tools
//! - [`mutate`]: The modify-and-resign pipeline
//! - [`cert`]: Parsed-object-backed certificate values
//! - [`raw`]: Raw byte-carrying certificate and CRL values
//! - [`pem_utils`]: DER/PEM conversion helpers
//! - [`error`]: Error types

pub mod asn1;
pub mod bridge;
pub mod cert;
pub mod error;
pub mod key;
pub mod mutate;
pub mod pem_utils;
pub mod raw;
pub mod sign;
