use std::str::FromStr;
use std::sync::OnceLock;

use certmangle::asn1;
use certmangle::key::KeyPair;
use certmangle::sign::{self, HashAlgorithm};
use der::{Decode, Encode};
use x509_cert::Version;
use x509_cert::certificate::TbsCertificateInner;
use x509_cert::name::RdnSequence;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};
use x509_cert::time::{Time, Validity};

/// A 2048-bit RSA key shared across the test binary; generation is too slow
/// in debug builds to repeat per test.
#[allow(dead_code)]
pub fn rsa_key() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(|| KeyPair::generate_rsa(2048).unwrap())
}

/// Builds a minimal self-signed certificate for `key`, signed and assembled
/// with this crate's own signer and assembler. The result is well-formed
/// (version 3, fixed validity, no extensions) and parseable by x509-cert.
pub fn self_signed_der(key: &KeyPair, hash: HashAlgorithm) -> Vec<u8> {
    let name = RdnSequence::from_str("CN=mangle.test").unwrap();

    let subject_public_key_info = match key {
        KeyPair::Rsa { public, .. } => {
            SubjectPublicKeyInfoOwned::from_key(public.clone()).unwrap()
        }
        KeyPair::EcdsaP256 { verifying_key, .. } => {
            SubjectPublicKeyInfoOwned::from_key(*verifying_key).unwrap()
        }
        KeyPair::EcdsaP384 { verifying_key, .. } => {
            SubjectPublicKeyInfoOwned::from_key(*verifying_key).unwrap()
        }
        KeyPair::Ed25519 { .. } => panic!("fixtures only use RSA/EC keys"),
    };

    let signature_alg =
        AlgorithmIdentifierOwned::from_der(sign::signature_algorithm_der(key, hash).unwrap())
            .unwrap();

    // 2023-11-14T22:13:20Z .. one year later; fixed so fixtures are stable.
    let not_before = time::OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let not_after = not_before + time::Duration::days(365);
    let validity = Validity {
        not_before: Time::UtcTime(
            der::asn1::UtcTime::from_system_time(not_before.into()).unwrap(),
        ),
        not_after: Time::UtcTime(der::asn1::UtcTime::from_system_time(not_after.into()).unwrap()),
    };

    let tbs: TbsCertificateInner = TbsCertificateInner {
        version: Version::V3,
        serial_number: SerialNumber::new(&[0x01]).unwrap(),
        signature: signature_alg,
        issuer: name.clone(),
        validity,
        subject: name,
        subject_public_key_info,
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: None,
    };

    let tbs_der = tbs.to_der().unwrap();
    let signature = sign::sign_tbs(&tbs_der, key, hash).unwrap();
    let algorithm_der = sign::signature_algorithm_der(key, hash).unwrap();
    asn1::assemble_signed_data(&tbs_der, algorithm_der, &signature)
}
