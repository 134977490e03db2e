use certmangle::asn1::{
    assemble_signed_data, decode_length, encode_length, extract_tbs_cert_list,
    extract_tbs_certificate,
};
use certmangle::error::CertMangleError;
use proptest::prelude::*;

#[test]
fn short_form_lengths_are_a_single_octet() {
    for n in [0usize, 1, 42, 127] {
        assert_eq!(encode_length(n), vec![n as u8]);
    }
}

#[test]
fn long_form_lengths_use_minimal_big_endian_octets() {
    assert_eq!(encode_length(128), vec![0x81, 0x80]);
    assert_eq!(encode_length(256), vec![0x82, 0x01, 0x00]);
    assert_eq!(encode_length(0xff_ffff), vec![0x83, 0xff, 0xff, 0xff]);
}

#[test]
fn indefinite_length_is_rejected() {
    let err = decode_length(&[0x80], 0).unwrap_err();
    assert!(matches!(err, CertMangleError::UnsupportedEncoding));
}

#[test]
fn length_fields_over_four_octets_are_rejected() {
    // 0x85 declares five length octets, one past the cap.
    let err = decode_length(&[0x85, 0x00, 0x00, 0x00, 0x00, 0x01], 0).unwrap_err();
    assert!(matches!(err, CertMangleError::MalformedLength(_)));
}

#[test]
fn truncated_length_fields_are_rejected() {
    let err = decode_length(&[0x82, 0x01], 0).unwrap_err();
    assert!(matches!(err, CertMangleError::MalformedLength(_)));

    let err = decode_length(&[], 0).unwrap_err();
    assert!(matches!(err, CertMangleError::MalformedLength(_)));
}

#[test]
fn decode_honors_the_starting_offset() {
    let data = hex::decode("300802012a02012b").unwrap();
    assert_eq!(decode_length(&data, 1).unwrap(), (8, 1));
    assert_eq!(decode_length(&data, 3).unwrap(), (1, 1));
}

proptest! {
    #[test]
    fn length_encoding_round_trips(n in 0u32..=u32::MAX) {
        let encoded = encode_length(n as usize);
        let (decoded, consumed) = decode_length(&encoded, 0).unwrap();
        prop_assert_eq!(decoded, n as usize);
        prop_assert_eq!(consumed, encoded.len());
    }
}

#[test]
fn first_child_of_a_sequence_is_returned_exactly() {
    // SEQUENCE { INTEGER { 42 } INTEGER { 43 } }
    let der = hex::decode("300602012a02012b").unwrap();
    assert_eq!(extract_tbs_certificate(&der).unwrap(), hex::decode("02012a").unwrap());
    // CRL extraction is the same outer shape.
    assert_eq!(extract_tbs_cert_list(&der).unwrap(), hex::decode("02012a").unwrap());
}

#[test]
fn extraction_rejects_short_and_mistagged_buffers() {
    for bad in [
        vec![],
        vec![0x30],
        // INTEGER at the outer level, not a SEQUENCE.
        hex::decode("02012a").unwrap(),
    ] {
        let err = extract_tbs_certificate(&bad).unwrap_err();
        assert!(matches!(err, CertMangleError::MalformedStructure(_)), "input {bad:02x?}");
    }
}

#[test]
fn extraction_rejects_overrunning_sequence_lengths() {
    // Outer SEQUENCE declares 8 content octets but only 3 are present.
    let der = hex::decode("300802012a").unwrap();
    let err = extract_tbs_certificate(&der).unwrap_err();
    assert!(matches!(err, CertMangleError::MalformedStructure(_)));
}

#[test]
fn extraction_rejects_empty_sequences() {
    let err = extract_tbs_certificate(&[0x30, 0x00]).unwrap_err();
    assert!(matches!(err, CertMangleError::MalformedStructure(_)));
}

#[test]
fn assembled_output_wraps_the_signature_in_a_bit_string() {
    let tbs = hex::decode("02012a").unwrap();
    let algorithm = hex::decode("300a06082a8648ce3d040302").unwrap();
    let signature = [0xaa, 0xbb, 0xcc, 0xdd];

    let signed = assemble_signed_data(&tbs, &algorithm, &signature);

    let mut expected = vec![0x30, 0x16];
    expected.extend_from_slice(&tbs);
    expected.extend_from_slice(&algorithm);
    // BIT STRING, length 5, zero unused bits, then the raw signature.
    expected.extend_from_slice(&[0x03, 0x05, 0x00, 0xaa, 0xbb, 0xcc, 0xdd]);
    assert_eq!(signed, expected);
}

#[test]
fn extraction_inverts_assembly() {
    let tbs = hex::decode("02012a").unwrap();
    let algorithm = hex::decode("300d06092a864886f70d01010b0500").unwrap();
    let signature = vec![0x5a; 256];

    let signed = assemble_signed_data(&tbs, &algorithm, &signature);
    assert_eq!(extract_tbs_certificate(&signed).unwrap(), tbs);
}

#[test]
fn assembly_handles_long_form_outer_lengths() {
    // A TBS long enough that both it and the outer SEQUENCE need two
    // length octets.
    let mut tbs = vec![0x30, 0x81, 0xc8];
    tbs.extend_from_slice(&[0x00; 0xc8]);
    let algorithm = hex::decode("300a06082a8648ce3d040302").unwrap();
    let signature = vec![0x11; 70];

    let signed = assemble_signed_data(&tbs, &algorithm, &signature);

    assert_eq!(signed[0], 0x30);
    let (outer_len, consumed) = decode_length(&signed, 1).unwrap();
    assert_eq!(1 + consumed + outer_len, signed.len());
    assert_eq!(extract_tbs_certificate(&signed).unwrap(), tbs);
}
