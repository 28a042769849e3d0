//! Tests for the bech32m text encoding.

use super::*;

#[test]
fn test_bit_packing_is_msb_first_with_zero_padding() {
    // 0xff = 11111 111 -> [11111, 11100]
    assert_eq!(to_base32(&[0xff]), vec![31, 28]);
    // 0x11 0x11 = 00010 00100 01000 1 -> [2, 4, 8, 16]
    assert_eq!(to_base32(&[0x11, 0x11]), vec![2, 4, 8, 16]);
    assert_eq!(to_base32(&[0u8; 21]).len(), 34);
    assert!(to_base32(&[]).is_empty());
}

#[test]
fn test_bit_unpacking_inverts_packing() {
    let payload: Vec<u8> = (0u8..=40).collect();
    assert_eq!(from_base32(&to_base32(&payload)).unwrap(), payload);
}

#[test]
fn test_bit_unpacking_rejects_bad_padding() {
    // 31, 29 leaves a set padding bit.
    assert_eq!(from_base32(&[31, 29]), Err(EncodeError::InvalidPadding));
    // Three groups leave 7 padding bits, more than a single group can carry.
    assert_eq!(from_base32(&[0, 0, 0]), Err(EncodeError::InvalidPadding));
}

#[test]
fn test_hrp_expansion() {
    // 't' = 0x74 = 0b011_10100, 'n' = 0x6e = 0b011_01110
    assert_eq!(hrp_expand("tn"), vec![3, 3, 0, 20, 14]);
}

#[test]
fn test_reference_vectors() {
    assert_eq!(encode("a", &[]).unwrap(), "a1lqfn3a");
    assert_eq!(
        encode("tnam", &[0u8; 21]).unwrap(),
        "tnam1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqjpwq6t"
    );

    let mut payload = [0x11u8; 21];
    payload[0] = 0x00;
    assert_eq!(
        encode("tnam", &payload).unwrap(),
        "tnam1qqg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyznre5j"
    );
}

#[test]
fn test_encoding_is_deterministic() {
    let first = encode(ADDRESS_HRP, &[0u8; 21]).unwrap();
    for _ in 0..8 {
        assert_eq!(encode(ADDRESS_HRP, &[0u8; 21]).unwrap(), first);
    }
}

#[test]
fn test_single_bit_flip_changes_checksum() {
    let base = [0u8; 21];
    let reference = encode(ADDRESS_HRP, &base).unwrap();
    let reference_suffix = &reference[reference.len() - CHECKSUM_LENGTH..];

    for byte in 0..base.len() {
        for bit in 0..8 {
            let mut flipped = base;
            flipped[byte] ^= 1 << bit;
            let encoded = encode(ADDRESS_HRP, &flipped).unwrap();
            assert_ne!(encoded, reference);
            assert_ne!(
                &encoded[encoded.len() - CHECKSUM_LENGTH..],
                reference_suffix,
                "checksum unchanged after flipping bit {} of byte {}",
                bit,
                byte
            );
        }
    }
}

#[test]
fn test_invalid_prefix_is_rejected() {
    for hrp in ["", "tn am", "tnäm", "TnAm"] {
        let err = encode(hrp, &[0u8; 21]).unwrap_err();
        assert!(
            matches!(err, EncodeError::ChecksumInputInvalid { .. }),
            "prefix {:?} should be rejected, got {:?}",
            hrp,
            err
        );
    }
    // An all-uppercase prefix is accepted and rendered in lowercase.
    assert_eq!(encode("A", &[]).unwrap(), "a1lqfn3a");
}

#[test]
fn test_decode_roundtrip_and_validation() {
    let text = "tnam1qqg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyznre5j";
    let (hrp, payload) = decode(text).unwrap();
    assert_eq!(hrp, "tnam");
    assert_eq!(payload.len(), 21);
    assert_eq!(payload[0], 0);
    assert!(payload[1..].iter().all(|b| *b == 0x11));

    assert!(decode("abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx").is_ok());
    assert!(decode("A1LQFN3A").is_ok());
}

#[test]
fn test_decode_rejects_corruption() {
    // Last checksum symbol altered.
    assert_eq!(
        decode("tnam1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqjpwq6p"),
        Err(EncodeError::InvalidChecksum)
    );
    // A bech32 (not bech32m) checksum does not verify.
    assert_eq!(decode("a12uel5l"), Err(EncodeError::InvalidChecksum));
    assert_eq!(decode("tnamqqqqqq"), Err(EncodeError::MissingSeparator));
    assert_eq!(decode("a1lqfn3A"), Err(EncodeError::MixedCase));
    assert_eq!(decode("a1lqfb3a"), Err(EncodeError::InvalidCharacter('b')));
}
