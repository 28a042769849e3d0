//! Tests for the primitive rules of the binary record codec.

use super::*;

#[test]
fn test_integers_are_little_endian() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    assert_eq!(from_bytes::<u64>(&bytes).unwrap(), 0x0807_0605_0403_0201);
    assert_eq!(from_bytes::<u32>(&bytes).unwrap(), 0x0403_0201);
    assert_eq!(to_bytes(&42u64).unwrap(), vec![42, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_option_none_consumes_only_the_tag() {
    let bytes = [0x00, 0xff, 0xff];
    let mut reader = Reader::new(&bytes);
    let value = Option::<u64>::decode(&mut reader).unwrap();
    assert_eq!(value, None);
    assert_eq!(reader.position(), 1);
}

#[test]
fn test_option_rejects_unknown_tag() {
    let err = from_bytes::<Option<u8>>(&[0x02, 0x00]).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::InvalidDiscriminant {
            type_name: "Option",
            found: 2,
            variant_count: 2
        }
    );
    assert_eq!(err.offset, 0);
}

#[test]
fn test_string_length_is_a_byte_count() {
    // "é" is two bytes in UTF-8.
    let bytes = [2, 0, 0, 0, 0xc3, 0xa9];
    assert_eq!(from_bytes::<String>(&bytes).unwrap(), "é");
    assert_eq!(to_bytes(&"é".to_string()).unwrap(), bytes.to_vec());
}

#[test]
fn test_string_invalid_utf8_reports_offset_of_payload() {
    let bytes = [2, 0, 0, 0, 0xff, 0xfe];
    let err = from_bytes::<String>(&bytes).unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::InvalidUtf8);
    assert_eq!(err.offset, 4);
}

#[test]
fn test_length_prefix_past_end_is_truncation() {
    let bytes = [10, 0, 0, 0, b'a', b'b'];
    let err = from_bytes::<String>(&bytes).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::TruncatedInput {
            needed: 10,
            remaining: 2
        }
    );
    assert_eq!(err.offset, 4);
}

#[test]
fn test_huge_length_prefix_does_not_overflow() {
    let bytes = [0xff, 0xff, 0xff, 0xff];
    let err = from_bytes::<String>(&bytes).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::TruncatedInput { .. }));
}

#[test]
fn test_map_entries_back_to_back() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), "1".to_string());
    map.insert("b".to_string(), "22".to_string());
    let encoded = to_bytes(&map).unwrap();
    assert_eq!(
        encoded,
        vec![
            2, 0, 0, 0, //
            1, 0, 0, 0, b'a', 1, 0, 0, 0, b'1', //
            1, 0, 0, 0, b'b', 2, 0, 0, 0, b'2', b'2',
        ]
    );
    let decoded = from_bytes::<BTreeMap<String, String>>(&encoded).unwrap();
    assert_eq!(decoded, map);
}

#[test]
fn test_map_rejects_duplicate_keys() {
    let bytes = [
        2, 0, 0, 0, //
        1, 0, 0, 0, b'k', 1, 0, 0, 0, b'x', //
        1, 0, 0, 0, b'k', 1, 0, 0, 0, b'y',
    ];
    let err = from_bytes::<BTreeMap<String, String>>(&bytes).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::DuplicateMapKey {
            key: "k".to_string()
        }
    );
    assert_eq!(err.offset, 14);
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let bytes = [7, 0, 0, 0, 0, 0, 0, 0, 0xde, 0xad];
    assert_eq!(from_bytes::<u64>(&bytes).unwrap(), 7);
}

#[test]
fn test_fixed_arrays_have_no_prefix() {
    let hash = [0xabu8; 20];
    assert_eq!(to_bytes(&hash).unwrap(), hash.to_vec());
    let err = from_bytes::<[u8; 20]>(&hash[..19]).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::TruncatedInput {
            needed: 20,
            remaining: 19
        }
    );
}
