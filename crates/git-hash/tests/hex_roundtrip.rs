use git_hash::hex::{hex_decode, hex_encode, hex_to_bytes, hex_to_string, is_valid_hex};
use git_hash::ObjectId;

#[test]
fn hex_encode_decode_roundtrip() {
    let bytes = [0xde, 0xad, 0xbe, 0xef, 0x00, 0xff];
    let hex = hex_to_string(&bytes);
    let decoded = hex_to_bytes(&hex).unwrap();
    assert_eq!(decoded, bytes);
}

#[test]
fn hex_is_always_lowercase() {
    let bytes: Vec<u8> = (0..=255).collect();
    let hex = hex_to_string(&bytes);
    assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn hex_length_is_double() {
    let bytes = [1u8, 2, 3, 4, 5];
    let hex = hex_to_string(&bytes);
    assert_eq!(hex.len(), bytes.len() * 2);
}

#[test]
fn hex_encode_buffer_roundtrip() {
    let bytes = [9u8, 8, 7, 6, 5];
    let mut buf = vec![0u8; bytes.len() * 2];
    hex_encode(&bytes, &mut buf);
    let hex = std::str::from_utf8(&buf).unwrap();
    let mut decoded = vec![0u8; bytes.len()];
    hex_decode(hex, &mut decoded).unwrap();
    assert_eq!(decoded, bytes);
}

#[test]
fn valid_hex_accepted() {
    let bytes = [1u8, 2, 3];
    let hex = hex_to_string(&bytes);
    assert!(is_valid_hex(&hex));
}

#[test]
fn oid_hex_roundtrip() {
    let bytes = [7u8; 20];
    let oid = ObjectId::from_bytes(&bytes).unwrap();
    let hex = oid.to_hex();
    let parsed: ObjectId = hex.parse().unwrap();
    assert_eq!(oid, parsed);
}
