use super::*;
use proptest::prelude::*;
use vau_api::ErrorKind;

fn sample() -> CipherMessage {
    CipherMessage::new(
        VAU_VERSION_1,
        CurvePoint::new([0x11; 32], [0x22; 32]),
        Nonce::new([0x33; 12]),
        vec![0x44; 20],
    )
    .unwrap()
}

#[test]
fn test_layout() {
    let bytes = sample().encode();
    assert_eq!(bytes.len(), 77 + 20);
    assert_eq!(bytes[0], 0x01);
    assert!(bytes[1..33].iter().all(|&b| b == 0x11));
    assert!(bytes[33..65].iter().all(|&b| b == 0x22));
    assert!(bytes[65..77].iter().all(|&b| b == 0x33));
    assert!(bytes[77..].iter().all(|&b| b == 0x44));
}

#[test]
fn test_decode_inverts_encode() {
    let msg = sample();
    let decoded = CipherMessage::decode(&msg.encode()).unwrap();
    assert_eq!(decoded, msg);
    assert_eq!(decoded.ciphertext_and_tag(), &[0x44; 20][..]);
}

#[test]
fn test_truncated_header_is_framing_error() {
    let bytes = sample().encode();
    for len in [0usize, 1, 65, 76] {
        let err = CipherMessage::decode(&bytes[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Framing);
    }
    // exactly a header, no ciphertext: framing accepts it
    let header_only = CipherMessage::decode(&bytes[..77]).unwrap();
    assert!(header_only.ciphertext_and_tag().is_empty());
}

#[test]
fn test_unknown_version_is_framing_error() {
    let mut bytes = sample().encode();
    for version in [0x00u8, 0x02, 0xff] {
        bytes[0] = version;
        assert_eq!(
            CipherMessage::decode(&bytes).unwrap_err().kind(),
            ErrorKind::Framing
        );
    }
    assert!(CipherMessage::new(0x02, CurvePoint::new([0; 32], [0; 32]), Nonce::new([0; 12]), vec![])
        .is_err());
}

proptest! {
    #[test]
    fn prop_framing_roundtrip(
        x in any::<[u8; 32]>(),
        y in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        body in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let msg = CipherMessage::new(VAU_VERSION_1, CurvePoint::new(x, y), Nonce::new(nonce), body).unwrap();
        let bytes = msg.encode();
        prop_assert_eq!(bytes.len(), msg.encoded_len());
        prop_assert_eq!(CipherMessage::decode(&bytes).unwrap(), msg);
    }
}
