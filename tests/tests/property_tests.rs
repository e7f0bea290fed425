use proptest::prelude::*;
use vau::channel::SeededEntropy;
use vau::prelude::*;
use vau_tests::fixtures::backend_keypair;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn request_roundtrip(seed in any::<u64>(), plaintext in prop::collection::vec(any::<u8>(), 0..512)) {
        let backend = CryptoBackend::with_entropy(SeededEntropy::from_u64(seed)).unwrap();
        let backend_key = backend_keypair().unwrap();
        let fetcher = StaticKeyFetcher::new(*backend_key.public());

        let wire = VauChannel::new(&backend)
            .encrypt_for_backend(&plaintext, &fetcher)
            .unwrap()
            .encode();
        prop_assert_eq!(wire.len(), 77 + plaintext.len() + 16);

        let decoded = CipherMessage::decode(&wire).unwrap();
        prop_assert_eq!(decoded.encode(), wire.clone());
        prop_assert_eq!(VauChannel::decrypt_as_backend(&backend_key, &wire).unwrap(), plaintext);
    }

    #[test]
    fn any_single_bit_flip_after_header_rejected(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let backend = CryptoBackend::with_entropy(SeededEntropy::from_u64(seed)).unwrap();
        let backend_key = backend_keypair().unwrap();
        let fetcher = StaticKeyFetcher::new(*backend_key.public());

        let mut wire = VauChannel::new(&backend)
            .encrypt_for_backend(&plaintext, &fetcher)
            .unwrap()
            .encode();

        // nonce, ciphertext and tag
        let index = 65 + position.index(wire.len() - 65);
        wire[index] ^= 1 << bit;

        let err = VauChannel::decrypt_as_backend(&backend_key, &wire).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn random_session_input_fails_by_kind(
        key in prop::collection::vec(any::<u8>(), 0..24),
        blob in prop::collection::vec(any::<u8>(), 0..96),
    ) {
        let result = VauChannel::decrypt_with_session_key(&key, &blob);
        let kind = result.unwrap_err().kind();
        let expected = if key.len() != 16 {
            ErrorKind::InvalidKeyLength
        } else if blob.is_empty() {
            ErrorKind::EmptyMessage
        } else if blob.len() < 12 {
            ErrorKind::Framing
        } else {
            ErrorKind::Authentication
        };
        prop_assert_eq!(kind, expected);
    }
}
