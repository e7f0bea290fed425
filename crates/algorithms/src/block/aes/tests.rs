use super::*;

#[test]
fn test_sbox_known_values() {
    assert_eq!(sbox(0x00), 0x63);
    assert_eq!(sbox(0x01), 0x7c);
    assert_eq!(sbox(0x53), 0xed);
    assert_eq!(sbox(0xff), 0x16);
}

#[test]
fn test_aes128_fips197_appendix_b() {
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let mut block = hex::decode("3243f6a8885a308d313198a2e0370734").unwrap();

    let cipher = Aes128::new(&key).unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "3925841d02dc09fbdc118597196a0b32");
}

#[test]
fn test_aes128_fips197_appendix_c1() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let cipher = Aes128::new(&key).unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn test_key_expansion_last_round_key() {
    // FIPS 197 A.1, w[40..44]
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let rk = Aes128::expand_key(&key).unwrap();
    assert_eq!(
        hex::encode(&rk.as_slice()[160..]),
        "d014f9a8c9ee2589e13f0cc8b6630ca6"
    );
}

#[test]
fn test_invalid_lengths() {
    assert!(Aes128::new(&[0u8; 15]).is_err());
    assert!(Aes128::new(&[0u8; 32]).is_err());

    let cipher = Aes128::new(&[0u8; 16]).unwrap();
    let mut short = [0u8; 15];
    assert!(cipher.encrypt_block(&mut short).is_err());
}
