mod utils;
use bbs::*;
use rstest::*;
use utils::*;

// The IETF draft key-pair fixtures were produced under the api-id keygen
// tag rather than the suite default, so they pass it explicitly

#[test]
fn keygen_draft_vector_sha256() {
    let sk = SecretKey::<Bls12381Sha256>::from_key_material(
        &hex_bytes(TEST_KEY_MATERIAL),
        &hex_bytes(TEST_KEY_INFO),
        Some(b"BBS_BLS12381G1_XMD:SHA-256_SSWU_RO_H2G_HM2S_KEYGEN_DST_"),
    )
    .unwrap();
    assert_eq!(
        hex::encode(sk.to_bytes()),
        "60e55110f76883a13d030b2f6bd11883422d5abde717569fc0731f51237169fc"
    );
}

#[test]
fn keygen_draft_vector_shake256() {
    let sk = SecretKey::<Bls12381Shake256>::from_key_material(
        &hex_bytes(TEST_KEY_MATERIAL),
        &hex_bytes(TEST_KEY_INFO),
        Some(b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_KEYGEN_DST_"),
    )
    .unwrap();
    assert_eq!(
        hex::encode(sk.to_bytes()),
        "2eee0f60a8a3a8bec0ee942bfd46cbdae9a0738ee68f5a64e7238311cf09a079"
    );
}

#[test]
fn keygen_default_tag_sha256() {
    let (sk, _) = test_keypair::<Bls12381Sha256>();
    assert_eq!(
        hex::encode(sk.to_bytes()),
        "6f3fff2e871962fb436be9233e162751b47ce0791522d32d10479bceddb75fa3"
    );
}

#[test]
fn keygen_default_tag_shake256() {
    let (sk, _) = test_keypair::<Bls12381Shake256>();
    assert_eq!(
        hex::encode(sk.to_bytes()),
        "23c7aa38e94a827f9d36797e587759a52036d2ded84c84d5b02cd228e194f4a5"
    );
}

#[rstest]
#[case::sha256(Bls12381Sha256)]
#[case::shake256(Bls12381Shake256)]
fn keygen_rejects_bad_inputs<C: BbsCiphersuite>(#[case] _c: C) {
    // Too little key material
    assert!(SecretKey::<C>::from_key_material(&[0u8; 31], &[], None).is_err());
    // Key info too long for its two-octet length prefix
    let long_info = vec![0u8; 65536];
    assert!(
        SecretKey::<C>::from_key_material(&hex_bytes(TEST_KEY_MATERIAL), &long_info, None).is_err()
    );
}

#[rstest]
#[case::sha256(Bls12381Sha256)]
#[case::shake256(Bls12381Shake256)]
fn secret_key_byte_round_trip<C: BbsCiphersuite>(#[case] _c: C) {
    let (sk, _) = test_keypair::<C>();
    let bytes = sk.to_bytes();
    let restored = Option::<SecretKey<C>>::from(SecretKey::<C>::from_bytes(&bytes)).unwrap();
    assert_eq!(sk, restored);
}

#[rstest]
#[case::sha256(Bls12381Sha256)]
#[case::shake256(Bls12381Shake256)]
fn secret_key_rejects_out_of_range_bytes<C: BbsCiphersuite>(#[case] _c: C) {
    // Zero is not a secret key
    let res = SecretKey::<C>::from_bytes(&[0u8; SECRET_KEY_BYTES]);
    assert!(bool::from(res.is_none()));

    // The subgroup order itself is out of range
    let order: [u8; SECRET_KEY_BYTES] =
        hex_bytes("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001")
            .try_into()
            .unwrap();
    let res = SecretKey::<C>::from_bytes(&order);
    assert!(bool::from(res.is_none()));

    // One below the order is the largest valid key
    let order_minus_one: [u8; SECRET_KEY_BYTES] =
        hex_bytes("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000")
            .try_into()
            .unwrap();
    let res = SecretKey::<C>::from_bytes(&order_minus_one);
    assert!(bool::from(res.is_some()));
}

#[rstest]
#[case::sha256(Bls12381Sha256)]
#[case::shake256(Bls12381Shake256)]
fn public_key_round_trip<C: BbsCiphersuite>(#[case] _c: C) {
    let (sk, pk) = test_keypair::<C>();
    assert_eq!(PublicKey::from(&sk), pk);
    let restored = PublicKey::<C>::from_bytes(&pk.to_bytes()).unwrap();
    assert_eq!(pk, restored);
}

#[rstest]
#[case::sha256(Bls12381Sha256)]
#[case::shake256(Bls12381Shake256)]
fn public_key_rejects_identity_and_garbage<C: BbsCiphersuite>(#[case] _c: C) {
    // Compressed encoding of the point at infinity
    let mut identity = [0u8; PUBLIC_KEY_BYTES];
    identity[0] = 0xc0;
    assert!(PublicKey::<C>::from_bytes(&identity).is_err());

    let garbage = [0xffu8; PUBLIC_KEY_BYTES];
    assert!(PublicKey::<C>::from_bytes(&garbage).is_err());
}

#[rstest]
#[case::sha256(Bls12381Sha256)]
#[case::shake256(Bls12381Shake256)]
fn random_keys_are_distinct<C: BbsCiphersuite>(#[case] _c: C) {
    let sk1 = SecretKey::<C>::new().unwrap();
    let sk2 = SecretKey::<C>::new().unwrap();
    assert_ne!(sk1, sk2);
    assert_ne!(sk1.public_key(), sk2.public_key());
}
