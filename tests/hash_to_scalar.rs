mod utils;
use bbs::*;
use utils::*;

// Message-to-scalar fixtures for the first two draft messages and the
// empty message, per suite

#[test]
fn map_message_to_scalar_sha256() {
    let messages = test_messages();
    for (msg, expected) in [
        (
            &messages[0][..],
            "1cb5bb86114b34dc438a911617655a1db595abafac92f47c5001799cf624b430",
        ),
        (
            &messages[1][..],
            "154249d503c093ac2df516d4bb88b510d54fd97e8d7121aede420a25d9521952",
        ),
        (
            &[][..],
            "08e3afeb2b4f2b5f907924ef42856616e6f2d5f1fb373736db1cca32707a7d16",
        ),
    ] {
        let scalar = hash_to_scalar::<Bls12381Sha256>(msg, Bls12381Sha256::MAP_DST).unwrap();
        assert_eq!(hex::encode(scalar_to_bytes(&scalar)), expected);
    }
}

#[test]
fn map_message_to_scalar_shake256() {
    let messages = test_messages();
    for (msg, expected) in [
        (
            &messages[0][..],
            "1e0dea6c9ea8543731d331a0ab5f64954c188542b33c5bbc8ae5b3a830f2d99f",
        ),
        (
            &messages[1][..],
            "3918a40fb277b4c796805d1371931e08a314a8bf8200a92463c06054d2c56a9f",
        ),
        (
            &[][..],
            "27878da72f7775e709bb693d81b819dc4e9fa60711f4ea927740e40073489e78",
        ),
    ] {
        let scalar = hash_to_scalar::<Bls12381Shake256>(msg, Bls12381Shake256::MAP_DST).unwrap();
        assert_eq!(hex::encode(scalar_to_bytes(&scalar)), expected);
    }
}

#[test]
fn streaming_matches_one_shot() {
    let msg = hex_bytes(TEST_KEY_MATERIAL);
    let one_shot = hash_to_scalar::<Bls12381Sha256>(&msg, Bls12381Sha256::MAP_DST).unwrap();
    let mut hasher = ScalarHasher::<Bls12381Sha256>::new();
    for chunk in msg.chunks(5) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(Bls12381Sha256::MAP_DST).unwrap(), one_shot);

    let one_shot = hash_to_scalar::<Bls12381Shake256>(&msg, Bls12381Shake256::MAP_DST).unwrap();
    let mut hasher = ScalarHasher::<Bls12381Shake256>::new();
    for chunk in msg.chunks(7) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(Bls12381Shake256::MAP_DST).unwrap(), one_shot);
}

#[test]
fn rejects_oversized_dst() {
    let long_dst = vec![0x42u8; 256];
    assert!(hash_to_scalar::<Bls12381Sha256>(b"msg", &long_dst).is_err());
    assert!(hash_to_scalar::<Bls12381Shake256>(b"msg", &long_dst).is_err());
}
