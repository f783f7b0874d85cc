#![allow(dead_code)]

use bbs::*;

/// Key material and key info from the IETF draft key-pair fixtures
pub const TEST_KEY_MATERIAL: &str =
    "746869732d49532d6a7573742d616e2d546573742d494b4d2d746f2d67656e65726174652d246528724074232d6b6579";
pub const TEST_KEY_INFO: &str =
    "746869732d49532d736f6d652d6b65792d6d657461646174612d746f2d62652d757365642d696e2d746573742d6b65792d67656e";

/// Header and presentation header from the IETF draft fixtures
pub const TEST_HEADER: &str = "11223344556677889900aabbccddeeff";
pub const TEST_PRESENTATION_HEADER: &str =
    "bed231d880675ed101ead304512e043ade9958dd0241ea70b4b3957fba941501";

/// Secret keys from the IETF draft key-pair fixtures
pub const DRAFT_SK_SHA256: &str =
    "60e55110f76883a13d030b2f6bd11883422d5abde717569fc0731f51237169fc";
pub const DRAFT_SK_SHAKE256: &str =
    "2eee0f60a8a3a8bec0ee942bfd46cbdae9a0738ee68f5a64e7238311cf09a079";

/// The seed the draft fixtures feed their deterministic proof randomness,
/// the ASCII expansion of pi
pub const DRAFT_PRF_SEED: &str =
    "332e313431353932363533353839373933323338343632363433333833323739";

pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

/// The ten messages from the IETF draft fixtures; the last one is empty
pub fn test_messages() -> Vec<Vec<u8>> {
    [
        "9872ad089e452c7b6e283dfac2a80d58e8d0ff71cc4d5e310a1debdda4a45f02",
        "c344136d9ab02da4dd5908bbba913ae6f58c2cc844b802a6f811f5fb075f9b80",
        "7372e9daa5ed31e6cd5c825eac1b855e84476a1d94932aa348e07b73",
        "77fe97eb97a1ebe2e81e4e3597a3ee740a66e9ef2412472c",
        "496694774c5604ab1b2544eababcf0f53278ff50",
        "515ae153e22aae04ad16f759e07237b4",
        "d183ddc6e2665aa4e2f088af",
        "ac55fb33a75909ed",
        "96012096",
        "",
    ]
    .iter()
    .map(|m| hex_bytes(m))
    .collect()
}

pub fn secret_key_from_hex<C: BbsCiphersuite>(sk: &str) -> SecretKey<C> {
    let bytes: [u8; SECRET_KEY_BYTES] = hex_bytes(sk).try_into().unwrap();
    Option::<SecretKey<C>>::from(SecretKey::<C>::from_bytes(&bytes)).unwrap()
}

pub fn test_keypair<C: BbsCiphersuite>() -> (SecretKey<C>, PublicKey<C>) {
    let sk = SecretKey::<C>::from_key_material(
        &hex_bytes(TEST_KEY_MATERIAL),
        &hex_bytes(TEST_KEY_INFO),
        None,
    )
    .unwrap();
    let pk = sk.public_key();
    (sk, pk)
}
