use crate::*;
use bls12_381_plus::{elliptic_curve::hash2curve::ExpandMsgXof, G1Projective};

/// The BLS12-381 cipher suite hashing with SHAKE-256, i.e.
/// expand_message_xof for scalars and the XOF:SHAKE-256 SSWU map for points
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Bls12381Shake256;

impl BbsCiphersuite for Bls12381Shake256 {
    const CIPHERSUITE_ID: &'static [u8] = b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_";
    const API_ID: &'static [u8] = b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_";
    const SIGNATURE_DST: &'static [u8] = b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_H2S_";
    const CHALLENGE_DST: &'static [u8] = b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_H2S_";
    const MAP_DST: &'static [u8] =
        b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_MAP_MSG_TO_SCALAR_AS_HASH_";
    const KEYGEN_DST: &'static [u8] = b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_KEYGEN_DST_";
    const GENERATOR_SEED: &'static [u8] =
        b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_MESSAGE_GENERATOR_SEED";
    const GENERATOR_SEED_DST: &'static [u8] =
        b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_SIG_GENERATOR_SEED_";
    const GENERATOR_DST: &'static [u8] =
        b"BBS_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_HM2S_SIG_GENERATOR_DST_";
    const P1: [u8; G1_COMPRESSED_BYTES] = [
        0x89, 0x29, 0xdf, 0xbc, 0x7e, 0x66, 0x42, 0xc4, 0xed, 0x9c, 0xba, 0x08, 0x56, 0xe4, 0x93,
        0xf8, 0xb9, 0xd7, 0xd5, 0xfc, 0xb0, 0xc3, 0x1e, 0xf8, 0xfd, 0xcd, 0x34, 0xd5, 0x06, 0x48,
        0xa5, 0x6c, 0x79, 0x5e, 0x10, 0x6e, 0x9e, 0xad, 0xa6, 0xe0, 0xbd, 0xa3, 0x86, 0xb4, 0x14,
        0x15, 0x07, 0x55,
    ];

    type Expander = ExpandMsgXofShake256;

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> G1Projective {
        G1Projective::hash::<ExpandMsgXof<sha3::Shake256>>(msg, dst)
    }
}
