use crate::*;
use bls12_381_plus::{G1Affine, G1Projective};

/// The fixed parameters and hash strategy of one BBS cipher suite.
///
/// Implementations are unit marker types; every operation in the crate is
/// generic over one of them, so both suites can be used from a single
/// build without any process-wide suite state. The derived tags are
/// spelled out as full literals rather than concatenated at run time.
pub trait BbsCiphersuite {
    /// The unique cipher suite identifier
    const CIPHERSUITE_ID: &'static [u8];

    /// The API identifier: `CIPHERSUITE_ID || "H2G_HM2S_"`
    const API_ID: &'static [u8];

    /// Tag under which the signature scalar `e` is derived:
    /// `API_ID || "H2S_"`
    const SIGNATURE_DST: &'static [u8];

    /// Tag under which the proof challenge and the domain are derived:
    /// `API_ID || "H2S_"`.
    ///
    /// Identical to [`SIGNATURE_DST`](Self::SIGNATURE_DST). The IETF draft
    /// derives both from the same suffix; the collision is conformant and
    /// must not be "fixed".
    const CHALLENGE_DST: &'static [u8];

    /// Tag for mapping messages to scalars:
    /// `API_ID || "MAP_MSG_TO_SCALAR_AS_HASH_"`
    const MAP_DST: &'static [u8];

    /// Default tag for key generation: `CIPHERSUITE_ID || "KEYGEN_DST_"`
    const KEYGEN_DST: &'static [u8];

    /// Seed material for the generator stream:
    /// `API_ID || "MESSAGE_GENERATOR_SEED"`
    const GENERATOR_SEED: &'static [u8];

    /// Tag under which generator seed state is expanded:
    /// `API_ID || "SIG_GENERATOR_SEED_"`
    const GENERATOR_SEED_DST: &'static [u8];

    /// Tag under which generator seed state is hashed to the curve:
    /// `API_ID || "SIG_GENERATOR_DST_"`
    const GENERATOR_DST: &'static [u8];

    /// The suite base point P1 in compressed form
    const P1: [u8; G1_COMPRESSED_BYTES];

    /// The expand_message strategy for this suite
    type Expander: ExpandMessage;

    /// Hash arbitrary octets to a point in G1
    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> G1Projective;

    /// The suite base point P1
    fn p1() -> G1Projective {
        // Infallible, the suite constant is a valid compressed point
        Option::<G1Affine>::from(G1Affine::from_compressed(&Self::P1))
            .map(G1Projective::from)
            .unwrap()
    }
}
