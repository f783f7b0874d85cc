use crate::*;
use arrayref::array_ref;
use bls12_381_plus::{elliptic_curve::Field, group::Group, G1Projective, G2Projective, Scalar};
use core::marker::PhantomData;
use rand_core::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Number of bytes in a proof before the undisclosed-message scalars
pub const PROOF_BASE_BYTES: usize = 3 * G1_COMPRESSED_BYTES + 4 * SCALAR_BYTES;

/// Number of seed octets consumed by [`SeededProofPrf`]
pub const PRF_SEED_BYTES: usize = 32;

/// Number of bytes needed to represent a proof over `num_undisclosed`
/// hidden messages
pub const fn proof_size(num_undisclosed: usize) -> usize {
    PROOF_BASE_BYTES + num_undisclosed * SCALAR_BYTES
}

// Blinding-scalar slots. Slot 0 takes the 0-based undisclosed position
// as its input; the rest ignore it.
const PRF_MSG_TILDE: u8 = 0;
const PRF_R1: u8 = 1;
const PRF_R2: u8 = 2;
const PRF_E_TILDE: u8 = 3;
const PRF_R1_TILDE: u8 = 4;
const PRF_R3_TILDE: u8 = 5;

const PRF_DSTS: [&[u8]; 6] = [
    b"random msg scalar",
    b"random r_1 scalar",
    b"random r_2 scalar",
    b"random e_t scalar",
    b"random r1t scalar",
    b"random r3t scalar",
];

/// Source of the blinding scalars consumed by proof generation.
///
/// Production proofs use [`SeededProofPrf`] over fresh OS randomness;
/// deterministic proofs for fixture reproduction supply their own
/// implementation. `input_type` selects one of the six scalar slots and
/// must lie in `[0, 6)`; `input` carries the 0-based undisclosed-message
/// position for slot 0 and is 0 otherwise.
pub trait ProofPrf {
    /// Derive the scalar for one slot
    fn scalar(&mut self, input_type: u8, input: u64) -> BbsResult<Scalar>;
}

/// The default blinding-scalar source: each slot is hash_to_scalar over
/// the seed and the big-endian input under a slot-specific tag. The seed
/// is zeroized on drop.
pub struct SeededProofPrf<C: BbsCiphersuite> {
    seed: [u8; PRF_SEED_BYTES],
    _marker: PhantomData<C>,
}

impl<C: BbsCiphersuite> SeededProofPrf<C> {
    /// Wrap a 32-octet seed
    pub fn new(seed: [u8; PRF_SEED_BYTES]) -> Self {
        Self {
            seed,
            _marker: PhantomData,
        }
    }
}

impl<C: BbsCiphersuite> Zeroize for SeededProofPrf<C> {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}

impl<C: BbsCiphersuite> Drop for SeededProofPrf<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: BbsCiphersuite> ProofPrf for SeededProofPrf<C> {
    fn scalar(&mut self, input_type: u8, input: u64) -> BbsResult<Scalar> {
        let dst = PRF_DSTS.get(usize::from(input_type)).ok_or_else(|| {
            BbsError::InvalidInputs(format!("prf input type {} out of range", input_type))
        })?;
        let mut hasher = ScalarHasher::<C>::new();
        hasher.update(self.seed);
        hasher.update(input.to_be_bytes());
        hasher.finalize(dst)
    }
}

/// A zero-knowledge proof of possession of a BBS signature that
/// selectively discloses a subset of the signed messages.
///
/// Wire layout: `Abar || Bbar || D || e^ || r1^ || r3^ || m^_j1 .. m^_jU
/// || c`, `272 + 32 * U` bytes for `U` undisclosed messages.
pub struct Proof<C: BbsCiphersuite> {
    a_bar: G1Projective,
    b_bar: G1Projective,
    d: G1Projective,
    e_hat: Scalar,
    r1_hat: Scalar,
    r3_hat: Scalar,
    m_hats: Vec<Scalar>,
    challenge: Scalar,
    _marker: PhantomData<C>,
}

impl<C: BbsCiphersuite> Clone for Proof<C> {
    fn clone(&self) -> Self {
        Self {
            a_bar: self.a_bar,
            b_bar: self.b_bar,
            d: self.d,
            e_hat: self.e_hat,
            r1_hat: self.r1_hat,
            r3_hat: self.r3_hat,
            m_hats: self.m_hats.clone(),
            challenge: self.challenge,
            _marker: PhantomData,
        }
    }
}

impl<C: BbsCiphersuite> PartialEq for Proof<C> {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl<C: BbsCiphersuite> Eq for Proof<C> {}

impl<C: BbsCiphersuite> core::fmt::Display for Proof<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl<C: BbsCiphersuite> core::fmt::Debug for Proof<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Proof({})", hex::encode(self.to_bytes()))
    }
}

impl<C: BbsCiphersuite> Proof<C> {
    /// Generate a proof disclosing the messages at `disclosed_indexes`.
    ///
    /// `disclosed_indexes` must be strictly ascending and within
    /// `[0, messages.len())`. The presentation header binds the proof to
    /// one presentation; pass an empty slice when there is none.
    pub fn new<B: AsRef<[u8]>>(
        pk: &PublicKey<C>,
        signature: &Signature<C>,
        header: &[u8],
        presentation_header: &[u8],
        disclosed_indexes: &[usize],
        messages: &[B],
    ) -> BbsResult<Self> {
        let mut seed = [0u8; PRF_SEED_BYTES];
        get_crypto_rng()
            .try_fill_bytes(&mut seed)
            .map_err(|_| BbsError::RandomGenerationError)?;
        let mut prf = SeededProofPrf::<C>::new(seed);
        seed.zeroize();
        Self::new_with_prf(
            pk,
            signature,
            header,
            presentation_header,
            disclosed_indexes,
            messages,
            &mut prf,
        )
    }

    /// Generate a proof with a caller-supplied blinding-scalar source.
    ///
    /// Proofs are deterministic given the source, which is what fixture
    /// tests need; production callers want [`Proof::new`].
    pub fn new_with_prf<B: AsRef<[u8]>, P: ProofPrf>(
        pk: &PublicKey<C>,
        signature: &Signature<C>,
        header: &[u8],
        presentation_header: &[u8],
        disclosed_indexes: &[usize],
        messages: &[B],
        prf: &mut P,
    ) -> BbsResult<Self> {
        let num_messages = messages.len();
        if disclosed_indexes.len() > num_messages {
            return Err(BbsError::InvalidInputs(
                "more disclosed indexes than messages".to_string(),
            ));
        }
        let num_undisclosed = num_messages - disclosed_indexes.len();

        let r1 = prf.scalar(PRF_R1, 0)?;
        let r2 = prf.scalar(PRF_R2, 0)?;
        let e_tilde = prf.scalar(PRF_E_TILDE, 0)?;
        let r1_tilde = prf.scalar(PRF_R1_TILDE, 0)?;
        let r3_tilde = prf.scalar(PRF_R3_TILDE, 0)?;

        let mut generators = GeneratorStream::<C>::new()?;
        let mut domain_calc = DomainCalculator::<C>::new(pk, num_messages as u64);
        let q_1 = generators.step()?;
        domain_calc.update(&q_1)?;

        // One pass computes every message scalar, the undisclosed blinds
        // and their T2 terms. The scalars are kept so the challenge
        // transcript can replay the disclosed ones in index order later;
        // the transcript needs the domain first, which needs every
        // generator, so a single merged pass is not possible.
        let mut b = C::p1();
        let mut t2 = G1Projective::identity();
        let mut msg_scalars = Vec::with_capacity(num_messages);
        let mut undisclosed_scalars = Vec::with_capacity(num_undisclosed);
        let mut m_tildes = Vec::with_capacity(num_undisclosed);
        let mut disclosed_pos = 0usize;
        for (i, msg) in messages.iter().enumerate() {
            let h_i = generators.step()?;
            domain_calc.update(&h_i)?;
            let msg_scalar = hash_to_scalar::<C>(msg.as_ref(), C::MAP_DST)?;
            b += h_i * msg_scalar;
            if disclosed_pos < disclosed_indexes.len() && disclosed_indexes[disclosed_pos] == i {
                disclosed_pos += 1;
            } else {
                let m_tilde = prf.scalar(PRF_MSG_TILDE, undisclosed_scalars.len() as u64)?;
                t2 += h_i * m_tilde;
                m_tildes.push(m_tilde);
                undisclosed_scalars.push(msg_scalar);
            }
            msg_scalars.push(msg_scalar);
        }
        // Indexes that are out of order, repeated or out of range never
        // match the cursor
        if disclosed_pos != disclosed_indexes.len() {
            return Err(BbsError::InvalidInputs(
                "disclosed indexes out of order or out of range".to_string(),
            ));
        }

        let domain = domain_calc.finalize(header)?;
        b += q_1 * domain;

        let d = b * r2;
        let a_bar = signature.a * (r1 * r2);
        let b_bar = d * r1 - a_bar * signature.e;
        let t1 = d * r1_tilde + a_bar * e_tilde;
        t2 += d * r3_tilde;

        let disclosed_scalars = disclosed_indexes
            .iter()
            .map(|&i| msg_scalars[i])
            .collect::<Vec<_>>();
        let challenge = challenge_hash::<C>(
            &a_bar,
            &b_bar,
            &d,
            &t1,
            &t2,
            disclosed_indexes,
            &disclosed_scalars,
            &domain,
            presentation_header,
        )?;

        let r2_inv = Option::<Scalar>::from(r2.invert())
            .ok_or_else(|| BbsError::SigningError("r2 is not invertible".to_string()))?;
        let e_hat = e_tilde + signature.e * challenge;
        let r1_hat = r1_tilde - r1 * challenge;
        let r3_hat = r3_tilde - r2_inv * challenge;
        let m_hats = m_tildes
            .iter()
            .zip(undisclosed_scalars.iter())
            .map(|(m_tilde, msg_scalar)| m_tilde + msg_scalar * challenge)
            .collect::<Vec<_>>();

        Ok(Self {
            a_bar,
            b_bar,
            d,
            e_hat,
            r1_hat,
            r3_hat,
            m_hats,
            challenge,
            _marker: PhantomData,
        })
    }

    /// Verify this proof against the disclosed messages.
    ///
    /// `num_messages` is the total count the signature was issued over;
    /// `disclosed_messages` pairs with `disclosed_indexes` in order.
    pub fn verify<B: AsRef<[u8]>>(
        &self,
        pk: &PublicKey<C>,
        header: &[u8],
        presentation_header: &[u8],
        disclosed_indexes: &[usize],
        disclosed_messages: &[B],
        num_messages: usize,
    ) -> BbsResult<()> {
        if disclosed_messages.len() != disclosed_indexes.len() {
            return Err(BbsError::InvalidInputs(
                "disclosed messages and indexes differ in length".to_string(),
            ));
        }
        if disclosed_indexes.len() > num_messages {
            return Err(BbsError::InvalidInputs(
                "more disclosed indexes than messages".to_string(),
            ));
        }
        if self.m_hats.len() != num_messages - disclosed_indexes.len() {
            return Err(BbsError::InvalidInputs(
                "proof length does not match the undisclosed message count".to_string(),
            ));
        }
        if self.a_bar.is_identity().into() {
            return Err(BbsError::InvalidProof);
        }

        let t1 = self.b_bar * self.challenge + self.a_bar * self.e_hat + self.d * self.r1_hat;
        let mut t2 = self.d * self.r3_hat;

        let mut generators = GeneratorStream::<C>::new()?;
        let mut domain_calc = DomainCalculator::<C>::new(pk, num_messages as u64);
        let q_1 = generators.step()?;
        domain_calc.update(&q_1)?;

        let mut bv = C::p1();
        let mut disclosed_scalars = Vec::with_capacity(disclosed_indexes.len());
        let mut disclosed_pos = 0usize;
        let mut undisclosed_pos = 0usize;
        for i in 0..num_messages {
            let h_i = generators.step()?;
            domain_calc.update(&h_i)?;
            if disclosed_pos < disclosed_indexes.len() && disclosed_indexes[disclosed_pos] == i {
                let msg_scalar =
                    hash_to_scalar::<C>(disclosed_messages[disclosed_pos].as_ref(), C::MAP_DST)?;
                bv += h_i * msg_scalar;
                disclosed_scalars.push(msg_scalar);
                disclosed_pos += 1;
            } else {
                let m_hat = self.m_hats.get(undisclosed_pos).ok_or_else(|| {
                    BbsError::InvalidInputs(
                        "disclosed indexes out of order or out of range".to_string(),
                    )
                })?;
                t2 += h_i * m_hat;
                undisclosed_pos += 1;
            }
        }
        if disclosed_pos != disclosed_indexes.len() {
            return Err(BbsError::InvalidInputs(
                "disclosed indexes out of order or out of range".to_string(),
            ));
        }

        let domain = domain_calc.finalize(header)?;
        bv += q_1 * domain;
        t2 += bv * self.challenge;

        let challenge = challenge_hash::<C>(
            &self.a_bar,
            &self.b_bar,
            &self.d,
            &t1,
            &t2,
            disclosed_indexes,
            &disclosed_scalars,
            &domain,
            presentation_header,
        )?;
        if challenge != self.challenge {
            return Err(BbsError::InvalidProof);
        }

        // e(Abar, W) * e(Bbar, -P2) is the identity when the underlying
        // signature was valid
        if pairing_g1_g2(&[
            (self.a_bar, pk.point),
            (self.b_bar, -G2Projective::generator()),
        ])
        .is_identity()
        .into()
        {
            Ok(())
        } else {
            Err(BbsError::InvalidProof)
        }
    }

    /// The number of undisclosed messages this proof hides
    pub fn num_undisclosed(&self) -> usize {
        self.m_hats.len()
    }

    /// Get the byte representation of this proof
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(proof_size(self.m_hats.len()));
        bytes.extend_from_slice(&g1_to_bytes(&self.a_bar));
        bytes.extend_from_slice(&g1_to_bytes(&self.b_bar));
        bytes.extend_from_slice(&g1_to_bytes(&self.d));
        bytes.extend_from_slice(&scalar_to_bytes(&self.e_hat));
        bytes.extend_from_slice(&scalar_to_bytes(&self.r1_hat));
        bytes.extend_from_slice(&scalar_to_bytes(&self.r3_hat));
        for m_hat in &self.m_hats {
            bytes.extend_from_slice(&scalar_to_bytes(m_hat));
        }
        bytes.extend_from_slice(&scalar_to_bytes(&self.challenge));
        bytes
    }

    /// Convert a byte representation into a proof.
    ///
    /// The undisclosed-message count follows from the length, which must
    /// be `272 + 32 * U` exactly; all points must decode canonically and
    /// `Abar` must not be the identity.
    pub fn from_bytes(bytes: &[u8]) -> BbsResult<Self> {
        if bytes.len() < PROOF_BASE_BYTES || (bytes.len() - PROOF_BASE_BYTES) % SCALAR_BYTES != 0 {
            return Err(BbsError::DeserializationError(format!(
                "{} octets is not a valid proof length",
                bytes.len()
            )));
        }
        let num_undisclosed = (bytes.len() - PROOF_BASE_BYTES) / SCALAR_BYTES;

        let a_bar = g1_from_bytes(array_ref![bytes, 0, G1_COMPRESSED_BYTES])?;
        if a_bar.is_identity().into() {
            return Err(BbsError::DeserializationError(
                "proof point Abar is the identity".to_string(),
            ));
        }
        let b_bar = g1_from_bytes(array_ref![bytes, G1_COMPRESSED_BYTES, G1_COMPRESSED_BYTES])?;
        let d = g1_from_bytes(array_ref![
            bytes,
            2 * G1_COMPRESSED_BYTES,
            G1_COMPRESSED_BYTES
        ])?;

        let mut offset = 3 * G1_COMPRESSED_BYTES;
        let mut next_scalar = |bytes: &[u8]| -> BbsResult<Scalar> {
            let s = Option::<Scalar>::from(scalar_from_bytes(array_ref![
                bytes,
                offset,
                SCALAR_BYTES
            ]))
            .ok_or_else(|| BbsError::DeserializationError("malformed proof scalar".to_string()));
            offset += SCALAR_BYTES;
            s
        };
        let e_hat = next_scalar(bytes)?;
        let r1_hat = next_scalar(bytes)?;
        let r3_hat = next_scalar(bytes)?;
        let mut m_hats = Vec::with_capacity(num_undisclosed);
        for _ in 0..num_undisclosed {
            m_hats.push(next_scalar(bytes)?);
        }
        let challenge = next_scalar(bytes)?;

        Ok(Self {
            a_bar,
            b_bar,
            d,
            e_hat,
            r1_hat,
            r3_hat,
            m_hats,
            challenge,
            _marker: PhantomData,
        })
    }
}

/// The Fiat-Shamir challenge transcript shared by generation and
/// verification. The order is mandated by the draft and must not change.
#[allow(clippy::too_many_arguments)]
fn challenge_hash<C: BbsCiphersuite>(
    a_bar: &G1Projective,
    b_bar: &G1Projective,
    d: &G1Projective,
    t1: &G1Projective,
    t2: &G1Projective,
    disclosed_indexes: &[usize],
    disclosed_scalars: &[Scalar],
    domain: &Scalar,
    presentation_header: &[u8],
) -> BbsResult<Scalar> {
    let mut hasher = ScalarHasher::<C>::new();
    hasher.update(g1_to_bytes(a_bar));
    hasher.update(g1_to_bytes(b_bar));
    hasher.update(g1_to_bytes(d));
    hasher.update(g1_to_bytes(t1));
    hasher.update(g1_to_bytes(t2));
    hasher.update((disclosed_indexes.len() as u64).to_be_bytes());
    for &index in disclosed_indexes {
        hasher.update((index as u64).to_be_bytes());
    }
    for scalar in disclosed_scalars {
        hasher.update(scalar_to_bytes(scalar));
    }
    hasher.update(scalar_to_bytes(domain));
    hasher.update((presentation_header.len() as u64).to_be_bytes());
    hasher.update(presentation_header);
    hasher.finalize(C::CHALLENGE_DST)
}

impl<C: BbsCiphersuite> Serialize for Proof<C> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            hex::encode(self.to_bytes()).serialize(s)
        } else {
            self.to_bytes().serialize(s)
        }
    }
}

impl<'de, C: BbsCiphersuite> Deserialize<'de> for Proof<C> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let bytes = if d.is_human_readable() {
            let hex_str = <&str>::deserialize(d)?;
            hex::decode(hex_str).map_err(serde::de::Error::custom)?
        } else {
            Vec::<u8>::deserialize(d)?
        };
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
