use crate::*;
use arrayref::array_ref;
use bls12_381_plus::{elliptic_curve::Field, group::Group, G1Projective, G2Projective, Scalar};
use core::marker::PhantomData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of bytes needed to represent a signature
pub const SIGNATURE_BYTES: usize = G1_COMPRESSED_BYTES + SCALAR_BYTES;

/// A BBS signature `(A, e)` over a public key, a header and an ordered
/// list of messages
pub struct Signature<C: BbsCiphersuite> {
    pub(crate) a: G1Projective,
    pub(crate) e: Scalar,
    _marker: PhantomData<C>,
}

impl<C: BbsCiphersuite> Copy for Signature<C> {}

impl<C: BbsCiphersuite> Clone for Signature<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: BbsCiphersuite> PartialEq for Signature<C> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.e == other.e
    }
}

impl<C: BbsCiphersuite> Eq for Signature<C> {}

impl<C: BbsCiphersuite> core::fmt::Display for Signature<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl<C: BbsCiphersuite> core::fmt::Debug for Signature<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Signature({})", hex::encode(self.to_bytes()))
    }
}

impl<C: BbsCiphersuite> Signature<C> {
    /// Sign `messages` under `sk`.
    ///
    /// Deterministic: the scalar `e` is derived from the secret key, the
    /// domain and the message scalars, so signing the same inputs twice
    /// yields the same signature.
    pub fn new<B: AsRef<[u8]>>(
        sk: &SecretKey<C>,
        pk: &PublicKey<C>,
        header: &[u8],
        messages: &[B],
    ) -> BbsResult<Self> {
        let num_messages = messages.len() as u64;

        let mut generators = GeneratorStream::<C>::new()?;
        let mut domain_calc = DomainCalculator::<C>::new(pk, num_messages);
        let mut e_hasher = ScalarHasher::<C>::new();
        e_hasher.update(sk.to_bytes());

        // The domain has to enter the e transcript before any message
        // scalar, but it covers every generator. So the stream runs once
        // for the domain and a second time for the message terms.
        for _ in 0..=num_messages {
            let point = generators.step()?;
            domain_calc.update(&point)?;
        }
        let domain = domain_calc.finalize(header)?;
        e_hasher.update(scalar_to_bytes(&domain));

        let mut generators = GeneratorStream::<C>::new()?;
        let q_1 = generators.step()?;
        let mut b = C::p1() + q_1 * domain;
        for msg in messages {
            let h_i = generators.step()?;
            let msg_scalar = hash_to_scalar::<C>(msg.as_ref(), C::MAP_DST)?;
            b += h_i * msg_scalar;
            e_hasher.update(scalar_to_bytes(&msg_scalar));
        }
        let e = e_hasher.finalize(C::SIGNATURE_DST)?;

        let inv = Option::<Scalar>::from((sk.scalar + e).invert())
            .ok_or_else(|| BbsError::SigningError("secret key and e sum to zero".to_string()))?;
        let a = b * inv;
        if a.is_identity().into() {
            return Err(BbsError::SigningError(
                "signature point is the identity".to_string(),
            ));
        }
        Ok(Self {
            a,
            e,
            _marker: PhantomData,
        })
    }

    /// Verify this signature over `header` and `messages` under `pk`
    pub fn verify<B: AsRef<[u8]>>(
        &self,
        pk: &PublicKey<C>,
        header: &[u8],
        messages: &[B],
    ) -> BbsResult<()> {
        if self.a.is_identity().into() {
            return Err(BbsError::InvalidSignature);
        }

        let mut generators = GeneratorStream::<C>::new()?;
        let mut domain_calc = DomainCalculator::<C>::new(pk, messages.len() as u64);
        let q_1 = generators.step()?;
        domain_calc.update(&q_1)?;

        let mut b = C::p1();
        for msg in messages {
            let h_i = generators.step()?;
            domain_calc.update(&h_i)?;
            let msg_scalar = hash_to_scalar::<C>(msg.as_ref(), C::MAP_DST)?;
            b += h_i * msg_scalar;
        }
        let domain = domain_calc.finalize(header)?;
        b += q_1 * domain;

        // e(A, W + P2 * e) * e(B, -P2) is the identity for valid signatures
        let lhs = pk.point + G2Projective::generator() * self.e;
        if pairing_g1_g2(&[(self.a, lhs), (b, -G2Projective::generator())])
            .is_identity()
            .into()
        {
            Ok(())
        } else {
            Err(BbsError::InvalidSignature)
        }
    }

    /// Get the byte representation of this signature, `A` then `e`
    pub fn to_bytes(&self) -> [u8; SIGNATURE_BYTES] {
        let mut bytes = [0u8; SIGNATURE_BYTES];
        bytes[..G1_COMPRESSED_BYTES].copy_from_slice(&g1_to_bytes(&self.a));
        bytes[G1_COMPRESSED_BYTES..].copy_from_slice(&scalar_to_bytes(&self.e));
        bytes
    }

    /// Convert a byte representation into a signature, rejecting a
    /// malformed point, an identity `A` or an out-of-range `e`
    pub fn from_bytes(bytes: &[u8; SIGNATURE_BYTES]) -> BbsResult<Self> {
        let a = g1_from_bytes(array_ref![bytes, 0, G1_COMPRESSED_BYTES])?;
        if a.is_identity().into() {
            return Err(BbsError::DeserializationError(
                "signature point is the identity".to_string(),
            ));
        }
        let e = Option::<Scalar>::from(scalar_from_bytes(array_ref![
            bytes,
            G1_COMPRESSED_BYTES,
            SCALAR_BYTES
        ]))
        .ok_or_else(|| BbsError::DeserializationError("malformed signature scalar".to_string()))?;
        Ok(Self {
            a,
            e,
            _marker: PhantomData,
        })
    }
}

impl<C: BbsCiphersuite> Serialize for Signature<C> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        fixed_arr::BigArray::serialize(&self.to_bytes(), s)
    }
}

impl<'de, C: BbsCiphersuite> Deserialize<'de> for Signature<C> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let bytes = <[u8; SIGNATURE_BYTES] as fixed_arr::BigArray<'de>>::deserialize(d)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
