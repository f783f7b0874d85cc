use crate::*;
use bls12_381_plus::{group::Group, G2Projective};
use core::marker::PhantomData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of bytes needed to represent a public key
pub const PUBLIC_KEY_BYTES: usize = G2_COMPRESSED_BYTES;

/// A BBS public key, the G2 element `W = SK * P2`.
///
/// Never the identity element; decoding enforces this along with the
/// subgroup check.
pub struct PublicKey<C: BbsCiphersuite> {
    pub(crate) point: G2Projective,
    _marker: PhantomData<C>,
}

impl<C: BbsCiphersuite> From<&SecretKey<C>> for PublicKey<C> {
    fn from(sk: &SecretKey<C>) -> Self {
        Self {
            point: G2Projective::generator() * sk.scalar,
            _marker: PhantomData,
        }
    }
}

impl<C: BbsCiphersuite> Copy for PublicKey<C> {}

impl<C: BbsCiphersuite> Clone for PublicKey<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: BbsCiphersuite> PartialEq for PublicKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<C: BbsCiphersuite> Eq for PublicKey<C> {}

impl<C: BbsCiphersuite> core::fmt::Display for PublicKey<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl<C: BbsCiphersuite> core::fmt::Debug for PublicKey<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_bytes()))
    }
}

impl<C: BbsCiphersuite> PublicKey<C> {
    /// Get the compressed byte representation of this key
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        g2_to_bytes(&self.point)
    }

    /// Convert a compressed representation into a public key
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_BYTES]) -> BbsResult<Self> {
        let point = g2_from_bytes(bytes)?;
        if point.is_identity().into() {
            return Err(BbsError::InvalidInputs(
                "public key is the identity point".to_string(),
            ));
        }
        Ok(Self {
            point,
            _marker: PhantomData,
        })
    }
}

impl<C: BbsCiphersuite> Serialize for PublicKey<C> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        fixed_arr::BigArray::serialize(&self.to_bytes(), s)
    }
}

impl<'de, C: BbsCiphersuite> Deserialize<'de> for PublicKey<C> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let bytes = <[u8; PUBLIC_KEY_BYTES] as fixed_arr::BigArray<'de>>::deserialize(d)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
