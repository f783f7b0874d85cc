use crate::*;
use bls12_381_plus::{elliptic_curve::Field, Scalar};
use core::marker::PhantomData;
use rand::Rng;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::CtOption;
use zeroize::Zeroize;

/// Number of bytes needed to represent the secret key
pub const SECRET_KEY_BYTES: usize = SCALAR_BYTES;

/// Fewest octets of key material accepted by key generation
pub const MIN_KEY_MATERIAL_BYTES: usize = 32;

/// The secret key is a field element 0 < `x` < `r` where `r` is the
/// curve order. Zeroized on drop.
pub struct SecretKey<C: BbsCiphersuite> {
    pub(crate) scalar: Scalar,
    _marker: PhantomData<C>,
}

impl<C: BbsCiphersuite> Clone for SecretKey<C> {
    fn clone(&self) -> Self {
        Self {
            scalar: self.scalar,
            _marker: PhantomData,
        }
    }
}

impl<C: BbsCiphersuite> PartialEq for SecretKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl<C: BbsCiphersuite> Eq for SecretKey<C> {}

impl<C: BbsCiphersuite> core::fmt::Debug for SecretKey<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Key material stays out of debug output
        write!(f, "SecretKey(..)")
    }
}

impl<C: BbsCiphersuite> Zeroize for SecretKey<C> {
    fn zeroize(&mut self) {
        self.scalar = Scalar::ZERO;
    }
}

impl<C: BbsCiphersuite> Drop for SecretKey<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: BbsCiphersuite> From<&SecretKey<C>> for [u8; SECRET_KEY_BYTES] {
    fn from(sk: &SecretKey<C>) -> [u8; SECRET_KEY_BYTES] {
        sk.to_bytes()
    }
}

impl<C: BbsCiphersuite> SecretKey<C> {
    /// Create a new random secret key from the operating system CSPRNG
    pub fn new() -> BbsResult<Self> {
        Self::random(get_crypto_rng())
    }

    /// Compute a secret key from a CS-PRNG
    pub fn random(mut rng: impl RngCore + CryptoRng) -> BbsResult<Self> {
        let mut ikm = rng.gen::<[u8; MIN_KEY_MATERIAL_BYTES]>();
        let sk = Self::from_key_material(&ikm, &[], None);
        ikm.zeroize();
        sk
    }

    /// Derive a secret key from key material.
    ///
    /// `key_material` must be at least [`MIN_KEY_MATERIAL_BYTES`] octets
    /// of secret entropy; `key_info` is optional public context and
    /// `key_dst` overrides the suite default key-generation tag.
    pub fn from_key_material(
        key_material: &[u8],
        key_info: &[u8],
        key_dst: Option<&[u8]>,
    ) -> BbsResult<Self> {
        if key_material.len() < MIN_KEY_MATERIAL_BYTES {
            return Err(BbsError::InvalidInputs(format!(
                "key material is {} octets, at least {} are required",
                key_material.len(),
                MIN_KEY_MATERIAL_BYTES
            )));
        }
        let key_info_len = u16::try_from(key_info.len()).map_err(|_| {
            BbsError::InvalidInputs("key info is longer than 65535 octets".to_string())
        })?;
        let dst = key_dst.unwrap_or(C::KEYGEN_DST);
        let mut hasher = ScalarHasher::<C>::new();
        hasher.update(key_material);
        hasher.update(key_info_len.to_be_bytes());
        hasher.update(key_info);
        let scalar = hasher.finalize(dst)?;
        Ok(Self {
            scalar,
            _marker: PhantomData,
        })
    }

    /// Compute the public key
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey::from(self)
    }

    /// Sign an ordered list of messages.
    ///
    /// The header is optional context bound into the signature; pass an
    /// empty slice when there is none.
    pub fn sign<B: AsRef<[u8]>>(
        &self,
        pk: &PublicKey<C>,
        header: &[u8],
        messages: &[B],
    ) -> BbsResult<Signature<C>> {
        Signature::new(self, pk, header, messages)
    }

    /// Get the big-endian byte representation of this key
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_BYTES] {
        scalar_to_bytes(&self.scalar)
    }

    /// Convert a big-endian representation of the secret key, rejecting
    /// zero and values at or above the curve order
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_BYTES]) -> CtOption<Self> {
        scalar_from_bytes(bytes).and_then(|scalar| {
            CtOption::new(
                Self {
                    scalar,
                    _marker: PhantomData,
                },
                !scalar.is_zero(),
            )
        })
    }
}

impl<C: BbsCiphersuite> Serialize for SecretKey<C> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        fixed_arr::BigArray::serialize(&self.to_bytes(), s)
    }
}

impl<'de, C: BbsCiphersuite> Deserialize<'de> for SecretKey<C> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let bytes = <[u8; SECRET_KEY_BYTES] as fixed_arr::BigArray<'de>>::deserialize(d)?;
        Option::<Self>::from(Self::from_bytes(&bytes))
            .ok_or_else(|| serde::de::Error::custom("invalid secret key"))
    }
}
