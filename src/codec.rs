use crate::*;
use bls12_381_plus::{
    elliptic_curve::PrimeField,
    group::Curve,
    G1Affine, G1Projective, G2Affine, G2Projective, Scalar,
};
use subtle::CtOption;

/// Number of octets in a serialized scalar modulo the subgroup order
pub const SCALAR_BYTES: usize = 32;

/// Number of octets in a compressed G1 element
pub const G1_COMPRESSED_BYTES: usize = 48;

/// Number of octets in a compressed G2 element
pub const G2_COMPRESSED_BYTES: usize = 96;

/// Serialize a scalar as fixed-width big-endian octets
pub fn scalar_to_bytes(s: &Scalar) -> [u8; SCALAR_BYTES] {
    let mut bytes = s.to_repr();
    let ptr = bytes.as_mut();
    // Make big endian
    ptr.reverse();
    // Infallible, the repr is exactly SCALAR_BYTES wide
    <[u8; SCALAR_BYTES]>::try_from(&*ptr).unwrap()
}

/// Decode a big-endian scalar, rejecting values at or above the subgroup order
pub fn scalar_from_bytes(bytes: &[u8; SCALAR_BYTES]) -> CtOption<Scalar> {
    let mut repr = <Scalar as PrimeField>::Repr::default();
    let t = repr.as_mut();
    t.copy_from_slice(bytes);
    t.reverse();
    Scalar::from_repr(repr)
}

/// Serialize a G1 element in compressed form
pub fn g1_to_bytes(p: &G1Projective) -> [u8; G1_COMPRESSED_BYTES] {
    p.to_affine().to_compressed()
}

/// Decode a compressed G1 element, rejecting malformed octets and points
/// outside the prime-order subgroup
pub fn g1_from_bytes(bytes: &[u8; G1_COMPRESSED_BYTES]) -> BbsResult<G1Projective> {
    Option::<G1Affine>::from(G1Affine::from_compressed(bytes))
        .map(G1Projective::from)
        .ok_or_else(|| BbsError::DeserializationError("malformed G1 element".to_string()))
}

/// Serialize a G2 element in compressed form
pub fn g2_to_bytes(p: &G2Projective) -> [u8; G2_COMPRESSED_BYTES] {
    p.to_affine().to_compressed()
}

/// Decode a compressed G2 element, rejecting malformed octets and points
/// outside the prime-order subgroup
pub fn g2_from_bytes(bytes: &[u8; G2_COMPRESSED_BYTES]) -> BbsResult<G2Projective> {
    Option::<G2Affine>::from(G2Affine::from_compressed(bytes))
        .map(G2Projective::from)
        .ok_or_else(|| BbsError::DeserializationError("malformed G2 element".to_string()))
}

pub(crate) mod fixed_arr {
    use core::fmt::{self, Formatter};
    use serde::{
        de::{self, SeqAccess, Visitor},
        ser::SerializeTuple,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    pub trait BigArray<'de>: Sized {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer;
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>;
    }

    impl<'de, const N: usize> BigArray<'de> for [u8; N] {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if s.is_human_readable() {
                hex::encode(self).serialize(s)
            } else {
                let mut tupler = s.serialize_tuple(self.len())?;
                for b in self {
                    tupler.serialize_element(&b)?;
                }
                tupler.end()
            }
        }

        fn deserialize<D>(d: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            if d.is_human_readable() {
                let hex_str = <&str>::deserialize(d)?;
                let bytes = hex::decode(hex_str).map_err(de::Error::custom)?;
                let arr = <[u8; N]>::try_from(bytes.as_slice())
                    .map_err(|_| de::Error::invalid_length(bytes.len(), &"a fixed-width octet string"))?;
                return Ok(arr);
            }

            struct ArrayVisitor<const N: usize>;

            impl<'de, const N: usize> Visitor<'de> for ArrayVisitor<N> {
                type Value = [u8; N];

                fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                    write!(formatter, "an array of length {}", N)
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<[u8; N], A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut arr = [0u8; N];
                    for (i, b) in arr.iter_mut().enumerate() {
                        *b = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    }
                    Ok(arr)
                }
            }

            d.deserialize_tuple(N, ArrayVisitor)
        }
    }
}
