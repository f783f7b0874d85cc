use crate::*;
use bls12_381_plus::{elliptic_curve::Field, Scalar};

/// Number of octets drawn from expand_message when deriving one scalar
pub const EXPAND_LEN: usize = 48;

/// Streaming form of the `hash_to_scalar` operation.
///
/// Wraps the suite expander, targets [`EXPAND_LEN`] output octets and
/// reduces them big-endian modulo the subgroup order. A zero result is an
/// error; the chance is negligible and callers must not mask it.
pub struct ScalarHasher<C: BbsCiphersuite> {
    expander: C::Expander,
}

impl<C: BbsCiphersuite> Default for ScalarHasher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BbsCiphersuite> ScalarHasher<C> {
    /// Start a new hash_to_scalar transcript
    pub fn new() -> Self {
        Self {
            expander: C::Expander::default(),
        }
    }

    /// Absorb the next chunk of input. Output is independent of how the
    /// input is split into chunks.
    pub fn update<B: AsRef<[u8]>>(&mut self, data: B) {
        self.expander.update(data.as_ref());
    }

    /// Finalize the transcript under `dst` and return the scalar
    pub fn finalize(self, dst: &[u8]) -> BbsResult<Scalar> {
        let mut okm = [0u8; EXPAND_LEN];
        self.expander.finalize_into(dst, &mut okm)?;
        let s = Scalar::from_okm(&okm);
        if s.is_zero().into() {
            return Err(BbsError::InvalidInputs(
                "input hashed to the zero scalar".to_string(),
            ));
        }
        Ok(s)
    }
}

/// One-shot `hash_to_scalar` over a single message
pub fn hash_to_scalar<C: BbsCiphersuite>(msg: &[u8], dst: &[u8]) -> BbsResult<Scalar> {
    let mut hasher = ScalarHasher::<C>::new();
    hasher.update(msg);
    hasher.finalize(dst)
}
