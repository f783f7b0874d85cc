use crate::*;
use bls12_381_plus::G1Projective;
use core::marker::PhantomData;

/// Deterministic stream of the G1 generators used by every BBS operation.
///
/// Yields the sequence conventionally named Q_1, H_1, H_2, ... by
/// repeatedly expanding a 48-octet seed state together with a big-endian
/// counter and hashing the result to the curve. The stream is infinite
/// and depends only on the cipher suite.
pub struct GeneratorStream<C: BbsCiphersuite> {
    v: [u8; EXPAND_LEN],
    counter: u64,
    _marker: PhantomData<C>,
}

impl<C: BbsCiphersuite> GeneratorStream<C> {
    /// Initialize the stream state from the suite generator seed
    pub fn new() -> BbsResult<Self> {
        let mut v = [0u8; EXPAND_LEN];
        let mut expander = C::Expander::default();
        expander.update(C::GENERATOR_SEED);
        expander.finalize_into(C::GENERATOR_SEED_DST, &mut v)?;
        Ok(Self {
            v,
            counter: 1,
            _marker: PhantomData,
        })
    }

    /// Derive the next generator, advancing the stream state
    pub fn step(&mut self) -> BbsResult<G1Projective> {
        let mut expander = C::Expander::default();
        expander.update(&self.v);
        expander.update(&self.counter.to_be_bytes());
        expander.finalize_into(C::GENERATOR_SEED_DST, &mut self.v)?;
        self.counter += 1;
        Ok(C::hash_to_curve(&self.v, C::GENERATOR_DST))
    }
}

impl<C: BbsCiphersuite> Iterator for GeneratorStream<C> {
    type Item = G1Projective;

    fn next(&mut self) -> Option<Self::Item> {
        // Never fails once initialized, the expansion lengths are fixed
        self.step().ok()
    }
}
