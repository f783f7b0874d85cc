use crate::*;
use bls12_381_plus::{G1Projective, Scalar};

/// Streaming calculator for the `domain` scalar binding the public key,
/// the generators, the header and the cipher suite into every operation.
///
/// The transcript absorbs, in order: PK, the message count, the L+1
/// generators (Q_1 first), the API identifier, the header length and the
/// header. Exactly L+1 generator updates must happen between
/// construction and finalization; anything else is an error.
pub struct DomainCalculator<C: BbsCiphersuite> {
    hasher: ScalarHasher<C>,
    remaining: u64,
}

impl<C: BbsCiphersuite> DomainCalculator<C> {
    /// Start a transcript over `pk` and the number of signed messages
    pub fn new(pk: &PublicKey<C>, num_messages: u64) -> Self {
        let mut hasher = ScalarHasher::new();
        hasher.update(pk.to_bytes());
        hasher.update(num_messages.to_be_bytes());
        Self {
            hasher,
            remaining: num_messages + 1,
        }
    }

    /// Absorb the next generator, Q_1 first and then H_1 .. H_L
    pub fn update(&mut self, generator: &G1Projective) -> BbsResult<()> {
        if self.remaining == 0 {
            return Err(BbsError::InvalidInputs(
                "more generators than the transcript expects".to_string(),
            ));
        }
        self.remaining -= 1;
        self.hasher.update(g1_to_bytes(generator));
        Ok(())
    }

    /// Absorb the header and produce the domain scalar
    pub fn finalize(self, header: &[u8]) -> BbsResult<Scalar> {
        if self.remaining != 0 {
            return Err(BbsError::InvalidInputs(
                "fewer generators than the transcript expects".to_string(),
            ));
        }
        let mut hasher = self.hasher;
        hasher.update(C::API_ID);
        hasher.update((header.len() as u64).to_be_bytes());
        hasher.update(header);
        hasher.finalize(C::CHALLENGE_DST)
    }
}
