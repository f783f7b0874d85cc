/// The errors produced by BBS operations
#[derive(Debug, thiserror::Error)]
pub enum BbsError {
    /// Arguments outside their allowed shape, such as disclosed indexes
    /// that are out of range or a domain-separation tag over 255 octets
    #[error("invalid inputs: {0}")]
    InvalidInputs(String),
    /// Octets that do not decode to a scalar or a group element
    #[error("deserialization error: {0}")]
    DeserializationError(String),
    /// A failure while computing a signature or a proof
    #[error("signing error: {0}")]
    SigningError(String),
    /// The signature did not verify
    #[error("invalid signature")]
    InvalidSignature,
    /// The proof did not verify
    #[error("invalid proof")]
    InvalidProof,
    /// The operating system could not supply random octets
    #[error("random number generation failed")]
    RandomGenerationError,
}

/// Results returned by BBS operations
pub type BbsResult<T> = Result<T, BbsError>;
