//! This crate implements BBS signatures according to the IETF draft
//! on the BLS12-381 curve.
//!
//! BBS signs an ordered list of messages with one short signature and
//! supports zero-knowledge proofs of possession of a signature that
//! disclose only a chosen subset of the signed messages.
//!
//! Two cipher suites are provided and may be used side by side:
//! [`Bls12381Sha256`] (expand_message_xmd with SHA-256) and
//! [`Bls12381Shake256`] (expand_message_xof with SHAKE-256). Every
//! operation is generic over the suite.
#![deny(unsafe_code)]
#![warn(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod helpers;

use helpers::*;

mod ciphersuite;
mod codec;
mod domain;
mod error;
mod expand_message;
mod generators;
mod hash_to_scalar;
mod impls;
mod proof;
mod public_key;
mod secret_key;
mod signature;

pub use ciphersuite::*;
pub use codec::*;
pub use domain::*;
pub use error::*;
pub use expand_message::*;
pub use generators::*;
pub use hash_to_scalar::*;
pub use impls::*;
pub use proof::*;
pub use public_key::*;
pub use secret_key::*;
pub use signature::*;

pub use bls12_381_plus;
