//! The cipher suite implementations of the BBS signature scheme

mod sha256;
mod shake256;

pub use sha256::*;
pub use shake256::*;
