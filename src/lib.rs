#![warn(missing_docs)]
//! A Rust implementation of TentHash, a 160-bit non-cryptographic hash
//! function.
//!
//! TentHash is meant for checksums, deduplication fingerprints and other data
//! identification where accidental collisions must not happen. It is
//! explicitly *not* meant to stand up to attacks: messages with any chosen
//! digest are trivial to build (see [`forge`]).
//!
//! The input is absorbed 256 bits at a time into a 256-bit state with an
//! add-rotate-xor permutation, the input's bit-length is mixed in, and the
//! first 160 bits of the state are the digest. Byte order is fixed to little
//! endian, so digests are identical on every platform.
//!
//! # Example
//! ```
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let digest = tenthash::hash("Hello world!")?;
//!   println!("Result: {}", digest);
//!   assert_eq!(digest.to_hex(), "155f0a357ea09ef0d46d031736a429e4c1c54a9a");
//!
//!   Ok(())
//! }
//! ```
/// `digest` is the fixed-size hash output.
pub mod digest;
/// `error` holds the crate's error type.
pub mod error;
/// `forge` builds inputs that hash to a chosen digest.
pub mod forge;
/// `mix` is the permutation and the state encode/decode helpers.
pub mod mix;
/// `params` holds the versioned constants that define the algorithm.
pub mod params;
/// `tenthash` is the one-shot hash.
pub mod tenthash;
/// `vectors` holds the regression vectors and a harness to check them.
pub mod vectors;

pub use crate::digest::Digest;
pub use crate::error::{Error, Result};
pub use crate::params::{Params, TENTHASH};
pub use crate::tenthash::hash;
