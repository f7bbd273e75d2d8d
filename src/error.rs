/// Largest input, in bytes, whose length in bits still fits the 64-bit counter.
pub const MAX_INPUT_LEN: u64 = (1 << 61) - 1;

/// Errors returned by the hash and its tooling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input's bit-length does not fit in 64 bits.
    #[error("length overflow: {len} bytes exceeds the maximum of {max} bytes", max = MAX_INPUT_LEN)]
    LengthOverflow {
        /// Length of the rejected input, in bytes.
        len: u128,
    },
    /// A parameter set breaks the structural rules of `Params::is_well_formed`.
    #[error("ill-formed parameter set")]
    InvalidParams,
    /// A digest could not be parsed from hex.
    #[error("invalid digest hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the length of a `len`-byte input in bits, or `LengthOverflow`
/// when it would not fit the 64-bit counter.
pub(crate) fn bit_length(len: u128) -> Result<u64> {
    match u64::try_from(len) {
        Ok(n) if n <= MAX_INPUT_LEN => Ok(n << 3),
        _ => Err(Error::LengthOverflow { len }),
    }
}
