use crate::digest::Digest;
use crate::error::{bit_length, Result};
use crate::mix::{extract_digest, mix_state, xor_block, State};
use crate::params::{Params, BLOCK_SIZE, TENTHASH};

/// hash computes the TentHash digest of `data` in one go.
///
/// Fails only with `LengthOverflow`, for inputs of `2^61` bytes or more.
pub fn hash(data: impl AsRef<[u8]>) -> Result<Digest> {
    hash_with(&TENTHASH, data.as_ref())
}

/// hash_with computes the digest of `data` under an explicit parameter set.
pub fn hash_with(params: &Params, data: &[u8]) -> Result<Digest> {
    let bitlen = bit_length(data.len() as u128)?; // number of input bits

    let mut state: State = params.initial_state();

    // A short final block is zero-padded; empty input absorbs nothing.
    for block in data.chunks(BLOCK_SIZE) {
        let mut buf = [0u8; BLOCK_SIZE];
        buf[..block.len()].copy_from_slice(block);

        xor_block(&mut state, &buf);
        mix_state(&mut state, params, params.block_rounds());
    }

    state[0] ^= bitlen;
    mix_state(&mut state, params, params.finalize_rounds());

    Ok(Digest::from(extract_digest(&state)))
}
