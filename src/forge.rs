//! Builds inputs that hash to a chosen digest.
//!
//! The permutation is invertible and the input is simply xored into the
//! state, so the whole hash can be run backwards from any target. This is
//! the reason TentHash must never be used where inputs may be adversarial.

use byteorder::{ByteOrder, LittleEndian};

use crate::digest::Digest;
use crate::error::{bit_length, Result};
use crate::mix::{unmix_state, xor_block, State};
use crate::params::{Params, BLOCK_SIZE};

/// forge_message returns a message that hashes to `target` under `params`.
///
/// The message is one computed block followed by `payload`, which can be
/// anything. `free_word` fills the state bits the digest truncates away;
/// each value gives a different message for the same target and payload.
pub fn forge_message(
    params: &Params,
    target: &Digest,
    free_word: u64,
    payload: &[[u8; BLOCK_SIZE]],
) -> Result<Vec<u8>> {
    let message_len = (payload.len() as u128 + 1) * BLOCK_SIZE as u128;
    let bitlen = bit_length(message_len)?;

    // Only the low half of word 2 reaches the digest.
    let t = target.as_bytes();
    let mut state: State = [
        LittleEndian::read_u64(&t[0..8]),
        LittleEndian::read_u64(&t[8..16]),
        LittleEndian::read_u32(&t[16..20]) as u64,
        free_word,
    ];

    unmix_state(&mut state, params, params.finalize_rounds());
    state[0] ^= bitlen;

    for block in payload.iter().rev() {
        unmix_state(&mut state, params, params.block_rounds());
        xor_block(&mut state, block);
    }

    unmix_state(&mut state, params, params.block_rounds());
    for (word, init) in state.iter_mut().zip(params.initial_state()) {
        *word ^= init;
    }

    let mut message = vec![0u8; BLOCK_SIZE];
    LittleEndian::write_u64_into(&state, &mut message);
    payload.iter().for_each(|block| message.extend_from_slice(block));

    Ok(message)
}
