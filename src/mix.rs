use byteorder::{ByteOrder, LittleEndian};

use crate::params::{Params, BLOCK_SIZE, DIGEST_SIZE};

/// The 256-bit hash state.
pub type State = [u64; 4];

/// xor_block decodes a block as four little-endian words and xors them into
/// the state.
#[inline(always)]
pub fn xor_block(state: &mut State, block: &[u8; BLOCK_SIZE]) {
    state[0] ^= LittleEndian::read_u64(&block[0..8]);
    state[1] ^= LittleEndian::read_u64(&block[8..16]);
    state[2] ^= LittleEndian::read_u64(&block[16..24]);
    state[3] ^= LittleEndian::read_u64(&block[24..32]);
}

/// mix_state applies `rounds` rounds of the add-rotate-xor permutation.
///
/// Inspired by Skein's MIX function: the two halves of the state are mixed
/// into each other, then a pair of words is swapped so the next round pairs
/// them up differently.
#[inline(always)]
pub fn mix_state(state: &mut State, params: &Params, rounds: usize) {
    let (a, b) = params.swap().indices();

    for round in 0..rounds {
        let [r0, r1] = params.rotation(round);

        state[0] = state[0].wrapping_add(state[2]);
        state[1] = state[1].wrapping_add(state[3]);
        state[2] = state[2].rotate_left(r0) ^ state[0];
        state[3] = state[3].rotate_left(r1) ^ state[1];

        state.swap(a, b);
    }
}

/// unmix_state undoes `rounds` rounds of [`mix_state`] with the same
/// parameters.
pub fn unmix_state(state: &mut State, params: &Params, rounds: usize) {
    let (a, b) = params.swap().indices();

    for round in (0..rounds).rev() {
        let [r0, r1] = params.rotation(round);

        state.swap(a, b);

        state[3] = (state[3] ^ state[1]).rotate_right(r1);
        state[2] = (state[2] ^ state[0]).rotate_right(r0);
        state[1] = state[1].wrapping_sub(state[3]);
        state[0] = state[0].wrapping_sub(state[2]);
    }
}

/// extract_digest serializes the state little-endian and keeps the first
/// DIGEST_SIZE bytes.
#[inline(always)]
pub fn extract_digest(state: &State) -> [u8; DIGEST_SIZE] {
    let mut bytes = [0u8; BLOCK_SIZE];
    LittleEndian::write_u64_into(state, &mut bytes);

    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&bytes[..DIGEST_SIZE]);
    digest
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::params::{SwapPair, TENTHASH};
    use rand::Rng;

    #[test]
    fn unmix_inverts_mix() {
        let mut rng = rand::thread_rng();
        let high_swap = TENTHASH.with_swap(SwapPair::High);

        for params in [TENTHASH, high_swap] {
            for rounds in [0, 1, 6, 7, 14, 20] {
                (0..100).for_each(|_| {
                    let original: State = rng.gen();
                    let mut state = original;

                    mix_state(&mut state, &params, rounds);
                    if rounds > 0 {
                        assert_ne!(state, original, "mix left the state unchanged");
                    }

                    unmix_state(&mut state, &params, rounds);
                    assert_eq!(state, original, "unmix did not invert {} rounds", rounds);
                });
            }
        }
    }

    #[test]
    fn zero_state_is_fixed_point() {
        // Adding, rotating and xoring zeros gives zeros, which is why the
        // initial state has to be non-zero.
        let mut state = [0u64; 4];
        mix_state(&mut state, &TENTHASH, TENTHASH.finalize_rounds());
        assert_eq!(state, [0u64; 4]);
    }

    #[test]
    fn single_round() {
        let mut state: State = [1, 2, 3, 4];
        mix_state(&mut state, &TENTHASH, 1);

        let s0 = 1u64 + 3;
        let s1 = 2u64 + 4;
        let s2 = 3u64.rotate_left(16) ^ s0;
        let s3 = 4u64.rotate_left(28) ^ s1;
        assert_eq!(state, [s1, s0, s2, s3]);
    }

    #[test]
    fn block_words_are_little_endian() {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x01;
        block[15] = 0x80;
        block[16] = 0xff;
        block[31] = 0x7f;

        let mut state = [0u64; 4];
        xor_block(&mut state, &block);
        assert_eq!(state, [0x01, 0x80 << 56, 0xff, 0x7f << 56]);

        xor_block(&mut state, &block);
        assert_eq!(state, [0u64; 4]);
    }

    #[test]
    fn digest_is_state_prefix() {
        let state: State = [
            0x0706050403020100,
            0x0f0e0d0c0b0a0908,
            0x1716151413121110,
            0x1f1e1d1c1b1a1918,
        ];
        let digest = extract_digest(&state);
        let expected: Vec<u8> = (0..DIGEST_SIZE as u8).collect();
        assert_eq!(digest.to_vec(), expected);
    }
}
