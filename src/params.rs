use crate::error::{Error, Result};

/// Digest size, in bytes.
pub const DIGEST_SIZE: usize = 160 / 8;

/// Block size, in bytes, of the absorption step.
pub const BLOCK_SIZE: usize = 256 / 8;

/// Which pair of state words is exchanged at the end of every mix round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPair {
    /// Words 0 and 1.
    Low,
    /// Words 2 and 3.
    High,
}

impl SwapPair {
    /// Indices of the two swapped words.
    pub const fn indices(self) -> (usize, usize) {
        match self {
            SwapPair::Low => (0, 1),
            SwapPair::High => (2, 3),
        }
    }
}

/// A complete parameter set. Any change to any field gives a different,
/// incompatible hash function, so sets are versioned constants and never
/// built at runtime.
///
/// Fields are private: every set goes through [`Params::new`] or
/// [`Params::try_new`], so an ill-formed set cannot reach the permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    initial_state: [u64; 4],
    rotations: &'static [[u32; 2]],
    block_rounds: usize,
    finalize_rounds: usize,
    swap: SwapPair,
}

/// The pinned TentHash parameter set.
///
/// The rotation table is consumed exactly once per block; finalization runs
/// it twice.
pub const TENTHASH: Params = Params::new(
    [
        0x5d6daffc4411a967,
        0xe22d4dea68577f34,
        0xca50864d814cbc2e,
        0x894e29b9611eb173,
    ],
    &[
        [16, 28],
        [14, 57],
        [11, 22],
        [35, 34],
        [57, 16],
        [59, 40],
        [44, 13],
    ],
    7,
    14,
    SwapPair::Low,
);

impl Params {
    /// Builds a parameter set, panicking if it is not well formed. Used in
    /// `const` items the check happens at compile time.
    pub const fn new(
        initial_state: [u64; 4],
        rotations: &'static [[u32; 2]],
        block_rounds: usize,
        finalize_rounds: usize,
        swap: SwapPair,
    ) -> Self {
        let p = Params {
            initial_state,
            rotations,
            block_rounds,
            finalize_rounds,
            swap,
        };
        assert!(p.is_well_formed(), "ill-formed parameter set");
        p
    }

    /// Builds a parameter set, returning `InvalidParams` if it is not well
    /// formed.
    pub fn try_new(
        initial_state: [u64; 4],
        rotations: &'static [[u32; 2]],
        block_rounds: usize,
        finalize_rounds: usize,
        swap: SwapPair,
    ) -> Result<Self> {
        let p = Params {
            initial_state,
            rotations,
            block_rounds,
            finalize_rounds,
            swap,
        };
        if !p.is_well_formed() {
            return Err(Error::InvalidParams);
        }
        Ok(p)
    }

    /// The same set with a different swapped word pair.
    pub const fn with_swap(self, swap: SwapPair) -> Self {
        Params { swap, ..self }
    }

    /// Checks the structural constraints every parameter set must meet:
    /// rotations in `1..=63`, at least one block round, and finalization
    /// running at least twice as many rounds as a block.
    ///
    /// This says nothing about diffusion quality, which is only established
    /// empirically for the pinned set.
    pub const fn is_well_formed(&self) -> bool {
        if self.rotations.is_empty() || self.block_rounds == 0 {
            return false;
        }
        if self.finalize_rounds < 2 * self.block_rounds {
            return false;
        }
        let mut i = 0;
        while i < self.rotations.len() {
            let [r0, r1] = self.rotations[i];
            if r0 == 0 || r0 >= 64 || r1 == 0 || r1 >= 64 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// State the hash starts from.
    pub const fn initial_state(&self) -> [u64; 4] {
        self.initial_state
    }

    /// Per-round rotation pairs, cycled by round index.
    pub const fn rotations(&self) -> &'static [[u32; 2]] {
        self.rotations
    }

    /// Mix rounds after each absorbed block.
    pub const fn block_rounds(&self) -> usize {
        self.block_rounds
    }

    /// Mix rounds after the length is injected.
    pub const fn finalize_rounds(&self) -> usize {
        self.finalize_rounds
    }

    /// Words exchanged at the end of every round.
    pub const fn swap(&self) -> SwapPair {
        self.swap
    }

    /// Rotation pair used by round `round`.
    #[inline(always)]
    pub fn rotation(&self, round: usize) -> [u32; 2] {
        self.rotations[round % self.rotations.len()]
    }
}
