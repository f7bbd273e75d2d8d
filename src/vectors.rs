use tracing::{debug, warn};

use crate::digest::Digest;
use crate::error::Result;
use crate::params::Params;
use crate::tenthash::hash_with;

/// A named input and the digest it must hash to.
#[derive(Debug, Clone, Copy)]
pub struct TestVector {
    /// Short label for reports.
    pub name: &'static str,
    /// Bytes to hash.
    pub input: &'static [u8],
    /// Expected digest, as hex.
    pub digest: &'static str,
}

/// Regression vectors for the pinned parameter set.
pub static TEST_VECTORS: &[TestVector] = &[
    TestVector {
        name: "empty",
        input: b"",
        digest: "68c8213b7a76b8ed267dddb3d8717bb3b6e7cc0a",
    },
    TestVector {
        name: "zero byte",
        input: &[0],
        digest: "3cf6833cca9c4d5e211318577bab74bf12a4f090",
    },
    TestVector {
        name: "digits",
        input: b"0123456789",
        digest: "a7d324bde0bf6ce3427701628f0f8fc329c2a116",
    },
    TestVector {
        name: "alphabet",
        input: b"abcdefghijklmnopqrstuvwxyz",
        digest: "f1be4be1a0f9eae6500fb2f6b64f3daa3990ac1a",
    },
    TestVector {
        name: "quick brown fox",
        input: b"The quick brown fox jumps over the lazy dog.",
        digest: "de77f1c134228be1b5b25c941d5102f87f3e6d39",
    },
    TestVector {
        name: "hello world",
        input: b"Hello world!",
        digest: "155f0a357ea09ef0d46d031736a429e4c1c54a9a",
    },
    TestVector {
        name: "lorem ipsum",
        input: b"Lorem ipsum dolor sit amet, consectetur adipisicing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
        digest: "53da1e3920a9e5743065f28acaa2a93c51389b3d",
    },
];

/// Result of checking one vector.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Name of the vector.
    pub name: &'static str,
    /// Digest the vector expects.
    pub expected: Digest,
    /// Digest actually produced.
    pub actual: Digest,
}

impl Outcome {
    /// Whether the produced digest matched.
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// verify hashes every vector under `params` and reports each outcome.
///
/// Fails only if a vector's expected digest is not valid hex.
pub fn verify(params: &Params, vectors: &[TestVector]) -> Result<Vec<Outcome>> {
    vectors
        .iter()
        .map(|v| {
            let expected = Digest::from_hex(v.digest)?;
            let actual = hash_with(params, v.input)?;
            let outcome = Outcome {
                name: v.name,
                expected,
                actual,
            };

            if outcome.passed() {
                debug!(vector = v.name, len = v.input.len(), "test vector passed");
            } else {
                warn!(vector = v.name, %expected, %actual, "test vector failed");
            }
            Ok(outcome)
        })
        .collect()
}
