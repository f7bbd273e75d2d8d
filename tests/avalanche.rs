use rand::{rngs::StdRng, Rng, SeedableRng};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use tenthash::params::DIGEST_SIZE;

const DIGEST_BITS: usize = DIGEST_SIZE * 8;
const TRIALS: usize = 4000;

fn input_stream(seed: &str) -> impl XofReader {
    let mut xof = Shake256::default();
    xof.update(seed.as_bytes());
    xof.finalize_xof()
}

fn flip_counts(input_len: usize, seed: &str) -> ([u32; DIGEST_BITS], u64) {
    let mut reader = input_stream(seed);
    let mut rng = StdRng::seed_from_u64(input_len as u64);

    let mut per_bit = [0u32; DIGEST_BITS];
    let mut total = 0u64;
    let mut input = vec![0u8; input_len];

    (0..TRIALS).for_each(|_| {
        reader.read(&mut input);
        let before = tenthash::hash(&input).unwrap();

        let bit = rng.gen_range(0..input_len * 8);
        input[bit / 8] ^= 1 << (bit % 8);
        let after = tenthash::hash(&input).unwrap();

        for (i, (a, b)) in before.as_bytes().iter().zip(after.as_bytes()).enumerate() {
            let diff = a ^ b;
            total += diff.count_ones() as u64;
            for j in 0..8 {
                per_bit[i * 8 + j] += ((diff >> j) & 1) as u32;
            }
        }
    });

    (per_bit, total)
}

#[test]
fn single_bit_flips_change_half_the_output() {
    for input_len in [1, 10, 32, 33, 100] {
        let (per_bit, total) = flip_counts(input_len, "tenthash avalanche");

        let mean = total as f64 / TRIALS as f64;
        assert!(
            (76.0..84.0).contains(&mean),
            "input len {}: average of {} flipped bits, want about {}",
            input_len,
            mean,
            DIGEST_BITS / 2
        );

        for (bit, &flips) in per_bit.iter().enumerate() {
            let p = flips as f64 / TRIALS as f64;
            assert!(
                (0.4..0.6).contains(&p),
                "input len {}: output bit {} flipped with probability {}",
                input_len,
                bit,
                p
            );
        }
    }
}

#[test]
fn digest_size_is_fixed() {
    let mut reader = input_stream("tenthash sizes");
    for len in [0, 1, 19, 20, 31, 32, 33, 63, 64, 65, 1000, 6007] {
        let mut input = vec![0u8; len];
        reader.read(&mut input);
        let digest = tenthash::hash(&input).unwrap();
        assert_eq!(digest.as_bytes().len(), DIGEST_SIZE);
        assert_eq!(digest.to_hex().len(), 2 * DIGEST_SIZE);
    }
}
