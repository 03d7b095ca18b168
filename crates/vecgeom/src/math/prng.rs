// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Uniform random sampling: seedable [`Prng`] and the thread-RNG backed
//! [`random_range`].

use rand::Rng;

/// Seedable `xoroshiro128+` generator for reproducible sampling.
///
/// * Not cryptographically secure.
/// * Matching seeds yield identical sequences on every platform.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds. An all-zero state is replaced
    /// with a fixed non-zero constant since xoroshiro never leaves zero.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let s0 = splitmix64(&mut sm_state);
        let s1 = splitmix64(&mut sm_state);
        Self::from_seed(s0, s1)
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// The high 52 bits fill the mantissa of a float in `[1, 2)`, which is
    /// then shifted down by one.
    pub fn next_f64(&mut self) -> f64 {
        let raw = self.next_u64();
        let bits = (raw >> 12) | 0x3ff0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Returns `next * (max - min) + min`, a value in `[min, max)`.
    ///
    /// Bounds are not reordered; `min > max` samples `(max, min]`.
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }
}

/// Uniform value in `[min, max)` drawn from [`rand::thread_rng`], computed
/// as `next * (max - min) + min`.
///
/// Use [`Prng::random_range`] with an explicit seed for reproducible
/// sequences.
pub fn random_range(min: f64, max: f64) -> f64 {
    rand::thread_rng().gen::<f64>() * (max - min) + min
}
