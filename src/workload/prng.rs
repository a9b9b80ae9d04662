/*!
 * Xoshiro256++
 *
 * Blackman and Vigna, "Scrambled Linear Pseudorandom Number Generators", 2018.
 * Public domain reference: https://prng.di.unimi.it/
 */

/// Xoshiro256++ generator with a caller-supplied 256-bit state
///
/// Not cryptographically secure. Used to derive reproducible synthetic logins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    state: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Generator starting from an explicit state
    ///
    /// An all-zero state only ever yields zeros.
    #[inline]
    pub const fn from_state(state: [u64; 4]) -> Self {
        Self { state }
    }

    /// Generator seeded with `[seed, 0, 0, 0]`
    #[inline]
    pub const fn from_seed(seed: u64) -> Self {
        Self::from_state([seed, 0, 0, 0])
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }

    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.state
    }
}

impl Iterator for Xoshiro256PlusPlus {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }
}
