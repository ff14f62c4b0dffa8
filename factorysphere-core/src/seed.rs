//! Identity hashing and the deterministic draw stream behind every mock value.
//!
//! The hash is 32-bit FNV-1a over the identity string and the stream is a
//! Mulberry32-style mixer. Both are pinned exactly (wrapping u32 arithmetic,
//! IEEE f64 division by 2^32) so that the same identity produces the same
//! values across calls, restarts and language ports.

use crate::numbers::{floor_f64_to_u32, floor_f64_to_usize, usize_to_f64};

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Mulberry32 increment constant.
const GAMMA: u32 = 0x6d2b_79f5;

/// Hash an identity string to a 32-bit seed with FNV-1a.
///
/// Order-sensitive by construction. The empty string hashes to the FNV
/// offset basis, which serves as the default seed for missing identities.
#[must_use]
pub fn hash_identity(identity: &str) -> u32 {
    let mut hash = FNV_OFFSET;
    for ch in identity.chars() {
        hash ^= ch as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Stateful deterministic stream of floats in `[0, 1)`.
///
/// Draw order matters: every consumer draws in a fixed, documented order so
/// that outputs stay reproducible.
#[derive(Debug, Clone)]
pub struct SeededStream {
    t: u32,
}

impl SeededStream {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            t: seed.wrapping_add(GAMMA),
        }
    }

    /// Stream seeded from the FNV-1a hash of an identity string.
    #[must_use]
    pub fn for_identity(identity: &str) -> Self {
        Self::new(hash_identity(identity))
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.t = self.t.wrapping_add(GAMMA);
        let t = self.t;
        let mut x = (t ^ (t >> 15)).wrapping_mul(1 | t);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(61 | x));
        f64::from(x ^ (x >> 14)) / 4_294_967_296.0
    }

    /// One draw scaled to `[0, n)`.
    pub fn int_below(&mut self, n: u32) -> u32 {
        floor_f64_to_u32(self.next_f64() * f64::from(n))
    }

    /// One draw scaled to `[lo, hi)`.
    pub fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo < hi);
        lo + self.int_below(hi - lo)
    }

    /// One draw used as an index into a slice of the given length.
    pub fn index_below(&mut self, len: usize) -> usize {
        floor_f64_to_usize(self.next_f64() * usize_to_f64(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_order_sensitive() {
        assert_ne!(hash_identity("AB"), hash_identity("BA"));
    }

    #[test]
    fn empty_identity_degrades_to_offset_basis() {
        assert_eq!(hash_identity(""), 2_166_136_261);
    }

    #[test]
    fn known_identities_hash_stable() {
        assert_eq!(hash_identity("ST-101::A"), 1_161_049_986);
        assert_eq!(hash_identity("WINDSHIELD"), 1_898_165_366);
        assert_eq!(hash_identity("DT FRT"), 1_300_288_077);
    }

    #[test]
    fn stream_produces_pinned_sequence() {
        let mut stream = SeededStream::new(123_456_789);
        let draws = [stream.next_f64(), stream.next_f64(), stream.next_f64()];
        assert!((draws[0] - 0.970_772_111_555_561_4).abs() < 1e-15);
        assert!((draws[1] - 0.785_328_014_288_097_6).abs() < 1e-15);
        assert!((draws[2] - 0.206_164_579_838_514_33).abs() < 1e-15);
    }

    #[test]
    fn equal_seeds_yield_equal_streams() {
        let mut a = SeededStream::for_identity("DT FRT");
        let mut b = SeededStream::for_identity("DT FRT");
        for _ in 0..64 {
            assert!((a.next_f64() - b.next_f64()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut stream = SeededStream::for_identity("");
        for _ in 0..1_000 {
            let x = stream.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn scaled_draws_respect_bounds() {
        let mut stream = SeededStream::new(42);
        for _ in 0..200 {
            let v = stream.int_in(20, 200);
            assert!((20..200).contains(&v));
        }
        let mut stream = SeededStream::new(42);
        for _ in 0..200 {
            assert!(stream.int_below(14) < 14);
        }
    }
}
