//! Seeded hashing for [`Hashable`] named values.
//!
//! Plain `Hash` already works with any hasher once a tag opts into
//! [`Hashable`]; this module adds the seeded form, so hosts that perturb
//! their hashes (per-table seeds, DoS hardening) get a stable
//! `hash(value, seed)` entry point. The hasher is FNV-1a over the standard
//! `Hash` byte stream, with the seed folded into the initial state, so equal
//! values hash equal under any fixed seed.

use core::hash::{BuildHasher, Hash, Hasher};

use crate::caps::Hashable;
use crate::named::NamedValue;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64-bit hasher with a caller-chosen seed.
#[derive(Clone, Debug)]
pub struct SeededHasher {
    state: u64,
}

impl SeededHasher {
    /// Seed 0 reproduces plain FNV-1a.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: FNV_OFFSET ^ seed,
        }
    }
}

impl Default for SeededHasher {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl Hasher for SeededHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= u64::from(b);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Hash any `Hash` value under the given seed.
#[inline]
pub fn seeded_hash<T: Hash + ?Sized>(value: &T, seed: u64) -> u64 {
    let mut hasher = SeededHasher::new(seed);
    value.hash(&mut hasher);
    hasher.finish()
}

/// `BuildHasher` over [`SeededHasher`], for keying std maps and sets with a
/// chosen seed: `HashMap::with_hasher(SeededState::new(seed))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeededState(pub u64);

impl SeededState {
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }
}

impl BuildHasher for SeededState {
    type Hasher = SeededHasher;

    #[inline]
    fn build_hasher(&self) -> SeededHasher {
        SeededHasher::new(self.0)
    }
}

impl<T, Tag> NamedValue<T, Tag>
where
    T: Hash,
    Tag: Hashable,
{
    /// Seeded hash of the held value. For any fixed seed, equal values
    /// produce equal hashes.
    #[inline]
    pub fn hash_with_seed(&self, seed: u64) -> u64 {
        seeded_hash(self.get(), seed)
    }

    /// Shorthand for [`hash_with_seed`](Self::hash_with_seed) with seed 0.
    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.hash_with_seed(0)
    }
}
