//! Thread-local CSPRNG access (C2).
//!
//! A thin wrapper over `rand`'s thread-local generator. No state lives here;
//! `rand::rng()` already hands back a lock-free, per-thread generator, so
//! there is nothing to synchronize on the hot path.

use rand::RngCore;

/// A single cryptographically-random byte.
#[must_use]
pub fn rand_u8() -> u8 {
    rand::random()
}

/// A single cryptographically-random 64-bit word.
#[must_use]
pub fn rand_u64() -> u64 {
    rand::random()
}

/// Fills `buf` with cryptographically-random bytes.
pub fn fill(buf: &mut [u8]) {
    rand::rng().fill_bytes(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_changes_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        fill(&mut a);
        fill(&mut b);
        assert_ne!(a, b, "two independently filled buffers should differ");
    }

    #[test]
    fn rand_u64_not_always_same() {
        let values: std::collections::HashSet<u64> = (0..32).map(|_| rand_u64()).collect();
        assert!(values.len() > 1, "rand_u64 should vary across calls");
    }
}
