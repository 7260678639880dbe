//! 192-bit time-ordered identifiers: a nanosecond timestamp plus 128 bits
//! of random entropy, with a lexically-sortable string form.

pub mod codec;

use crate::bits::{bytes_be_to_u64, hex_u64, u64_to_bytes_be};
use crate::clock::nanoclock;
use crate::random::rand_u64;

pub const FLAKE_BYTES: usize = 24;

/// A 192-bit time-ordered identifier: `(timestamp_ns, rand_hi, rand_lo)`.
///
/// Field order drives the derived [`Ord`]: comparing Flakes, their 24-byte
/// wire forms and their encoded strings all agree, since the timestamp is
/// most significant in every representation.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(C)]
pub struct Flake {
    pub timestamp_ns: u64,
    pub rand_hi: u64,
    pub rand_lo: u64,
}

impl Flake {
    /// Generates a new Flake from the current nanoclock reading and fresh
    /// entropy. Strictly increasing across calls on the same thread.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_ns: nanoclock::now_ns() as u64,
            rand_hi: rand_u64(),
            rand_lo: rand_u64(),
        }
    }

    #[must_use]
    pub const fn from_parts(timestamp_ns: u64, rand_hi: u64, rand_lo: u64) -> Self {
        Self {
            timestamp_ns,
            rand_hi,
            rand_lo,
        }
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; FLAKE_BYTES] {
        let mut out = [0u8; FLAKE_BYTES];
        out[0..8].copy_from_slice(&u64_to_bytes_be(self.timestamp_ns));
        out[8..16].copy_from_slice(&u64_to_bytes_be(self.rand_hi));
        out[16..24].copy_from_slice(&u64_to_bytes_be(self.rand_lo));
        out
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; FLAKE_BYTES]) -> Self {
        Self {
            timestamp_ns: bytes_be_to_u64(&bytes[0..8]),
            rand_hi: bytes_be_to_u64(&bytes[8..16]),
            rand_lo: bytes_be_to_u64(&bytes[16..24]),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let mut out = String::with_capacity(48);
        out.push_str(&hex_u64(self.timestamp_ns));
        out.push_str(&hex_u64(self.rand_hi));
        out.push_str(&hex_u64(self.rand_lo));
        out
    }

    #[must_use]
    pub fn to_flake_string(self) -> String {
        codec::encode(&self.to_bytes())
    }

    /// Parses a 32-character Flake string. Returns `None`, never an error,
    /// on any malformed input.
    #[must_use]
    pub fn from_string(s: &str) -> Option<Self> {
        codec::decode(s).ok().map(Self::from_bytes)
    }
}

impl std::fmt::Display for Flake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_flake_string())
    }
}

impl std::str::FromStr for Flake {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flakes_strictly_increase_within_thread() {
        let mut prev = Flake::new();
        for _ in 0..1000 {
            let cur = Flake::new();
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn bytes_roundtrip() {
        let f = Flake::from_parts(0x1122_3344_5566_7788, 0xAABB_CCDD_EEFF_0011, 0x1);
        assert_eq!(Flake::from_bytes(f.to_bytes()), f);
    }

    #[test]
    fn string_roundtrip() {
        let f = Flake::new();
        let s = f.to_flake_string();
        assert_eq!(Flake::from_string(&s), Some(f));
    }

    #[test]
    fn zero_and_max_boundaries() {
        let zero = Flake::from_parts(0, 0, 0);
        assert_eq!(zero.to_flake_string(), "-".repeat(32));

        let max = Flake::from_parts(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(max.to_flake_string(), "z".repeat(32));
    }

    #[test]
    fn order_matches_across_representations() {
        let mut flakes: Vec<Flake> = (0..500).map(|_| Flake::new()).collect();
        let sorted_by_struct = {
            let mut v = flakes.clone();
            v.sort();
            v
        };

        flakes.sort_by_key(Flake::to_flake_string);
        assert_eq!(flakes, sorted_by_struct);

        flakes.sort_by_key(Flake::to_bytes);
        assert_eq!(flakes, sorted_by_struct);
    }

    #[test]
    fn hex_form_is_48_chars() {
        assert_eq!(Flake::new().to_hex().len(), 48);
    }

    #[test]
    fn from_string_rejects_garbage() {
        assert_eq!(Flake::from_string("not a flake"), None);
        assert_eq!(Flake::from_string(""), None);
    }
}
