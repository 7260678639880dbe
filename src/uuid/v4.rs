use super::UUID;
use crate::bits::{dpb, mask};
use crate::random::rand_u64;

const VER_NIB: u64 = mask(4, 12);
const VARIANT_BITS: u64 = mask(2, 62);

fn stamp(hi: u64, lo: u64) -> UUID {
    UUID {
        hi: dpb(VER_NIB, hi, 4),
        lo: dpb(VARIANT_BITS, lo, 0b10),
    }
}

/// Generates a random version-4 UUID.
#[must_use]
pub fn v4() -> UUID {
    stamp(rand_u64(), rand_u64())
}

/// Builds a version-4 UUID from caller-supplied random 64-bit words,
/// overwriting the version and variant bits in place.
#[must_use]
pub fn v4_from(hi: u64, lo: u64) -> UUID {
    stamp(hi, lo)
}
