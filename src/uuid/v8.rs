use super::UUID;
use crate::bits::{dpb, mask};
use crate::random::rand_u64;

const VER_NIB: u64 = mask(4, 12);
const VARIANT_BITS: u64 = mask(2, 62);

fn stamp(hi: u64, lo: u64) -> UUID {
    UUID {
        hi: dpb(VER_NIB, hi, 8),
        lo: dpb(VARIANT_BITS, lo, 0b10),
    }
}

/// Generates a version-8 UUID with both words filled from the process
/// random source. RFC 9562 leaves the 122 non-version/variant bits
/// implementation-defined; this crate fills them with CSPRNG output.
#[must_use]
pub fn v8() -> UUID {
    stamp(rand_u64(), rand_u64())
}

/// Builds a version-8 UUID from caller-supplied 64-bit words, overwriting
/// only the version and variant bits.
#[must_use]
pub fn v8_from(hi: u64, lo: u64) -> UUID {
    stamp(hi, lo)
}
