use super::UUID;
use crate::bits::{dpb, mask};
use crate::clock::unix;
use crate::error::UuidConstructionError;
use crate::random::rand_u64;

const VER_NIB: u64 = mask(4, 12);
const VARIANT_BITS: u64 = mask(2, 62);

fn from_parts(millis: u64, counter: u64, random_lo: u64) -> UUID {
    let hi = (millis << 16) | dpb(VER_NIB, counter, 7);
    let lo = dpb(VARIANT_BITS, random_lo, 0b10);
    UUID { hi, lo }
}

/// Generates a version-7 (Unix-time + random) UUID using the process-wide
/// monotonic millisecond counter.
#[must_use]
pub fn v7() -> UUID {
    let (millis, counter) = unix::next();
    from_parts(millis, counter, rand_u64())
}

/// Builds a version-7 UUID from an explicit Unix-millisecond timestamp and
/// 74 bits of caller-supplied randomness in the low word.
///
/// # Errors
/// `TimestampOverflow` if `unix_millis` does not fit in the 48-bit
/// timestamp field.
pub fn v7_at(unix_millis: u64, random_lo: u64) -> Result<UUID, UuidConstructionError> {
    if unix_millis > mask(48, 0) {
        return Err(UuidConstructionError::TimestampOverflow);
    }
    let counter = rand_u64() & mask(12, 0);
    Ok(from_parts(unix_millis, counter, random_lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_v7_with_correct_version_and_variant() {
        let u = v7();
        assert_eq!(u.version(), 7);
        assert_eq!(u.variant(), 0b10);
    }

    #[test]
    fn v7_sorts_by_time_lexically() {
        let ids: Vec<_> = (0..2000).map(|_| v7()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "v7 ids should already be time-ordered");
    }

    #[test]
    fn v7_at_rejects_oversized_timestamp() {
        assert_eq!(
            v7_at(1 << 49, 0),
            Err(UuidConstructionError::TimestampOverflow)
        );
    }

    #[test]
    fn v7_at_preserves_timestamp() {
        let u = v7_at(1_700_000_000_000, 0xDEAD_BEEF).unwrap();
        assert_eq!(u.timestamp(), Some(1_700_000_000_000));
    }
}
