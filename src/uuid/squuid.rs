use super::v4::v4;
use super::UUID;
use crate::bits::{dpb, mask};

/// Generates a SQUUID: a version-4 UUID with the upper 32 bits of `hi`
/// overlaid with the current POSIX seconds, so values remain index-friendly
/// while keeping the random entropy of v4. Non-standard; not in RFC 9562.
#[must_use]
pub fn squuid() -> UUID {
    let now_secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_secs();

    let base = v4();
    UUID {
        hi: dpb(mask(32, 32), base.hi, now_secs & mask(32, 0)),
        lo: base.lo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squuid_keeps_v4_version_and_variant() {
        let u = squuid();
        assert_eq!(u.version(), 4);
        assert_eq!(u.variant(), 0b10);
    }

    #[test]
    fn squuid_upper_bits_track_posix_seconds() {
        let now_secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let u = squuid();
        let embedded = u.hi >> 32;
        assert!((embedded as i64 - now_secs as i64).abs() <= 2);
    }

    #[test]
    fn successive_squuids_are_unique() {
        let ids: Vec<_> = (0..500).map(|_| squuid()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }
}
