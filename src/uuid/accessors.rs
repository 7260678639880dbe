use super::{UUID, VARIANT_BITS, VERSION_NIBBLE};
use crate::bits::{dpb, ldb, mask};

/// Gregorian-epoch 100-ns ticks to Unix milliseconds.
const fn gregorian_ticks_to_unix_ms(ticks: u64) -> i64 {
    (ticks / 10_000) as i64 - 12_219_292_800_000
}

impl UUID {
    #[must_use]
    pub const fn version(self) -> u8 {
        ldb(VERSION_NIBBLE, self.hi) as u8
    }

    /// The two top bits of `lo`. RFC 9562 variant `10` is `2`.
    #[must_use]
    pub const fn variant(self) -> u8 {
        ldb(VARIANT_BITS, self.lo) as u8
    }

    #[must_use]
    pub const fn node_id(self) -> u64 {
        ldb(mask(48, 0), self.lo)
    }

    /// The clock sequence embedded in a v1/v6 UUID, `None` otherwise.
    #[must_use]
    pub const fn clock_sequence(self) -> Option<u16> {
        match self.version() {
            1 | 6 => {
                let without_variant = dpb(VARIANT_BITS, self.lo, 0);
                Some(ldb(mask(14, 48), without_variant) as u16)
            }
            _ => None,
        }
    }

    /// Gregorian 100-ns ticks (v1/v6) or Unix milliseconds (v7). `None` for
    /// every other version.
    #[must_use]
    pub const fn timestamp(self) -> Option<u64> {
        match self.version() {
            1 => {
                let time_low = ldb(mask(32, 32), self.hi);
                let time_mid = ldb(mask(16, 16), self.hi);
                let time_high = ldb(mask(12, 0), self.hi);
                Some(time_low | (time_mid << 32) | (time_high << 48))
            }
            6 => {
                let time_high = ldb(mask(32, 32), self.hi);
                let time_mid = ldb(mask(16, 16), self.hi);
                let time_low = ldb(mask(12, 0), self.hi);
                Some((time_high << 28) | (time_mid << 12) | time_low)
            }
            7 => Some(ldb(mask(48, 16), self.hi)),
            _ => None,
        }
    }

    /// Unix milliseconds, converting from Gregorian ticks for v1/v6.
    #[must_use]
    pub const fn unix_time_ms(self) -> Option<i64> {
        match self.version() {
            1 | 6 => match self.timestamp() {
                Some(ticks) => Some(gregorian_ticks_to_unix_ms(ticks)),
                None => None,
            },
            7 => match self.timestamp() {
                Some(ms) => Some(ms as i64),
                None => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::v1::v1;

    #[test]
    fn version_and_variant_roundtrip() {
        let u = UUID::from_parts(0, 0).with_version(5).with_variant_10();
        assert_eq!(u.version(), 5);
        assert_eq!(u.variant(), 0b10);
    }

    #[test]
    fn v1_timestamp_and_unix_time_agree_with_clock_seq() {
        let u = v1();
        assert_eq!(u.version(), 1);
        assert!(u.timestamp().is_some());
        assert!(u.unix_time_ms().is_some());
        assert!(u.clock_sequence().is_some());
    }

    #[test]
    fn non_time_based_versions_have_no_timestamp() {
        let u = UUID::from_parts(0, 0).with_version(4).with_variant_10();
        assert_eq!(u.timestamp(), None);
        assert_eq!(u.unix_time_ms(), None);
        assert_eq!(u.clock_sequence(), None);
    }
}
