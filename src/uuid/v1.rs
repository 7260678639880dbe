use std::time::SystemTime;

use super::UUID;
use crate::bits::{dpb, ldb, mask};
use crate::clock::gregorian;
use crate::error::UuidConstructionError;
use crate::identity::identity;

const VER_NIB: u64 = mask(4, 12);

fn from_ticks(ticks: u64, lsb: u64) -> UUID {
    let time_low = ldb(mask(32, 0), ticks);
    let time_mid = ldb(mask(16, 32), ticks);
    let time_high_12 = ldb(mask(12, 48), ticks);
    let hi = dpb(
        VER_NIB,
        (time_low << 32) | (time_mid << 16) | time_high_12,
        1,
    );
    UUID { hi, lo: lsb }
}

/// Generates a version-1 (Gregorian time + node id) UUID using the
/// process-wide monotonic clock and node identity.
#[must_use]
pub fn v1() -> UUID {
    let ticks = gregorian::next();
    from_ticks(ticks, identity().v1_lsb)
}

/// Builds a version-1 UUID from an explicit timestamp, node id and clock
/// sequence, for deterministic or historical UUIDs.
///
/// # Errors
/// `TimestampBeforeEpoch` if `time` predates 1582-10-15; `TimestampOverflow`
/// if it is so far in the future the 60-bit tick field cannot hold it.
pub fn v1_at(
    time: SystemTime,
    node_id: [u8; 6],
    clock_sequence: u16,
) -> Result<UUID, UuidConstructionError> {
    let ticks = gregorian::system_time_to_ticks(time)?;
    let node = crate::node_id::NodeId::from_bytes(node_id);
    let clk_low = u64::from(clock_sequence & 0xFF);
    let clk_hi = dpb(mask(2, 6), u64::from((clock_sequence >> 8) & 0x3F), 0b10);
    let lsb = dpb(mask(8, 56), dpb(mask(8, 48), node.as_u64(), clk_low), clk_hi);
    Ok(from_ticks(ticks, lsb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn generates_v1_with_correct_version_and_variant() {
        let u = v1();
        assert_eq!(u.version(), 1);
        assert_eq!(u.variant(), 0b10);
    }

    #[test]
    fn successive_v1_ids_are_unique() {
        let ids: Vec<_> = (0..2000).map(|_| v1()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn v1_at_rejects_pre_gregorian_time() {
        let before = gregorian::epoch() - Duration::from_secs(1);
        assert_eq!(
            v1_at(before, [0; 6], 1),
            Err(UuidConstructionError::TimestampBeforeEpoch)
        );
    }

    #[test]
    fn v1_at_is_deterministic_and_embeds_node_id() {
        let node = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
        let time = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let u = v1_at(time, node, 0x1234).unwrap();
        assert_eq!(u.node_id(), 0x1122_3344_5566);
        assert_eq!(u.version(), 1);
        assert_eq!(u.variant(), 0b10);
    }
}
