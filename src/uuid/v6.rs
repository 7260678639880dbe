use std::time::SystemTime;

use super::UUID;
use crate::bits::{dpb, ldb, mask};
use crate::clock::gregorian;
use crate::error::UuidConstructionError;
use crate::identity::identity;

const VER_NIB: u64 = mask(4, 12);

fn from_ticks(ticks: u64, lsb: u64) -> UUID {
    let time_high_32 = ldb(mask(32, 28), ticks);
    let time_mid_16 = ldb(mask(16, 12), ticks);
    let time_low_12 = ldb(mask(12, 0), ticks);
    let hi = (time_high_32 << 32) | (time_mid_16 << 16) | dpb(VER_NIB, time_low_12, 6);
    UUID { hi, lo: lsb }
}

/// Generates a version-6 (reordered time-based) UUID, the RFC 9562
/// field-reordered successor to v1 that sorts lexically by time.
#[must_use]
pub fn v6() -> UUID {
    let ticks = gregorian::next();
    from_ticks(ticks, identity().v6_lsb)
}

/// Builds a version-6 UUID from an explicit timestamp, node id and clock
/// sequence.
///
/// # Errors
/// `TimestampBeforeEpoch` if `time` predates 1582-10-15; `TimestampOverflow`
/// if it is so far in the future the 60-bit tick field cannot hold it.
pub fn v6_at(
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

    #[test]
    fn generates_v6_with_correct_version_and_variant() {
        let u = v6();
        assert_eq!(u.version(), 6);
        assert_eq!(u.variant(), 0b10);
    }

    #[test]
    fn v6_sorts_by_time_lexically() {
        let ids: Vec<_> = (0..500).map(|_| v6()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "v6 ids should already be time-ordered");
    }

    #[test]
    fn v6_at_embeds_node_id() {
        let node = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
        let time = gregorian::epoch() + std::time::Duration::from_secs(500_000_000);
        let u = v6_at(time, node, 7).unwrap();
        assert_eq!(u.node_id(), 0xAABB_CCDD_EEFF);
    }
}
