//! Process-wide node identity, used by UUID v1 and v6 (RFC 9562 §5.1, §5.6).

use once_cell::sync::Lazy;

use crate::bits::{dpb, mask};
use crate::helpers::Md5;
use crate::node_id::NodeId;
use crate::random::{rand_u64, rand_u8};

/// Everything derived once per process and reused by every v1/v6 UUID.
pub struct NodeIdentity {
    pub node_id: NodeId,
    pub clock_sequence: u16,
    /// Precomposed clock-seq + node 64-bit low word for v1, real node id.
    pub v1_lsb: u64,
    /// Precomposed clock-seq + node 64-bit low word for v6, substitute node id.
    pub v6_lsb: u64,
}

static IDENTITY: Lazy<NodeIdentity> = Lazy::new(NodeIdentity::derive);

/// Returns the process-wide node identity, deriving it on first access.
#[must_use]
pub fn identity() -> &'static NodeIdentity {
    &IDENTITY
}

fn lsb_for(node: NodeId, clock_sequence: u16) -> u64 {
    let clk_low = u64::from(clock_sequence & 0xFF);
    let clk_hi = u64::from((clock_sequence >> 8) & 0x3F);
    let clk_hi_with_variant = dpb(mask(2, 6), clk_hi, 0b10);

    let lsb = dpb(mask(8, 48), node.as_u64(), clk_low);
    dpb(mask(8, 56), lsb, clk_hi_with_variant)
}

impl NodeIdentity {
    fn derive() -> Self {
        let node_id = derive_node_id();
        let clock_sequence = derive_clock_sequence();
        let v6_node = NodeId::random();

        Self {
            node_id,
            clock_sequence,
            v1_lsb: lsb_for(node_id, clock_sequence),
            v6_lsb: lsb_for(v6_node, clock_sequence),
        }
    }
}

fn derive_clock_sequence() -> u16 {
    let mut seq = (rand_u64() & 0xFFFF) as u16;
    if seq == 0 {
        seq = u16::from(rand_u8()) + 1;
    }
    seq
}

#[cfg(feature = "mac-address")]
fn host_fingerprint() -> Option<Vec<u8>> {
    let mac = mac_address::get_mac_address().ok().flatten()?;
    Some(mac.bytes().to_vec())
}

#[cfg(not(feature = "mac-address"))]
fn host_fingerprint() -> Option<Vec<u8>> {
    None
}

fn derive_node_id() -> NodeId {
    let Some(mut fingerprint) = host_fingerprint() else {
        return NodeId::random();
    };

    let hostname = std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_default();

    fingerprint.extend_from_slice(hostname.as_bytes());
    fingerprint.extend_from_slice(std::env::consts::OS.as_bytes());
    fingerprint.extend_from_slice(std::env::consts::ARCH.as_bytes());
    fingerprint.extend_from_slice(&std::process::id().to_be_bytes());

    let digest = Md5::digest(&fingerprint);
    let mut bytes = [0u8; 6];
    bytes.copy_from_slice(&digest[..6]);
    bytes[0] |= 0x01;

    NodeId::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_stable_across_calls() {
        let a = identity();
        let b = identity();
        assert_eq!(a.node_id, b.node_id);
        assert_eq!(a.clock_sequence, b.clock_sequence);
        assert_eq!(a.v1_lsb, b.v1_lsb);
        assert_eq!(a.v6_lsb, b.v6_lsb);
    }

    #[test]
    fn node_id_has_multicast_bit() {
        assert_eq!(identity().node_id.bytes[0] & 0x01, 0x01);
    }

    #[test]
    fn clock_sequence_is_nonzero() {
        assert_ne!(identity().clock_sequence, 0);
    }

    #[test]
    fn lsb_embeds_variant_bits() {
        let top2 = identity().v1_lsb >> 62;
        assert_eq!(top2, 0b10);
        let top2_v6 = identity().v6_lsb >> 62;
        assert_eq!(top2_v6, 0b10);
    }

    #[test]
    fn v1_and_v6_lsb_differ_in_node_bits() {
        let node_mask = mask(48, 0);
        assert_ne!(
            identity().v1_lsb & node_mask,
            identity().v6_lsb & node_mask
        );
    }
}
