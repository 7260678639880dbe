use crate::random::fill;
use crate::NodeId;

impl NodeId {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    /// Generates a random [`NodeId`] with the multicast bit set, so it can
    /// never collide with a real IEEE 802 MAC address (RFC 9562 §6.10).
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 6];
        fill(&mut bytes);
        bytes[0] |= 0x01;
        Self { bytes }
    }
}
