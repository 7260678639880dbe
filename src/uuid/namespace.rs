use super::UUID;

/// RFC 9562 Appendix C predefined namespaces for v3/v5 name-based UUIDs.
pub const NAMESPACE_DNS: UUID = UUID {
    hi: 0x6ba7_b810_9dad_11d1,
    lo: 0x80b4_00c0_4fd4_30c8,
};

pub const NAMESPACE_URL: UUID = UUID {
    hi: 0x6ba7_b811_9dad_11d1,
    lo: 0x80b4_00c0_4fd4_30c8,
};

pub const NAMESPACE_OID: UUID = UUID {
    hi: 0x6ba7_b812_9dad_11d1,
    lo: 0x80b4_00c0_4fd4_30c8,
};

pub const NAMESPACE_X500: UUID = UUID {
    hi: 0x6ba7_b814_9dad_11d1,
    lo: 0x80b4_00c0_4fd4_30c8,
};
