//! Thin, flat entry points over [`crate::uuid`] and [`crate::flake`].
//!
//! Nothing here does real work: every function delegates straight to the
//! module that owns the concern (bit layout, clock, codec). This is the
//! glue layer, kept deliberately boring.

use crate::error::{InvalidNameError, UuidConstructionError};
use crate::uuid::{self, Name, UUID};

/// The nil UUID (version 0, all bits zero).
#[must_use]
pub fn v0() -> UUID {
    UUID::nil()
}

/// The max UUID (RFC 9562 §5.10, all bits set).
#[must_use]
pub fn max() -> UUID {
    UUID::max()
}

#[must_use]
pub fn v1() -> UUID {
    uuid::v1()
}

pub fn v1_at(
    time: std::time::SystemTime,
    node_id: [u8; 6],
    clock_sequence: u16,
) -> Result<UUID, UuidConstructionError> {
    uuid::v1_at(time, node_id, clock_sequence)
}

pub fn v3<'a>(namespace: UUID, name: impl Into<Name<'a>>) -> Result<UUID, InvalidNameError> {
    uuid::v3(namespace, name.into())
}

#[must_use]
pub fn v4() -> UUID {
    uuid::v4()
}

#[must_use]
pub fn v4_from(hi: u64, lo: u64) -> UUID {
    uuid::v4_from(hi, lo)
}

pub fn v5<'a>(namespace: UUID, name: impl Into<Name<'a>>) -> Result<UUID, InvalidNameError> {
    uuid::v5(namespace, name.into())
}

#[must_use]
pub fn v6() -> UUID {
    uuid::v6()
}

pub fn v6_at(
    time: std::time::SystemTime,
    node_id: [u8; 6],
    clock_sequence: u16,
) -> Result<UUID, UuidConstructionError> {
    uuid::v6_at(time, node_id, clock_sequence)
}

#[must_use]
pub fn v7() -> UUID {
    uuid::v7()
}

pub fn v7_at(unix_millis: u64, random_lo: u64) -> Result<UUID, UuidConstructionError> {
    uuid::v7_at(unix_millis, random_lo)
}

#[must_use]
pub fn v8() -> UUID {
    uuid::v8()
}

#[must_use]
pub fn v8_from(hi: u64, lo: u64) -> UUID {
    uuid::v8_from(hi, lo)
}

#[must_use]
pub fn squuid() -> UUID {
    uuid::squuid()
}
