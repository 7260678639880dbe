//! Interop with the external `uuid` crate, for callers migrating between
//! the two or interfacing with libraries built against it.

use crate::uuid::UUID;

impl From<UUID> for ::uuid::Uuid {
    fn from(value: UUID) -> Self {
        Self::from_bytes(value.to_bytes())
    }
}

impl From<::uuid::Uuid> for UUID {
    fn from(value: ::uuid::Uuid) -> Self {
        Self::from_bytes(*value.as_bytes())
    }
}
