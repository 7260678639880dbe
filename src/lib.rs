mod bits;
mod clock;
mod compat;
mod error;
mod facade;
mod flake;
mod helpers;
mod identity;
mod node_id;
mod random;
mod uuid;

pub use error::{InvalidNameError, UuidConstructionError, UuidParseError};
pub use facade::{max, squuid, v0, v1, v1_at, v3, v4, v4_from, v5, v6, v6_at, v7, v7_at, v8, v8_from};
pub use flake::Flake;
pub use node_id::{NodeId, NODE_ID_BYTES};
pub use uuid::{Name, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500, UUID, UUID_BYTES};
