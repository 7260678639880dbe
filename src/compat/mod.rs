//! Optional interop with external serialization and UUID crates. Every
//! module here is feature-gated and adds no behavior beyond the trait impl
//! itself.

#[cfg(feature = "rkyv")]
pub mod rkyv;
#[cfg(feature = "serde")]
pub mod serde;
#[cfg(feature = "uuid-crate-compat")]
pub mod uuid_crate;
