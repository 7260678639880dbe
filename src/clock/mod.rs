//! Lock-free monotonic clocks backing the time-ordered UUID and Flake
//! constructors.
//!
//! Each clock packs its state into a single [`std::sync::atomic::AtomicU64`]
//! and advances it with a compare-and-swap loop, rather than guarding a
//! `SystemTime` behind a mutex: no generator ever blocks on another.

pub mod gregorian;
pub mod nanoclock;
pub mod unix;

fn wall_clock_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_millis() as u64
}
