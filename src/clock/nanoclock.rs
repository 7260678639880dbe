//! Nanosecond-resolution clock (C6), anchored once and advanced via
//! [`std::time::Instant`] rather than re-reading the wall clock.
//!
//! Not strictly monotonic across process restarts (the wall-clock anchor is
//! sampled once, so a correction to the system clock after start-up is
//! never observed), but strictly monotonic within a process, since
//! `Instant` itself guarantees that.

use std::time::Instant;

use once_cell::sync::Lazy;

use super::wall_clock_millis;

struct Anchor {
    wall_start_ns: u128,
    mono_start: Instant,
}

static ANCHOR: Lazy<Anchor> = Lazy::new(|| Anchor {
    wall_start_ns: u128::from(wall_clock_millis()) * 1_000_000,
    mono_start: Instant::now(),
});

/// Returns the current time in nanoseconds since the Unix epoch, derived
/// from a one-time wall-clock anchor advanced by a monotonic instant delta.
#[must_use]
pub fn now_ns() -> u128 {
    let anchor = &*ANCHOR;
    anchor.wall_start_ns + anchor.mono_start.elapsed().as_nanos()
}

#[cfg(test)]
mod tests {
    use super::now_ns;

    #[test]
    fn strictly_increasing_within_thread() {
        let mut prev = now_ns();
        for _ in 0..1000 {
            let cur = now_ns();
            assert!(cur >= prev);
            prev = cur;
        }
    }

    #[test]
    fn roughly_tracks_wall_clock() {
        use std::time::{SystemTime, UNIX_EPOCH};

        let ns = now_ns();
        let wall_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let delta = wall_ns.abs_diff(ns);
        assert!(delta < 1_000_000_000, "nanoclock drifted more than 1s");
    }
}
