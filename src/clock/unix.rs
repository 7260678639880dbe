//! Monotonic Unix-millisecond clock + counter (C5), used by UUID v7.

use std::sync::atomic::{AtomicU64, Ordering};

use super::wall_clock_millis;
use crate::random::rand_u64;

const COUNTER_BITS: u32 = 12;
const COUNTER_MASK: u64 = (1 << COUNTER_BITS) - 1;
const COUNTER_MAX: u64 = 0xFFF;

static CELL: AtomicU64 = AtomicU64::new(0);

const fn encode(millis: u64, counter: u64) -> u64 {
    (millis << COUNTER_BITS) | (counter & COUNTER_MASK)
}

const fn decode(packed: u64) -> (u64, u64) {
    (packed >> COUNTER_BITS, packed & COUNTER_MASK)
}

fn random_counter_seed() -> u64 {
    rand_u64() & COUNTER_MASK
}

/// Returns the next `(millis, counter)` pair for UUID v7, strictly greater
/// (lexicographically) than any pair previously returned by this process.
///
/// On a new millisecond the counter is reseeded with a random value rather
/// than zero, to give cross-process ordering some per-millisecond salt.
#[must_use]
pub fn next() -> (u64, u64) {
    loop {
        let now = wall_clock_millis();
        let current = CELL.load(Ordering::Acquire);
        let (cur_millis, cur_counter) = decode(current);

        let next_packed = match now.cmp(&cur_millis) {
            std::cmp::Ordering::Greater => encode(now, random_counter_seed()),
            std::cmp::Ordering::Less => continue,
            std::cmp::Ordering::Equal => {
                let c = cur_counter + 1;
                if c > COUNTER_MAX {
                    continue;
                }
                encode(cur_millis, c)
            }
        };

        if CELL
            .compare_exchange_weak(current, next_packed, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            return decode(next_packed);
        }
    }
}
