//! Monotonic 60-bit Gregorian (100-ns, 1582-10-15 epoch) clock (C4), used by
//! UUID v1/v6.

use std::sync::atomic::{AtomicU64, Ordering};

use super::wall_clock_millis;

/// 100-ns ticks between 1582-10-15 00:00:00 UTC and 1970-01-01 00:00:00 UTC.
const GREGORIAN_EPOCH_OFFSET_100NS: u64 = 100_103_040_000_000_000;

/// Milliseconds between 1970-01-01 and... kept as named in the formula it
/// participates in; see [`ticks`].
const UNIX_TO_UT_OFFSET_MS: u64 = 2_208_988_800_000;

const COUNTER_BITS: u32 = 14;
const COUNTER_MASK: u64 = (1 << COUNTER_BITS) - 1;
const COUNTER_MAX: u64 = 9999;

/// Seconds between the Gregorian epoch (1582-10-15) and the Unix epoch.
const GREGORIAN_OFFSET_SECONDS: u64 = 12_219_292_800;

static CELL: AtomicU64 = AtomicU64::new(0);

/// The Gregorian epoch expressed as a [`std::time::SystemTime`], for callers
/// building explicit-timestamp v1/v6 UUIDs.
#[must_use]
pub fn epoch() -> std::time::SystemTime {
    std::time::UNIX_EPOCH - std::time::Duration::from_secs(GREGORIAN_OFFSET_SECONDS)
}

/// Converts a duration since the Gregorian epoch into 60-bit 100-ns ticks.
///
/// # Errors
/// `TimestampOverflow` if the duration does not fit in 60 bits.
pub fn duration_to_ticks(
    duration: std::time::Duration,
) -> Result<u64, crate::error::UuidConstructionError> {
    let ticks = duration.as_nanos() / 100;
    if ticks >= (1u128 << 60) {
        return Err(crate::error::UuidConstructionError::TimestampOverflow);
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(ticks as u64)
}

/// Converts a [`std::time::SystemTime`] into 60-bit Gregorian 100-ns ticks.
///
/// # Errors
/// `TimestampBeforeEpoch` if `time` predates 1582-10-15; `TimestampOverflow`
/// if `time` is so far in the future the tick count overflows 60 bits.
pub fn system_time_to_ticks(
    time: std::time::SystemTime,
) -> Result<u64, crate::error::UuidConstructionError> {
    let duration = time
        .duration_since(epoch())
        .map_err(|_| crate::error::UuidConstructionError::TimestampBeforeEpoch)?;
    duration_to_ticks(duration)
}

const fn encode(millis: u64, counter: u64) -> u64 {
    (millis << COUNTER_BITS) | (counter & COUNTER_MASK)
}

const fn decode(packed: u64) -> (u64, u64) {
    (packed >> COUNTER_BITS, packed & COUNTER_MASK)
}

/// Returns the next 60-bit Gregorian 100-ns tick value, strictly greater
/// than any value previously returned by this process.
///
/// Spins (rather than ever returning a smaller value) if the wall clock
/// regresses or the per-millisecond counter is exhausted.
#[must_use]
pub fn next() -> u64 {
    loop {
        let now = wall_clock_millis();
        let current = CELL.load(Ordering::Acquire);
        let (cur_millis, cur_counter) = decode(current);

        let next_packed = match now.cmp(&cur_millis) {
            std::cmp::Ordering::Greater => encode(now, 0),
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
            let (millis, counter) = decode(next_packed);
            return counter
                + GREGORIAN_EPOCH_OFFSET_100NS
                + (UNIX_TO_UT_OFFSET_MS + millis) * 10_000;
        }
    }
}
