// Time unit helpers for the animation cadence

/// Nanoseconds in one millisecond
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Convert a millisecond duration into nanoseconds.
///
/// Returns `None` for non-finite, zero or negative input.
pub fn millis_to_nanos(millis: f64) -> Option<u64> {
    if !millis.is_finite() || millis <= 0.0 {
        return None;
    }
    let nanos = (millis * NANOS_PER_MILLI as f64) as u64;
    (nanos > 0).then_some(nanos)
}

/// Time elapsed between two monotonic timestamps.
/// A timestamp that goes backwards counts as no time at all.
pub fn elapsed_nanos(now: u64, since: u64) -> u64 {
    now.saturating_sub(since)
}
