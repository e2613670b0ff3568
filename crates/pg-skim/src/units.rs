//! Unit conversion helpers.
//!
//! Skim matrices store raw units (seconds, metres); conversion happens at
//! the call site and is never stored back.

/// Seconds → hours.
#[inline]
pub fn secs_to_hours(secs: f64) -> f64 {
    secs / 3_600.0
}

/// Metres → kilometres.
#[inline]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1_000.0
}

/// Round to 4 decimal places, the precision of the depot sub-skim.
#[inline]
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
