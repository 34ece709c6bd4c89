//! Time and timestamp helpers.

use chrono::DateTime;

/// Parse an RFC 3339 string into fractional epoch seconds.
///
/// Returns `None` when the input is not a valid RFC 3339 datetime.
#[must_use]
pub fn rfc3339_to_epoch(input: &str) -> Option<f64> {
    let parsed = DateTime::parse_from_rfc3339(input).ok()?.to_utc();
    #[allow(clippy::cast_precision_loss)]
    let seconds = parsed.timestamp() as f64;
    Some(seconds + f64::from(parsed.timestamp_subsec_millis()) / 1000.0)
}
