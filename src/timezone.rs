//! Conversion of UTC timestamps into the configured local timezone.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// The UTC offset of `canonical_timezone` at the instant `at`.
///
/// Returns `None` if `canonical_timezone` is not a known timezone name.
pub fn get_offset_at(canonical_timezone: &str, at: OffsetDateTime) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&at).to_utc())
}

/// Check that `canonical_timezone` names a known timezone, e.g. "Africa/Lagos".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] for unknown names.
pub fn validate_timezone(canonical_timezone: &str) -> Result<(), Error> {
    match time_tz::timezones::get_by_name(canonical_timezone) {
        Some(_) => Ok(()),
        None => {
            tracing::error!("Invalid timezone {canonical_timezone}");
            Err(Error::InvalidTimezoneError(canonical_timezone.to_owned()))
        }
    }
}

/// Convert `timestamp` into `canonical_timezone`, using the offset in effect
/// at that instant.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] for unknown names.
pub fn to_local(timestamp: OffsetDateTime, canonical_timezone: &str) -> Result<OffsetDateTime, Error> {
    let Some(offset) = get_offset_at(canonical_timezone, timestamp) else {
        tracing::error!("Invalid timezone {canonical_timezone}");
        return Err(Error::InvalidTimezoneError(canonical_timezone.to_owned()));
    };

    Ok(timestamp.to_offset(offset))
}
