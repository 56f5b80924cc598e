//! Local timestamp formatting

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::{Display, Write};

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{PROPOSAL_TIME_ZONE, TIMESTAMP_PATTERN};

/// Render `instant` as wall-clock time in `zone` using a strftime `pattern`.
///
/// Fails only when `pattern` contains an unknown specifier.
pub fn format_local_timestamp<Z>(instant: DateTime<Utc>, zone: &Z, pattern: &str) -> AppResult<String>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let local = instant.with_timezone(zone);
    let mut out = String::new();
    write!(out, "{}", local.format(pattern))
        .map_err(|_| AppError::render_failed(format!("Invalid timestamp pattern {:?}", pattern)))?;
    Ok(out)
}

/// Proposal timestamp: São Paulo wall clock, `dd/MM/yyyy, HH:mm:ss`
pub fn proposal_timestamp(instant: DateTime<Utc>) -> AppResult<String> {
    format_local_timestamp(instant, &PROPOSAL_TIME_ZONE, TIMESTAMP_PATTERN)
}
