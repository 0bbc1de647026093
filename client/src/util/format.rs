//! Display formatting for counters and session details.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Group digits in threes: `1250000` -> `"1,250,000"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human label for how long a session has left, relative to `now`.
#[must_use]
pub fn session_remaining(expiry: OffsetDateTime, now: OffsetDateTime) -> String {
    let remaining = expiry - now;
    if remaining.is_negative() || remaining.is_zero() {
        return "Session expired".to_owned();
    }
    let minutes = remaining.whole_minutes();
    if minutes < 1 {
        return "Session ends in under a minute".to_owned();
    }
    if minutes < 60 {
        return format!("Session ends in {minutes} min");
    }
    let hours = remaining.whole_hours();
    let rest = minutes - hours * 60;
    if rest == 0 {
        format!("Session ends in {hours} h")
    } else {
        format!("Session ends in {hours} h {rest} min")
    }
}

/// `2026-10-19 14:05 UTC` style timestamp.
#[must_use]
pub fn utc_timestamp(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_default()
}
