//! Client-side admin session model and the guard that gates admin routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes two values into browser storage: an authentication
//! flag and an expiry timestamp. The session provider mirrors them into a
//! context signal, and `guard` decides per route whether to render, clear an
//! expired session, or redirect.
//!
//! DESIGN
//! ======
//! Time, timers, storage and navigation are reached through small traits
//! (`Clock`, `Scheduler`, `SessionStore`, `Navigator`) so the guard's
//! behavior can be driven deterministically in tests.
//!
//! This only gates client-side navigation. Access control for real data has
//! to live on the server.


pub mod clock;
pub mod guard;
pub mod scheduler;
pub mod store;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Stored expiry value.
///
/// Unparsable values are kept verbatim rather than dropped so the guard can
/// apply an explicit [`MalformedExpiry`] policy to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionExpiry {
    At(OffsetDateTime),
    Malformed(String),
}

impl SessionExpiry {
    /// Parse a stored expiry. Blank input means "no expiry".
    ///
    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, which mean
    /// midnight UTC at the start of that day.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(at) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Some(Self::At(at));
        }
        Some(match Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
            Ok(day) => Self::At(day.midnight().assume_utc()),
            Err(_) => Self::Malformed(trimmed.to_owned()),
        })
    }

    /// Storage encoding of this expiry.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::At(at) => at.format(&Rfc3339).unwrap_or_default(),
            Self::Malformed(raw) => raw.clone(),
        }
    }

    /// Whether the session has expired at `now`.
    ///
    /// The comparison is strict: a session whose expiry equals `now` is still
    /// valid.
    #[must_use]
    pub fn is_past(&self, now: OffsetDateTime, policy: MalformedExpiry) -> bool {
        match self {
            Self::At(at) => now > *at,
            Self::Malformed(_) => policy == MalformedExpiry::TreatAsExpired,
        }
    }
}

/// How the guard treats an expiry value that does not parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedExpiry {
    /// The value is ignored and the auth flag alone decides.
    #[default]
    NeverExpires,
    /// The value is handled like an expiry in the past.
    TreatAsExpired,
}

/// Authentication state as the provider hands it to guards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub expiry: Option<SessionExpiry>,
}

impl Session {
    /// An authenticated session valid until `expiry`.
    #[must_use]
    pub fn authenticated_until(expiry: OffsetDateTime) -> Self {
        Self { is_authenticated: true, expiry: Some(SessionExpiry::At(expiry)) }
    }

    /// Expiry as a timestamp, when it parsed.
    #[must_use]
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        match self.expiry {
            Some(SessionExpiry::At(at)) => Some(at),
            _ => None,
        }
    }
}

/// Decode the stored authentication flag. Only the literal `true` counts.
#[must_use]
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.trim() == "true")
}

/// Storage encoding of the authentication flag.
#[must_use]
pub fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
