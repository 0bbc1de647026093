//! JSON DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server crate depends on this crate and uses these same types in its
//! handlers, so the wire shape is defined once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::session::{Session, SessionExpiry};

/// Body of `POST /api/admin/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCodeRequest {
    pub code: String,
}

/// Successful admin sign-in, in the same shape the browser stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    pub is_authenticated: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub session_expiry: OffsetDateTime,
}

impl SessionGrant {
    #[must_use]
    pub fn into_session(self) -> Session {
        Session { is_authenticated: self.is_authenticated, expiry: Some(SessionExpiry::At(self.session_expiry)) }
    }
}

/// Response of `POST /api/projects`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    pub reference: String,
}

/// Error body returned by API handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
