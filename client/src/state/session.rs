//! Admin session state provided to guards and admin pages.
//!
//! DESIGN
//! ======
//! `SessionState` lives in an `RwSignal` context. The browser store is the
//! source of truth across reloads; this signal mirrors it for the current
//! page. `loaded` stays false during SSR and until the first client-side
//! read, so guards never decide on a session that was not read yet.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::session::Session;
use crate::session::guard::Verdict;
use crate::session::store::{SessionStore, StorageError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub loaded: bool,
}

impl SessionState {
    /// Read the stored session. A store that cannot be read counts as signed
    /// out, which sends protected routes to the login page.
    pub fn load_from(store: &impl SessionStore) -> Self {
        let session = store.load().unwrap_or_else(|e| {
            log::warn!("reading stored session failed: {e}");
            Session::default()
        });
        Self { session, loaded: true }
    }
}

/// Persist `session` and publish it.
///
/// The in-memory state is updated even if persisting fails, so the current
/// page still reflects the sign-in.
///
/// # Errors
///
/// Returns the storage error when the session could not be written.
pub fn sign_in(state: &mut SessionState, store: &impl SessionStore, session: Session) -> Result<(), StorageError> {
    let persisted = store.save(&session);
    state.session = session;
    state.loaded = true;
    persisted
}

/// Clear both stored keys and reset the published session.
///
/// # Errors
///
/// Returns the storage error when the stored keys could not be removed.
pub fn sign_out(state: &mut SessionState, store: &impl SessionStore) -> Result<(), StorageError> {
    let cleared = store.clear();
    state.session = Session::default();
    state.loaded = true;
    cleared
}

/// Bring the published state in line with a store the guard just cleared.
///
/// Returns whether anything changed. Without this, a later guard mount would
/// see the stale expired session and clear storage again.
pub fn forget_cleared(state: &mut SessionState, verdict: &Verdict) -> bool {
    if !verdict.clears_session() || state.session == Session::default() {
        return false;
    }
    state.session = Session::default();
    true
}
