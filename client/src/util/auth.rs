//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages sign in and out through these helpers so the browser store and the
//! session context stay in step.

use leptos::prelude::*;

use crate::config::StorageKeys;
use crate::net::types::SessionGrant;
use crate::session::store::BrowserStore;
use crate::state::session::{self, SessionState};

/// Read the stored session once the client takes over from SSR.
pub fn install_session_loader(state: RwSignal<SessionState>, keys: StorageKeys) {
    Effect::new(move || {
        if state.get_untracked().loaded {
            return;
        }
        let loaded = SessionState::load_from(&BrowserStore::new(keys.clone()));
        log::debug!("session loaded (authenticated: {})", loaded.session.is_authenticated);
        state.set(loaded);
    });
}

/// Persist a granted session and publish it to the context.
pub fn apply_grant(state: RwSignal<SessionState>, keys: &StorageKeys, grant: SessionGrant) {
    let store = BrowserStore::new(keys.clone());
    state.update(|s| {
        if let Err(e) = session::sign_in(s, &store, grant.into_session()) {
            log::warn!("session not persisted: {e}");
        }
    });
}

/// Clear the session everywhere. Callers navigate to the login page
/// themselves; a guard that sees the cleared session first redirects there
/// too.
pub fn sign_out(state: RwSignal<SessionState>, keys: &StorageKeys) {
    let store = BrowserStore::new(keys.clone());
    state.update(|s| {
        if let Err(e) = session::sign_out(s, &store) {
            log::warn!("stored session not cleared: {e}");
        }
    });
}
