use super::*;
use time::macros::datetime;

use std::rc::Rc;

use crate::config::{GuardConfig, StorageKeys};
use crate::session::clock::ManualClock;
use crate::session::guard::SessionGuard;
use crate::session::store::MemoryStore;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_not_loaded() {
    let state = SessionState::default();
    assert!(!state.loaded);
    assert!(!state.session.is_authenticated);
}

#[test]
fn load_from_marks_loaded() {
    let stored = Session::authenticated_until(datetime!(2026-10-20 00:00:00 UTC));
    let store = MemoryStore::seeded(StorageKeys::default(), &stored);

    let state = SessionState::load_from(&store);
    assert!(state.loaded);
    assert_eq!(state.session, stored);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_from_browser_store_outside_hydrate_is_signed_out() {
    let state = SessionState::load_from(&crate::session::store::BrowserStore::default());
    assert!(state.loaded);
    assert_eq!(state.session, Session::default());
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_persists_and_publishes() {
    let store = MemoryStore::new(StorageKeys::default());
    let mut state = SessionState::default();
    let session = Session::authenticated_until(datetime!(2026-10-20 00:00:00 UTC));

    sign_in(&mut state, &store, session.clone()).expect("sign in");

    assert_eq!(state.session, session);
    assert!(state.loaded);
    assert_eq!(store.get("isAuthenticated").as_deref(), Some("true"));
}

#[test]
fn sign_out_clears_both_keys() {
    let stored = Session::authenticated_until(datetime!(2026-10-20 00:00:00 UTC));
    let store = MemoryStore::seeded(StorageKeys::default(), &stored);
    let mut state = SessionState { session: stored, loaded: true };

    sign_out(&mut state, &store).expect("sign out");

    assert_eq!(state.session, Session::default());
    assert!(store.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_in_still_publishes_when_storage_fails() {
    let store = crate::session::store::BrowserStore::default();
    let mut state = SessionState::default();
    let session = Session { is_authenticated: true, expiry: None };

    let result = sign_in(&mut state, &store, session.clone());

    assert_eq!(result, Err(StorageError::Unavailable));
    assert_eq!(state.session, session);
}

// =============================================================
// forget_cleared
// =============================================================

fn resolve_on_fresh_guard(store: &Rc<MemoryStore>, session: &Session) -> Verdict {
    let guard = SessionGuard::new(
        GuardConfig::default(),
        false,
        Rc::clone(store),
        ManualClock::new(datetime!(2026-10-19 12:00:00 UTC)),
        |_: &str| {},
    );
    guard.resolve(session)
}

#[test]
fn forget_cleared_keeps_context_and_storage_in_step() {
    let expired = Session::authenticated_until(datetime!(2026-10-18 12:00:00 UTC));
    let store = Rc::new(MemoryStore::seeded(StorageKeys::default(), &expired));
    let mut state = SessionState { session: expired, loaded: true };

    let verdict = resolve_on_fresh_guard(&store, &state.session);
    assert!(verdict.clears_session());
    assert_eq!(store.mutations(), 1);

    assert!(forget_cleared(&mut state, &verdict));
    assert_eq!(state.session, Session::default());
    assert!(state.loaded);

    // A later mount sees the signed-out context and leaves storage alone.
    let again = resolve_on_fresh_guard(&store, &state.session);
    assert!(!again.clears_session());
    assert_eq!(store.mutations(), 1);
}

#[test]
fn forget_cleared_ignores_verdicts_that_keep_the_session() {
    let valid = Session::authenticated_until(datetime!(2026-10-20 12:00:00 UTC));
    let store = Rc::new(MemoryStore::seeded(StorageKeys::default(), &valid));
    let mut state = SessionState { session: valid.clone(), loaded: true };

    let verdict = resolve_on_fresh_guard(&store, &state.session);
    assert!(!forget_cleared(&mut state, &verdict));
    assert_eq!(state.session, valid);
}
