use super::*;
use std::time::Duration;

use time::macros::datetime;

use crate::config::StorageKeys;
use crate::session::SessionExpiry;
use crate::session::clock::ManualClock;
use crate::session::scheduler::ManualScheduler;
use crate::session::store::MemoryStore;

const NOW: OffsetDateTime = datetime!(2026-10-19 12:00:00 UTC);

type Visits = Rc<RefCell<Vec<String>>>;
type TestGuard = SessionGuard<Rc<MemoryStore>, Rc<ManualClock>, Box<dyn Fn(&str)>>;

struct Harness {
    guard: Rc<TestGuard>,
    store: Rc<MemoryStore>,
    clock: Rc<ManualClock>,
    visits: Visits,
}

fn harness(require_auth: bool, stored: &Session) -> Harness {
    let store = Rc::new(MemoryStore::seeded(StorageKeys::default(), stored));
    let clock = Rc::new(ManualClock::new(NOW));
    let visits: Visits = Rc::default();
    let recorder = Rc::clone(&visits);
    let navigator: Box<dyn Fn(&str)> = Box::new(move |path: &str| recorder.borrow_mut().push(path.to_owned()));
    let guard = Rc::new(SessionGuard::new(
        GuardConfig::default(),
        require_auth,
        Rc::clone(&store),
        Rc::clone(&clock),
        navigator,
    ));
    Harness { guard, store, clock, visits }
}

fn signed_in_until(expiry: OffsetDateTime) -> Session {
    Session::authenticated_until(expiry)
}

fn yesterday() -> OffsetDateTime {
    NOW - time::Duration::days(1)
}

fn tomorrow() -> OffsetDateTime {
    NOW + time::Duration::days(1)
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn protected_route_without_session_redirects_to_login() {
    let verdict = evaluate(true, &Session::default(), NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::LoginRequired);
    assert_eq!(verdict.redirect_target(), Some("/admin-access"));
    assert!(!verdict.clears_session());
}

#[test]
fn login_page_with_session_redirects_to_landing() {
    let session = Session { is_authenticated: true, expiry: None };
    let verdict = evaluate(false, &session, NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::AlreadySignedIn);
    assert_eq!(verdict.redirect_target(), Some("/admin"));
}

#[test]
fn protected_route_with_live_session_renders() {
    let verdict = evaluate(true, &signed_in_until(tomorrow()), NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::Allowed);
    assert!(verdict.renders_children());
}

#[test]
fn login_page_without_session_renders() {
    let verdict = evaluate(false, &Session::default(), NOW, &GuardConfig::default());
    assert!(verdict.renders_children());
}

#[test]
fn expired_session_on_protected_route_redirects_to_login() {
    let verdict = evaluate(true, &signed_in_until(yesterday()), NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::SessionExpired);
    assert!(verdict.clears_session());
    assert_eq!(verdict.redirect_target(), Some("/admin-access"));
}

#[test]
fn expired_session_on_login_page_clears_and_renders() {
    let verdict = evaluate(false, &signed_in_until(yesterday()), NOW, &GuardConfig::default());
    assert!(verdict.clears_session());
    assert!(verdict.renders_children());
}

#[test]
fn expiry_check_wins_even_when_flag_is_false() {
    let session = Session { is_authenticated: false, expiry: Some(SessionExpiry::At(yesterday())) };
    let verdict = evaluate(true, &session, NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::SessionExpired);
}

#[test]
fn expiry_equal_to_now_is_not_expired() {
    let verdict = evaluate(true, &signed_in_until(NOW), NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::Allowed);
}

#[test]
fn malformed_expiry_never_expires_by_default() {
    let session = Session { is_authenticated: true, expiry: Some(SessionExpiry::Malformed("soon".to_owned())) };
    let verdict = evaluate(true, &session, NOW, &GuardConfig::default());
    assert_eq!(verdict.reason, Reason::Allowed);
}

#[test]
fn malformed_expiry_can_be_treated_as_expired() {
    let config = GuardConfig { malformed_expiry: MalformedExpiry::TreatAsExpired, ..GuardConfig::default() };
    let session = Session { is_authenticated: true, expiry: Some(SessionExpiry::Malformed("soon".to_owned())) };
    let verdict = evaluate(true, &session, NOW, &config);
    assert_eq!(verdict.reason, Reason::SessionExpired);
}

#[test]
fn custom_routes_are_used() {
    let config = GuardConfig {
        login_route: "/sign-in".to_owned(),
        landing_route: "/console".to_owned(),
        ..GuardConfig::default()
    };
    let login = evaluate(true, &Session::default(), NOW, &config);
    let landing = evaluate(false, &Session { is_authenticated: true, expiry: None }, NOW, &config);
    assert_eq!(login.redirect_target(), Some("/sign-in"));
    assert_eq!(landing.redirect_target(), Some("/console"));
}

// =============================================================
// SessionGuard side effects
// =============================================================

#[test]
fn yesterday_expiry_clears_storage_and_navigates_to_login() {
    let stored = signed_in_until(yesterday());
    let h = harness(true, &stored);

    let verdict = h.guard.resolve(&stored);

    assert!(verdict.clears_session());
    assert!(h.store.get("isAuthenticated").is_none());
    assert!(h.store.get("sessionExpiry").is_none());
    assert_eq!(*h.visits.borrow(), vec!["/admin-access".to_owned()]);
}

#[test]
fn tomorrow_expiry_renders_without_navigation() {
    let stored = signed_in_until(tomorrow());
    let h = harness(true, &stored);

    let verdict = h.guard.resolve(&stored);

    assert!(verdict.renders_children());
    assert!(h.visits.borrow().is_empty());
    assert_eq!(h.store.mutations(), 0);
    assert_eq!(h.store.load(), Ok(stored));
}

#[test]
fn expired_session_on_public_route_clears_without_navigation() {
    let stored = signed_in_until(yesterday());
    let h = harness(false, &stored);

    let verdict = h.guard.resolve(&stored);

    assert!(verdict.renders_children());
    assert!(h.store.is_empty());
    assert!(h.visits.borrow().is_empty());
}

#[test]
fn unauthenticated_protected_route_leaves_storage_alone() {
    let h = harness(true, &Session::default());
    h.store.insert_raw("unrelated", "kept");

    h.guard.resolve(&Session::default());

    assert_eq!(h.store.get("unrelated").as_deref(), Some("kept"));
    assert_eq!(h.store.mutations(), 0);
    assert_eq!(*h.visits.borrow(), vec!["/admin-access".to_owned()]);
}

#[test]
fn resolving_twice_with_same_inputs_has_no_repeated_effects() {
    let stored = signed_in_until(yesterday());
    let h = harness(true, &stored);

    let first = h.guard.resolve(&stored);
    let second = h.guard.resolve(&stored);

    assert_eq!(first, second);
    assert_eq!(h.store.mutations(), 1);
    assert_eq!(h.visits.borrow().len(), 1);
}

#[test]
fn crossing_expiry_between_resolves_re_evaluates() {
    let stored = signed_in_until(NOW + time::Duration::minutes(5));
    let h = harness(true, &stored);

    assert!(h.guard.resolve(&stored).renders_children());
    h.clock.advance(time::Duration::minutes(10));
    let verdict = h.guard.resolve(&stored);

    assert_eq!(verdict.reason, Reason::SessionExpired);
    assert_eq!(*h.visits.borrow(), vec!["/admin-access".to_owned()]);
    assert!(h.store.is_empty());
}

#[test]
fn changed_session_is_evaluated_again() {
    let h = harness(true, &Session::default());

    h.guard.resolve(&Session::default());
    let verdict = h.guard.resolve(&signed_in_until(tomorrow()));

    assert!(verdict.renders_children());
    assert_eq!(h.visits.borrow().len(), 1);
}

// =============================================================
// Pending -> Resolved lifecycle
// =============================================================

#[test]
fn guard_stays_pending_until_settle_delay_elapses() {
    let h = harness(true, &Session::default());
    let scheduler = ManualScheduler::new();
    let resolved: Rc<RefCell<Option<Verdict>>> = Rc::default();
    let sink = Rc::clone(&resolved);

    let _timer = h.guard.activate(Session::default(), &scheduler, move |v| *sink.borrow_mut() = Some(v));

    scheduler.advance(Duration::from_millis(99));
    assert_eq!(h.guard.phase(), GuardPhase::Pending);
    assert!(h.visits.borrow().is_empty());

    scheduler.advance(Duration::from_millis(1));
    let phase = h.guard.phase();
    assert_eq!(phase.verdict().map(|v| v.reason), Some(Reason::LoginRequired));
    assert_eq!(resolved.borrow().as_ref().map(|v| v.reason), Some(Reason::LoginRequired));
    assert_eq!(*h.visits.borrow(), vec!["/admin-access".to_owned()]);
}

#[test]
fn cancelled_activation_never_resolves() {
    let stored = signed_in_until(yesterday());
    let h = harness(true, &stored);
    let scheduler = ManualScheduler::new();

    let timer = h.guard.activate(stored.clone(), &scheduler, |_| {});
    drop(timer);
    scheduler.advance(Duration::from_secs(1));

    assert_eq!(h.guard.phase(), GuardPhase::Pending);
    assert!(h.visits.borrow().is_empty());
    assert_eq!(h.store.load(), Ok(stored));
}

#[test]
fn reactivation_replaces_the_pending_check() {
    let h = harness(true, &Session::default());
    let scheduler = ManualScheduler::new();

    let first = h.guard.activate(Session::default(), &scheduler, |_| {});
    scheduler.advance(Duration::from_millis(50));
    drop(first);
    let _second = h.guard.activate(signed_in_until(tomorrow()), &scheduler, |_| {});

    scheduler.advance(Duration::from_millis(60));
    assert_eq!(h.guard.phase(), GuardPhase::Pending);
    scheduler.advance(Duration::from_millis(40));

    assert_eq!(h.guard.phase().verdict().map(|v| v.reason), Some(Reason::Allowed));
    assert!(h.visits.borrow().is_empty());
}

#[test]
fn dropped_guard_ignores_its_timer() {
    let h = harness(true, &Session::default());
    let scheduler = ManualScheduler::new();
    let fired = Rc::new(std::cell::Cell::new(false));
    let flag = Rc::clone(&fired);

    let timer = h.guard.activate(Session::default(), &scheduler, move |_| flag.set(true));
    timer.forget();
    let Harness { guard, visits, .. } = h;
    drop(guard);
    scheduler.advance(Duration::from_millis(100));

    assert!(!fired.get());
    assert!(visits.borrow().is_empty());
}
