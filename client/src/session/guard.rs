//! Session guard: decides whether a route renders, redirects, or clears an
//! expired session.
//!
//! DESIGN
//! ======
//! `evaluate` is the pure decision over (route intent, session, now).
//! `SessionGuard` wraps it with the side effects (storage clear, navigation)
//! and the `Pending -> Resolved` lifecycle:
//!
//! ```text
//! activate() --settle delay--> resolve() --> Resolved(verdict)
//!     ^                                           |
//!     +------------ inputs changed ---------------+
//! ```
//!
//! Resolving twice with the same inputs and the same expiry outcome reuses
//! the previous verdict and performs no side effects the second time.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::RefCell;
use std::rc::Rc;

use time::OffsetDateTime;

use super::clock::Clock;
use super::scheduler::{Scheduler, TimerGuard};
use super::store::SessionStore;
use super::{MalformedExpiry, Session};
use crate::config::GuardConfig;

/// Performs route changes.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Which rule produced a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Expiry is in the past; the stored session is cleared.
    SessionExpired,
    /// Protected route, no session.
    LoginRequired,
    /// Public-only route (the login page), already signed in.
    AlreadySignedIn,
    Allowed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardAction {
    RenderChildren,
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub reason: Reason,
    pub action: GuardAction,
}

impl Verdict {
    fn render(reason: Reason) -> Self {
        Self { reason, action: GuardAction::RenderChildren }
    }

    fn redirect(reason: Reason, path: &str) -> Self {
        Self { reason, action: GuardAction::Redirect(path.to_owned()) }
    }

    #[must_use]
    pub fn clears_session(&self) -> bool {
        self.reason == Reason::SessionExpired
    }

    #[must_use]
    pub fn renders_children(&self) -> bool {
        self.action == GuardAction::RenderChildren
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.action {
            GuardAction::Redirect(path) => Some(path),
            GuardAction::RenderChildren => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Pending,
    Resolved(Verdict),
}

impl GuardPhase {
    #[must_use]
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Pending => None,
            Self::Resolved(verdict) => Some(verdict),
        }
    }
}

fn is_expired(session: &Session, now: OffsetDateTime, policy: MalformedExpiry) -> bool {
    session
        .expiry
        .as_ref()
        .is_some_and(|expiry| expiry.is_past(now, policy))
}

/// Decide what a guarded route should do.
#[must_use]
pub fn evaluate(require_auth: bool, session: &Session, now: OffsetDateTime, config: &GuardConfig) -> Verdict {
    if is_expired(session, now, config.malformed_expiry) {
        return if require_auth {
            Verdict::redirect(Reason::SessionExpired, &config.login_route)
        } else {
            Verdict::render(Reason::SessionExpired)
        };
    }
    if require_auth && !session.is_authenticated {
        return Verdict::redirect(Reason::LoginRequired, &config.login_route);
    }
    if !require_auth && session.is_authenticated {
        return Verdict::redirect(Reason::AlreadySignedIn, &config.landing_route);
    }
    Verdict::render(Reason::Allowed)
}

struct Resolution {
    session: Session,
    expired: bool,
    verdict: Verdict,
}

/// Stateful guard for one mounted route.
pub struct SessionGuard<S, C, N> {
    config: GuardConfig,
    require_auth: bool,
    store: S,
    clock: C,
    navigator: N,
    phase: RefCell<GuardPhase>,
    last: RefCell<Option<Resolution>>,
}

impl<S, C, N> SessionGuard<S, C, N>
where
    S: SessionStore,
    C: Clock,
    N: Navigator,
{
    pub fn new(config: GuardConfig, require_auth: bool, store: S, clock: C, navigator: N) -> Self {
        Self {
            config,
            require_auth,
            store,
            clock,
            navigator,
            phase: RefCell::new(GuardPhase::Pending),
            last: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn require_auth(&self) -> bool {
        self.require_auth
    }

    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.phase.borrow().clone()
    }

    /// Evaluate now and apply the verdict's side effects.
    pub fn resolve(&self, session: &Session) -> Verdict {
        let now = self.clock.now();
        let expired = is_expired(session, now, self.config.malformed_expiry);

        let repeated = self
            .last
            .borrow()
            .as_ref()
            .filter(|prev| prev.expired == expired && prev.session == *session)
            .map(|prev| prev.verdict.clone());
        if let Some(verdict) = repeated {
            *self.phase.borrow_mut() = GuardPhase::Resolved(verdict.clone());
            return verdict;
        }

        let verdict = evaluate(self.require_auth, session, now, &self.config);
        *self.last.borrow_mut() = Some(Resolution { session: session.clone(), expired, verdict: verdict.clone() });
        *self.phase.borrow_mut() = GuardPhase::Resolved(verdict.clone());

        if verdict.clears_session() {
            match self.store.clear() {
                Ok(()) => log::info!("session expired; stored credentials cleared"),
                Err(e) => log::warn!("session expired but clearing storage failed: {e}"),
            }
        }
        if let Some(path) = verdict.redirect_target() {
            log::debug!("session guard redirecting to {path} ({:?})", verdict.reason);
            self.navigator.navigate(path);
        }
        verdict
    }
}

impl<S, C, N> SessionGuard<S, C, N>
where
    S: SessionStore + 'static,
    C: Clock + 'static,
    N: Navigator + 'static,
{
    /// Enter `Pending` and resolve `session` once the settle delay elapses.
    ///
    /// Dropping the returned timer before then cancels the check. A guard
    /// that has itself been dropped by the time the timer fires does nothing.
    pub fn activate<Sch>(
        self: &Rc<Self>,
        session: Session,
        scheduler: &Sch,
        on_resolved: impl FnOnce(Verdict) + 'static,
    ) -> TimerGuard
    where
        Sch: Scheduler + ?Sized,
    {
        *self.phase.borrow_mut() = GuardPhase::Pending;
        let guard = Rc::downgrade(self);
        scheduler.schedule(
            self.config.settle_delay,
            Box::new(move || {
                if let Some(guard) = guard.upgrade() {
                    let verdict = guard.resolve(&session);
                    on_resolved(verdict);
                }
            }),
        )
    }
}
