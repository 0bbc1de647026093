//! Route wrapper that gates its children on the admin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every admin page (and the login page with `require_auth = false`).
//! It owns one [`crate::session::guard::SessionGuard`] per mount and wires it
//! to the session context, router navigation, browser storage and a browser
//! timer.
//!
//! DESIGN
//! ======
//! The guard stays pending until the provider has read storage, then
//! schedules one delayed check per session change. A newer change or an
//! unmount drops the previous timer, which cancels it. Redirect verdicts keep
//! the placeholder up while the router moves away.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingPlaceholder;
use crate::config::SiteConfig;
use crate::session::clock::SystemClock;
use crate::session::guard::{GuardPhase, SessionGuard as Guard, Verdict};
use crate::session::scheduler::{BrowserScheduler, TimerGuard};
use crate::session::store::BrowserStore;
use crate::state::session::{self, SessionState};

#[component]
pub fn SessionGuard(#[prop(default = true)] require_auth: bool, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let phase = RwSignal::new(GuardPhase::Pending);

    let navigator = move |path: &str| {
        navigate(path, NavigateOptions { replace: true, ..Default::default() });
    };
    let guard = Rc::new(Guard::new(
        config.guard.clone(),
        require_auth,
        BrowserStore::new(config.storage_keys.clone()),
        SystemClock,
        navigator,
    ));
    let guard = StoredValue::new_local(guard);
    let timer = StoredValue::new_local(None::<TimerGuard>);

    Effect::new(move || {
        let current = state.get();
        timer.update_value(|t| drop(t.take()));
        phase.set(GuardPhase::Pending);
        if !current.loaded {
            return;
        }
        let pending = guard.get_value().activate(current.session, &BrowserScheduler, move |verdict| {
            // Publishing a cleared session re-runs this effect on the
            // signed-out state; unchanged state does not notify.
            let mut republished = false;
            state.maybe_update(|s| {
                republished = session::forget_cleared(s, &verdict);
                republished
            });
            if !republished {
                phase.set(GuardPhase::Resolved(verdict));
            }
        });
        timer.set_value(Some(pending));
    });

    on_cleanup(move || {
        let _ = timer.try_update_value(|t| drop(t.take()));
    });

    let renders = Memo::new(move |_| phase.with(|p| p.verdict().is_some_and(Verdict::renders_children)));

    view! {
        <Show when=move || renders.get() fallback=|| view! { <LoadingPlaceholder/> }>
            {children()}
        </Show>
    }
}
