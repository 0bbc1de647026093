//! Site and admin headers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteHeader` is the public navigation bar. `AdminHeader` sits on guarded
//! pages only, so it can assume a loaded, authenticated session; it shows the
//! remaining session time and a sign-out button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::{LANDING_ROUTE, LOGIN_ROUTE, NEW_PROJECT_ROUTE, SiteConfig};
use crate::session::clock::{Clock, SystemClock};
use crate::state::session::SessionState;
use crate::util::auth;
use crate::util::format::{session_remaining, utc_timestamp};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/" {..} class="site-header__brand">
                "Keystone Builders"
            </A>
            <nav class="site-header__nav">
                <a href="/#services">"Services"</a>
                <a href="/#why-us">"Why us"</a>
                <a href="/#team">"Team"</a>
                <A href={LOGIN_ROUTE} {..} class="site-header__admin">
                    "Admin"
                </A>
            </nav>
        </header>
    }
}

#[component]
pub fn AdminHeader(#[prop(into)] title: String) -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<SiteConfig>();

    let expiry = move || state.with(|s| s.session.expires_at());
    let remaining = move || match expiry() {
        Some(at) => session_remaining(at, SystemClock.now()),
        None => "Session without expiry".to_owned(),
    };
    let expires_title = move || expiry().map(utc_timestamp).unwrap_or_default();

    let navigate = use_navigate();
    let on_sign_out = move |_| {
        log::info!("admin signed out");
        auth::sign_out(state, &config.storage_keys);
        navigate(&config.guard.login_route, NavigateOptions { replace: true, ..Default::default() });
    };

    view! {
        <header class="admin-header">
            <A href={LANDING_ROUTE} {..} class="admin-header__brand">
                "Keystone Admin"
            </A>
            <h1 class="admin-header__title">{title}</h1>
            <nav class="admin-header__nav">
                <A href=NEW_PROJECT_ROUTE>"New project"</A>
                <A href="/">"Public site"</A>
            </nav>
            <span class="admin-header__expiry" title=expires_title>
                {remaining}
            </span>
            <button class="admin-header__sign-out" type="button" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
