//! Admin login page: exchanges an access code for a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under a guard with `require_auth = false`, so an admin who is
//! already signed in is sent straight to the landing page. On success the
//! grant is persisted to browser storage before navigating.

#[cfg(test)]
#[path = "admin_access_test.rs"]
mod admin_access_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::header::SiteHeader;
use crate::components::session_guard::SessionGuard;

const MISSING_CODE: &str = "Enter your access code.";

/// Trim the typed code and reject blanks.
fn validate_access_code_input(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(MISSING_CODE);
    }
    Ok(code.to_owned())
}

#[component]
pub fn AdminAccessPage() -> impl IntoView {
    view! {
        <Title text="Admin access | Keystone Builders"/>
        <SessionGuard require_auth=false>
            <SiteHeader/>
            <AccessCodeForm/>
        </SessionGuard>
    }
}

#[component]
fn AccessCodeForm() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (state, config, navigate) = (
        expect_context::<RwSignal<crate::state::session::SessionState>>(),
        expect_context::<crate::config::SiteConfig>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code_value = match validate_access_code_input(&code.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Checking code...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::open_admin_session(&code_value).await {
                    Ok(grant) => {
                        log::info!("admin session opened");
                        crate::util::auth::apply_grant(state, &config.storage_keys, grant);
                        code.set(String::new());
                        navigate(
                            &config.guard.landing_route,
                            leptos_router::NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(e) => {
                        log::warn!("admin sign-in failed: {e}");
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = code_value;
    };

    view! {
        <main class="login-page">
            <div class="login-card">
                <h1>"Admin access"</h1>
                <p class="login-card__subtitle">"Enter the access code issued to your team."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Access code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </main>
    }
}
