//! Provides the admin session context to everything below it.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::session::SessionState;
use crate::util::auth::install_session_loader;

/// Publishes `RwSignal<SessionState>` and reads the stored session once the
/// client takes over. During SSR the session stays unloaded.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(SessionState::default());
    provide_context(state);
    install_session_loader(state, config.storage_keys);
    children()
}
