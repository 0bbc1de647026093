//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::SiteHeader;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to home"</A>
        </main>
    }
}
