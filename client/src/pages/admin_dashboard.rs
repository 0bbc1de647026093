//! Admin landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::counter::Counter;
use crate::components::header::AdminHeader;
use crate::components::session_guard::SessionGuard;
use crate::config::NEW_PROJECT_ROUTE;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <Title text="Admin | Keystone Builders"/>
        <SessionGuard>
            <AdminHeader title="Dashboard"/>
            <main class="admin-dashboard">
                <section class="admin-dashboard__stats">
                    <Counter target=14 duration_ms=800 label="Active projects"/>
                    <Counter target=3 duration_ms=800 label="Awaiting estimate"/>
                    <Counter target=96 duration_ms=800 suffix="%" label="On-schedule rate"/>
                </section>
                <section class="admin-dashboard__actions">
                    <h2>"Quick actions"</h2>
                    <A href={NEW_PROJECT_ROUTE} {..} class="button button--primary">
                        "Log a new project"
                    </A>
                </section>
            </main>
        </SessionGuard>
    }
}
