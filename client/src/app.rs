//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_provider::SessionProvider;
use crate::config::SiteConfig;
use crate::pages::{
    admin_access::AdminAccessPage, admin_dashboard::AdminDashboardPage, home::HomePage,
    new_project::NewProjectPage, not_found::NotFoundPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site configuration and the session context, then sets up
/// routing. Route paths match the values in [`crate::config`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/keystone.css"/>
        <Title text="Keystone Builders"/>

        <SessionProvider>
            <Router>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("admin-access") view=AdminAccessPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("projects"), StaticSegment("new"))
                        view=NewProjectPage
                    />
                </Routes>
            </Router>
        </SessionProvider>
    }
}
