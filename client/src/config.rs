//! Site routing and session settings shared by pages and the session guard.
//!
//! Values are public: route paths and storage key names only, no secrets.

use std::time::Duration;

use crate::session::MalformedExpiry;

/// Path of the admin login page.
pub const LOGIN_ROUTE: &str = "/admin-access";
/// Where an authenticated admin lands.
pub const LANDING_ROUTE: &str = "/admin";
/// Project-intake form inside the admin section.
pub const NEW_PROJECT_ROUTE: &str = "/admin/projects/new";

/// Delay before a guard evaluates, so a fast redirect does not flash the
/// intermediate page.
pub const GUARD_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Names of the two browser storage keys that mirror the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub authenticated: String,
    pub expiry: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { authenticated: "isAuthenticated".to_owned(), expiry: "sessionExpiry".to_owned() }
    }
}

/// Settings consumed by [`crate::session::guard::SessionGuard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_route: String,
    pub landing_route: String,
    pub settle_delay: Duration,
    pub malformed_expiry: MalformedExpiry,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_route: LOGIN_ROUTE.to_owned(),
            landing_route: LANDING_ROUTE.to_owned(),
            settle_delay: GUARD_SETTLE_DELAY,
            malformed_expiry: MalformedExpiry::default(),
        }
    }
}

/// Top-level client configuration, provided through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub guard: GuardConfig,
    pub storage_keys: StorageKeys,
}
