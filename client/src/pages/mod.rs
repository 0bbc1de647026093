//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Admin pages wrap their content in `SessionGuard`.

pub mod admin_access;
pub mod admin_dashboard;
pub mod home;
pub mod new_project;
pub mod not_found;
