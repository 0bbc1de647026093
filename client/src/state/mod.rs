//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Only the admin session is shared today; page-local form state stays in
//! the page that owns it.

pub mod session;
