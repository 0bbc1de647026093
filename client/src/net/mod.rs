//! Networking modules for the admin session and project-intake endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared JSON schema.

pub mod api;
pub mod types;
