//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the session gate while reading shared
//! state from Leptos context providers.

pub mod avatar;
pub mod cards;
pub mod counter;
pub mod header;
pub mod loading;
pub mod session_guard;
pub mod session_provider;
