//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render directory cards and notifications while reading shared
//! state from Leptos context providers.

pub mod profile_card;
pub mod toast;
