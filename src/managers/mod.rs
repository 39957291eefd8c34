// State managers
// Managers own mutable state: the pin set and the per-popup history session.

pub mod history_session;
pub mod pin_registry;
