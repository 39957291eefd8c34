// Shared type definitions
// Each submodule defines types used across the pipeline, the session and the RPC layer.

pub mod errors;
pub mod history;
pub mod pin;
pub mod query;
pub mod settings;
