//! Notion Recents: classify, deduplicate, filter, sort and pin the Notion
//! pages and databases found in browser history.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod providers;
pub mod rpc_handler;
pub mod services;
pub mod types;
