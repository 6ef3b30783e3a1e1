//! Stack&Play: a terminal browser for a public games catalog.
//!
//! The interesting part lives in [`fetch`] and [`app`]: each view owns an
//! explicit fetch lifecycle (Idle/Loading/Success/Failure) keyed by the page
//! or game id it was issued for, and responses whose key is no longer current
//! are dropped rather than applied.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod models;
pub mod render;
