//! City Weather CLI Library
//!
//! This module exposes the weather resolver, the dashboard state and the CLI
//! for use by the binary and integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod logging;
pub mod report;
pub mod ui;
