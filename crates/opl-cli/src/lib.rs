//! CLI library components for the entries checker.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
