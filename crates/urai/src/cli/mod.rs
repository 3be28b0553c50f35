//! Subcommand implementations.

pub mod config;
pub mod describe;
pub mod imagine;
pub mod prompt;
pub mod serve;
pub mod types;
