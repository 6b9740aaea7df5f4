//! Helpers for command-line programs: a terminal-aware dual-sink logger and
//! strategies for running external commands.

pub mod api;
pub mod config;
pub mod error;
pub mod exec;
pub mod logger;
