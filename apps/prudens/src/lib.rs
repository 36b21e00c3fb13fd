//! # prudens
//!
//! Library half of the Prudens command-line tool. The binary in `main.rs`
//! only parses arguments, loads configuration and installs logging; every
//! command lives here so integration tests can drive it directly.

pub mod cli;
pub mod config;
pub mod logging;
