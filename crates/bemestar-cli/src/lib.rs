//! bemestar-cli library root.
//!
//! Exposes the argument definitions and command implementations so that
//! integration tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
