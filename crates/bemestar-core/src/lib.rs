//! bemestar-core
//!
//! Pure domain types and storage key conventions.
//! No I/O and no clock reads: this is the shared vocabulary of the
//! assessment engine and the crates that persist or render its results.

pub mod error;
pub mod keys;
pub mod models;
