//! bemestar-export
//!
//! Markdown report generation from combined assessment results.

pub mod error;
pub mod render;
pub mod report;
