//! bemestar-pathways
//!
//! Turns DASS-21 and IAS outcomes into treatment tracks, a combined
//! criticality, a referral decision and the next checkup date.
//! Every function is pure; the current time is always passed in.

pub mod classify;
pub mod compose;
pub mod error;
pub mod schedule;
