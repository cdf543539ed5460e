//! User interface
//!
//! Presenters that render generated planets and census summaries.

pub mod presenters;
