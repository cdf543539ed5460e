//! Game services
//!
//! Probability primitives shared by the generation stages, batch surveys
//! for galaxy setup, and the command-line session.

pub mod probability;
pub mod session;
pub mod survey;
