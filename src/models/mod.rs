//! Domain models
//!
//! Planet attributes, the generated planet record, and error types.
//! Models are plain data; the planet module also owns its generation stages.

pub mod constants;
pub mod errors;
pub mod planet;
