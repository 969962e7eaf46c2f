//! VERIGATE Core — domain model, repository and notifier seams, and the
//! shared error type.

pub mod error;
pub mod models;
pub mod notifier;
pub mod repository;

pub use error::{VerigateError, VerigateResult};
