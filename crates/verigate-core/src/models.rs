//! Domain models for VERIGATE.
//!
//! These are the core types shared across all crates.

pub mod account;
