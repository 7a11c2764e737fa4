//! `syntaxlab-core` — shared building blocks for the demo units.
//!
//! This crate holds the error model and the process-scoped construction
//! counter. No IO happens here.

pub mod counter;
pub mod error;

pub use counter::InstanceCounter;
pub use error::{Error, Result};
