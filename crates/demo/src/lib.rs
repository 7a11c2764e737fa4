//! Demo runners behind the `entity-demo` and `showcase-demo` binaries.
//!
//! Runners write to caller-supplied sinks so they can be driven from tests
//! as well as from `main`.

pub mod config;
pub mod entity_demo;
pub mod showcase_demo;

pub use config::DemoConfig;
