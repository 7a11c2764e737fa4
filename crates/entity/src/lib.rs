//! Entity container: a named, versioned, salaried record with counted
//! constructions.

pub mod entity;

pub use entity::{Entity, Pair};
