//! Feature showcase: a person record with hobbies, an age classifier, a
//! closed shape hierarchy and a handful of smaller showcases.
//!
//! Everything except [`Person::save_to_file`] is pure.

pub mod age;
pub mod greeting;
pub mod person;
pub mod persist;
pub mod point;
pub mod probe;
pub mod shape;

pub use age::{AgeGroup, AgeStatus, age_group_label};
pub use greeting::{Greeting, anonymous_greeting};
pub use person::{HobbyPrinter, Person, first_element};
pub use point::Point;
pub use probe::describe;
pub use shape::{PI, Shape};
