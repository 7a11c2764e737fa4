//! Person record and hobby management.

use serde::Serialize;

use syntaxlab_core::InstanceCounter;

use crate::age::{AgeGroup, AgeStatus};

/// Mutable person record.
///
/// No invariants are enforced: the age may be negative and hobbies may
/// repeat. The hobby list only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: i32,
    hobbies: Vec<String>,
}

impl Person {
    pub fn new(counter: &InstanceCounter, name: impl Into<String>, age: i32) -> Self {
        let count = counter.increment();
        let person = Self {
            name: name.into(),
            age,
            hobbies: Vec::new(),
        };
        tracing::debug!(name = %person.name, age, count, "person constructed");
        person
    }

    /// Person named "Anonymous", aged 0.
    pub fn anonymous(counter: &InstanceCounter) -> Self {
        Self::new(counter, "Anonymous", 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn add_hobby(&mut self, hobby: impl Into<String>) {
        self.hobbies.push(hobby.into());
    }

    /// Append several hobbies, preserving their order.
    pub fn add_hobbies<I, S>(&mut self, hobbies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies.extend(hobbies.into_iter().map(Into::into));
    }

    /// Hobbies longer than five characters, sorted ascending.
    pub fn long_hobbies(&self) -> Vec<String> {
        let mut long: Vec<String> = self
            .hobbies
            .iter()
            .filter(|h| h.chars().count() > 5)
            .cloned()
            .collect();
        long.sort();
        long
    }

    pub fn for_each_hobby<F>(&self, f: F)
    where
        F: FnMut(&str),
    {
        self.hobbies.iter().map(String::as_str).for_each(f);
    }

    pub fn hobby_printer(&self) -> HobbyPrinter<'_> {
        HobbyPrinter { person: self }
    }

    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::classify(self.age)
    }

    pub fn status(&self) -> AgeStatus {
        AgeStatus::of(self.age)
    }

    /// Pretty JSON with `name`, `age` and `hobbies`.
    pub fn to_json(&self) -> syntaxlab_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Borrowed view that renders a person's hobbies as a bulleted list.
#[derive(Debug, Clone, Copy)]
pub struct HobbyPrinter<'a> {
    person: &'a Person,
}

impl core::fmt::Display for HobbyPrinter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}'s hobbies:", self.person.name)?;
        for hobby in &self.person.hobbies {
            write!(f, "\n- {hobby}")?;
        }
        Ok(())
    }
}

/// First element of an optional sequence; `None` when absent or empty.
pub fn first_element<T>(items: Option<&[T]>) -> Option<&T> {
    items.and_then(|slice| slice.first())
}
