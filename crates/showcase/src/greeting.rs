//! Greeting trait, implemented by plain closures.

pub trait Greeting {
    fn greet(&self) -> String;
}

impl<F> Greeting for F
where
    F: Fn() -> String,
{
    fn greet(&self) -> String {
        self()
    }
}

/// A greeting with no named type behind it.
pub fn anonymous_greeting() -> impl Greeting {
    || "Hello from anonymous class!".to_string()
}
