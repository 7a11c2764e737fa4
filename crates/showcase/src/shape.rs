//! Closed shape hierarchy.
//!
//! `Shape` has exactly two variants and every `match` on it is exhaustive,
//! so a third variant is a compile error at each dispatch site.

use serde::Serialize;

/// Fixed π approximation. Area output depends on this exact value.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.1415926;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn area(&self) -> f64 {
        match *self {
            // Left to right, so the rounding matches PI * r * r exactly.
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "Circle",
            Shape::Rectangle { .. } => "Rectangle",
        }
    }
}
