//! Runtime type probing over `dyn Any`.

use std::any::Any;

/// Describe a value by its concrete type.
pub fn describe(value: &dyn Any) -> String {
    if let Some(s) = value.downcast_ref::<String>() {
        format!("String length: {}", s.chars().count())
    } else if let Some(s) = value.downcast_ref::<&str>() {
        format!("String length: {}", s.chars().count())
    } else if let Some(i) = value.downcast_ref::<i32>() {
        format!("Integer value: {i}")
    } else if let Some(i) = value.downcast_ref::<i64>() {
        format!("Integer value: {i}")
    } else {
        "Unknown object type".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_report_length() {
        assert_eq!(describe(&"Hello"), "String length: 5");
        assert_eq!(describe(&String::from("Hi")), "String length: 2");
    }

    #[test]
    fn integers_report_value() {
        assert_eq!(describe(&42_i32), "Integer value: 42");
        assert_eq!(describe(&-7_i64), "Integer value: -7");
    }

    #[test]
    fn other_types_are_unknown() {
        assert_eq!(describe(&3.5_f64), "Unknown object type");
        assert_eq!(describe(&vec![1, 2]), "Unknown object type");
    }
}
