//! Definedness, type inspection and structural equality helpers.

use serde_json::{Map, Number, Value};

/// Compares two items for structural (by-value) equality.
pub trait Equality<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, E: Equality<T> + ?Sized> Equality<T> for &E {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }
}

/// Equality through `PartialEq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Structural;

impl<T: PartialEq + ?Sized> Equality<T> for Structural {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Deep equality for JSON values.
///
/// Differs from `Value`'s `PartialEq` in two ways:
/// - numbers compare by numeric value, so `1` equals `1.0`
/// - object members whose name starts with `$` are ignored on both sides
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEquality;

impl Equality<Value> for JsonEquality {
    fn equals(&self, a: &Value, b: &Value) -> bool {
        json_equals(a, b)
    }
}

/// Returns `true` if the value is present.
#[inline]
pub fn is_defined<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Returns `true` if the value is a JSON array.
#[inline]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Name of the JSON type of `value`, for diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn json_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_equals(a, b))
        }
        (Value::Object(a), Value::Object(b)) => objects_equal(a, b),
        _ => a == b,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.iter()
        .filter(|(key, _)| is_compared(key))
        .all(|(key, value)| b.get(key).is_some_and(|other| json_equals(value, other)))
        && b.keys()
            .filter(|key| is_compared(key))
            .all(|key| a.contains_key(key))
}

#[inline]
fn is_compared(key: &str) -> bool {
    !key.starts_with('$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structural_equality() {
        assert!(Structural.equals(&vec![1, 2], &vec![1, 2]));
        assert!(!Structural.equals("a", "b"));
        assert!(Structural.equals(&json!({"id": 1}), &json!({"id": 1})));
    }

    #[test]
    fn test_json_numbers_by_value() {
        assert!(JsonEquality.equals(&json!(1), &json!(1.0)));
        assert!(JsonEquality.equals(&json!(-3), &json!(-3)));
        assert!(!JsonEquality.equals(&json!(1), &json!(1.5)));
        assert!(!JsonEquality.equals(&json!(1), &json!("1")));
        assert!(!Structural.equals(&json!(1), &json!(1.0)));
    }

    #[test]
    fn test_json_objects() {
        let a = json!({"id": 2, "name": "b", "tags": [1, 2]});
        let b = json!({"name": "b", "tags": [1.0, 2], "id": 2});
        assert!(JsonEquality.equals(&a, &b));

        let missing = json!({"id": 2, "name": "b"});
        assert!(!JsonEquality.equals(&a, &missing));
        assert!(!JsonEquality.equals(&missing, &a));
    }

    #[test]
    fn test_json_ignores_dollar_members() {
        let a = json!({"id": 1, "$$hashKey": "object:3"});
        let b = json!({"id": 1});
        assert!(JsonEquality.equals(&a, &b));
        assert!(JsonEquality.equals(&b, &a));
        assert!(!Structural.equals(&a, &b));
    }

    #[test]
    fn test_definedness_and_type() {
        assert!(is_defined(Some(&0)));
        assert!(!is_defined::<i32>(None));
        assert!(is_defined(Some(&Value::Null)));
        assert!(is_array(&json!([])));
        assert!(!is_array(&json!({"length": 0})));
        assert_eq!(type_name(&Value::Null), "null");
        assert_eq!(type_name(&json!({})), "object");
    }
}
