//! Named-field access for mapping-like items.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::{Map, Value};

/// An item whose values can be looked up by field name.
///
/// `field` returns `None` when the item has no such field; property lookups
/// skip those items rather than treating them as mismatches.
///
/// # Examples
///
/// ```
/// use farmbuild_collections::Fields;
///
/// struct Paddock {
///     name: String,
///     area: f64,
/// }
///
/// impl Fields for Paddock {
///     type Field = str;
///
///     fn field(&self, name: &str) -> Option<&str> {
///         match name {
///             "name" => Some(self.name.as_str()),
///             _ => None,
///         }
///     }
/// }
///
/// let p = Paddock { name: "North".into(), area: 12.5 };
/// assert_eq!(p.field("name"), Some("North"));
/// assert_eq!(p.field("area"), None);
/// assert_eq!(p.area, 12.5);
/// ```
pub trait Fields {
    type Field: ?Sized;

    fn field(&self, name: &str) -> Option<&Self::Field>;
}

/// Only objects have fields; every other JSON value reports none.
impl Fields for Value {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object()?.get(name)
    }
}

impl Fields for Map<String, Value> {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Fields for HashMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Fields for BTreeMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    type Field = T::Field;

    fn field(&self, name: &str) -> Option<&T::Field> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    type Field = T::Field;

    fn field(&self, name: &str) -> Option<&T::Field> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Rc<T> {
    type Field = T::Field;

    fn field(&self, name: &str) -> Option<&T::Field> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Arc<T> {
    type Field = T::Field;

    fn field(&self, name: &str) -> Option<&T::Field> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_fields() {
        let item = json!({"id": 1, "name": null});
        assert_eq!(item.field("id"), Some(&json!(1)));
        assert_eq!(item.field("name"), Some(&Value::Null));
        assert_eq!(item.field("area"), None);
        assert_eq!(json!([1, 2]).field("0"), None);
        assert_eq!(json!("id").field("id"), None);
    }

    #[test]
    fn test_map_fields() {
        let mut hashed = HashMap::new();
        hashed.insert("crop".to_string(), 7u32);
        assert_eq!(hashed.field("crop"), Some(&7));
        assert_eq!((&hashed).field("soil"), None);

        let ordered: BTreeMap<String, &str> = [("soil".to_string(), "loam")].into();
        assert_eq!(Arc::new(ordered).field("soil"), Some(&"loam"));
    }
}
