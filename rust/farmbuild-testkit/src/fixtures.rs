//! Fixture sequences.

use anyhow::Context;
use serde_json::{Value, json};

use crate::dirs;

/// The three-item sequence `[{id: 1, name: "a"}, {id: 2, name: "b"}, {id: 3, name: "c"}]`.
pub fn paddocks() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "a"}),
        json!({"id": 2, "name": "b"}),
        json!({"id": 3, "name": "c"}),
    ]
}

/// `len` distinct objects `{id: i, name: "item-i"}`.
pub fn numbered(len: usize) -> Vec<Value> {
    (0..len)
        .map(|i| json!({"id": i, "name": format!("item-{i}")}))
        .collect()
}

/// Loads `$repo_root/test/samples/{name}.json`, which must hold a JSON array.
pub fn load_sequence(name: &str) -> anyhow::Result<Vec<Value>> {
    let path = dirs::get_sample_path(name)?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str::<Value>(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        other => anyhow::bail!("{} holds {other}, expected an array", path.display()),
    }
}
