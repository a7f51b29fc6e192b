//! Recursive JSON merge.

use serde_json::Value;

/// Merge `overlay` into `base`; `overlay` wins.
///
/// Objects merge key by key, recursively. Any other value in `overlay`
/// replaces the value in `base`.
pub fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(b), Value::Object(o)) => {
            for (key, value) in o {
                match b.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        b.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
