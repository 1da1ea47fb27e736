// Key-based mutation over arbitrary serde_json::Value trees.
// - `replace_key`: rebind every occurrence of a key to a new value.
// - `delete_key`: remove every occurrence of a key, keeping sibling order.
// Both walk objects and arrays at any depth with an explicit work stack, so
// document depth never turns into call depth. Neither ever fails: a key that
// does not occur is a no-op.
use serde_json::Value;

/// Replace the value bound to `key` in every object of `root`, at any depth.
///
/// The previous value is discarded whole, and the freshly inserted copy of
/// `new_value` is not searched again, so a replacement that itself contains
/// `key` is left as given. Returns the number of bindings replaced.
pub fn replace_key(root: &mut Value, key: &str, new_value: &Value) -> usize {
    let mut replaced = 0;
    let mut stack: Vec<&mut Value> = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    if k.as_str() == key {
                        *v = new_value.clone();
                        replaced += 1;
                    } else {
                        stack.push(v);
                    }
                }
            }
            Value::Array(items) => stack.extend(items.iter_mut()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
    replaced
}

/// Remove `key` from every object of `root`, at any depth.
///
/// Remaining entries keep their order. The removed subtrees are dropped
/// without being visited. Returns the number of pairs removed.
pub fn delete_key(root: &mut Value, key: &str) -> usize {
    let mut removed = 0;
    let mut stack: Vec<&mut Value> = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => {
                // swap_remove would reorder the surviving keys
                if map.shift_remove(key).is_some() {
                    removed += 1;
                }
                stack.extend(map.values_mut());
            }
            Value::Array(items) => stack.extend(items.iter_mut()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
    removed
}
