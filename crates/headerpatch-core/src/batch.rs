// Batch runner: one operation (replace or delete) applied across many parsed
// documents, key by key, in the order given. Progress is reported through a
// caller-supplied `notify` callback; nothing here touches the file system.
use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::mutate::{delete_key, replace_key};

pub const SEPARATOR: &str = "----------------------------";

/// What to do with every matching key in a document.
///
/// Both variants hold already-structured input: `Replace` is the parsed
/// `--headers` object, `Delete` the key names after [`split_keys`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Replace(Map<String, Value>),
    Delete(Vec<String>),
}

impl Operation {
    /// Parse the replace-mode `--headers` argument, which must be a JSON object.
    pub fn replace_from_json(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw).map_err(Error::InvalidHeaders)? {
            Value::Object(map) => Ok(Operation::Replace(map)),
            other => Err(Error::HeadersNotObject(kind_name(&other))),
        }
    }

    /// Build a delete operation from the comma-separated `--headers` argument.
    pub fn delete_from_list(raw: &str) -> Self {
        Operation::Delete(split_keys(raw))
    }

    /// Name of the command this operation runs under, as shown in progress lines.
    pub fn command_name(&self) -> &'static str {
        match self {
            Operation::Replace(_) => "replaceHeaders",
            Operation::Delete(_) => "deleteHeaders",
        }
    }

    /// Apply every key of this operation to one document, reporting progress.
    pub fn apply(&self, path: &Path, doc: &mut Value, notify: &mut impl FnMut(&str)) {
        match self {
            Operation::Replace(headers) => replace_in_document(path, doc, headers, notify),
            Operation::Delete(keys) => delete_in_document(path, doc, keys, notify),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Replace(headers) => {
                let s = serde_json::to_string(headers).map_err(|_| fmt::Error)?;
                f.write_str(&s)
            }
            Operation::Delete(keys) => f.write_str(&keys.join(",")),
        }
    }
}

/// Split the delete-mode key list on `,` exactly as given.
///
/// No trimming and no escaping: `"a,,b"` yields `["a", "", "b"]` and `" a"`
/// keeps its leading space.
pub fn split_keys(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Replace every header key, in map order, across `files` in order.
pub fn run_replace(
    files: Vec<(PathBuf, Value)>,
    headers: &Map<String, Value>,
    mut notify: impl FnMut(&str),
) -> Vec<(PathBuf, Value)> {
    files
        .into_iter()
        .map(|(path, mut doc)| {
            replace_in_document(&path, &mut doc, headers, &mut notify);
            (path, doc)
        })
        .collect()
}

/// Delete every listed key, in list order, across `files` in order.
pub fn run_delete(
    files: Vec<(PathBuf, Value)>,
    keys: &[String],
    mut notify: impl FnMut(&str),
) -> Vec<(PathBuf, Value)> {
    files
        .into_iter()
        .map(|(path, mut doc)| {
            delete_in_document(&path, &mut doc, keys, &mut notify);
            (path, doc)
        })
        .collect()
}

fn file_banner(path: &Path, action: &str, notify: &mut impl FnMut(&str)) {
    notify(SEPARATOR);
    notify(&format!("File : {}", path.display()));
    notify(action);
}

fn replace_in_document(
    path: &Path,
    doc: &mut Value,
    headers: &Map<String, Value>,
    notify: &mut impl FnMut(&str),
) {
    file_banner(path, "Replacing Headers..........", notify);
    for (header, value) in headers {
        let n = replace_key(doc, header, value);
        debug!(file = %path.display(), header = %header, occurrences = n, "replaced");
        notify(&format!("{header}....Done"));
    }
}

fn delete_in_document(
    path: &Path,
    doc: &mut Value,
    keys: &[String],
    notify: &mut impl FnMut(&str),
) {
    file_banner(path, "Deleting Keys..........", notify);
    for key in keys {
        let n = delete_key(doc, key);
        debug!(file = %path.display(), key = %key, occurrences = n, "deleted");
        notify(&format!("{key}....Done"));
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_keeps_empty_and_padded_segments() {
        assert_eq!(split_keys("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_keys(" a ,b"), vec![" a ", "b"]);
        assert_eq!(split_keys(""), vec![""]);
    }

    #[test]
    fn replace_from_json_rejects_non_objects() {
        let err = Operation::replace_from_json(r#"["a"]"#).unwrap_err();
        assert!(matches!(err, Error::HeadersNotObject("array")));
        let err = Operation::replace_from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::InvalidHeaders(_)));
    }

    #[test]
    fn display_round_trips_the_arguments() {
        let op = Operation::replace_from_json(r#"{"b":1,"a":{"x":null}}"#).unwrap();
        assert_eq!(op.to_string(), r#"{"b":1,"a":{"x":null}}"#);
        assert_eq!(op.command_name(), "replaceHeaders");
        let op = Operation::delete_from_list("x,,y");
        assert_eq!(op.to_string(), "x,,y");
        assert_eq!(op.command_name(), "deleteHeaders");
    }

    #[test]
    fn apply_reports_each_key() {
        let op = Operation::Delete(vec!["a".into(), "b".into()]);
        let mut doc = json!({"a": 1, "c": {"b": 2}});
        let mut lines = Vec::new();
        op.apply(Path::new("x.json"), &mut doc, &mut |m: &str| lines.push(m.to_string()));
        assert_eq!(doc, json!({"c": {}}));
        assert_eq!(
            lines,
            vec![SEPARATOR, "File : x.json", "Deleting Keys..........", "a....Done", "b....Done"]
        );
    }
}
