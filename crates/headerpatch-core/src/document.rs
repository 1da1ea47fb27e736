use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Read a UTF-8 file holding a single JSON value.
///
/// Nesting depth is not limited: serde_json's recursion limit is lifted and
/// `serde_stacker` grows the stack on demand while parsing.
pub fn read_document(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: serde_json::Error| Error::Parse {
        path: path.to_path_buf(),
        source,
    };
    let mut de = serde_json::Deserializer::from_str(&data);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(parse_err)?;
    de.end().map_err(parse_err)?;
    Ok(value)
}

/// Overwrite `path` with `value` pretty-printed at a 2-space indent.
pub fn write_document(path: &Path, value: &Value) -> Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, s).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
