//! Structured-data loading.
//!
//! Files with a `.json` extension are parsed strictly as JSON. Everything else
//! goes through the YAML parser, which accepts JSON documents as well and
//! resolves `<<` merge keys.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FillError, FillResult};

/// Variables available to a template, keyed by name.
pub type DataMap = Map<String, Value>;

/// Load a data file into a mapping.
pub fn load_data(path: &Path) -> FillResult<DataMap> {
    if !path.is_file() {
        return Err(FillError::DataFileMissing(path.to_path_buf()));
    }

    debug!("Loading data from {:?}", path);
    let content = fs::read_to_string(path).map_err(|source| FillError::DataRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(DataMap::new());
    }

    let value: Value = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        let mut yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        yaml.apply_merge()?;
        serde_yaml::from_value(yaml)?
    };

    match value {
        Value::Object(map) => {
            debug!("Loaded {} top-level variable(s)", map.len());
            Ok(map)
        }
        // `~` or `null` on its own
        Value::Null => Ok(DataMap::new()),
        other => Err(FillError::DataNotMapping {
            path: path.to_path_buf(),
            found: kind_name(&other),
        }),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
