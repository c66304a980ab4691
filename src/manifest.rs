use crate::error::{ManifestError, ParseError};
use crate::locate::MANIFEST_FILE;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// === Manifest schema ===
//
// Every field is optional. Empty strings and values of an unexpected JSON type
// decode to "absent" instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Entry point, shown as `Main`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub license: Option<String>,
    /// Script name to command. Sorted by name.
    #[serde(default, deserialize_with = "lenient::table")]
    pub scripts: BTreeMap<String, Value>,

    #[serde(default, deserialize_with = "lenient::repository")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub files: Vec<String>,
    #[serde(default, deserialize_with = "lenient::table")]
    pub dependencies: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "lenient::table")]
    pub dev_dependencies: BTreeMap<String, Value>,
}

/// Read and decode `<dir>/package.json`.
pub fn read_manifest(dir: &Path) -> Result<Manifest, ManifestError> {
    let path = dir.join(MANIFEST_FILE);
    let bytes = fs::read(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    parse_manifest(&bytes).map_err(|source| ManifestError::Decode { path, source })
}

/// Decode manifest bytes. The document must be a JSON object; anything
/// inside it that does not fit the schema is dropped.
pub fn parse_manifest(bytes: &[u8]) -> Result<Manifest, ParseError> {
    // editors on some platforms prepend a UTF-8 BOM
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let value: Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(ParseError::NotAnObject(json_kind(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::collections::BTreeMap;

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn table<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<String, Value>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        })
    }

    pub fn list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.is_empty() => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// `"repository": "github:user/repo"` or `{ "type": "git", "url": "..." }`.
    pub fn repository<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Object(mut map) => match map.remove("url") {
                Some(Value::String(url)) if !url.is_empty() => Some(url),
                _ => None,
            },
            _ => None,
        })
    }
}
