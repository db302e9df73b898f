//! # Documents
//!
//! Property bags and schemas stored on disk as JSON or YAML. The format is
//! chosen by file extension: `.yaml`/`.yml` is YAML, anything else JSON.

use std::path::Path;

use proprule_core::PropBag;
use serde_json::Value;

use crate::error::SchemaError;

/// Load a property bag from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns [`SchemaError::DocumentLoad`] if the file cannot be read, does
/// not parse, or is not a mapping at the top level.
pub fn load_props(path: impl AsRef<Path>) -> Result<PropBag, SchemaError> {
    let path = path.as_ref();
    let value = read_document(path)?;
    PropBag::try_from(value).map_err(|e| SchemaError::DocumentLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parse a property bag from JSON text.
pub fn parse_props_json(text: &str) -> Result<PropBag, SchemaError> {
    let value: Value = serde_json::from_str(text).map_err(|e| SchemaError::DocumentLoad {
        path: "<json>".to_string(),
        reason: format!("invalid JSON: {e}"),
    })?;
    into_bag(value, "<json>")
}

/// Parse a property bag from YAML text.
pub fn parse_props_yaml(text: &str) -> Result<PropBag, SchemaError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| SchemaError::DocumentLoad {
            path: "<yaml>".to_string(),
            reason: format!("invalid YAML: {e}"),
        })?;
    let value = yaml_to_json_value(&yaml).map_err(|reason| SchemaError::DocumentLoad {
        path: "<yaml>".to_string(),
        reason,
    })?;
    into_bag(value, "<yaml>")
}

fn into_bag(value: Value, label: &str) -> Result<PropBag, SchemaError> {
    PropBag::try_from(value).map_err(|e| SchemaError::DocumentLoad {
        path: label.to_string(),
        reason: e.to_string(),
    })
}

/// Read a JSON or YAML file into a JSON value.
pub(crate) fn read_document(path: &Path) -> Result<Value, SchemaError> {
    let load_error = |reason: String| SchemaError::DocumentLoad {
        path: path.display().to_string(),
        reason,
    };

    let content =
        std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;

    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| load_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml)
                .map_err(|e| load_error(format!("YAML-to-JSON conversion failed: {e}")))
        }
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}"))),
    }
}

/// Convert a YAML value tree into the equivalent JSON value tree.
///
/// Tags are dropped. Mapping keys must be strings, numbers or booleans.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yaml_props_convert_to_json() {
        let bag = parse_props_yaml(
            r#"
kind: advanced
count: 42
ratio: 0.5
enabled: true
children:
  - type: Tab
  - type: TabPanel
"#,
        )
        .unwrap();

        assert_eq!(bag.get("kind"), Some(&json!("advanced")));
        assert_eq!(bag.get("count"), Some(&json!(42)));
        assert_eq!(bag.get("ratio"), Some(&json!(0.5)));
        assert_eq!(bag.get("enabled"), Some(&json!(true)));
        assert_eq!(
            bag.get("children"),
            Some(&json!([{"type": "Tab"}, {"type": "TabPanel"}]))
        );
    }

    #[test]
    fn yaml_null_is_not_specified() {
        let bag = parse_props_yaml("label: ~\nsize: 3\n").unwrap();
        assert!(!bag.is_specified("label"));
        assert!(bag.is_specified("size"));
    }

    #[test]
    fn top_level_must_be_a_mapping() {
        let err = parse_props_json("[1, 2, 3]").unwrap_err();
        assert!(
            matches!(err, SchemaError::DocumentLoad { .. }),
            "expected DocumentLoad, got: {err}"
        );
        assert!(parse_props_yaml("- a\n- b\n").is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse_props_json("{\"kind\": ").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"), "got: {err}");
    }
}
