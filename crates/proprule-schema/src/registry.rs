//! # Schema Registry
//!
//! Prop values with a nested structure too rich for [`shape`](crate::shape)
//! can be checked against a JSON Schema (Draft 2020-12). The registry holds
//! the schemas, resolves cross-schema `$ref`s from memory, and compiles
//! named schemas into [`MatchesSchema`] validators.
//!
//! ## Schema Resolution
//!
//! Each schema is registered under its filename and, if present, its own
//! `$id`. A `$ref` is resolved by exact URI first, then by the last path
//! segment of the URI. Unknown references resolve to the permissive schema
//! `{}`; the registry never makes network requests.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, ValidationOptions, Validator as CompiledSchema};
use proprule_core::{
    lookup, ChainedValidator, PropBag, PropError, PropResult, ValidationContext, Validator,
};
use serde_json::Value;

use crate::document::read_document;
use crate::error::SchemaError;

/// Resolves `$ref` URIs against schemas held in memory.
struct LocalSchemaRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        if let Some(value) = self.schemas_by_uri.get(filename) {
            return Ok(value.clone());
        }

        Ok(serde_json::json!({}))
    }
}

/// A set of named JSON Schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Directory the schemas were loaded from, if any.
    schema_dir: Option<PathBuf>,
    /// Map from schema name (e.g. "address.schema.json") to parsed schema.
    schemas: HashMap<String, Value>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.schema.json` and `*.schema.yaml` file in `schema_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaLoad`] if the directory cannot be read
    /// or a schema file cannot be parsed.
    pub fn from_dir(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = HashMap::new();

        let entries = std::fs::read_dir(&schema_dir).map_err(|e| SchemaError::SchemaLoad {
            schema_name: schema_dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !(name.ends_with(".schema.json")
                || name.ends_with(".schema.yaml")
                || name.ends_with(".schema.yml"))
            {
                continue;
            }
            let value = read_document(&path).map_err(|e| SchemaError::SchemaLoad {
                schema_name: name.to_string(),
                reason: e.to_string(),
            })?;
            schemas.insert(name.to_string(), value);
        }

        tracing::debug!(
            dir = %schema_dir.display(),
            count = schemas.len(),
            "loaded prop schemas"
        );

        Ok(Self {
            schema_dir: Some(schema_dir),
            schemas,
        })
    }

    /// Register a schema under `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, schema: Value) -> Option<Value> {
        self.schemas.insert(name.into(), schema)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_schema(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.insert(name, schema);
        self
    }

    /// Directory the schemas were loaded from.
    pub fn schema_dir(&self) -> Option<&Path> {
        self.schema_dir.as_deref()
    }

    /// Number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Names of all registered schemas, sorted alphabetically.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// Look up a registered schema by name.
    pub fn get_schema(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    fn build_options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);

        let mut schemas_by_uri: HashMap<String, Value> = HashMap::new();
        for (name, value) in &self.schemas {
            if let Some(id) = value.get("$id").and_then(Value::as_str) {
                schemas_by_uri.insert(id.to_string(), value.clone());
            }
            schemas_by_uri.insert(name.clone(), value.clone());
        }
        opts.with_retriever(LocalSchemaRetriever { schemas_by_uri });

        opts
    }

    /// Compile the schema `schema_name` into a prop validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaLoad`] if no schema has that name and
    /// [`SchemaError::ValidatorBuild`] if it does not compile.
    pub fn validator(&self, schema_name: &str) -> Result<MatchesSchema, SchemaError> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| SchemaError::SchemaLoad {
                schema_name: schema_name.to_string(),
                reason: match &self.schema_dir {
                    Some(dir) => format!("schema not found in {}", dir.display()),
                    None => "schema not registered".to_string(),
                },
            })?;

        let compiled = self
            .build_options()
            .build(schema)
            .map_err(|e| SchemaError::ValidatorBuild {
                schema_name: schema_name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(MatchesSchema {
            schema_name: schema_name.to_string(),
            compiled,
        })
    }
}

/// The prop value must conform to a compiled JSON Schema.
///
/// Every violation is reported, one line each, as
/// `<instance path>: <message>` (`(root)` for the value itself).
pub struct MatchesSchema {
    schema_name: String,
    compiled: CompiledSchema,
}

impl MatchesSchema {
    /// Name of the schema this validator was compiled from.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let Some(value) = lookup(props, prop_name, ctx, required)? else {
            return Ok(());
        };

        let violations: Vec<String> = self
            .compiled
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("(root): {e}")
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(PropError::schema_mismatch(
                prop_name,
                ctx,
                &self.schema_name,
                violations,
            ))
        }
    }
}

impl fmt::Debug for MatchesSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchesSchema")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl Validator for MatchesSchema {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        self.check(false, props, prop_name, ctx)
    }
}

impl ChainedValidator for MatchesSchema {
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        self.check(true, props, prop_name, ctx)
    }
}
