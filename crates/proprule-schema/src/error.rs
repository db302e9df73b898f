//! # Error Types
//!
//! Failures of the loading paths: reading schemas, reading documents, and
//! compiling schemas into validators. Validation outcomes are not errors
//! of this kind; they are [`PropError`](proprule_core::PropError)s.

use thiserror::Error;

/// Error loading schemas or documents, or compiling a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A schema file or directory could not be loaded.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoad {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// A property bag document could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path (or label) of the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The schema could not be compiled into a validator.
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuild {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// IO error reading schemas or documents.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
