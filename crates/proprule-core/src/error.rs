//! # Error Types: Structured Prop Errors
//!
//! Every validator failure is a [`PropError`]. Each variant carries the
//! prop name (its full path when nested), the owner name, and the location,
//! plus whatever the failure needs for diagnostics. The `Display` message is
//! derived from those fields.
//!
//! ## Design
//!
//! - Errors are returned, never panicked.
//! - [`PropError::kind`] is the stable discriminator. Message wording may
//!   change; kinds may not.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::{PropLocation, ValidationContext};

/// A validation failure for a single prop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropError {
    /// The prop is absent but required by an explicit required entry point,
    /// a condition, or an exclusivity rule.
    #[error("required {location} `{prop}` was not specified in `{owner}`")]
    MissingRequired {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
    },

    /// The prop is present but a predicate rejected it.
    #[error("invalid {location} `{prop}` supplied to `{owner}`")]
    InvalidValue {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
    },

    /// A type-membership check failed.
    #[error(
        "invalid {location} `{prop}` supplied to `{owner}`, expected one of type [{}]",
        .allowed.join(", ")
    )]
    InvalidType {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
        /// Type tags that would have been accepted.
        allowed: Vec<String>,
    },

    /// The prop is present together with one of its exclusive alternatives.
    #[error(
        "{location} `{prop}` in `{owner}` must be undefined because {} is already defined",
        quoted(.conflicts)
    )]
    Exclusive {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
        /// The alternatives that are present.
        conflicts: Vec<String>,
    },

    /// The prop has the wrong JSON type.
    #[error("invalid {location} `{prop}` of type `{actual}` supplied to `{owner}`, expected `{expected}`")]
    UnexpectedType {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
        /// Expected type name.
        expected: String,
        /// Actual JSON type name.
        actual: String,
    },

    /// The prop is not one of an enumerated set of values.
    #[error(
        "invalid {location} `{prop}` of value `{value}` supplied to `{owner}`, expected one of [{}]",
        .expected.join(", ")
    )]
    NotOneOf {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
        /// The rejected value, rendered as JSON.
        value: String,
        /// Accepted values, rendered as JSON.
        expected: Vec<String>,
    },

    /// The prop does not conform to a JSON Schema.
    #[error(
        "invalid {location} `{prop}` supplied to `{owner}`, schema '{schema}' rejected it: {}",
        .violations.join("; ")
    )]
    SchemaMismatch {
        /// Prop name or full path.
        prop: String,
        /// Owner (component) name.
        owner: String,
        /// Where the prop was supplied.
        location: PropLocation,
        /// Schema the value was checked against.
        schema: String,
        /// One line per schema violation.
        violations: Vec<String>,
    },
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stable, machine-readable discriminator for [`PropError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropErrorKind {
    MissingRequired,
    InvalidValue,
    InvalidType,
    Exclusive,
    UnexpectedType,
    NotOneOf,
    SchemaMismatch,
}

impl PropErrorKind {
    /// Snake-case name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequired => "missing_required",
            Self::InvalidValue => "invalid_value",
            Self::InvalidType => "invalid_type",
            Self::Exclusive => "exclusive",
            Self::UnexpectedType => "unexpected_type",
            Self::NotOneOf => "not_one_of",
            Self::SchemaMismatch => "schema_mismatch",
        }
    }
}

impl fmt::Display for PropErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PropError {
    /// The prop is absent but required.
    pub fn missing_required(prop_name: &str, ctx: &ValidationContext) -> Self {
        Self::MissingRequired {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
        }
    }

    /// A predicate rejected the prop.
    pub fn invalid_value(prop_name: &str, ctx: &ValidationContext) -> Self {
        Self::InvalidValue {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
        }
    }

    /// A type-membership check failed against `allowed`.
    pub fn invalid_type<I, S>(prop_name: &str, ctx: &ValidationContext, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidType {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The prop collides with the exclusive alternatives in `conflicts`.
    pub fn exclusive<I, S>(prop_name: &str, ctx: &ValidationContext, conflicts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclusive {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
            conflicts: conflicts.into_iter().map(Into::into).collect(),
        }
    }

    /// The prop has JSON type `actual` where `expected` was required.
    pub fn unexpected_type(
        prop_name: &str,
        ctx: &ValidationContext,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedType {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The prop's value is not among `expected`.
    pub fn not_one_of(
        prop_name: &str,
        ctx: &ValidationContext,
        value: impl Into<String>,
        expected: Vec<String>,
    ) -> Self {
        Self::NotOneOf {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
            value: value.into(),
            expected,
        }
    }

    /// The prop violated the JSON Schema `schema`.
    pub fn schema_mismatch(
        prop_name: &str,
        ctx: &ValidationContext,
        schema: impl Into<String>,
        violations: Vec<String>,
    ) -> Self {
        Self::SchemaMismatch {
            prop: ctx.display_name(prop_name).to_string(),
            owner: ctx.owner().to_string(),
            location: ctx.location(),
            schema: schema.into(),
            violations,
        }
    }

    /// Stable discriminator of this error.
    pub fn kind(&self) -> PropErrorKind {
        match self {
            Self::MissingRequired { .. } => PropErrorKind::MissingRequired,
            Self::InvalidValue { .. } => PropErrorKind::InvalidValue,
            Self::InvalidType { .. } => PropErrorKind::InvalidType,
            Self::Exclusive { .. } => PropErrorKind::Exclusive,
            Self::UnexpectedType { .. } => PropErrorKind::UnexpectedType,
            Self::NotOneOf { .. } => PropErrorKind::NotOneOf,
            Self::SchemaMismatch { .. } => PropErrorKind::SchemaMismatch,
        }
    }

    /// Prop name (or full path) the error refers to.
    pub fn prop(&self) -> &str {
        match self {
            Self::MissingRequired { prop, .. }
            | Self::InvalidValue { prop, .. }
            | Self::InvalidType { prop, .. }
            | Self::Exclusive { prop, .. }
            | Self::UnexpectedType { prop, .. }
            | Self::NotOneOf { prop, .. }
            | Self::SchemaMismatch { prop, .. } => prop,
        }
    }

    /// Owner (component) name the error refers to.
    pub fn owner(&self) -> &str {
        match self {
            Self::MissingRequired { owner, .. }
            | Self::InvalidValue { owner, .. }
            | Self::InvalidType { owner, .. }
            | Self::Exclusive { owner, .. }
            | Self::UnexpectedType { owner, .. }
            | Self::NotOneOf { owner, .. }
            | Self::SchemaMismatch { owner, .. } => owner,
        }
    }
}
