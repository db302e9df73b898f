//! # Validation Context
//!
//! Everything a validator receives besides the bag and the prop name: the
//! owner (component) name, where the value came from, and, for values
//! nested inside another prop, the full dotted/indexed path used in
//! messages. Composers forward the context to the validators they wrap
//! without touching it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a validated value was supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropLocation {
    /// A regular prop.
    #[default]
    Prop,
    /// A value read from the surrounding context.
    Context,
    /// A value a component provides to its children's context.
    ChildContext,
}

impl PropLocation {
    /// Human-readable label used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prop => "prop",
            Self::Context => "context",
            Self::ChildContext => "child context",
        }
    }
}

impl fmt::Display for PropLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional context forwarded unchanged through every validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationContext {
    owner: String,
    #[serde(default)]
    location: PropLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
}

impl ValidationContext {
    /// Context for validating props of `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            location: PropLocation::Prop,
            full_name: None,
        }
    }

    /// Replace the location.
    pub fn with_location(mut self, location: PropLocation) -> Self {
        self.location = location;
        self
    }

    /// Set the full path of the value being validated.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Child context for a value nested under `prop_name`, e.g. an array
    /// element (`segment = "[2]"`) or an object field (`segment = ".id"`).
    pub fn nested(&self, prop_name: &str, segment: &str) -> Self {
        Self {
            owner: self.owner.clone(),
            location: self.location,
            full_name: Some(format!("{}{}", self.display_name(prop_name), segment)),
        }
    }

    /// Owner (component) name.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Where the value was supplied.
    pub fn location(&self) -> PropLocation {
        self.location
    }

    /// Full path, if the value is nested inside another prop.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// The name to show in messages: the full path if set, else `prop_name`.
    pub fn display_name<'a>(&'a self, prop_name: &'a str) -> &'a str {
        self.full_name.as_deref().unwrap_or(prop_name)
    }
}
