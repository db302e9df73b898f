//! # Prop Type Declarations
//!
//! A [`PropTypes`] declaration lists, for one owner, which validator
//! applies to which prop. [`PropTypes::check`] runs every declared
//! validator against a bag and collects all failures rather than stopping
//! at the first, so a caller sees every problem with a component's props
//! at once.
//!
//! Failures are also logged at `warn` level, one event per violation.

use std::fmt;

use proprule_core::{PropBag, PropError, PropErrorKind, PropLocation, ValidationContext, Validator};
use serde::{Deserialize, Serialize};

/// A single failed prop check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Prop name (or full path) that failed.
    pub prop: String,
    /// Stable kind of the failure.
    pub kind: PropErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl From<&PropError> for Violation {
    fn from(err: &PropError) -> Self {
        Self {
            prop: err.prop().to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} [{}]: {}", self.prop, self.kind, self.message)
    }
}

/// Collection of violations from one bag check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolations {
    owner: String,
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Owner whose props were checked.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The violation for `prop`, if any.
    pub fn for_prop(&self, prop: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.prop == prop)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid props for `{}`:", self.owner)?;
        for v in &self.violations {
            write!(f, "\n{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationViolations {}

/// Prop validators declared for one owner.
pub struct PropTypes {
    owner: String,
    location: PropLocation,
    props: Vec<(String, Box<dyn Validator>)>,
}

impl PropTypes {
    /// Empty declaration for `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            location: PropLocation::Prop,
            props: Vec::new(),
        }
    }

    /// Declare the validator for `name`. Props are checked in declaration order.
    pub fn prop<V: Validator + 'static>(mut self, name: impl Into<String>, validator: V) -> Self {
        self.props.push((name.into(), Box::new(validator)));
        self
    }

    /// Check values supplied at `location` instead of regular props.
    pub fn at(mut self, location: PropLocation) -> Self {
        self.location = location;
        self
    }

    /// Owner name.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Declared prop names, in order.
    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(|(name, _)| name.as_str())
    }

    /// Run every declared validator against `props`.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in declaration order.
    pub fn check(&self, props: &PropBag) -> Result<(), ValidationViolations> {
        let ctx = ValidationContext::new(self.owner.as_str()).with_location(self.location);
        self.check_with(props, &ctx)
    }

    /// Like [`check`](Self::check), with a caller-supplied context.
    pub fn check_with(
        &self,
        props: &PropBag,
        ctx: &ValidationContext,
    ) -> Result<(), ValidationViolations> {
        let violations: Vec<Violation> = self
            .props
            .iter()
            .filter_map(|(name, validator)| validator.validate(props, name, ctx).err())
            .inspect(|err| {
                tracing::warn!(
                    owner = %err.owner(),
                    prop = %err.prop(),
                    kind = %err.kind(),
                    "failed prop type: {err}"
                );
            })
            .map(|err| Violation::from(&err))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationViolations {
                owner: ctx.owner().to_string(),
                violations,
            })
        }
    }
}

impl fmt::Debug for PropTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropTypes")
            .field("owner", &self.owner)
            .field("location", &self.location)
            .field("props", &self.prop_names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{number, one_of, shape, string};
    use proprule_core::ChainedValidator;
    use serde_json::json;

    fn button() -> PropTypes {
        PropTypes::new("Button")
            .prop("label", string().required())
            .prop("size", one_of(["small", "large"]))
            .prop("tabIndex", number())
            .prop("style", shape().field("color", string()))
    }

    #[test]
    fn valid_bag_passes() {
        let bag = PropBag::new()
            .with("label", "Save")
            .with("size", "small")
            .with("style", json!({"color": "red"}));
        assert!(button().check(&bag).is_ok());
    }

    #[test]
    fn every_violation_is_collected_in_order() {
        let bag = PropBag::new()
            .with("size", "huge")
            .with("tabIndex", "1")
            .with("style", json!({"color": 3}));
        let err = button().check(&bag).unwrap_err();

        assert_eq!(err.owner(), "Button");
        let kinds: Vec<(&str, PropErrorKind)> = err
            .violations()
            .iter()
            .map(|v| (v.prop.as_str(), v.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("label", PropErrorKind::MissingRequired),
                ("size", PropErrorKind::NotOneOf),
                ("tabIndex", PropErrorKind::UnexpectedType),
                ("style.color", PropErrorKind::UnexpectedType),
            ]
        );
        assert!(err.for_prop("size").is_some());
        assert!(err.for_prop("missing").is_none());
    }

    #[test]
    fn location_appears_in_messages() {
        let types = PropTypes::new("Theme")
            .at(PropLocation::Context)
            .prop("palette", string().required());
        let err = types.check(&PropBag::new()).unwrap_err();
        assert_eq!(
            err.violations()[0].message,
            "required context `palette` was not specified in `Theme`"
        );
    }

    #[test]
    fn violations_display_and_serialize() {
        let err = button().check(&PropBag::new()).unwrap_err();
        let display = err.to_string();
        assert!(display.starts_with("invalid props for `Button`:"));
        assert!(display.contains("label [missing_required]"));

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["violations"][0]["kind"], "missing_required");
    }
}
