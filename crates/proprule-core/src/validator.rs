//! # Validator Contract
//!
//! A [`Validator`] inspects one named prop of a [`PropBag`] and returns
//! `Ok(())` or a [`PropError`]. A [`ChainedValidator`] adds a second entry
//! point, [`ChainedValidator::validate_required`], which behaves like
//! `validate` with a "prop must be specified" check in front of everything
//! else.
//!
//! A [`Condition`] is the predicate the conditional composers are
//! parameterized with. Any `Fn(&PropBag, &str, &str) -> bool` closure
//! (bag, prop name, owner name) is a condition.

use std::sync::Arc;

use serde_json::Value;

use crate::bag::PropBag;
use crate::context::ValidationContext;
use crate::error::PropError;

/// Result of validating one prop.
pub type PropResult = Result<(), PropError>;

/// A validator for one named prop.
///
/// Implementations must be pure: the same bag, prop name and context
/// always produce the same result.
pub trait Validator: Send + Sync {
    /// Validate `prop_name` in `props`.
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult;
}

/// A validator with an additional "this prop is required" entry point.
pub trait ChainedValidator: Validator {
    /// Validate `prop_name`, failing with [`PropError::MissingRequired`]
    /// first if it is not specified.
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult;

    /// Adapt into a plain [`Validator`] that always uses the required
    /// entry point.
    fn required(self) -> Required<Self>
    where
        Self: Sized,
    {
        Required { inner: self }
    }
}

/// A chained validator pinned to its required entry point.
#[derive(Debug, Clone)]
pub struct Required<V> {
    inner: V,
}

impl<V> Required<V> {
    /// The wrapped chained validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: ChainedValidator> Validator for Required<V> {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        self.inner.validate_required(props, prop_name, ctx)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        (**self).validate(props, prop_name, ctx)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        (**self).validate(props, prop_name, ctx)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        (**self).validate(props, prop_name, ctx)
    }
}

impl<V: ChainedValidator + ?Sized> ChainedValidator for Box<V> {
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        (**self).validate_required(props, prop_name, ctx)
    }
}

impl<V: ChainedValidator + ?Sized> ChainedValidator for Arc<V> {
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        (**self).validate_required(props, prop_name, ctx)
    }
}

/// A validator backed by a closure. Build with [`from_fn`].
#[derive(Clone)]
pub struct FnValidator<F> {
    check: F,
}

impl<F> std::fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Wrap a closure `(bag, prop name, context) -> PropResult` as a validator.
pub fn from_fn<F>(check: F) -> FnValidator<F>
where
    F: Fn(&PropBag, &str, &ValidationContext) -> PropResult + Send + Sync,
{
    FnValidator { check }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&PropBag, &str, &ValidationContext) -> PropResult + Send + Sync,
{
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        (self.check)(props, prop_name, ctx)
    }
}

/// Predicate over (bag, prop name, owner name).
pub trait Condition: Send + Sync {
    /// Evaluate the predicate.
    fn test(&self, props: &PropBag, prop_name: &str, owner: &str) -> bool;
}

impl<F> Condition for F
where
    F: Fn(&PropBag, &str, &str) -> bool + Send + Sync,
{
    fn test(&self, props: &PropBag, prop_name: &str, owner: &str) -> bool {
        self(props, prop_name, owner)
    }
}

/// Shared first step of every chained validator: fetch the prop, failing
/// with [`PropError::MissingRequired`] if it is absent and `required`.
///
/// Returns `Ok(None)` for an absent, optional prop.
pub fn lookup<'a>(
    props: &'a PropBag,
    prop_name: &str,
    ctx: &ValidationContext,
    required: bool,
) -> Result<Option<&'a Value>, PropError> {
    match props.get(prop_name) {
        Some(value) => Ok(Some(value)),
        None if required => Err(PropError::missing_required(prop_name, ctx)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropErrorKind;

    struct NonEmpty;

    impl NonEmpty {
        fn check(
            &self,
            required: bool,
            props: &PropBag,
            prop_name: &str,
            ctx: &ValidationContext,
        ) -> PropResult {
            match lookup(props, prop_name, ctx, required)? {
                Some(Value::String(s)) if s.is_empty() => {
                    Err(PropError::invalid_value(prop_name, ctx))
                }
                _ => Ok(()),
            }
        }
    }

    impl Validator for NonEmpty {
        fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
            self.check(false, props, prop_name, ctx)
        }
    }

    impl ChainedValidator for NonEmpty {
        fn validate_required(
            &self,
            props: &PropBag,
            prop_name: &str,
            ctx: &ValidationContext,
        ) -> PropResult {
            self.check(true, props, prop_name, ctx)
        }
    }

    #[test]
    fn required_adapter_uses_required_entry_point() {
        let ctx = ValidationContext::new("Field");
        let bag = PropBag::new();

        assert!(NonEmpty.validate(&bag, "label", &ctx).is_ok());
        let err = NonEmpty.required().validate(&bag, "label", &ctx).unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::MissingRequired);
    }

    #[test]
    fn boxed_and_shared_validators_delegate() {
        let ctx = ValidationContext::new("Field");
        let bag = PropBag::new().with("label", "");

        let boxed: Box<dyn Validator> = Box::new(NonEmpty);
        let shared: Arc<dyn Validator> = Arc::new(NonEmpty);
        assert!(boxed.validate(&bag, "label", &ctx).is_err());
        assert!(shared.validate(&bag, "label", &ctx).is_err());
        assert!((&NonEmpty).validate(&bag, "label", &ctx).is_err());
    }

    #[test]
    fn closures_are_validators_and_conditions() {
        let ctx = ValidationContext::new("Field");
        let bag = PropBag::new().with("kind", "advanced");

        let reject_all = from_fn(|_: &PropBag, name: &str, ctx: &ValidationContext| {
            Err(PropError::invalid_value(name, ctx))
        });
        assert!(reject_all.validate(&bag, "kind", &ctx).is_err());

        let is_advanced = |props: &PropBag, _: &str, _: &str| {
            props.get("kind").and_then(Value::as_str) == Some("advanced")
        };
        assert!(is_advanced.test(&bag, "options", "Field"));
    }

    #[test]
    fn lookup_treats_null_as_absent() {
        let ctx = ValidationContext::new("Field");
        let bag = PropBag::new().with("label", Value::Null);
        assert_eq!(lookup(&bag, "label", &ctx, false), Ok(None));
        assert!(lookup(&bag, "label", &ctx, true).is_err());
    }
}
