//! # Required-If
//!
//! Makes a prop required only while a condition over the whole bag holds,
//! e.g. "`options` is required when `kind` is `advanced`".

use std::fmt;

use proprule_core::{Condition, PropBag, PropError, PropResult, ValidationContext, Validator};

use crate::reject;

/// Validator built by [`is_required_if`].
#[derive(Clone)]
pub struct RequiredIf<C, V> {
    condition: C,
    base: V,
}

impl<C: Condition, V: Validator> Validator for RequiredIf<C, V> {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        if self.condition.test(props, prop_name, ctx.owner()) && !props.is_specified(prop_name) {
            return reject("is_required_if", PropError::missing_required(prop_name, ctx));
        }
        self.base.validate(props, prop_name, ctx)
    }
}

impl<C, V: fmt::Debug> fmt::Debug for RequiredIf<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequiredIf")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

/// Require `prop_name` whenever `condition` holds; always run `base`
/// otherwise.
///
/// There is no required entry point: the condition is the requiredness.
///
/// ```
/// use proprule_core::{PropBag, PropErrorKind, ValidationContext, Validator};
/// use proprule_rules::is_required_if;
/// use proprule_schema::string;
///
/// let rule = is_required_if(
///     |props: &PropBag, _: &str, _: &str| {
///         props.get("kind").and_then(|v| v.as_str()) == Some("advanced")
///     },
///     string(),
/// );
/// let ctx = ValidationContext::new("Search");
///
/// let advanced = PropBag::new().with("kind", "advanced");
/// let err = rule.validate(&advanced, "query", &ctx).unwrap_err();
/// assert_eq!(err.kind(), PropErrorKind::MissingRequired);
///
/// let basic = PropBag::new().with("kind", "basic");
/// assert!(rule.validate(&basic, "query", &ctx).is_ok());
/// ```
pub fn is_required_if<C, V>(condition: C, base: V) -> RequiredIf<C, V>
where
    C: Condition,
    V: Validator,
{
    RequiredIf { condition, base }
}
