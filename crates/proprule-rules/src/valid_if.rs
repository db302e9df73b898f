//! # Predicate-Gated Validity
//!
//! Runs a custom predicate in front of a base validator. The predicate is
//! a pre-filter, not a replacement: a present value must satisfy both.
//! An absent value is not judged by the predicate at all.

use std::fmt;

use proprule_core::{
    ChainedValidator, Condition, PropBag, PropError, PropResult, ValidationContext, Validator,
};

use crate::reject;

/// Validator built by [`is_valid_if`].
#[derive(Clone)]
pub struct ValidIf<C, V> {
    condition: C,
    base: V,
}

impl<C: Condition, V: Validator> ValidIf<C, V> {
    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        if !props.is_specified(prop_name) {
            if required {
                return reject("is_valid_if", PropError::missing_required(prop_name, ctx));
            }
            return self.base.validate(props, prop_name, ctx);
        }
        if !self.condition.test(props, prop_name, ctx.owner()) {
            return reject("is_valid_if", PropError::invalid_value(prop_name, ctx));
        }
        self.base.validate(props, prop_name, ctx)
    }
}

impl<C: Condition, V: Validator> Validator for ValidIf<C, V> {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        self.check(false, props, prop_name, ctx)
    }
}

impl<C: Condition, V: Validator> ChainedValidator for ValidIf<C, V> {
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        self.check(true, props, prop_name, ctx)
    }
}

impl<C, V: fmt::Debug> fmt::Debug for ValidIf<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidIf")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

/// Accept a present prop only if `condition` holds and `base` accepts it.
pub fn is_valid_if<C, V>(condition: C, base: V) -> ValidIf<C, V>
where
    C: Condition,
    V: Validator,
{
    ValidIf { condition, base }
}
