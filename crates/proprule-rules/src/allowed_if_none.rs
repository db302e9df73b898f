//! # Mutually Exclusive Props
//!
//! A prop that may only be given when none of its alternatives are, e.g.
//! a link takes either `href` or `onClick`.
//!
//! Checks run in this order:
//!
//! 1. prop and any alternative both specified: [`PropError::Exclusive`],
//!    on either entry point;
//! 2. required entry point, prop absent, no alternative specified:
//!    [`PropError::MissingRequired`];
//! 3. otherwise the base validator decides.
//!
//! On the required entry point a specified alternative satisfies the
//! requirement: the group as a whole is required, not this prop alone.

use proprule_core::{
    ChainedValidator, PropBag, PropError, PropResult, ValidationContext, Validator,
};

use crate::reject;

/// Validator built by [`is_allowed_if_none`].
#[derive(Debug, Clone)]
pub struct AllowedIfNone<V> {
    exclusive: Vec<String>,
    base: V,
}

impl<V> AllowedIfNone<V> {
    /// The exclusive alternatives.
    pub fn exclusive(&self) -> &[String] {
        &self.exclusive
    }
}

impl<V: Validator> AllowedIfNone<V> {
    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let is_specified = props.is_specified(prop_name);
        let specified_others: Vec<&str> = self
            .exclusive
            .iter()
            .map(String::as_str)
            .filter(|other| props.is_specified(other))
            .collect();

        if is_specified && !specified_others.is_empty() {
            return reject(
                "is_allowed_if_none",
                PropError::exclusive(prop_name, ctx, specified_others),
            );
        }
        if required && !is_specified && specified_others.is_empty() {
            return reject(
                "is_allowed_if_none",
                PropError::missing_required(prop_name, ctx),
            );
        }
        self.base.validate(props, prop_name, ctx)
    }
}

impl<V: Validator> Validator for AllowedIfNone<V> {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        self.check(false, props, prop_name, ctx)
    }
}

impl<V: Validator> ChainedValidator for AllowedIfNone<V> {
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        self.check(true, props, prop_name, ctx)
    }
}

/// Allow `prop_name` only when none of `exclusive` are specified, then run
/// `base`.
pub fn is_allowed_if_none<I, S, V>(exclusive: I, base: V) -> AllowedIfNone<V>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    V: Validator,
{
    AllowedIfNone {
        exclusive: exclusive.into_iter().map(Into::into).collect(),
        base,
    }
}
