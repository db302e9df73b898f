//! # proprule-rules: Conditional Prop Validators
//!
//! Composers that wrap a base validator with a policy and return a
//! validator with the same calling contract, so rules chain freely.
//!
//! | Composer | Policy |
//! |----------|--------|
//! | [`is_required_if`] | Required when a condition holds. |
//! | [`is_allowed_if_none`] | Forbidden when an exclusive alternative is present. |
//! | [`is_one_of_type`] | Element (or every child) has an allowed type tag. |
//! | [`is_valid_if`] | A predicate must hold before the base validator runs. |
//! | [`is_whole_number`] | A number with no fractional part. |
//!
//! Every composer except [`is_required_if`] returns a
//! [`ChainedValidator`](proprule_core::ChainedValidator) with a required
//! entry point.
//!
//! ## Failure ordering
//!
//! Each composer short-circuits on its own failure and otherwise returns
//! whatever the wrapped validator returns. The only ordering rules are:
//!
//! - exclusivity is checked before requiredness in [`is_allowed_if_none`];
//! - the predicate of [`is_valid_if`] runs before the base validator.
//!
//! Own failures are logged at `debug` level with the prop, owner and kind.

pub mod allowed_if_none;
pub mod one_of_type;
pub mod required_if;
pub mod valid_if;
pub mod whole_number;

pub use allowed_if_none::{is_allowed_if_none, AllowedIfNone};
pub use one_of_type::{is_one_of_type, OneOfType};
pub use required_if::{is_required_if, RequiredIf};
pub use valid_if::{is_valid_if, ValidIf};
pub use whole_number::{is_whole_number, WholeNumber};

/// All five composers under their names, plus the traits needed to call them.
pub mod prelude {
    pub use crate::{
        is_allowed_if_none, is_one_of_type, is_required_if, is_valid_if, is_whole_number,
    };
    pub use proprule_core::{
        ChainedValidator, Condition, PropBag, PropError, PropErrorKind, PropResult,
        ValidationContext, Validator,
    };
}

/// Log a composer's own failure and return it.
pub(crate) fn reject(rule: &'static str, err: proprule_core::PropError) -> proprule_core::PropResult {
    tracing::debug!(
        rule,
        prop = %err.prop(),
        owner = %err.owner(),
        kind = %err.kind(),
        "prop rule rejected value"
    );
    Err(err)
}
