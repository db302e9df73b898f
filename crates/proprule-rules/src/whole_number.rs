//! # Whole Numbers
//!
//! [`is_valid_if`] specialized to "a number with no fractional part".

use proprule_core::PropBag;
use proprule_schema::{number, Primitive};
use serde_json::Value;

use crate::valid_if::{is_valid_if, ValidIf};

/// Validator built by [`is_whole_number`].
pub type WholeNumber = ValidIf<fn(&PropBag, &str, &str) -> bool, Primitive>;

fn has_no_fraction(props: &PropBag, prop_name: &str, _owner: &str) -> bool {
    props
        .get(prop_name)
        .and_then(Value::as_f64)
        .is_some_and(|n| n % 1.0 == 0.0)
}

/// Accept numbers with no fractional part. A present non-number fails the
/// predicate and is reported as an invalid value.
pub fn is_whole_number() -> WholeNumber {
    is_valid_if(has_no_fraction as fn(&PropBag, &str, &str) -> bool, number())
}
