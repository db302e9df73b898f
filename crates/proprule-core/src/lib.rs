//! # proprule-core: Foundational Types for Prop Validation
//!
//! This crate defines the calling contract shared by every validator in the
//! workspace. The base validators in `proprule-schema` and the conditional
//! composers in `proprule-rules` both build on it; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **One validator signature.** A validator inspects one named prop of a
//!    [`PropBag`] and returns `Ok(())` or a [`PropError`]. Validators never
//!    panic and never mutate the bag, so any validator can wrap any other.
//!
//! 2. **Explicit presence query.** [`PropBag::is_specified`] is the only
//!    notion of "this prop was given". A key bound to JSON `null` is absent.
//!
//! 3. **Structured errors.** [`PropError`] is a tagged enum with a stable
//!    [`PropErrorKind`] discriminator. Consumers branch on the kind, never
//!    on message text.
//!
//! 4. **Two entry points, one value.** A [`ChainedValidator`] exposes
//!    `validate` and `validate_required` over the same configuration.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `proprule-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bag;
pub mod children;
pub mod context;
pub mod error;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use bag::{value_type_name, BagError, PropBag};
pub use children::{type_tag, CHILDREN};
pub use context::{PropLocation, ValidationContext};
pub use error::{PropError, PropErrorKind};
pub use validator::{
    from_fn, lookup, ChainedValidator, Condition, FnValidator, PropResult, Required, Validator,
};
