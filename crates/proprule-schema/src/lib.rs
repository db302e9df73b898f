//! # proprule-schema: Base Prop Validators
//!
//! The validation primitives that conditional rules wrap and delegate to.
//! Every validator here is a [`ChainedValidator`](proprule_core::ChainedValidator):
//! an absent prop passes the optional entry point and fails the required one.
//!
//! ## Primitives (`types`)
//!
//! - [`any`], [`string`], [`number`], [`integer`], [`boolean`], [`array`],
//!   [`object`]: JSON type checks.
//! - [`one_of`]: the value equals one of an enumerated set.
//! - [`union`]: the value passes at least one of several validators.
//! - [`array_of`], [`object_of`]: every element / entry passes a validator.
//! - [`shape`]: named fields of an object each pass their own validator.
//!
//! ## JSON Schema (`registry`)
//!
//! [`SchemaRegistry`] loads `*.schema.json` files, resolves cross-schema
//! `$ref`s locally, and hands out [`MatchesSchema`] validators.
//!
//! ## Declarations (`declaration`)
//!
//! [`PropTypes`] pairs prop names with validators for one owner and checks
//! a whole bag at once, collecting every violation.
//!
//! ## Documents (`document`)
//!
//! Property bags and schemas can be loaded from JSON or YAML files.

pub mod declaration;
pub mod document;
pub mod error;
pub mod registry;
pub mod types;

pub use declaration::{PropTypes, ValidationViolations, Violation};
pub use document::{load_props, parse_props_json, parse_props_yaml};
pub use error::SchemaError;
pub use registry::{MatchesSchema, SchemaRegistry};
pub use types::{
    any, array, array_of, boolean, integer, number, object, object_of, one_of, shape, string, union,
    ArrayOf, ObjectOf, OneOf, Primitive, PrimitiveType, Shape, Union,
};
