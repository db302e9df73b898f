//! # Base Validators
//!
//! JSON type checks, enumerations, unions, collections and shapes. These
//! are the primitives the conditional rules delegate to.
//!
//! Every validator follows the same two-step contract:
//!
//! 1. Absent prop: `Ok(())` on the optional entry point,
//!    [`PropError::MissingRequired`] on the required one.
//! 2. Present prop: the validator's own check.
//!
//! Collection and shape validators check nested values by handing the
//! wrapped validator a bag built from the container, with a nested
//! [`ValidationContext`] so messages show the full path (`items[2]`,
//! `style.color`).

use std::fmt;

use proprule_core::{
    lookup, value_type_name, ChainedValidator, PropBag, PropError, PropResult, ValidationContext,
    Validator,
};
use serde_json::Value;

macro_rules! impl_chained {
    ($ty:ty $(, $gen:ident)*) => {
        impl<$($gen: Validator),*> Validator for $ty {
            fn validate(
                &self,
                props: &PropBag,
                prop_name: &str,
                ctx: &ValidationContext,
            ) -> PropResult {
                self.check(false, props, prop_name, ctx)
            }
        }

        impl<$($gen: Validator),*> ChainedValidator for $ty {
            fn validate_required(
                &self,
                props: &PropBag,
                prop_name: &str,
                ctx: &ValidationContext,
            ) -> PropResult {
                self.check(true, props, prop_name, ctx)
            }
        }
    };
}

// ─── Primitive type checks ──────────────────────────────────────────

/// JSON type a [`Primitive`] validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Any specified value.
    Any,
    String,
    Number,
    /// A number with no fractional part.
    Integer,
    Boolean,
    Array,
    Object,
}

impl PrimitiveType {
    /// Name used in type-mismatch messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// True if `value` is of this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|n| n.fract() == 0.0)
            }
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks the JSON type of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    expected: PrimitiveType,
}

impl Primitive {
    /// Validator accepting values of type `expected`.
    pub fn new(expected: PrimitiveType) -> Self {
        Self { expected }
    }

    /// The accepted type.
    pub fn expected(&self) -> PrimitiveType {
        self.expected
    }

    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let Some(value) = lookup(props, prop_name, ctx, required)? else {
            return Ok(());
        };
        if self.expected.matches(value) {
            Ok(())
        } else {
            Err(PropError::unexpected_type(
                prop_name,
                ctx,
                self.expected.as_str(),
                value_type_name(value),
            ))
        }
    }
}

impl_chained!(Primitive);

/// Any specified value.
pub fn any() -> Primitive {
    Primitive::new(PrimitiveType::Any)
}

/// A JSON string.
pub fn string() -> Primitive {
    Primitive::new(PrimitiveType::String)
}

/// A JSON number.
pub fn number() -> Primitive {
    Primitive::new(PrimitiveType::Number)
}

/// A JSON number with no fractional part.
pub fn integer() -> Primitive {
    Primitive::new(PrimitiveType::Integer)
}

/// A JSON boolean.
pub fn boolean() -> Primitive {
    Primitive::new(PrimitiveType::Boolean)
}

/// A JSON array.
pub fn array() -> Primitive {
    Primitive::new(PrimitiveType::Array)
}

/// A JSON object.
pub fn object() -> Primitive {
    Primitive::new(PrimitiveType::Object)
}

// ─── Enumerations and unions ────────────────────────────────────────

/// The prop must equal one of an enumerated set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    values: Vec<Value>,
}

impl OneOf {
    /// The accepted values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let Some(value) = lookup(props, prop_name, ctx, required)? else {
            return Ok(());
        };
        if self.values.contains(value) {
            Ok(())
        } else {
            Err(PropError::not_one_of(
                prop_name,
                ctx,
                value.to_string(),
                self.values.iter().map(Value::to_string).collect(),
            ))
        }
    }
}

impl_chained!(OneOf);

/// Validator accepting exactly the given values.
pub fn one_of<I, T>(values: I) -> OneOf
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    OneOf {
        values: values.into_iter().map(Into::into).collect(),
    }
}

/// The prop must pass at least one of several validators.
///
/// A union with no members rejects every specified value.
#[derive(Default)]
pub struct Union {
    members: Vec<Box<dyn Validator>>,
}

impl Union {
    /// Add an alternative.
    pub fn or<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.members.push(Box::new(validator));
        self
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        if lookup(props, prop_name, ctx, required)?.is_none() {
            return Ok(());
        }
        if self
            .members
            .iter()
            .any(|m| m.validate(props, prop_name, ctx).is_ok())
        {
            Ok(())
        } else {
            Err(PropError::invalid_value(prop_name, ctx))
        }
    }
}

impl fmt::Debug for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("members", &self.members.len())
            .finish()
    }
}

impl_chained!(Union);

/// An empty union; add alternatives with [`Union::or`].
pub fn union() -> Union {
    Union::default()
}

// ─── Collections ────────────────────────────────────────────────────

/// Every element of an array prop must pass the inner validator.
#[derive(Debug, Clone)]
pub struct ArrayOf<V> {
    inner: V,
}

impl<V: Validator> ArrayOf<V> {
    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let Some(value) = lookup(props, prop_name, ctx, required)? else {
            return Ok(());
        };
        let Value::Array(items) = value else {
            return Err(PropError::unexpected_type(
                prop_name,
                ctx,
                PrimitiveType::Array.as_str(),
                value_type_name(value),
            ));
        };
        for (i, item) in items.iter().enumerate() {
            let element = PropBag::new().with(prop_name, item.clone());
            let nested = ctx.nested(prop_name, &format!("[{i}]"));
            self.inner.validate(&element, prop_name, &nested)?;
        }
        Ok(())
    }
}

impl_chained!(ArrayOf<V>, V);

/// Array whose elements all pass `inner`.
pub fn array_of<V: Validator>(inner: V) -> ArrayOf<V> {
    ArrayOf { inner }
}

/// Every value of an object prop must pass the inner validator.
#[derive(Debug, Clone)]
pub struct ObjectOf<V> {
    inner: V,
}

impl<V: Validator> ObjectOf<V> {
    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let Some(value) = lookup(props, prop_name, ctx, required)? else {
            return Ok(());
        };
        let Value::Object(map) = value else {
            return Err(PropError::unexpected_type(
                prop_name,
                ctx,
                PrimitiveType::Object.as_str(),
                value_type_name(value),
            ));
        };
        let entries = PropBag::from(map.clone());
        for key in map.keys() {
            let nested = ctx.nested(prop_name, &format!(".{key}"));
            self.inner.validate(&entries, key, &nested)?;
        }
        Ok(())
    }
}

impl_chained!(ObjectOf<V>, V);

/// Object whose values all pass `inner`.
pub fn object_of<V: Validator>(inner: V) -> ObjectOf<V> {
    ObjectOf { inner }
}

// ─── Shapes ─────────────────────────────────────────────────────────

/// Named fields of an object prop must each pass their own validator.
///
/// Fields that are not declared are ignored. Fields are checked in
/// declaration order and the first failure is returned.
#[derive(Default)]
pub struct Shape {
    fields: Vec<(String, Box<dyn Validator>)>,
}

impl Shape {
    /// Declare a field.
    pub fn field<V: Validator + 'static>(mut self, name: impl Into<String>, validator: V) -> Self {
        self.fields.push((name.into(), Box::new(validator)));
        self
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        let Some(value) = lookup(props, prop_name, ctx, required)? else {
            return Ok(());
        };
        let Value::Object(map) = value else {
            return Err(PropError::unexpected_type(
                prop_name,
                ctx,
                PrimitiveType::Object.as_str(),
                value_type_name(value),
            ));
        };
        let inner = PropBag::from(map.clone());
        for (name, validator) in &self.fields {
            let nested = ctx.nested(prop_name, &format!(".{name}"));
            validator.validate(&inner, name, &nested)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

impl_chained!(Shape);

/// An empty shape; declare fields with [`Shape::field`].
pub fn shape() -> Shape {
    Shape::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proprule_core::PropErrorKind;
    use serde_json::json;

    fn ctx() -> ValidationContext {
        ValidationContext::new("Widget")
    }

    #[test]
    fn absent_props_pass_optional_and_fail_required() {
        let bag = PropBag::new();
        let validators: Vec<Box<dyn ChainedValidator>> = vec![
            Box::new(string()),
            Box::new(one_of(["a", "b"])),
            Box::new(union().or(string())),
            Box::new(array_of(number())),
            Box::new(object_of(number())),
            Box::new(shape().field("id", string())),
        ];
        for v in &validators {
            assert!(v.validate(&bag, "value", &ctx()).is_ok());
            let err = v.validate_required(&bag, "value", &ctx()).unwrap_err();
            assert_eq!(err.kind(), PropErrorKind::MissingRequired);
        }
    }

    #[test]
    fn primitive_type_mismatch() {
        let bag = PropBag::new().with("count", "three");
        let err = number().validate(&bag, "count", &ctx()).unwrap_err();
        assert_eq!(
            err,
            PropError::unexpected_type("count", &ctx(), "number", "string")
        );
        assert!(string().validate(&bag, "count", &ctx()).is_ok());
        assert!(any().validate(&bag, "count", &ctx()).is_ok());
    }

    #[test]
    fn integer_accepts_whole_floats() {
        let ctx = ctx();
        for v in [json!(3), json!(-7), json!(4.0), json!(u64::MAX)] {
            let bag = PropBag::new().with("n", v);
            assert!(integer().validate(&bag, "n", &ctx).is_ok());
        }
        let bag = PropBag::new().with("n", 4.5);
        assert!(integer().validate(&bag, "n", &ctx).is_err());
    }

    #[test]
    fn one_of_reports_value_and_expected() {
        let bag = PropBag::new().with("size", "huge");
        let err = one_of(["small", "large"])
            .validate(&bag, "size", &ctx())
            .unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::NotOneOf);
        assert_eq!(
            err.to_string(),
            r#"invalid prop `size` of value `"huge"` supplied to `Widget`, expected one of ["small", "large"]"#
        );
    }

    #[test]
    fn union_needs_one_passing_member() {
        let v = union().or(string()).or(number());
        assert!(v.validate(&PropBag::new().with("x", 1), "x", &ctx()).is_ok());
        assert!(v.validate(&PropBag::new().with("x", "1"), "x", &ctx()).is_ok());
        let err = v
            .validate(&PropBag::new().with("x", true), "x", &ctx())
            .unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::InvalidValue);

        assert!(union()
            .validate(&PropBag::new().with("x", 1), "x", &ctx())
            .is_err());
    }

    #[test]
    fn array_of_reports_element_path() {
        let bag = PropBag::new().with("items", json!([1, 2, "three"]));
        let err = array_of(number())
            .validate(&bag, "items", &ctx())
            .unwrap_err();
        assert_eq!(err.prop(), "items[2]");

        let bag = PropBag::new().with("items", json!({"a": 1}));
        let err = array_of(number())
            .validate(&bag, "items", &ctx())
            .unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::UnexpectedType);
    }

    #[test]
    fn array_of_required_elements() {
        let bag = PropBag::new().with("items", json!([1, null]));
        assert!(array_of(number()).validate(&bag, "items", &ctx()).is_ok());
        let err = array_of(number().required())
            .validate(&bag, "items", &ctx())
            .unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::MissingRequired);
        assert_eq!(err.prop(), "items[1]");
    }

    #[test]
    fn object_of_checks_every_value() {
        let bag = PropBag::new().with("scores", json!({"a": 1, "b": "x"}));
        let err = object_of(number())
            .validate(&bag, "scores", &ctx())
            .unwrap_err();
        assert_eq!(err.prop(), "scores.b");
    }

    #[test]
    fn shape_checks_declared_fields() {
        let v = shape()
            .field("type", one_of(["Tab"]))
            .field("label", string().required());

        let ok = PropBag::new().with("item", json!({"type": "Tab", "label": "One", "extra": 1}));
        assert!(v.validate(&ok, "item", &ctx()).is_ok());

        let missing = PropBag::new().with("item", json!({"type": "Tab"}));
        let err = v.validate(&missing, "item", &ctx()).unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::MissingRequired);
        assert_eq!(err.prop(), "item.label");

        let wrong = PropBag::new().with("item", json!("Tab"));
        let err = v.validate(&wrong, "item", &ctx()).unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::UnexpectedType);
    }

    #[test]
    fn shape_debug_lists_fields() {
        let v = shape().field("a", any()).field("b", any());
        assert_eq!(format!("{v:?}"), r#"Shape { fields: ["a", "b"] }"#);
    }
}
