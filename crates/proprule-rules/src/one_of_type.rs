//! # Type Membership
//!
//! Restricts an element-valued prop to a set of type tags.
//!
//! The `children` prop holds zero or more elements rather than a single
//! one, so it is checked per child: every child of the flattened sequence
//! must carry an allowed tag, otherwise the whole prop fails with
//! [`PropError::InvalidType`]. Any other prop is checked with
//! `shape({ type: one_of(allowed) })`.

use proprule_core::children::{self, CHILDREN};
use proprule_core::{
    type_tag, ChainedValidator, PropBag, PropError, PropResult, ValidationContext, Validator,
};
use proprule_schema::{one_of, shape, Shape};

use crate::reject;

/// Validator built by [`is_one_of_type`].
#[derive(Debug)]
pub struct OneOfType {
    allowed: Vec<String>,
    element: Shape,
}

impl OneOfType {
    /// The allowed type tags.
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    fn is_allowed(&self, tag: &str) -> bool {
        self.allowed.iter().any(|a| a == tag)
    }

    fn check(
        &self,
        required: bool,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        if required && !props.is_specified(prop_name) {
            return reject(
                "is_one_of_type",
                PropError::missing_required(prop_name, ctx),
            );
        }

        if prop_name != CHILDREN {
            return self.element.validate(props, prop_name, ctx);
        }

        let all_allowed = props
            .get(prop_name)
            .map(children::to_array)
            .unwrap_or_default()
            .into_iter()
            .all(|child| type_tag(child).is_some_and(|tag| self.is_allowed(tag)));
        if all_allowed {
            Ok(())
        } else {
            reject(
                "is_one_of_type",
                PropError::invalid_type(prop_name, ctx, self.allowed.iter().cloned()),
            )
        }
    }
}

impl Validator for OneOfType {
    fn validate(&self, props: &PropBag, prop_name: &str, ctx: &ValidationContext) -> PropResult {
        self.check(false, props, prop_name, ctx)
    }
}

impl ChainedValidator for OneOfType {
    fn validate_required(
        &self,
        props: &PropBag,
        prop_name: &str,
        ctx: &ValidationContext,
    ) -> PropResult {
        self.check(true, props, prop_name, ctx)
    }
}

/// Accept only elements whose type tag is in `allowed`; for `children`,
/// every child must be.
pub fn is_one_of_type<I, S>(allowed: I) -> OneOfType
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    let element = shape().field("type", one_of(allowed.iter().cloned()));
    OneOfType { allowed, element }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proprule_core::PropErrorKind;
    use serde_json::json;

    fn ctx() -> ValidationContext {
        ValidationContext::new("Tabs")
    }

    fn children(tags: &[&str]) -> PropBag {
        let items: Vec<_> = tags.iter().map(|t| json!({"type": t})).collect();
        PropBag::new().with(CHILDREN, items)
    }

    #[test]
    fn every_child_allowed_passes() {
        let bag = children(&["A", "B", "A"]);
        assert!(is_one_of_type(["A", "B"])
            .validate(&bag, CHILDREN, &ctx())
            .is_ok());
    }

    #[test]
    fn one_disallowed_child_fails_naming_allowed() {
        let bag = children(&["A", "B", "A"]);
        let err = is_one_of_type(["A"])
            .validate(&bag, CHILDREN, &ctx())
            .unwrap_err();
        assert_eq!(err, PropError::invalid_type(CHILDREN, &ctx(), ["A"]));
    }

    #[test]
    fn nested_child_groups_are_flattened() {
        let bag = PropBag::new().with(
            CHILDREN,
            json!([{"type": "A"}, [{"type": "B"}, null, [{"type": "A"}]], false]),
        );
        let rule = is_one_of_type(["A", "B"]);
        assert!(rule.validate(&bag, CHILDREN, &ctx()).is_ok());

        let err = is_one_of_type(["A"])
            .validate(&bag, CHILDREN, &ctx())
            .unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::InvalidType);
    }

    #[test]
    fn single_child_and_text_child() {
        let single = PropBag::new().with(CHILDREN, json!({"type": "A"}));
        assert!(is_one_of_type(["A"])
            .validate(&single, CHILDREN, &ctx())
            .is_ok());

        let text = PropBag::new().with(CHILDREN, json!(["label", {"type": "A"}]));
        assert!(is_one_of_type(["A"])
            .validate(&text, CHILDREN, &ctx())
            .is_err());
    }

    #[test]
    fn no_children_passes_optional_fails_required() {
        let rule = is_one_of_type(["A"]);
        let bag = PropBag::new();
        assert!(rule.validate(&bag, CHILDREN, &ctx()).is_ok());
        let err = rule.validate_required(&bag, CHILDREN, &ctx()).unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::MissingRequired);

        let empty = PropBag::new().with(CHILDREN, json!([]));
        assert!(rule.validate_required(&empty, CHILDREN, &ctx()).is_ok());
    }

    #[test]
    fn other_props_delegate_to_shape() {
        let rule = is_one_of_type(["Icon", "Spinner"]);
        let ok = PropBag::new().with("adornment", json!({"type": "Icon"}));
        assert!(rule.validate(&ok, "adornment", &ctx()).is_ok());

        let bad = PropBag::new().with("adornment", json!({"type": "Button"}));
        let err = rule.validate(&bad, "adornment", &ctx()).unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::NotOneOf);
        assert_eq!(err.prop(), "adornment.type");

        let not_element = PropBag::new().with("adornment", "Icon");
        let err = rule.validate(&not_element, "adornment", &ctx()).unwrap_err();
        assert_eq!(err.kind(), PropErrorKind::UnexpectedType);
    }

    #[test]
    fn required_non_children_prop() {
        let rule = is_one_of_type(["Icon"]);
        let err = rule
            .validate_required(&PropBag::new(), "adornment", &ctx())
            .unwrap_err();
        assert_eq!(err, PropError::missing_required("adornment", &ctx()));
    }
}
