//! # Child Enumeration
//!
//! The `children` prop holds zero or more nested elements rather than a
//! single value. [`to_array`] turns whatever was supplied into a flat,
//! ordered sequence of child descriptors:
//!
//! - nested arrays (fragments, mapped lists) are flattened in order;
//! - `null` and booleans are empty slots and are dropped;
//! - any other single value is a one-element sequence.
//!
//! A child's type tag is its string `"type"` attribute. Text nodes and
//! other non-element children have no tag.

use serde_json::Value;

/// Name of the prop that carries child elements.
pub const CHILDREN: &str = "children";

/// Flatten a `children` value into an ordered sequence of children.
pub fn to_array(value: &Value) -> Vec<&Value> {
    let mut out = Vec::new();
    collect(value, &mut out);
    out
}

fn collect<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Null | Value::Bool(_) => {}
        Value::Array(items) => {
            for item in items {
                collect(item, out);
            }
        }
        other => out.push(other),
    }
}

/// The type tag of a child descriptor, if it has one.
pub fn type_tag(child: &Value) -> Option<&str> {
    child.get("type").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_child_is_one_element() {
        let child = json!({"type": "Tab"});
        let children = to_array(&child);
        assert_eq!(children.len(), 1);
        assert_eq!(type_tag(children[0]), Some("Tab"));
    }

    #[test]
    fn nested_groups_flatten_in_order() {
        let value = json!([
            {"type": "A", "key": 1},
            [{"type": "B", "key": 2}, [{"type": "A", "key": 3}]],
            {"type": "B", "key": 4}
        ]);
        let keys: Vec<i64> = to_array(&value)
            .into_iter()
            .filter_map(|c| c.get("key").and_then(Value::as_i64))
            .collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_slots_are_dropped() {
        let value = json!([null, false, {"type": "A"}, true, []]);
        let children = to_array(&value);
        assert_eq!(children.len(), 1);
        assert!(to_array(&Value::Null).is_empty());
    }

    #[test]
    fn text_children_have_no_tag() {
        let value = json!(["hello", 42, {"type": "A"}]);
        let tags: Vec<Option<&str>> = to_array(&value).into_iter().map(type_tag).collect();
        assert_eq!(tags, vec![None, None, Some("A")]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for children trees: tagged elements, empty slots, and
    /// arbitrarily nested groups.
    fn children_tree() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            "[A-Z][a-z]{0,6}".prop_map(|tag| serde_json::json!({"type": tag})),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
        ];
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(Value::Array)
        })
    }

    fn count_elements(value: &Value) -> usize {
        match value {
            Value::Array(items) => items.iter().map(count_elements).sum(),
            Value::Object(_) => 1,
            _ => 0,
        }
    }

    proptest! {
        /// Flattening keeps every element and never yields a group or an empty slot.
        #[test]
        fn flatten_keeps_every_element(tree in children_tree()) {
            let children = to_array(&tree);
            prop_assert_eq!(children.len(), count_elements(&tree));
            prop_assert!(children.iter().all(|c| type_tag(c).is_some()));
        }
    }
}
