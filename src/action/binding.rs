//! Binding step: replace action names in declared properties with handlers.

use serde_json::Value;

use super::table::HandlerTable;
use super::Handler;
use crate::component::{PropValue, Props};
use crate::spec::{Properties, SpecPath};

/// A reference that named no handler and was replaced by a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Property key (e.g. `onClick`).
    pub prop: String,
    /// Action name that was not found.
    pub action: String,
}

/// Result of binding one node's properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binding {
    pub props: Props,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Whether a property key names an event slot: `on` followed by an
/// uppercase letter, as in `onClick` or `onOpenChange`.
pub fn is_action_key(key: &str) -> bool {
    key.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Bind handlers into a node's properties.
///
/// - A string value equal to a registered handler name becomes that handler.
/// - A string value under an action key that names no handler becomes an
///   inert no-op and is reported as unresolved.
/// - Everything else passes through unchanged.
///
/// Handler names share a namespace with every other string value: with a
/// handler named `row` registered, `Stack`'s `direction: "row"` binds too and
/// the factory rejects it. Pick action names that no enum value uses.
pub fn bind(properties: &Properties, handlers: &HandlerTable, path: &SpecPath) -> Binding {
    let mut binding = Binding::default();
    for (key, value) in properties {
        let bound = match value {
            Value::String(name) => match handlers.get(name, path) {
                Some(handler) => PropValue::Handler(handler),
                None if is_action_key(key) => {
                    binding.unresolved.push(UnresolvedReference {
                        prop: key.clone(),
                        action: name.clone(),
                    });
                    PropValue::Handler(Handler::noop(name.as_str(), path.clone()))
                }
                None => PropValue::Value(value.clone()),
            },
            other => PropValue::Value(other.clone()),
        };
        binding.props.insert(key.clone(), bound);
    }
    binding
}

/// Forward properties without looking up any handlers.
///
/// String values under action keys still become inert no-ops so components
/// always receive something invocable.
pub fn passthrough(properties: &Properties, path: &SpecPath) -> Props {
    properties
        .iter()
        .map(|(key, value)| {
            let prop = match value {
                Value::String(name) if is_action_key(key) => {
                    PropValue::Handler(Handler::noop(name.as_str(), path.clone()))
                }
                other => PropValue::Value(other.clone()),
            };
            (key.clone(), prop)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties(value: Value) -> Properties {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn action_keys() {
        assert!(is_action_key("onClick"));
        assert!(is_action_key("onOpenChange"));
        assert!(!is_action_key("on"));
        assert!(!is_action_key("online"));
        assert!(!is_action_key("variant"));
    }

    #[test]
    fn registered_name_becomes_handler() {
        let table = HandlerTable::new().with("save", |_| {});
        let binding = bind(&properties(json!({ "onClick": "save" })), &table, &SpecPath::root());
        let handler = binding.props.get("onClick").unwrap().as_handler().unwrap();
        assert!(!handler.is_noop());
        assert!(handler.same_callback(&table.get("save", &SpecPath::root()).unwrap()));
        assert!(binding.unresolved.is_empty());
    }

    #[test]
    fn missing_action_becomes_noop() {
        let binding = bind(
            &properties(json!({ "onClick": "missing" })),
            &HandlerTable::new(),
            &SpecPath::root(),
        );
        let handler = binding.props.get("onClick").unwrap().as_handler().unwrap();
        assert!(handler.is_noop());
        handler.invoke(Value::Null);
        assert_eq!(
            binding.unresolved,
            vec![UnresolvedReference {
                prop: "onClick".into(),
                action: "missing".into()
            }]
        );
    }

    #[test]
    fn plain_strings_pass_through() {
        let table = HandlerTable::new().with("save", |_| {});
        let binding = bind(
            &properties(json!({ "variant": "destructive", "gap": 2, "className": "mt-4" })),
            &table,
            &SpecPath::root(),
        );
        assert_eq!(binding.props.get("variant"), Some(&PropValue::Value(json!("destructive"))));
        assert_eq!(binding.props.get("gap"), Some(&PropValue::Value(json!(2))));
        assert!(binding.unresolved.is_empty());
    }

    #[test]
    fn any_key_matching_a_handler_binds() {
        let table = HandlerTable::new().with("refresh", |_| {});
        let binding = bind(&properties(json!({ "action": "refresh" })), &table, &SpecPath::root());
        assert!(binding.props.get("action").unwrap().as_handler().is_some());
    }

    #[test]
    fn non_string_action_value_passes_through() {
        let binding = bind(&properties(json!({ "onClick": null })), &HandlerTable::new(), &SpecPath::root());
        assert_eq!(binding.props.get("onClick"), Some(&PropValue::Value(Value::Null)));
    }

    #[test]
    fn preserves_order() {
        let binding = bind(
            &properties(json!({ "b": 1, "a": 2, "onClick": "x" })),
            &HandlerTable::new(),
            &SpecPath::root(),
        );
        assert_eq!(binding.props.names().collect::<Vec<_>>(), vec!["b", "a", "onClick"]);
    }

    #[test]
    fn passthrough_keeps_plain_strings() {
        let props = passthrough(&properties(json!({ "variant": "save" })), &SpecPath::root());
        assert_eq!(props.get("variant"), Some(&PropValue::Value(json!("save"))));
    }

    #[test]
    fn passthrough_makes_action_keys_noops() {
        let props = passthrough(
            &properties(json!({ "onClick": "save", "onOpenChange": 3 })),
            &SpecPath::root(),
        );
        let handler = props.get("onClick").unwrap().as_handler().unwrap();
        assert!(handler.is_noop());
        assert_eq!(handler.name(), "save");
        handler.invoke(Value::Null);
        assert_eq!(props.get("onOpenChange"), Some(&PropValue::Value(json!(3))));
    }
}
