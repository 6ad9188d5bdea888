//! Rendered properties: sanitized declared values plus bound handlers.

use std::str::FromStr;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::action::Handler;
use crate::registry::FactoryError;

/// A property after binding: plain data or a callable.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Value(Value),
    Handler(Handler),
}

impl PropValue {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Handler(_) => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(handler) => Some(handler),
            Self::Value(_) => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Value(value) => crate::spec::error::json_kind(value),
            Self::Handler(_) => "handler",
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Handler> for PropValue {
    fn from(handler: Handler) -> Self {
        Self::Handler(handler)
    }
}

/// Properties forwarded to a component, in declaration order.
///
/// The typed getters return `Ok(None)` for a missing property and a
/// [`FactoryError::InvalidProp`] when the property has the wrong shape, so
/// factories can propagate with `?`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn value(&self, name: &str, expected: &'static str) -> Result<Option<&Value>, FactoryError> {
        match self.entries.get(name) {
            None | Some(PropValue::Value(Value::Null)) => Ok(None),
            Some(PropValue::Value(value)) => Ok(Some(value)),
            Some(other) => Err(FactoryError::invalid(name, expected, other.kind())),
        }
    }

    /// A string property.
    pub fn str(&self, name: &str) -> Result<Option<&str>, FactoryError> {
        match self.value(name, "string")? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(invalid(name, "string", other)),
        }
    }

    /// A required string property.
    pub fn required_str(&self, name: &str) -> Result<&str, FactoryError> {
        self.str(name)?
            .ok_or_else(|| FactoryError::MissingProp(name.to_owned()))
    }

    pub fn bool(&self, name: &str) -> Result<Option<bool>, FactoryError> {
        match self.value(name, "boolean")? {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(invalid(name, "boolean", other)),
        }
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, FactoryError> {
        match self.value(name, "number")? {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(other) => Err(invalid(name, "number", other)),
        }
    }

    /// A non-negative integer property.
    pub fn u64(&self, name: &str) -> Result<Option<u64>, FactoryError> {
        match self.value(name, "non-negative integer")? {
            None => Ok(None),
            Some(Value::Number(n)) if n.as_u64().is_some() => Ok(n.as_u64()),
            Some(other) => Err(invalid(name, "non-negative integer", other)),
        }
    }

    /// A structured object property (e.g. `heading: { title, subtitle }`).
    pub fn object(&self, name: &str) -> Result<Option<&Map<String, Value>>, FactoryError> {
        match self.value(name, "object")? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(invalid(name, "object", other)),
        }
    }

    /// A bound handler. A plain string that did not bind is a type error.
    pub fn handler(&self, name: &str) -> Result<Option<&Handler>, FactoryError> {
        match self.entries.get(name) {
            None | Some(PropValue::Value(Value::Null)) => Ok(None),
            Some(PropValue::Handler(handler)) => Ok(Some(handler)),
            Some(other) => Err(FactoryError::invalid(name, "handler", other.kind())),
        }
    }

    /// A string property parsed into an enum, falling back to `default`.
    pub fn parse_enum<T>(&self, name: &str, default: T) -> Result<T, FactoryError>
    where
        T: FromStr,
    {
        match self.str(name)? {
            None => Ok(default),
            Some(raw) => raw
                .parse()
                .map_err(|_| FactoryError::invalid(name, "a known value", raw)),
        }
    }
}

fn invalid(name: &str, expected: &'static str, found: &Value) -> FactoryError {
    FactoryError::invalid(name, expected, crate::spec::error::json_kind(found))
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
