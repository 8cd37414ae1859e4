use crate::callback::{SanitizeFn, ValidateFn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A serialized attribute map, keyed by attribute name.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// One value in a serialized argument map.
///
/// JSON-shaped, plus two variants able to carry the validate/sanitize function
/// references an argument declares; the host receives those alongside the
/// schema fields in the same map. [`to_json`](AttributeValue::to_json)
/// projects the tree down to plain JSON when only the schema is wanted.
#[derive(Clone)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
    List(Vec<AttributeValue>),
    Map(AttributeMap),
    Validate(ValidateFn),
    Sanitize(SanitizeFn),
}

fn callback_eq<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const u8, Arc::as_ptr(b) as *const u8)
}

impl AttributeValue {
    /// Borrow the inner map, if this is a [`Map`](AttributeValue::Map).
    #[must_use]
    pub fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            AttributeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the inner list, if this is a [`List`](AttributeValue::List).
    #[must_use]
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Borrow the inner string, if this is a
    /// [`String`](AttributeValue::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Project the tree to plain JSON.
    ///
    /// Callback values have no JSON form and return `None`; maps and lists
    /// drop such entries rather than fail, so the result is the pure schema
    /// part of the map.
    #[must_use]
    pub fn to_json(&self) -> Option<Value> {
        match self {
            AttributeValue::Null => Some(Value::Null),
            AttributeValue::Bool(b) => Some(Value::Bool(*b)),
            AttributeValue::Integer(i) => Some(Value::from(*i)),
            AttributeValue::Number(n) => serde_json::Number::from_f64(*n).map(Value::Number),
            AttributeValue::String(s) => Some(Value::String(s.clone())),
            AttributeValue::List(list) => Some(Value::Array(
                list.iter().filter_map(AttributeValue::to_json).collect(),
            )),
            AttributeValue::Map(map) => Some(Value::Object(
                map.iter()
                    .filter_map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                    .collect(),
            )),
            AttributeValue::Validate(_) | AttributeValue::Sanitize(_) => None,
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Null, AttributeValue::Null) => true,
            (AttributeValue::Bool(a), AttributeValue::Bool(b)) => a == b,
            (AttributeValue::Integer(a), AttributeValue::Integer(b)) => a == b,
            (AttributeValue::Number(a), AttributeValue::Number(b)) => a == b,
            (AttributeValue::String(a), AttributeValue::String(b)) => a == b,
            (AttributeValue::List(a), AttributeValue::List(b)) => a == b,
            (AttributeValue::Map(a), AttributeValue::Map(b)) => a == b,
            (AttributeValue::Validate(a), AttributeValue::Validate(b)) => callback_eq(a, b),
            (AttributeValue::Sanitize(a), AttributeValue::Sanitize(b)) => callback_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => f.write_str("Null"),
            AttributeValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            AttributeValue::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            AttributeValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            AttributeValue::String(s) => f.debug_tuple("String").field(s).finish(),
            AttributeValue::List(list) => f.debug_tuple("List").field(list).finish(),
            AttributeValue::Map(map) => f.debug_tuple("Map").field(map).finish(),
            AttributeValue::Validate(_) => f.write_str("Validate(<callback>)"),
            AttributeValue::Sanitize(_) => f.write_str("Sanitize(<callback>)"),
        }
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AttributeValue::Null,
            Value::Bool(b) => AttributeValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Integer(i),
                None => AttributeValue::Number(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => AttributeValue::String(s),
            Value::Array(list) => {
                AttributeValue::List(list.into_iter().map(AttributeValue::from).collect())
            }
            Value::Object(map) => AttributeValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, AttributeValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        AttributeValue::Integer(value as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}
