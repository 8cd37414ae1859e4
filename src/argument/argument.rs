use super::array::ArrayType;
use super::meta::{ArgumentBuilder, ArgumentMeta};
use super::object::ObjectType;
use super::scalar::{BooleanType, IntegerType, NullType, NumberType, StringType};
use super::types::{ArgumentType, Format};
use crate::callback::{SanitizeFn, ValidateFn};
use serde_json::Value;
use std::collections::BTreeMap;

/// Any concrete argument: the sum of the seven variants.
///
/// Built via the variant builders and converted with `From`; routes store
/// their argument maps and the serializer dispatches over this type.
#[derive(Clone)]
pub enum Argument {
    String(StringType),
    Number(NumberType),
    Integer(IntegerType),
    Boolean(BooleanType),
    Null(NullType),
    Array(ArrayType),
    Object(ObjectType),
}

impl std::fmt::Debug for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argument")
            .field("type", &self.get_type())
            .field("key", &self.get_key())
            .finish()
    }
}

impl Argument {
    pub(crate) fn meta(&self) -> &ArgumentMeta {
        match self {
            Argument::String(v) => v.meta(),
            Argument::Number(v) => v.meta(),
            Argument::Integer(v) => v.meta(),
            Argument::Boolean(v) => v.meta(),
            Argument::Null(v) => v.meta(),
            Argument::Array(v) => v.meta(),
            Argument::Object(v) => v.meta(),
        }
    }

    /// The variant's fixed type.
    #[must_use]
    pub fn get_type(&self) -> ArgumentType {
        match self {
            Argument::String(_) => ArgumentType::String,
            Argument::Number(_) => ArgumentType::Number,
            Argument::Integer(_) => ArgumentType::Integer,
            Argument::Boolean(_) => ArgumentType::Boolean,
            Argument::Null(_) => ArgumentType::Null,
            Argument::Array(_) => ArgumentType::Array,
            Argument::Object(_) => ArgumentType::Object,
        }
    }

    /// The argument key.
    #[must_use]
    pub fn get_key(&self) -> &str {
        &self.meta().key
    }

    /// The declared type set: the variant's own type plus any union additions,
    /// in insertion order.
    #[must_use]
    pub fn get_types(&self) -> &[ArgumentType] {
        &self.meta().types
    }

    /// The raw required tri-state: `None` if never set.
    #[must_use]
    pub fn get_required(&self) -> Option<bool> {
        self.meta().required
    }

    /// Whether the argument is required, defaulting to `false` when unset.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.meta().required.unwrap_or(false)
    }

    /// The default value, if one was set.
    #[must_use]
    pub fn get_default(&self) -> Option<&Value> {
        self.meta().default.as_ref()
    }

    /// The description, empty if never set.
    #[must_use]
    pub fn get_description(&self) -> &str {
        &self.meta().description
    }

    /// The expected value format, if set.
    #[must_use]
    pub fn get_format(&self) -> Option<Format> {
        self.meta().format
    }

    /// The accumulated enum constraint, `None` if never touched.
    #[must_use]
    pub fn get_expected(&self) -> Option<&[Value]> {
        self.meta().expected.as_deref()
    }

    /// The validation callback, if set.
    #[must_use]
    pub fn get_validation(&self) -> Option<&ValidateFn> {
        self.meta().validation.as_ref()
    }

    /// The sanitization callback, if set.
    #[must_use]
    pub fn get_sanitization(&self) -> Option<&SanitizeFn> {
        self.meta().sanitization.as_ref()
    }

    /// The display name, if set.
    #[must_use]
    pub fn get_name(&self) -> Option<&str> {
        self.meta().name.as_deref()
    }

    /// The free-form attribute bag.
    #[must_use]
    pub fn get_attributes(&self) -> &BTreeMap<String, Value> {
        &self.meta().attributes
    }
}

impl From<StringType> for Argument {
    fn from(argument: StringType) -> Self {
        Argument::String(argument)
    }
}

impl From<NumberType> for Argument {
    fn from(argument: NumberType) -> Self {
        Argument::Number(argument)
    }
}

impl From<IntegerType> for Argument {
    fn from(argument: IntegerType) -> Self {
        Argument::Integer(argument)
    }
}

impl From<BooleanType> for Argument {
    fn from(argument: BooleanType) -> Self {
        Argument::Boolean(argument)
    }
}

impl From<NullType> for Argument {
    fn from(argument: NullType) -> Self {
        Argument::Null(argument)
    }
}

impl From<ArrayType> for Argument {
    fn from(argument: ArrayType) -> Self {
        Argument::Array(argument)
    }
}

impl From<ObjectType> for Argument {
    fn from(argument: ObjectType) -> Self {
        Argument::Object(argument)
    }
}
