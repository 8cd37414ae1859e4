use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven concrete argument kinds.
///
/// `Display`/`FromStr` use the wire names emitted by the serializer
/// (`"string"`, `"integer"`, …); unions are ordered lists of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    String,
    Boolean,
    Integer,
    Number,
    Array,
    Object,
    Null,
}

impl ArgumentType {
    /// The wire name of the type, as emitted under the `type` key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::String => "string",
            ArgumentType::Boolean => "boolean",
            ArgumentType::Integer => "integer",
            ArgumentType::Number => "number",
            ArgumentType::Array => "array",
            ArgumentType::Object => "object",
            ArgumentType::Null => "null",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgumentType {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ArgumentType::String),
            "boolean" => Ok(ArgumentType::Boolean),
            "integer" => Ok(ArgumentType::Integer),
            "number" => Ok(ArgumentType::Number),
            "array" => Ok(ArgumentType::Array),
            "object" => Ok(ArgumentType::Object),
            "null" => Ok(ArgumentType::Null),
            other => Err(RouteError::InvalidArgumentType(other.to_string())),
        }
    }
}

/// Optional value-format hint attached to an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[serde(rename = "date-time")]
    DateTime,
    Email,
    Ip,
    Url,
    Uuid,
    #[serde(rename = "hex-color")]
    HexColor,
}

impl Format {
    /// The wire name of the format, as emitted under the `format` key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::DateTime => "date-time",
            Format::Email => "email",
            Format::Ip => "ip",
            Format::Url => "url",
            Format::Uuid => "uuid",
            Format::HexColor => "hex-color",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composition rule applied when an array or object node carries multiple
/// alternative sub-schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    /// Every sub-schema must hold (the default).
    #[default]
    AllOf,
    /// At least one sub-schema must hold.
    AnyOf,
    /// Exactly one sub-schema must hold.
    OneOf,
}

impl Relationship {
    /// The wire name of the relationship, used as a wrapper key in output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::AllOf => "allOf",
            Relationship::AnyOf => "anyOf",
            Relationship::OneOf => "oneOf",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
