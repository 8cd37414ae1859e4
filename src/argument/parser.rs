use super::argument::Argument;
use super::array::ArrayType;
use super::compose::ElementRequirements;
use super::object::ObjectType;
use super::scalar::{IntegerType, NumberAttributes, NumberType, StringType};
use super::types::Relationship;
use super::value::{AttributeMap, AttributeValue};
use std::collections::BTreeMap;

/// Recursive serializer turning an [`Argument`] tree into the nested map a
/// host registration call expects.
///
/// A field appears in output only if its setter was ever invoked with a
/// value: explicitly set falsy values (`false`, `0`, empty string patterns) still
/// serialize, while untouched fields are omitted entirely. Type-specific
/// fields are merged last and win on key collision with free-form attributes.
pub struct ArgumentParser<'a> {
    argument: &'a Argument,
}

impl<'a> ArgumentParser<'a> {
    /// Create a parser for the given argument.
    pub fn new(argument: &'a Argument) -> Self {
        ArgumentParser { argument }
    }

    /// One-shot convenience: serialize the argument to its keyed map.
    #[must_use]
    pub fn as_map(argument: &Argument) -> AttributeMap {
        ArgumentParser::new(argument).to_map()
    }

    /// Serialize to `{ key: attribute-map }`.
    #[must_use]
    pub fn to_map(&self) -> AttributeMap {
        let mut out = AttributeMap::new();
        out.insert(
            self.argument.get_key().to_string(),
            AttributeValue::Map(self.attribute_map()),
        );
        out
    }

    /// The inner attribute map, without the argument-key wrapper.
    fn attribute_map(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();

        for (key, value) in self.argument.get_attributes() {
            attributes.insert(key.clone(), AttributeValue::from(value.clone()));
        }

        if let Some(validation) = self.argument.get_validation() {
            attributes.insert(
                "validate_callback".to_string(),
                AttributeValue::Validate(validation.clone()),
            );
        }

        if let Some(sanitization) = self.argument.get_sanitization() {
            attributes.insert(
                "sanitize_callback".to_string(),
                AttributeValue::Sanitize(sanitization.clone()),
            );
        }

        let types = self.argument.get_types();
        let type_value = if types.len() == 1 {
            AttributeValue::from(types[0].as_str())
        } else {
            AttributeValue::List(types.iter().map(|t| AttributeValue::from(t.as_str())).collect())
        };
        attributes.insert("type".to_string(), type_value);

        if let Some(required) = self.argument.get_required() {
            attributes.insert("required".to_string(), AttributeValue::Bool(required));
        }

        if !self.argument.get_description().is_empty() {
            attributes.insert(
                "description".to_string(),
                AttributeValue::from(self.argument.get_description()),
            );
        }

        if let Some(default) = self.argument.get_default() {
            attributes.insert("default".to_string(), AttributeValue::from(default.clone()));
        }

        if let Some(format) = self.argument.get_format() {
            attributes.insert("format".to_string(), AttributeValue::from(format.as_str()));
        }

        if let Some(name) = self.argument.get_name() {
            attributes.insert("name".to_string(), AttributeValue::from(name));
        }

        if let Some(expected) = self.argument.get_expected() {
            if !expected.is_empty() {
                attributes.insert(
                    "enum".to_string(),
                    AttributeValue::List(
                        expected.iter().cloned().map(AttributeValue::from).collect(),
                    ),
                );
            }
        }

        attributes.extend(self.type_attributes());
        attributes
    }

    /// Per-variant extra fields.
    fn type_attributes(&self) -> AttributeMap {
        match self.argument {
            Argument::String(argument) => Self::string_attributes(argument),
            Argument::Integer(argument) => Self::integer_attributes(argument),
            Argument::Number(argument) => Self::number_attributes(argument),
            Argument::Array(argument) => Self::array_attributes(argument),
            Argument::Object(argument) => Self::object_attributes(argument),
            Argument::Boolean(_) | Argument::Null(_) => AttributeMap::new(),
        }
    }

    fn string_attributes(argument: &StringType) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        if let Some(min) = argument.get_min_length() {
            attributes.insert("minLength".to_string(), AttributeValue::from(min));
        }
        if let Some(max) = argument.get_max_length() {
            attributes.insert("maxLength".to_string(), AttributeValue::from(max));
        }
        if let Some(pattern) = argument.get_pattern() {
            attributes.insert("pattern".to_string(), AttributeValue::from(pattern));
        }
        attributes
    }

    // The exclusive flags are gated on their bound being present: an exclusive
    // declared before any minimum/maximum stays out of the output until the
    // bound arrives.
    fn integer_attributes(argument: &IntegerType) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        if let Some(multiple_of) = argument.get_multiple_of() {
            attributes.insert("multipleOf".to_string(), AttributeValue::from(multiple_of));
        }
        if let Some(minimum) = argument.get_minimum() {
            attributes.insert("minimum".to_string(), AttributeValue::from(minimum));
            if let Some(exclusive) = argument.get_exclusive_minimum() {
                attributes.insert("exclusiveMinimum".to_string(), AttributeValue::Bool(exclusive));
            }
        }
        if let Some(maximum) = argument.get_maximum() {
            attributes.insert("maximum".to_string(), AttributeValue::from(maximum));
            if let Some(exclusive) = argument.get_exclusive_maximum() {
                attributes.insert("exclusiveMaximum".to_string(), AttributeValue::Bool(exclusive));
            }
        }
        attributes
    }

    fn number_attributes(argument: &NumberType) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        if let Some(multiple_of) = argument.get_multiple_of() {
            attributes.insert("multipleOf".to_string(), AttributeValue::from(multiple_of));
        }
        if let Some(minimum) = argument.get_minimum() {
            attributes.insert("minimum".to_string(), AttributeValue::from(minimum));
            if let Some(exclusive) = argument.get_exclusive_minimum() {
                attributes.insert("exclusiveMinimum".to_string(), AttributeValue::Bool(exclusive));
            }
        }
        if let Some(maximum) = argument.get_maximum() {
            attributes.insert("maximum".to_string(), AttributeValue::from(maximum));
            if let Some(exclusive) = argument.get_exclusive_maximum() {
                attributes.insert("exclusiveMaximum".to_string(), AttributeValue::Bool(exclusive));
            }
        }
        attributes
    }

    fn array_attributes(argument: &ArrayType) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        if let Some(items) = Self::array_items(argument) {
            attributes.insert("items".to_string(), items);
        }
        if let Some(min) = argument.get_min_items() {
            attributes.insert("minItems".to_string(), AttributeValue::from(min));
        }
        if let Some(max) = argument.get_max_items() {
            attributes.insert("maxItems".to_string(), AttributeValue::from(max));
        }
        if let Some(unique) = argument.get_unique_items() {
            attributes.insert("uniqueItems".to_string(), AttributeValue::Bool(unique));
        }
        attributes
    }

    /// Serialize an array's items.
    ///
    /// A single item inlines its own attribute map directly under `items`;
    /// multiple items serialize as an ordered list, wrapped in a
    /// `{ relationship: list }` map unless the relationship is the default
    /// `allOf`.
    fn array_items(argument: &ArrayType) -> Option<AttributeValue> {
        let items = argument.get_items();
        match items {
            [] => None,
            [single] => Some(AttributeValue::Map(
                ArgumentParser::new(single).attribute_map(),
            )),
            many => {
                let list = AttributeValue::List(
                    many.iter()
                        .map(|item| AttributeValue::Map(ArgumentParser::new(item).attribute_map()))
                        .collect(),
                );
                match argument.get_relationship() {
                    Relationship::AllOf => Some(list),
                    relationship => {
                        let mut wrapper = AttributeMap::new();
                        wrapper.insert(relationship.as_str().to_string(), list);
                        Some(AttributeValue::Map(wrapper))
                    }
                }
            }
        }
    }

    fn object_attributes(argument: &ObjectType) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        if !argument.get_properties().is_empty() {
            attributes.insert(
                "properties".to_string(),
                Self::property_map(argument.get_properties()),
            );
        }
        if !argument.get_additional_properties().is_empty() {
            attributes.insert(
                "additionalProperties".to_string(),
                Self::property_map(argument.get_additional_properties()),
            );
        }
        if !argument.get_pattern_properties().is_empty() {
            attributes.insert(
                "patternProperties".to_string(),
                Self::property_map(argument.get_pattern_properties()),
            );
        }
        if let Some(min) = argument.get_min_properties() {
            attributes.insert("minProperties".to_string(), AttributeValue::from(min));
        }
        if let Some(max) = argument.get_max_properties() {
            attributes.insert("maxProperties".to_string(), AttributeValue::from(max));
        }
        attributes
    }

    /// Serialize one of an object's property maps, keyed by property name or
    /// pattern rather than by child argument key.
    fn property_map(properties: &BTreeMap<String, Argument>) -> AttributeValue {
        AttributeValue::Map(
            properties
                .iter()
                .map(|(name, child)| {
                    (
                        name.clone(),
                        AttributeValue::Map(ArgumentParser::new(child).attribute_map()),
                    )
                })
                .collect(),
        )
    }
}
