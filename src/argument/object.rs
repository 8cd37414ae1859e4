use super::argument::Argument;
use super::compose::ArgumentVariant;
use super::meta::{ArgumentBuilder, ArgumentMeta};
use super::array::ArrayType;
use super::scalar::{BooleanType, IntegerType, NullType, NumberType, StringType};
use super::types::{ArgumentType, Relationship};
use std::collections::BTreeMap;

/// Object argument: three independent maps of named child schemas plus
/// property-count constraints.
///
/// `properties`, `additional_properties` and `pattern_properties` are separate
/// namespaces, so the same name may appear in more than one. Within a map the
/// name is unique and the last write wins. Every child gets its map key as its
/// `name` attribute and a `"{parent_key}_{name}"` argument key.
#[derive(Clone)]
pub struct ObjectType {
    pub(crate) meta: ArgumentMeta,
    pub(crate) properties: BTreeMap<String, Argument>,
    pub(crate) additional_properties: BTreeMap<String, Argument>,
    pub(crate) pattern_properties: BTreeMap<String, Argument>,
    pub(crate) relationship: Relationship,
    pub(crate) min_properties: Option<u64>,
    pub(crate) max_properties: Option<u64>,
}

impl ObjectType {
    /// Create an object argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        ObjectType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::Object),
            properties: BTreeMap::new(),
            additional_properties: BTreeMap::new(),
            pattern_properties: BTreeMap::new(),
            relationship: Relationship::default(),
            min_properties: None,
            max_properties: None,
        }
    }

    /// Create and configure an object argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }

    /// Set the minimum number of properties.
    pub fn min_properties(mut self, min: u64) -> Self {
        self.min_properties = Some(min);
        self
    }

    /// The minimum property count, `None` if never set.
    pub fn get_min_properties(&self) -> Option<u64> {
        self.min_properties
    }

    /// Set the maximum number of properties.
    pub fn max_properties(mut self, max: u64) -> Self {
        self.max_properties = Some(max);
        self
    }

    /// The maximum property count, `None` if never set.
    pub fn get_max_properties(&self) -> Option<u64> {
        self.max_properties
    }

    /// The regular properties, keyed by name.
    pub fn get_properties(&self) -> &BTreeMap<String, Argument> {
        &self.properties
    }

    /// The additional properties, keyed by name.
    pub fn get_additional_properties(&self) -> &BTreeMap<String, Argument> {
        &self.additional_properties
    }

    /// The pattern properties, keyed by pattern.
    pub fn get_pattern_properties(&self) -> &BTreeMap<String, Argument> {
        &self.pattern_properties
    }

    fn typed_child<T>(&self, name: &str, config: impl FnOnce(T) -> T) -> Argument
    where
        T: ArgumentVariant,
    {
        let child = T::with_key(format!("{}_{}", self.meta.key, name));
        config(child).name(name).into()
    }
}

macro_rules! object_property_helpers {
    ($(($variant:ty, $property:ident, $additional:ident, $pattern:ident)),* $(,)?) => {
        impl ObjectType {
            $(
                #[doc = concat!("Add a regular [`", stringify!($variant), "`] property, configured by the closure.")]
                pub fn $property(mut self, name: impl Into<String>, config: impl FnOnce($variant) -> $variant) -> Self {
                    let name = name.into();
                    let child = self.typed_child(&name, config);
                    self.properties.insert(name, child);
                    self
                }

                #[doc = concat!("Add an additional [`", stringify!($variant), "`] property, configured by the closure.")]
                pub fn $additional(mut self, name: impl Into<String>, config: impl FnOnce($variant) -> $variant) -> Self {
                    let name = name.into();
                    let child = self.typed_child(&name, config);
                    self.additional_properties.insert(name, child);
                    self
                }

                #[doc = concat!("Add a pattern-keyed [`", stringify!($variant), "`] property, configured by the closure.")]
                pub fn $pattern(mut self, pattern: impl Into<String>, config: impl FnOnce($variant) -> $variant) -> Self {
                    let pattern = pattern.into();
                    let child = self.typed_child(&pattern, config);
                    self.pattern_properties.insert(pattern, child);
                    self
                }
            )*
        }
    };
}

object_property_helpers!(
    (StringType, string_property, string_additional_property, string_pattern_property),
    (NumberType, number_property, number_additional_property, number_pattern_property),
    (IntegerType, integer_property, integer_additional_property, integer_pattern_property),
    (BooleanType, boolean_property, boolean_additional_property, boolean_pattern_property),
    (ArrayType, array_property, array_additional_property, array_pattern_property),
    (ObjectType, object_property, object_additional_property, object_pattern_property),
    (NullType, null_property, null_additional_property, null_pattern_property),
);

impl ArgumentBuilder for ObjectType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}
