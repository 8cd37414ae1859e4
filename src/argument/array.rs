use super::argument::Argument;
use super::compose::ArgumentVariant;
use super::meta::{ArgumentBuilder, ArgumentMeta};
use super::object::ObjectType;
use super::scalar::{BooleanType, IntegerType, NullType, NumberType, StringType};
use super::types::{ArgumentType, Relationship};

/// Array argument: an ordered list of item schemas plus size/uniqueness
/// constraints.
///
/// Items added through the typed helpers are auto-keyed
/// `"{parent_key}_item_type_{n}"` where `n` is the insertion index. How
/// multiple items serialize is governed by the relationship tag (see
/// [`ElementRequirements`](super::ElementRequirements)).
#[derive(Clone)]
pub struct ArrayType {
    pub(crate) meta: ArgumentMeta,
    pub(crate) items: Vec<Argument>,
    pub(crate) relationship: Relationship,
    pub(crate) min_items: Option<u64>,
    pub(crate) max_items: Option<u64>,
    pub(crate) unique_items: Option<bool>,
}

impl ArrayType {
    /// Create an array argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        ArrayType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::Array),
            items: Vec::new(),
            relationship: Relationship::default(),
            min_items: None,
            max_items: None,
            unique_items: None,
        }
    }

    /// Create and configure an array argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }

    /// Append a pre-built item schema.
    pub fn item(mut self, item: impl Into<Argument>) -> Self {
        self.items.push(item.into());
        self
    }

    fn push_item<T>(self, config: impl FnOnce(T) -> T) -> Self
    where
        T: ArgumentVariant,
    {
        let key = format!("{}_item_type_{}", self.meta.key, self.items.len());
        let item = config(T::with_key(key));
        self.item(item)
    }

    /// The item schemas, in insertion order.
    pub fn get_items(&self) -> &[Argument] {
        &self.items
    }

    /// Whether any item schemas were added.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of item schemas.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Set the minimum number of elements.
    ///
    /// No `min <= max` check happens here; stated bounds are recorded as-is
    /// and left to the host's validator.
    pub fn min_items(mut self, min: u64) -> Self {
        self.min_items = Some(min);
        self
    }

    /// The minimum element count, `None` if never set.
    pub fn get_min_items(&self) -> Option<u64> {
        self.min_items
    }

    /// Set the maximum number of elements.
    pub fn max_items(mut self, max: u64) -> Self {
        self.max_items = Some(max);
        self
    }

    /// The maximum element count, `None` if never set.
    pub fn get_max_items(&self) -> Option<u64> {
        self.max_items
    }

    /// Require elements to be unique.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = Some(unique);
        self
    }

    /// The uniqueness flag, `None` if never set.
    pub fn get_unique_items(&self) -> Option<bool> {
        self.unique_items
    }
}

macro_rules! array_item_helpers {
    ($(($method:ident, $variant:ty)),* $(,)?) => {
        impl ArrayType {
            $(
                #[doc = concat!("Append an auto-keyed [`", stringify!($variant), "`] item, configured by the closure.")]
                pub fn $method(self, config: impl FnOnce($variant) -> $variant) -> Self {
                    self.push_item(config)
                }
            )*
        }
    };
}

array_item_helpers!(
    (string_item, StringType),
    (number_item, NumberType),
    (integer_item, IntegerType),
    (boolean_item, BooleanType),
    (array_item, ArrayType),
    (null_item, NullType),
    (object_item, ObjectType),
);

impl ArgumentBuilder for ArrayType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}
