use super::argument::Argument;
use super::array::ArrayType;
use super::meta::ArgumentBuilder;
use super::object::ObjectType;
use super::scalar::{BooleanType, IntegerType, NullType, NumberType, StringType};
use super::types::{ArgumentType, Relationship};
use crate::error::RouteError;

/// A concrete argument variant: knows its fixed type and how to construct
/// itself from a fully-formed key.
///
/// Implemented by all seven variants; used by the composite helpers to build
/// correctly-typed children generically.
pub trait ArgumentVariant: ArgumentBuilder + Into<Argument> {
    /// The type this variant fixes at construction.
    const TYPE: ArgumentType;

    /// Construct the variant with an already-namespaced key.
    fn with_key(key: String) -> Self;
}

macro_rules! argument_variants {
    ($(($variant:ty, $argument_type:expr)),* $(,)?) => {
        $(
            impl ArgumentVariant for $variant {
                const TYPE: ArgumentType = $argument_type;

                fn with_key(key: String) -> Self {
                    Self::new(key)
                }
            }
        )*
    };
}

argument_variants!(
    (ArrayType, ArgumentType::Array),
    (BooleanType, ArgumentType::Boolean),
    (IntegerType, ArgumentType::Integer),
    (NumberType, ArgumentType::Number),
    (ObjectType, ArgumentType::Object),
    (StringType, ArgumentType::String),
    (NullType, ArgumentType::Null),
);

/// Capability of composite schema nodes (arrays and objects) to create
/// namespaced child arguments.
///
/// Children are keyed `"{parent_key}_{reference}"`. The typed helpers on
/// [`ArrayType`] and [`ObjectType`] go through [`child_of`](Self::child_of);
/// [`create_child`](Self::create_child) keeps a string-validated path for
/// callers that resolve type names at runtime.
pub trait ChildFactory: ArgumentBuilder {
    /// Build a child of the given type, keyed under this node.
    fn child_of(&self, reference: &str, argument_type: ArgumentType) -> Argument {
        let key = format!("{}_{}", self.get_key(), reference);
        match argument_type {
            ArgumentType::Array => ArrayType::new(key).into(),
            ArgumentType::Boolean => BooleanType::new(key).into(),
            ArgumentType::Integer => IntegerType::new(key).into(),
            ArgumentType::Number => NumberType::new(key).into(),
            ArgumentType::Object => ObjectType::new(key).into(),
            ArgumentType::String => StringType::new(key).into(),
            ArgumentType::Null => NullType::new(key).into(),
        }
    }

    /// Build a child from a runtime type name.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidArgumentType`] for names outside the seven
    /// known kinds.
    fn create_child(&self, reference: &str, type_name: &str) -> Result<Argument, RouteError> {
        Ok(self.child_of(reference, type_name.parse()?))
    }
}

impl ChildFactory for ArrayType {}
impl ChildFactory for ObjectType {}

/// Capability of composite schema nodes to tag how their alternative
/// sub-schemas relate (all / any / one of).
pub trait ElementRequirements: Sized {
    /// The current relationship tag.
    fn get_relationship(&self) -> Relationship;
    /// Mutable access to the relationship tag.
    fn relationship_mut(&mut self) -> &mut Relationship;

    /// Require every sub-schema to hold.
    fn all_of(mut self) -> Self {
        *self.relationship_mut() = Relationship::AllOf;
        self
    }

    /// Require at least one sub-schema to hold.
    fn any_of(mut self) -> Self {
        *self.relationship_mut() = Relationship::AnyOf;
        self
    }

    /// Require exactly one sub-schema to hold.
    fn one_of(mut self) -> Self {
        *self.relationship_mut() = Relationship::OneOf;
        self
    }
}

impl ElementRequirements for ArrayType {
    fn get_relationship(&self) -> Relationship {
        self.relationship
    }
    fn relationship_mut(&mut self) -> &mut Relationship {
        &mut self.relationship
    }
}

impl ElementRequirements for ObjectType {
    fn get_relationship(&self) -> Relationship {
        self.relationship
    }
    fn relationship_mut(&mut self) -> &mut Relationship {
        &mut self.relationship
    }
}
