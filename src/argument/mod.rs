//! # Argument Module
//!
//! Builders and serializer for HTTP endpoint argument schemas.
//!
//! ## Overview
//!
//! An [`Argument`] describes one request parameter: its type (or union of
//! types), whether it is required, defaults, formats, enum constraints and the
//! type-specific bounds of its variant. Seven variants cover the JSON type
//! space: [`StringType`], [`NumberType`], [`IntegerType`], [`BooleanType`],
//! [`NullType`], [`ArrayType`] and [`ObjectType`]. The composite two
//! recurse: arrays hold ordered item schemas, objects hold three independent
//! property maps.
//!
//! [`ArgumentParser`] walks a finished tree and produces an [`AttributeMap`],
//! the plain nested map a host registration call expects. Only fields that
//! were explicitly set are emitted; an explicitly set `false` or `0` is
//! emitted, an untouched field is not.
//!
//! ## Example
//!
//! ```rust
//! use restroute::argument::{Argument, ArgumentBuilder, ArgumentParser, ArrayType};
//!
//! let tags: Argument = ArrayType::on("tags", |tags| {
//!     tags.string_item(|item| item.min_length(1))
//!         .unique_items(true)
//!         .required(true)
//! })
//! .into();
//!
//! let schema = ArgumentParser::as_map(&tags);
//! assert!(schema.contains_key("tags"));
//! ```

mod argument;
mod array;
mod compose;
mod meta;
mod object;
mod parser;
mod scalar;
mod types;
mod value;


pub use argument::Argument;
pub use array::ArrayType;
pub use compose::{ArgumentVariant, ChildFactory, ElementRequirements};
pub use meta::{ArgumentBuilder, ArgumentMeta};
pub use object::ObjectType;
pub use parser::ArgumentParser;
pub use scalar::{
    BooleanType, IntegerType, NullType, NumberAttributes, NumberType, NumericConstraints,
    StringType,
};
pub use types::{ArgumentType, Format, Relationship};
pub use value::{AttributeMap, AttributeValue};
