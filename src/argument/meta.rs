use super::types::{ArgumentType, Format};
use crate::callback::{SanitizeFn, ValidateFn};
use crate::host::HostRequest;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// State shared by every argument variant.
///
/// The key is immutable after construction; it becomes the top-level key of
/// the serialized map and the namespacing prefix for generated children.
/// Every optional field distinguishes "never set" (`None`, omitted from
/// output) from an explicitly set falsy value (`Some(false)`, `Some(0)`, …,
/// which still serializes).
#[derive(Clone)]
pub struct ArgumentMeta {
    pub(crate) key: String,
    pub(crate) types: Vec<ArgumentType>,
    pub(crate) required: Option<bool>,
    pub(crate) default: Option<Value>,
    pub(crate) description: String,
    pub(crate) format: Option<Format>,
    pub(crate) expected: Option<Vec<Value>>,
    pub(crate) validation: Option<ValidateFn>,
    pub(crate) sanitization: Option<SanitizeFn>,
    pub(crate) name: Option<String>,
    pub(crate) attributes: BTreeMap<String, Value>,
}

impl ArgumentMeta {
    pub(crate) fn new(key: String, argument_type: ArgumentType) -> Self {
        ArgumentMeta {
            key,
            types: vec![argument_type],
            required: None,
            default: None,
            description: String::new(),
            format: None,
            expected: None,
            validation: None,
            sanitization: None,
            name: None,
            attributes: BTreeMap::new(),
        }
    }
}

/// Fluent builder surface shared by every argument variant.
///
/// Variants implement the two accessors; everything else is provided. Setters
/// consume and return `self` so argument trees read as a single expression.
pub trait ArgumentBuilder: Sized {
    /// Shared argument state.
    fn meta(&self) -> &ArgumentMeta;
    /// Mutable shared argument state.
    fn meta_mut(&mut self) -> &mut ArgumentMeta;

    /// The argument key.
    fn get_key(&self) -> &str {
        &self.meta().key
    }

    /// The declared type set, in insertion order. A single entry is a scalar
    /// type; two or more form a union.
    fn get_types(&self) -> &[ArgumentType] {
        &self.meta().types
    }

    /// Add a further type to treat this argument as a union with.
    ///
    /// Duplicates are ignored; insertion order is preserved for output. Note
    /// that constraints of the variant are not re-interpreted for the added
    /// types.
    fn union_with_type(mut self, argument_type: ArgumentType) -> Self {
        if !self.meta().types.contains(&argument_type) {
            self.meta_mut().types.push(argument_type);
        }
        self
    }

    /// Mark the argument as required (or explicitly optional).
    ///
    /// Until this is called the tri-state stays unset and `required` is
    /// omitted from output, even though [`is_required`](Self::is_required)
    /// reports `false` either way.
    fn required(mut self, required: bool) -> Self {
        self.meta_mut().required = Some(required);
        self
    }

    /// The raw required tri-state: `None` if never set.
    fn get_required(&self) -> Option<bool> {
        self.meta().required
    }

    /// Whether the argument is required, defaulting to `false` when unset.
    fn is_required(&self) -> bool {
        self.meta().required.unwrap_or(false)
    }

    /// Set the default value.
    fn default(mut self, default: impl Into<Value>) -> Self {
        self.meta_mut().default = Some(default.into());
        self
    }

    /// The default value, if one was set.
    fn get_default(&self) -> Option<&Value> {
        self.meta().default.as_ref()
    }

    /// Whether a default value has been assigned.
    fn has_default(&self) -> bool {
        self.meta().default.is_some()
    }

    /// Set the description. Empty descriptions are omitted from output.
    fn description(mut self, description: impl Into<String>) -> Self {
        self.meta_mut().description = description.into();
        self
    }

    /// The description, empty if never set.
    fn get_description(&self) -> &str {
        &self.meta().description
    }

    /// Set the expected value format.
    fn format(mut self, format: Format) -> Self {
        self.meta_mut().format = Some(format);
        self
    }

    /// The expected value format, if set.
    fn get_format(&self) -> Option<Format> {
        self.meta().format
    }

    /// Append accepted values to the enum constraint.
    ///
    /// Repeated calls accumulate; the first call initializes the list.
    fn expected<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.meta_mut()
            .expected
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// The accumulated enum constraint, `None` if never touched.
    fn get_expected(&self) -> Option<&[Value]> {
        self.meta().expected.as_deref()
    }

    /// Attach a validation callback. Stored and carried, never invoked here.
    fn validation<F>(mut self, validation: F) -> Self
    where
        F: Fn(&Value, &HostRequest, &str) -> bool + Send + Sync + 'static,
    {
        self.meta_mut().validation = Some(Arc::new(validation));
        self
    }

    /// The validation callback, if set.
    fn get_validation(&self) -> Option<&ValidateFn> {
        self.meta().validation.as_ref()
    }

    /// Attach a sanitization callback. Stored and carried, never invoked here.
    fn sanitization<F>(mut self, sanitization: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.meta_mut().sanitization = Some(Arc::new(sanitization));
        self
    }

    /// The sanitization callback, if set.
    fn get_sanitization(&self) -> Option<&SanitizeFn> {
        self.meta().sanitization.as_ref()
    }

    /// Set the display name. Object property helpers set this to the property
    /// name or pattern automatically.
    fn name(mut self, name: impl Into<String>) -> Self {
        self.meta_mut().name = Some(name.into());
        self
    }

    /// The display name, if set.
    fn get_name(&self) -> Option<&str> {
        self.meta().name.as_deref()
    }

    /// Record a free-form attribute.
    ///
    /// The bag is an extension point for schema keywords this crate has no
    /// typed accessor for; entries are emitted before the typed fields, which
    /// win on key collision.
    fn add_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta_mut().attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a free-form attribute by key.
    fn get_attribute(&self, key: &str) -> Option<&Value> {
        self.meta().attributes.get(key)
    }

    /// The whole free-form attribute bag.
    fn get_attributes(&self) -> &BTreeMap<String, Value> {
        &self.meta().attributes
    }
}
