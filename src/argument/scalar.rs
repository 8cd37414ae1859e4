use super::meta::{ArgumentBuilder, ArgumentMeta};
use super::types::ArgumentType;

/// Bound modifiers shared between the two numeric variants.
///
/// `exclusive_minimum`/`exclusive_maximum` are recorded whenever called, but
/// the serializer only emits them once the matching bound is also set, so an
/// "exclusive" declared ahead of its bound never produces a partial schema.
#[derive(Clone, Default)]
pub struct NumericConstraints {
    pub(crate) exclusive_minimum: Option<bool>,
    pub(crate) exclusive_maximum: Option<bool>,
    pub(crate) multiple_of: Option<f64>,
}

/// Shared fluent surface for [`IntegerType`] and [`NumberType`].
pub trait NumberAttributes: Sized {
    /// Shared numeric modifiers.
    fn numeric(&self) -> &NumericConstraints;
    /// Mutable shared numeric modifiers.
    fn numeric_mut(&mut self) -> &mut NumericConstraints;

    /// Treat the minimum bound as exclusive.
    fn exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.numeric_mut().exclusive_minimum = Some(exclusive);
        self
    }

    /// The exclusive-minimum flag, `None` if never set.
    fn get_exclusive_minimum(&self) -> Option<bool> {
        self.numeric().exclusive_minimum
    }

    /// Treat the maximum bound as exclusive.
    fn exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.numeric_mut().exclusive_maximum = Some(exclusive);
        self
    }

    /// The exclusive-maximum flag, `None` if never set.
    fn get_exclusive_maximum(&self) -> Option<bool> {
        self.numeric().exclusive_maximum
    }

    /// Require the value to be a multiple of the given factor.
    fn multiple_of(mut self, multiple_of: f64) -> Self {
        self.numeric_mut().multiple_of = Some(multiple_of);
        self
    }

    /// The multiple-of factor, `None` if never set.
    fn get_multiple_of(&self) -> Option<f64> {
        self.numeric().multiple_of
    }
}

/// String argument with optional length and pattern constraints.
#[derive(Clone)]
pub struct StringType {
    pub(crate) meta: ArgumentMeta,
    pub(crate) min_length: Option<u64>,
    pub(crate) max_length: Option<u64>,
    pub(crate) pattern: Option<String>,
}

impl StringType {
    /// Create a string argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        StringType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::String),
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    /// Create and configure a string argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }

    /// Set the minimum length of the value.
    pub fn min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    /// The minimum length, `None` if never set.
    pub fn get_min_length(&self) -> Option<u64> {
        self.min_length
    }

    /// Set the maximum length of the value.
    pub fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    /// The maximum length, `None` if never set.
    pub fn get_max_length(&self) -> Option<u64> {
        self.max_length
    }

    /// Set the pattern the value must match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// The pattern, `None` if never set.
    pub fn get_pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}

impl ArgumentBuilder for StringType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}

/// Integer argument. Bounds are stored as integers.
#[derive(Clone)]
pub struct IntegerType {
    pub(crate) meta: ArgumentMeta,
    pub(crate) minimum: Option<i64>,
    pub(crate) maximum: Option<i64>,
    pub(crate) numeric: NumericConstraints,
}

impl IntegerType {
    /// Create an integer argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        IntegerType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::Integer),
            minimum: None,
            maximum: None,
            numeric: NumericConstraints::default(),
        }
    }

    /// Create and configure an integer argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }

    /// Set the minimum value.
    pub fn minimum(mut self, min: i64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// The minimum value, `None` if never set.
    pub fn get_minimum(&self) -> Option<i64> {
        self.minimum
    }

    /// Set the maximum value.
    pub fn maximum(mut self, max: i64) -> Self {
        self.maximum = Some(max);
        self
    }

    /// The maximum value, `None` if never set.
    pub fn get_maximum(&self) -> Option<i64> {
        self.maximum
    }
}

impl ArgumentBuilder for IntegerType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}

impl NumberAttributes for IntegerType {
    fn numeric(&self) -> &NumericConstraints {
        &self.numeric
    }
    fn numeric_mut(&mut self) -> &mut NumericConstraints {
        &mut self.numeric
    }
}

/// Number (float) argument. Bounds are stored as floats.
#[derive(Clone)]
pub struct NumberType {
    pub(crate) meta: ArgumentMeta,
    pub(crate) minimum: Option<f64>,
    pub(crate) maximum: Option<f64>,
    pub(crate) numeric: NumericConstraints,
}

impl NumberType {
    /// Create a number argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        NumberType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::Number),
            minimum: None,
            maximum: None,
            numeric: NumericConstraints::default(),
        }
    }

    /// Create and configure a number argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }

    /// Set the minimum value.
    pub fn minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// The minimum value, `None` if never set.
    pub fn get_minimum(&self) -> Option<f64> {
        self.minimum
    }

    /// Set the maximum value.
    pub fn maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }

    /// The maximum value, `None` if never set.
    pub fn get_maximum(&self) -> Option<f64> {
        self.maximum
    }
}

impl ArgumentBuilder for NumberType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}

impl NumberAttributes for NumberType {
    fn numeric(&self) -> &NumericConstraints {
        &self.numeric
    }
    fn numeric_mut(&mut self) -> &mut NumericConstraints {
        &mut self.numeric
    }
}

/// Boolean argument. Carries no constraints beyond the shared surface.
#[derive(Clone)]
pub struct BooleanType {
    pub(crate) meta: ArgumentMeta,
}

impl BooleanType {
    /// Create a boolean argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        BooleanType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::Boolean),
        }
    }

    /// Create and configure a boolean argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }
}

impl ArgumentBuilder for BooleanType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}

/// Null argument. Carries no constraints beyond the shared surface.
#[derive(Clone)]
pub struct NullType {
    pub(crate) meta: ArgumentMeta,
}

impl NullType {
    /// Create a null argument for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        NullType {
            meta: ArgumentMeta::new(key.into(), ArgumentType::Null),
        }
    }

    /// Create and configure a null argument in one expression.
    pub fn on(key: impl Into<String>, config: impl FnOnce(Self) -> Self) -> Self {
        config(Self::new(key))
    }
}

impl ArgumentBuilder for NullType {
    fn meta(&self) -> &ArgumentMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ArgumentMeta {
        &mut self.meta
    }
}
