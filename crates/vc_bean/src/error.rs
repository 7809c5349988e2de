use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::info::CoerceError;

// -----------------------------------------------------------------------------
// BeanErrorKind

/// The category of a [`BeanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BeanErrorKind {
    /// Malformed input at the API boundary, e.g. an empty path or a
    /// bracketed path where only dotted names are allowed.
    InvalidArgument,
    /// A path segment names a property the type does not declare.
    PropertyNotFound,
    /// An absent value was found where a present one was required.
    NullReference,
    /// The property kind or the value type does not fit the operation.
    TypeMismatch,
    /// An index outside the container bounds.
    Bounds,
    /// Auto-instantiation failed, or the type metadata is inconsistent.
    Construction,
    /// The path could not be parsed.
    Syntax,
    /// The property has no read access.
    NotReadable,
    /// The property has no write access.
    NotWritable,
}

impl fmt::Display for BeanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidArgument => "invalid argument",
            Self::PropertyNotFound => "property not found",
            Self::NullReference => "null reference",
            Self::TypeMismatch => "type mismatch",
            Self::Bounds => "index out of bounds",
            Self::Construction => "construction failure",
            Self::Syntax => "syntax error",
            Self::NotReadable => "not readable",
            Self::NotWritable => "not writable",
        })
    }
}

// -----------------------------------------------------------------------------
// BeanError

/// The error of every property access.
///
/// The message always names the property involved, when there is one.
///
/// # Examples
///
/// ```
/// use vc_bean::{BeanError, BeanErrorKind};
///
/// let err = BeanError::unbound_index("items", 3, 0);
///
/// assert_eq!(err.kind(), BeanErrorKind::Bounds);
/// assert_eq!(err.property(), Some("items"));
/// assert!(err.to_string().contains("index is unbound"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BeanError {
    kind: BeanErrorKind,
    property: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
}

impl BeanError {
    /// Creates an error not attached to a property.
    #[inline]
    pub fn new(kind: BeanErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            property: None,
            message: message.into(),
        }
    }

    /// Attaches the name of the property involved.
    #[inline]
    pub fn with_property(mut self, property: &str) -> Self {
        self.property = Some(Cow::Owned(String::from(property)));
        self
    }

    #[inline]
    pub const fn kind(&self) -> BeanErrorKind {
        self.kind
    }

    /// Returns the name of the property involved.
    #[inline]
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    // -------------------------------------------------------------------------
    // InvalidArgument

    pub fn empty_path() -> Self {
        Self::new(
            BeanErrorKind::InvalidArgument,
            "Property path must not be null or empty",
        )
    }

    pub fn empty_name(path: &str) -> Self {
        Self::new(
            BeanErrorKind::InvalidArgument,
            format!("Invalid property path '{path}': property name must not be null or empty"),
        )
    }

    pub fn brackets_not_allowed(name: &str) -> Self {
        Self::new(
            BeanErrorKind::InvalidArgument,
            format!("Invalid property '{name}': '[]' notation is not allowed"),
        )
        .with_property(name)
    }

    pub fn foreign_descriptor(name: &str, owner: &str, target: &str) -> Self {
        Self::new(
            BeanErrorKind::InvalidArgument,
            format!("Property '{name}' is declared by `{owner}`, not by `{target}`"),
        )
        .with_property(name)
    }

    // -------------------------------------------------------------------------
    // PropertyNotFound

    pub fn property_not_found(name: &str, type_path: &str) -> Self {
        Self::new(
            BeanErrorKind::PropertyNotFound,
            format!("No property '{name}' found on `{type_path}`"),
        )
        .with_property(name)
    }

    // -------------------------------------------------------------------------
    // NullReference

    /// The direct accessors report an unknown name as a missing (null) descriptor.
    pub fn unknown_property(name: &str, type_path: &str) -> Self {
        Self::new(
            BeanErrorKind::NullReference,
            format!("Property '{name}' is null: `{type_path}` declares no such property"),
        )
        .with_property(name)
    }

    pub fn null_value(name: &str) -> Self {
        Self::new(
            BeanErrorKind::NullReference,
            format!("Value of property '{name}' is null (absent)"),
        )
        .with_property(name)
    }

    pub fn null_in_path(path: &str, name: &str) -> Self {
        Self::new(
            BeanErrorKind::NullReference,
            format!("Cannot resolve '{path}': value of property '{name}' is null (absent)"),
        )
        .with_property(name)
    }

    pub fn rejected_element(name: &str, source: &CoerceError) -> Self {
        Self::new(
            BeanErrorKind::NullReference,
            format!("Property '{name}' rejected an element while growing: {source}"),
        )
        .with_property(name)
    }

    // -------------------------------------------------------------------------
    // TypeMismatch

    pub fn not_indexed(name: &str) -> Self {
        Self::new(
            BeanErrorKind::TypeMismatch,
            format!("Property '{name}' is not indexed"),
        )
        .with_property(name)
    }

    pub fn not_mapped(name: &str) -> Self {
        Self::new(
            BeanErrorKind::TypeMismatch,
            format!("Property '{name}' is not mapped"),
        )
        .with_property(name)
    }

    pub fn not_index_writable(name: &str, type_path: &str) -> Self {
        Self::new(
            BeanErrorKind::TypeMismatch,
            format!("Only List and array support indexed write, property '{name}' is `{type_path}`"),
        )
        .with_property(name)
    }

    pub fn unexpected_type(name: &str, expected: &str, actual: &str) -> Self {
        Self::new(
            BeanErrorKind::TypeMismatch,
            format!("Property '{name}' holds a `{actual}`, not a `{expected}`"),
        )
        .with_property(name)
    }

    /// A value that cannot be assigned to the property.
    ///
    /// An absent value for a non-optional target is a null reference,
    /// anything else is a type mismatch.
    pub fn rejected_value(name: &str, source: &CoerceError) -> Self {
        let kind = match source {
            CoerceError::Absent { .. } => BeanErrorKind::NullReference,
            _ => BeanErrorKind::TypeMismatch,
        };
        Self::new(kind, format!("Cannot assign to property '{name}': {source}")).with_property(name)
    }

    // -------------------------------------------------------------------------
    // Bounds

    pub fn unbound_index(name: &str, index: usize, len: usize) -> Self {
        Self::new(
            BeanErrorKind::Bounds,
            format!("Cannot write property '{name}' at {index}: index is unbound (length {len})"),
        )
        .with_property(name)
    }

    pub fn out_of_bounds(name: &str, index: usize, len: usize) -> Self {
        Self::new(
            BeanErrorKind::Bounds,
            format!("Index {index} of property '{name}' is out of bounds (length {len})"),
        )
        .with_property(name)
    }

    // -------------------------------------------------------------------------
    // Construction

    pub fn not_instantiable(name: &str, type_path: &str, reason: &str) -> Self {
        Self::new(
            BeanErrorKind::Construction,
            format!("Cannot instantiate `{type_path}` for property '{name}': {reason}"),
        )
        .with_property(name)
    }

    pub fn duplicate_property(name: &str, type_path: &str) -> Self {
        Self::new(
            BeanErrorKind::Construction,
            format!("Property '{name}' is declared twice by `{type_path}`"),
        )
        .with_property(name)
    }

    // -------------------------------------------------------------------------
    // Syntax

    pub fn unclosed_bracket(name: &str) -> Self {
        Self::new(
            BeanErrorKind::Syntax,
            format!("Invalid property '{name}': Cannot find the closing ']'"),
        )
        .with_property(name)
    }

    pub fn unparsable_index(name: &str, raw: &str) -> Self {
        Self::new(
            BeanErrorKind::Syntax,
            format!("Invalid property '{name}': Cannot parse '{raw}' as an index"),
        )
        .with_property(name)
    }

    pub fn trailing_characters(name: &str, rest: &str) -> Self {
        Self::new(
            BeanErrorKind::Syntax,
            format!("Invalid property '{name}': unexpected '{rest}' after ']'"),
        )
        .with_property(name)
    }

    // -------------------------------------------------------------------------
    // Access

    pub fn not_readable(name: &str) -> Self {
        Self::new(
            BeanErrorKind::NotReadable,
            format!("Property '{name}' is not readable"),
        )
        .with_property(name)
    }

    pub fn not_writable(name: &str) -> Self {
        Self::new(
            BeanErrorKind::NotWritable,
            format!("Property '{name}' is not writable"),
        )
        .with_property(name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{BeanError, BeanErrorKind};
    use crate::info::CoerceError;

    #[test]
    fn messages_name_the_property() {
        let err = BeanError::null_in_path("address.city", "address");
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert!(err.message().contains("address.city"));
        assert!(err.message().contains("null"));

        let err = BeanError::unclosed_bracket("items");
        assert_eq!(err.kind(), BeanErrorKind::Syntax);
        assert!(err.to_string().contains("closing ']'"));
        assert_eq!(err.property(), Some("items"));
    }

    #[test]
    fn rejected_value_kind() {
        let absent = CoerceError::Absent { expected: "u8" };
        assert_eq!(
            BeanError::rejected_value("age", &absent).kind(),
            BeanErrorKind::NullReference
        );

        let mismatch = CoerceError::Mismatch {
            expected: "u8",
            actual: "alloc::string::String",
        };
        assert_eq!(
            BeanError::rejected_value("age", &mismatch).kind(),
            BeanErrorKind::TypeMismatch
        );
    }
}
