use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use thiserror::Error;

use crate::info::{ArrayInfo, BeanInfo, IterableInfo, ListInfo, MapInfo};
use crate::info::{OpaqueInfo, OptionalInfo, Type};
use crate::{Reflect, Value};

/// A no-argument constructor producing a boxed instance of one type.
pub type Constructor = fn() -> Box<dyn Reflect>;

/// A [`Constructor`] backed by [`Default`].
///
/// `#[bean(default)]` registers `default_of::<Self>`.
#[inline]
pub fn default_of<T: Reflect + Default>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

// -----------------------------------------------------------------------------
// ReflectKind

/// The container kind of a reflected type.
///
/// # Examples
///
/// ```
/// use vc_bean::{Reflect, info::ReflectKind};
///
/// let list: Box<dyn Reflect> = Box::new(vec![1, 2, 3]);
///
/// assert_eq!(list.reflect_kind(), ReflectKind::List);
/// assert!(ReflectKind::List.is_indexed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named properties.
    Bean,
    /// An ordered sequence supporting positional write and append.
    List,
    /// A sequence supporting positional write, grown by re-allocation.
    Array,
    /// A container that can only be iterated.
    Iterable,
    /// A keyed mapping.
    Map,
    /// `Option<T>`.
    Optional,
    /// Any other type.
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for kinds supporting positional read.
    #[inline]
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::List | Self::Array | Self::Iterable)
    }

    /// Returns `true` for kinds supporting positional write.
    #[inline]
    pub const fn is_index_writable(self) -> bool {
        matches!(self, Self::List | Self::Array)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bean => "Bean",
            Self::List => "List",
            Self::Array => "Array",
            Self::Iterable => "Iterable",
            Self::Map => "Map",
            Self::Optional => "Optional",
            Self::Opaque => "Opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// CoerceError

/// Failure to convert a [`Value`] into an instance of a given type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoerceError {
    #[error("expected a value of type `{expected}`, found an absent (null) value")]
    Absent { expected: &'static str },

    #[error("expected a value of type `{expected}`, found `{actual}`")]
    Mismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("cannot parse `{input}` as `{expected}`")]
    Unparsable {
        input: String,
        expected: &'static str,
    },
}

impl CoerceError {
    /// A mismatch between `expected` and the runtime type of `actual`.
    #[inline]
    pub fn mismatch(expected: &TypeInfo, actual: &dyn Reflect) -> Self {
        Self::Mismatch {
            expected: expected.type_path(),
            actual: actual.reflect_type_path(),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information of a reflected type, one variant per [`ReflectKind`].
///
/// # Examples
///
/// ```
/// use vc_bean::info::{ReflectKind, Typed};
///
/// let info = <Option<Vec<u8>> as Typed>::type_info();
///
/// assert_eq!(info.kind(), ReflectKind::Optional);
/// assert_eq!(info.strip_optional().kind(), ReflectKind::List);
/// ```
#[derive(Debug)]
pub enum TypeInfo {
    Bean(BeanInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Iterable(IterableInfo),
    Map(MapInfo),
    Optional(OptionalInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_bean: Bean => BeanInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_iterable: Iterable => IterableInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Bean(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Iterable(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the full type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Check if this is the type `T`.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the [`ReflectKind`].
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Bean(_) => ReflectKind::Bean,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Iterable(_) => ReflectKind::Iterable,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the wrapped type of an `Option<T>`, or `self` for any other type.
    ///
    /// Only one `Option` layer is removed.
    #[inline]
    pub fn strip_optional(&'static self) -> &'static TypeInfo {
        match self {
            Self::Optional(info) => info.inner_info(),
            _ => self,
        }
    }

    /// Returns the item type of a list, array or iterable.
    pub fn item_info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::List(info) => Some(info.item_info()),
            Self::Array(info) => Some(info.item_info()),
            Self::Iterable(info) => Some(info.item_info()),
            _ => None,
        }
    }

    /// Creates an instance through the no-argument constructor of the type.
    ///
    /// Containers and `Option` always have one; beans and opaque types only
    /// when registered.
    pub fn default_value(&self) -> Option<Box<dyn Reflect>> {
        match self {
            Self::Bean(info) => info.default_value(),
            Self::List(info) => Some(info.default_value()),
            Self::Array(info) => Some(info.default_value()),
            Self::Iterable(info) => Some(info.default_value()),
            Self::Map(info) => Some(info.default_value()),
            Self::Optional(info) => Some(info.default_value()),
            Self::Opaque(info) => info.default_value(),
        }
    }

    /// Converts a caller supplied value into an instance of this type.
    ///
    /// An `Option<T>` accepts an absent value, a `T` or an `Option<T>`;
    /// every other type only accepts a present value of exactly that type.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_bean::{Value, info::Typed};
    ///
    /// let info = <Option<u8> as Typed>::type_info();
    /// let value = info.coerce(Value::from(7_u8)).unwrap();
    /// assert_eq!(value.downcast_ref::<Option<u8>>(), Some(&Some(7)));
    ///
    /// let info = <u8 as Typed>::type_info();
    /// assert!(info.coerce(Value::ABSENT).is_err());
    /// assert!(info.coerce(Value::from(7_u16)).is_err());
    /// ```
    pub fn coerce(&self, value: Value) -> Result<Box<dyn Reflect>, CoerceError> {
        if let Self::Optional(info) = self {
            return info.coerce(value);
        }
        match value.into_inner() {
            None => Err(CoerceError::Absent {
                expected: self.type_path(),
            }),
            Some(value) if value.ty_id() == self.type_id() => Ok(value),
            Some(value) => Err(CoerceError::mismatch(self, &*value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::{CoerceError, ReflectKind};
    use crate::Value;
    use crate::info::Typed;

    #[test]
    fn kinds_of_builtin_types() {
        assert_eq!(<Vec<u8>>::type_info().kind(), ReflectKind::List);
        assert_eq!(<String>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<Option<u8>>::type_info().kind(), ReflectKind::Optional);
        assert!(!ReflectKind::Iterable.is_index_writable());
        assert!(ReflectKind::Array.is_index_writable());
    }

    #[test]
    fn coerce_into_optional() {
        let info = <Option<String>>::type_info();

        let none = info.coerce(Value::ABSENT).unwrap();
        assert_eq!(none.downcast_ref::<Option<String>>(), Some(&None));

        let some = info.coerce(Value::from(Some(String::from("a")))).unwrap();
        assert_eq!(
            some.downcast_ref::<Option<String>>(),
            Some(&Some(String::from("a")))
        );

        let err = info.coerce(Value::from(1_u8)).unwrap_err();
        assert!(matches!(err, CoerceError::Mismatch { .. }));
    }

    #[test]
    fn coerce_rejects_absent() {
        let info = <String>::type_info();
        let err = info.coerce(Value::ABSENT).unwrap_err();
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn default_values() {
        let list = <Vec<u8>>::type_info().default_value().unwrap();
        assert_eq!(list.downcast_ref::<Vec<u8>>(), Some(&Vec::new()));

        let text = <String>::type_info().default_value().unwrap();
        assert_eq!(text.downcast_ref::<String>(), Some(&String::new()));
    }
}
