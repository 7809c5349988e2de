use alloc::boxed::Box;

use crate::info::{CoerceError, Constructor, Type, TypeInfo, Typed, impl_type_fn};
use crate::{Reflect, Value};

/// Type info of `Option<T>`, the representation of a possibly absent value.
///
/// A property declared as `Option<T>` is nullable: its declared value type
/// is `T`, and `None` is an absent value.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    inner_info: fn() -> &'static TypeInfo,
    wrap: fn(Value) -> Result<Box<dyn Reflect>, CoerceError>,
    constructor: Constructor,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OptionalInfo`] for `Option<T>`.
    #[inline]
    pub fn new<T: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<Option<T>>(),
            inner_info: T::type_info,
            wrap: wrap::<T>,
            constructor: || -> Box<dyn Reflect> { Box::new(None::<T>) },
        }
    }

    /// Returns the [`TypeInfo`] of the wrapped type.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }

    /// Creates `None`.
    #[inline]
    pub fn default_value(&self) -> Box<dyn Reflect> {
        (self.constructor)()
    }

    /// Converts a value into a boxed `Option<T>`.
    ///
    /// Accepts an absent value, a `T` or an `Option<T>`.
    #[inline]
    pub fn coerce(&self, value: Value) -> Result<Box<dyn Reflect>, CoerceError> {
        (self.wrap)(value)
    }
}

fn wrap<T: Reflect + Typed>(value: Value) -> Result<Box<dyn Reflect>, CoerceError> {
    let Some(value) = value.into_inner() else {
        return Ok(Box::new(None::<T>));
    };
    if value.is::<Option<T>>() {
        return Ok(value);
    }
    let info = T::type_info();
    let inner = info.coerce(Value::boxed(value))?;
    match T::take_from(inner) {
        Ok(inner) => Ok(Box::new(Some(inner))),
        Err(inner) => Err(CoerceError::mismatch(info, &*inner)),
    }
}
