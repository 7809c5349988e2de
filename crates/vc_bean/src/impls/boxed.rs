//! `Box<T>` is transparent: it reports the type info of `T` and hands out
//! the pointee, so recursive beans (`Option<Box<Self>>`) read and write like `T`.

use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

impl<T: Reflect + Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }

    /// Accepts a `Box<T>` or a `T`.
    fn take_from(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match value.downcast::<Self>() {
            Ok(boxed) => Ok(*boxed),
            Err(value) => T::take_from(value).map(Box::new),
        }
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    #[inline]
    fn as_reflect(&self) -> &dyn Reflect {
        (**self).as_reflect()
    }

    #[inline]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        (**self).as_reflect_mut()
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        (**self).ty_id()
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = <Self as Typed>::take_from(value)?;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        (**self).reflect_kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}
