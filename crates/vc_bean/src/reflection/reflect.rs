use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of runtime access: a value whose structure can be
/// inspected and modified without knowing its concrete type.
///
/// `Reflect` is object safe, values are usually handled as `&dyn Reflect`,
/// `&mut dyn Reflect` or `Box<dyn Reflect>`.
///
/// Implement it with [`#[derive(Bean)]`](crate::derive::Bean); the built-in
/// value and container types are already covered.
///
/// # Examples
///
/// ```
/// use vc_bean::{Reflect, info::ReflectKind};
///
/// let mut value: Box<dyn Reflect> = Box::new(String::from("a"));
///
/// assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
/// assert!(value.set(Box::new(String::from("b"))).is_ok());
/// assert!(value.set(Box::new(1_u8)).is_err());
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "b");
/// ```
pub trait Reflect: DynamicTyped + Any + Send + Sync {
    /// Casts this type to a reflected value.
    ///
    /// Smart pointers return the pointee, so that `Box<T>` reads as a `T`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns the [`TypeId`] of the represented type.
    ///
    /// Prefer this to `Any::type_id` on a `Box<dyn Reflect>`, which returns
    /// the [`TypeId`] of the box.
    #[inline]
    fn ty_id(&self) -> TypeId {
        self.reflect_type_info().type_id()
    }

    /// Returns the full type path of the represented type.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Returns the value back if its type does not match.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the container kind of the type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view dispatching on the container kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view dispatching on the container kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Debug formatter for the value.
    ///
    /// Containers and beans are printed through their reflected structure,
    /// opaque types print their type path unless overridden.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Bean(bean) => {
                let mut out = f.debug_struct(bean.reflect_type_info().ty().ident());
                if let Some(info) = bean.reflect_type_info().as_bean() {
                    for property in info.properties() {
                        if let Some(value) = bean.property_at(property.index()) {
                            out.field(property.name(), &value);
                        }
                    }
                }
                out.finish()
            }
            ReflectRef::List(list) => f.debug_list().entries(list.iter()).finish(),
            ReflectRef::Array(array) => f.debug_list().entries(array.iter()).finish(),
            ReflectRef::Iterable(iter) => f.debug_set().entries(iter.iter()).finish(),
            ReflectRef::Map(map) => f.debug_map().entries(map.iter()).finish(),
            ReflectRef::Optional(optional) => match optional.value() {
                Some(value) => f.debug_tuple("Some").field(&value).finish(),
                None => f.write_str("None"),
            },
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_bean::Reflect;
    /// let x: Box<dyn Reflect> = Box::new(10_i32);
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_bean::Reflect;
    /// let x: Box<dyn Reflect> = Box::new(10_i32);
    ///
    /// let x = x.take::<u8>().unwrap_err();
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = <Self as $crate::info::Typed>::take_from(value)?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
