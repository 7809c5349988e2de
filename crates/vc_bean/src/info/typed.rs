use alloc::boxed::Box;

use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Bean)]`](crate::derive::Bean) and for the
/// built-in value and container types.
///
/// # Examples
///
/// ```
/// use vc_bean::info::Typed;
///
/// let info = <Vec<u32> as Typed>::type_info();
/// assert!(info.type_is::<Vec<u32>>());
/// ```
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;

    /// Moves a boxed value out as `Self`.
    ///
    /// Returns the value back if it is not a `Self`.
    #[inline]
    fn take_from(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>>
    where
        Self: Sized,
    {
        value.take::<Self>()
    }
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Automatically implemented for every [`Typed`] type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
