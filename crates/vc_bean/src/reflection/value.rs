use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::TypeInfo;

/// An owned, possibly absent value, the input of every write operation.
///
/// Any [`Reflect`] type converts into a present value; [`Value::ABSENT`]
/// stands for a missing one.
///
/// # Examples
///
/// ```
/// use vc_bean::Value;
///
/// let value = Value::from(5_u32);
/// assert_eq!(value.get().unwrap().downcast_ref::<u32>(), Some(&5));
///
/// let text: Value = "text".into();
/// assert_eq!(text.get().unwrap().downcast_ref::<String>().unwrap(), "text");
///
/// assert!(Value::ABSENT.is_absent());
/// ```
pub struct Value(Option<Box<dyn Reflect>>);

impl Value {
    /// The absent value.
    pub const ABSENT: Self = Self(None);

    /// Creates a present value from a boxed one.
    #[inline]
    pub fn boxed(value: Box<dyn Reflect>) -> Self {
        Self(Some(value))
    }

    /// Creates a value from an optional box.
    #[inline]
    pub const fn from_option(value: Option<Box<dyn Reflect>>) -> Self {
        Self(value)
    }

    /// Creates the default value of a type, absent if it has no constructor.
    #[inline]
    pub fn default_of(info: &TypeInfo) -> Self {
        Self(info.default_value())
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the value, if present.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.0.as_deref()
    }

    /// Unwraps the inner box.
    #[inline]
    pub fn into_inner(self) -> Option<Box<dyn Reflect>> {
        self.0
    }
}

impl<T: Reflect> From<T> for Value {
    #[inline]
    fn from(value: T) -> Self {
        Self(Some(Box::new(value)))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self(Some(Box::new(String::from(value))))
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::ABSENT
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.reflect_debug(f),
            None => f.write_str("Absent"),
        }
    }
}
