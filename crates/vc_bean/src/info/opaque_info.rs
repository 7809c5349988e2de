use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Constructor, Type, impl_type_fn};

/// Type info of values without reflected structure, such as `u32` or `String`.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    constructor: Option<Constructor>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`] without constructor.
    #[inline]
    pub fn new<T: Reflect>() -> Self {
        Self {
            ty: Type::of::<T>(),
            constructor: None,
        }
    }

    /// Registers a no-argument constructor.
    #[inline]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Creates a default value, if a constructor is registered.
    #[inline]
    pub fn default_value(&self) -> Option<Box<dyn Reflect>> {
        self.constructor.map(|f| f())
    }
}
