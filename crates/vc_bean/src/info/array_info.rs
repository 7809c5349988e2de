use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Constructor, Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::Array;

/// Type info of fixed-length sequences that grow by re-allocation, such as `Box<[T]>`.
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
    constructor: Constructor,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub fn new<TArray: Array + Default, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_info: TItem::type_info,
            constructor: || -> Box<dyn Reflect> { Box::new(TArray::default()) },
        }
    }

    /// Returns the [`TypeInfo`] of array items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Creates an empty array.
    #[inline]
    pub fn default_value(&self) -> Box<dyn Reflect> {
        (self.constructor)()
    }
}
