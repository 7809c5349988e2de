use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Constructor, Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::Iterable;

/// Type info of containers that only support iteration, such as `HashSet<T>`.
///
/// Items of an iterable are addressed by their position in iteration order,
/// and can only be read.
#[derive(Clone, Debug)]
pub struct IterableInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
    constructor: Constructor,
}

impl IterableInfo {
    impl_type_fn!(ty);

    /// Creates a new [`IterableInfo`].
    #[inline]
    pub fn new<TIter: Iterable + Default, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TIter>(),
            item_info: TItem::type_info,
            constructor: || -> Box<dyn Reflect> { Box::new(TIter::default()) },
        }
    }

    /// Returns the [`TypeInfo`] of items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Creates an empty container.
    #[inline]
    pub fn default_value(&self) -> Box<dyn Reflect> {
        (self.constructor)()
    }
}
