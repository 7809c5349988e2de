use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Constructor, Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::List;

/// Type info of ordered, growable sequences such as `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_bean::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
///
/// assert!(info.item_info().type_is::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
    constructor: Constructor,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub fn new<TList: List + Default, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_info: TItem::type_info,
            constructor: || -> Box<dyn Reflect> { Box::new(TList::default()) },
        }
    }

    /// Returns the [`TypeInfo`] of list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Creates an empty list.
    #[inline]
    pub fn default_value(&self) -> Box<dyn Reflect> {
        (self.constructor)()
    }
}
