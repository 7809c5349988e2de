use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Constructor, Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::Map;

/// Type info of keyed mappings such as `HashMap<K, V>`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_bean::info::Typed;
///
/// let info = <HashMap<String, u8> as Typed>::type_info().as_map().unwrap();
///
/// assert!(info.key_info().type_is::<String>());
/// assert!(info.value_info().type_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
    constructor: Constructor,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub fn new<TMap: Map + Default, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
            constructor: || -> Box<dyn Reflect> { Box::new(TMap::default()) },
        }
    }

    /// Returns the [`TypeInfo`] of keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Creates an empty mapping.
    #[inline]
    pub fn default_value(&self) -> Box<dyn Reflect> {
        (self.constructor)()
    }
}
