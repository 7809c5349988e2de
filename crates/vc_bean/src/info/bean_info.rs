use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{Constructor, Markers, Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// PropertyInfo

/// Raw metadata of one property, as declared by `#[derive(Bean)]`.
///
/// `index` is the slot of the property in [`Bean::property_at`](crate::ops::Bean::property_at).
#[derive(Debug)]
pub struct PropertyInfo {
    name: &'static str,
    index: usize,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    readable: bool,
    writable: bool,
    markers: Markers,
}

impl PropertyInfo {
    impl_type_fn!(ty);

    /// Creates a readable and writable property of type `T`.
    #[inline]
    pub fn new<T: Reflect + Typed>(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            readable: true,
            writable: true,
            markers: Markers::new(),
        }
    }

    /// Sets whether the property can be read and written.
    #[inline]
    pub fn with_access(mut self, readable: bool, writable: bool) -> Self {
        self.readable = readable;
        self.writable = writable;
        self
    }

    /// Replaces the markers of the property.
    #[inline]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the property slot.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the [`TypeInfo`] of the property type, `Option` included.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.readable
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    #[inline]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }
}

// -----------------------------------------------------------------------------
// BeanInfo

/// Type info of a bean: a struct exposing named properties.
///
/// # Examples
///
/// ```
/// use vc_bean::{derive::Bean, info::Typed};
///
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct Address {
///     city: Option<String>,
///     #[bean(read_only)]
///     zip: u32,
/// }
///
/// let info = Address::type_info().as_bean().unwrap();
///
/// assert_eq!(info.len(), 2);
/// assert!(info.is_default_constructible());
/// assert!(!info.property("zip").unwrap().is_writable());
/// ```
#[derive(Debug)]
pub struct BeanInfo {
    ty: Type,
    properties: Box<[PropertyInfo]>,
    constructor: Option<Constructor>,
}

impl BeanInfo {
    impl_type_fn!(ty);

    /// Creates a new [`BeanInfo`] without constructor.
    pub fn new<T: Reflect>(properties: impl IntoIterator<Item = PropertyInfo>) -> Self {
        Self {
            ty: Type::of::<T>(),
            properties: properties.into_iter().collect::<Vec<_>>().into_boxed_slice(),
            constructor: None,
        }
    }

    /// Registers a no-argument constructor.
    #[inline]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Returns the declared properties, in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Returns the property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the number of properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_default_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Creates a default instance, if a constructor is registered.
    #[inline]
    pub fn default_value(&self) -> Option<Box<dyn Reflect>> {
        self.constructor.map(|f| f())
    }
}
