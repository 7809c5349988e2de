//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: for non generic types, an [`OnceLock`] inside.
//! - [`GenericTypeInfoCell`]: for generic types. The `static CELL` inside a
//!   generic function is shared by every instantiation, so the cell stores
//!   one entry per [`TypeId`] behind a [`RwLock`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::{TypeIdMap, new_map};
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use vc_bean::impls::NonGenericTypeInfoCell;
/// use vc_bean::info::{BeanInfo, PropertyInfo, TypeInfo, Typed};
/// # use vc_bean::{Reflect, info::ReflectKind, ops::{Bean, ReflectMut, ReflectRef}};
///
/// struct Meters {
///     value: f64,
/// }
///
/// impl Typed for Meters {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Bean(BeanInfo::new::<Self>([PropertyInfo::new::<f64>("value", 0)]))
///         })
///     }
/// }
/// # impl Reflect for Meters {
/// #     fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
/// #         *self = value.take::<Self>()?;
/// #         Ok(())
/// #     }
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Bean }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Bean(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Bean(self) }
/// # }
/// # impl Bean for Meters {
/// #     fn property_at(&self, index: usize) -> Option<&dyn Reflect> {
/// #         (index == 0).then_some(&self.value as &dyn Reflect)
/// #     }
/// #     fn property_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
/// #         (index == 0).then_some(&mut self.value as &mut dyn Reflect)
/// #     }
/// #     fn property_len(&self) -> usize { 1 }
/// # }
///
/// let info = Meters::type_info().as_bean().unwrap();
/// assert!(info.property("value").unwrap().type_info().type_is::<f64>());
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `TypeInfo` stored in the cell.
    ///
    /// If the cell is empty, it is initialized with the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```ignore
/// impl<T: Reflect + Typed> Typed for Vec<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(new_map()))
    }

    /// Returns the `TypeInfo` stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    /// Entries are leaked, they live as long as the process.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}
