use alloc::sync::Arc;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use log::debug;

use crate::Reflect;
use crate::error::BeanError;
use crate::hash::{TypeIdMap, new_map};
use crate::info::{TypeInfo, Typed};
use crate::registry::TypeDescriptor;

/// A shared, lazily populated store of [`TypeDescriptor`]s keyed by type.
///
/// A descriptor is built the first time its type is requested and kept for
/// the lifetime of the cache; entries are never evicted. Clones share the
/// same storage.
///
/// Repeated lookups of one type return the same [`Arc`], so descriptors can
/// be compared by identity.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vc_bean::{derive::Bean, registry::DescriptorCache};
///
/// #[derive(Bean)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let cache = DescriptorCache::new();
/// let first = cache.describe_type::<Point>().unwrap();
/// let second = cache.clone().describe_type::<Point>().unwrap();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct DescriptorCache {
    internal: Arc<RwLock<TypeIdMap<Arc<TypeDescriptor>>>>,
}

impl DescriptorCache {
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self {
            internal: Arc::new(RwLock::new(new_map())),
        }
    }

    /// Returns the descriptor of the type described by `info`.
    ///
    /// Concurrent first requests of one type may each build a descriptor,
    /// but only the first insertion is kept and returned to all of them.
    pub fn describe(&self, info: &'static TypeInfo) -> Result<Arc<TypeDescriptor>, BeanError> {
        let id = info.type_id();
        if let Some(descriptor) = self
            .internal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Ok(Arc::clone(descriptor));
        }

        let built = Arc::new(TypeDescriptor::build(info)?);

        let mut guard = self
            .internal
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let descriptor = guard.entry(id).or_insert_with(|| {
            debug!(
                "described `{}` with {} properties",
                info.type_path(),
                built.len()
            );
            built
        });
        Ok(Arc::clone(descriptor))
    }

    /// Returns the descriptor of `T`.
    #[inline]
    pub fn describe_type<T: Typed>(&self) -> Result<Arc<TypeDescriptor>, BeanError> {
        self.describe(T::type_info())
    }

    /// Returns the descriptor of the runtime type of `value`.
    #[inline]
    pub fn describe_value(&self, value: &dyn Reflect) -> Result<Arc<TypeDescriptor>, BeanError> {
        self.describe(value.reflect_type_info())
    }

    /// Returns the number of described types.
    pub fn len(&self) -> usize {
        self.internal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DescriptorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.internal
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .values()
                    .map(|descriptor| descriptor.ty().path()),
            )
            .finish()
    }
}
