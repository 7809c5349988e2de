use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::hash::{TypeIdMap, map_with_capacity, new_map};

// -----------------------------------------------------------------------------
// Markers

/// A set of marker values attached to a property.
///
/// Markers can be attached with the [`#[derive(Bean)]`](crate::derive::Bean)
/// `#[bean(@expr)]` attribute.
///
/// Markers are stored by their [`TypeId`].
/// Because of this, there can only be one marker per type.
///
/// # Example
///
/// ```
/// # use vc_bean::{derive::Bean, info::Typed};
/// struct UpperCase;
///
/// #[derive(Bean)]
/// struct Slider {
///     #[bean(@10.0f32)]
///     value: f32,
///     #[bean(@UpperCase)]
///     name: String,
/// }
///
/// let info = <Slider as Typed>::type_info().as_bean().unwrap();
///
/// let value = info.property("value").unwrap();
/// assert_eq!(*value.markers().get::<f32>().unwrap(), 10.0f32);
///
/// let name = info.property("name").unwrap();
/// assert!(name.markers().contains::<UpperCase>());
/// assert!(!name.markers().contains::<f32>());
/// ```
#[derive(Default)]
pub struct Markers {
    markers: TypeIdMap<Box<dyn Any + Send + Sync>>,
}

impl Markers {
    /// Creates an empty [`Markers`].
    ///
    /// Equivalent to [`Default`], but this is const function.
    #[inline]
    pub const fn new() -> Self {
        Self { markers: new_map() }
    }

    /// Creates an empty [`Markers`] with specific capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            markers: map_with_capacity(capacity),
        }
    }

    /// Adds a marker.
    ///
    /// Later insertions for the same type overwrite earlier values.
    #[inline]
    pub fn with_marker<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.markers.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    /// Returns `true` if a marker of type `T` is present.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.markers.contains_key(&TypeId::of::<T>())
    }

    /// Returns `true` if a marker with the given [`TypeId`] is present.
    #[inline]
    pub fn contains_by_id(&self, id: TypeId) -> bool {
        self.markers.contains_key(&id)
    }

    /// Returns the marker of type `T`, if present.
    #[inline]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.markers
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Returns the marker with the given [`TypeId`], if present.
    #[inline]
    pub fn get_by_id(&self, id: TypeId) -> Option<&dyn Any> {
        self.markers.get(&id).map(|value| &**value as &dyn Any)
    }

    /// Returns an iterator over the [`TypeId`] of every marker.
    #[inline]
    pub fn ids(&self) -> impl ExactSizeIterator<Item = TypeId> + '_ {
        self.markers.keys().copied()
    }

    /// Returns the number of markers.
    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if there are no markers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.markers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Markers;
    use core::any::TypeId;

    struct Required;

    #[test]
    fn one_marker_per_type() {
        let markers = Markers::new()
            .with_marker(1_u8)
            .with_marker(2_u8)
            .with_marker(Required);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers.get::<u8>(), Some(&2));
        assert!(markers.contains::<Required>());
        assert!(markers.contains_by_id(TypeId::of::<Required>()));
        assert!(!markers.contains::<u16>());
        assert!(markers.get_by_id(TypeId::of::<u16>()).is_none());
    }

    #[test]
    fn empty_markers() {
        let markers = Markers::default();
        assert!(markers.is_empty());
        assert_eq!(markers.ids().count(), 0);
    }
}
