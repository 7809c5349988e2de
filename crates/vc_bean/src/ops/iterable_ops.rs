use alloc::boxed::Box;

use crate::Reflect;

/// Type-erased operations of a container that can only be iterated.
///
/// Implemented for `HashSet<T>`, `BTreeSet<T>` and `LinkedList<T>`.
/// Positional reads walk the iterator from the front on every call.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use vc_bean::ops::Iterable;
///
/// let set = BTreeSet::from([3_u8, 1, 2]);
/// let iterable: &dyn Iterable = &set;
///
/// assert_eq!(iterable.nth(1).unwrap().downcast_ref::<u8>(), Some(&2));
/// assert!(iterable.nth(3).is_none());
/// ```
pub trait Iterable: Reflect {
    /// Returns an iterator over the elements, in the natural order of the container.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at position `index` in iteration order.
    #[inline]
    fn nth(&self, index: usize) -> Option<&dyn Reflect> {
        self.iter().nth(index)
    }
}
