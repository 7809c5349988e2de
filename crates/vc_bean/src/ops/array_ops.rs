use crate::Reflect;
use crate::info::CoerceError;

/// Type-erased operations of a sequence that grows by re-allocation.
///
/// Implemented for `Box<[T]>`.
///
/// # Examples
///
/// ```
/// use vc_bean::ops::Array;
///
/// let mut items: Box<[u8]> = Box::new([1, 2]);
/// let array: &mut dyn Array = &mut items;
///
/// array.resize(4).unwrap();
/// *array.get_mut(3).unwrap().downcast_mut::<u8>().unwrap() = 9;
///
/// assert_eq!(&*items, &[1, 2, 0, 9]);
/// ```
pub trait Array: Reflect {
    /// Returns the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at the given index mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the array contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-allocates the array with `len` elements.
    ///
    /// New slots are filled with the default value of the element type.
    /// Fails, leaving the array unchanged, if the element type has no
    /// constructor.
    fn resize(&mut self, len: usize) -> Result<(), CoerceError>;
}

impl dyn Array {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

/// An iterator over the elements of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl ArrayItemIter<'_> {
    /// Creates a new iterator for the given array.
    #[inline(always)]
    pub const fn new(array: &dyn Array) -> ArrayItemIter<'_> {
        ArrayItemIter { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.array.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
