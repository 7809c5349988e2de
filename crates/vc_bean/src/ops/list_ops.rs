use crate::info::CoerceError;
use crate::{Reflect, Value};

/// Type-erased operations of an ordered, growable sequence.
///
/// Implemented for `Vec<T>` and `VecDeque<T>`.
///
/// # Examples
///
/// ```
/// use vc_bean::{Value, ops::List};
///
/// let mut vec = vec![1_u8];
/// let list: &mut dyn List = &mut vec;
///
/// list.push(Value::from(2_u8)).unwrap();
/// assert!(list.push(Value::from("three")).is_err());
/// assert!(list.push(Value::ABSENT).is_err());
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(vec, [1, 2]);
/// ```
pub trait List: Reflect {
    /// Returns the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at the given index mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element to the back of the list.
    ///
    /// The value is rejected if it can not be converted to the element type,
    /// for example an absent value in a list of non-optional elements.
    fn push(&mut self, value: Value) -> Result<(), CoerceError>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
