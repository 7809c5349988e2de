use crate::Reflect;

/// Type-erased operations of `Option<T>`.
///
/// # Examples
///
/// ```
/// use vc_bean::ops::Optional;
///
/// let mut name = Some(String::from("a"));
/// let optional: &mut dyn Optional = &mut name;
///
/// assert!(optional.value().is_some());
/// optional.value_mut().unwrap().downcast_mut::<String>().unwrap().push('b');
///
/// assert_eq!(name.as_deref(), Some("ab"));
/// ```
pub trait Optional: Reflect {
    /// Returns the wrapped value, `None` if absent.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the wrapped value mutably, `None` if absent.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns `true` if a value is present.
    #[inline]
    fn is_present(&self) -> bool {
        self.value().is_some()
    }
}
