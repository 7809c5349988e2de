use crate::Reflect;

/// Property slots of a bean, addressed by the index recorded in its
/// [`PropertyInfo`](crate::info::PropertyInfo).
///
/// Implemented by [`#[derive(Bean)]`](crate::derive::Bean).
///
/// # Examples
///
/// ```
/// use vc_bean::{derive::Bean, ops::Bean};
///
/// #[derive(Bean)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut point = Point { x: 1, y: 2 };
/// let bean: &mut dyn Bean = &mut point;
///
/// assert_eq!(bean.property_len(), 2);
/// *bean.property_mut("y").unwrap().downcast_mut::<i32>().unwrap() = 5;
/// assert_eq!(point.y, 5);
/// ```
pub trait Bean: Reflect {
    /// Returns the property stored in the given slot.
    fn property_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the property stored in the given slot, mutably.
    fn property_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of properties.
    fn property_len(&self) -> usize;

    /// Returns the property with the given name.
    fn property(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.reflect_type_info().as_bean()?.property(name)?.index();
        self.property_at(index)
    }

    /// Returns the property with the given name, mutably.
    fn property_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.reflect_type_info().as_bean()?.property(name)?.index();
        self.property_at_mut(index)
    }
}
