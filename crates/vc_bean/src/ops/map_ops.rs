use alloc::boxed::Box;

use crate::info::CoerceError;
use crate::{Reflect, Value};

/// Type-erased operations of a keyed mapping.
///
/// Keys are addressed by their textual form and parsed with [`FromStr`],
/// so a `HashMap<u32, V>` accepts the key `"42"`.
///
/// [`FromStr`]: core::str::FromStr
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_bean::{Value, ops::Map};
///
/// let mut scores = HashMap::<u32, String>::new();
/// let map: &mut dyn Map = &mut scores;
///
/// map.insert("7", Value::from("seven")).unwrap();
/// assert!(map.insert("x", Value::from("ten")).is_err());
///
/// assert_eq!(map.get("7").unwrap().downcast_ref::<String>().unwrap(), "seven");
/// assert!(map.get("8").is_none());
/// ```
pub trait Map: Reflect {
    /// Returns the value of the given key.
    ///
    /// A key that cannot be parsed is treated as missing.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the value of the given key mutably.
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Inserts a value, replacing the previous value of the key.
    fn insert(&mut self, key: &str, value: Value) -> Result<(), CoerceError>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the mapping has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
