//! Reflection implementations of the built-in value and container types,
//! plus the static cells used to implement [`Typed`].
//!
//! | Kind       | Types                                          |
//! |------------|------------------------------------------------|
//! | `Opaque`   | `bool`, `char`, integers, floats, `String`     |
//! | `Optional` | `Option<T>`                                    |
//! | `List`     | `Vec<T>`, `VecDeque<T>`                        |
//! | `Array`    | `Box<[T]>`                                     |
//! | `Iterable` | `HashSet<T>`, `BTreeSet<T>`, `LinkedList<T>`   |
//! | `Map`      | `HashMap<K, V>`, `BTreeMap<K, V>`              |
//!
//! `Box<T>` is transparent and behaves as `T`.

mod array;
mod boxed;
mod cell;
mod iterable;
mod list;
mod map;
mod native;
mod option;

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};

use crate::info::{CoerceError, Typed};
use crate::{Reflect, Value};

/// Converts a value into a container element of type `T`.
pub(crate) fn take_item<T: Reflect + Typed>(value: Value) -> Result<T, CoerceError> {
    let info = T::type_info();
    let value = info.coerce(value)?;
    T::take_from(value).map_err(|value| CoerceError::mismatch(info, &*value))
}
