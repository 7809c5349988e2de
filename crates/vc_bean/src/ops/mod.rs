//! Type-erased operations on reflected values, one trait per container kind.
//!
//! - [`Bean`]: property slots of a struct.
//! - [`List`]: ordered, growable sequences, e.g. `Vec<T>`.
//! - [`Array`]: sequences grown by re-allocation, e.g. `Box<[T]>`.
//! - [`Iterable`]: containers that can only be iterated, e.g. `HashSet<T>`.
//! - [`Map`]: keyed mappings, e.g. `HashMap<String, T>`.
//! - [`Optional`]: `Option<T>`.
//!
//! [`ReflectRef`] and [`ReflectMut`] dispatch from a `dyn Reflect` to these traits.

mod array_ops;
mod bean_ops;
mod iterable_ops;
mod kind;
mod list_ops;
mod map_ops;
mod optional_ops;

pub use array_ops::{Array, ArrayItemIter};
pub use bean_ops::Bean;
pub use iterable_ops::Iterable;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use optional_ops::Optional;
