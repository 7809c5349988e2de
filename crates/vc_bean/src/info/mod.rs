//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`Type`]: a `TypeId` plus the type path.
//!
//! - [`TypeInfo`]: an enum over the container kind of a type:
//!     - [`BeanInfo`]: a struct with named properties, each one a [`PropertyInfo`].
//!     - [`ListInfo`]: an ordered, growable sequence, e.g. `Vec<T>`.
//!     - [`ArrayInfo`]: a sequence grown by re-allocation, e.g. `Box<[T]>`.
//!     - [`IterableInfo`]: a container that can only be iterated, e.g. `HashSet<T>`.
//!     - [`MapInfo`]: a keyed mapping, e.g. `HashMap<String, T>`.
//!     - [`OptionalInfo`]: `Option<T>`, a possibly absent value.
//!     - [`OpaqueInfo`]: anything else, e.g. `u32` or `String`.
//!
//! - [`Markers`]: the type-keyed marker values attached to a property.
//!
//! - [`Typed`] and [`DynamicTyped`]: static and dynamic access to `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod bean_info;
mod iterable_info;
mod list_info;
mod map_info;
mod markers;
mod opaque_info;
mod optional_info;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use ty::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use bean_info::{BeanInfo, PropertyInfo};
pub use iterable_info::IterableInfo;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use markers::Markers;
pub use opaque_info::OpaqueInfo;
pub use optional_info::OptionalInfo;
pub use ty::Type;
pub use type_info::{CoerceError, Constructor, ReflectKind, TypeInfo, default_of};
pub use typed::{DynamicTyped, Typed};
