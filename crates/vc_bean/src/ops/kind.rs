use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, Bean, Iterable, List, Map, Optional};

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Each variant contains a trait object with methods specific to that kind.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Bean(&'a dyn Bean),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Iterable(&'a dyn Iterable),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of "kinds" of a reflected value.
///
/// A [`ReflectMut`] is obtained via [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Bean(&'a mut dyn Bean),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Iterable(&'a mut dyn Iterable),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Bean(_) => ReflectKind::Bean,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Iterable(_) => ReflectKind::Iterable,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Bean(_) => ReflectKind::Bean,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Iterable(_) => ReflectKind::Iterable,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
