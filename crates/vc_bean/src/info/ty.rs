use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a Rust type: its [`TypeId`] plus its path.
///
/// Equality and hashing only consider the [`TypeId`].
///
/// # Examples
///
/// ```
/// use vc_bean::info::Type;
///
/// let ty = Type::of::<Vec<String>>();
///
/// assert!(ty.is::<Vec<String>>());
/// assert_eq!(ty.ident(), "Vec");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::vec::Vec<u32>`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type name without module path and generics, e.g. `Vec`.
    pub fn ident(&self) -> &'static str {
        let path = self.path;
        let base = match path.find('<') {
            Some(end) => &path[..end],
            None => path,
        };
        match base.rfind("::") {
            Some(start) => &base[start + 2..],
            None => base,
        }
    }

    /// Check if this is the type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `ty`, `type_id`, `type_path` and `type_is` for info containers.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns the full type path.
        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::Type;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    #[test]
    fn ident_strips_modules_and_generics() {
        assert_eq!(Type::of::<String>().ident(), "String");
        assert_eq!(Type::of::<u8>().ident(), "u8");
        assert_eq!(Type::of::<BTreeMap<String, u8>>().ident(), "BTreeMap");
    }

    #[test]
    fn equality_uses_type_id() {
        assert_eq!(Type::of::<String>(), Type::of::<String>());
        assert_ne!(Type::of::<String>(), Type::of::<u8>());
    }
}
