use core::fmt;

use bitflags::bitflags;

use crate::info::{Markers, PropertyInfo, ReflectKind, Type, TypeInfo};

// -----------------------------------------------------------------------------
// PropertyFlags

bitflags! {
    /// Capabilities of a property, derived from its declared type and access.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// The property can be read.
        const READABLE = 1 << 0;
        /// The property can be assigned.
        const WRITABLE = 1 << 1;
        /// The value type supports positional read: list, array or iterable.
        const INDEXED  = 1 << 2;
        /// The value type is a keyed mapping.
        const MAPPED   = 1 << 3;
        /// The declared type is an `Option`, the value may be absent.
        const NULLABLE = 1 << 4;
    }
}

impl fmt::Debug for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl PropertyFlags {
    /// Computes the flags of a property from its raw metadata.
    pub fn of(info: &PropertyInfo) -> Self {
        let declared = info.type_info();
        let value = match declared {
            TypeInfo::Optional(optional) => optional.inner_info(),
            _ => declared,
        };

        let mut flags = Self::empty();
        flags.set(Self::READABLE, info.is_readable());
        flags.set(Self::WRITABLE, info.is_writable());
        flags.set(Self::INDEXED, value.kind().is_indexed());
        flags.set(Self::MAPPED, value.kind() == ReflectKind::Map);
        flags.set(Self::NULLABLE, declared.kind() == ReflectKind::Optional);
        flags
    }
}

// -----------------------------------------------------------------------------
// PropertyDescriptor

/// Immutable metadata for one named property of one bean type.
///
/// Obtained from a [`TypeDescriptor`](crate::registry::TypeDescriptor);
/// cloning is cheap.
///
/// # Examples
///
/// ```
/// use vc_bean::derive::Bean;
/// use vc_bean::registry::{DescriptorCache, PropertyFlags};
///
/// #[derive(Bean)]
/// struct Order {
///     lines: Option<Vec<String>>,
/// }
///
/// let cache = DescriptorCache::new();
/// let descriptor = cache.describe_type::<Order>().unwrap();
/// let lines = descriptor.get("lines").unwrap();
///
/// assert!(lines.is_indexed());
/// assert!(lines.flags().contains(PropertyFlags::NULLABLE));
/// assert!(lines.value_info().type_is::<Vec<String>>());
/// ```
#[derive(Clone)]
pub struct PropertyDescriptor {
    info: &'static PropertyInfo,
    owner: Type,
    value_info: &'static TypeInfo,
    flags: PropertyFlags,
}

impl PropertyDescriptor {
    /// Creates the descriptor of a property declared by `owner`.
    pub fn new(owner: Type, info: &'static PropertyInfo) -> Self {
        Self {
            info,
            owner,
            value_info: info.type_info().strip_optional(),
            flags: PropertyFlags::of(info),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the raw metadata of the property.
    #[inline]
    pub const fn info(&self) -> &'static PropertyInfo {
        self.info
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    /// Returns the declared type, `Option` included.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.info.type_info()
    }

    /// Returns the declared value type, with one `Option` layer removed.
    #[inline]
    pub const fn value_info(&self) -> &'static TypeInfo {
        self.value_info
    }

    #[inline]
    pub const fn flags(&self) -> PropertyFlags {
        self.flags
    }

    #[inline]
    pub const fn markers(&self) -> &'static Markers {
        self.info.markers()
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.flags.contains(PropertyFlags::READABLE)
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.flags.contains(PropertyFlags::WRITABLE)
    }

    #[inline]
    pub const fn is_indexed(&self) -> bool {
        self.flags.contains(PropertyFlags::INDEXED)
    }

    #[inline]
    pub const fn is_mapped(&self) -> bool {
        self.flags.contains(PropertyFlags::MAPPED)
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.flags.contains(PropertyFlags::NULLABLE)
    }
}

impl PartialEq for PropertyDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && core::ptr::eq(self.info, other.info)
    }
}

impl Eq for PropertyDescriptor {}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name())
            .field("owner", &self.owner)
            .field("value", &self.value_info.type_path())
            .field("flags", &self.flags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::string::String;
    use alloc::vec::Vec;

    use std::collections::HashMap;

    use super::PropertyFlags;
    use crate::derive::Bean;
    use crate::info::{Type, Typed};
    use crate::registry::PropertyDescriptor;

    #[derive(Bean)]
    struct Sample {
        name: String,
        #[bean(read_only)]
        tags: BTreeSet<String>,
        #[bean(write_only)]
        lines: Option<Vec<u32>>,
        scores: HashMap<String, u32>,
    }

    fn descriptor(name: &str) -> PropertyDescriptor {
        let info = Sample::type_info().as_bean().unwrap();
        PropertyDescriptor::new(Type::of::<Sample>(), info.property(name).unwrap())
    }

    #[test]
    fn flags_follow_declared_type() {
        assert_eq!(
            descriptor("name").flags(),
            PropertyFlags::READABLE | PropertyFlags::WRITABLE
        );
        assert_eq!(
            descriptor("tags").flags(),
            PropertyFlags::READABLE | PropertyFlags::INDEXED
        );
        assert_eq!(
            descriptor("lines").flags(),
            PropertyFlags::WRITABLE | PropertyFlags::INDEXED | PropertyFlags::NULLABLE
        );
        assert!(descriptor("scores").is_mapped());
        assert!(!descriptor("scores").is_indexed());
    }

    #[test]
    fn value_info_strips_option() {
        let lines = descriptor("lines");
        assert!(lines.type_info().type_is::<Option<Vec<u32>>>());
        assert!(lines.value_info().type_is::<Vec<u32>>());
        assert_eq!(lines, descriptor("lines"));
        assert_ne!(lines, descriptor("name"));
    }
}
