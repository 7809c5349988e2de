use alloc::vec::Vec;
use core::fmt;

use crate::error::BeanError;
use crate::hash::{HashMap, map_with_capacity};
use crate::info::{Type, TypeInfo};
use crate::registry::PropertyDescriptor;

/// The property descriptors of one runtime type.
///
/// Properties keep their declaration order; names are unique.
/// Types other than beans have an empty descriptor.
pub struct TypeDescriptor {
    ty: Type,
    properties: Vec<PropertyDescriptor>,
    indices: HashMap<&'static str, usize>,
}

impl TypeDescriptor {
    /// Builds the descriptor of a type from its static metadata.
    ///
    /// Fails if two properties share a name.
    pub fn build(info: &'static TypeInfo) -> Result<Self, BeanError> {
        let ty = *info.ty();
        let Some(bean) = info.as_bean() else {
            return Ok(Self {
                ty,
                properties: Vec::new(),
                indices: map_with_capacity(0),
            });
        };

        let mut properties = Vec::with_capacity(bean.len());
        let mut indices = map_with_capacity(bean.len());
        for property in bean.properties() {
            if indices.insert(property.name(), properties.len()).is_some() {
                return Err(BeanError::duplicate_property(property.name(), ty.path()));
            }
            properties.push(PropertyDescriptor::new(ty, property));
        }

        Ok(Self {
            ty,
            properties,
            indices,
        })
    }

    /// Returns the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the descriptor of the named property.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.indices.get(name).map(|&index| &self.properties[index])
    }

    /// Returns `true` if the type declares the named property.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Iterates over the descriptors in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, PropertyDescriptor> {
        self.properties.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeDescriptor {
    type Item = &'a PropertyDescriptor;
    type IntoIter = core::slice::Iter<'a, PropertyDescriptor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("ty", &self.ty)
            .field("properties", &self.properties)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::TypeDescriptor;
    use crate::error::BeanErrorKind;
    use crate::info::{BeanInfo, PropertyInfo, TypeInfo, Typed};

    #[derive(crate::derive::Bean)]
    struct Person {
        name: String,
        #[bean(rename = "years")]
        age: u8,
    }

    #[test]
    fn keeps_declaration_order() {
        let descriptor = TypeDescriptor::build(Person::type_info()).unwrap();

        let names: Vec<_> = descriptor.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["name", "years"]);
        assert!(descriptor.contains("years"));
        assert!(descriptor.get("age").is_none());
        assert!(descriptor.ty().is::<Person>());
    }

    #[test]
    fn non_bean_is_empty() {
        let descriptor = TypeDescriptor::build(<Vec<u8>>::type_info()).unwrap();
        assert!(descriptor.is_empty());
    }

    #[test]
    fn duplicate_names_fail() {
        let info: &'static TypeInfo = alloc::boxed::Box::leak(alloc::boxed::Box::new(
            TypeInfo::Bean(BeanInfo::new::<Person>([
                PropertyInfo::new::<String>("name", 0),
                PropertyInfo::new::<u8>("name", 1),
            ])),
        ));

        let err = TypeDescriptor::build(info).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Construction);
        assert_eq!(err.property(), Some("name"));
    }
}
