use alloc::string::String;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::access::traverse::Accessor;
use crate::access::{PropertyPath, WrapOptions};
use crate::error::BeanError;
use crate::registry::{DescriptorCache, PropertyDescriptor, TypeDescriptor};
use crate::{Reflect, Value};

// -----------------------------------------------------------------------------
// PropertyRef

/// A property of the wrapped object, by name or by descriptor.
#[derive(Debug, Clone, Copy)]
pub enum PropertyRef<'p> {
    Name(&'p str),
    Descriptor(&'p PropertyDescriptor),
}

impl<'p> From<&'p str> for PropertyRef<'p> {
    #[inline]
    fn from(value: &'p str) -> Self {
        Self::Name(value)
    }
}

impl<'p> From<&'p String> for PropertyRef<'p> {
    #[inline]
    fn from(value: &'p String) -> Self {
        Self::Name(value)
    }
}

impl<'p> From<&'p PropertyDescriptor> for PropertyRef<'p> {
    #[inline]
    fn from(value: &'p PropertyDescriptor) -> Self {
        Self::Descriptor(value)
    }
}

// -----------------------------------------------------------------------------
// BeanWrapper

/// Reads and writes the properties of a bean graph through path expressions.
///
/// A wrapper borrows one root object and applies its [`WrapOptions`] to
/// every operation:
///
/// - `auto_grow`: a write past the end of a list or an array grows it,
///   padding with default items.
/// - `auto_instantiate`: a write through an absent bean, list, array or map
///   creates it with its default constructor.
/// - `out_of_bounds_safe`: a read past the end of an indexed container
///   returns `None` instead of failing.
///
/// Absent values (`None` in an `Option` property) are read as `Ok(None)`.
///
/// # Examples
///
/// ```
/// use vc_bean::derive::Bean;
/// use vc_bean::{BeanWrapper, registry::DescriptorCache};
///
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct Address {
///     city: Option<String>,
/// }
///
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct Person {
///     address: Option<Address>,
///     nicknames: Vec<String>,
/// }
///
/// let cache = DescriptorCache::new();
/// let mut person = Person::default();
/// let mut wrapper = BeanWrapper::new(&cache, &mut person);
///
/// wrapper.set_value("address.city", "Lyon").unwrap();
/// wrapper.set_value("nicknames[1]", "Bob").unwrap();
///
/// let city = wrapper.get_value_as::<String>("address.city").unwrap();
/// assert_eq!(city.unwrap(), "Lyon");
///
/// assert_eq!(person.nicknames, ["", "Bob"]);
/// ```
pub struct BeanWrapper<'a> {
    object: &'a mut dyn Reflect,
    cache: DescriptorCache,
    options: WrapOptions,
}

impl<'a> BeanWrapper<'a> {
    /// Wraps an object with the default options.
    #[inline]
    pub fn new(cache: &DescriptorCache, object: &'a mut dyn Reflect) -> Self {
        Self::with_options(cache, object, WrapOptions::default())
    }

    /// Wraps an object with the given options.
    #[inline]
    pub fn with_options(
        cache: &DescriptorCache,
        object: &'a mut dyn Reflect,
        options: WrapOptions,
    ) -> Self {
        Self {
            object,
            cache: cache.clone(),
            options,
        }
    }

    #[inline]
    fn accessor(&self) -> Accessor<'_> {
        Accessor::new(&self.cache, self.options)
    }

    // -------------------------------------------------------------------------
    // Object

    /// Replaces the wrapped object, returning the previous one.
    #[inline]
    pub fn wrap(&mut self, object: &'a mut dyn Reflect) -> &'a mut dyn Reflect {
        core::mem::replace(&mut self.object, object)
    }

    /// Releases the wrapped object.
    #[inline]
    pub fn unwrap(self) -> &'a mut dyn Reflect {
        self.object
    }

    #[inline]
    pub fn object(&self) -> &dyn Reflect {
        &*self.object
    }

    #[inline]
    pub fn object_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.object
    }

    /// Returns the descriptor of the wrapped object type.
    #[inline]
    pub fn descriptor(&self) -> Result<Arc<TypeDescriptor>, BeanError> {
        self.cache.describe_value(&*self.object)
    }

    /// Returns the descriptor cache of this wrapper.
    #[inline]
    pub fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    // -------------------------------------------------------------------------
    // Options

    #[inline]
    pub const fn options(&self) -> WrapOptions {
        self.options
    }

    #[inline]
    pub fn set_options(&mut self, options: WrapOptions) {
        self.options = options;
    }

    #[inline]
    pub const fn is_auto_grow(&self) -> bool {
        self.options.auto_grow
    }

    #[inline]
    pub fn set_auto_grow(&mut self, enabled: bool) {
        self.options.auto_grow = enabled;
    }

    #[inline]
    pub const fn is_auto_instantiate(&self) -> bool {
        self.options.auto_instantiate
    }

    #[inline]
    pub fn set_auto_instantiate(&mut self, enabled: bool) {
        self.options.auto_instantiate = enabled;
    }

    #[inline]
    pub const fn is_out_of_bounds_safe(&self) -> bool {
        self.options.out_of_bounds_safe
    }

    #[inline]
    pub fn set_out_of_bounds_safe(&mut self, enabled: bool) {
        self.options.out_of_bounds_safe = enabled;
    }

    // -------------------------------------------------------------------------
    // Path access

    /// Reads the value at a path such as `orders[0].lines[2].product`.
    ///
    /// Returns `None` for an absent final value, or for an out-of-range
    /// index when `out_of_bounds_safe` is enabled.
    pub fn get_value(&self, path: &str) -> Result<Option<&dyn Reflect>, BeanError> {
        let path = PropertyPath::parse(path)?;
        self.accessor().read_path(&*self.object, &path)
    }

    /// Reads the value at a path as a `T`.
    pub fn get_value_as<T: Any>(&self, path: &str) -> Result<Option<&T>, BeanError> {
        let parsed = PropertyPath::parse(path)?;
        let Some(value) = self.accessor().read_path(&*self.object, &parsed)? else {
            return Ok(None);
        };
        match value.downcast_ref::<T>() {
            Some(value) => Ok(Some(value)),
            None => Err(BeanError::unexpected_type(
                path,
                core::any::type_name::<T>(),
                value.reflect_type_path(),
            )),
        }
    }

    /// Writes the value at a path.
    ///
    /// Intermediate values are created and containers grown as the options
    /// allow.
    pub fn set_value(&mut self, path: &str, value: impl Into<Value>) -> Result<(), BeanError> {
        let path = PropertyPath::parse(path)?;
        let accessor = Accessor::new(&self.cache, self.options);
        accessor.write_path(&mut *self.object, &path, value.into())
    }

    // -------------------------------------------------------------------------
    // Direct access

    /// Resolves a property of the wrapped object.
    fn resolve(&self, property: PropertyRef<'_>) -> Result<PropertyDescriptor, BeanError> {
        match property {
            PropertyRef::Name("") => Err(BeanError::empty_path()),
            PropertyRef::Name(name) => self
                .descriptor()?
                .get(name)
                .cloned()
                .ok_or_else(|| BeanError::unknown_property(name, self.object.reflect_type_path())),
            PropertyRef::Descriptor(desc) if desc.owner().id() == self.object.ty_id() => {
                Ok(desc.clone())
            }
            PropertyRef::Descriptor(desc) => Err(BeanError::foreign_descriptor(
                desc.name(),
                desc.owner().path(),
                self.object.reflect_type_path(),
            )),
        }
    }

    /// Reads a property of the wrapped object.
    pub fn get_simple_value<'p>(
        &self,
        property: impl Into<PropertyRef<'p>>,
    ) -> Result<Option<&dyn Reflect>, BeanError> {
        let desc = self.resolve(property.into())?;
        self.accessor().read_plain(&*self.object, &desc)
    }

    /// Writes a property of the wrapped object.
    pub fn set_simple_value<'p>(
        &mut self,
        property: impl Into<PropertyRef<'p>>,
        value: impl Into<Value>,
    ) -> Result<(), BeanError> {
        let desc = self.resolve(property.into())?;
        let accessor = Accessor::new(&self.cache, self.options);
        accessor.write_plain(&mut *self.object, &desc, value.into())
    }

    /// Reads an item of a list, array or iterable property.
    pub fn get_indexed_value<'p>(
        &self,
        property: impl Into<PropertyRef<'p>>,
        index: usize,
    ) -> Result<Option<&dyn Reflect>, BeanError> {
        let desc = self.resolve(property.into())?;
        self.accessor().read_indexed(&*self.object, &desc, index)
    }

    /// Writes an item of a list or array property.
    pub fn set_indexed_value<'p>(
        &mut self,
        property: impl Into<PropertyRef<'p>>,
        index: usize,
        value: impl Into<Value>,
    ) -> Result<(), BeanError> {
        let desc = self.resolve(property.into())?;
        let accessor = Accessor::new(&self.cache, self.options);
        accessor.write_indexed(&mut *self.object, &desc, index, value.into())
    }

    /// Reads an entry of a map property.
    pub fn get_mapped_value<'p>(
        &self,
        property: impl Into<PropertyRef<'p>>,
        key: &str,
    ) -> Result<Option<&dyn Reflect>, BeanError> {
        let desc = self.resolve(property.into())?;
        self.accessor().read_mapped(&*self.object, &desc, key)
    }

    /// Writes an entry of a map property.
    pub fn set_mapped_value<'p>(
        &mut self,
        property: impl Into<PropertyRef<'p>>,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), BeanError> {
        let desc = self.resolve(property.into())?;
        let accessor = Accessor::new(&self.cache, self.options);
        accessor.write_mapped(&mut *self.object, &desc, key, value.into())
    }

    // -------------------------------------------------------------------------
    // Metadata

    /// Resolves a dotted path against declared types, without reading values.
    ///
    /// Returns `None` if a name along the path is unknown; bracket notation is
    /// rejected.
    pub fn get_property(&self, path: &str) -> Result<Option<PropertyDescriptor>, BeanError> {
        let path = PropertyPath::parse_plain(path)?;
        let mut info = self.object.reflect_type_info();
        let mut found = None;

        for segment in &path {
            let descriptor = self.cache.describe(info)?;
            let Some(desc) = descriptor.get(segment.name()) else {
                return Ok(None);
            };
            info = desc.value_info();
            found = Some(desc.clone());
        }
        Ok(found)
    }
}

impl fmt::Debug for BeanWrapper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanWrapper")
            .field("object", &self.object)
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeSet;
    use alloc::format;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use super::BeanWrapper;
    use crate::access::WrapOptions;
    use crate::derive::Bean;
    use crate::error::BeanErrorKind;
    use crate::registry::DescriptorCache;
    use crate::{Reflect, Value};

    #[derive(Bean, Default)]
    #[bean(default)]
    struct GenericBean {
        string: Option<String>,
        number: i32,
        bean: Option<Box<GenericBean>>,
        list: Option<Vec<String>>,
        array: Option<Box<[String]>>,
        set: Option<BTreeSet<String>>,
        map: Option<HashMap<String, String>>,
        beans: Vec<GenericBean>,
        bean_map: HashMap<String, GenericBean>,
        #[bean(read_only)]
        id: u32,
        #[bean(write_only)]
        secret: String,
    }

    #[derive(Bean)]
    struct Strict {
        code: u8,
    }

    #[derive(Bean, Default)]
    #[bean(default)]
    struct Holder {
        stricts: Vec<Strict>,
        strict: Option<Strict>,
    }

    fn text(value: Option<&dyn Reflect>) -> Option<&str> {
        value
            .and_then(|value| value.downcast_ref::<String>())
            .map(String::as_str)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&value| String::from(value)).collect()
    }

    // -------------------------------------------------------------------------
    // Direct access

    #[test]
    fn simple_round_trip() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        wrapper.set_simple_value("string", "a").unwrap();
        wrapper.set_simple_value("number", 5_i32).unwrap();
        assert_eq!(text(wrapper.get_simple_value("string").unwrap()), Some("a"));
        let number = wrapper.get_simple_value("number").unwrap().unwrap();
        assert_eq!(number.downcast_ref::<i32>(), Some(&5));

        wrapper.set_simple_value("string", Value::ABSENT).unwrap();
        assert!(wrapper.get_simple_value("string").unwrap().is_none());

        let err = wrapper.set_simple_value("number", Value::ABSENT).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert_eq!(err.property(), Some("number"));
    }

    #[test]
    fn simple_unknown_property() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.get_simple_value("nope").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert_eq!(err.property(), Some("nope"));

        let err = wrapper.get_simple_value("").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::InvalidArgument);
    }

    #[test]
    fn simple_by_descriptor() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let descriptor = wrapper.descriptor().unwrap();
        let number = descriptor.get("number").unwrap();
        wrapper.set_simple_value(number, 3_i32).unwrap();
        let value = wrapper.get_simple_value(number).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&3));

        let foreign = cache.describe_type::<Holder>().unwrap();
        let err = wrapper
            .get_simple_value(foreign.get("strict").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::InvalidArgument);
    }

    #[test]
    fn simple_type_mismatch() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.set_simple_value("number", "five").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert!(err.message().contains("number"));
    }

    #[test]
    fn access_flags() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.set_simple_value("id", 1_u32).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NotWritable);
        assert!(wrapper.get_simple_value("id").is_ok());

        wrapper.set_simple_value("secret", "s").unwrap();
        let err = wrapper.get_simple_value("secret").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NotReadable);

        drop(wrapper);
        assert_eq!(bean.secret, "s");
    }

    // -------------------------------------------------------------------------
    // Nested paths

    #[test]
    fn nested_write_instantiates() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        wrapper.set_value("bean.string", "X").unwrap();
        wrapper.set_value("bean.bean.number", 7_i32).unwrap();

        assert_eq!(text(wrapper.get_value("bean.string").unwrap()), Some("X"));
        let number = wrapper.get_value_as::<i32>("bean.bean.number").unwrap();
        assert_eq!(number, Some(&7));

        drop(wrapper);
        let nested = bean.bean.unwrap();
        assert_eq!(nested.string.as_deref(), Some("X"));
        assert_eq!(nested.bean.map(|b| b.number), Some(7));
    }

    #[test]
    fn nested_write_without_instantiation() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);
        wrapper.set_auto_instantiate(false);

        let err = wrapper.set_value("bean.string", "X").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert!(err.message().contains("string"));
        assert!(err.message().contains("null"));
    }

    #[test]
    fn nested_read_through_absent() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let wrapper = BeanWrapper::new(&cache, &mut bean);

        assert!(wrapper.get_value("bean").unwrap().is_none());

        let err = wrapper.get_value("bean.not-a-property").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert_eq!(err.property(), Some("bean"));
        assert!(err.message().contains("bean.not-a-property"));

        let err = wrapper.get_value("not-a-property").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::PropertyNotFound);
        assert_eq!(err.property(), Some("not-a-property"));
    }

    #[test]
    fn nested_write_through_container_fails() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.set_value("list.foo", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Construction);
        assert_eq!(err.property(), Some("list"));
    }

    #[test]
    fn nested_through_containers() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        wrapper.set_value("beans[1].string", "x").unwrap();
        wrapper.set_value("bean_map[k].number", 4_i32).unwrap();

        assert_eq!(text(wrapper.get_value("beans[1].string").unwrap()), Some("x"));
        assert_eq!(wrapper.get_value_as::<i32>("bean_map[k].number").unwrap(), Some(&4));

        drop(wrapper);
        assert_eq!(bean.beans.len(), 2);
        assert_eq!(bean.beans[0].string, None);
        assert_eq!(bean.bean_map["k"].number, 4);
    }

    #[test]
    fn nested_intermediate_index_without_growth() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);
        wrapper.set_auto_grow(false);

        let err = wrapper.set_value("beans[0].number", 1_i32).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Bounds);
        assert!(err.message().contains("index is unbound"));
    }

    #[test]
    fn malformed_path() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.get_value("list[1").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Syntax);
        assert_eq!(err.property(), Some("list"));

        let err = wrapper.set_value("", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::InvalidArgument);
    }

    // -------------------------------------------------------------------------
    // Indexed

    #[test]
    fn indexed_write_grows() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean {
            list: Some(Vec::new()),
            ..GenericBean::default()
        };
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        wrapper.set_indexed_value("list", 10, "x").unwrap();
        assert_eq!(text(wrapper.get_indexed_value("list", 10).unwrap()), Some("x"));
        assert_eq!(text(wrapper.get_indexed_value("list", 3).unwrap()), Some(""));

        drop(wrapper);
        let list = bean.list.unwrap();
        assert_eq!(list.len(), 11);
        assert!(list[..10].iter().all(String::is_empty));
    }

    #[test]
    fn indexed_write_without_growth() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);
        wrapper.set_auto_grow(false);

        let err = wrapper.set_value("list[0]", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Bounds);
        assert_eq!(err.property(), Some("list"));
        assert!(err.message().contains("index is unbound"));

        // The list itself was created before the index check.
        assert!(wrapper.get_value("list").unwrap().is_some());
    }

    #[test]
    fn indexed_write_without_instantiation() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let options = WrapOptions {
            auto_instantiate: false,
            ..WrapOptions::default()
        };
        let mut wrapper = BeanWrapper::with_options(&cache, &mut bean, options);

        let err = wrapper.set_value("list[0]", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert_eq!(err.property(), Some("list"));
    }

    #[test]
    fn indexed_read_bounds() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean {
            list: Some(strings(&["a", "b"])),
            set: Some(strings(&["b", "a"]).into_iter().collect()),
            ..GenericBean::default()
        };
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        assert_eq!(text(wrapper.get_value("list[1]").unwrap()), Some("b"));
        assert_eq!(text(wrapper.get_value("set[1]").unwrap()), Some("b"));

        let err = wrapper.get_value("list[2]").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Bounds);
        assert_eq!(err.property(), Some("list"));

        wrapper.set_out_of_bounds_safe(true);
        assert!(wrapper.get_value("list[2]").unwrap().is_none());
        assert!(wrapper.get_value("set[5]").unwrap().is_none());
        assert!(wrapper.get_indexed_value("list", 10).unwrap().is_none());
    }

    #[test]
    fn indexed_read_of_absent_container() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.get_indexed_value("list", 0).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert!(err.message().contains("null"));
    }

    #[test]
    fn indexed_on_unsupported_properties() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean {
            set: Some(BTreeSet::new()),
            ..GenericBean::default()
        };
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.set_value("set[0]", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert!(err.message().contains("Only List and array"));

        let err = wrapper.set_value("string[1]", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert!(err.message().contains("Only List and array"));

        let err = wrapper.get_value("string[1]").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert!(err.message().contains("not indexed"));

        let err = wrapper.get_value("list[first]").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Syntax);
        assert!(err.message().contains("Cannot parse"));
    }

    #[test]
    fn bracket_on_plain_property_is_a_mismatch() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.get_value("string[abc]").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert_eq!(err.property(), Some("string"));
        assert!(err.message().contains("not indexed"));

        let err = wrapper.set_value("number[abc]", 1_i32).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert_eq!(err.property(), Some("number"));
        assert!(err.message().contains("Only List and array"));

        let err = wrapper.set_value("number[abc].string", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert_eq!(err.property(), Some("number"));

        let err = wrapper.set_value("set[abc]", "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert!(err.message().contains("Only List and array"));
    }

    #[test]
    fn largest_index_does_not_grow() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);
        assert!(wrapper.is_auto_grow());

        let path = format!("array[{}]", usize::MAX);
        let err = wrapper.set_value(&path, "x").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Bounds);
        assert_eq!(err.property(), Some("array"));

        let path = format!("beans[{}].number", usize::MAX);
        let err = wrapper.set_value(&path, 1_i32).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Bounds);
        assert_eq!(err.property(), Some("beans"));
        assert!(bean.beans.is_empty());
    }

    #[test]
    fn array_write_grows() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        wrapper.set_value("array[2]", "c").unwrap();
        wrapper.set_value("array[0]", "a").unwrap();

        drop(wrapper);
        assert_eq!(bean.array.as_deref(), Some(&strings(&["a", "", "c"])[..]));
    }

    #[test]
    fn growth_rejects_absent_items() {
        let cache = DescriptorCache::new();
        let mut holder = Holder::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut holder);

        let err = wrapper
            .set_indexed_value("stricts", 1, Strict { code: 1 })
            .unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert_eq!(err.property(), Some("stricts"));

        wrapper.set_indexed_value("stricts", 0, Strict { code: 2 }).unwrap();

        let err = wrapper.set_value("strict.code", 1_u8).unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::Construction);
        assert_eq!(err.property(), Some("strict"));

        drop(wrapper);
        assert_eq!(holder.stricts.len(), 1);
        assert_eq!(holder.stricts[0].code, 2);
    }

    // -------------------------------------------------------------------------
    // Mapped

    #[test]
    fn mapped_keys_keep_dots() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        wrapper.set_value("map[a.b.c]", "v").unwrap();
        assert_eq!(text(wrapper.get_value("map[a.b.c]").unwrap()), Some("v"));
        assert_eq!(text(wrapper.get_mapped_value("map", "a.b.c").unwrap()), Some("v"));
        assert!(wrapper.get_value("map[missing]").unwrap().is_none());

        wrapper.set_mapped_value("map", "x", "y").unwrap();
        drop(wrapper);
        assert_eq!(bean.map.map(|map| map.len()), Some(2));
    }

    #[test]
    fn mapped_without_instantiation() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::with_options(&cache, &mut bean, WrapOptions::STRICT);

        let err = wrapper.set_value("map[en]", "hi").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
        assert_eq!(err.property(), Some("map"));

        let err = wrapper.get_mapped_value("map", "en").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::NullReference);
    }

    #[test]
    fn mapped_on_unsupported_properties() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let mut wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.get_mapped_value("string", "k").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert!(err.message().contains("not mapped"));

        let err = wrapper.set_mapped_value("list", "k", "v").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
    }

    // -------------------------------------------------------------------------
    // Metadata and wrapping

    #[test]
    fn property_lookup() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let wrapper = BeanWrapper::new(&cache, &mut bean);

        let desc = wrapper.get_property("bean.bean.string").unwrap().unwrap();
        assert_eq!(desc.name(), "string");
        assert!(desc.owner().is::<GenericBean>());

        assert!(wrapper.get_property("map").unwrap().unwrap().is_mapped());
        assert!(wrapper.get_property("bean.unknown").unwrap().is_none());
        assert!(wrapper.get_property("unknown.bean").unwrap().is_none());

        let err = wrapper.get_property("list[0]").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::InvalidArgument);
        let err = wrapper.get_property("").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::InvalidArgument);
    }

    #[test]
    fn wrap_and_unwrap() {
        let cache = DescriptorCache::new();
        let mut first = GenericBean::default();
        let mut second = GenericBean::default();

        let mut wrapper = BeanWrapper::new(&cache, &mut first);
        let expected = cache.describe_type::<GenericBean>().unwrap();
        assert!(Arc::ptr_eq(&wrapper.descriptor().unwrap(), &expected));

        wrapper.set_simple_value("number", 1_i32).unwrap();
        let previous = wrapper.wrap(&mut second);
        assert_eq!(previous.downcast_ref::<GenericBean>().map(|b| b.number), Some(1));

        wrapper.set_simple_value("number", 2_i32).unwrap();
        let object = wrapper.unwrap();
        assert_eq!(object.downcast_ref::<GenericBean>().map(|b| b.number), Some(2));
    }

    #[test]
    fn typed_read_mismatch() {
        let cache = DescriptorCache::new();
        let mut bean = GenericBean::default();
        let wrapper = BeanWrapper::new(&cache, &mut bean);

        let err = wrapper.get_value_as::<u32>("number").unwrap_err();
        assert_eq!(err.kind(), BeanErrorKind::TypeMismatch);
        assert_eq!(wrapper.get_value_as::<i32>("number").unwrap(), Some(&0));
    }
}
