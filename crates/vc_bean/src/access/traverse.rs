//! Single-property operations and the path traversal built on them.
//!
//! Every operation takes the object holding the property explicitly, so a
//! wrapper can lend its object mutably while the traversal state stays
//! borrowed immutably.

use log::{debug, trace};

use crate::access::{PropertyPath, Qualifier, Segment, WrapOptions, parse_index};
use crate::error::BeanError;
use crate::info::{CoerceError, ReflectKind, TypeInfo};
use crate::ops::{List, ReflectMut, ReflectRef};
use crate::registry::{DescriptorCache, PropertyDescriptor};
use crate::{Reflect, Value};

// -----------------------------------------------------------------------------
// Helpers

/// Returns the value itself, or the content of an `Option`.
#[inline]
fn present(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Optional(optional) => optional.value(),
        _ => Some(value),
    }
}

/// Mutable version of [`present`].
#[inline]
fn present_mut(value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    if value.reflect_kind() != ReflectKind::Optional {
        return Some(value);
    }
    match value.reflect_mut() {
        ReflectMut::Optional(optional) => optional.value_mut(),
        _ => None,
    }
}

/// Returns the slot of a property in its bean.
fn slot<'o>(
    object: &'o dyn Reflect,
    desc: &PropertyDescriptor,
) -> Result<&'o dyn Reflect, BeanError> {
    match object.reflect_ref() {
        ReflectRef::Bean(bean) => bean.property_at(desc.info().index()),
        _ => None,
    }
    .ok_or_else(|| BeanError::property_not_found(desc.name(), object.reflect_type_path()))
}

/// Mutable version of [`slot`].
fn slot_mut<'o>(
    object: &'o mut dyn Reflect,
    desc: &PropertyDescriptor,
) -> Result<&'o mut dyn Reflect, BeanError> {
    let type_path = object.reflect_type_path();
    match object.reflect_mut() {
        ReflectMut::Bean(bean) => bean.property_at_mut(desc.info().index()),
        _ => None,
    }
    .ok_or_else(|| BeanError::property_not_found(desc.name(), type_path))
}

/// Replaces the content of `slot`, a value of type `declared`.
fn assign(
    slot: &mut dyn Reflect,
    declared: &TypeInfo,
    name: &str,
    value: Value,
) -> Result<(), BeanError> {
    let value = declared
        .coerce(value)
        .map_err(|err| BeanError::rejected_value(name, &err))?;
    slot.set(value)
        .map_err(|value| BeanError::rejected_value(name, &CoerceError::mismatch(declared, &*value)))
}

/// Length a sequence needs to hold `index`.
#[inline]
fn grown_len(name: &str, index: usize, len: usize) -> Result<usize, BeanError> {
    index
        .checked_add(1)
        .ok_or_else(|| BeanError::out_of_bounds(name, index, len))
}

/// Appends default items until the list holds `len` of them.
fn pad(list: &mut dyn List, item: &TypeInfo, name: &str, len: usize) -> Result<(), BeanError> {
    if list.len() >= len {
        return Ok(());
    }
    debug!("growing '{name}' from {} to {len} elements", list.len());
    while list.len() < len {
        list.push(Value::default_of(item))
            .map_err(|err| BeanError::rejected_element(name, &err))?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Accessor

/// The descriptor cache and the policies of one wrapper.
#[derive(Clone, Copy)]
pub(crate) struct Accessor<'c> {
    pub cache: &'c DescriptorCache,
    pub options: WrapOptions,
}

impl<'c> Accessor<'c> {
    #[inline]
    pub const fn new(cache: &'c DescriptorCache, options: WrapOptions) -> Self {
        Self { cache, options }
    }

    /// Resolves a property of the runtime type of `object` during traversal.
    pub fn lookup(&self, object: &dyn Reflect, name: &str) -> Result<PropertyDescriptor, BeanError> {
        self.cache
            .describe_value(object)?
            .get(name)
            .cloned()
            .ok_or_else(|| BeanError::property_not_found(name, object.reflect_type_path()))
    }

    // -------------------------------------------------------------------------
    // Read

    pub fn read_plain<'o>(
        &self,
        object: &'o dyn Reflect,
        desc: &PropertyDescriptor,
    ) -> Result<Option<&'o dyn Reflect>, BeanError> {
        if !desc.is_readable() {
            return Err(BeanError::not_readable(desc.name()));
        }
        Ok(present(slot(object, desc)?))
    }

    pub fn read_indexed<'o>(
        &self,
        object: &'o dyn Reflect,
        desc: &PropertyDescriptor,
        index: usize,
    ) -> Result<Option<&'o dyn Reflect>, BeanError> {
        if !desc.is_indexed() {
            return Err(BeanError::not_indexed(desc.name()));
        }
        let container = self
            .read_plain(object, desc)?
            .ok_or_else(|| BeanError::null_value(desc.name()))?;

        let (item, len) = match container.reflect_ref() {
            ReflectRef::List(list) => (list.get(index), list.len()),
            ReflectRef::Array(array) => (array.get(index), array.len()),
            // Walks from the first item on every call.
            ReflectRef::Iterable(iterable) => (iterable.nth(index), iterable.len()),
            _ => return Err(BeanError::not_indexed(desc.name())),
        };

        match item {
            Some(item) => Ok(present(item)),
            None if self.options.out_of_bounds_safe => {
                trace!("'{}[{index}]' is out of bounds, read as absent", desc.name());
                Ok(None)
            }
            None => Err(BeanError::out_of_bounds(desc.name(), index, len)),
        }
    }

    pub fn read_mapped<'o>(
        &self,
        object: &'o dyn Reflect,
        desc: &PropertyDescriptor,
        key: &str,
    ) -> Result<Option<&'o dyn Reflect>, BeanError> {
        if !desc.is_mapped() {
            return Err(BeanError::not_mapped(desc.name()));
        }
        let container = self
            .read_plain(object, desc)?
            .ok_or_else(|| BeanError::null_value(desc.name()))?;

        match container.reflect_ref() {
            ReflectRef::Map(map) => Ok(map.get(key).and_then(present)),
            _ => Err(BeanError::not_mapped(desc.name())),
        }
    }

    /// Reads a segment: bracket content is a key for a mapped property,
    /// an index for anything else.
    fn read_segment<'o>(
        &self,
        object: &'o dyn Reflect,
        desc: &PropertyDescriptor,
        segment: &Segment<'_>,
    ) -> Result<Option<&'o dyn Reflect>, BeanError> {
        match segment.qualifier() {
            Qualifier::None => self.read_plain(object, desc),
            Qualifier::Bracket(key) if desc.is_mapped() => self.read_mapped(object, desc, key),
            Qualifier::Bracket(_) if !desc.is_indexed() => {
                Err(BeanError::not_indexed(desc.name()))
            }
            Qualifier::Bracket(raw) => {
                let index = parse_index(desc.name(), raw)?;
                self.read_indexed(object, desc, index)
            }
        }
    }

    /// Resolves a whole path for reading.
    pub fn read_path<'o>(
        &self,
        root: &'o dyn Reflect,
        path: &PropertyPath<'_>,
    ) -> Result<Option<&'o dyn Reflect>, BeanError> {
        let mut current = root;
        let last = path.len() - 1;

        for (depth, segment) in path.iter().enumerate() {
            trace!("reading '{segment}' of `{}`", current.reflect_type_path());
            let desc = self.lookup(current, segment.name())?;
            let value = self.read_segment(current, &desc, segment)?;
            if depth == last {
                return Ok(value);
            }
            current = value.ok_or_else(|| BeanError::null_in_path(path.as_str(), segment.name()))?;
        }
        Ok(Some(current))
    }

    // -------------------------------------------------------------------------
    // Write

    /// Returns the present value in `slot`, creating it when absent.
    ///
    /// `absent` builds the error reported when creation is disabled.
    fn instantiate<'o>(
        &self,
        slot: &'o mut dyn Reflect,
        declared: &'static TypeInfo,
        name: &str,
        absent: impl Fn() -> BeanError,
    ) -> Result<&'o mut dyn Reflect, BeanError> {
        if present(&*slot).is_none() {
            if !self.options.auto_instantiate {
                return Err(absent());
            }
            let target = declared.strip_optional();
            let Some(value) = target.default_value() else {
                return Err(BeanError::not_instantiable(
                    name,
                    target.type_path(),
                    "no default constructor is registered",
                ));
            };
            debug!("instantiating `{}` for property '{name}'", target.type_path());
            assign(slot, declared, name, Value::boxed(value))?;
        }
        present_mut(slot).ok_or_else(absent)
    }

    /// Returns the present container held by an indexed or mapped property.
    fn container_mut<'o>(
        &self,
        object: &'o mut dyn Reflect,
        desc: &PropertyDescriptor,
    ) -> Result<&'o mut dyn Reflect, BeanError> {
        if !desc.is_readable() {
            return Err(BeanError::not_readable(desc.name()));
        }
        let slot = slot_mut(object, desc)?;
        if present(&*slot).is_none() && self.options.auto_instantiate && !desc.is_writable() {
            return Err(BeanError::not_writable(desc.name()));
        }
        self.instantiate(slot, desc.type_info(), desc.name(), || {
            BeanError::null_value(desc.name())
        })
    }

    pub fn write_plain(
        &self,
        object: &mut dyn Reflect,
        desc: &PropertyDescriptor,
        value: Value,
    ) -> Result<(), BeanError> {
        if !desc.is_writable() {
            return Err(BeanError::not_writable(desc.name()));
        }
        let slot = slot_mut(object, desc)?;
        assign(slot, desc.type_info(), desc.name(), value)
    }

    pub fn write_indexed(
        &self,
        object: &mut dyn Reflect,
        desc: &PropertyDescriptor,
        index: usize,
        value: Value,
    ) -> Result<(), BeanError> {
        let name = desc.name();
        if !desc.value_info().kind().is_index_writable() {
            return Err(BeanError::not_index_writable(name, desc.value_info().type_path()));
        }
        let container = self.container_mut(object, desc)?;
        let Some(item) = container.reflect_type_info().item_info() else {
            return Err(BeanError::not_indexed(name));
        };

        match container.reflect_mut() {
            ReflectMut::List(list) => {
                let len = list.len();
                if index >= len {
                    if !self.options.auto_grow {
                        return Err(BeanError::unbound_index(name, index, len));
                    }
                    pad(list, item, name, index)?;
                    return list
                        .push(value)
                        .map_err(|err| BeanError::rejected_value(name, &err));
                }
                let slot = list
                    .get_mut(index)
                    .ok_or_else(|| BeanError::out_of_bounds(name, index, len))?;
                assign(slot, item, name, value)
            }
            ReflectMut::Array(array) => {
                let len = array.len();
                if index >= len {
                    if !self.options.auto_grow {
                        return Err(BeanError::unbound_index(name, index, len));
                    }
                    let grown = grown_len(name, index, len)?;
                    debug!("growing '{name}' from {len} to {grown} elements");
                    array
                        .resize(grown)
                        .map_err(|err| BeanError::rejected_element(name, &err))?;
                }
                let slot = array
                    .get_mut(index)
                    .ok_or_else(|| BeanError::out_of_bounds(name, index, len))?;
                assign(slot, item, name, value)
            }
            _ => Err(BeanError::not_index_writable(name, desc.value_info().type_path())),
        }
    }

    pub fn write_mapped(
        &self,
        object: &mut dyn Reflect,
        desc: &PropertyDescriptor,
        key: &str,
        value: Value,
    ) -> Result<(), BeanError> {
        if !desc.is_mapped() {
            return Err(BeanError::not_mapped(desc.name()));
        }
        let container = self.container_mut(object, desc)?;
        match container.reflect_mut() {
            ReflectMut::Map(map) => map
                .insert(key, value)
                .map_err(|err| BeanError::rejected_value(desc.name(), &err)),
            _ => Err(BeanError::not_mapped(desc.name())),
        }
    }

    /// Writes the final segment of a path.
    fn write_segment(
        &self,
        object: &mut dyn Reflect,
        desc: &PropertyDescriptor,
        segment: &Segment<'_>,
        value: Value,
    ) -> Result<(), BeanError> {
        match segment.qualifier() {
            Qualifier::None => self.write_plain(object, desc, value),
            Qualifier::Bracket(key) if desc.is_mapped() => {
                self.write_mapped(object, desc, key, value)
            }
            Qualifier::Bracket(_) if !desc.value_info().kind().is_index_writable() => Err(
                BeanError::not_index_writable(desc.name(), desc.value_info().type_path()),
            ),
            Qualifier::Bracket(raw) => {
                let index = parse_index(desc.name(), raw)?;
                self.write_indexed(object, desc, index, value)
            }
        }
    }

    /// Steps into the value of a non-final segment, on the way to a write.
    ///
    /// Absent values are created when allowed, lists and arrays grow to
    /// hold the index.
    fn descend_mut<'o>(
        &self,
        object: &'o mut dyn Reflect,
        desc: &PropertyDescriptor,
        segment: &Segment<'_>,
        path: &PropertyPath<'_>,
    ) -> Result<&'o mut dyn Reflect, BeanError> {
        let name = desc.name();
        let absent = || BeanError::null_in_path(path.as_str(), name);

        let raw = match segment.qualifier() {
            Qualifier::None => {
                if !desc.is_readable() {
                    return Err(BeanError::not_readable(name));
                }
                let slot = slot_mut(object, desc)?;
                if present(&*slot).is_none() && self.options.auto_instantiate {
                    if !desc.is_writable() {
                        return Err(BeanError::not_writable(name));
                    }
                    if desc.value_info().kind() != ReflectKind::Bean {
                        return Err(BeanError::not_instantiable(
                            name,
                            desc.value_info().type_path(),
                            "only beans hold nested properties",
                        ));
                    }
                }
                return self.instantiate(slot, desc.type_info(), name, absent);
            }
            Qualifier::Bracket(raw) => raw,
        };

        if desc.is_mapped() {
            let container = self.container_mut(object, desc)?;
            let Some(value_info) = container.reflect_type_info().as_map().map(|m| m.value_info())
            else {
                return Err(BeanError::not_mapped(name));
            };
            let ReflectMut::Map(map) = container.reflect_mut() else {
                return Err(BeanError::not_mapped(name));
            };
            if map.get(raw).is_none() {
                if !self.options.auto_instantiate {
                    return Err(absent());
                }
                debug!("inserting a default entry '{raw}' into '{name}'");
                map.insert(raw, Value::default_of(value_info))
                    .map_err(|err| match err {
                        CoerceError::Absent { expected } => BeanError::not_instantiable(
                            name,
                            expected,
                            "no default constructor is registered",
                        ),
                        err => BeanError::rejected_value(name, &err),
                    })?;
            }
            let entry = map.get_mut(raw).ok_or_else(absent)?;
            return self.instantiate(entry, value_info, name, absent);
        }

        if !desc.is_indexed() {
            return Err(BeanError::not_indexed(name));
        }
        if !desc.value_info().kind().is_index_writable() {
            return Err(BeanError::not_index_writable(name, desc.value_info().type_path()));
        }
        let index = parse_index(name, raw)?;
        let container = self.container_mut(object, desc)?;
        let Some(item) = container.reflect_type_info().item_info() else {
            return Err(BeanError::not_indexed(name));
        };

        let grow = self.options.auto_grow;
        let element = match container.reflect_mut() {
            ReflectMut::List(list) => {
                let len = list.len();
                if index >= len {
                    if !grow {
                        return Err(BeanError::unbound_index(name, index, len));
                    }
                    pad(list, item, name, grown_len(name, index, len)?)?;
                }
                list.get_mut(index)
            }
            ReflectMut::Array(array) => {
                let len = array.len();
                if index >= len {
                    if !grow {
                        return Err(BeanError::unbound_index(name, index, len));
                    }
                    let grown = grown_len(name, index, len)?;
                    debug!("growing '{name}' from {len} to {grown} elements");
                    array
                        .resize(grown)
                        .map_err(|err| BeanError::rejected_element(name, &err))?;
                }
                array.get_mut(index)
            }
            _ => return Err(BeanError::not_index_writable(name, desc.value_info().type_path())),
        };
        let element = element.ok_or_else(absent)?;
        self.instantiate(element, item, name, absent)
    }

    /// Resolves a whole path and writes its final segment.
    pub fn write_path(
        &self,
        root: &mut dyn Reflect,
        path: &PropertyPath<'_>,
        value: Value,
    ) -> Result<(), BeanError> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Err(BeanError::empty_path());
        };

        let mut current = root;
        for segment in parents {
            trace!("stepping into '{segment}' of `{}`", current.reflect_type_path());
            let desc = self.lookup(&*current, segment.name())?;
            current = self.descend_mut(current, &desc, segment, path)?;
        }

        trace!("writing '{last}' of `{}`", current.reflect_type_path());
        let desc = self.lookup(&*current, last.name())?;
        self.write_segment(current, &desc, last, value)
    }
}
