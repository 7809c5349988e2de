use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::impls::{GenericTypeInfoCell, take_item};
use crate::info::{ArrayInfo, CoerceError, TypeInfo, Typed};
use crate::ops::Array;
use crate::reflection::impl_reflect_cast_fn;
use crate::{Reflect, Value};

impl<T: Reflect + Typed> Typed for Box<[T]> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Box<[T]> {
    impl_reflect_cast_fn!(Array);
}

impl<T: Reflect + Typed> Array for Box<[T]> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(T::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(T::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn resize(&mut self, len: usize) -> Result<(), CoerceError> {
        let old = <[T]>::len(self);
        if len == old {
            return Ok(());
        }
        let mut items: Vec<T> = mem::take(self).into_vec();
        if len < old {
            items.truncate(len);
            *self = items.into_boxed_slice();
            return Ok(());
        }
        let padding = (old..len)
            .map(|_| take_item::<T>(Value::default_of(T::type_info())))
            .collect::<Result<Vec<T>, _>>();
        let result = padding.map(|padding| items.extend(padding));
        *self = items.into_boxed_slice();
        result
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::derive::Bean;
    use crate::info::CoerceError;
    use crate::ops::Array;

    #[derive(Bean)]
    struct Strict {
        id: u8,
    }

    #[test]
    fn resize_pads_with_defaults() {
        let mut items: Box<[String]> = Box::new([]);
        let array: &mut dyn Array = &mut items;

        array.resize(3).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(2).unwrap().downcast_ref::<String>().unwrap(), "");

        array.resize(1).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn resize_without_constructor_keeps_array() {
        let mut items: Box<[Strict]> = Box::new([Strict { id: 1 }]);
        let array: &mut dyn Array = &mut items;

        let err = array.resize(4).unwrap_err();
        assert!(matches!(err, CoerceError::Absent { .. }));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }
}
