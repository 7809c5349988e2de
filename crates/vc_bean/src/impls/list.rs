use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::impls::{GenericTypeInfoCell, take_item};
use crate::info::{CoerceError, ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;
use crate::{Reflect, Value};

macro_rules! impl_list {
    ($ty:ident, $push:ident, $view:ty) => {
        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <$view>::get(self, index).map(T::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                <$view>::get_mut(self, index).map(T::as_reflect_mut)
            }

            fn push(&mut self, value: Value) -> Result<(), CoerceError> {
                self.$push(take_item::<T>(value)?);
                Ok(())
            }

            #[inline]
            fn len(&self) -> usize {
                <$view>::len(self)
            }
        }
    };
}

impl_list!(Vec, push, [T]);
impl_list!(VecDeque, push_back, VecDeque<T>);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::{ReflectKind, Typed};
    use crate::{Reflect, Value};
    use crate::ops::List;

    #[test]
    fn vec_as_list() {
        let mut names = vec![String::from("a")];
        let list: &mut dyn List = &mut names;

        list.push(Value::from("b")).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().downcast_ref::<String>().unwrap(), "b");
        assert!(list.get(2).is_none());
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn optional_items_accept_absent() {
        let mut items: VecDeque<Option<u8>> = VecDeque::new();
        let list: &mut dyn List = &mut items;

        list.push(Value::ABSENT).unwrap();
        list.push(Value::from(3_u8)).unwrap();
        assert_eq!(items, [None, Some(3)]);
    }

    #[test]
    fn list_info_and_debug() {
        let info = <Vec<u8>>::type_info();
        assert_eq!(info.kind(), ReflectKind::List);
        assert!(info.item_info().unwrap().type_is::<u8>());

        let items: Vec<u8> = vec![1, 2];
        let value: &dyn Reflect = &items;
        assert_eq!(format!("{value:?}"), "[1, 2]");
    }
}
