use alloc::boxed::Box;
use alloc::collections::{BTreeSet, LinkedList};
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use crate::impls::GenericTypeInfoCell;
use crate::info::{IterableInfo, TypeInfo, Typed};
use crate::ops::Iterable;
use crate::reflection::impl_reflect_cast_fn;
use crate::Reflect;

macro_rules! impl_iterable {
    ($ty:ty, [$($bound:tt)*] $(, $state:ident)?) => {
        impl<T: Reflect + Typed + $($bound)* $(, $state: BuildHasher + Default + Send + Sync + 'static)?> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Iterable(IterableInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed + $($bound)* $(, $state: BuildHasher + Default + Send + Sync + 'static)?> Reflect for $ty {
            impl_reflect_cast_fn!(Iterable);
        }

        impl<T: Reflect + Typed + $($bound)* $(, $state: BuildHasher + Default + Send + Sync + 'static)?> Iterable for $ty {
            #[inline]
            fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
                Box::new(<$ty>::iter(self).map(T::as_reflect))
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }
        }
    };
}

impl_iterable!(HashSet<T, S>, [Eq + Hash], S);
impl_iterable!(BTreeSet<T>, [Ord]);
impl_iterable!(LinkedList<T>, []);

#[cfg(test)]
mod tests {
    use alloc::collections::LinkedList;
    use alloc::string::String;
    use std::collections::HashSet;

    use crate::info::{ReflectKind, Typed};
    use crate::ops::Iterable;

    #[test]
    fn linked_list_keeps_order() {
        let items = LinkedList::from([String::from("a"), String::from("b")]);
        let iterable: &dyn Iterable = &items;

        assert_eq!(iterable.len(), 2);
        assert_eq!(iterable.nth(0).unwrap().downcast_ref::<String>().unwrap(), "a");
        assert_eq!(iterable.nth(1).unwrap().downcast_ref::<String>().unwrap(), "b");
        assert!(iterable.nth(2).is_none());
    }

    #[test]
    fn hash_set_is_iterable() {
        assert_eq!(<HashSet<u8>>::type_info().kind(), ReflectKind::Iterable);

        let set = HashSet::from([7_u8]);
        let iterable: &dyn Iterable = &set;
        assert_eq!(iterable.nth(0).unwrap().downcast_ref::<u8>(), Some(&7));
    }
}
