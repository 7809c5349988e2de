use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use core::str::FromStr;
use std::collections::HashMap;

use crate::impls::{GenericTypeInfoCell, take_item};
use crate::info::{CoerceError, MapInfo, TypeInfo, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;
use crate::{Reflect, Value};

/// Parses a textual key, `None` if it has no valid representation.
#[inline]
fn parse_key<K: FromStr>(key: &str) -> Option<K> {
    key.parse::<K>().ok()
}

macro_rules! impl_map {
    ($ty:ty, [$($bound:tt)*] $(, $state:ident)?) => {
        impl<K, V $(, $state)?> Typed for $ty
        where
            K: Reflect + Typed + FromStr + $($bound)*,
            V: Reflect + Typed,
            $($state: BuildHasher + Default + Send + Sync + 'static,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V $(, $state)?> Reflect for $ty
        where
            K: Reflect + Typed + FromStr + $($bound)*,
            V: Reflect + Typed,
            $($state: BuildHasher + Default + Send + Sync + 'static,)?
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<K, V $(, $state)?> Map for $ty
        where
            K: Reflect + Typed + FromStr + $($bound)*,
            V: Reflect + Typed,
            $($state: BuildHasher + Default + Send + Sync + 'static,)?
        {
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                let key = parse_key::<K>(key)?;
                <$ty>::get(self, &key).map(V::as_reflect)
            }

            fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
                let key = parse_key::<K>(key)?;
                <$ty>::get_mut(self, &key).map(V::as_reflect_mut)
            }

            fn insert(&mut self, key: &str, value: Value) -> Result<(), CoerceError> {
                let Some(parsed) = parse_key::<K>(key) else {
                    return Err(CoerceError::Unparsable {
                        input: key.to_owned(),
                        expected: K::type_info().type_path(),
                    });
                };
                let value = take_item::<V>(value)?;
                <$ty>::insert(self, parsed, value);
                Ok(())
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(<$ty>::iter(self).map(|(k, v)| (k.as_reflect(), v.as_reflect())))
            }
        }
    };
}

impl_map!(HashMap<K, V, S>, [Eq + Hash], S);
impl_map!(BTreeMap<K, V>, [Ord]);
