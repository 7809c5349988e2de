use crate::impls::GenericTypeInfoCell;
use crate::info::{OptionalInfo, TypeInfo, Typed};
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;
use crate::Reflect;

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(T::as_reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(T::as_reflect_mut)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::{Optional, ReflectRef};

    #[test]
    fn optional_view() {
        let mut name: Option<String> = None;
        assert!(!name.is_present());

        assert!(name.set(Box::new(Some(String::from("x")))).is_ok());
        assert!(name.set(Box::new(String::from("x"))).is_err());

        let ReflectRef::Optional(optional) = name.reflect_ref() else {
            panic!("expected an optional");
        };
        assert_eq!(optional.value().unwrap().downcast_ref::<String>().unwrap(), "x");
    }
}
