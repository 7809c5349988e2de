use alloc::string::String;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed, default_of};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_native {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Opaque(OpaqueInfo::new::<Self>().with_constructor(default_of::<Self>))
                })
            }
        }

        impl $crate::Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

impl_native!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn natives_are_opaque_and_default_constructible() {
        let info = <u64 as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Opaque);
        let zero = info.default_value().unwrap();
        assert_eq!(zero.downcast_ref::<u64>(), Some(&0));
    }

    #[test]
    fn set_is_type_checked() {
        let mut text = String::from("a");
        assert!(text.set(Box::new(String::from("b"))).is_ok());
        assert_eq!(text, "b");
        assert!(text.set(Box::new('c')).is_err());
    }

    #[test]
    fn debug_uses_the_value() {
        let value: Box<dyn Reflect> = Box::new(12_i8);
        assert_eq!(format!("{value:?}"), "12");
    }
}
