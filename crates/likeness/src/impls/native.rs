//! Types compared by native value equality.

use std::borrow::Cow;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::comparable::{downcast_eq, AsAny, Comparable};
use crate::{TypeDescriptor, TypeKind};

crate::__comparable_native!(bool, Primitive, "{}");
crate::__comparable_native!(char, Primitive, "{}");
crate::__comparable_native!(i8, Primitive, "{}");
crate::__comparable_native!(i16, Primitive, "{}");
crate::__comparable_native!(i32, Primitive, "{}");
crate::__comparable_native!(i64, Primitive, "{}");
crate::__comparable_native!(i128, Primitive, "{}");
crate::__comparable_native!(isize, Primitive, "{}");
crate::__comparable_native!(u8, Primitive, "{}");
crate::__comparable_native!(u16, Primitive, "{}");
crate::__comparable_native!(u32, Primitive, "{}");
crate::__comparable_native!(u64, Primitive, "{}");
crate::__comparable_native!(u128, Primitive, "{}");
crate::__comparable_native!(usize, Primitive, "{}");
crate::__comparable_native!(Uuid, Primitive, "{}");
crate::__comparable_native!((), Primitive, "{:?}");

crate::__comparable_native!(String, Text, "{}");
crate::__comparable_native!(&'static str, Text, "{}");
crate::__comparable_native!(Cow<'static, str>, Text, "{}");

crate::__comparable_native!(Decimal, Decimal, "{}");

// Floats use value equality where NaN equals NaN, so every value is equal
// to itself.
macro_rules! float_impl {
    ($($ty:ty),+) => {
        $(
            impl Comparable for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::of::<$ty>(TypeKind::Primitive)
                }

                fn render(&self) -> String {
                    self.to_string()
                }

                fn native_eq(&self, other: &dyn Comparable) -> bool {
                    if self.is_nan() {
                        return other.as_any().downcast_ref::<$ty>().is_some_and(|o| o.is_nan());
                    }
                    downcast_eq(self, other)
                }
            }
        )+
    };
}

float_impl!(f32, f64);
