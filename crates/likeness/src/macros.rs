//! Registration macros.
//!
//! These generate [`Comparable`](crate::Comparable) impls, playing the part
//! runtime reflection would play elsewhere: the member list of a record is
//! fixed at build time, in declaration order.

/// Implement `Comparable` for a struct compared member by member.
///
/// List the fields to compare, in the order they should be compared. A
/// field may carry a display name with `as "Name"`; that name is used in
/// mismatch descriptions and allow-lists. A struct that embeds its ancestor
/// names the embedding field with `extends field: Type`; the ancestor's
/// members become inherited members of the struct.
///
/// ```rust
/// use likeness::{comparable_record, compare_objects, CompareConfig};
///
/// struct Animal {
///     name: String,
/// }
///
/// struct Dog {
///     base: Animal,
///     breed: String,
/// }
///
/// comparable_record!(Animal { name as "Name" });
/// comparable_record!(Dog extends base: Animal { breed as "Breed" });
///
/// let rex = Dog { base: Animal { name: "Rex".into() }, breed: "Collie".into() };
/// let max = Dog { base: Animal { name: "Max".into() }, breed: "Collie".into() };
///
/// assert!(compare_objects(&rex, &max, &CompareConfig::default()).is_ok());
/// assert!(compare_objects(&rex, &max, &CompareConfig::strict()).is_err());
/// ```
#[macro_export]
macro_rules! comparable_record {
    (
        $ty:ident $(extends $base:ident : $base_ty:ty)?
        { $($field:ident $(as $rename:literal)?),* $(,)? }
    ) => {
        impl $crate::Comparable for $ty {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::of::<$ty>($crate::TypeKind::Record(
                    <$ty as $crate::Comparable>::member_descriptors,
                ))
            }

            fn member_descriptors() -> ::std::vec::Vec<$crate::MemberDescriptor> {
                #[allow(unused_mut)]
                let mut members = ::std::vec![$(
                    $crate::MemberDescriptor::declared(
                        $crate::__member_name!($field $(, $rename)?),
                        ::std::stringify!($ty),
                        $crate::comparable::member_type(|record: &$ty| &record.$field),
                    )
                ),*];
                $(
                    members.extend(
                        <$base_ty as $crate::Comparable>::member_descriptors()
                            .into_iter()
                            .map($crate::MemberDescriptor::into_inherited),
                    );
                )?
                members
            }

            fn render(&self) -> ::std::string::String {
                $crate::short_type_name(::std::any::type_name::<$ty>())
            }

            fn members(&self) -> ::std::vec::Vec<$crate::Member<'_>> {
                let values: ::std::vec::Vec<&dyn $crate::Comparable> =
                    ::std::vec![$(&self.$field as &dyn $crate::Comparable),*];
                #[allow(unused_mut)]
                let mut members: ::std::vec::Vec<$crate::Member<'_>> =
                    <$ty as $crate::Comparable>::member_descriptors()
                        .into_iter()
                        .zip(values)
                        .map(|(descriptor, value)| $crate::Member::new(descriptor, value))
                        .collect();
                $(
                    members.extend(
                        $crate::Comparable::members(&self.$base)
                            .into_iter()
                            .map($crate::Member::into_inherited),
                    );
                )?
                members
            }
        }
    };
}

/// Implement `Comparable` for fieldless enums, compared by `PartialEq` and
/// rendered with `Debug`.
///
/// ```rust
/// use likeness::{comparable_enum, compare_objects, CompareConfig};
///
/// #[derive(Debug, PartialEq)]
/// enum Suit {
///     Hearts,
///     Spades,
/// }
///
/// comparable_enum!(Suit);
///
/// let err = compare_objects(&Suit::Hearts, &Suit::Spades, &CompareConfig::default()).unwrap_err();
/// assert_eq!(err.mismatch().unwrap().expected, "A value of \"Hearts\"");
/// ```
#[macro_export]
macro_rules! comparable_enum {
    ($($ty:ty),+ $(,)?) => {
        $( $crate::__comparable_native!($ty, Enumeration, "{:?}"); )+
    };
}

/// Implement `Comparable` for value types compared by `PartialEq` and
/// rendered with `Display` (identifiers, newtypes over primitives).
#[macro_export]
macro_rules! comparable_simple {
    ($($ty:ty),+ $(,)?) => {
        $( $crate::__comparable_native!($ty, Primitive, "{}"); )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __comparable_native {
    ($ty:ty, $kind:ident, $format:literal) => {
        impl $crate::Comparable for $ty {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::of::<$ty>($crate::TypeKind::$kind)
            }

            fn render(&self) -> ::std::string::String {
                ::std::format!($format, self)
            }

            fn native_eq(&self, other: &dyn $crate::Comparable) -> bool {
                $crate::comparable::downcast_eq(self, other)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_name {
    ($field:ident) => {
        ::std::stringify!($field)
    };
    ($field:ident, $rename:literal) => {
        $rename
    };
}
