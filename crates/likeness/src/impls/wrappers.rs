//! Nullable wrappers and smart pointers.
//!
//! `Option` and `OnceCell` are nullable: their descriptor wraps the inner
//! type and an empty value is null. `Box`, `Rc` and `Arc` are transparent:
//! they report the pointee's descriptor. `Rc` and `Arc` also report their
//! address, which lets the comparer notice cycles.

use std::cell::OnceCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::comparable::{AsAny, Comparable, Member};
use crate::{TypeDescriptor, TypeKind};

macro_rules! nullable_impl {
    ($ty:ident, $get:path) => {
        impl<T: Comparable> Comparable for $ty<T> {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<$ty<T>>(TypeKind::Nullable(T::descriptor))
            }

            fn render(&self) -> String {
                match $get(self) {
                    Some(inner) => inner.render(),
                    None => "null".to_string(),
                }
            }

            fn is_null(&self) -> bool {
                $get(self).is_none()
            }

            fn native_eq(&self, other: &dyn Comparable) -> bool {
                let Some(other) = other.as_any().downcast_ref::<$ty<T>>() else {
                    return false;
                };
                match ($get(self), $get(other)) {
                    (None, None) => true,
                    (Some(mine), Some(theirs)) => mine.native_eq(theirs),
                    _ => false,
                }
            }

            fn instant(&self) -> Option<DateTime<Utc>> {
                $get(self).and_then(Comparable::instant)
            }

            fn elements(&self) -> Vec<&dyn Comparable> {
                $get(self).map(Comparable::elements).unwrap_or_default()
            }

            fn members(&self) -> Vec<Member<'_>> {
                $get(self).map(Comparable::members).unwrap_or_default()
            }

            fn identity(&self) -> Option<usize> {
                $get(self).and_then(Comparable::identity)
            }
        }
    };
}

nullable_impl!(Option, Option::as_ref);
nullable_impl!(OnceCell, OnceCell::get);

macro_rules! pointer_impl {
    ($ty:ident, |$value:ident| $identity:expr) => {
        impl<T: Comparable> Comparable for $ty<T> {
            fn descriptor() -> TypeDescriptor {
                T::descriptor()
            }

            fn render(&self) -> String {
                (**self).render()
            }

            fn is_null(&self) -> bool {
                (**self).is_null()
            }

            fn native_eq(&self, other: &dyn Comparable) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$ty<T>>()
                    .is_some_and(|other| (**self).native_eq(&**other))
            }

            fn instant(&self) -> Option<DateTime<Utc>> {
                (**self).instant()
            }

            fn elements(&self) -> Vec<&dyn Comparable> {
                (**self).elements()
            }

            fn members(&self) -> Vec<Member<'_>> {
                (**self).members()
            }

            fn identity(&self) -> Option<usize> {
                let $value = self;
                $identity
            }
        }
    };
}

pointer_impl!(Box, |value| (**value).identity());
pointer_impl!(Rc, |value| Some(Rc::as_ptr(value) as *const () as usize));
pointer_impl!(Arc, |value| Some(Arc::as_ptr(value) as *const () as usize));
