//! Ordered collections, compared position by position.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::comparable::Comparable;
use crate::{short_type_name, TypeDescriptor, TypeKind};

macro_rules! sequence_impl {
    ($($ty:ident),+) => {
        $(
            impl<T: Comparable> Comparable for $ty<T> {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::of::<$ty<T>>(TypeKind::Collection(T::descriptor))
                }

                fn render(&self) -> String {
                    short_type_name(std::any::type_name::<Self>())
                }

                fn elements(&self) -> Vec<&dyn Comparable> {
                    self.iter().map(|element| element as &dyn Comparable).collect()
                }
            }
        )+
    };
}

sequence_impl!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Comparable, const N: usize> Comparable for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<[T; N]>(TypeKind::Collection(T::descriptor))
    }

    fn render(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    fn elements(&self) -> Vec<&dyn Comparable> {
        self.iter().map(|element| element as &dyn Comparable).collect()
    }
}
