//! The [`Comparable`] trait: what the comparer needs to know about a type.
//!
//! The static half ([`Comparable::descriptor`], [`Comparable::member_descriptors`])
//! describes the declared type and drives classification. The object-safe
//! half exposes a value's content for whichever strategy the classifier picked:
//! native equality for simple types, an instant for temporal types, elements
//! for sequences and members for records. Methods that do not apply to a
//! type's class keep their defaults.

use std::any::Any;

use chrono::{DateTime, Utc};
use likeness_types::{MemberDescriptor, TypeDescriptor};

/// Upcast to [`Any`], for the native-equality downcast.
pub trait AsAny {
    /// This value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A type the structural comparer can walk.
///
/// Implementations are normally generated: [`comparable_record!`] for
/// structs compared member by member, [`comparable_enum!`] and
/// [`comparable_simple!`] for types compared by native equality. The crate
/// provides impls for primitives, strings, decimals, identifiers, chrono
/// date/times, `Option`, smart pointers and the standard ordered collections.
///
/// [`comparable_record!`]: crate::comparable_record
/// [`comparable_enum!`]: crate::comparable_enum
/// [`comparable_simple!`]: crate::comparable_simple
pub trait Comparable: AsAny + 'static {
    /// Descriptor of the declared type.
    fn descriptor() -> TypeDescriptor
    where
        Self: Sized;

    /// Members in declaration order: own members first, then ancestor
    /// members, nearest ancestor first.
    fn member_descriptors() -> Vec<MemberDescriptor>
    where
        Self: Sized,
    {
        Vec::new()
    }

    /// Text used for this value inside mismatch descriptions.
    fn render(&self) -> String;

    /// Returns `true` if this value is a null (absent) value.
    fn is_null(&self) -> bool {
        false
    }

    /// Native value equality. `other` is always a value of the same
    /// declared type.
    fn native_eq(&self, _other: &dyn Comparable) -> bool {
        false
    }

    /// The canonical instant of a temporal value.
    fn instant(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// The elements of a sequence, in order.
    fn elements(&self) -> Vec<&dyn Comparable> {
        Vec::new()
    }

    /// The members of a record, aligned with [`Comparable::member_descriptors`].
    fn members(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// Address of a shared node, for cycle detection.
    fn identity(&self) -> Option<usize> {
        None
    }
}

/// One member of a record value.
#[derive(Clone, Copy)]
pub struct Member<'a> {
    /// Name, declaring type and declared type of the member.
    pub descriptor: MemberDescriptor,
    /// The member's value on this record.
    pub value: &'a dyn Comparable,
}

impl<'a> Member<'a> {
    pub fn new(descriptor: MemberDescriptor, value: &'a dyn Comparable) -> Self {
        Self { descriptor, value }
    }

    /// The same member, seen from a descendant record.
    pub fn into_inherited(self) -> Self {
        Self {
            descriptor: self.descriptor.into_inherited(),
            ..self
        }
    }
}

impl std::fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.descriptor.name)
            .field("inherited", &self.descriptor.inherited)
            .field("value", &self.value.render())
            .finish()
    }
}

/// Descriptor function for the type a field accessor returns.
#[doc(hidden)]
pub fn member_type<S, F>(_accessor: impl Fn(&S) -> &F) -> fn() -> TypeDescriptor
where
    F: Comparable,
{
    F::descriptor
}

/// Native equality through a downcast to `T`.
#[doc(hidden)]
pub fn downcast_eq<T>(this: &T, other: &dyn Comparable) -> bool
where
    T: PartialEq + 'static,
{
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}
