//! Static descriptions of declared types.
//!
//! A [`TypeDescriptor`] is the build-time stand-in for runtime type
//! introspection: it names a type and says what *kind* of value it holds.
//! Nested types (the element of a collection, the members of a record) are
//! reached through `fn` pointers, so a recursive type such as a person with a
//! list of child persons still has a finite descriptor.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::error::{TypeError, TypeResult};

/// What kind of value a declared type holds.
#[derive(Clone, Copy, Debug)]
pub enum TypeKind {
    /// Booleans, characters, integers, floats and opaque identifiers.
    Primitive,
    /// Owned or borrowed strings. Never treated as a collection of chars.
    Text,
    /// Fixed-point decimal numbers.
    Decimal,
    /// Fieldless enumerations.
    Enumeration,
    /// A date/time without an offset component.
    DateTime,
    /// A date/time carrying a timezone offset.
    DateTimeOffset,
    /// A wrapper that may hold no value (`Option<T>` and friends).
    Nullable(fn() -> TypeDescriptor),
    /// An ordered collection of elements of the given type.
    Collection(fn() -> TypeDescriptor),
    /// A type compared member by member, in declaration order.
    Record(fn() -> Vec<MemberDescriptor>),
}

/// Static description of a declared type.
#[derive(Clone, Copy, Debug)]
pub struct TypeDescriptor {
    /// Fully qualified type name, as reported by [`std::any::type_name`].
    pub name: &'static str,
    /// The kind of value the type holds.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a descriptor with an explicit name.
    pub const fn new(name: &'static str, kind: TypeKind) -> Self {
        Self { name, kind }
    }

    /// Create a descriptor named after `T`.
    pub fn of<T: ?Sized>(kind: TypeKind) -> Self {
        Self::new(std::any::type_name::<T>(), kind)
    }

    /// The type name with module paths stripped: `Vec<Person>` rather than
    /// `alloc::vec::Vec<app::model::Person>`.
    pub fn short_name(&self) -> String {
        short_type_name(self.name)
    }

    /// Peel off any number of nullable wrappers.
    pub fn unwrap_nullable(&self) -> TypeDescriptor {
        let mut current = *self;
        while let TypeKind::Nullable(inner) = current.kind {
            current = inner();
        }
        current
    }

    /// The element type of a collection (looking through nullable wrappers).
    pub fn element(&self) -> TypeResult<TypeDescriptor> {
        match self.unwrap_nullable().kind {
            TypeKind::Collection(element) => Ok(element()),
            _ => Err(TypeError::NotASequence {
                type_name: self.short_name(),
            }),
        }
    }

    /// The members of a record (looking through nullable wrappers).
    pub fn members(&self) -> TypeResult<Vec<MemberDescriptor>> {
        match self.unwrap_nullable().kind {
            TypeKind::Record(members) => Ok(members()),
            _ => Err(TypeError::NotARecord {
                type_name: self.short_name(),
            }),
        }
    }

    /// Every member name declared on any record reachable from this type,
    /// including members of ancestors, element types and nested records.
    ///
    /// Recursive types are visited once per type name.
    pub fn reachable_member_names(&self) -> BTreeSet<&'static str> {
        let mut names = BTreeSet::new();
        let mut seen = HashSet::new();
        let mut pending = vec![*self];

        while let Some(descriptor) = pending.pop() {
            if !seen.insert(descriptor.name) {
                continue;
            }
            match descriptor.kind {
                TypeKind::Nullable(inner) | TypeKind::Collection(inner) => pending.push(inner()),
                TypeKind::Record(members) => {
                    for member in members() {
                        names.insert(member.name);
                        pending.push(member.descriptor());
                    }
                }
                _ => {}
            }
        }

        names
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// A named data member of a record type.
#[derive(Clone, Copy, Debug)]
pub struct MemberDescriptor {
    /// The name used in mismatch descriptions and allow-lists.
    pub name: &'static str,
    /// The record type that declares the member.
    pub declared_on: &'static str,
    /// `true` when the member is declared on an ancestor of the record.
    pub inherited: bool,
    /// The member's declared type.
    pub ty: fn() -> TypeDescriptor,
}

impl MemberDescriptor {
    /// A member declared directly on `declared_on`.
    pub const fn declared(
        name: &'static str,
        declared_on: &'static str,
        ty: fn() -> TypeDescriptor,
    ) -> Self {
        Self {
            name,
            declared_on,
            inherited: false,
            ty,
        }
    }

    /// The same member, seen from a descendant type.
    pub fn into_inherited(self) -> Self {
        Self {
            inherited: true,
            ..self
        }
    }

    /// The member's declared type descriptor.
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.ty)()
    }
}

/// Strip module paths from every path segment of a type name.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            out.push_str(last_segment(&path));
            path.clear();
            out.push(ch);
        }
    }
    out.push_str(last_segment(&path));

    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
