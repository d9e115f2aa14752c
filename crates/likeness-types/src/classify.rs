//! The type classifier.
//!
//! Classification is a pure function of a [`TypeDescriptor`]; it never looks
//! at a value. Both sides of a comparison share one declared type, so they are
//! always classified identically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::{TypeDescriptor, TypeKind};

/// How values of a declared type are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeClass {
    /// Compared with the type's native value equality.
    Simple,
    /// A date/time without offset, compared as an instant.
    Temporal,
    /// An offset-aware date/time, compared as an instant.
    TemporalWithOffset,
    /// An ordered collection, compared position by position.
    Sequence,
    /// Anything else, compared member by member.
    Composite,
}

impl TypeClass {
    /// Returns `true` for both temporal classes.
    pub fn is_temporal(self) -> bool {
        matches!(self, TypeClass::Temporal | TypeClass::TemporalWithOffset)
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeClass::Simple => write!(f, "simple"),
            TypeClass::Temporal => write!(f, "temporal"),
            TypeClass::TemporalWithOffset => write!(f, "temporal-with-offset"),
            TypeClass::Sequence => write!(f, "sequence"),
            TypeClass::Composite => write!(f, "composite"),
        }
    }
}

/// Classify a declared type.
///
/// Nullable wrappers take the class of the type they wrap. Strings are
/// [`TypeKind::Text`], never [`TypeKind::Collection`], so they are always
/// compared whole.
pub fn classify(descriptor: &TypeDescriptor) -> TypeClass {
    match descriptor.unwrap_nullable().kind {
        TypeKind::Primitive | TypeKind::Text | TypeKind::Decimal | TypeKind::Enumeration => {
            TypeClass::Simple
        }
        TypeKind::DateTime => TypeClass::Temporal,
        TypeKind::DateTimeOffset => TypeClass::TemporalWithOffset,
        TypeKind::Collection(_) => TypeClass::Sequence,
        TypeKind::Record(_) => TypeClass::Composite,
        // unwrap_nullable never stops on a nullable kind
        TypeKind::Nullable(_) => TypeClass::Composite,
    }
}
