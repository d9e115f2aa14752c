//! Foundation types for likeness.
//!
//! This crate describes *declared* Rust types well enough for a structural
//! comparer to decide how two values of that type must be compared, and it
//! defines the description produced when they are not equal. Every other
//! likeness crate depends on `likeness-types`.
//!
//! # Key Types
//!
//! - [`TypeDescriptor`] / [`TypeKind`] -- Static description of a declared type
//! - [`MemberDescriptor`] -- A named data member of a record type
//! - [`TypeClass`] / [`classify`] -- The five-way comparison strategy verdict
//! - [`Mismatch`] -- Expected/actual labels for the first divergence found

pub mod classify;
pub mod descriptor;
pub mod error;
pub mod mismatch;

pub use classify::{classify, TypeClass};
pub use descriptor::{short_type_name, MemberDescriptor, TypeDescriptor, TypeKind};
pub use error::{TypeError, TypeResult};
pub use mismatch::Mismatch;
