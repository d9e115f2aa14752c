//! `Comparable` impls for standard library and ecosystem types.

mod collections;
mod native;
mod temporal;
mod wrappers;
