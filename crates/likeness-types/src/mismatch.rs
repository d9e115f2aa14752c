//! Mismatch descriptions.
//!
//! A [`Mismatch`] is built exactly once, at the point where two values are
//! found to diverge, and travels back to the caller unchanged. Each label
//! names the kind of location where the divergence was found: a property,
//! a sequence position, an enclosing property of a sequence, or nothing at
//! all for a top-level value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The expected-side and actual-side labels of the first divergence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mismatch {
    /// Description of the expected side.
    pub expected: String,
    /// Description of the actual side.
    pub actual: String,
}

impl Mismatch {
    /// Create a mismatch from two ready-made labels.
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Two top-level values differ. `None` is a null side.
    pub fn values(expected: Option<&str>, actual: Option<&str>) -> Self {
        Self::new(value_label(expected), value_label(actual))
    }

    /// Two values of the member `member` differ. `None` is a null side.
    pub fn member(member: &str, expected: Option<&str>, actual: Option<&str>) -> Self {
        Self::new(
            format!("{} for property \"{member}\"", value_label(expected)),
            format!("{} for property \"{member}\"", value_label(actual)),
        )
    }

    /// Two simple sequence elements at `position` differ. `None` is a null
    /// element.
    pub fn position(position: usize, expected: Option<&str>, actual: Option<&str>) -> Self {
        Self::new(
            format!("{} in position {position}", value_label(expected)),
            format!("{} in position {position}", value_label(actual)),
        )
    }

    /// Two sequences have different lengths. `context` names the enclosing
    /// member when the sequences are nested.
    pub fn lengths(expected: usize, actual: usize, context: Option<&str>) -> Self {
        match context {
            Some(context) => Self::new(
                format!("{expected} items in {context}"),
                format!("{actual} items in {context}"),
            ),
            None => Self::new(format!("{expected} items"), format!("{actual} items")),
        }
    }

    /// Exactly one of two sequences is null. `None` is the null side, the
    /// other side carries its element count.
    pub fn null_collection(expected: Option<usize>, actual: Option<usize>) -> Self {
        Self::new(collection_label(expected), collection_label(actual))
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected: {}\nActual:   {}", self.expected, self.actual)
    }
}

fn value_label(rendered: Option<&str>) -> String {
    match rendered {
        Some(value) => format!("A value of \"{value}\""),
        None => "A value of null".to_string(),
    }
}

fn collection_label(count: Option<usize>) -> String {
    match count {
        Some(count) => format!("A collection containing {count} objects"),
        None => "A null collection".to_string(),
    }
}
