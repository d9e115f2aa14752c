//! Reusable comparers that hold a configuration.

use std::fmt;
use std::marker::PhantomData;

use crate::comparable::Comparable;
use crate::config::CompareConfig;
use crate::error::CompareResult;
use crate::object::compare_objects;
use crate::sequence::compare_sequences_in;

// ---------------------------------------------------------------------------
// ObjectComparer
// ---------------------------------------------------------------------------

/// Compares values of `T` with a fixed configuration.
///
/// ```rust
/// use likeness::{comparable_record, ObjectComparer};
///
/// struct Person {
///     age: i32,
///     first_name: String,
/// }
///
/// comparable_record!(Person { age as "Age", first_name as "FirstName" });
///
/// let comparer = ObjectComparer::<Person>::with_members(["Age"]);
/// let a = Person { age: 30, first_name: "Ann".into() };
/// let b = Person { age: 30, first_name: "Bea".into() };
/// assert!(comparer.equals(&a, &b));
/// ```
pub struct ObjectComparer<T> {
    config: CompareConfig,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Comparable> ObjectComparer<T> {
    /// A comparer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CompareConfig::default())
    }

    /// A comparer that walks ancestor members when `include` is set.
    pub fn including_inherited(include: bool) -> Self {
        Self::with_config(CompareConfig::new().with_inherited_members(include))
    }

    /// A comparer restricted to the named members.
    pub fn with_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(CompareConfig::new().with_allowed_members(members))
    }

    /// A comparer restricted to the named members, ancestor members
    /// included when `include` is set.
    pub fn including_inherited_with_members<I, S>(include: bool, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(
            CompareConfig::new()
                .with_inherited_members(include)
                .with_allowed_members(members),
        )
    }

    /// A comparer with an explicit configuration.
    pub fn with_config(config: CompareConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two values; `Ok(())` when they are structurally equal.
    pub fn compare(&self, expected: &T, actual: &T) -> CompareResult<()> {
        compare_objects(expected, actual, &self.config)
    }

    /// Returns `true` if the two values are structurally equal. Hardening
    /// failures (cycles, depth) count as unequal.
    pub fn equals(&self, expected: &T, actual: &T) -> bool {
        self.compare(expected, actual).is_ok()
    }

    /// Check the configuration against `T`'s shape.
    pub fn validate(&self) -> CompareResult<()> {
        self.config.validate_for(&T::descriptor())
    }
}

impl<T: Comparable> Default for ObjectComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ObjectComparer<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ObjectComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectComparer")
            .field("type", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// SequenceComparer
// ---------------------------------------------------------------------------

/// Compares optional sequences of `T` with a fixed configuration.
///
/// ```rust
/// use likeness::SequenceComparer;
///
/// let comparer = SequenceComparer::<i32>::new();
/// let err = comparer.compare(Some(&vec![1, 2]), Some(&vec![1, 2, 3])).unwrap_err();
/// assert_eq!(err.mismatch().unwrap().expected, "2 items");
/// ```
pub struct SequenceComparer<T> {
    config: CompareConfig,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Comparable> SequenceComparer<T> {
    /// A comparer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CompareConfig::default())
    }

    /// A comparer that walks ancestor members of the elements when
    /// `include` is set.
    pub fn including_inherited(include: bool) -> Self {
        Self::with_config(CompareConfig::new().with_inherited_members(include))
    }

    /// A comparer restricted to the named element members.
    pub fn with_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(CompareConfig::new().with_allowed_members(members))
    }

    /// A comparer restricted to the named element members, ancestor
    /// members included when `include` is set.
    pub fn including_inherited_with_members<I, S>(include: bool, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(
            CompareConfig::new()
                .with_inherited_members(include)
                .with_allowed_members(members),
        )
    }

    /// A comparer with an explicit configuration.
    pub fn with_config(config: CompareConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two optional sequences; `None` is a null collection.
    pub fn compare<'a, IE, IA>(
        &self,
        expected: Option<IE>,
        actual: Option<IA>,
    ) -> CompareResult<()>
    where
        IE: IntoIterator<Item = &'a T>,
        IA: IntoIterator<Item = &'a T>,
    {
        self.compare_in(expected, actual, None)
    }

    /// Compare two optional sequences held by the member `context`.
    pub fn compare_in<'a, IE, IA>(
        &self,
        expected: Option<IE>,
        actual: Option<IA>,
        context: Option<&str>,
    ) -> CompareResult<()>
    where
        IE: IntoIterator<Item = &'a T>,
        IA: IntoIterator<Item = &'a T>,
    {
        compare_sequences_in(expected, actual, &self.config, context)
    }

    /// Returns `true` if the two sequences are structurally equal.
    pub fn equals<'a, IE, IA>(&self, expected: Option<IE>, actual: Option<IA>) -> bool
    where
        IE: IntoIterator<Item = &'a T>,
        IA: IntoIterator<Item = &'a T>,
    {
        self.compare(expected, actual).is_ok()
    }

    /// Check the configuration against the element type's shape.
    pub fn validate(&self) -> CompareResult<()> {
        self.config.validate_for(&T::descriptor())
    }
}

impl<T: Comparable> Default for SequenceComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SequenceComparer<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for SequenceComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceComparer")
            .field("element", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}
