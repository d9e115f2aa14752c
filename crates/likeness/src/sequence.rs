//! The sequence comparer.
//!
//! Sequences are compared positionally after three gates: null, length and
//! empty. A length mismatch always wins over element mismatches.

use tracing::{debug, trace};

use likeness_types::{classify, Mismatch, TypeClass, TypeDescriptor};

use crate::comparable::Comparable;
use crate::config::CompareConfig;
use crate::error::{CompareError, CompareResult};
use crate::walk::{Segment, Walk};

/// Compare two optional sequences of `T` structurally.
///
/// `None` is a null collection. Each side may be any iterable of
/// references, and the two sides need not be the same iterable type; both
/// are buffered before comparison.
///
/// ```rust
/// use likeness::{compare_sequences, CompareConfig};
///
/// let expected = vec!["Bugs", "Daffy", "Porky", "Elmer"];
/// let actual = vec!["Bugs", "Daffy", "Pork", "Elmer"];
///
/// let err = compare_sequences(Some(&expected), Some(&actual), &CompareConfig::default())
///     .unwrap_err();
/// let mismatch = err.mismatch().unwrap();
/// assert_eq!(mismatch.expected, "A value of \"Porky\" in position 2");
/// assert_eq!(mismatch.actual, "A value of \"Pork\" in position 2");
/// ```
pub fn compare_sequences<'a, T, IE, IA>(
    expected: Option<IE>,
    actual: Option<IA>,
    config: &CompareConfig,
) -> CompareResult<()>
where
    T: Comparable,
    IE: IntoIterator<Item = &'a T>,
    IA: IntoIterator<Item = &'a T>,
{
    compare_sequences_in(expected, actual, config, None)
}

/// Compare two optional sequences of `T`, naming the enclosing member.
///
/// A length mismatch reads `N items in <context>` instead of `N items`.
///
/// ```rust
/// use likeness::{compare_sequences_in, CompareConfig};
///
/// let err = compare_sequences_in(
///     Some(&vec![1, 2]),
///     Some(&vec![1]),
///     &CompareConfig::default(),
///     Some("Children"),
/// )
/// .unwrap_err();
/// assert_eq!(err.mismatch().unwrap().expected, "2 items in Children");
/// ```
pub fn compare_sequences_in<'a, T, IE, IA>(
    expected: Option<IE>,
    actual: Option<IA>,
    config: &CompareConfig,
    context: Option<&str>,
) -> CompareResult<()>
where
    T: Comparable,
    IE: IntoIterator<Item = &'a T>,
    IA: IntoIterator<Item = &'a T>,
{
    let expected = expected.map(buffer::<T, IE>);
    let actual = actual.map(buffer::<T, IA>);
    let element = T::descriptor();
    debug!(element = %element, context = ?context, "comparing sequences");

    let (expected, actual) = match (expected, actual) {
        (None, None) => return Ok(()),
        (None, Some(actual)) => return Err(null_collection(None, Some(actual.len()))),
        (Some(expected), None) => return Err(null_collection(Some(expected.len()), None)),
        (Some(expected), Some(actual)) => (expected, actual),
    };

    let mut walk = Walk::new(config);
    walk.root(|walk| walk.sequence(&element, &expected, &actual, context))
}

fn buffer<'a, T, I>(items: I) -> Vec<&'a dyn Comparable>
where
    T: Comparable,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item as &dyn Comparable)
        .collect()
}

/// Rendered text of a value, or `None` for a null value.
fn rendered(value: &dyn Comparable) -> Option<String> {
    (!value.is_null()).then(|| value.render())
}

fn null_collection(expected: Option<usize>, actual: Option<usize>) -> CompareError {
    let mismatch = Mismatch::null_collection(expected, actual);
    debug!(expected = %mismatch.expected, actual = %mismatch.actual, "mismatch detected");
    CompareError::Mismatch(mismatch)
}

impl Walk<'_> {
    /// Compare two buffered sequences whose declared element type is
    /// `element`. `context` names the enclosing member, if any.
    pub(crate) fn sequence(
        &mut self,
        element: &TypeDescriptor,
        expected: &[&dyn Comparable],
        actual: &[&dyn Comparable],
        context: Option<&str>,
    ) -> CompareResult<()> {
        if expected.len() != actual.len() {
            return Err(self.fail(Mismatch::lengths(expected.len(), actual.len(), context)));
        }

        // The element type is irrelevant for two empty sequences.
        if expected.is_empty() {
            return Ok(());
        }

        let class = classify(element);
        trace!(element = %element, %class, len = expected.len(), "comparing elements");

        if class == TypeClass::Simple {
            for (position, (mine, theirs)) in expected.iter().zip(actual).enumerate() {
                if !mine.native_eq(*theirs) {
                    return Err(self.fail(Mismatch::position(
                        position,
                        rendered(*mine).as_deref(),
                        rendered(*theirs).as_deref(),
                    )));
                }
            }
            return Ok(());
        }

        for (position, (mine, theirs)) in expected.iter().zip(actual).enumerate() {
            self.descend(Segment::Position(position), *mine, *theirs, |walk| {
                walk.objects(element, *mine, *theirs)
            })?;
        }

        Ok(())
    }
}
