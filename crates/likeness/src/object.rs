//! The object comparer.
//!
//! Compares two values of one declared type. Simple values use native
//! equality, temporal values are compared as instants, sequences are handed
//! to the sequence comparer and records are walked member by member. The
//! first divergence ends the whole comparison.

use tracing::{debug, trace};

use likeness_types::{classify, MemberDescriptor, Mismatch, TypeClass, TypeDescriptor};

use crate::comparable::Comparable;
use crate::config::CompareConfig;
use crate::error::CompareResult;
use crate::walk::{Segment, Walk};

/// Compare two values structurally.
///
/// Returns `Ok(())` when they are equal, or the description of the first
/// mismatch found.
///
/// ```rust
/// use likeness::{comparable_record, compare_objects, CompareConfig};
///
/// struct Person {
///     age: i32,
/// }
///
/// comparable_record!(Person { age as "Age" });
///
/// let err = compare_objects(&Person { age: 49 }, &Person { age: 21 }, &CompareConfig::default())
///     .unwrap_err();
/// let mismatch = err.mismatch().unwrap();
/// assert_eq!(mismatch.expected, "A value of \"49\" for property \"Age\"");
/// assert_eq!(mismatch.actual, "A value of \"21\" for property \"Age\"");
/// ```
pub fn compare_objects<T: Comparable>(
    expected: &T,
    actual: &T,
    config: &CompareConfig,
) -> CompareResult<()> {
    let descriptor = T::descriptor();
    debug!(
        type_name = %descriptor,
        include_inherited = config.include_inherited_members,
        allow_list = ?config.member_allow_list,
        "comparing objects"
    );

    let mut walk = Walk::new(config);
    walk.descend(Segment::Root, expected, actual, |walk| {
        walk.objects(&descriptor, expected, actual)
    })
}

impl Walk<'_> {
    /// Compare two values of the declared type `ty`.
    pub(crate) fn objects(
        &mut self,
        ty: &TypeDescriptor,
        expected: &dyn Comparable,
        actual: &dyn Comparable,
    ) -> CompareResult<()> {
        match (expected.is_null(), actual.is_null()) {
            (true, true) => return Ok(()),
            (true, false) => {
                return Err(self.fail(Mismatch::values(None, Some(actual.render().as_str()))));
            }
            (false, true) => {
                return Err(self.fail(Mismatch::values(Some(expected.render().as_str()), None)));
            }
            (false, false) => {}
        }

        match classify(ty) {
            TypeClass::Simple => {
                if !expected.native_eq(actual) {
                    return Err(self.fail(Mismatch::values(
                        Some(expected.render().as_str()),
                        Some(actual.render().as_str()),
                    )));
                }
                Ok(())
            }
            TypeClass::Temporal | TypeClass::TemporalWithOffset => {
                if expected.instant() != actual.instant() {
                    return Err(self.fail(Mismatch::values(
                        Some(expected.render().as_str()),
                        Some(actual.render().as_str()),
                    )));
                }
                Ok(())
            }
            TypeClass::Sequence => {
                let element = ty.element()?;
                self.sequence(&element, &expected.elements(), &actual.elements(), None)
            }
            TypeClass::Composite => self.composite(expected, actual),
        }
    }

    /// Compare two records member by member, in declaration order.
    fn composite(&mut self, expected: &dyn Comparable, actual: &dyn Comparable) -> CompareResult<()> {
        let config: &CompareConfig = self.config;

        for (mine, theirs) in expected.members().into_iter().zip(actual.members()) {
            let member = mine.descriptor;
            if member.inherited && !config.include_inherited_members {
                continue;
            }
            if !config.member_allows(member.name) {
                continue;
            }

            trace!(
                member = member.name,
                declared_on = member.declared_on,
                inherited = member.inherited,
                "comparing member"
            );
            self.descend(Segment::Member(member.name), mine.value, theirs.value, |walk| {
                walk.member(&member, mine.value, theirs.value)
            })?;
        }

        Ok(())
    }

    /// Compare the values of one member.
    fn member(
        &mut self,
        member: &MemberDescriptor,
        expected: &dyn Comparable,
        actual: &dyn Comparable,
    ) -> CompareResult<()> {
        let name = member.name;
        match (expected.is_null(), actual.is_null()) {
            (true, true) => return Ok(()),
            (true, false) => {
                return Err(self.fail(Mismatch::member(name, None, Some(actual.render().as_str()))));
            }
            (false, true) => {
                return Err(self.fail(Mismatch::member(name, Some(expected.render().as_str()), None)));
            }
            (false, false) => {}
        }

        let ty = member.descriptor();
        match classify(&ty) {
            TypeClass::Simple => {
                if !expected.native_eq(actual) {
                    return Err(self.fail(Mismatch::member(
                        name,
                        Some(expected.render().as_str()),
                        Some(actual.render().as_str()),
                    )));
                }
                Ok(())
            }
            TypeClass::Temporal | TypeClass::TemporalWithOffset => {
                if expected.instant() != actual.instant() {
                    return Err(self.fail(Mismatch::member(
                        name,
                        Some(expected.render().as_str()),
                        Some(actual.render().as_str()),
                    )));
                }
                Ok(())
            }
            TypeClass::Sequence => {
                let element = ty.element()?;
                self.sequence(&element, &expected.elements(), &actual.elements(), Some(name))
            }
            TypeClass::Composite => self.objects(&ty, expected, actual),
        }
    }
}
