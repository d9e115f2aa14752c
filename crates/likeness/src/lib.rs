//! Structural equality for test assertions.
//!
//! `likeness` decides whether two values of the same declared type are
//! structurally equal and, when they are not, describes the first place they
//! diverge in a single expected/actual pair of labels. Numbers, strings,
//! decimals and enumerations use native equality; date/times are compared as
//! instants; sequences are compared position by position; records are walked
//! member by member in declaration order.
//!
//! # Quick Start
//!
//! ```rust
//! use likeness::{comparable_record, compare_objects, CompareConfig};
//!
//! struct Person {
//!     age: i32,
//!     first_name: Option<String>,
//!     children: Option<Vec<Person>>,
//! }
//!
//! comparable_record!(Person {
//!     age as "Age",
//!     first_name as "FirstName",
//!     children as "Children",
//! });
//!
//! let expected = Person { age: 49, first_name: Some("Ann".into()), children: None };
//! let actual = Person { age: 21, first_name: Some("Ann".into()), children: None };
//!
//! let err = compare_objects(&expected, &actual, &CompareConfig::default()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected: A value of \"49\" for property \"Age\"\nActual:   A value of \"21\" for property \"Age\""
//! );
//! ```
//!
//! # Key Types
//!
//! - [`Comparable`] -- What the comparer knows about a type
//! - [`CompareConfig`] -- Inherited members, member allow-list, depth limit
//! - [`ObjectComparer`] / [`SequenceComparer`] -- Reusable configured comparers
//! - [`CompareError`] -- The first mismatch, or a hardening failure

pub mod comparable;
pub mod comparer;
pub mod config;
pub mod error;
pub mod object;
pub mod sequence;

mod assert;
mod impls;
mod macros;
mod walk;

// Re-exports for convenience.
pub use comparable::{AsAny, Comparable, Member};
pub use comparer::{ObjectComparer, SequenceComparer};
pub use config::CompareConfig;
pub use error::{CompareError, CompareResult};
pub use object::compare_objects;
pub use sequence::{compare_sequences, compare_sequences_in};

pub use likeness_types::{
    classify, short_type_name, MemberDescriptor, Mismatch, TypeClass, TypeDescriptor, TypeError,
    TypeKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_deep_eq, assert_sequences_eq, comparable_record};
    use std::cell::OnceCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    struct Person {
        age: i32,
        change_in_pocket: Decimal,
        children: Option<Vec<Person>>,
        date_of_birth: NaiveDateTime,
        first_name: Option<String>,
        last_name: Option<String>,
        mother: Option<Box<Person>>,
    }

    comparable_record!(Person {
        age as "Age",
        change_in_pocket as "ChangeInPocket",
        children as "Children",
        date_of_birth as "DateOfBirth",
        first_name as "FirstName",
        last_name as "LastName",
        mother as "Mother",
    });

    struct Student {
        person: Person,
        school: String,
    }

    comparable_record!(Student extends person: Person { school as "School" });

    /// Helper: a person with no children and no mother.
    fn person(first: &str, last: &str, age: i32) -> Person {
        Person {
            age,
            change_in_pocket: Decimal::new(125, 2),
            children: None,
            date_of_birth: NaiveDate::from_ymd_opt(1975, 6, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            mother: None,
        }
    }

    /// Helper: a parent with the given children.
    fn parent_of(children: Vec<Person>) -> Person {
        Person {
            children: Some(children),
            ..person("Homer", "Simpson", 39)
        }
    }

    fn mismatch(result: CompareResult<()>) -> Mismatch {
        match result {
            Err(CompareError::Mismatch(mismatch)) => mismatch,
            other => panic!("expected a mismatch, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Equal structures compare equal
    // -----------------------------------------------------------------------
    #[test]
    fn equal_people_compare_equal() {
        let config = CompareConfig::default();
        let a = parent_of(vec![person("Bart", "Simpson", 10), person("Lisa", "Simpson", 8)]);
        let b = parent_of(vec![person("Bart", "Simpson", 10), person("Lisa", "Simpson", 8)]);
        assert!(compare_objects(&a, &b, &config).is_ok());
        assert_deep_eq!(a, b);
    }

    // -----------------------------------------------------------------------
    // 2. Simple sequences report the first differing position
    // -----------------------------------------------------------------------
    #[test]
    fn string_sequence_position_mismatch() {
        let expected = vec!["Bugs", "Daffy", "Porky", "Elmer"];
        let actual = vec!["Bugs", "Daffy", "Pork", "Elmer"];
        let m = mismatch(compare_sequences(
            Some(&expected),
            Some(&actual),
            &CompareConfig::default(),
        ));
        assert_eq!(m.expected, "A value of \"Porky\" in position 2");
        assert_eq!(m.actual, "A value of \"Pork\" in position 2");
    }

    #[test]
    fn integers_out_of_order() {
        let m = mismatch(compare_sequences(
            Some(&vec![5, 6, 7]),
            Some(&vec![5, 7, 6]),
            &CompareConfig::default(),
        ));
        assert_eq!(m.expected, "A value of \"6\" in position 1");
        assert_eq!(m.actual, "A value of \"7\" in position 1");
    }

    // -----------------------------------------------------------------------
    // 3. Records report the differing member
    // -----------------------------------------------------------------------
    #[test]
    fn age_mismatch() {
        let m = mismatch(compare_objects(
            &person("Marge", "Simpson", 49),
            &person("Marge", "Simpson", 21),
            &CompareConfig::default(),
        ));
        assert_eq!(m.expected, "A value of \"49\" for property \"Age\"");
        assert_eq!(m.actual, "A value of \"21\" for property \"Age\"");
    }

    #[test]
    fn first_differing_member_wins() {
        let a = person("Marge", "Simpson", 49);
        let b = person("Madge", "Bouvier", 21);
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m.expected, "A value of \"49\" for property \"Age\"");
    }

    #[test]
    fn decimal_member_mismatch() {
        let a = person("Ned", "Flanders", 60);
        let b = Person {
            change_in_pocket: Decimal::new(1250, 3),
            ..person("Ned", "Flanders", 60)
        };
        assert!(compare_objects(&a, &b, &CompareConfig::default()).is_ok());

        let c = Person {
            change_in_pocket: Decimal::new(126, 2),
            ..person("Ned", "Flanders", 60)
        };
        let m = mismatch(compare_objects(&a, &c, &CompareConfig::default()));
        assert_eq!(m.expected, "A value of \"1.25\" for property \"ChangeInPocket\"");
        assert_eq!(m.actual, "A value of \"1.26\" for property \"ChangeInPocket\"");
    }

    // -----------------------------------------------------------------------
    // 4. Nested sequences carry the member they belong to
    // -----------------------------------------------------------------------
    #[test]
    fn nested_length_mismatch_names_the_member() {
        let a = parent_of(Vec::new());
        let b = parent_of(vec![person("Maggie", "Simpson", 1)]);
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m.expected, "0 items in Children");
        assert_eq!(m.actual, "1 items in Children");
    }

    #[test]
    fn top_level_length_mismatch_has_no_context() {
        let m = mismatch(compare_sequences(
            Some(&vec![person("Bart", "Simpson", 10)]),
            Some(&Vec::new()),
            &CompareConfig::default(),
        ));
        assert_eq!(m, Mismatch::new("1 items", "0 items"));
    }

    #[test]
    fn null_member_collection_on_one_side() {
        let a = parent_of(Vec::new());
        let b = person("Homer", "Simpson", 39);
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m.actual, "A value of null for property \"Children\"");
    }

    #[test]
    fn nested_record_in_sequence() {
        let a = parent_of(vec![person("Bart", "Simpson", 10), person("Fifi", "Simpson", 3)]);
        let b = parent_of(vec![person("Bart", "Simpson", 10), person("Fefe", "Simpson", 3)]);
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m.expected, "A value of \"Fifi\" for property \"FirstName\"");
        assert_eq!(m.actual, "A value of \"Fefe\" for property \"FirstName\"");
    }

    #[test]
    fn mother_is_walked_as_a_record() {
        let a = Person {
            mother: Some(Box::new(person("Mona", "Simpson", 70))),
            ..person("Homer", "Simpson", 39)
        };
        let b = Person {
            mother: Some(Box::new(person("Mona", "Simpson", 71))),
            ..person("Homer", "Simpson", 39)
        };
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m, Mismatch::member("Age", Some("70"), Some("71")));
    }

    #[test]
    fn direct_sequence_comparison_with_context() {
        let expected = vec![person("Bart", "Simpson", 10), person("Lisa", "Simpson", 8)];
        let actual = vec![person("Bart", "Simpson", 10)];
        let m = mismatch(compare_sequences_in(
            Some(&expected),
            Some(&actual),
            &CompareConfig::default(),
            Some("Children"),
        ));
        assert_eq!(m.expected, "2 items in Children");
        assert_eq!(m.actual, "1 items in Children");
    }

    // -----------------------------------------------------------------------
    // 5. Null collections
    // -----------------------------------------------------------------------
    #[test]
    fn null_collections() {
        let config = CompareConfig::default();
        let people = vec![person("Bart", "Simpson", 10), person("Lisa", "Simpson", 8)];

        assert!(compare_sequences(None::<&Vec<Person>>, None::<&Vec<Person>>, &config).is_ok());

        let m = mismatch(compare_sequences(None::<&Vec<Person>>, Some(&people), &config));
        assert_eq!(m.expected, "A null collection");
        assert_eq!(m.actual, "A collection containing 2 objects");

        let m = mismatch(compare_sequences(Some(&people), None::<&Vec<Person>>, &config));
        assert_eq!(m.expected, "A collection containing 2 objects");
        assert_eq!(m.actual, "A null collection");
    }

    // -----------------------------------------------------------------------
    // 6. Member allow-list
    // -----------------------------------------------------------------------
    #[test]
    fn allow_list_compares_only_listed_members() {
        let config = CompareConfig::new().with_allowed_members(["Age"]);

        let a = person("Marge", "Simpson", 49);
        let b = person("Madge", "Bouvier", 49);
        assert!(compare_objects(&a, &b, &config).is_ok());

        let c = person("Marge", "Simpson", 21);
        let m = mismatch(compare_objects(&a, &c, &config));
        assert_eq!(m.expected, "A value of \"49\" for property \"Age\"");
    }

    #[test]
    fn allow_list_from_toml() {
        let config = CompareConfig::from_toml_str("member_allow_list = [\"LastName\"]").unwrap();
        let a = person("Marge", "Simpson", 49);
        let b = person("Homer", "Simpson", 39);
        assert!(compare_objects(&a, &b, &config).is_ok());
    }

    #[test]
    fn validate_catches_misspelled_members() {
        let comparer = ObjectComparer::<Person>::with_members(["Age", "FristName"]);
        assert_eq!(
            comparer.validate(),
            Err(CompareError::UnknownMember {
                name: "FristName".into(),
                type_name: "Person".into(),
            })
        );
        // Validation never runs implicitly.
        let a = person("Marge", "Simpson", 49);
        assert!(comparer.equals(&a, &person("Homer", "Simpson", 49)));
    }

    // -----------------------------------------------------------------------
    // 7. Inherited members
    // -----------------------------------------------------------------------
    #[test]
    fn inherited_member_toggle() {
        let a = Student {
            person: person("Bart", "Simpson", 10),
            school: "Springfield Elementary".into(),
        };
        let b = Student {
            person: person("Bart", "Simpson", 11),
            school: "Springfield Elementary".into(),
        };

        assert!(compare_objects(&a, &b, &CompareConfig::default()).is_ok());
        assert!(ObjectComparer::<Student>::including_inherited(false).equals(&a, &b));

        let m = mismatch(compare_objects(&a, &b, &CompareConfig::strict()));
        assert_eq!(m, Mismatch::member("Age", Some("10"), Some("11")));
    }

    #[test]
    fn own_members_are_always_compared() {
        let a = Student {
            person: person("Bart", "Simpson", 10),
            school: "Springfield Elementary".into(),
        };
        let b = Student {
            person: person("Bart", "Simpson", 10),
            school: "Shelbyville Elementary".into(),
        };
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m.expected, "A value of \"Springfield Elementary\" for property \"School\"");
    }

    #[test]
    fn inherited_descriptors_are_flagged() {
        let members = Student::member_descriptors();
        assert_eq!(members[0].name, "School");
        assert!(!members[0].inherited);
        assert!(members[1..].iter().all(|m| m.inherited && m.declared_on == "Person"));
        assert_eq!(members.len(), 8);
    }

    // -----------------------------------------------------------------------
    // 8. Chronological equality
    // -----------------------------------------------------------------------
    struct Appointment {
        at: DateTime<FixedOffset>,
    }

    comparable_record!(Appointment { at as "At" });

    fn at(text: &str) -> Appointment {
        Appointment {
            at: DateTime::parse_from_rfc3339(text).unwrap(),
        }
    }

    #[test]
    fn same_instant_at_different_offsets() {
        let a = at("2024-03-01T12:00:00+02:00");
        let b = at("2024-03-01T10:00:00Z");
        assert!(compare_objects(&a, &b, &CompareConfig::default()).is_ok());
    }

    #[test]
    fn one_second_apart() {
        let a = at("2024-03-01T12:00:00+02:00");
        let b = at("2024-03-01T12:00:01+02:00");
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(m.expected, format!("A value of \"{}\" for property \"At\"", a.at));
        assert_eq!(m.actual, format!("A value of \"{}\" for property \"At\"", b.at));
    }

    #[test]
    fn top_level_instants() {
        let config = CompareConfig::default();
        let berlin = DateTime::parse_from_rfc3339("2024-03-01T12:00:00+02:00").unwrap();
        let utc = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z").unwrap();
        assert!(compare_objects(&berlin, &utc, &config).is_ok());

        let later = DateTime::parse_from_rfc3339("2024-03-01T10:00:01Z").unwrap();
        let m = mismatch(compare_objects(&berlin, &later, &config));
        assert_eq!(
            m,
            Mismatch::values(Some(berlin.to_string().as_str()), Some(later.to_string().as_str()))
        );
    }

    #[test]
    fn temporal_sequence_elements_carry_no_position() {
        let expected = vec![
            DateTime::parse_from_rfc3339("2024-03-01T12:00:00+02:00").unwrap(),
            DateTime::parse_from_rfc3339("2024-03-01T13:00:00+02:00").unwrap(),
        ];
        let actual = vec![
            DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z").unwrap(),
            DateTime::parse_from_rfc3339("2024-03-01T11:00:01Z").unwrap(),
        ];
        let m = mismatch(compare_sequences(
            Some(&expected),
            Some(&actual),
            &CompareConfig::default(),
        ));
        assert_eq!(m.expected, format!("A value of \"{}\"", expected[1]));
        assert_eq!(m.actual, format!("A value of \"{}\"", actual[1]));
        assert!(!m.expected.contains("position"));
    }

    #[test]
    fn date_of_birth_compared_as_instant() {
        let a = person("Bart", "Simpson", 10);
        let b = Person {
            date_of_birth: a.date_of_birth + chrono::Duration::seconds(1),
            ..person("Bart", "Simpson", 10)
        };
        let m = mismatch(compare_objects(&a, &b, &CompareConfig::default()));
        assert_eq!(
            m.expected,
            "A value of \"1975-06-01 08:30:00\" for property \"DateOfBirth\""
        );
    }

    // -----------------------------------------------------------------------
    // 9. Cycles and depth
    // -----------------------------------------------------------------------
    struct Node {
        label: String,
        next: OnceCell<Rc<Node>>,
    }

    comparable_record!(Node { label, next });

    fn ring(label: &str) -> Rc<Node> {
        let node = Rc::new(Node {
            label: label.to_string(),
            next: OnceCell::new(),
        });
        let _ = node.next.set(Rc::clone(&node));
        node
    }

    #[test]
    fn cyclic_graphs_fail_with_cycle() {
        let err = compare_objects(&ring("a"), &ring("a"), &CompareConfig::default()).unwrap_err();
        assert_eq!(err, CompareError::Cycle { path: "$.next".into() });
    }

    #[test]
    fn cyclic_graphs_still_report_earlier_mismatches() {
        let m = mismatch(compare_objects(&ring("a"), &ring("b"), &CompareConfig::default()));
        assert_eq!(m, Mismatch::member("label", Some("a"), Some("b")));
    }

    #[test]
    fn cycles_reached_through_sequence_elements() {
        let config = CompareConfig::default();
        let expected = vec![ring("a")];
        let actual = vec![ring("a")];

        let err = compare_sequences(Some(&expected), Some(&actual), &config).unwrap_err();
        assert_eq!(err, CompareError::Cycle { path: "$[0].next".into() });
        assert_eq!(compare_objects(&expected, &actual, &config), Err(err));
    }

    struct SharedNode {
        label: String,
        next: OnceCell<Arc<SharedNode>>,
    }

    comparable_record!(SharedNode { label, next });

    #[allow(clippy::arc_with_non_send_sync)]
    fn shared_ring(label: &str) -> Arc<SharedNode> {
        let node = Arc::new(SharedNode {
            label: label.to_string(),
            next: OnceCell::new(),
        });
        let _ = node.next.set(Arc::clone(&node));
        node
    }

    #[test]
    fn arc_cycles_fail_with_cycle() {
        let err = compare_objects(&shared_ring("a"), &shared_ring("a"), &CompareConfig::default())
            .unwrap_err();
        assert_eq!(err, CompareError::Cycle { path: "$.next".into() });
    }

    #[test]
    fn depth_limit_is_the_same_for_both_entry_points() {
        let config = CompareConfig::new().with_max_depth(1);
        let expected = vec![person("Bart", "Simpson", 10)];
        let actual = vec![person("Bart", "Simpson", 10)];
        let limit_hit = || CompareError::DepthExceeded {
            limit: 1,
            path: "$[0].Age".into(),
        };

        let objects = ObjectComparer::<Vec<Person>>::with_config(config.clone());
        let sequences = SequenceComparer::<Person>::with_config(config);
        assert_eq!(objects.compare(&expected, &actual), Err(limit_hit()));
        assert_eq!(sequences.compare(Some(&expected), Some(&actual)), Err(limit_hit()));
    }

    #[test]
    fn depth_limit() {
        let a = Person {
            mother: Some(Box::new(person("Mona", "Simpson", 70))),
            ..person("Homer", "Simpson", 39)
        };
        let b = Person {
            mother: Some(Box::new(person("Mona", "Simpson", 70))),
            ..person("Homer", "Simpson", 39)
        };

        assert!(compare_objects(&a, &b, &CompareConfig::new().with_max_depth(2)).is_ok());

        let err = compare_objects(&a, &b, &CompareConfig::new().with_max_depth(1)).unwrap_err();
        assert_eq!(
            err,
            CompareError::DepthExceeded {
                limit: 1,
                path: "$.Mother.Age".into(),
            }
        );
    }

    // -----------------------------------------------------------------------
    // 10. Floats
    // -----------------------------------------------------------------------
    #[test]
    fn nan_is_equal_to_itself() {
        assert_deep_eq!(f64::NAN, f64::NAN);
        assert_sequences_eq!(Some(&vec![1.0, f64::NAN]), Some(&vec![1.0, f64::NAN]));
        assert!(compare_objects(&f64::NAN, &1.0, &CompareConfig::default()).is_err());
    }
}
