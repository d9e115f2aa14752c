//! Panicking assertions for tests.

/// Assert that two values are structurally equal, panicking with the
/// mismatch description otherwise.
///
/// An optional third argument supplies a [`CompareConfig`](crate::CompareConfig).
///
/// ```rust
/// use likeness::assert_deep_eq;
///
/// assert_deep_eq!(vec![1, 2, 3], vec![1, 2, 3]);
/// ```
///
/// ```rust,should_panic
/// use likeness::assert_deep_eq;
///
/// assert_deep_eq!(Some("Porky"), Some("Pork"));
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assert_deep_eq!($expected, $actual, &$crate::CompareConfig::default())
    };
    ($expected:expr, $actual:expr, $config:expr $(,)?) => {
        match $crate::compare_objects(&$expected, &$actual, $config) {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(err) => {
                ::std::panic!("assertion failed: structural equality\n{}", err)
            }
        }
    };
}

/// Assert that two optional sequences are structurally equal.
///
/// ```rust
/// use likeness::assert_sequences_eq;
///
/// let names = vec!["Bugs", "Daffy"];
/// assert_sequences_eq!(Some(&names), Some(&names));
/// assert_sequences_eq!(None::<&Vec<i32>>, None::<&Vec<i32>>);
/// ```
#[macro_export]
macro_rules! assert_sequences_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assert_sequences_eq!($expected, $actual, &$crate::CompareConfig::default())
    };
    ($expected:expr, $actual:expr, $config:expr $(,)?) => {
        match $crate::compare_sequences($expected, $actual, $config) {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(err) => {
                ::std::panic!("assertion failed: structural equality\n{}", err)
            }
        }
    };
}
