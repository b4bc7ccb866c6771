//! Internal testing utilities for the numat crates.

use std::fmt::Debug;
use std::panic::{RefUnwindSafe, UnwindSafe};

/// Utility for writing table-driven tests.
///
/// A test defines a `Case` struct describing one scenario, builds a
/// collection of cases, and calls [`test_each`](TestCases::test_each) with
/// the assertion body. Each case runs with panics caught, so a failure in
/// one case does not hide failures in the others. If any case panics, the
/// whole test fails with the debug representations of the failing cases.
///
/// ```
/// use numat_testing::TestCases;
///
/// #[derive(Debug)]
/// struct Case {
///     input: u32,
///     expected: u32,
/// }
///
/// let cases = [Case { input: 3, expected: 9 }, Case { input: 4, expected: 16 }];
///
/// cases.test_each(|case| {
///     assert_eq!(case.input * case.input, case.expected);
/// });
/// ```
///
/// Cases are passed to the test function by reference so their debug
/// representation is still available if the function panics. When an owned
/// case is more convenient, use [`test_each_value`](TestCases::test_each_value),
/// which formats the case up front and then moves it into the closure.
///
/// Both the cases and the test function must be unwind safe. Fields with
/// interior mutability can be wrapped in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) or replaced by plain
/// data from which the test body builds the complex value itself.
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Run `test` against every case, then panic if any case failed.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;

    /// Like [`test_each`](TestCases::test_each), but passes cases by value.
    fn test_each_value(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe;
}

fn report_failures(failures: Vec<String>) {
    assert!(
        failures.is_empty(),
        "{} test cases failed: [{}]",
        failures.len(),
        failures.join(", ")
    );
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            if std::panic::catch_unwind(|| test(&case)).is_err() {
                failures.push(format!("{:?}", case));
            }
        }
        report_failures(failures);
    }

    fn test_each_value(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            let case_str = format!("{:?}", case);
            let test = &test;
            if std::panic::catch_unwind(move || test(case)).is_err() {
                failures.push(case_str);
            }
        }
        report_failures(failures);
    }
}

#[cfg(test)]
mod tests {
    use super::TestCases;

    #[derive(Debug)]
    struct Case {
        x: i32,
    }

    #[test]
    fn test_test_each_success() {
        let cases = [Case { x: 1 }, Case { x: 2 }];
        cases.test_each(|case| assert!(case.x > 0));
    }

    #[test]
    #[should_panic(expected = "1 test cases failed")]
    fn test_test_each_failure() {
        let cases = [Case { x: 1 }, Case { x: -2 }];
        cases.test_each(|case| assert!(case.x > 0));
    }

    #[test]
    #[should_panic(expected = "2 test cases failed")]
    fn test_test_each_value_failure() {
        let cases = [Case { x: -1 }, Case { x: -2 }];
        cases.test_each_value(|case| assert!(case.x > 0));
    }
}
