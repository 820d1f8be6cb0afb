// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory report model: suites, test cases, and normalized statuses.

use std::fmt;

/// Name given to the synthetic root suite when a document declares several
/// top-level suites.
pub const ALL_TESTSUITES_NAME: &str = "All TestSuites";

/// Placeholder name for a suite whose `name` attribute is absent.
pub const UNNAMED_SUITE: &str = "Unnamed";

/// Placeholder name for a test case whose `name` attribute is absent.
pub const UNNAMED_TEST: &str = "UnnamedTest";

/// A test suite, or the synthetic root aggregating several suites.
///
/// For a suite parsed from a `testsuite` element, the counters are the
/// document's own declared attributes, even if they disagree with the
/// enumerated test cases. For a synthetic root, the counters are the sum of
/// the immediate children's, computed as children are added and never
/// recomputed afterwards.
#[derive(Clone, Debug)]
pub struct SuiteSummary {
    /// The name of this suite.
    pub name: String,

    /// The total number of tests declared by the suite.
    pub tests: usize,

    /// The number of failed tests declared by the suite.
    pub failures: usize,

    /// The number of errored tests declared by the suite.
    pub errors: usize,

    /// The number of skipped tests declared by the suite.
    pub skipped: usize,

    /// The overall time taken by the suite, in seconds.
    pub time_seconds: f64,

    /// The test cases of this suite, in document order.
    pub test_cases: Vec<TestCaseResult>,

    /// Child suites, in document order.
    ///
    /// The parser only populates this list for the synthetic root; renderers
    /// recurse through it unconditionally, whatever its depth.
    pub child_suites: Vec<SuiteSummary>,
}

impl SuiteSummary {
    /// Creates a new `SuiteSummary` with the given name and zeroed counters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: 0,
            failures: 0,
            errors: 0,
            skipped: 0,
            time_seconds: 0.0,
            test_cases: vec![],
            child_suites: vec![],
        }
    }

    /// Adds a child suite, folding its counters and elapsed time into this
    /// suite's own.
    pub fn add_child_suite(&mut self, child: SuiteSummary) -> &mut Self {
        self.tests += child.tests;
        self.failures += child.failures;
        self.errors += child.errors;
        self.skipped += child.skipped;
        self.time_seconds += child.time_seconds;
        self.child_suites.push(child);
        self
    }

    /// The passed count derived from the declared counters:
    /// `tests - failures - errors - skipped`, clamped at zero.
    ///
    /// Declared counters are trusted as-is, so the subtraction can go
    /// negative on inconsistent documents; the clamp keeps the rendered
    /// count non-negative.
    pub fn passed(&self) -> usize {
        self.tests
            .saturating_sub(self.failures)
            .saturating_sub(self.errors)
            .saturating_sub(self.skipped)
    }
}

/// One executed test.
#[derive(Clone, Debug)]
pub struct TestCaseResult {
    /// The `classname` of the test, or the empty string if absent.
    pub class_name: String,

    /// The name of the test.
    pub name: String,

    /// The normalized outcome of the test.
    pub status: TestStatus,

    /// The time taken by the test, in seconds.
    pub time_seconds: f64,

    /// The failure or skip message.
    ///
    /// Reserved; the parser does not populate this yet.
    pub message: Option<String>,

    /// The long-form failure description.
    ///
    /// Reserved; the parser does not populate this yet.
    pub details: Option<String>,
}

impl TestCaseResult {
    /// Creates a new `TestCaseResult` with the given name and status.
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            class_name: String::new(),
            name: name.into(),
            status,
            time_seconds: 0.0,
            message: None,
            details: None,
        }
    }
}

/// The normalized outcome of a test case.
///
/// Every raw `status` attribute value maps into exactly one of these four
/// variants; see [`TestStatus::from_raw`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum TestStatus {
    /// The test passed.
    Passed,
    /// The test failed an assertion.
    Failed,
    /// The test aborted with an unexpected error.
    Error,
    /// The test was not run.
    Skipped,
}

impl TestStatus {
    /// Normalizes a raw `status` attribute value, case-insensitively.
    ///
    /// The mapping is total: absent values and values outside the recognized
    /// set normalize to `Passed`. The whole policy lives in this one match.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_uppercase).as_deref() {
            Some("PASS") => TestStatus::Passed,
            Some("FAIL") => TestStatus::Failed,
            Some("ERROR") => TestStatus::Error,
            Some("SKIPPED" | "IGNORE") => TestStatus::Skipped,
            Some(_) | None => TestStatus::Passed,
        }
    }

    /// The display badge for this status, shared by every renderer.
    pub fn badge(self) -> &'static str {
        match self {
            TestStatus::Passed => "✔️ Passed",
            TestStatus::Failed => "❌ Failed",
            TestStatus::Error => "⚠️ Error",
            TestStatus::Skipped => "➖ Skipped",
        }
    }

    /// The lowercase category name, used as a CSS class by the HTML
    /// renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Error => "error",
            TestStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
