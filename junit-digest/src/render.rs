// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format selection and helpers shared by both renderers.

use crate::{
    errors::{ParseError, UnknownFormatError},
    html, markdown,
    report::{SuiteSummary, TestCaseResult},
};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// The output formats a report can be rendered into.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ReportFormat {
    /// A heading-and-table Markdown document.
    #[default]
    Markdown,
    /// A self-contained HTML document with collapsible sections.
    Html,
}

impl ReportFormat {
    /// The canonical lowercase name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = UnknownFormatError;

    /// Case-insensitive: `markdown` and `html` are the only recognized
    /// names.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.eq_ignore_ascii_case("markdown") {
            Ok(ReportFormat::Markdown)
        } else if input.eq_ignore_ascii_case("html") {
            Ok(ReportFormat::Html)
        } else {
            Err(UnknownFormatError {
                input: input.to_owned(),
            })
        }
    }
}

/// Renders the parsed report into the selected format, returning the
/// complete text document.
pub fn render(root: &SuiteSummary, format: ReportFormat) -> String {
    match format {
        ReportFormat::Markdown => markdown::render(root),
        ReportFormat::Html => html::render(root),
    }
}

/// Parses a JUnit XML document and renders it in one step.
///
/// Convenience for callers that do not need the intermediate
/// [`SuiteSummary`] tree.
pub fn digest(xml: &str, format: ReportFormat) -> Result<String, ParseError> {
    let root = crate::parse_report(xml)?;
    Ok(render(&root, format))
}

/// Formats an elapsed time with at most 3 fractional digits, dropping
/// trailing zeros.
pub(crate) fn format_seconds(seconds: f64) -> String {
    let formatted = format!("{seconds:.3}");
    // `{:.3}` always emits a decimal point, so zero-trimming stops there.
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

/// Groups test cases by class name: classes sorted lexicographically
/// ascending, document order preserved within each class.
pub(crate) fn group_by_class(cases: &[TestCaseResult]) -> BTreeMap<&str, Vec<&TestCaseResult>> {
    let mut groups: BTreeMap<&str, Vec<&TestCaseResult>> = BTreeMap::new();
    for case in cases {
        groups.entry(case.class_name.as_str()).or_default().push(case);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TestStatus;
    use test_case::test_case;

    #[test_case(0.0, "0"; "zero")]
    #[test_case(1.5, "1.5"; "one decimal")]
    #[test_case(3.0, "3"; "whole number")]
    #[test_case(10.0, "10"; "two digit whole number")]
    #[test_case(0.125, "0.125"; "three decimals")]
    #[test_case(3.14159, "3.142"; "rounds to three decimals")]
    #[test_case(42.25, "42.25"; "trailing zero dropped")]
    fn seconds_formatting(seconds: f64, expected: &str) {
        assert_eq!(format_seconds(seconds), expected);
    }

    #[test_case("markdown", ReportFormat::Markdown; "lowercase markdown")]
    #[test_case("MARKDOWN", ReportFormat::Markdown; "uppercase markdown")]
    #[test_case("html", ReportFormat::Html; "lowercase html")]
    #[test_case("Html", ReportFormat::Html; "mixed case html")]
    fn format_from_str(input: &str, expected: ReportFormat) {
        assert_eq!(input.parse::<ReportFormat>().unwrap(), expected);
    }

    #[test]
    fn format_from_str_rejects_unknown() {
        let err = "pdf".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err.input, "pdf");
    }

    #[test]
    fn grouping_sorts_classes_and_keeps_document_order() {
        let mut cases = vec![];
        for (class, name) in [
            ("z.Last", "one"),
            ("a.First", "two"),
            ("z.Last", "three"),
            ("a.First", "four"),
        ] {
            let mut case = TestCaseResult::new(name, TestStatus::Passed);
            case.class_name = class.to_owned();
            cases.push(case);
        }

        let groups = group_by_class(&cases);
        let classes: Vec<_> = groups.keys().copied().collect();
        assert_eq!(classes, ["a.First", "z.Last"]);

        let first_names: Vec<_> = groups["a.First"].iter().map(|c| c.name.as_str()).collect();
        assert_eq!(first_names, ["two", "four"]);
        let last_names: Vec<_> = groups["z.Last"].iter().map(|c| c.name.as_str()).collect();
        assert_eq!(last_names, ["one", "three"]);
    }
}
